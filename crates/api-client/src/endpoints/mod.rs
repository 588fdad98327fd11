//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one section of the
//! SecurityTrails API. Every method resolves a [`catalog`](crate::catalog)
//! entry and dispatches it unchanged through the client; responses are
//! returned as received.
//!
//! | Module | Accessor | Endpoints |
//! |--------|----------|-----------|
//! | `general` | `general()` | `/ping`, `/account/usage`, `/scroll/{id}` |
//! | `company` | `company()` | `/company/{domain}`, `/company/{domain}/associated-ips` |
//! | `domains` | `domains()` | `/domain/{hostname}/…`, `/domains/list`, `/domains/stats` |
//! | `history` | `history()` | `/history/{hostname}/dns/{type}`, `/history/{hostname}/whois` |
//! | `ips` | `ips()` | `/ips/…` |
//! | `feeds` | `feeds()` | `/feeds/domains`, `/feeds/dmarc`, `/feeds/subdomains` |
//! | `firehose` | `firehose()` | `/firehose/ct-logs` |
//! | `misc` | `misc()` | `/submit/hostnames` |

pub mod company;
pub mod domains;
pub mod feeds;
pub mod firehose;
pub mod general;
pub mod history;
pub mod ips;
pub mod misc;

pub use company::CompanyApi;
pub use domains::{CertificateStatus, DomainsApi};
pub use feeds::{
    DmarcFeedType, DomainFeedFilter, DomainFeedParams, DomainFeedType, FeedsApi,
    SubdomainFeedParams, SubdomainFeedType,
};
pub use firehose::FirehoseApi;
pub use general::GeneralApi;
pub use history::{HistoryApi, RecordType};
pub use ips::IpsApi;
pub use misc::MiscApi;
