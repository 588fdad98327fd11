//! Bulk feed downloads
//!
//! Feeds are served as `.csv.gz` files, so successful responses carry a
//! [`ResponseBody::Raw`](crate::ResponseBody::Raw) body.

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Feeds API interface
#[derive(Clone)]
pub struct FeedsApi {
    client: SecurityTrailsClient,
}

impl FeedsApi {
    /// Create a new feeds API interface
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Zone file of apex domains, optionally with nameservers
    /// (`apex_domain,nameservers`, nameservers `|`-delimited)
    ///
    /// GET /feeds/domains/{feed_type}
    pub async fn domains(
        &self,
        feed_type: DomainFeedType,
        params: &DomainFeedParams,
    ) -> ApiResult<ApiResponse> {
        let spec = catalog::FEED_DOMAINS.request(
            &[feed_type.as_str()],
            params.to_query(),
            RequestBody::None,
        )?;
        self.client.execute(spec).await
    }

    /// DMARC records (`apex_domain`)
    ///
    /// GET /feeds/dmarc/{feed_type}
    pub async fn dmarc(&self, feed_type: DmarcFeedType, date: Option<&str>) -> ApiResult<ApiResponse> {
        let query = QueryParams::new().with_opt("date", date);
        let spec = catalog::FEED_DMARC.request(&[feed_type.as_str()], query, RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Subdomains (`apex_domain,hostname`), optionally for a single TLD
    ///
    /// GET /feeds/subdomains/{feed_type}
    pub async fn subdomains(
        &self,
        feed_type: SubdomainFeedType,
        params: &SubdomainFeedParams,
    ) -> ApiResult<ApiResponse> {
        let spec = catalog::FEED_SUBDOMAINS.request(
            &[feed_type.as_str()],
            params.to_query(),
            RequestBody::None,
        )?;
        self.client.execute(spec).await
    }
}

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Value sent on the wire
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Which domains a domain feed lists
    DomainFeedType {
        /// All currently active domains
        #[default]
        All => "all",
        /// Domains deleted as of today
        Deleted => "deleted",
        /// Domains first seen today
        New => "new",
        /// Domains enabled today: new ones plus re-registrations
        Registered => "registered",
    }
}

wire_enum! {
    /// Which DMARC records a DMARC feed lists
    DmarcFeedType {
        /// Complete list
        #[default]
        All => "all",
        /// First seen records
        New => "new",
    }
}

wire_enum! {
    /// Which subdomains a subdomain feed lists
    SubdomainFeedType {
        /// All currently active subdomains
        #[default]
        All => "all",
        /// Subdomains first seen today
        New => "new",
        /// Subdomains deleted as of today
        Deleted => "deleted",
    }
}

wire_enum! {
    /// TLD class filter for domain feeds
    DomainFeedFilter {
        /// Country-code TLDs
        #[default]
        Cctld => "cctld",
        /// Generic TLDs
        Gtld => "gtld",
    }
}

/// Optional parameters for [`FeedsApi::domains`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainFeedParams {
    /// Restrict to country-code or generic TLDs
    pub filter: Option<DomainFeedFilter>,
    /// Restrict to a single TLD, e.g. `com`
    pub tld: Option<String>,
    /// Include nameservers (supported for most gTLDs)
    pub ns: Option<bool>,
    /// Day to fetch, `YYYY-MM-DD`; latest available when unset
    pub date: Option<String>,
}

impl DomainFeedParams {
    /// Create new params with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by TLD class
    pub fn with_filter(mut self, filter: DomainFeedFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Filter by TLD
    pub fn with_tld(mut self, tld: impl Into<String>) -> Self {
        self.tld = Some(tld.into());
        self
    }

    /// Include or exclude nameservers
    pub fn with_ns(mut self, ns: bool) -> Self {
        self.ns = Some(ns);
        self
    }

    /// Fetch a specific day
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("filter", self.filter)
            .with_opt("tld", self.tld.as_deref())
            .with_opt("ns", self.ns)
            .with_opt("date", self.date.as_deref())
    }
}

/// Optional parameters for [`FeedsApi::subdomains`]
///
/// The service requires `tld` whenever the `bytld` filter is used and vice
/// versa; [`with_tld`](Self::with_tld) sets both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdomainFeedParams {
    /// Restrict to a single TLD, e.g. `com`
    pub tld: Option<String>,
    /// Day to fetch, `YYYY-MM-DD`; available from 2019-10-01
    pub date: Option<String>,
}

impl SubdomainFeedParams {
    /// Create new params with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Only list subdomains under `tld`
    pub fn with_tld(mut self, tld: impl Into<String>) -> Self {
        self.tld = Some(tld.into());
        self
    }

    /// Fetch a specific day
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("filter", self.tld.as_ref().map(|_| "bytld"))
            .with_opt("tld", self.tld.as_deref())
            .with_opt("date", self.date.as_deref())
    }
}
