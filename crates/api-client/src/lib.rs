//! Client for the SecurityTrails domain-intelligence API
//!
//! This crate turns logical API calls (domain, IP, WHOIS, DNS history,
//! certificate and bulk-feed lookups) into HTTP requests and returns each
//! outcome as a single [`ApiResult`].
//!
//! # Features
//!
//! - **Explicit configuration**: each client owns its API key and host; no
//!   process-wide state
//! - **One dispatch path**: every call goes through [`SecurityTrailsClient`],
//!   which applies the `APIKEY` header, content headers and error mapping
//! - **Endpoint catalog**: endpoints are data ([`catalog`]); typed groups
//!   such as [`DomainsApi`](endpoints::DomainsApi) are thin call-throughs
//! - **No hidden behaviour**: no retries, caching or rate limiting; a failed
//!   call returns exactly one [`ApiError`]
//!
//! # Example
//!
//! ```rust,no_run
//! use securitytrails_api_client::{ClientConfig, SecurityTrailsClient};
//! use securitytrails_api_client::endpoints::CertificateStatus;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SecurityTrailsClient::with_config(ClientConfig::new("your-api-key"))?;
//!
//!     let ping = client.general().ping().await?;
//!     println!("ping: {}", ping.status);
//!
//!     let certs = client
//!         .domains()
//!         .ssl("example.com", false, CertificateStatus::Valid, 1)
//!         .await?;
//!     println!("{:?}", certs.as_json());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod query;
pub mod request;
pub mod response;

pub use client::SecurityTrailsClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, ApiResult};
pub use query::{build_query_string, QueryParams};
pub use request::{HttpMethod, RequestBody, RequestSpec};
pub use response::{ApiResponse, ResponseBody};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::SecurityTrailsClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{
        CertificateStatus, CompanyApi, DomainsApi, FeedsApi, FirehoseApi, GeneralApi, HistoryApi,
        IpsApi, MiscApi, RecordType,
    };
    pub use crate::error::{ApiError, ApiErrorKind, ApiResult};
    pub use crate::query::QueryParams;
    pub use crate::response::{ApiResponse, ResponseBody};
}
