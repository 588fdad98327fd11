//! Domain endpoints
//!
//! Current DNS data, subdomains, tags, WHOIS, search, statistics, associated
//! domains and SSL certificates for a hostname.

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Domains API interface
#[derive(Clone)]
pub struct DomainsApi {
    client: SecurityTrailsClient,
}

impl DomainsApi {
    /// Create a new domains API interface
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Current data and statistics for a hostname
    ///
    /// GET /domain/{hostname}
    pub async fn details(&self, hostname: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::DOMAIN_DETAILS.request(&[hostname], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Child and sibling subdomains of a hostname
    ///
    /// GET /domain/{hostname}/subdomains
    pub async fn subdomains(
        &self,
        hostname: &str,
        children_only: bool,
        include_inactive: bool,
    ) -> ApiResult<ApiResponse> {
        let query = QueryParams::new()
            .with("children_only", children_only)
            .with("include_inactive", include_inactive);
        let spec = catalog::DOMAIN_SUBDOMAINS.request(&[hostname], query, RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Tags for a hostname
    ///
    /// GET /domain/{hostname}/tags
    pub async fn tags(&self, hostname: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::DOMAIN_TAGS.request(&[hostname], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Current WHOIS data for a hostname
    ///
    /// GET /domain/{hostname}/whois
    pub async fn whois(&self, hostname: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::DOMAIN_WHOIS.request(&[hostname], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Filter and search domain records.
    ///
    /// `scroll` only works with a DSL `query` body, not with `filter`. Pages
    /// hold 100 results, up to 10000 in total; use scrolling beyond that.
    ///
    /// POST /domains/list
    pub async fn search(
        &self,
        include_ips: bool,
        page: u32,
        scroll: bool,
        body: Option<&Value>,
    ) -> ApiResult<ApiResponse> {
        let query = QueryParams::new()
            .with("include_ips", include_ips)
            .with("page", page)
            .with("scroll", scroll);
        let spec = catalog::DOMAIN_SEARCH.request(&[], query, json_body(body))?;
        self.client.execute(spec).await
    }

    /// Statistics for a domain search
    ///
    /// POST /domains/stats
    pub async fn statistics(&self, body: Option<&Value>) -> ApiResult<ApiResponse> {
        let spec = catalog::DOMAIN_STATISTICS.request(&[], QueryParams::new(), json_body(body))?;
        self.client.execute(spec).await
    }

    /// Domains related to a hostname, up to 10000 results
    ///
    /// GET /domain/{hostname}/associated
    pub async fn associated(&self, hostname: &str, page: u32) -> ApiResult<ApiResponse> {
        let query = QueryParams::new().with("page", page);
        let spec = catalog::DOMAIN_ASSOCIATED.request(&[hostname], query, RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Current and historical certificates for a hostname, paginated
    ///
    /// GET /domain/{hostname}/ssl
    pub async fn ssl(
        &self,
        hostname: &str,
        include_subdomains: bool,
        status: CertificateStatus,
        page: u32,
    ) -> ApiResult<ApiResponse> {
        let query = QueryParams::new()
            .with("include_subdomains", include_subdomains)
            .with("status", status)
            .with("page", page);
        let spec = catalog::DOMAIN_SSL.request(&[hostname], query, RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Current and historical certificates for a hostname, all results
    ///
    /// GET /domain/{hostname}/ssl_stream
    pub async fn ssl_stream(
        &self,
        hostname: &str,
        include_subdomains: bool,
        status: CertificateStatus,
    ) -> ApiResult<ApiResponse> {
        let query = QueryParams::new()
            .with("include_subdomains", include_subdomains)
            .with("status", status);
        let spec = catalog::DOMAIN_SSL_STREAM.request(&[hostname], query, RequestBody::None)?;
        self.client.execute(spec).await
    }
}

/// `None` lets the catalog substitute an empty JSON object
pub(crate) fn json_body(body: Option<&Value>) -> RequestBody {
    body.map_or(RequestBody::None, |v| RequestBody::Json(v.clone()))
}

/// Certificate status filter for SSL lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    /// Certificates that are currently valid
    #[default]
    Valid,
    /// Valid and expired certificates
    All,
    /// Expired certificates only
    Expired,
}

impl CertificateStatus {
    /// Value sent on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::All => "all",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
