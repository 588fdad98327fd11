//! IP endpoints

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::endpoints::domains::json_body;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use serde_json::Value;

/// IPs API interface
#[derive(Clone)]
pub struct IpsApi {
    client: SecurityTrailsClient,
}

impl IpsApi {
    /// Create a new IPs API interface
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Neighbouring ranges of an IP or CIDR block, split into 16 groups
    ///
    /// GET /ips/nearby/{ip}
    pub async fn neighbors(&self, ip: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::IP_NEIGHBORS.request(&[ip], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Search IP addresses with a DSL query
    ///
    /// POST /ips/list
    pub async fn dsl(&self, page: u32, body: Option<&Value>) -> ApiResult<ApiResponse> {
        let query = QueryParams::new().with("page", page);
        let spec = catalog::IP_SEARCH.request(&[], query, json_body(body))?;
        self.client.execute(spec).await
    }

    /// Reverse DNS patterns, open ports and totals for a DSL query
    ///
    /// POST /ips/stats
    pub async fn statistics(&self, body: Option<&Value>) -> ApiResult<ApiResponse> {
        let spec = catalog::IP_STATISTICS.request(&[], QueryParams::new(), json_body(body))?;
        self.client.execute(spec).await
    }

    /// Current WHOIS information for an IPv4 address
    ///
    /// GET /ips/{ip}/whois
    pub async fn whois(&self, ip: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::IP_WHOIS.request(&[ip], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// User agents seen from an IPv4 address in the last 30 days
    ///
    /// GET /ips/{ip}/useragents
    pub async fn useragents(&self, ip: &str, page: u32) -> ApiResult<ApiResponse> {
        let query = QueryParams::new().with("page", page);
        let spec = catalog::IP_USERAGENTS.request(&[ip], query, RequestBody::None)?;
        self.client.execute(spec).await
    }
}
