//! Company endpoints

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;

/// Company API interface
#[derive(Clone)]
pub struct CompanyApi {
    client: SecurityTrailsClient,
}

impl CompanyApi {
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Details for a company domain
    ///
    /// GET /company/{domain}
    pub async fn details(&self, domain: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::COMPANY_DETAILS.request(&[domain], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// IPs associated with a company domain, based on WHOIS data.
    /// Not paginated.
    ///
    /// GET /company/{domain}/associated-ips
    pub async fn associated_ips(&self, domain: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::COMPANY_ASSOCIATED_IPS.request(
            &[domain],
            QueryParams::new(),
            RequestBody::None,
        )?;
        self.client.execute(spec).await
    }
}
