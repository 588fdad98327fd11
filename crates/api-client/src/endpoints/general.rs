//! Ping, usage and scroll endpoints

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;

/// General API interface
#[derive(Clone)]
pub struct GeneralApi {
    client: SecurityTrailsClient,
}

impl GeneralApi {
    /// Create a new general API interface
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Test authentication and access to the API
    ///
    /// GET /ping
    pub async fn ping(&self) -> ApiResult<ApiResponse> {
        let spec = catalog::PING.request(&[], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Usage statistics for the current month
    ///
    /// GET /account/usage
    pub async fn usage(&self) -> ApiResult<ApiResponse> {
        let spec = catalog::USAGE.request(&[], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }

    /// Fetch the next batch of a scrolling search
    ///
    /// GET /scroll/{scroll_id}
    pub async fn scroll(&self, scroll_id: &str) -> ApiResult<ApiResponse> {
        let spec = catalog::SCROLL.request(&[scroll_id], QueryParams::new(), RequestBody::None)?;
        self.client.execute(spec).await
    }
}
