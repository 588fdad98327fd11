//! Firehose endpoints

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;

/// Firehose API interface
#[derive(Clone)]
pub struct FirehoseApi {
    client: SecurityTrailsClient,
}

impl FirehoseApi {
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Certificate Transparency log entries between two UNIX timestamps.
    ///
    /// Without `start` the stream begins when the call is sent; without `end`
    /// it does not stop. The body is returned as received.
    ///
    /// GET /firehose/ct-logs
    pub async fn ct(&self, start: Option<i64>, end: Option<i64>) -> ApiResult<ApiResponse> {
        let query = QueryParams::new()
            .with_opt("start", start)
            .with_opt("end", end);
        let spec = catalog::FIREHOSE_CT.request(&[], query, RequestBody::None)?;
        self.client.execute(spec).await
    }
}
