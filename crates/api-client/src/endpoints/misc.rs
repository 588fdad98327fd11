//! Hostname submission

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use std::path::Path;

/// Misc API interface
#[derive(Clone)]
pub struct MiscApi {
    client: SecurityTrailsClient,
}

impl MiscApi {
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Submit a file of discovered hostnames, one per line.
    ///
    /// The file is streamed as-is; gzip'd files are accepted by the service
    /// when sent with `Content-Encoding: gzip`, which this call does not set.
    ///
    /// POST /submit/hostnames
    pub async fn submit_hostnames(&self, file: impl AsRef<Path>) -> ApiResult<ApiResponse> {
        let spec = catalog::SUBMIT_HOSTNAMES.request(
            &[],
            QueryParams::new(),
            RequestBody::File(file.as_ref().to_path_buf()),
        )?;
        self.client.execute(spec).await
    }
}
