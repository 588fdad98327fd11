//! Request engine
//!
//! [`SecurityTrailsClient`] is the single point through which every call
//! reaches the network. It applies the `APIKEY` and content headers, joins
//! the configured host with the request path, and normalizes the outcome
//! into [`ApiResponse`] or [`ApiError`]. It never retries.

use crate::catalog;
use crate::config::ClientConfig;
use crate::endpoints::{
    CompanyApi, DomainsApi, FeedsApi, FirehoseApi, GeneralApi, HistoryApi, IpsApi, MiscApi,
};
use crate::error::{ApiError, ApiResult};
use crate::query::QueryParams;
use crate::request::{HttpMethod, RequestBody, RequestSpec};
use crate::response::{is_json_content_type, ApiResponse, ResponseBody};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use reqwest::{Body, Client, Response};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, Span};
use uuid::Uuid;

/// API key header expected by SecurityTrails (`APIKEY`; names are case-insensitive)
const APIKEY_HEADER: &str = "apikey";

/// SecurityTrails API client
///
/// Cheap to clone; clones share the immutable configuration and the
/// underlying `reqwest` client. Holds no per-call state, so calls may be
/// issued concurrently from any number of tasks.
#[derive(Clone)]
pub struct SecurityTrailsClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl std::fmt::Debug for SecurityTrailsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityTrailsClient")
            .field("host", &self.config.host)
            .field("has_api_key", &self.config.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl SecurityTrailsClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a client for the default host with the given key
    pub fn with_api_key(api_key: impl Into<String>) -> ApiResult<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config("user_agent is not a valid header value"))?;
        default_headers.insert(USER_AGENT, user_agent);

        if let Some(ref key) = config.api_key {
            let mut value = HeaderValue::from_str(key)
                .map_err(|_| ApiError::config("api_key is not a valid header value"))?;
            value.set_sensitive(true);
            default_headers.insert(APIKEY_HEADER, value);
        }

        let mut builder = Client::builder().default_headers(default_headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder.build()?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL, without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Absolute URL for `path`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url())
        } else {
            format!("{}/{path}", self.base_url())
        }
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Ping, usage and scrolling
    #[must_use]
    pub fn general(&self) -> GeneralApi {
        GeneralApi::new(self.clone())
    }

    /// Company endpoints
    #[must_use]
    pub fn company(&self) -> CompanyApi {
        CompanyApi::new(self.clone())
    }

    /// Domain endpoints
    #[must_use]
    pub fn domains(&self) -> DomainsApi {
        DomainsApi::new(self.clone())
    }

    /// DNS and WHOIS history endpoints
    #[must_use]
    pub fn history(&self) -> HistoryApi {
        HistoryApi::new(self.clone())
    }

    /// IP endpoints
    #[must_use]
    pub fn ips(&self) -> IpsApi {
        IpsApi::new(self.clone())
    }

    /// Bulk feed downloads
    #[must_use]
    pub fn feeds(&self) -> FeedsApi {
        FeedsApi::new(self.clone())
    }

    /// Firehose streams
    #[must_use]
    pub fn firehose(&self) -> FirehoseApi {
        FirehoseApi::new(self.clone())
    }

    /// Hostname submission
    #[must_use]
    pub fn misc(&self) -> MiscApi {
        MiscApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    /// Invoke a catalog endpoint by logical name
    ///
    /// See [`Endpoint::request`](catalog::Endpoint::request) for how path
    /// arguments, query defaults and the body are resolved.
    pub async fn call(
        &self,
        name: &str,
        path_args: &[&str],
        query: QueryParams,
        body: RequestBody,
    ) -> ApiResult<ApiResponse> {
        let endpoint = catalog::find(name)
            .ok_or_else(|| ApiError::invalid_request(format!("unknown endpoint `{name}`")))?;
        let spec = endpoint.request(path_args, query, body)?;
        self.execute(spec).await
    }

    /// Dispatch a resolved request
    pub async fn execute(&self, spec: RequestSpec) -> ApiResult<ApiResponse> {
        let path = spec.path_and_query();
        match (spec.method, spec.body) {
            (HttpMethod::Get, RequestBody::None) => self.get(&path).await,
            (HttpMethod::Post, RequestBody::None) => self.post_json(&path, None).await,
            (HttpMethod::Post, RequestBody::Json(body)) => self.post_json(&path, Some(&body)).await,
            (HttpMethod::Post, RequestBody::File(file)) => self.post_file(&path, &file).await,
            (HttpMethod::Get, _) => Err(ApiError::invalid_request(format!(
                "GET {path} cannot carry a body"
            ))),
        }
    }

    /// Perform a GET request
    #[instrument(skip(self), fields(request_id))]
    pub async fn get(&self, path: &str) -> ApiResult<ApiResponse> {
        let request = self
            .request(HttpMethod::Get, path)
            .header(CONTENT_TYPE, "application/json");
        self.send(HttpMethod::Get, path, request).await
    }

    /// Perform a POST request with a JSON body; `None` sends `{}`
    #[instrument(skip(self, body), fields(request_id))]
    pub async fn post_json(&self, path: &str, body: Option<&Value>) -> ApiResult<ApiResponse> {
        let payload = match body {
            Some(value) => serde_json::to_vec(value)?,
            None => b"{}".to_vec(),
        };
        let request = self
            .request(HttpMethod::Post, path)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        self.send(HttpMethod::Post, path, request).await
    }

    /// Perform a POST request streaming a file as the body
    ///
    /// `Content-Length` is the file's size at the time it is opened. The file
    /// handle is owned by the request body and closed when the call returns,
    /// whatever the outcome.
    #[instrument(skip(self), fields(request_id))]
    pub async fn post_file(&self, path: &str, file_path: &Path) -> ApiResult<ApiResponse> {
        let file = tokio::fs::File::open(file_path)
            .await
            .map_err(|e| ApiError::file_access(file_path, e))?;
        let size = file
            .metadata()
            .await
            .map_err(|e| ApiError::file_access(file_path, e))?
            .len();

        debug!(file = %file_path.display(), size, "Uploading file");

        let request = self
            .request(HttpMethod::Post, path)
            .header(CONTENT_LENGTH, size)
            .body(Body::from(file));
        self.send(HttpMethod::Post, path, request).await
    }

    fn request(&self, method: HttpMethod, path: &str) -> reqwest::RequestBuilder {
        self.inner.request(method.into(), self.url(path))
    }

    /// Send a prepared request and normalize the outcome
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<ApiResponse> {
        let request_id = Uuid::new_v4().to_string();
        Span::current().record("request_id", request_id.as_str());

        debug!(request_id = %request_id, method = %method, path = %path, "Sending request");

        let start = Instant::now();
        let result = match request.send().await {
            Ok(response) => read_response(response).await,
            Err(e) => Err(ApiError::Transport(e)),
        };
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => debug!(
                request_id = %request_id,
                status = response.status,
                elapsed_ms = elapsed.as_millis(),
                "Request succeeded"
            ),
            Err(e) => debug!(
                request_id = %request_id,
                elapsed_ms = elapsed.as_millis(),
                error = %e,
                "Request failed"
            ),
        }

        result
    }
}

/// Turn a transport response into an `ApiResponse` or an error
async fn read_response(response: Response) -> ApiResult<ApiResponse> {
    let status = response.status();
    let headers = collect_headers(response.headers());

    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::http_status(status.as_u16(), message));
    }

    let is_json = headers
        .get("content-type")
        .is_some_and(|ct| is_json_content_type(ct));
    let bytes = response.bytes().await?;

    let body = if is_json && !bytes.is_empty() {
        ResponseBody::Json(serde_json::from_slice(&bytes)?)
    } else {
        ResponseBody::Raw(bytes.to_vec())
    };

    Ok(ApiResponse {
        status: status.as_u16(),
        headers,
        body,
    })
}

fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut out: HashMap<String, String> = HashMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        out.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }
    out
}
