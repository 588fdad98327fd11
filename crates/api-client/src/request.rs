//! Outbound request descriptions
//!
//! A [`RequestSpec`] is the fully resolved description of one call before
//! dispatch. It is built per call and moved into
//! [`SecurityTrailsClient::execute`](crate::SecurityTrailsClient::execute),
//! which consumes it.

use crate::query::QueryParams;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
}

impl HttpMethod {
    /// Method name as sent on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

/// Request payload
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    /// No payload
    #[default]
    None,
    /// JSON document, serialized as the request body
    Json(Value),
    /// File on disk, streamed as the request body
    File(PathBuf),
}

/// One outbound call: method, path, query and body
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the configured host, with a leading `/`
    pub path: String,
    /// Query parameters
    pub query: QueryParams,
    /// Payload
    pub body: RequestBody,
}

impl RequestSpec {
    /// A GET request for `path`
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: QueryParams::new(),
            body: RequestBody::None,
        }
    }

    /// A POST request for `path` with `body`
    pub fn post(path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: QueryParams::new(),
            body,
        }
    }

    /// Replace the query parameters
    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Path plus `?query` when any parameter is present
    #[must_use]
    pub fn path_and_query(&self) -> String {
        let qs = self.query.to_query_string();
        if qs.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{qs}", self.path)
        }
    }
}
