//! Normalized responses

use crate::error::ApiResult;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

/// Response payload
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body declared as JSON and parsed
    Json(Value),
    /// Any other body (e.g. `.csv.gz` feed downloads), untouched
    Raw(Vec<u8>),
}

/// A successful (2xx) response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lowercased; repeated headers joined with `, `
    pub headers: HashMap<String, String>,
    /// Parsed or raw body
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Look up a header by name, ignoring case
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The JSON body, if the response carried one
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Raw(_) => None,
        }
    }

    /// The body bytes as received, re-serialized for JSON bodies
    #[must_use]
    pub fn bytes(&self) -> Vec<u8> {
        match &self.body {
            ResponseBody::Json(value) => value.to_string().into_bytes(),
            ResponseBody::Raw(bytes) => bytes.clone(),
        }
    }

    /// Deserialize the body into `T`
    ///
    /// Raw bodies are parsed as JSON text first.
    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        let value = match &self.body {
            ResponseBody::Json(value) => serde_json::from_value(value.clone())?,
            ResponseBody::Raw(bytes) => serde_json::from_slice(bytes)?,
        };
        Ok(value)
    }
}

/// Whether a `Content-Type` value denotes a JSON document
pub(crate) fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || mime.ends_with("+json")
}
