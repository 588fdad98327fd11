//! Historical DNS and WHOIS endpoints

use crate::catalog;
use crate::client::SecurityTrailsClient;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::request::RequestBody;
use crate::response::ApiResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// History API interface
#[derive(Clone)]
pub struct HistoryApi {
    client: SecurityTrailsClient,
}

impl HistoryApi {
    pub(crate) fn new(client: SecurityTrailsClient) -> Self {
        Self { client }
    }

    /// Historical records of one type for a hostname, newest first
    ///
    /// GET /history/{hostname}/dns/{record_type}
    pub async fn dns(
        &self,
        hostname: &str,
        record_type: RecordType,
        page: u32,
    ) -> ApiResult<ApiResponse> {
        let query = QueryParams::new().with("page", page);
        let spec = catalog::HISTORY_DNS.request(
            &[hostname, record_type.as_str()],
            query,
            RequestBody::None,
        )?;
        self.client.execute(spec).await
    }

    /// Historical WHOIS records for a domain
    ///
    /// GET /history/{hostname}/whois
    pub async fn whois(&self, hostname: &str, page: u32) -> ApiResult<ApiResponse> {
        let query = QueryParams::new().with("page", page);
        let spec = catalog::HISTORY_WHOIS.request(&[hostname], query, RequestBody::None)?;
        self.client.execute(spec).await
    }
}

/// DNS record types with history
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    /// IPv4 address
    #[default]
    A,
    /// IPv6 address
    Aaaa,
    /// Mail exchanger
    Mx,
    /// Nameserver
    Ns,
    /// Start of authority
    Soa,
    /// Text record
    Txt,
}

impl RecordType {
    /// Path segment for this type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::Aaaa => "aaaa",
            Self::Mx => "mx",
            Self::Ns => "ns",
            Self::Soa => "soa",
            Self::Txt => "txt",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
