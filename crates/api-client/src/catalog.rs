//! Static table of SecurityTrails endpoints
//!
//! Each [`Endpoint`] is data: a logical name, an HTTP method, a path template
//! with `{placeholder}` segments, the query parameters the endpoint accepts
//! (with their documented defaults) and the kind of body it takes.
//! [`Endpoint::request`] resolves one into a [`RequestSpec`].

use crate::error::{ApiError, ApiResult};
use crate::query::QueryParams;
use crate::request::{HttpMethod, RequestBody, RequestSpec};

/// Kind of body an endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// No body
    None,
    /// JSON document; an absent body is sent as `{}`
    Json,
    /// File upload
    File,
}

/// An optional query parameter and its documented default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    /// Parameter name
    pub name: &'static str,
    /// Value used when the caller does not mention the parameter
    pub default: Option<&'static str>,
}

const fn param(name: &'static str, default: &'static str) -> QueryParam {
    QueryParam {
        name,
        default: Some(default),
    }
}

const fn optional(name: &'static str) -> QueryParam {
    QueryParam {
        name,
        default: None,
    }
}

/// One remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Logical operation name
    pub name: &'static str,
    /// HTTP method
    pub method: HttpMethod,
    /// Path template, e.g. `/domain/{hostname}/ssl`
    pub path: &'static str,
    /// Accepted query parameters, in emission order
    pub query: &'static [QueryParam],
    /// Accepted body kind
    pub body: BodyKind,
}

const fn get(name: &'static str, path: &'static str, query: &'static [QueryParam]) -> Endpoint {
    Endpoint {
        name,
        method: HttpMethod::Get,
        path,
        query,
        body: BodyKind::None,
    }
}

const fn post(
    name: &'static str,
    path: &'static str,
    query: &'static [QueryParam],
    body: BodyKind,
) -> Endpoint {
    Endpoint {
        name,
        method: HttpMethod::Post,
        path,
        query,
        body,
    }
}

// General
/// Check the API key and connectivity
pub const PING: Endpoint = get("ping", "/ping", &[]);
/// Monthly quota usage for the account
pub const USAGE: Endpoint = get("usage", "/account/usage", &[]);
/// Next page of a scrolled search
pub const SCROLL: Endpoint = get("scroll", "/scroll/{scroll_id}", &[]);

// Company
/// Company details for a domain
pub const COMPANY_DETAILS: Endpoint = get("company_details", "/company/{domain}", &[]);
/// IP ranges associated with a company
pub const COMPANY_ASSOCIATED_IPS: Endpoint =
    get("company_associated_ips", "/company/{domain}/associated-ips", &[]);

// Domains
/// Current DNS data for a hostname
pub const DOMAIN_DETAILS: Endpoint = get("domain_details", "/domain/{hostname}", &[]);
/// Subdomains of a hostname
pub const DOMAIN_SUBDOMAINS: Endpoint = get(
    "domain_subdomains",
    "/domain/{hostname}/subdomains",
    &[param("children_only", "false"), param("include_inactive", "true")],
);
/// Tags of a hostname
pub const DOMAIN_TAGS: Endpoint = get("domain_tags", "/domain/{hostname}/tags", &[]);
/// Current WHOIS for a hostname
pub const DOMAIN_WHOIS: Endpoint = get("domain_whois", "/domain/{hostname}/whois", &[]);
/// Filter or DSL search over domains
pub const DOMAIN_SEARCH: Endpoint = post(
    "domain_search",
    "/domains/list",
    &[
        param("include_ips", "false"),
        param("page", "1"),
        param("scroll", "false"),
    ],
    BodyKind::Json,
);
/// Statistics for a domain search
pub const DOMAIN_STATISTICS: Endpoint =
    post("domain_statistics", "/domains/stats", &[], BodyKind::Json);
/// Domains associated with a hostname
pub const DOMAIN_ASSOCIATED: Endpoint = get(
    "domain_associated",
    "/domain/{hostname}/associated",
    &[param("page", "1")],
);
/// Certificates for a hostname, paginated
pub const DOMAIN_SSL: Endpoint = get(
    "domain_ssl",
    "/domain/{hostname}/ssl",
    &[
        param("include_subdomains", "false"),
        param("status", "valid"),
        param("page", "1"),
    ],
);
/// Certificates for a hostname, all at once
pub const DOMAIN_SSL_STREAM: Endpoint = get(
    "domain_ssl_stream",
    "/domain/{hostname}/ssl_stream",
    &[param("include_subdomains", "false"), param("status", "valid")],
);

// History
/// Historical DNS records of one type
pub const HISTORY_DNS: Endpoint = get(
    "history_dns",
    "/history/{hostname}/dns/{record_type}",
    &[param("page", "1")],
);
/// Historical WHOIS records
pub const HISTORY_WHOIS: Endpoint = get(
    "history_whois",
    "/history/{hostname}/whois",
    &[param("page", "1")],
);

// IPs
/// Neighbouring ranges of an IP or CIDR block
pub const IP_NEIGHBORS: Endpoint = get("ip_neighbors", "/ips/nearby/{ip}", &[]);
/// DSL search over IP addresses
pub const IP_SEARCH: Endpoint = post("ip_search", "/ips/list", &[param("page", "1")], BodyKind::Json);
/// Statistics for an IP search
pub const IP_STATISTICS: Endpoint = post("ip_statistics", "/ips/stats", &[], BodyKind::Json);
/// Current WHOIS for an IP address
pub const IP_WHOIS: Endpoint = get("ip_whois", "/ips/{ip}/whois", &[]);
/// User agents seen from an IP address
pub const IP_USERAGENTS: Endpoint = get(
    "ip_useragents",
    "/ips/{ip}/useragents",
    &[param("page", "1")],
);

// Feeds
/// Domain zone feed
pub const FEED_DOMAINS: Endpoint = get(
    "feed_domains",
    "/feeds/domains/{feed_type}",
    &[
        optional("filter"),
        optional("tld"),
        optional("ns"),
        optional("date"),
    ],
);
/// DMARC record feed
pub const FEED_DMARC: Endpoint = get("feed_dmarc", "/feeds/dmarc/{feed_type}", &[optional("date")]);
/// Subdomain feed
pub const FEED_SUBDOMAINS: Endpoint = get(
    "feed_subdomains",
    "/feeds/subdomains/{feed_type}",
    &[optional("filter"), optional("tld"), optional("date")],
);

// Firehose
/// Certificate Transparency firehose
pub const FIREHOSE_CT: Endpoint = get(
    "firehose_ct",
    "/firehose/ct-logs",
    &[optional("start"), optional("end")],
);

// Misc
/// Upload a file of hostnames for discovery
pub const SUBMIT_HOSTNAMES: Endpoint =
    post("submit_hostnames", "/submit/hostnames", &[], BodyKind::File);

/// Every known endpoint
pub const ALL: &[Endpoint] = &[
    PING,
    USAGE,
    SCROLL,
    COMPANY_DETAILS,
    COMPANY_ASSOCIATED_IPS,
    DOMAIN_DETAILS,
    DOMAIN_SUBDOMAINS,
    DOMAIN_TAGS,
    DOMAIN_WHOIS,
    DOMAIN_SEARCH,
    DOMAIN_STATISTICS,
    DOMAIN_ASSOCIATED,
    DOMAIN_SSL,
    DOMAIN_SSL_STREAM,
    HISTORY_DNS,
    HISTORY_WHOIS,
    IP_NEIGHBORS,
    IP_SEARCH,
    IP_STATISTICS,
    IP_WHOIS,
    IP_USERAGENTS,
    FEED_DOMAINS,
    FEED_DMARC,
    FEED_SUBDOMAINS,
    FIREHOSE_CT,
    SUBMIT_HOSTNAMES,
];

/// Look up an endpoint by logical name
#[must_use]
pub fn find(name: &str) -> Option<&'static Endpoint> {
    ALL.iter().find(|e| e.name == name)
}

impl Endpoint {
    /// Placeholder names in the path template, in order
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let path: &'static str = self.path;
        path.split('/')
            .filter_map(|seg| seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
    }

    /// Substitute `args` into the path template, in placeholder order.
    ///
    /// Each argument is percent-encoded into exactly one path segment, so it
    /// can never address another endpoint. The one exception is the CIDR
    /// block taken by [`IP_NEIGHBORS`], which may contain a single literal
    /// `/` between two encoded parts. Empty arguments, `.` and `..`, and
    /// arguments with surrounding whitespace are rejected.
    pub fn resolve_path(&self, args: &[&str]) -> ApiResult<String> {
        let expected = self.placeholders().count();
        if args.len() != expected {
            return Err(ApiError::invalid_request(format!(
                "{} takes {expected} path argument(s), got {}",
                self.name,
                args.len()
            )));
        }

        let mut args = args.iter();
        let mut segments = Vec::new();
        for segment in self.path.split('/') {
            if let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                // count checked above
                let value = args.next().copied().unwrap_or_default();
                segments.push(self.encode_argument(name, value)?);
            } else {
                segments.push(segment.to_string());
            }
        }
        Ok(segments.join("/"))
    }

    fn encode_argument(&self, name: &str, value: &str) -> ApiResult<String> {
        let invalid = |reason: &str| {
            ApiError::invalid_request(format!(
                "{}: path argument `{name}` {reason}",
                self.name
            ))
        };

        if value.is_empty() {
            return Err(invalid("is empty"));
        }
        if value.trim() != value {
            return Err(invalid("has surrounding whitespace"));
        }

        let parts: Vec<&str> = if self.name == IP_NEIGHBORS.name {
            value.splitn(2, '/').collect()
        } else {
            vec![value]
        };
        let bad_part = |p: &&str| {
            p.is_empty() || *p == "." || *p == ".." || (parts.len() > 1 && p.contains('/'))
        };
        if parts.iter().any(bad_part) {
            return Err(invalid("is not a single path segment"));
        }

        Ok(parts
            .iter()
            .map(|p| urlencoding::encode(p).into_owned())
            .collect::<Vec<_>>()
            .join("/"))
    }

    /// Resolve this endpoint into a request.
    ///
    /// Query parameters are emitted in the endpoint's declared order. A
    /// parameter the caller did not mention takes its documented default; one
    /// set to `None` is omitted. Undeclared parameters and a body of the wrong
    /// kind are rejected.
    pub fn request(
        &self,
        path_args: &[&str],
        query: QueryParams,
        body: RequestBody,
    ) -> ApiResult<RequestSpec> {
        if let Some(unknown) = query
            .keys()
            .find(|key| !self.query.iter().any(|p| p.name == *key))
        {
            return Err(ApiError::invalid_request(format!(
                "{} does not accept query parameter `{unknown}`",
                self.name
            )));
        }

        let body = match (self.body, body) {
            (BodyKind::None, RequestBody::None) => RequestBody::None,
            (BodyKind::Json, RequestBody::None) => RequestBody::Json(serde_json::json!({})),
            (BodyKind::Json, json @ RequestBody::Json(_)) => json,
            (BodyKind::File, file @ RequestBody::File(_)) => file,
            (kind, _) => {
                return Err(ApiError::invalid_request(format!(
                    "{} expects a body of kind {kind:?}",
                    self.name
                )))
            }
        };

        let mut resolved = QueryParams::new();
        for declared in self.query {
            if query.contains_key(declared.name) {
                resolved.set(declared.name, query.get(declared.name));
            } else {
                resolved.set(declared.name, declared.default);
            }
        }

        Ok(RequestSpec {
            method: self.method,
            path: self.resolve_path(path_args)?,
            query: resolved,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_names_are_unique() {
        let names: HashSet<_> = ALL.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_catalog_paths_are_absolute() {
        for endpoint in ALL {
            assert!(endpoint.path.starts_with('/'), "{}", endpoint.name);
            assert!(!endpoint.path.contains("//"), "{}", endpoint.name);
            if endpoint.method == HttpMethod::Get {
                assert_eq!(endpoint.body, BodyKind::None, "{}", endpoint.name);
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("domain_ssl"), Some(&DOMAIN_SSL));
        assert!(find("domain_ssl_v2").is_none());
    }

    #[test]
    fn test_placeholders() {
        let names: Vec<_> = HISTORY_DNS.placeholders().collect();
        assert_eq!(names, vec!["hostname", "record_type"]);
        assert_eq!(PING.placeholders().count(), 0);
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            HISTORY_DNS.resolve_path(&["example.com", "mx"]).unwrap(),
            "/history/example.com/dns/mx"
        );
        // CIDR notation is part of the documented argument
        assert_eq!(
            IP_NEIGHBORS.resolve_path(&["8.8.8.0/24"]).unwrap(),
            "/ips/nearby/8.8.8.0/24"
        );
    }

    #[test]
    fn test_resolve_path_rejects_bad_arguments() {
        assert!(DOMAIN_DETAILS.resolve_path(&[]).is_err());
        assert!(DOMAIN_DETAILS.resolve_path(&["a.com", "b.com"]).is_err());
        assert!(DOMAIN_DETAILS.resolve_path(&[""]).is_err());
        assert!(DOMAIN_DETAILS.resolve_path(&[".."]).is_err());
        assert!(DOMAIN_DETAILS.resolve_path(&["."]).is_err());
        assert!(IP_NEIGHBORS.resolve_path(&["../24"]).is_err());
        assert!(IP_NEIGHBORS.resolve_path(&["8.8.8.0/24/"]).is_err());
        assert!(IP_NEIGHBORS.resolve_path(&["1.1.1.0/24/.."]).is_err());
    }

    #[test]
    fn test_resolve_path_rejects_surrounding_whitespace() {
        let err = DOMAIN_DETAILS.resolve_path(&[" example.com"]).unwrap_err();
        assert!(err.to_string().contains("whitespace"));
        assert!(DOMAIN_DETAILS.resolve_path(&["example.com\n"]).is_err());
        assert!(DOMAIN_DETAILS.resolve_path(&["   "]).is_err());
    }

    #[test]
    fn test_resolve_path_encodes_one_segment() {
        assert_eq!(
            DOMAIN_DETAILS.resolve_path(&["../../account/usage"]).unwrap(),
            "/domain/..%2F..%2Faccount%2Fusage"
        );
        assert_eq!(
            SCROLL.resolve_path(&["a.com?x=1#f"]).unwrap(),
            "/scroll/a.com%3Fx%3D1%23f"
        );
    }

    #[test]
    fn test_request_fills_documented_defaults() {
        let spec = DOMAIN_SSL
            .request(
                &["example.com"],
                QueryParams::new().with("page", 2),
                RequestBody::None,
            )
            .unwrap();
        assert_eq!(
            spec.path_and_query(),
            "/domain/example.com/ssl?include_subdomains=false&status=valid&page=2"
        );
    }

    #[test]
    fn test_request_explicit_none_omits_default() {
        let spec = DOMAIN_SSL
            .request(
                &["example.com"],
                QueryParams::new().with_opt("page", None::<u32>),
                RequestBody::None,
            )
            .unwrap();
        assert_eq!(
            spec.path_and_query(),
            "/domain/example.com/ssl?include_subdomains=false&status=valid"
        );
    }

    #[test]
    fn test_request_rejects_undeclared_query() {
        let err = PING
            .request(&[], QueryParams::new().with("page", 1), RequestBody::None)
            .unwrap_err();
        assert!(err.to_string().contains("page"));
    }

    #[test]
    fn test_request_body_kinds() {
        let spec = IP_STATISTICS
            .request(&[], QueryParams::new(), RequestBody::None)
            .unwrap();
        assert_eq!(spec.body, RequestBody::Json(serde_json::json!({})));

        assert!(SUBMIT_HOSTNAMES
            .request(&[], QueryParams::new(), RequestBody::None)
            .is_err());
        assert!(PING
            .request(&[], QueryParams::new(), RequestBody::Json(serde_json::json!({})))
            .is_err());
    }
}
