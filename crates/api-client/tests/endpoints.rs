//! Integration tests for the endpoint groups: each typed call must produce
//! exactly the documented method, path, query and body on the wire.

mod support;

use std::io::Write;

use securitytrails_api_client::endpoints::{
    CertificateStatus, DmarcFeedType, DomainFeedFilter, DomainFeedParams, DomainFeedType,
    RecordType, SubdomainFeedParams, SubdomainFeedType,
};
use securitytrails_api_client::{ApiErrorKind, QueryParams, RequestBody};
use serde_json::{json, Value};
use tokio_test::{assert_err, assert_ok};

use support::{catch_all_server, client, header, path_and_query, single_request};

#[tokio::test]
async fn test_domain_ssl_query() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(
        client
            .domains()
            .ssl("example.com", false, CertificateStatus::Valid, 2)
            .await
    );

    let request = single_request(&server).await;
    assert_eq!(request.method.as_str(), "GET");
    assert_eq!(
        path_and_query(&request),
        "/v1/domain/example.com/ssl?include_subdomains=false&status=valid&page=2"
    );
}

#[tokio::test]
async fn test_ip_dsl_posts_query_body() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(client.ips().dsl(1, Some(&json!({"query": "port:22"}))).await);

    let request = single_request(&server).await;
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(path_and_query(&request), "/v1/ips/list?page=1");
    let body: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body, json!({"query": "port:22"}));
    assert_eq!(String::from_utf8(request.body.clone()).unwrap(), r#"{"query":"port:22"}"#);
}

#[tokio::test]
async fn test_domain_search_defaults_body() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(client.domains().search(true, 3, false, None).await);

    let request = single_request(&server).await;
    assert_eq!(
        path_and_query(&request),
        "/v1/domains/list?include_ips=true&page=3&scroll=false"
    );
    assert_eq!(request.body, b"{}");
}

#[tokio::test]
async fn test_simple_get_endpoints() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(client.general().ping().await);
    assert_ok!(client.general().usage().await);
    assert_ok!(client.general().scroll("a1b2c3").await);
    assert_ok!(client.company().details("securitytrails.com").await);
    assert_ok!(client.company().associated_ips("securitytrails.com").await);
    assert_ok!(client.domains().details("example.com").await);
    assert_ok!(client.domains().tags("example.com").await);
    assert_ok!(client.domains().whois("example.com").await);
    assert_ok!(client.ips().neighbors("8.8.8.0/24").await);
    assert_ok!(client.ips().whois("8.8.8.8").await);

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(path_and_query)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/v1/ping",
            "/v1/account/usage",
            "/v1/scroll/a1b2c3",
            "/v1/company/securitytrails.com",
            "/v1/company/securitytrails.com/associated-ips",
            "/v1/domain/example.com",
            "/v1/domain/example.com/tags",
            "/v1/domain/example.com/whois",
            "/v1/ips/nearby/8.8.8.0/24",
            "/v1/ips/8.8.8.8/whois",
        ]
    );
}

#[tokio::test]
async fn test_paged_get_endpoints() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(client.domains().subdomains("example.com", false, true).await);
    assert_ok!(client.domains().associated("example.com", 4).await);
    assert_ok!(
        client
            .domains()
            .ssl_stream("example.com", true, CertificateStatus::Expired)
            .await
    );
    assert_ok!(client.history().dns("example.com", RecordType::Mx, 2).await);
    assert_ok!(client.history().whois("example.com", 1).await);

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(path_and_query)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/v1/domain/example.com/subdomains?children_only=false&include_inactive=true",
            "/v1/domain/example.com/associated?page=4",
            "/v1/domain/example.com/ssl_stream?include_subdomains=true&status=expired",
            "/v1/history/example.com/dns/mx?page=2",
            "/v1/history/example.com/whois?page=1",
        ]
    );
}

#[tokio::test]
async fn test_statistics_endpoints_post_json() {
    let server = catch_all_server().await;
    let client = client(&server, "k");
    let query = json!({"query": "apex_domain = \"example.com\""});

    assert_ok!(client.domains().statistics(Some(&query)).await);
    assert_ok!(client.ips().statistics(None).await);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url.path(), "/v1/domains/stats");
    assert_eq!(serde_json::from_slice::<Value>(&requests[0].body).unwrap(), query);
    assert_eq!(requests[1].url.path(), "/v1/ips/stats");
    assert_eq!(requests[1].body, b"{}");
    assert!(requests.iter().all(|r| r.method.as_str() == "POST"));
}

#[tokio::test]
async fn test_feed_queries_omit_unset_parameters() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(
        client
            .feeds()
            .domains(DomainFeedType::All, &DomainFeedParams::new())
            .await
    );
    assert_ok!(
        client
            .feeds()
            .domains(
                DomainFeedType::Registered,
                &DomainFeedParams::new()
                    .with_filter(DomainFeedFilter::Gtld)
                    .with_tld("com")
                    .with_ns(true)
                    .with_date("2019-06-11"),
            )
            .await
    );
    assert_ok!(client.feeds().dmarc(DmarcFeedType::New, Some("2020-07-11")).await);
    assert_ok!(
        client
            .feeds()
            .subdomains(SubdomainFeedType::Deleted, &SubdomainFeedParams::new().with_tld("io"))
            .await
    );

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(path_and_query)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/v1/feeds/domains/all",
            "/v1/feeds/domains/registered?filter=gtld&tld=com&ns=true&date=2019-06-11",
            "/v1/feeds/dmarc/new?date=2020-07-11",
            "/v1/feeds/subdomains/deleted?filter=bytld&tld=io",
        ]
    );
}

#[tokio::test]
async fn test_firehose_time_window() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(client.firehose().ct(Some(1_600_000_000), None).await);
    assert_ok!(client.firehose().ct(None, None).await);

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(path_and_query)
        .collect();
    assert_eq!(
        paths,
        vec!["/v1/firehose/ct-logs?start=1600000000", "/v1/firehose/ct-logs"]
    );
}

#[tokio::test]
async fn test_submit_hostnames_streams_file() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "api.example.com").unwrap();
    writeln!(file, "cdn.example.com").unwrap();
    file.flush().unwrap();

    assert_ok!(client.misc().submit_hostnames(file.path()).await);

    let request = single_request(&server).await;
    assert_eq!(request.method.as_str(), "POST");
    assert_eq!(request.url.path(), "/v1/submit/hostnames");
    assert_eq!(request.body, b"api.example.com\ncdn.example.com\n");
    assert_eq!(header(&request, "content-length"), Some("32"));
}

#[tokio::test]
async fn test_call_by_name_applies_catalog_defaults() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(
        client
            .call("domain_ssl", &["example.com"], QueryParams::new(), RequestBody::None)
            .await
    );
    assert_ok!(
        client
            .call(
                "ip_search",
                &[],
                QueryParams::new().with("page", 7),
                RequestBody::Json(json!({"query": "ptr_part = 'ns1'"})),
            )
            .await
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        path_and_query(&requests[0]),
        "/v1/domain/example.com/ssl?include_subdomains=false&status=valid&page=1"
    );
    assert_eq!(path_and_query(&requests[1]), "/v1/ips/list?page=7");
}

#[tokio::test]
async fn test_invalid_calls_never_reach_the_network() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    let unknown = assert_err!(
        client
            .call("domain_search_v9", &[], QueryParams::new(), RequestBody::None)
            .await
    );
    assert_eq!(unknown.kind(), ApiErrorKind::InvalidRequest);

    let empty_host = assert_err!(client.domains().details("").await);
    assert_eq!(empty_host.kind(), ApiErrorKind::InvalidRequest);

    let bad_query = assert_err!(
        client
            .call("ping", &[], QueryParams::new().with("page", 1), RequestBody::None)
            .await
    );
    assert_eq!(bad_query.kind(), ApiErrorKind::InvalidRequest);

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_path_arguments_stay_inside_their_segment() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    assert_ok!(client.domains().details("../../account/usage").await);
    assert_ok!(client.general().scroll("abc/../../ping").await);
    assert_ok!(client.ips().neighbors("10.0.0.0/8").await);

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(path_and_query)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/v1/domain/..%2F..%2Faccount%2Fusage",
            "/v1/scroll/abc%2F..%2F..%2Fping",
            "/v1/ips/nearby/10.0.0.0/8",
        ]
    );
}

#[tokio::test]
async fn test_dot_segments_are_rejected_before_dispatch() {
    let server = catch_all_server().await;
    let client = client(&server, "k");

    let err = assert_err!(client.domains().whois("..").await);
    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    let err = assert_err!(client.ips().neighbors("../8").await);
    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);
    let err = assert_err!(client.history().whois(" example.com", 1).await);
    assert_eq!(err.kind(), ApiErrorKind::InvalidRequest);

    assert!(server.received_requests().await.unwrap().is_empty());
}
