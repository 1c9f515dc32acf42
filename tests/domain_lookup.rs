//! Integration tests for the domain collector.
//!
//! The DNS lookup, WHOIS and geolocation services are replaced by a wiremock
//! server so every stage and failure path can be driven deterministically.

mod helpers;

use std::time::Duration;

use helpers::{context_for, context_with, pair, pairs, TEST_API_KEY};
use idspy::collectors::lookup_domain;
use idspy::{init_context, Config, FieldKind, LookupError, RecordIndexing};
use serde_json::json;
use wiremock::matchers::{header, method, path, path_regex, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_dns(server: &MockServer, domain: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/dnslookup"))
        .and(query_param("domain", domain))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_whois(server: &MockServer, domain: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1/whois"))
        .and(query_param("domain", domain))
        .and(header("x-api-key", TEST_API_KEY))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_geolocation(server: &MockServer, ip: &str, isp: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/json/{}", ip)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "query": ip,
            "city": "Somewhere",
            "regionName": "Region",
            "country": "Country",
            "zip": "00000",
            "isp": isp,
        })))
        .expect(1)
        .mount(server)
        .await;
}

fn standard_records() -> serde_json::Value {
    json!([
        {"record_type": "A", "value": "1.2.3.4"},
        {"record_type": "A", "value": "1.2.3.5"},
        {"record_type": "MX", "value": "mail.x"},
        {"record_type": "SOA", "mname": "ns1.x.", "rname": "admin.x.", "serial": 7},
    ])
}

fn standard_whois() -> serde_json::Value {
    json!({
        "domain_name": "example.com",
        "registrar": "Example Registrar, Inc.",
        "creation_date": 1551657600,
        "updated_date": "1625832000",
    })
}

#[tokio::test]
async fn test_full_lookup_orders_every_section() {
    let server = MockServer::start().await;
    mount_dns(&server, "example.com", standard_records()).await;
    mount_geolocation(&server, "1.2.3.4", "Example ISP").await;
    mount_whois(
        &server,
        "example.com",
        ResponseTemplate::new(200).set_body_json(standard_whois()),
    )
    .await;

    let results = lookup_domain(&context_for(&server), "example.com")
        .await
        .expect("lookup should succeed");

    assert_eq!(
        pairs(&results),
        vec![
            pair("NSLOOKUP", ""),
            pair("A", "1.2.3.4"),
            pair("A-2", "1.2.3.5"),
            pair("MX", "mail.x"),
            pair("SOA", "ns1.x."),
            pair("A Record Owner", "Example ISP"),
            pair("", ""),
            pair("WHOIS", ""),
            pair("Registrar", "Example Registrar, Inc."),
            pair("Creation Date", "March 4, 2019"),
            pair("Last Updated", "July 9, 2021"),
        ]
    );
    assert!(!results.has_errors());
    assert_eq!(results.fields()[6].kind, FieldKind::Separator);
}

#[tokio::test]
async fn test_protocol_prefix_is_stripped_before_querying() {
    let server = MockServer::start().await;
    mount_dns(&server, "example.com", standard_records()).await;
    mount_geolocation(&server, "1.2.3.4", "Example ISP").await;
    mount_whois(
        &server,
        "example.com",
        ResponseTemplate::new(200).set_body_json(standard_whois()),
    )
    .await;

    let results = lookup_domain(&context_for(&server), "https://example.com")
        .await
        .expect("lookup should succeed");
    assert_eq!(results.get("Registrar"), Some("Example Registrar, Inc."));
}

#[tokio::test]
async fn test_empty_dns_response_stops_before_whois() {
    let server = MockServer::start().await;
    mount_dns(&server, "nope.example", json!([])).await;
    Mock::given(path("/v1/whois"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let results = lookup_domain(&context_for(&server), "nope.example")
        .await
        .expect("empty DNS answer is not fatal");

    assert_eq!(
        pairs(&results),
        vec![
            pair("NSLOOKUP", ""),
            pair("Error", "This Domain Is Not Registered or Is Malformed"),
        ]
    );
    assert_eq!(
        results
            .fields()
            .iter()
            .filter(|f| f.kind == FieldKind::Error)
            .count(),
        1
    );
    assert_eq!(results.get("WHOIS"), None);
}

#[tokio::test]
async fn test_whois_404_keeps_dns_section() {
    let server = MockServer::start().await;
    mount_dns(&server, "example.xyz", json!([{"record_type": "NS", "value": "ns1.x."}])).await;
    mount_whois(&server, "example.xyz", ResponseTemplate::new(404)).await;

    let results = lookup_domain(&context_for(&server), "example.xyz")
        .await
        .expect("WHOIS failure is not fatal");

    assert_eq!(
        pairs(&results),
        vec![
            pair("NSLOOKUP", ""),
            pair("NS", "ns1.x."),
            pair("", ""),
            pair("WHOIS", ""),
            pair("404 Not Found", "WHOIS LOOKUP FAILED FOR example.xyz"),
        ]
    );
    assert_eq!(results.get("Registrar"), None);
    assert_eq!(results.fields()[4].kind, FieldKind::Error);
}

#[tokio::test]
async fn test_whois_empty_body_is_malformed_domain() {
    let server = MockServer::start().await;
    mount_dns(&server, "sub.example.com", json!([{"record_type": "CNAME", "value": "example.com."}])).await;
    mount_whois(
        &server,
        "sub.example.com",
        ResponseTemplate::new(200).set_body_json(json!({})),
    )
    .await;

    let results = lookup_domain(&context_for(&server), "sub.example.com")
        .await
        .expect("lookup should succeed");

    let last = results.fields().last().expect("non-empty result");
    assert_eq!(last.label, "Error");
    assert_eq!(last.value, "WHOIS Failed - Malformed Domain Name");
    assert_eq!(results.get("CNAME"), Some("example.com."));
}

#[tokio::test]
async fn test_whois_timeout_becomes_inline_error() {
    let server = MockServer::start().await;
    mount_dns(&server, "slow.example", json!([{"record_type": "TXT", "value": "v=spf1 -all"}])).await;
    mount_whois(
        &server,
        "slow.example",
        ResponseTemplate::new(200)
            .set_body_json(standard_whois())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let ctx = context_with(&server, 1, RecordIndexing::Restart);
    let results = lookup_domain(&ctx, "slow.example")
        .await
        .expect("WHOIS timeout is not fatal");

    assert_eq!(results.get("TXT"), Some("v=spf1 -all"));
    let last = results.fields().last().expect("non-empty result");
    assert_eq!(last.kind, FieldKind::Error);
    assert!(last.value.starts_with("WHOIS lookup failed:"), "{}", last.value);
    assert_eq!(results.get("Registrar"), None);
}

#[tokio::test]
async fn test_dns_timeout_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/dnslookup"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(standard_records())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    Mock::given(path("/v1/whois"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let ctx = context_with(&server, 1, RecordIndexing::Restart);
    let err = lookup_domain(&ctx, "example.com")
        .await
        .expect_err("DNS timeout must abort the lookup");
    assert!(matches!(err, LookupError::Timeout(_)), "{err:?}");
    assert!(err.is_transport_fault());
}

#[tokio::test]
async fn test_dns_malformed_body_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/dnslookup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = lookup_domain(&context_for(&server), "example.com")
        .await
        .expect_err("undecodable DNS body must abort the lookup");
    assert!(matches!(err, LookupError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn test_dns_error_status_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/dnslookup"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = lookup_domain(&context_for(&server), "example.com")
        .await
        .expect_err("DNS 502 must abort the lookup");
    assert!(matches!(err, LookupError::Status { code: 502, .. }), "{err:?}");
}

#[tokio::test]
async fn test_no_a_record_skips_owner_lookup() {
    let server = MockServer::start().await;
    mount_dns(
        &server,
        "example.org",
        json!([
            {"record_type": "AAAA", "value": "2001:db8::1"},
            {"record_type": "MX", "value": "mx.example.org"},
        ]),
    )
    .await;
    Mock::given(path_regex(r"^/json/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    mount_whois(
        &server,
        "example.org",
        ResponseTemplate::new(200).set_body_json(standard_whois()),
    )
    .await;

    let results = lookup_domain(&context_for(&server), "example.org")
        .await
        .expect("lookup should succeed");
    assert_eq!(results.get("A Record Owner"), None);
    assert_eq!(results.get("Registrar"), Some("Example Registrar, Inc."));
}

#[tokio::test]
async fn test_a_record_without_value_skips_geolocation() {
    let server = MockServer::start().await;
    mount_dns(&server, "example.com", json!([{"record_type": "A"}])).await;
    Mock::given(path_regex(r"^/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": "203.0.113.9",
            "isp": "Caller ISP",
        })))
        .expect(0)
        .mount(&server)
        .await;
    mount_whois(
        &server,
        "example.com",
        ResponseTemplate::new(200).set_body_json(standard_whois()),
    )
    .await;

    let results = lookup_domain(&context_for(&server), "example.com")
        .await
        .expect("lookup should succeed");

    let dns: Vec<(String, String)> = pairs(&results).into_iter().take(3).collect();
    assert_eq!(
        dns,
        vec![
            pair("NSLOOKUP", ""),
            pair("A", ""),
            pair("A Record Owner", "Lookup unavailable"),
        ]
    );
    assert_eq!(results.get("Registrar"), Some("Example Registrar, Inc."));
}

#[tokio::test]
async fn test_failed_owner_lookup_is_reported_not_fatal() {
    let server = MockServer::start().await;
    mount_dns(&server, "example.net", json!([{"record_type": "A", "value": "10.0.0.1"}])).await;
    Mock::given(path("/json/10.0.0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "fail",
            "message": "private range",
            "query": "10.0.0.1",
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_whois(
        &server,
        "example.net",
        ResponseTemplate::new(200).set_body_json(standard_whois()),
    )
    .await;

    let results = lookup_domain(&context_for(&server), "example.net")
        .await
        .expect("owner lookup failure is not fatal");
    assert_eq!(results.get("A Record Owner"), Some("Lookup unavailable"));
    assert_eq!(results.get("Registrar"), Some("Example Registrar, Inc."));
}

#[tokio::test]
async fn test_owner_uses_first_a_record_of_non_contiguous_runs() {
    let server = MockServer::start().await;
    mount_dns(
        &server,
        "example.com",
        json!([
            {"record_type": "A", "value": "1.2.3.4"},
            {"record_type": "NS", "value": "ns1.x."},
            {"record_type": "A", "value": "5.6.7.8"},
        ]),
    )
    .await;
    mount_geolocation(&server, "1.2.3.4", "First ISP").await;
    mount_whois(
        &server,
        "example.com",
        ResponseTemplate::new(200).set_body_json(standard_whois()),
    )
    .await;

    let results = lookup_domain(&context_for(&server), "example.com")
        .await
        .expect("lookup should succeed");

    let dns: Vec<(String, String)> = pairs(&results).into_iter().take(5).collect();
    assert_eq!(
        dns,
        vec![
            pair("NSLOOKUP", ""),
            pair("A", "1.2.3.4"),
            pair("NS", "ns1.x."),
            pair("A", "5.6.7.8"),
            pair("A Record Owner", "First ISP"),
        ]
    );
}

#[tokio::test]
async fn test_per_type_indexing_mode() {
    let server = MockServer::start().await;
    mount_dns(
        &server,
        "example.com",
        json!([
            {"record_type": "A", "value": "1.2.3.4"},
            {"record_type": "NS", "value": "ns1.x."},
            {"record_type": "A", "value": "5.6.7.8"},
        ]),
    )
    .await;
    mount_geolocation(&server, "1.2.3.4", "First ISP").await;
    mount_whois(
        &server,
        "example.com",
        ResponseTemplate::new(200).set_body_json(standard_whois()),
    )
    .await;

    let ctx = context_with(&server, 2, RecordIndexing::PerType);
    let results = lookup_domain(&ctx, "example.com")
        .await
        .expect("lookup should succeed");
    assert_eq!(results.get("A-2"), Some("5.6.7.8"));
}

#[tokio::test]
async fn test_repeated_lookups_are_identical() {
    let server = MockServer::start().await;
    Mock::given(path("/v1/dnslookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standard_records()))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(path("/json/1.2.3.4"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"query": "1.2.3.4", "isp": "ISP"})),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(path("/v1/whois"))
        .respond_with(ResponseTemplate::new(200).set_body_json(standard_whois()))
        .expect(2)
        .mount(&server)
        .await;

    let ctx = context_for(&server);
    let first = lookup_domain(&ctx, "example.com").await.unwrap();
    let second = lookup_domain(&ctx, "example.com").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[tokio::test]
async fn test_missing_api_key_fails_without_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.endpoints.ninjas = format!("{}/v1", server.uri());
    config.endpoints.geolocation = server.uri();
    let ctx = init_context(&config).unwrap();

    let err = lookup_domain(&ctx, "example.com")
        .await
        .expect_err("missing key must fail");
    assert!(matches!(err, LookupError::MissingApiKey));
}
