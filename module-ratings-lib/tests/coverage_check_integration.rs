//! Integration tests for the coverage check's provider fallback, using wiremock
//! servers in place of codecov.io and scrutinizer-ci.com.

use core::time::Duration;
use module_ratings_lib::checks::{Check, CheckContext, CoverageCheck};
use module_ratings_lib::facts::coverage::{codecov, scrutinizer};
use module_ratings_lib::facts::http::build_client;
use module_ratings_lib::facts::{ProviderResult, RepoSlug};
use serde_json::{Value, json};
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on the discard port, so requests fail to connect.
const UNREACHABLE: &str = "http://127.0.0.1:9";

const BRANCHES_PATH: &str = "/api/gh/owner/repo/branches";
const SCRUTINIZER_PATH: &str = "/api/repositories/g/owner/repo";

fn coverage_check(codecov_url: &str, scrutinizer_url: &str) -> CoverageCheck {
    let client = build_client(Duration::from_secs(5)).expect("Failed to build HTTP client");
    CoverageCheck::new(
        "great_code_coverage",
        "Code coverage is at least 75%",
        5,
        codecov::Provider::new(client.clone(), Some(codecov_url)),
        scrutinizer::Provider::new(client, Some(scrutinizer_url)),
    )
}

fn context() -> CheckContext {
    CheckContext::new(Some(RepoSlug::parse("owner/repo").unwrap()), None)
}

async fn mount_json(server: &MockServer, url_path: &str, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// A scrutinizer server that must never be contacted.
async fn untouched_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    server
}

fn scrutinizer_body(branch: &str, quality: Value) -> Value {
    json!({
        "default_branch": branch,
        "applications": {
            branch: {
                "index": {"_embedded": {"project": {"metric_values": {"scrutinizer.quality": quality}}}}
            }
        }
    })
}

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
}

#[tokio::test]
async fn test_codecov_reports_default_branch_coverage() {
    let codecov_server = MockServer::start().await;
    let scrutinizer_server = untouched_server().await;

    mount_json(&codecov_server, BRANCHES_PATH, json!({"meta": {"status": 200}, "repo": {"branch": "develop"}}), 1).await;
    mount_json(
        &codecov_server,
        "/api/gh/owner/repo/branch/develop",
        json!({"meta": {"status": 200}, "commit": {"totals": {"c": 87.5}}}),
        1,
    )
    .await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    assert_close(check.coverage(&context()).await, 87.5);
}

#[tokio::test]
async fn test_codecov_zero_coverage_does_not_fall_back() {
    let codecov_server = MockServer::start().await;
    let scrutinizer_server = untouched_server().await;

    mount_json(&codecov_server, BRANCHES_PATH, json!({"meta": {"status": 200}, "repo": {"branch": "main"}}), 1).await;
    mount_json(
        &codecov_server,
        "/api/gh/owner/repo/branch/main",
        json!({"meta": {"status": 200}, "commit": {"totals": {"c": 0}}}),
        1,
    )
    .await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    let primary = check.codecov_coverage(&RepoSlug::parse("owner/repo").unwrap()).await;
    assert_eq!(primary, ProviderResult::Found(0.0));
    assert_close(check.coverage(&context()).await, 0.0);
}

#[tokio::test]
async fn test_codecov_missing_totals_is_zero_not_unavailable() {
    let codecov_server = MockServer::start().await;
    let scrutinizer_server = untouched_server().await;

    mount_json(&codecov_server, BRANCHES_PATH, json!({"meta": {"status": 200}, "repo": {"branch": "main"}}), 1).await;
    mount_json(&codecov_server, "/api/gh/owner/repo/branch/main", json!({"meta": {"status": 200}, "commit": {}}), 1).await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    assert_close(check.coverage(&context()).await, 0.0);
}

#[tokio::test]
async fn test_codecov_defaults_to_master_and_accepts_string_values() {
    let codecov_server = MockServer::start().await;
    let scrutinizer_server = untouched_server().await;

    mount_json(&codecov_server, BRANCHES_PATH, json!({"meta": {"status": "200"}, "repo": {}}), 1).await;
    mount_json(
        &codecov_server,
        "/api/gh/owner/repo/branch/master",
        json!({"commit": {"totals": {"c": "85.71429"}}}),
        1,
    )
    .await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    assert_close(check.coverage(&context()).await, 85.714_29);
}

#[tokio::test]
async fn test_codecov_not_configured_falls_back_to_scrutinizer() {
    let codecov_server = MockServer::start().await;
    let scrutinizer_server = MockServer::start().await;

    mount_json(&codecov_server, BRANCHES_PATH, json!({"meta": {"status": 404}}), 1).await;
    mount_json(&scrutinizer_server, SCRUTINIZER_PATH, scrutinizer_body("master", json!(0.92)), 1).await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    let primary = check.codecov_coverage(&RepoSlug::parse("owner/repo").unwrap()).await;
    assert!(!primary.is_found());

    assert_close(check.coverage(&context()).await, 92.0);
}

#[tokio::test]
async fn test_codecov_branch_detail_failure_falls_back() {
    let codecov_server = MockServer::start().await;
    let scrutinizer_server = MockServer::start().await;

    mount_json(&codecov_server, BRANCHES_PATH, json!({"meta": {"status": 200}, "repo": {"branch": "main"}}), 1).await;
    mount_json(&codecov_server, "/api/gh/owner/repo/branch/main", json!({"meta": {"status": 403}}), 1).await;
    mount_json(&scrutinizer_server, SCRUTINIZER_PATH, scrutinizer_body("main", json!(0.5)), 1).await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    assert_close(check.coverage(&context()).await, 50.0);
}

#[tokio::test]
async fn test_codecov_http_error_falls_back() {
    let codecov_server = MockServer::start().await;
    let scrutinizer_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(BRANCHES_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&codecov_server)
        .await;
    mount_json(&scrutinizer_server, SCRUTINIZER_PATH, scrutinizer_body("master", json!(0.75)), 1).await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    assert_close(check.coverage(&context()).await, 75.0);
}

#[tokio::test]
async fn test_codecov_empty_and_malformed_bodies_are_unavailable() {
    let codecov_server = MockServer::start().await;
    let check = coverage_check(&codecov_server.uri(), UNREACHABLE);
    let slug = RepoSlug::parse("owner/repo").unwrap();

    mount_json(&codecov_server, BRANCHES_PATH, json!({}), 1).await;
    assert!(!check.codecov_coverage(&slug).await.is_found());
    codecov_server.reset().await;

    Mock::given(method("GET"))
        .and(path(BRANCHES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&codecov_server)
        .await;
    assert!(!check.codecov_coverage(&slug).await.is_found());
}

#[tokio::test]
async fn test_unreachable_codecov_falls_back() {
    let scrutinizer_server = MockServer::start().await;
    mount_json(&scrutinizer_server, SCRUTINIZER_PATH, scrutinizer_body("master", json!(0.6)), 1).await;

    let check = coverage_check(UNREACHABLE, &scrutinizer_server.uri());
    assert_close(check.coverage(&context()).await, 60.0);
}

#[tokio::test]
async fn test_both_providers_unreachable_is_zero() {
    let check = coverage_check(UNREACHABLE, UNREACHABLE);
    assert_close(check.coverage(&context()).await, 0.0);

    let result = check.with_threshold(75).run(&context()).await;
    assert!(!result.passed);
}

#[tokio::test]
async fn test_missing_slug_makes_no_requests() {
    let codecov_server = untouched_server().await;
    let scrutinizer_server = untouched_server().await;

    let check = coverage_check(&codecov_server.uri(), &scrutinizer_server.uri());
    assert_close(check.coverage(&CheckContext::default()).await, 0.0);
}

#[tokio::test]
async fn test_scrutinizer_without_quality_metric_is_zero() {
    let scrutinizer_server = MockServer::start().await;
    mount_json(
        &scrutinizer_server,
        SCRUTINIZER_PATH,
        json!({"applications": {"master": {"index": {"_embedded": {"project": {"metric_values": {"scrutinizer.test_coverage": 0.4}}}}}}}),
        1,
    )
    .await;

    let check = coverage_check(UNREACHABLE, &scrutinizer_server.uri());
    let slug = RepoSlug::parse("owner/repo").unwrap();
    assert_eq!(check.scrutinizer_coverage(&slug).await, ProviderResult::Found(0.0));
}

#[tokio::test]
async fn test_scrutinizer_missing_metrics_is_unavailable() {
    let scrutinizer_server = MockServer::start().await;
    mount_json(
        &scrutinizer_server,
        SCRUTINIZER_PATH,
        json!({"default_branch": "main", "applications": {"master": {"index": {}}}}),
        1,
    )
    .await;

    let check = coverage_check(UNREACHABLE, &scrutinizer_server.uri());
    let slug = RepoSlug::parse("owner/repo").unwrap();
    assert!(!check.scrutinizer_coverage(&slug).await.is_found());
    assert_close(check.coverage(&context()).await, 0.0);
}

#[tokio::test]
async fn test_scrutinizer_ignores_meta_status() {
    let scrutinizer_server = MockServer::start().await;
    let mut body = scrutinizer_body("master", json!(0.8));
    body["meta"] = json!({"status": 404});
    mount_json(&scrutinizer_server, SCRUTINIZER_PATH, body, 1).await;

    let check = coverage_check(UNREACHABLE, &scrutinizer_server.uri());
    let slug = RepoSlug::parse("owner/repo").unwrap();
    assert_eq!(check.scrutinizer_coverage(&slug).await.as_ref().map(|c| c.round()), Some(80.0));
}

#[tokio::test]
async fn test_run_passes_when_threshold_reached() {
    let codecov_server = MockServer::start().await;
    mount_json(&codecov_server, BRANCHES_PATH, json!({"meta": {"status": 200}, "repo": {"branch": "develop"}}), 1).await;
    mount_json(
        &codecov_server,
        "/api/gh/owner/repo/branch/develop",
        json!({"meta": {"status": 200}, "commit": {"totals": {"c": 87.5}}}),
        1,
    )
    .await;

    let check = coverage_check(&codecov_server.uri(), UNREACHABLE).with_threshold(80);
    let result = check.run(&context()).await;

    assert!(result.passed);
    assert_eq!(result.awarded_points(), 5);
    assert_eq!(result.detail.as_deref(), Some("coverage 87.50% (threshold 80%)"));
}

#[test]
fn test_threshold_round_trip() {
    let mut check = coverage_check(UNREACHABLE, UNREACHABLE);
    let _ = check.set_threshold(80);
    assert_eq!(check.threshold(), 80);
}
