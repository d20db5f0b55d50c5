//! CLI tests against a mock upstream.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{run_cli_async, stderr, stdout};

const LOGIN_PATH: &str = "/classic-models/api/auth/login/";
const REFRESH_PATH: &str = "/classic-models/api/auth/refresh/";

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

async fn mount_login(server: &MockServer, access: &str) {
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .and(body_json(json!({"username": "demo", "password": "demo123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": access,
            "refresh": format!("{access}-refresh"),
        })))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn login_reports_success() {
    let server = MockServer::start().await;
    mount_login(&server, "access-1").await;

    let output = run_cli_async(args(&["login"]), server.uri(), "demo123").await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Logged in as demo"));
    assert!(out.contains(&server.uri()));
    assert!(!out.contains("access-1"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_with_wrong_password_fails() {
    let server = MockServer::start().await;
    mount_login(&server, "access-1").await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let output = run_cli_async(args(&["login"]), server.uri(), "wrong").await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("401"));
    assert!(err.contains("APIGATE_PASSWORD"));
}

#[tokio::test(flavor = "multi_thread")]
async fn request_prints_response_body() {
    let server = MockServer::start().await;
    mount_login(&server, "access-1").await;

    Mock::given(method("GET"))
        .and(path("/classic-models/api/v1/productlines/"))
        .and(query_param("page", "1"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"productline": "Classic Cars"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(
        args(&[
            "request",
            "GET",
            "/classic-models/api/v1/productlines/",
            "--query",
            "page=1",
            "--compact",
        ]),
        server.uri(),
        "demo123",
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let body: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(body["results"][0]["productline"], "Classic Cars");
}

#[tokio::test(flavor = "multi_thread")]
async fn request_renews_session_on_401() {
    let server = MockServer::start().await;
    mount_login(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(json!({"refresh": "access-1-refresh"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "access-2",
            "refresh": "access-2-refresh",
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/classic-models/api/v1/payments/7/"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/classic-models/api/v1/payments/7/"))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_async(
        args(&["request", "delete", "/classic-models/api/v1/payments/7/"]),
        server.uri(),
        "demo123",
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("No content"));
}

#[tokio::test(flavor = "multi_thread")]
async fn upstream_error_exits_nonzero() {
    let server = MockServer::start().await;
    mount_login(&server, "access-1").await;

    Mock::given(method("GET"))
        .and(path("/classic-models/api/v1/orders/1/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let output = run_cli_async(
        args(&["request", "GET", "/classic-models/api/v1/orders/1/"]),
        server.uri(),
        "demo123",
    )
    .await;

    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("404"));
    assert!(err.contains("Not found."));
}
