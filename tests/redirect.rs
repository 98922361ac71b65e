use axum::body::Body;
use axum::http::{Request, StatusCode};
use sample_service::app;
use sample_service::config::{EnvironmentConfig, HttpSslConfig};
use std::path::PathBuf;
use tower::ServiceExt;

fn redirecting_config() -> EnvironmentConfig {
    EnvironmentConfig {
        https_redirect: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn plain_requests_redirect_to_https() {
    let app = app::create_app(redirecting_config());

    let request = Request::get("/reports/latest?window=1d")
        .header("host", "example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.headers()["location"],
        "https://example.com/reports/latest?window=1d"
    );
}

#[tokio::test]
async fn redirect_strips_request_port_and_advertises_https_port() {
    let config = EnvironmentConfig {
        https_redirect: true,
        https_port: Some(8443),
        ..Default::default()
    };
    let app = app::create_app(config);

    let request = Request::get("/env")
        .header("host", "example.com:8080")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "https://example.com:8443/env");
}

#[tokio::test]
async fn redirect_omits_default_https_port() {
    let config = EnvironmentConfig {
        https_redirect: true,
        https_port: Some(443),
        ..Default::default()
    };
    let app = app::create_app(config);

    let request = Request::get("/env")
        .header("host", "example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()["location"], "https://example.com/env");
}

#[tokio::test]
async fn healthz_is_not_exempt() {
    let app = app::create_app(redirecting_config());

    let request = Request::get("/healthz")
        .header("host", "example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.status(),
        StatusCode::TEMPORARY_REDIRECT,
        "Only whole /health segments are exempt."
    );
    assert_eq!(response.headers()["location"], "https://example.com/healthz");
}

#[tokio::test]
async fn missing_host_is_rejected() {
    let app = app::create_app(redirecting_config());

    let request = Request::get("/env").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unmatched_paths_fall_through_when_redirect_disabled() {
    let app = app::create_app(EnvironmentConfig::default());

    let request = Request::get("/reports/latest")
        .header("host", "example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn tls_terminating_listener_does_not_redirect() {
    let config = EnvironmentConfig {
        https_redirect: true,
        http_ssl: Some(HttpSslConfig {
            key_file: PathBuf::from("certs/dev.key"),
            cert_file: PathBuf::from("certs/dev.pem"),
        }),
        ..Default::default()
    };
    let app = app::create_app(config);

    let request = Request::get("/reports/latest")
        .header("host", "example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get("location").is_none());
}
