#![cfg(feature = "server")]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use recruit_kernel::domain::config::{ApiConfig, SocialLink};
use recruit_kernel::server::ApiState;
use recruit_kernel::server::router::system_router;
use tower::ServiceExt;

fn app() -> Router {
    let mut config = ApiConfig::default();
    config.site.announcement = "Applications close soon".to_owned();
    config.site.socials =
        vec![SocialLink { name: "GitHub".to_owned(), url: "https://github.com/example".to_owned() }];

    let state = ApiState::builder().config(config).build().expect("state");
    let (router, _api) = system_router().with_state::<()>(state).split_for_parts();
    router
}

async fn get_json(path: &str) -> (StatusCode, serde_json::Value) {
    let response = app()
        .oneshot(Request::get(path).body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn health_reports_up() {
    let (status, body) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "up");
    assert!(body["uptime"].is_u64());
}

#[tokio::test]
async fn site_serves_configured_content() {
    let (status, body) = get_json("/api/site").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["announcement"], "Applications close soon");
    assert_eq!(body["socials"][0]["name"], "GitHub");
}

#[test]
fn state_requires_config() {
    let err = ApiState::builder().build().expect_err("config is mandatory");
    assert!(err.to_string().contains("ApiConfig not provided"));
}
