use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use recruit::domain::config::{ApiConfig, SslConfig};
use recruit::kernel::config::load_config;
use recruit_server::Server;
use serde_json::{Value, json};
use std::io::Write;
use tower::ServiceExt;

async fn send(server: &Server, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = server.router().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn serves_health_site_and_docs() {
    let server = Server::builder().build().expect("server");

    let (status, body) = send(&server, Request::get("/health").body(Body::empty()).expect("req")).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(body["status"], "up");

    let (status, _) = send(&server, Request::get("/api/site").body(Body::empty()).expect("req")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&server, Request::get("/api").body(Body::empty()).expect("req")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn proxies_registrations_to_configured_backend() {
    let mut backend = mockito::Server::new_async().await;
    let mock = backend
        .mock("POST", "/api/register")
        .with_status(201)
        .with_body(r#"{"id":"m-1"}"#)
        .create_async()
        .await;

    let server = Server::builder().upstream(backend.url()).build().expect("server");
    let payload = json!({
        "fullName": "Ada Lovelace",
        "rollNumber": "CS21B10042",
        "email": "ada@example.edu",
        "phone": "9876543210",
        "department": "ME",
        "year": "1st",
        "motivation": "I want to build compilers with friends."
    });
    let request = Request::post("/api/register")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("req");

    let (status, body) = send(&server, request).await;

    mock.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(body["data"], json!({ "id": "m-1" }));
}

#[test]
fn missing_certificate_fails_the_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = ApiConfig::default();
    cfg.server.ssl =
        Some(SslConfig { cert: dir.path().join("cert.pem"), key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).build().expect_err("missing cert");
    assert!(err.to_string().contains("SSL certificate not found"));
}

#[test]
fn builds_from_config_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("tempfile");
    writeln!(
        file,
        r#"
[server]
port = 8081

[upstream]
base_url = "http://registrations.internal:5000"

[site]
announcement = "Recruitment is open"
"#
    )
    .expect("write");

    let cfg: ApiConfig = load_config(Some(file.path())).expect("config");
    let server = Server::builder().config(cfg).build().expect("server");

    assert_eq!(server.state().config.server.port, 8081);
    assert_eq!(
        server.state().config.upstream.register_url(),
        "http://registrations.internal:5000/api/register"
    );
    assert_eq!(server.state().config.site.announcement, "Recruitment is open");
}
