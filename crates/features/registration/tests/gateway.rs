#![cfg(feature = "client")]

use mockito::Server;
use recruit_domain::registration::RegistrationDraft;
use recruit_registration::client::{
    GatewayError, HttpGateway, NETWORK_ERROR_MESSAGE, RegistrationGateway,
};

fn draft() -> RegistrationDraft {
    RegistrationDraft { full_name: "Ada Lovelace".into(), ..RegistrationDraft::default() }
}

#[tokio::test]
async fn success_reply_is_acknowledged() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/register")
        .match_body(mockito::Matcher::PartialJsonString(r#"{"fullName":"Ada Lovelace"}"#.into()))
        .with_status(200)
        .with_body(r#"{"success":true,"message":"Registration successful","data":{"id":1}}"#)
        .create_async()
        .await;

    let gateway = HttpGateway::from_base_url(&server.url());
    let ack = gateway.register(&draft()).await.expect("accepted");

    mock.assert_async().await;
    assert_eq!(ack.message, "Registration successful");
    assert_eq!(ack.data, Some(serde_json::json!({ "id": 1 })));
}

#[tokio::test]
async fn validation_reply_surfaces_first_field_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/api/register")
        .with_status(400)
        .with_body(r#"{"success":false,"errors":[{"field":"phone","message":"Phone number is required"}]}"#)
        .create_async()
        .await;

    let gateway = HttpGateway::from_base_url(&server.url());
    let err = gateway.register(&draft()).await.expect_err("rejected");

    assert!(matches!(err, GatewayError::Rejected { .. }));
    assert_eq!(err.user_message(), "Phone number is required");
}

#[tokio::test]
async fn unreadable_reply_uses_generic_message() {
    let mut server = Server::new_async().await;
    server.mock("POST", "/api/register").with_status(502).with_body("Bad Gateway").create_async().await;

    let gateway = HttpGateway::from_base_url(&server.url());
    let err = gateway.register(&draft()).await.expect_err("rejected");

    assert_eq!(err.user_message(), "Registration failed. Please try again.");
}

#[tokio::test]
async fn transport_failure_uses_network_message() {
    let gateway = HttpGateway::from_base_url("http://127.0.0.1:9/");
    assert_eq!(gateway.endpoint(), "http://127.0.0.1:9/api/register");
    let err = gateway.register(&draft()).await.expect_err("unreachable");

    assert!(matches!(err, GatewayError::Transport { .. }));
    assert_eq!(err.user_message(), NETWORK_ERROR_MESSAGE);
}
