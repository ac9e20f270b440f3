//! Failure handling over real HTTP: each failure stage maps to its own error.

use serde_json::json;

use gengo_client::api::Balance;
use gengo_client::{ClientConfig, Float64, GengoClient, GengoError};

mod common;

#[tokio::test]
async fn test_api_error_envelope() {
    let mock = common::start_mock_gengo(|_| common::api_error(1000, "Invalid API key")).await;
    let err = mock.client().me().await.unwrap_err();
    match err {
        GengoError::Api { code, message } => {
            assert_eq!(code, 1000);
            assert_eq!(message, "Invalid API key");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_status_does_not_override_envelope() {
    // A 500 carrying a valid ok envelope still succeeds; the envelope decides.
    let mock = common::start_mock_gengo(|_| {
        (500, json!({"opstat": "ok", "response": {"credits": 1, "currency": "USD"}}).to_string())
    })
    .await;
    let balance = mock.client().balance().await.unwrap();
    assert_eq!(balance.credits.to_string(), "1.00");

    let mock = common::start_mock_gengo(|_| {
        (404, json!({"opstat": "error", "err": {"code": "2750", "msg": "not found"}}).to_string())
    })
    .await;
    let err = mock.client().get_job(1).await.unwrap_err();
    assert_eq!(err.api_code(), Some(2750));
}

#[tokio::test]
async fn test_malformed_envelope() {
    let mock = common::start_mock_gengo(|_| (502, "<html>Bad Gateway</html>".to_string())).await;
    let err = mock.client().balance().await.unwrap_err();
    assert!(matches!(err, GengoError::Envelope(_)), "got {err:?}");

    let mock = common::start_mock_gengo(|_| (200, r#"{"opstat":"ok","response":{"cre"#.to_string())).await;
    let err = mock.client().balance().await.unwrap_err();
    assert!(matches!(err, GengoError::Envelope(_)), "got {err:?}");
}

#[tokio::test]
async fn test_payload_mismatch() {
    let mock = common::start_mock_gengo(|_| common::ok(json!({"credits": {"amount": 3}}))).await;
    let err = mock.client().balance().await.unwrap_err();
    assert!(matches!(err, GengoError::Payload(_)), "got {err:?}");

    let mock = common::start_mock_gengo(|_| common::ok(json!({"credits": "lots"}))).await;
    let err = mock.client().balance().await.unwrap_err();
    assert!(matches!(err, GengoError::Payload(_)), "got {err:?}");
}

#[tokio::test]
async fn test_missing_payload_is_default() {
    let mock = common::start_mock_gengo(|_| (200, r#"{"opstat":"ok"}"#.to_string())).await;
    let client = mock.client();

    let balance = client.balance().await.unwrap();
    assert_eq!(balance, Balance::default());
    assert_eq!(balance.credits, Float64(0.0));
    assert!(client.get_jobs_by_id(&[4, 5]).await.unwrap().jobs.is_empty());
    client.cancel_order(3).await.unwrap();
    assert_eq!(mock.requests().len(), 3);
}

#[tokio::test]
async fn test_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(common::PUBLIC_KEY, common::PRIVATE_KEY)
        .with_base_url(format!("http://{addr}/v2"));
    let err = GengoClient::new(config).unwrap().me().await.unwrap_err();
    assert!(matches!(err, GengoError::Transport(_)), "got {err:?}");
    assert!(!err.is_api());
}

#[tokio::test]
async fn test_invalid_config_fails_before_sending() {
    let config = ClientConfig::new("", "secret").with_base_url("not a url");
    let err = GengoClient::new(config).unwrap_err();
    assert!(matches!(err, GengoError::Config(_)));
    assert!(err.to_string().contains("credentials.public_key"));
    assert!(err.to_string().contains("base_url"));
}
