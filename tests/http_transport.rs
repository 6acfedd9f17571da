//! Wire-level tests against a local mock server.

mod integration;

use integration::mock_server::{fast_policy, MockServerFixture};
use mockito::Matcher;
use std::time::Duration;
use zhipu_adapter::config::CHAT_COMPLETIONS_PATH;
use zhipu_adapter::{ChatAdapter, ChatOptions, ErrorClassifier, ErrorKind, Locale};

#[tokio::test]
async fn test_successful_completion_is_unfenced() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_completion("```json\n{\"a\":1}\n```").await;

    let adapter = fixture.adapter(3);
    let (content, stats) = adapter
        .chat_with_stats("hello", ChatOptions::default())
        .await
        .expect("chat succeeds");

    assert_eq!(content, "{\"a\":1}");
    assert_eq!(stats.attempts, 1);
    assert_eq!(stats.upstream_id.as_deref(), Some("8311"));
    assert_eq!(stats.finish_reason.as_deref(), Some("stop"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_body_shape() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .server
        .mock("POST", CHAT_COMPLETIONS_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(serde_json::json!({
                "model": "glm-4-flash",
                "messages": [{"role": "user", "content": "ping"}],
                "temperature": 0.7,
                "top_p": 0.7
            })),
            Matcher::Regex(r#""request_id":"web_\d+""#.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"pong"}}]}"#)
        .expect(1)
        .create_async()
        .await;

    let adapter = fixture.adapter(1);
    let content = adapter.chat("ping", ChatOptions::default()).await.unwrap();

    assert_eq!(content, "pong");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_status(404, r#"{"error":{"code":"1211","message":"model not found"}}"#, 1)
        .await;

    let err = fixture
        .adapter(3)
        .chat("hello", ChatOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(!err.retryable());
    assert!(err.details().unwrap().starts_with("HTTP 404"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_exhausts_attempts() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_status(500, r#"{"error":{"message":"Internal server error"}}"#, 3)
        .await;

    let err = fixture
        .adapter(3)
        .chat("hello", ChatOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.retryable());
    assert_eq!(
        err.message(),
        "The server is temporarily unavailable, please try again later"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_authentication_failure_message() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_status(401, r#"{"error":{"code":"1000","message":"auth failed"}}"#, 2)
        .await;

    let err = fixture
        .adapter(2)
        .chat("hello", ChatOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(
        err.message(),
        "API authentication failed, please check your key settings"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_success_body_is_retried_as_api() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture.mock_status(200, "<html>gateway</html>", 3).await;

    let err = fixture
        .adapter(3)
        .chat("hello", ChatOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Api);
    assert!(err.retryable());
    assert!(err.details().unwrap().contains("<html>gateway</html>"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_without_completion_is_retried_as_api() {
    let bodies = [
        r#"{"choices":null}"#,
        r#"{"choices":[]}"#,
        r#"{"choices":[{"index":0,"message":{"role":"assistant","content":null}}]}"#,
        r#"{"choices":[{"index":0,"message":"hi"}]}"#,
        r#"{"error":{"code":"1301","message":"content filtered"}}"#,
    ];

    for body in bodies {
        let mut fixture = MockServerFixture::new().await;
        let mock = fixture.mock_status(200, body, 3).await;

        let err = fixture
            .adapter(3)
            .chat("hello", ChatOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api, "{body}");
        assert!(err.retryable(), "{body}");
        assert_eq!(
            err.details(),
            Some("response contained no completion text"),
            "{body}"
        );
        mock.assert_async().await;
    }
}

#[tokio::test]
async fn test_unread_fields_with_unexpected_types_are_ignored() {
    let mut fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_status(
            200,
            r#"{"id":8311,"created":"1700000000","usage":null,
                "choices":[{"index":0,"message":{"role":"assistant","content":"hi"},"finish_reason":7}]}"#,
            1,
        )
        .await;

    let (content, stats) = fixture
        .adapter(3)
        .chat_with_stats("hello", ChatOptions::default())
        .await
        .expect("content is still readable");

    assert_eq!(content, "hi");
    assert_eq!(stats.attempts, 1);
    assert_eq!(stats.upstream_id, None);
    assert_eq!(stats.finish_reason, None);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refused_connection_is_network() {
    // Grab a free port, then close it so nothing is listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let adapter = ChatAdapter::builder(ErrorClassifier::new(Locale::En))
        .api_key("id.secret")
        .base_url(format!("http://{}", addr))
        .retry_policy(fast_policy(2))
        .build()
        .unwrap();

    let err = adapter
        .chat("hello", ChatOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.retryable());
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let adapter = ChatAdapter::builder(ErrorClassifier::new(Locale::En))
        .api_key("id.secret")
        .base_url(format!("http://{}", addr))
        .timeout(Duration::from_millis(200))
        .retry_policy(fast_policy(1))
        .build()
        .unwrap();

    let err = adapter
        .chat("hello", ChatOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert!(err.retryable());
}
