//! HttpChatTransport against a local axum chat endpoint.

use std::sync::Arc;

use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use chatbox::{
    ChatTransport, HttpChatTransport, InMemoryChatSurface, SubmitMessageUseCase, ERROR_TEXT,
    FALLBACK_TEXT,
};

/// Serves `app` on an ephemeral port and returns its base URL.
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });
    format!("http://{addr}")
}

async fn echo_request(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let message = body["message"].as_str().unwrap_or_default().to_string();
    Json(json!({ "response": format!("{content_type} | {message}") }))
}

#[tokio::test]
async fn test_posts_json_message() {
    let base = spawn_server(Router::new().route("/chat", post(echo_request))).await;
    let transport = HttpChatTransport::new(base);

    let reply = transport.send("hello").await.expect("Request should succeed");

    assert_eq!(reply.text(), Some("application/json | hello"));
}

#[tokio::test]
async fn test_reply_text_is_returned() {
    let app = Router::new().route("/chat", post(|| async { Json(json!({ "response": "hi" })) }));
    let transport = HttpChatTransport::new(spawn_server(app).await);

    let reply = transport.send("x").await.unwrap();
    assert_eq!(reply.text(), Some("hi"));
}

#[tokio::test]
async fn test_body_without_response_field_is_empty_reply() {
    let app = Router::new().route("/chat", post(|| async { Json(json!({})) }));
    let transport = HttpChatTransport::new(spawn_server(app).await);

    let reply = transport.send("x").await.unwrap();
    assert_eq!(reply.text(), None);
}

#[tokio::test]
async fn test_server_error_status_is_failure_regardless_of_body() {
    let app = Router::new().route(
        "/chat",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "response": "should be ignored", "error": "boom" })),
            )
        }),
    );
    let transport = HttpChatTransport::new(spawn_server(app).await);

    let err = transport.send("x").await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let app = Router::new().route("/chat", post(|| async { "<html>not json</html>" }));
    let transport = HttpChatTransport::new(spawn_server(app).await);

    let err = transport.send("x").await.unwrap_err();
    assert!(err.is_decode(), "expected decode error, got {err}");
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = HttpChatTransport::new(format!("http://{addr}"));

    let err = transport.send("x").await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err}");
}

#[tokio::test]
async fn test_submit_end_to_end_over_http() {
    let app = Router::new().route("/chat", post(|| async { Json(json!({ "response": "" })) }));
    let base = spawn_server(app).await;

    let surface = Arc::new(InMemoryChatSurface::new());
    let use_case = SubmitMessageUseCase::new(surface.clone(), Arc::new(HttpChatTransport::new(&base)));
    use_case.submit("hello").unwrap().await;

    let missing = Arc::new(HttpChatTransport::new(format!("{base}/missing")));
    let use_case = SubmitMessageUseCase::new(surface.clone(), missing);
    use_case.submit("again").unwrap().await;

    assert_eq!(
        surface.log().texts(),
        vec!["hello", FALLBACK_TEXT, "again", ERROR_TEXT]
    );
}
