use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use enhancer_ai::refiner::{PromptRefiner, RefineError};
use enhancer_ai::urls::router;
use enhancer_ai::ENHANCEMENT_INSTRUCTION;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Deterministic stand-in: key "bad" or a blank key is rejected, "down"
/// fails upstream.
#[derive(Default)]
struct StubRefiner {
    calls: AtomicUsize,
}

#[async_trait]
impl PromptRefiner for StubRefiner {
    async fn refine(
        &self,
        instruction: &str,
        prompt: &str,
        api_key: &str,
    ) -> Result<String, RefineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(instruction, ENHANCEMENT_INSTRUCTION);
        match api_key {
            "bad" => Err(RefineError::InvalidCredential),
            key if key.trim().is_empty() => Err(RefineError::InvalidCredential),
            "down" => Err(RefineError::Upstream {
                status: 502,
                body: "gateway timeout".into(),
            }),
            _ => Ok(format!("Improved: {prompt}")),
        }
    }
}

async fn post_improve(app: Router, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/improve-prompt")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn returns_original_and_improved() {
    let stub = Arc::new(StubRefiner::default());
    let (status, body) = post_improve(
        router(stub.clone()),
        json!({ "prompt": "draw a cat", "apiKey": "sk-test" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "original_prompt": "draw a cat", "improved_prompt": "Improved: draw a cat" })
    );
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn empty_inputs_never_reach_the_provider() {
    let stub = Arc::new(StubRefiner::default());
    let cases = [
        (json!({ "prompt": "", "apiKey": "sk-test" }), "Prompt cannot be empty."),
        (json!({ "apiKey": "sk-test" }), "Prompt cannot be empty."),
        (json!({ "prompt": "draw a cat", "apiKey": "" }), "API key is required."),
        (json!({ "prompt": "draw a cat" }), "API key is required."),
    ];

    for (payload, detail) in cases {
        let (status, body) = post_improve(router(stub.clone()), payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], detail);
    }
    assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_prompt_is_forwarded_verbatim() {
    let stub = Arc::new(StubRefiner::default());
    let (status, body) = post_improve(
        router(stub.clone()),
        json!({ "prompt": "  ", "apiKey": "sk-test" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "original_prompt": "  ", "improved_prompt": "Improved:   " })
    );
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn whitespace_key_reaches_the_provider_and_is_401() {
    let stub = Arc::new(StubRefiner::default());
    let (status, body) = post_improve(
        router(stub.clone()),
        json!({ "prompt": "draw a cat", "apiKey": "  " }),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid OpenAI API key.");
    assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_key_is_401() {
    let (status, body) = post_improve(
        router(Arc::new(StubRefiner::default())),
        json!({ "prompt": "draw a cat", "apiKey": "bad" }),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid OpenAI API key.");
}

#[tokio::test]
async fn upstream_failure_is_500_with_cause() {
    let (status, body) = post_improve(
        router(Arc::new(StubRefiner::default())),
        json!({ "prompt": "draw a cat", "apiKey": "down" }),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("An unexpected error occurred: "));
    assert!(detail.contains("502"));
    assert!(detail.contains("gateway timeout"));
}
