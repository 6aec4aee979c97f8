pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/posts/options", get(handlers::handle_options))
        .route("/api/v1/posts/generate", post(handlers::handle_generate))
        .route("/api/v1/posts/download", post(handlers::handle_download))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::{LlmError, TextGenerator};

    struct CannedGenerator(Result<String, u16>);

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "upstream failure".to_string(),
                }),
            }
        }
    }

    fn router_with(response: Result<&str, u16>) -> Router {
        build_router(AppState {
            generator: Arc::new(CannedGenerator(response.map(str::to_string))),
        })
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router_with(Ok(""))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_options_lists_tones_and_bounds() {
        let response = router_with(Ok(""))
            .oneshot(
                Request::builder()
                    .uri("/api/v1/posts/options")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["tones"].as_array().unwrap().len(), 5);
        assert_eq!(body["default_tone"], "Professional");
        assert_eq!(body["count"]["max"], 6);
        assert_eq!(body["max_words"]["default"], 180);
    }

    #[tokio::test]
    async fn test_generate_returns_cleaned_posts() {
        let router = router_with(Ok(
            r##"Here you go: {"posts": [{"title": "Hi", "body": "What the hell.", "hashtags": ["#A", "#a"]}]}"##,
        ));
        let response = router
            .oneshot(json_post(
                "/api/v1/posts/generate",
                json!({"topic": "Teams", "include_hashtags": true}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["post_count"], 1);
        assert_eq!(body["posts"][0]["body"], "What the heck.");
        assert_eq!(body["posts"][0]["hashtags"], json!(["#A"]));
        assert!(body["generation_id"].is_string());
    }

    #[tokio::test]
    async fn test_generate_empty_result_is_ok() {
        let response = router_with(Ok("   "))
            .oneshot(json_post("/api/v1/posts/generate", json!({"topic": "Teams"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["post_count"], 0);
        assert_eq!(body["posts"], json!([]));
    }

    #[tokio::test]
    async fn test_generate_blank_topic_is_bad_request() {
        let response = router_with(Ok("{}"))
            .oneshot(json_post("/api/v1/posts/generate", json!({"topic": " "})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_llm_failure_is_bad_gateway() {
        let response = router_with(Err(500))
            .oneshot(json_post("/api/v1/posts/generate", json!({"topic": "Teams"})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_download_renders_text_attachment() {
        let response = router_with(Ok(""))
            .oneshot(json_post(
                "/api/v1/posts/download",
                json!({"posts": [{"title": "T", "body": "B", "hashtags": ["#x"]}]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"linkedin_posts.txt\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"=== Post 1 ===\nT\nB\n#x\n\n");
    }

    #[tokio::test]
    async fn test_download_accepts_posts_without_title() {
        let response = router_with(Ok(""))
            .oneshot(json_post(
                "/api/v1/posts/download",
                json!({"posts": [{"body": "Body only"}]}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"=== Post 1 ===\nBody only\n\n");
    }
}
