//! Axum router configuration with middleware.
//!
//! The chat API lives under `/api/chat`. Middleware: CORS, tracing.
//!
//! The built widget SPA is served from `web_dir`. API routes and `/health`
//! take priority; any other path falls through to `index.html` for
//! client-side routing. If the directory does not exist, only the API is
//! served.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState, web_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/api/chat", post(handlers::chat::send_chat))
        .route("/api/chat/{session_id}", get(handlers::chat::get_history))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if std::path::Path::new(web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "SPA static file serving enabled");
    } else {
        tracing::warn!(path = %web_dir, "web directory not found, serving API only");
    }

    router
}

/// GET /health - Liveness check.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::http::StatusCode;
    use secrecy::SecretString;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use invitechat_infra::llm::openrouter::OpenRouterClient;
    use invitechat_infra::store::backend::MessageStoreBackend;
    use invitechat_infra::store::memory::InMemoryMessageStore;
    use invitechat_observe::capture::LogCapture;
    use invitechat_types::config::UpstreamConfig;

    use super::*;
    use crate::http::error::{COMPLETION_FAILED_MESSAGE, MISCONFIGURED_MESSAGE, VALIDATION_MESSAGE};

    const PRO_REPLY: &str = r#"{
        "id": "gen-1",
        "choices": [{"message": {"role": "assistant", "content": "Gói Pro có giá 289.000đ"}}]
    }"#;

    /// Fake chat-completions provider returning a fixed response.
    async fn spawn_upstream(status: StatusCode, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let handler_calls = Arc::clone(&calls);
        let app = Router::new().route(
            "/chat/completions",
            post(move || {
                let calls = Arc::clone(&handler_calls);
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    (status, body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), calls)
    }

    /// Serve the full app on an ephemeral port and return its base URL.
    async fn spawn_app(upstream_url: &str, api_key: Option<&str>, web_dir: &str) -> String {
        let config = UpstreamConfig {
            base_url: upstream_url.to_string(),
            timeout_secs: 5,
            ..UpstreamConfig::default()
        };
        let client =
            OpenRouterClient::new(&config, api_key.map(|k| SecretString::from(k.to_string())))
                .unwrap();
        let store = MessageStoreBackend::Memory(InMemoryMessageStore::new());
        let router = build_router(AppState::new(store, client), web_dir);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        format!("http://{addr}")
    }

    async fn history(app: &str, session_id: &str) -> Vec<Value> {
        let body: Value = reqwest::get(format!("{app}/api/chat/{session_id}"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        body["messages"].as_array().unwrap().clone()
    }

    #[tokio::test]
    async fn test_chat_turn_returns_reply_and_records_history() {
        let (upstream, calls) = spawn_upstream(StatusCode::OK, PRO_REPLY).await;
        let app = spawn_app(&upstream, Some("sk-test"), "/nonexistent-web-dir").await;

        let resp = reqwest::Client::new()
            .post(format!("{app}/api/chat"))
            .json(&json!({"message": "Giá gói Pro?", "sessionId": "s1"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"response": "Gói Pro có giá 289.000đ"}));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let messages = history(&app, "s1").await;
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["sender"], "user");
        assert_eq!(messages[0]["content"], "Giá gói Pro?");
        assert_eq!(messages[0]["sessionId"], "s1");
        assert_eq!(messages[1]["sender"], "bot");
        assert_eq!(messages[1]["content"], "Gói Pro có giá 289.000đ");
        assert!(messages[0]["id"].as_i64().unwrap() < messages[1]["id"].as_i64().unwrap());
    }

    #[tokio::test]
    async fn test_upstream_failure_keeps_user_message_only() {
        let (upstream, _calls) =
            spawn_upstream(StatusCode::SERVICE_UNAVAILABLE, r#"{"error":"busy"}"#).await;
        let app = spawn_app(&upstream, Some("sk-test"), "/nonexistent-web-dir").await;

        let resp = reqwest::Client::new()
            .post(format!("{app}/api/chat"))
            .json(&json!({"message": "Xin chào", "sessionId": "s2"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], COMPLETION_FAILED_MESSAGE);
        assert!(body.get("response").is_none());

        let messages = history(&app, "s2").await;
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["sender"], "user");
    }

    #[tokio::test]
    async fn test_invalid_requests_are_rejected_without_writes() {
        let (upstream, calls) = spawn_upstream(StatusCode::OK, PRO_REPLY).await;
        let app = spawn_app(&upstream, Some("sk-test"), "/nonexistent-web-dir").await;
        let http = reqwest::Client::new();

        let bodies = [
            json!({"sessionId": "s3"}),
            json!({"message": "   ", "sessionId": "s3"}),
            json!({"message": "hi"}),
            json!({"message": "hi", "sessionId": ""}),
        ];
        for body in bodies {
            let resp = http
                .post(format!("{app}/api/chat"))
                .json(&body)
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {body}");
            let err: Value = resp.json().await.unwrap();
            assert_eq!(err["error"], VALIDATION_MESSAGE);
        }

        let resp = http
            .post(format!("{app}/api/chat"))
            .header("content-type", "application/json")
            .body("not json")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(history(&app, "s3").await.is_empty());
    }

    #[tokio::test]
    async fn test_rejected_requests_are_logged() {
        let (upstream, _calls) = spawn_upstream(StatusCode::OK, PRO_REPLY).await;
        let app = spawn_app(&upstream, Some("sk-test"), "/nonexistent-web-dir").await;
        let (logs, _guard) = LogCapture::install();
        let http = reqwest::Client::new();

        let resp = http
            .post(format!("{app}/api/chat"))
            .json(&json!({"sessionId": "s-missing"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = http
            .post(format!("{app}/api/chat"))
            .json(&json!({"message": "  ", "sessionId": "s-blank"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let out = logs.contents();
        assert!(out.contains("chat request body rejected"), "{out}");
        assert!(out.contains("missing field `message`"), "{out}");
        assert!(out.contains("chat turn rejected"), "{out}");
        assert!(out.contains("session_id=s-blank"), "{out}");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_upstream_call() {
        let (upstream, calls) = spawn_upstream(StatusCode::OK, PRO_REPLY).await;
        let app = spawn_app(&upstream, None, "/nonexistent-web-dir").await;

        let resp = reqwest::Client::new()
            .post(format!("{app}/api/chat"))
            .json(&json!({"message": "Xin chào", "sessionId": "s4"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], MISCONFIGURED_MESSAGE);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_session_has_empty_history() {
        let (upstream, _calls) = spawn_upstream(StatusCode::OK, PRO_REPLY).await;
        let app = spawn_app(&upstream, Some("sk-test"), "/nonexistent-web-dir").await;

        let resp = reqwest::get(format!("{app}/api/chat/never-seen")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"messages": []}));
    }

    #[tokio::test]
    async fn test_unknown_paths_fall_back_to_index_html() {
        let web = TempDir::new().unwrap();
        std::fs::write(web.path().join("index.html"), "<html>widget</html>").unwrap();
        let web_dir = web.path().to_str().unwrap().to_string();

        let (upstream, _calls) = spawn_upstream(StatusCode::OK, PRO_REPLY).await;
        let app = spawn_app(&upstream, Some("sk-test"), &web_dir).await;

        let resp = reqwest::get(format!("{app}/mau-thiep/123")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), "<html>widget</html>");

        // API routes still take priority over the fallback.
        let resp = reqwest::get(format!("{app}/api/chat/s5")).await.unwrap();
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, json!({"messages": []}));
    }

    #[tokio::test]
    async fn test_health_check() {
        let (upstream, _calls) = spawn_upstream(StatusCode::OK, PRO_REPLY).await;
        let app = spawn_app(&upstream, None, "/nonexistent-web-dir").await;

        let body: Value = reqwest::get(format!("{app}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }
}
