//! The assistant backend: a single-route axum server for `/api/chat`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Json;
use axum::routing::post;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::responder::Responder;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    responder: Arc<Responder>,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder: Arc::new(responder),
        }
    }
}

/// Builds the router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", post(chat_api))
        .with_state(state)
}

/// Runs the server until it fails or is interrupted.
pub async fn run(port: u16, tasks_path: PathBuf) -> Result<()> {
    let state = AppState::new(Responder::new(tasks_path));
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    tracing::info!(%port, "ava assistant listening");
    axum::serve(listener, router)
        .await
        .context("Server failed")
}

#[derive(Debug, Default, Deserialize)]
struct ChatPayload {
    #[serde(default)]
    message: Option<String>,
}

/// `POST /api/chat` — the one protocol boundary.
///
/// The body is parsed leniently: an unparsable body is treated as an empty
/// payload and rejected for its missing `message`, not for its syntax.
async fn chat_api(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Value>) {
    if !is_json_content_type(&headers) {
        return (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(json!({"error": "Content-Type must be application/json"})),
        );
    }

    let payload: ChatPayload = serde_json::from_str(&body).unwrap_or_default();
    let message = payload.message.as_deref().unwrap_or("").trim().to_string();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Field 'message' cannot be empty"})),
        );
    }

    match state.responder.respond(&message).await {
        Ok(reply) => {
            tracing::debug!(chars = message.len(), "chat reply generated");
            (StatusCode::OK, Json(json!({"reply": reply})))
        }
        Err(e) => {
            tracing::error!(error = %e, "responder failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal error while generating reply"})),
            )
        }
    }
}

/// Accepts `application/json` and `+json` suffixed media types.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| {
            let essence = value.split(';').next().unwrap_or("").trim();
            essence.eq_ignore_ascii_case("application/json")
                || essence.to_ascii_lowercase().ends_with("+json")
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        headers
    }

    #[test]
    fn test_is_json_content_type() {
        assert!(is_json_content_type(&json_headers()));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            "application/json; charset=utf-8".parse().unwrap(),
        );
        assert!(is_json_content_type(&headers));

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/ld+json".parse().unwrap());
        assert!(is_json_content_type(&headers));

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        assert!(!is_json_content_type(&headers));

        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn test_payload_parses_leniently() {
        let payload: ChatPayload = serde_json::from_str("not json").unwrap_or_default();
        assert!(payload.message.is_none());

        let payload: ChatPayload = serde_json::from_str("{}").unwrap_or_default();
        assert!(payload.message.is_none());

        let payload: ChatPayload =
            serde_json::from_str(r#"{"message": "hello"}"#).unwrap_or_default();
        assert_eq!(payload.message.as_deref(), Some("hello"));
    }
}
