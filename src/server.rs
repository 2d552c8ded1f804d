//! Relay HTTP Server
//!
//! Two routes:
//! - `GET /health` — liveness check for process supervision
//! - `POST /chat`  — validate the prompt, forward it upstream, relay the result
//!
//! Requests are independent; the only suspension point per request is the
//! outbound completion call. No shared mutable state, no locking.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::RelayConfig;
use crate::llm_client::{LlmClient, LlmError};

pub struct AppState {
    pub llm: LlmClient,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    // An absent field deserializes to empty and fails validation the same
    // way an empty string does.
    #[serde(default)]
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// POST /chat - Forward a prompt to the completion API
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<Value>)> {
    if req.prompt.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Prompt is required" })),
        ));
    }

    debug!("Received prompt: {}", req.prompt);

    match state.llm.complete(&req.prompt).await {
        Ok(response) => {
            info!("Relayed completion: {} chars", response.len());
            Ok(Json(ChatResponse { response }))
        }
        Err(LlmError::Upstream { message }) => {
            warn!("Completion API error: {}", message);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": message })),
            ))
        }
        Err(LlmError::UnexpectedFormat { raw }) => {
            warn!("Unexpected upstream response shape: {}", raw);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Unexpected upstream response format",
                    "raw": raw,
                })),
            ))
        }
        Err(LlmError::Transport(err)) => {
            error!("Upstream request failed: {:#}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Server crashed" })),
            ))
        }
    }
}

fn cors_layer(config: &RelayConfig) -> CorsLayer {
    if let Some(origin) = &config.frontend_origin {
        match origin.parse::<HeaderValue>() {
            Ok(origin) => {
                // Credentials cannot be combined with wildcards, so the
                // allowed methods and headers are spelled out.
                return CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE])
                    .allow_credentials(true);
            }
            Err(_) => {
                warn!("Invalid FRONTEND_ORIGIN {:?}, allowing any origin", origin);
            }
        }
    }

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_router(config: &RelayConfig) -> Router {
    let state = Arc::new(AppState {
        llm: LlmClient::new(config),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/chat", post(chat))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config))
        .with_state(state)
}

pub async fn run_server(config: RelayConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Relay listening on http://{}", addr);
    info!("  GET  /health - Liveness check");
    info!("  POST /chat   - Forward prompt to {}", config.api_base);

    axum::serve(listener, app).await?;

    Ok(())
}
