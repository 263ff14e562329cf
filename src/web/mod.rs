// Web server — Axum-based read-only API over the latest topic snapshot.
//
// Every analysis request fetches the snapshot afresh through the configured
// SnapshotSource and derives its response from that one CSV. Nothing is
// cached between requests.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::sentiment::blender::SentimentBlender;
use crate::snapshot::source::{SnapshotSource, UpstreamError};
use crate::snapshot::Snapshot;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SnapshotSource>,
    pub blender: Arc<SentimentBlender>,
}

impl AppState {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self {
            source,
            blender: Arc::new(SentimentBlender::default()),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(source: Arc<dyn SnapshotSource>, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState::new(source));

    let addr = format!("{bind}:{port}");
    info!("topicscope API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/topic-info", get(handlers::topics::get_topic_info))
        .route("/wordcloud", get(handlers::wordcloud::get_wordcloud))
        .route("/sentiment", get(handlers::sentiment::get_sentiment))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check — always returns 200 OK without touching MLflow.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Map a snapshot fetch failure to a response.
///
/// Upstream HTTP failures keep their status; anything else (connection
/// refused, unreadable body) is a 502.
pub fn fetch_error_response(err: &anyhow::Error) -> Response {
    match err.downcast_ref::<UpstreamError>() {
        Some(upstream) => {
            let status = StatusCode::from_u16(upstream.status)
                .ok()
                .filter(|s| !s.is_success())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            api_error(status, &upstream.message)
        }
        None => api_error(StatusCode::BAD_GATEWAY, &format!("{err:#}")),
    }
}

/// Fetch and parse the current snapshot, or produce the error response.
pub async fn load_snapshot(state: &AppState) -> Result<Snapshot, Response> {
    let csv = state.source.fetch_csv().await.map_err(|e| {
        error!(error = %format!("{e:#}"), "Snapshot fetch failed");
        fetch_error_response(&e)
    })?;

    Snapshot::parse(&csv).map_err(|e| {
        error!(error = %format!("{e:#}"), "Snapshot artifact is malformed");
        api_error(
            StatusCode::BAD_GATEWAY,
            &format!("Invalid snapshot artifact: {e:#}"),
        )
    })
}
