// GET /sentiment — per-topic sentiment summary.
//
// `{total_topics, topics}` with the most discussed topics first. A topic
// whose documents could not be decoded still appears, as neutral.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use crate::sentiment::report::build_sentiment_report;
use crate::web::{load_snapshot, AppState};

pub async fn get_sentiment(State(state): State<AppState>) -> Response {
    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let report = build_sentiment_report(&snapshot, state.blender.as_ref());
    debug!(topics = report.total_topics, "Built sentiment report");
    Json(report).into_response()
}
