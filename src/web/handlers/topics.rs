// GET /topic-info — the snapshot's topic table, row by row.
//
// Pass-through: every CSV column is returned under its header name with
// numeric columns typed as numbers.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::web::{load_snapshot, AppState};

pub async fn get_topic_info(State(state): State<AppState>) -> Response {
    match load_snapshot(&state).await {
        Ok(snapshot) => Json(snapshot.records).into_response(),
        Err(response) => response,
    }
}
