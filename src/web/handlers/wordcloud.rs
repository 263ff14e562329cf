// GET /wordcloud — top words across all clustered topics.
//
// Returns `[{text, value}]`, most frequent first, at most 200 entries.
// Documents of the outlier topic are never counted.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use crate::web::{load_snapshot, AppState};
use crate::wordcloud::build_word_cloud;

pub async fn get_wordcloud(State(state): State<AppState>) -> Response {
    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let cloud = build_word_cloud(snapshot.documents());
    debug!(words = cloud.len(), "Built word cloud");
    Json(cloud).into_response()
}
