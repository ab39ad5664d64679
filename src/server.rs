//! Read-only HTTP query endpoint for match histories.

use crate::store::{HistoryRecord, HistoryStore};
use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Builds the query router.
///
/// Routes: `GET /history/{id}` returning the stored history record as JSON,
/// or `404` when no record has that id.
pub fn history_router(histories: Arc<dyn HistoryStore>) -> Router {
    Router::new()
        .route("/history/{id}", get(get_history))
        .with_state(histories)
}

#[instrument(skip(histories))]
async fn get_history(
    State(histories): State<Arc<dyn HistoryStore>>,
    Path(id): Path<i32>,
) -> Result<Json<HistoryRecord>, StatusCode> {
    match histories.find(id) {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err(StatusCode::NOT_FOUND),
        Err(err) => {
            error!(error = %err, history_id = id, "History lookup failed");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Serves the query endpoint on the given address until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
#[instrument(skip(histories))]
pub async fn serve(host: &str, port: u16, histories: Arc<dyn HistoryStore>) -> Result<()> {
    let app = history_router(histories);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!(host, port, "History endpoint listening");
    axum::serve(listener, app).await?;
    Ok(())
}
