//! Shared test support: stub player agents served over HTTP.

#![allow(dead_code)]

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use gomoku_arena::Board;
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Query parameters every agent receives per the wire protocol.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentQuery {
    pub width: u32,
    pub height: u32,
    pub table: String,
    pub player: String,
}

/// A move-selection strategy driven by the received query.
pub type Strategy = fn(&AgentQuery) -> Option<(i64, i64)>;

#[derive(Clone)]
struct Scripted(Arc<Mutex<VecDeque<(i64, i64)>>>);

async fn scripted_move(State(script): State<Scripted>) -> Response {
    match script.0.lock().unwrap().pop_front() {
        Some((x, y)) => axum::Json(serde_json::json!({ "x": x, "y": y })).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

#[derive(Clone)]
struct Strategic(Strategy);

async fn strategic_move(
    State(Strategic(strategy)): State<Strategic>,
    Query(query): Query<AgentQuery>,
) -> Response {
    match strategy(&query) {
        Some((x, y)) => axum::Json(serde_json::json!({ "x": x, "y": y })).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub agent");
    let addr = listener.local_addr().expect("stub agent addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub agent serve");
    });
    format!("http://{addr}/")
}

/// Spawns an agent replying with the scripted moves in order, then 204s.
/// Returns its base URL.
pub async fn scripted_agent(moves: Vec<(i64, i64)>) -> String {
    let state = Scripted(Arc::new(Mutex::new(VecDeque::from(moves))));
    let app = Router::new()
        .route("/", get(scripted_move))
        .with_state(state);
    spawn(app).await
}

/// Spawns an agent that computes each move from the received query.
pub async fn strategy_agent(strategy: Strategy) -> String {
    let app = Router::new()
        .route("/", get(strategic_move))
        .with_state(Strategic(strategy));
    spawn(app).await
}

async fn not_json() -> &'static str {
    "certainly not json"
}

async fn server_error() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Spawns an agent that always answers with a non-JSON body.
pub async fn malformed_agent() -> String {
    spawn(Router::new().route("/", get(not_json))).await
}

/// Spawns an agent that always answers 500.
pub async fn failing_agent() -> String {
    spawn(Router::new().route("/", get(server_error))).await
}

/// First free cell in the given row, if any.
pub fn first_free_in_row(query: &AgentQuery, row: u32) -> Option<(i64, i64)> {
    let board = Board::decode(query.width, query.height, &query.table).ok()?;
    (1..=board.width())
        .find(|&x| board.get(x, row) == Some(gomoku_arena::Mark::Empty))
        .map(|x| (i64::from(x), i64::from(row)))
}

/// First free cell anywhere on the board, row-major, if any.
pub fn first_free(query: &AgentQuery) -> Option<(i64, i64)> {
    let board = Board::decode(query.width, query.height, &query.table).ok()?;
    for y in 1..=board.height() {
        for x in 1..=board.width() {
            if board.get(x, y) == Some(gomoku_arena::Mark::Empty) {
                return Some((i64::from(x), i64::from(y)));
            }
        }
    }
    None
}
