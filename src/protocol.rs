//! Outbound move-request protocol for remote player agents.
//!
//! An agent is queried with a `GET` carrying the board dimensions, the
//! serialized board, and the mark whose move is requested. Anything other
//! than a well-formed `{"x": <int>, "y": <int>}` reply means the agent
//! produced no move this turn; that is never an error at this layer.

use crate::board::{Board, Mark};
use crate::player::Player;
use anyhow::{Context, Result};
use derive_getters::Getters;
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// A move proposed by an agent, 1-based board coordinates.
///
/// Coordinates are carried as received; bounds are validated by the caller
/// against the actual board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Move {
    /// 1-based column.
    x: i64,
    /// 1-based row.
    y: i64,
}

/// HTTP client for querying player agents.
#[derive(Debug, Clone)]
pub struct AgentClient {
    http: reqwest::Client,
}

impl AgentClient {
    /// Creates a client with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(request_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("failed to build agent HTTP client")?;
        Ok(Self { http })
    }

    /// Builds the move-request URL for an agent.
    ///
    /// Query parameters: `width`, `height`, `table` (one character per cell,
    /// row-major), and `player` (the mark to move). All values URL-encoded.
    ///
    /// # Errors
    ///
    /// Returns an error if the player's base URL is not a valid URL.
    pub fn move_url(base_url: &str, board: &Board, mark: Mark) -> Result<Url> {
        Url::parse_with_params(
            base_url,
            &[
                ("width", board.width().to_string()),
                ("height", board.height().to_string()),
                ("table", board.encode()),
                ("player", mark.to_string()),
            ],
        )
        .with_context(|| format!("invalid agent base URL '{base_url}'"))
    }

    /// Requests a move from the agent for the given mark.
    ///
    /// Returns `None` on any transport error, non-2xx status, or unparsable
    /// body. The failure is logged and the caller treats it as the player
    /// failing to move this turn.
    #[instrument(skip(self, board), fields(player = %player.user_name(), mark = %mark))]
    pub async fn request_move(&self, player: &Player, board: &Board, mark: Mark) -> Option<Move> {
        let url = match Self::move_url(player.network_address(), board, mark) {
            Ok(url) => url,
            Err(error) => {
                warn!(error = %error, "could not build move request");
                return None;
            }
        };

        let response = match self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(error = %error, "agent unreachable");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "agent answered with error status");
            return None;
        }

        match response.json::<Move>().await {
            Ok(proposed) => {
                debug!(x = proposed.x, y = proposed.y, "agent proposed a move");
                Some(proposed)
            }
            Err(error) => {
                warn!(error = %error, "unparsable agent reply");
                None
            }
        }
    }
}
