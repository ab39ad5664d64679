//! Match engine: plays one full match between two remote players.

use crate::board::{Board, Mark};
use crate::player::Player;
use crate::protocol::AgentClient;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Outcome of one completed match.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MatchOutcome {
    /// Winning player, or `None` on a draw.
    winner: Option<Player>,
    /// Number of accepted moves over the whole match.
    steps: u32,
}

/// Drives a single match: alternating plies, board mutation, and outcome
/// detection.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    client: AgentClient,
    board_width: u32,
    board_height: u32,
}

impl MatchEngine {
    /// Creates an engine playing on boards of the given dimensions.
    pub fn new(client: AgentClient, board_width: u32, board_height: u32) -> Self {
        Self {
            client,
            board_width,
            board_height,
        }
    }

    /// Plays one match between the two players on a fresh board.
    ///
    /// Marks alternate strictly starting with X (held by `player_x`). A ply
    /// whose agent yields no usable move leaves the board unchanged and
    /// passes the turn. The match ends on a winning run, a full board, or
    /// when the ply budget runs out (which counts as a draw, so a match
    /// against unresponsive agents still terminates).
    #[instrument(skip(self), fields(player_x = %player_x.user_name(), player_o = %player_o.user_name()))]
    pub async fn play(&self, player_x: &Player, player_o: &Player) -> MatchOutcome {
        let mut board = Board::new(self.board_width, self.board_height);
        let mut turn = Mark::X;
        let mut steps = 0u32;
        let ply_budget = 2 * (self.board_width as u64) * (self.board_height as u64);

        for ply in 0..ply_budget {
            let mover = match turn {
                Mark::X => player_x,
                _ => player_o,
            };

            if let Some(cell) = self.one_ply(&mut board, mover, turn).await {
                steps += 1;
                debug!(ply, cell = ?cell, player = %mover.user_name(), "move accepted");
                if let Some(winning_mark) = board.winner() {
                    let winner = match winning_mark {
                        Mark::X => player_x.clone(),
                        _ => player_o.clone(),
                    };
                    info!(winner = %winner.user_name(), steps, "match won");
                    return MatchOutcome {
                        winner: Some(winner),
                        steps,
                    };
                }
                if board.is_full() {
                    info!(steps, "board full, match drawn");
                    return MatchOutcome {
                        winner: None,
                        steps,
                    };
                }
            }

            turn = turn.opponent();
        }

        info!(steps, "ply budget exhausted, match drawn");
        MatchOutcome {
            winner: None,
            steps,
        }
    }

    /// Requests and applies a single move. Returns the marked cell, or
    /// `None` when the agent produced no usable move (no reply, unparsable
    /// reply, or out-of-range coordinates).
    async fn one_ply(&self, board: &mut Board, mover: &Player, mark: Mark) -> Option<(u32, u32)> {
        let proposed = self.client.request_move(mover, board, mark).await?;
        let x = u32::try_from(*proposed.x()).ok()?;
        let y = u32::try_from(*proposed.y()).ok()?;
        match board.mark(x, y, mark) {
            Ok(()) => Some((x, y)),
            Err(error) => {
                debug!(error = %error, player = %mover.user_name(), "move rejected");
                None
            }
        }
    }
}
