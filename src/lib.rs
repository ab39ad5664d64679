//! Gomoku Arena - automated round-robin tournaments between HTTP player agents
//!
//! The crate runs a time-boxed tournament: for a fixed total duration it
//! repeatedly pairs every registered player against every other player,
//! drives each pairing through a turn-based match against the players'
//! remote HTTP agents, and records history and score records per match.
//!
//! # Architecture
//!
//! - **Board**: grid state, serialization, and win detection
//! - **Protocol**: the outbound move-request convention agents implement
//! - **Engine**: one full match between two players
//! - **Scheduler**: the timed round loop with persistence side effects
//! - **Store / Db**: injectable persistence traits and their sqlite backend
//! - **Server**: read-only history query endpoint
//!
//! # Example
//!
//! ```no_run
//! use gomoku_arena::{
//!     AgentClient, Database, MatchEngine, TournamentConfig, TournamentScheduler,
//! };
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = TournamentConfig::default();
//! let db = Arc::new(Database::open("arena.db".to_string())?);
//! db.create_game("game_1")?;
//!
//! let client = AgentClient::new(config.request_timeout())?;
//! let engine = MatchEngine::new(client, *config.board_width(), *config.board_height());
//! let scheduler = TournamentScheduler::new(
//!     engine,
//!     db.clone(),
//!     db.clone(),
//!     db.clone(),
//!     db,
//!     config,
//! );
//! scheduler.run("game_1").await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod db;
mod engine;
mod player;
mod protocol;
mod scheduler;
mod server;
mod store;

// Crate-level exports - Board
pub use board::{Board, BoardError, Mark};

// Crate-level exports - Players and protocol
pub use player::Player;
pub use protocol::{AgentClient, Move};

// Crate-level exports - Match engine
pub use engine::{MatchEngine, MatchOutcome};

// Crate-level exports - Scheduler and configuration
pub use config::{ConfigError, TournamentConfig};
pub use scheduler::TournamentScheduler;

// Crate-level exports - Persistence
pub use db::Database;
pub use store::{
    Game, GameStatus, GameStore, HistoryRecord, HistoryStore, NewHistory, NewScore, PlayerStore,
    ScoreRecord, ScoreStore, ScoreValue, StoreError,
};

// Crate-level exports - Query endpoint
pub use server::{history_router, serve};
