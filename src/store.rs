//! Persistence collaborators: domain records and injectable store traits.
//!
//! The tournament core consumes these traits; it never assumes a concrete
//! backend. The sqlite implementation lives in [`crate::db`].

use crate::player::Player;
use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a tournament.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    /// Rounds are still being played.
    Running,
    /// The total-duration timer has fired; no further rounds.
    Finished,
}

/// A tournament run, transitioning `Running -> Finished` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Game {
    /// Tournament identifier.
    id: String,
    /// Current status.
    status: GameStatus,
}

impl Game {
    /// Sets the tournament status.
    pub fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

/// Point values awarded per match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreValue {
    /// Decisive win, credited to the winner only.
    Victory,
    /// Drawn match, credited to both participants.
    Draw,
}

impl ScoreValue {
    /// Points credited for this outcome.
    pub fn points(self) -> i32 {
        match self {
            ScoreValue::Victory => 3,
            ScoreValue::Draw => 1,
        }
    }
}

/// Stored record of one completed match.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Queryable,
    Selectable,
    Identifiable,
    Getters,
)]
#[diesel(table_name = crate::db::schema::histories)]
pub struct HistoryRecord {
    /// Record identifier.
    id: i32,
    /// Tournament this match belongs to.
    game_id: String,
    /// Round number, starting at 1.
    round: i32,
    /// Match number within the round, starting at 1.
    match_number: i32,
    /// Name of the player holding mark X.
    player_one: String,
    /// Name of the player holding mark O.
    player_two: String,
    /// Winner's name, or `None` on a draw.
    winner: Option<String>,
    /// Accepted moves over the match.
    steps: i32,
    /// Insertion timestamp.
    recorded_at: NaiveDateTime,
}

/// Insertable history record for a freshly completed match.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = crate::db::schema::histories)]
pub struct NewHistory {
    game_id: String,
    round: i32,
    match_number: i32,
    player_one: String,
    player_two: String,
    winner: Option<String>,
    steps: i32,
}

/// Stored score credit for one player in one match.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Queryable,
    Selectable,
    Identifiable,
    Getters,
)]
#[diesel(table_name = crate::db::schema::scores)]
pub struct ScoreRecord {
    /// Record identifier.
    id: i32,
    /// Tournament this score belongs to.
    game_id: String,
    /// Round number.
    round: i32,
    /// Match number within the round.
    match_number: i32,
    /// Credited player.
    player_name: String,
    /// Points awarded.
    points: i32,
    /// Insertion timestamp.
    recorded_at: NaiveDateTime,
}

/// Insertable score credit.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = crate::db::schema::scores)]
pub struct NewScore {
    game_id: String,
    round: i32,
    match_number: i32,
    player_name: String,
    points: i32,
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::new(format!("diesel error: {err}"))
    }
}

impl From<diesel::ConnectionError> for StoreError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::new(format!("connection error: {err}"))
    }
}

/// Read access to the player roster.
pub trait PlayerStore: Send + Sync {
    /// Returns every registered player in registration order.
    fn find_all(&self) -> Result<Vec<Player>, StoreError>;
}

/// Tournament record persistence.
pub trait GameStore: Send + Sync {
    /// Looks up a tournament by id.
    fn find_one(&self, id: &str) -> Result<Option<Game>, StoreError>;

    /// Saves a tournament, inserting or updating by id.
    fn save(&self, game: &Game) -> Result<(), StoreError>;
}

/// Append-only match history persistence.
pub trait HistoryStore: Send + Sync {
    /// Appends one history record, returning it with its assigned id.
    fn save(&self, history: NewHistory) -> Result<HistoryRecord, StoreError>;

    /// Looks up a history record by id.
    fn find(&self, id: i32) -> Result<Option<HistoryRecord>, StoreError>;
}

/// Append-only score persistence.
pub trait ScoreStore: Send + Sync {
    /// Appends one score credit, returning it with its assigned id.
    fn save(&self, score: NewScore) -> Result<ScoreRecord, StoreError>;
}
