//! Row types bridging sqlite tables to domain types.

use diesel::prelude::*;
use std::str::FromStr;

use crate::db::schema;
use crate::player::Player;
use crate::store::{Game, GameStatus, StoreError};

/// Player roster row.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schema::players)]
pub(crate) struct PlayerRow {
    pub id: i32,
    pub user_name: String,
    pub network_address: String,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player::new(row.user_name, row.network_address)
    }
}

/// Insertable player row for registration.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::players)]
pub(crate) struct NewPlayerRow {
    pub user_name: String,
    pub network_address: String,
}

/// Tournament row; status is stored as text.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schema::games)]
pub(crate) struct GameRow {
    pub id: String,
    pub status: String,
}

impl TryFrom<GameRow> for Game {
    type Error = StoreError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        let status = GameStatus::from_str(&row.status)
            .map_err(|_| StoreError::new(format!("unknown game status '{}'", row.status)))?;
        Ok(Game::new(row.id, status))
    }
}

/// Insertable tournament row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::games)]
pub(crate) struct NewGameRow {
    pub id: String,
    pub status: String,
}
