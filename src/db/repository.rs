//! Sqlite-backed implementation of the store traits.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument};

use crate::db::models::{GameRow, NewGameRow, NewPlayerRow, PlayerRow};
use crate::db::schema;
use crate::player::Player;
use crate::store::{
    Game, GameStatus, GameStore, HistoryRecord, HistoryStore, NewHistory, NewScore, PlayerStore,
    ScoreRecord, ScoreStore, StoreError,
};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Sqlite database implementing every store trait.
///
/// Holds a path and connects per call, so one value can be shared freely
/// across the scheduler and the query endpoint.
#[derive(Debug, Clone)]
pub struct Database {
    db_path: String,
}

impl Database {
    /// Opens the database at the given path, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the database cannot be opened or migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn open(db_path: String) -> Result<Self, StoreError> {
        info!(path = %db_path, "Opening tournament database");
        let mut conn = SqliteConnection::establish(&db_path)?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("migrations failed: {e}")))?;
        Ok(Self { db_path })
    }

    /// Establishes a database connection.
    fn connection(&self) -> Result<SqliteConnection, StoreError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path).map_err(|e| {
            StoreError::new(format!("failed to connect to '{}': {e}", self.db_path))
        })
    }

    /// Registers a new player.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the name is already taken or a database
    /// error occurs.
    #[instrument(skip(self))]
    pub fn add_player(
        &self,
        user_name: String,
        network_address: String,
    ) -> Result<Player, StoreError> {
        let mut conn = self.connection()?;
        let new_row = NewPlayerRow {
            user_name,
            network_address,
        };
        let row: PlayerRow = diesel::insert_into(schema::players::table)
            .values(&new_row)
            .returning(PlayerRow::as_returning())
            .get_result(&mut conn)?;
        info!(player_id = row.id, player = %row.user_name, address = %row.network_address, "Player registered");
        Ok(row.into())
    }

    /// Creates a new tournament record in `Running` status.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on database failure.
    #[instrument(skip(self))]
    pub fn create_game(&self, id: &str) -> Result<Game, StoreError> {
        let game = Game::new(id.to_string(), GameStatus::Running);
        GameStore::save(self, &game)?;
        info!(game_id = %id, "Tournament created");
        Ok(game)
    }

    /// Returns every history record of a tournament, in play order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on database failure.
    #[instrument(skip(self))]
    pub fn histories_for_game(&self, game_id: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        let mut conn = self.connection()?;
        let records = schema::histories::table
            .filter(schema::histories::game_id.eq(game_id))
            .order((
                schema::histories::round.asc(),
                schema::histories::match_number.asc(),
            ))
            .load::<HistoryRecord>(&mut conn)?;
        debug!(count = records.len(), "Histories loaded");
        Ok(records)
    }

    /// Returns every score credit of a tournament, in play order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on database failure.
    #[instrument(skip(self))]
    pub fn scores_for_game(&self, game_id: &str) -> Result<Vec<ScoreRecord>, StoreError> {
        let mut conn = self.connection()?;
        let records = schema::scores::table
            .filter(schema::scores::game_id.eq(game_id))
            .order((
                schema::scores::round.asc(),
                schema::scores::match_number.asc(),
            ))
            .load::<ScoreRecord>(&mut conn)?;
        debug!(count = records.len(), "Scores loaded");
        Ok(records)
    }
}

impl PlayerStore for Database {
    #[instrument(skip(self))]
    fn find_all(&self) -> Result<Vec<Player>, StoreError> {
        let mut conn = self.connection()?;
        let rows = schema::players::table
            .select(PlayerRow::as_select())
            .order(schema::players::id.asc())
            .load(&mut conn)?;
        debug!(count = rows.len(), "Players loaded");
        Ok(rows.into_iter().map(Player::from).collect())
    }
}

impl GameStore for Database {
    #[instrument(skip(self))]
    fn find_one(&self, id: &str) -> Result<Option<Game>, StoreError> {
        let mut conn = self.connection()?;
        let row = schema::games::table
            .find(id)
            .select(GameRow::as_select())
            .first(&mut conn)
            .optional()?;
        row.map(Game::try_from).transpose()
    }

    #[instrument(skip(self, game), fields(game_id = %game.id(), status = %game.status()))]
    fn save(&self, game: &Game) -> Result<(), StoreError> {
        let mut conn = self.connection()?;
        let status = game.status().to_string();
        let updated = diesel::update(schema::games::table.find(game.id()))
            .set(schema::games::status.eq(&status))
            .execute(&mut conn)?;
        if updated == 0 {
            diesel::insert_into(schema::games::table)
                .values(&NewGameRow {
                    id: game.id().clone(),
                    status,
                })
                .execute(&mut conn)?;
        }
        debug!(game_id = %game.id(), "Tournament saved");
        Ok(())
    }
}

impl HistoryStore for Database {
    #[instrument(skip(self, history), fields(game_id = %history.game_id(), round = history.round(), match_number = history.match_number()))]
    fn save(&self, history: NewHistory) -> Result<HistoryRecord, StoreError> {
        let mut conn = self.connection()?;
        let record = diesel::insert_into(schema::histories::table)
            .values(&history)
            .returning(HistoryRecord::as_returning())
            .get_result(&mut conn)?;
        info!(history_id = record.id(), "History recorded");
        Ok(record)
    }

    #[instrument(skip(self))]
    fn find(&self, id: i32) -> Result<Option<HistoryRecord>, StoreError> {
        let mut conn = self.connection()?;
        let record = schema::histories::table
            .find(id)
            .first::<HistoryRecord>(&mut conn)
            .optional()?;
        Ok(record)
    }
}

impl ScoreStore for Database {
    #[instrument(skip(self, score), fields(game_id = %score.game_id(), player = %score.player_name(), points = score.points()))]
    fn save(&self, score: NewScore) -> Result<ScoreRecord, StoreError> {
        let mut conn = self.connection()?;
        let record = diesel::insert_into(schema::scores::table)
            .values(&score)
            .returning(ScoreRecord::as_returning())
            .get_result(&mut conn)?;
        info!(score_id = record.id(), "Score recorded");
        Ok(record)
    }
}
