//! Sqlite persistence layer for players, tournaments, histories, and scores.

mod models;
mod repository;
pub(crate) mod schema; // Diesel generated schema - internal use only

pub use repository::Database;
