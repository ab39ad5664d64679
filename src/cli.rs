//! Command-line interface for gomoku_arena.

use clap::{Parser, Subcommand};

/// Gomoku Arena - round-robin tournaments between HTTP player agents
#[derive(Parser, Debug)]
#[command(name = "gomoku_arena")]
#[command(about = "Round-robin gomoku tournament engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a tournament over the registered players
    Run {
        /// Path to the database file (created if it doesn't exist)
        #[arg(long, default_value = "gomoku_arena.db")]
        db_path: String,

        /// Path to the tournament configuration file
        #[arg(short, long, default_value = "arena.toml")]
        config: std::path::PathBuf,

        /// Tournament id (auto-generated if not provided)
        #[arg(long)]
        game_id: Option<String>,

        /// Override the pause between rounds, in seconds
        #[arg(long)]
        round_length_secs: Option<u64>,

        /// Override the total tournament length, in seconds
        #[arg(long)]
        tournament_length_secs: Option<u64>,
    },

    /// Serve the read-only history query endpoint
    Serve {
        /// Path to the database file
        #[arg(long, default_value = "gomoku_arena.db")]
        db_path: String,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Register a player agent
    AddPlayer {
        /// Unique player name
        name: String,

        /// Base URL of the player's agent endpoint
        url: String,

        /// Path to the database file
        #[arg(long, default_value = "gomoku_arena.db")]
        db_path: String,
    },

    /// List the registered players
    Players {
        /// Path to the database file
        #[arg(long, default_value = "gomoku_arena.db")]
        db_path: String,
    },

    /// Print the score totals of a tournament
    Standings {
        /// Tournament id
        game_id: String,

        /// Path to the database file
        #[arg(long, default_value = "gomoku_arena.db")]
        db_path: String,
    },
}
