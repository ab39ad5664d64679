//! Gomoku Arena - unified CLI
//!
//! Runs tournaments, serves the history query endpoint, and manages the
//! player roster.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use gomoku_arena::{
    AgentClient, Database, GameStore, MatchEngine, PlayerStore, TournamentConfig,
    TournamentScheduler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            db_path,
            config,
            game_id,
            round_length_secs,
            tournament_length_secs,
        } => {
            run_tournament(
                db_path,
                config,
                game_id,
                round_length_secs,
                tournament_length_secs,
            )
            .await
        }
        Command::Serve {
            db_path,
            host,
            port,
        } => serve_histories(db_path, host, port).await,
        Command::AddPlayer { name, url, db_path } => add_player(db_path, name, url),
        Command::Players { db_path } => list_players(db_path),
        Command::Standings { game_id, db_path } => print_standings(db_path, game_id),
    }
}

/// Run a full tournament over the registered players.
async fn run_tournament(
    db_path: String,
    config_path: std::path::PathBuf,
    game_id: Option<String>,
    round_length_secs: Option<u64>,
    tournament_length_secs: Option<u64>,
) -> Result<()> {
    let mut config = if config_path.exists() {
        TournamentConfig::from_file(&config_path)?
    } else {
        info!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        TournamentConfig::default()
    };
    if let Some(secs) = round_length_secs {
        config.set_round_length_secs(secs);
    }
    if let Some(secs) = tournament_length_secs {
        config.set_tournament_length_secs(secs);
    }
    config.validate()?;

    let db = Arc::new(Database::open(db_path)?);

    let game_id =
        game_id.unwrap_or_else(|| format!("game_{}", chrono::Utc::now().format("%Y%m%d%H%M%S")));
    if db.find_one(&game_id)?.is_none() {
        db.create_game(&game_id)?;
    }
    info!(game_id = %game_id, "Starting tournament");

    let client = AgentClient::new(config.request_timeout())?;
    let engine = MatchEngine::new(client, *config.board_width(), *config.board_height());
    let scheduler = TournamentScheduler::new(
        engine,
        db.clone(),
        db.clone(),
        db.clone(),
        db,
        config,
    );
    scheduler.run(&game_id).await
}

/// Serve the read-only history query endpoint.
async fn serve_histories(db_path: String, host: String, port: u16) -> Result<()> {
    let db = Arc::new(Database::open(db_path)?);
    gomoku_arena::serve(&host, port, db).await
}

/// Register one player agent.
fn add_player(db_path: String, name: String, url: String) -> Result<()> {
    let db = Database::open(db_path)?;
    let player = db.add_player(name, url)?;
    println!("registered {} -> {}", player.user_name(), player.network_address());
    Ok(())
}

/// Print the registered players.
fn list_players(db_path: String) -> Result<()> {
    let db = Database::open(db_path)?;
    for player in db.find_all()? {
        println!("{}\t{}", player.user_name(), player.network_address());
    }
    Ok(())
}

/// Print per-player score totals for one tournament, best first.
fn print_standings(db_path: String, game_id: String) -> Result<()> {
    let db = Database::open(db_path)?;
    let mut totals: HashMap<String, i64> = HashMap::new();
    for score in db.scores_for_game(&game_id)? {
        *totals.entry(score.player_name().clone()).or_default() += i64::from(*score.points());
    }
    let mut sorted: Vec<_> = totals.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    for (player, points) in sorted {
        println!("{player}\t{points}");
    }
    Ok(())
}
