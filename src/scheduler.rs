//! Tournament scheduler: timed rounds of round-robin matches.

use crate::config::TournamentConfig;
use crate::engine::{MatchEngine, MatchOutcome};
use crate::player::Player;
use crate::store::{
    GameStatus, GameStore, HistoryStore, NewHistory, NewScore, PlayerStore, ScoreStore, ScoreValue,
    StoreError,
};
use anyhow::{Context, Result, anyhow};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Top-level control loop turning a player roster into a sequence of timed
/// rounds of matches, persisting a history record and score credits per
/// match.
///
/// Collaborators are injected at construction; the scheduler owns no
/// storage or transport of its own.
pub struct TournamentScheduler {
    engine: MatchEngine,
    players: Arc<dyn PlayerStore>,
    games: Arc<dyn GameStore>,
    histories: Arc<dyn HistoryStore>,
    scores: Arc<dyn ScoreStore>,
    config: TournamentConfig,
}

impl TournamentScheduler {
    /// Creates a scheduler from its collaborators.
    pub fn new(
        engine: MatchEngine,
        players: Arc<dyn PlayerStore>,
        games: Arc<dyn GameStore>,
        histories: Arc<dyn HistoryStore>,
        scores: Arc<dyn ScoreStore>,
        config: TournamentConfig,
    ) -> Self {
        Self {
            engine,
            players,
            games,
            histories,
            scores,
            config,
        }
    }

    /// Runs the tournament until the total-duration timer fires, then marks
    /// it `Finished`.
    ///
    /// Rounds execute strictly sequentially. The inter-round pause is
    /// cancelled by the deadline; an in-flight match is allowed to finish
    /// (each agent request is individually bounded by the request timeout).
    ///
    /// # Errors
    ///
    /// Returns an error when a persistence collaborator fails; losing a
    /// history or score record silently would corrupt the tournament record.
    #[instrument(skip(self), fields(game_id = %game_id))]
    pub async fn run(&self, game_id: &str) -> Result<()> {
        let roster = self
            .players
            .find_all()
            .context("failed to load player roster")?;
        if roster.len() < 2 {
            warn!(
                players = roster.len(),
                "fewer than two players registered, rounds will be empty"
            );
        }

        let deadline = tokio::time::sleep(self.config.tournament_length());
        tokio::pin!(deadline);

        let mut round = 1;
        while !deadline.is_elapsed() {
            self.play_round(game_id, round, &roster).await?;
            round += 1;

            tokio::select! {
                _ = &mut deadline => {
                    info!("Out of time");
                }
                _ = tokio::time::sleep(self.config.round_length()) => {}
            }
        }

        let mut game = self
            .games
            .find_one(game_id)?
            .ok_or_else(|| anyhow!("unknown tournament '{game_id}'"))?;
        game.set_status(GameStatus::Finished);
        self.games.save(&game)?;
        info!(rounds = round - 1, "Tournament finished");
        Ok(())
    }

    /// Plays one full round: every ordered pair of distinct players, one
    /// match each, numbered from 1 in enumeration order.
    #[instrument(skip(self, roster), fields(game_id = %game_id))]
    async fn play_round(&self, game_id: &str, round: i32, roster: &[Player]) -> Result<()> {
        info!(round, "Round started");
        let mut match_number = 1;
        for player_one in roster {
            for player_two in roster {
                if player_one == player_two {
                    continue;
                }
                info!(
                    player_one = %player_one.user_name(),
                    player_two = %player_two.user_name(),
                    match_number,
                    "Match started"
                );
                let outcome = self.engine.play(player_one, player_two).await;
                self.record_outcome(game_id, round, match_number, player_one, player_two, &outcome)
                    .with_context(|| {
                        format!("failed to persist round {round} match {match_number}")
                    })?;
                match_number += 1;
            }
        }
        Ok(())
    }

    /// Persists the history record and score credits for one match.
    fn record_outcome(
        &self,
        game_id: &str,
        round: i32,
        match_number: i32,
        player_one: &Player,
        player_two: &Player,
        outcome: &MatchOutcome,
    ) -> Result<(), StoreError> {
        let winner_name = outcome
            .winner()
            .as_ref()
            .map(|player| player.user_name().clone());
        let steps = i32::try_from(*outcome.steps()).unwrap_or(i32::MAX);

        let history = self.histories.save(NewHistory::new(
            game_id.to_string(),
            round,
            match_number,
            player_one.user_name().clone(),
            player_two.user_name().clone(),
            winner_name.clone(),
            steps,
        ))?;

        match winner_name {
            Some(winner) => {
                info!(winner = %winner, history_id = history.id(), "Match won");
                self.scores.save(NewScore::new(
                    game_id.to_string(),
                    round,
                    match_number,
                    winner,
                    ScoreValue::Victory.points(),
                ))?;
            }
            None => {
                info!(history_id = history.id(), "Match drawn");
                for player in [player_one, player_two] {
                    self.scores.save(NewScore::new(
                        game_id.to_string(),
                        round,
                        match_number,
                        player.user_name().clone(),
                        ScoreValue::Draw.points(),
                    ))?;
                }
            }
        }
        Ok(())
    }
}
