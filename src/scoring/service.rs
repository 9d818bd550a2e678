use std::sync::Arc;

use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, instrument, warn};

use crate::config::ScoringConfig;
use crate::roster::{Player, Roster};

use super::{
    accumulate, input::RawRoundInput, repository::ScoreRepository, Round, RoundScorer,
    RunningTotals, ScoringError,
};

/// Scores rounds and keeps the store's totals and history in step
pub struct ScoringService {
    scorer: RoundScorer,
    repository: Arc<dyn ScoreRepository>,
    // Single writer: read-accumulate-write must not interleave
    write_lock: AsyncMutex<()>,
}

impl ScoringService {
    pub fn new(repository: Arc<dyn ScoreRepository>, config: ScoringConfig) -> Self {
        Self::with_scorer(repository, RoundScorer::new(config))
    }

    pub fn with_scorer(repository: Arc<dyn ScoreRepository>, scorer: RoundScorer) -> Self {
        Self {
            scorer,
            repository,
            write_lock: AsyncMutex::new(()),
        }
    }

    pub fn scorer(&self) -> &RoundScorer {
        &self.scorer
    }

    /// Scores a round, folds it into the running totals and records both.
    /// Nothing is written when scoring fails.
    #[instrument(skip(self, roster, raw_inputs), fields(entries = raw_inputs.len()))]
    pub async fn process_round(
        &self,
        roster: &Roster,
        raw_inputs: &[RawRoundInput],
        rate: Option<&str>,
        course: Option<&str>,
    ) -> Result<(Round, RunningTotals), ScoringError> {
        let _guard = self.write_lock.lock().await;

        let round = match self.scorer.score_round(roster, raw_inputs, rate, course) {
            Ok(round) => round,
            Err(err) => {
                warn!(%err, "Round could not be scored");
                return Err(err);
            }
        };

        let totals = self.repository.get_totals().await?;
        let updated = accumulate(totals, &round.player_results)?;

        self.repository
            .record_round(round.clone(), updated.clone())
            .await?;

        info!(
            round_id = %round.id,
            players = round.player_results.len(),
            rate = round.rate,
            "Round recorded"
        );

        Ok((round, updated))
    }

    pub async fn totals(&self) -> Result<RunningTotals, ScoringError> {
        self.repository.get_totals().await
    }

    pub async fn history(&self) -> Result<Vec<Round>, ScoringError> {
        self.repository.get_history().await
    }

    /// Roster players paired with their totals, in roster order
    pub async fn standings(&self, roster: &Roster) -> Result<Vec<(Player, i64)>, ScoringError> {
        let totals = self.repository.get_totals().await?;

        Ok(roster
            .players()
            .iter()
            .map(|player| {
                let total = totals.get(&player.id).copied().unwrap_or_default();
                (player.clone(), total)
            })
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn reset(&self) -> Result<(), ScoringError> {
        let _guard = self.write_lock.lock().await;
        self.repository.reset().await?;
        info!("All totals and history cleared");
        Ok(())
    }
}
