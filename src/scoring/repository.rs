use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{Round, RunningTotals, ScoringError};

/// Durable home of running totals and round history
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Puts `round` at the head of history and replaces the totals, as one write
    async fn record_round(&self, round: Round, totals: RunningTotals)
        -> Result<(), ScoringError>;
    async fn get_totals(&self) -> Result<RunningTotals, ScoringError>;
    /// Newest round first
    async fn get_history(&self) -> Result<Vec<Round>, ScoringError>;
    async fn reset(&self) -> Result<(), ScoringError>;
}

/// Everything the store holds, in a shape that can be saved and loaded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub totals: RunningTotals,
    pub rounds: Vec<Round>,
}

#[derive(Debug, Default)]
pub struct InMemoryScoreRepository {
    ledger: Arc<RwLock<LedgerSnapshot>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(RwLock::new(LedgerSnapshot::default())),
        }
    }

    /// Loads a previously saved ledger
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub async fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.read().await.clone()
    }
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    #[instrument(skip(self, round, totals), fields(round_id = %round.id))]
    async fn record_round(
        &self,
        round: Round,
        totals: RunningTotals,
    ) -> Result<(), ScoringError> {
        let mut ledger = self.ledger.write().await;
        ledger.rounds.insert(0, round);
        ledger.totals = totals;

        debug!(rounds = ledger.rounds.len(), "Round recorded in memory");
        Ok(())
    }

    async fn get_totals(&self) -> Result<RunningTotals, ScoringError> {
        Ok(self.ledger.read().await.totals.clone())
    }

    async fn get_history(&self) -> Result<Vec<Round>, ScoringError> {
        Ok(self.ledger.read().await.rounds.clone())
    }

    #[instrument(skip(self))]
    async fn reset(&self) -> Result<(), ScoringError> {
        let mut ledger = self.ledger.write().await;
        *ledger = LedgerSnapshot::default();
        debug!("Ledger cleared");
        Ok(())
    }
}
