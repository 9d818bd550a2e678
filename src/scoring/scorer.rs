use chrono::Utc;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::config::{ScoringConfig, DEFAULT_COURSE_LABEL};
use crate::roster::Roster;

use super::{
    calculators::{NearPinBonusCalculator, PairwiseSettlementCalculator},
    input::RawRoundInput,
    PlayerRoundResult, Round, RoundContext, RoundInput, ScoredEntry, ScoringError,
    TransferCalculator,
};

/// Turns one round of entries into per-player point changes.
/// Holds no state between calls.
pub struct RoundScorer {
    calculators: Vec<Arc<dyn TransferCalculator>>,
    config: ScoringConfig,
}

impl Default for RoundScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl RoundScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn builder(config: ScoringConfig) -> RoundScorerBuilder {
        RoundScorerBuilder::new(config)
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores parsed entries. Entries without a score sit the round out;
    /// fewer than two remaining is an error. Results keep input order.
    pub fn score(
        &self,
        inputs: Vec<RoundInput>,
        rate: u32,
        host_id: Option<&str>,
    ) -> Result<Vec<PlayerRoundResult>, ScoringError> {
        let entries: Vec<ScoredEntry> = inputs
            .into_iter()
            .filter_map(RoundInput::into_entry)
            .collect();

        if entries.len() < 2 {
            return Err(ScoringError::InsufficientPlayers {
                found: entries.len(),
            });
        }

        let context = RoundContext::new(rate, &self.config, host_id);
        let mut changes = vec![0i64; entries.len()];

        for calculator in &self.calculators {
            let deltas = calculator.calculate(&entries, &context)?;
            for (change, delta) in changes.iter_mut().zip(deltas) {
                *change = change
                    .checked_add(delta)
                    .ok_or(ScoringError::Overflow("combining calculators"))?;
            }
        }

        // widened: i64 changes can sum past i64
        let sum: i128 = changes.iter().map(|c| i128::from(*c)).sum();
        if sum != 0 {
            let sum = i64::try_from(sum).map_err(|_| ScoringError::Overflow("balancing round"))?;
            return Err(ScoringError::UnbalancedRound { sum });
        }

        Ok(entries
            .into_iter()
            .zip(changes)
            .map(|(entry, change)| PlayerRoundResult::from_entry(entry, change))
            .collect())
    }

    /// Scores raw form entries against a roster snapshot and packages the
    /// outcome as a new `Round`. Only active roster players take part, in
    /// roster order; entries for anyone else are ignored.
    pub fn score_round(
        &self,
        roster: &Roster,
        raw_inputs: &[RawRoundInput],
        rate: Option<&str>,
        course: Option<&str>,
    ) -> Result<Round, ScoringError> {
        let rate = self.config.resolve_rate(rate);

        let inputs: Vec<RoundInput> = roster
            .active_players()
            .filter_map(|player| {
                raw_inputs
                    .iter()
                    .find(|raw| raw.player_id == player.id)
                    .map(|raw| raw.parse(&player.name))
            })
            .collect();

        debug!(
            candidates = inputs.len(),
            rate,
            host = ?roster.host_id(),
            "Scoring round"
        );

        let player_results = self.score(inputs, rate, roster.host_id())?;

        let course = course
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_COURSE_LABEL)
            .to_string();

        Ok(Round {
            id: format!("r-{}", Uuid::new_v4()),
            date: Utc::now(),
            course,
            rate,
            player_results,
        })
    }
}

pub struct RoundScorerBuilder {
    calculators: Vec<Arc<dyn TransferCalculator>>,
    config: ScoringConfig,
}

impl RoundScorerBuilder {
    fn new(config: ScoringConfig) -> Self {
        Self {
            calculators: vec![
                Arc::new(PairwiseSettlementCalculator::new()),
                Arc::new(NearPinBonusCalculator::new()),
            ],
            config,
        }
    }

    pub fn with_calculator(mut self, calculator: Arc<dyn TransferCalculator>) -> Self {
        self.calculators.push(calculator);
        self
    }

    pub fn build(mut self) -> RoundScorer {
        self.calculators.sort_by_key(|c| c.priority());
        RoundScorer {
            calculators: self.calculators,
            config: self.config,
        }
    }
}
