pub mod accumulator;
pub mod calculators;
pub mod input;
pub mod scorer;
pub mod service;

mod errors;
pub mod models;
pub mod repository;

pub use accumulator::accumulate;
pub use errors::ScoringError;
pub use models::*;
pub use repository::{InMemoryScoreRepository, LedgerSnapshot, ScoreRepository};
pub use scorer::{RoundScorer, RoundScorerBuilder};
pub use service::ScoringService;

use crate::config::ScoringConfig;

/// Priority constants for transfer calculators.
/// Lower values run first. Every calculator must be zero-sum on its own.
pub mod calculator_priority {
    /// Stroke-difference settlement between every pair
    pub const BASE_TRANSFER: u32 = 100;
    /// Side bonuses layered on top (e.g. near-pin)
    pub const BONUS: u32 = 200;
}

/// One stage of round settlement. Returns a point delta for each entry,
/// aligned by index with `entries`, or `Overflow` when the points do not fit.
pub trait TransferCalculator: Send + Sync {
    fn calculate(
        &self,
        entries: &[ScoredEntry],
        context: &RoundContext,
    ) -> Result<Vec<i64>, ScoringError>;

    fn priority(&self) -> u32;
}

/// Round-wide values shared by every calculator
#[derive(Debug, Clone, Copy)]
pub struct RoundContext<'a> {
    pub rate: u32,
    pub uma_amount: u32,
    pub near_pin_bonus: u32,
    pub host_id: Option<&'a str>,
}

impl<'a> RoundContext<'a> {
    pub fn new(rate: u32, config: &ScoringConfig, host_id: Option<&'a str>) -> Self {
        Self {
            rate,
            uma_amount: config.uma_amount,
            near_pin_bonus: config.near_pin_bonus,
            host_id,
        }
    }

    pub fn is_host(&self, player_id: &str) -> bool {
        self.host_id == Some(player_id)
    }
}
