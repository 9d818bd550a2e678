// Library crate for the golf points tracker
// Scoring engine, totals accumulation and the store it reports to

pub mod config;
pub mod roster;
pub mod scoring;

// Re-export commonly used types for easier access in tests
pub use config::ScoringConfig;
pub use roster::{Player, Roster};
pub use scoring::{
    accumulate, input::RawRoundInput, InMemoryScoreRepository, PlayerRoundResult, Round,
    RoundInput, RoundScorer, RunningTotals, ScoreRepository, ScoringError, ScoringService,
};
