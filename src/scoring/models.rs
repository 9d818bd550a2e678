use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running point totals keyed by player id
pub type RunningTotals = HashMap<String, i64>;

/// One player's entry after the tolerant parse step.
/// A missing `score` excludes the player from the round, a missing
/// `handicap` counts as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInput {
    pub player_id: String,
    pub name: String,
    pub score: Option<i32>,
    pub handicap: Option<i32>,
    #[serde(default)]
    pub near_pin: bool,
}

impl RoundInput {
    pub fn new(player_id: impl Into<String>, name: impl Into<String>, score: i32) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
            score: Some(score),
            handicap: None,
            near_pin: false,
        }
    }

    pub fn with_handicap(mut self, handicap: i32) -> Self {
        self.handicap = Some(handicap);
        self
    }

    pub fn with_near_pin(mut self) -> Self {
        self.near_pin = true;
        self
    }

    /// Domain rule step: drops entries without a score and defaults the handicap
    pub fn into_entry(self) -> Option<ScoredEntry> {
        let score = self.score?;
        let handicap = self.handicap.unwrap_or_default();

        Some(ScoredEntry {
            net: i64::from(score) - i64::from(handicap),
            player_id: self.player_id,
            name: self.name,
            score,
            handicap,
            near_pin: self.near_pin,
        })
    }
}

/// A participant that made it into the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredEntry {
    pub player_id: String,
    pub name: String,
    pub score: i32,
    pub handicap: i32,
    pub net: i64,
    pub near_pin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRoundResult {
    pub player_id: String,
    /// Name as it was when the round was scored
    pub name: String,
    pub score: i32,
    pub handicap: i32,
    pub net: i64,
    pub near_pin: bool,
    pub change: i64,
}

impl PlayerRoundResult {
    pub fn from_entry(entry: ScoredEntry, change: i64) -> Self {
        Self {
            player_id: entry.player_id,
            name: entry.name,
            score: entry.score,
            handicap: entry.handicap,
            net: entry.net,
            near_pin: entry.near_pin,
            change,
        }
    }
}

/// Immutable record of a scored round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub date: DateTime<Utc>,
    pub course: String,
    pub rate: u32,
    pub player_results: Vec<PlayerRoundResult>,
}

impl Round {
    pub fn change_sum(&self) -> i64 {
        self.player_results.iter().map(|r| r.change).sum()
    }

    pub fn result_for(&self, player_id: &str) -> Option<&PlayerRoundResult> {
        self.player_results.iter().find(|r| r.player_id == player_id)
    }
}
