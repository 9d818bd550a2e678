use tracing::debug;

use crate::scoring::input::parse_integer;

pub const DEFAULT_RATE: u32 = 500;
pub const DEFAULT_UMA_AMOUNT: u32 = 500;
pub const DEFAULT_NEAR_PIN_BONUS: u32 = 1000;
pub const DEFAULT_COURSE_LABEL: &str = "Unnamed course";

/// Point values used when settling a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    /// Rate applied when the caller supplies none (or garbage)
    pub default_rate: u32,
    /// Flat bonus added to a decided uma-eligible pairing
    pub uma_amount: u32,
    /// Paid by every other participant to a near-pin claimant
    pub near_pin_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_RATE,
            uma_amount: DEFAULT_UMA_AMOUNT,
            near_pin_bonus: DEFAULT_NEAR_PIN_BONUS,
        }
    }
}

impl ScoringConfig {
    /// Builds a config from `GOLF_DEFAULT_RATE`, `GOLF_UMA_AMOUNT` and
    /// `GOLF_NEAR_PIN_BONUS`, keeping the default for anything unset or invalid
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            default_rate: positive_env("GOLF_DEFAULT_RATE").unwrap_or(defaults.default_rate),
            uma_amount: positive_env("GOLF_UMA_AMOUNT").unwrap_or(defaults.uma_amount),
            near_pin_bonus: positive_env("GOLF_NEAR_PIN_BONUS")
                .unwrap_or(defaults.near_pin_bonus),
        };

        debug!(
            default_rate = config.default_rate,
            uma_amount = config.uma_amount,
            near_pin_bonus = config.near_pin_bonus,
            "Loaded scoring config"
        );
        config
    }

    /// Resolves the rate for a round from raw caller text.
    /// Absent, unparseable, zero or negative values fall back to `default_rate`.
    pub fn resolve_rate(&self, raw: Option<&str>) -> u32 {
        raw.and_then(parse_integer)
            .and_then(|rate| u32::try_from(rate).ok())
            .filter(|rate| *rate > 0)
            .unwrap_or(self.default_rate)
    }
}

fn positive_env(key: &str) -> Option<u32> {
    std::env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| *value > 0)
}
