//! Tolerant parsing of entries as they come out of an input form.
//!
//! Parsing never fails: anything that does not read as an integer becomes
//! `None`, and the domain rules in [`RoundInput::into_entry`] decide what a
//! missing value means.

use serde::{Deserialize, Serialize};

use super::models::RoundInput;

/// A field that may arrive as a number or as free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RawField {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawField::Integer(value) => Some(*value),
            RawField::Float(value) if value.is_finite() => {
                let truncated = value.trunc();
                (truncated.abs() < i64::MAX as f64).then_some(truncated as i64)
            }
            RawField::Float(_) => None,
            RawField::Text(text) => parse_integer(text),
        }
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.to_string())
    }
}

impl From<i32> for RawField {
    fn from(value: i32) -> Self {
        RawField::Integer(i64::from(value))
    }
}

impl From<i64> for RawField {
    fn from(value: i64) -> Self {
        RawField::Integer(value)
    }
}

/// One player's entry exactly as captured
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRoundInput {
    pub player_id: String,
    #[serde(default)]
    pub score: Option<RawField>,
    #[serde(default)]
    pub handicap: Option<RawField>,
    #[serde(default)]
    pub near_pin: Option<bool>,
}

impl RawRoundInput {
    pub fn new(player_id: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            ..Self::default()
        }
    }

    pub fn score(mut self, score: impl Into<RawField>) -> Self {
        self.score = Some(score.into());
        self
    }

    pub fn handicap(mut self, handicap: impl Into<RawField>) -> Self {
        self.handicap = Some(handicap.into());
        self
    }

    pub fn near_pin(mut self, near_pin: bool) -> Self {
        self.near_pin = Some(near_pin);
        self
    }

    /// Parse step: reads each field into an optional integer, pairing the
    /// entry with the player's display name at scoring time
    pub fn parse(&self, name: &str) -> RoundInput {
        RoundInput {
            player_id: self.player_id.clone(),
            name: name.to_string(),
            score: read_i32(self.score.as_ref()),
            handicap: read_i32(self.handicap.as_ref()),
            near_pin: self.near_pin.unwrap_or_default(),
        }
    }
}

fn read_i32(field: Option<&RawField>) -> Option<i32> {
    field
        .and_then(RawField::as_integer)
        .and_then(|value| i32::try_from(value).ok())
}

/// Reads a leading integer the way form inputs are usually read: surrounding
/// whitespace and trailing garbage are ignored, but there must be at least
/// one digit after an optional sign.
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
