//! Builders for raw round entries
#![allow(dead_code)] // Test utilities may not all be used in every test

use golf_points::{RawRoundInput, Round, ScoringError};

use super::setup::TestSetup;

pub struct RoundBuilder {
    inputs: Vec<RawRoundInput>,
    rate: Option<String>,
    course: Option<String>,
}

impl RoundBuilder {
    pub fn new() -> Self {
        Self {
            inputs: vec![],
            rate: None,
            course: None,
        }
    }

    /// Adds a player with a numeric score and handicap
    pub fn player(mut self, id: &str, score: i32, handicap: i32) -> Self {
        self.inputs
            .push(RawRoundInput::new(id).score(score).handicap(handicap));
        self
    }

    /// Adds a player exactly as typed into the form
    pub fn typed(mut self, id: &str, score: &str, handicap: &str) -> Self {
        self.inputs
            .push(RawRoundInput::new(id).score(score).handicap(handicap));
        self
    }

    /// Flags the most recently added player as near-pin
    pub fn near_pin(mut self) -> Self {
        if let Some(last) = self.inputs.pop() {
            self.inputs.push(last.near_pin(true));
        }
        self
    }

    pub fn rate(mut self, rate: &str) -> Self {
        self.rate = Some(rate.to_string());
        self
    }

    pub fn course(mut self, course: &str) -> Self {
        self.course = Some(course.to_string());
        self
    }

    pub fn inputs(&self) -> &[RawRoundInput] {
        &self.inputs
    }

    pub async fn play(&self, setup: &TestSetup) -> Result<Round, ScoringError> {
        setup
            .service
            .process_round(
                &setup.roster,
                &self.inputs,
                self.rate.as_deref(),
                self.course.as_deref(),
            )
            .await
            .map(|(round, _)| round)
    }
}

impl Default for RoundBuilder {
    fn default() -> Self {
        Self::new()
    }
}
