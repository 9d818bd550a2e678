//! Test assertion helpers - fluent API for verifying totals
#![allow(dead_code)] // Test utilities may not all be used in every test

use golf_points::ScoreRepository;

use super::setup::TestSetup;

pub struct TotalsAssertion<'a> {
    setup: &'a TestSetup,
}

impl<'a> TotalsAssertion<'a> {
    pub fn for_setup(setup: &'a TestSetup) -> Self {
        Self { setup }
    }

    /// Assert a player's running total
    pub async fn has_total(self, player_id: &str, expected: i64) -> Self {
        let totals = self
            .setup
            .repository
            .get_totals()
            .await
            .expect("totals should load");
        let actual = totals.get(player_id).copied().unwrap_or_default();
        assert_eq!(actual, expected, "unexpected total for {player_id}");
        self
    }

    /// Assert the ledger as a whole still balances
    pub async fn balances(self) -> Self {
        let totals = self
            .setup
            .repository
            .get_totals()
            .await
            .expect("totals should load");
        assert_eq!(totals.values().sum::<i64>(), 0, "totals must sum to zero");
        self
    }

    pub async fn has_rounds(self, expected: usize) -> Self {
        let history = self
            .setup
            .repository
            .get_history()
            .await
            .expect("history should load");
        assert_eq!(history.len(), expected);
        self
    }
}
