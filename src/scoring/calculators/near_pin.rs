use super::super::{RoundContext, ScoredEntry, ScoringError, TransferCalculator};

pub struct NearPinBonusCalculator;

impl Default for NearPinBonusCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl NearPinBonusCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl TransferCalculator for NearPinBonusCalculator {
    fn calculate(
        &self,
        entries: &[ScoredEntry],
        context: &RoundContext,
    ) -> Result<Vec<i64>, ScoringError> {
        let overflow = || ScoringError::Overflow("paying near-pin bonuses");
        let bonus = i64::from(context.near_pin_bonus);
        let others = i64::try_from(entries.len().saturating_sub(1)).map_err(|_| overflow())?;
        let collected = bonus.checked_mul(others).ok_or_else(overflow)?;
        let mut changes = vec![0i64; entries.len()];

        for (claimant, _) in entries.iter().enumerate().filter(|(_, e)| e.near_pin) {
            for (index, change) in changes.iter_mut().enumerate() {
                *change = if index == claimant {
                    change.checked_add(collected)
                } else {
                    change.checked_sub(bonus)
                }
                .ok_or_else(overflow)?;
            }
        }

        Ok(changes)
    }

    fn priority(&self) -> u32 {
        crate::scoring::calculator_priority::BONUS
    }
}
