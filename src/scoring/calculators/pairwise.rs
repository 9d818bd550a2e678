use super::super::{RoundContext, ScoredEntry, ScoringError, TransferCalculator};

/// Everyone plays everyone: for each pair the lower net collects
/// `diff * rate`, plus uma when the pair is eligible and not tied.
pub struct PairwiseSettlementCalculator;

impl Default for PairwiseSettlementCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl PairwiseSettlementCalculator {
    pub fn new() -> Self {
        Self
    }

    /// The host sits out of uma unless the round is heads-up
    fn uma_applies(
        a: &ScoredEntry,
        b: &ScoredEntry,
        participants: usize,
        context: &RoundContext,
    ) -> bool {
        participants == 2 || !(context.is_host(&a.player_id) || context.is_host(&b.player_id))
    }
}

impl TransferCalculator for PairwiseSettlementCalculator {
    fn calculate(
        &self,
        entries: &[ScoredEntry],
        context: &RoundContext,
    ) -> Result<Vec<i64>, ScoringError> {
        let overflow = || ScoringError::Overflow("settling pairs");
        let mut changes = vec![0i64; entries.len()];

        for i in 0..entries.len() {
            for j in (i + 1)..entries.len() {
                let (better, worse) = if entries[i].net <= entries[j].net {
                    (i, j)
                } else {
                    (j, i)
                };

                let diff = entries[worse]
                    .net
                    .checked_sub(entries[better].net)
                    .ok_or_else(overflow)?;
                if diff == 0 {
                    continue;
                }

                let mut amount = diff
                    .checked_mul(i64::from(context.rate))
                    .ok_or_else(overflow)?;
                if Self::uma_applies(&entries[i], &entries[j], entries.len(), context) {
                    amount = amount
                        .checked_add(i64::from(context.uma_amount))
                        .ok_or_else(overflow)?;
                }

                changes[better] = changes[better].checked_add(amount).ok_or_else(overflow)?;
                changes[worse] = changes[worse].checked_sub(amount).ok_or_else(overflow)?;
            }
        }

        Ok(changes)
    }

    fn priority(&self) -> u32 {
        crate::scoring::calculator_priority::BASE_TRANSFER
    }
}
