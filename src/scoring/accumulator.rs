use super::{PlayerRoundResult, RunningTotals, ScoringError};

/// Folds a round's changes into running totals.
///
/// Players missing from `totals` start at zero. Results for players who have
/// since left the roster still get an entry, so totals always agree with the
/// recorded history. A total that would leave the `i64` range is an error
/// rather than a wrapped value.
pub fn accumulate(
    mut totals: RunningTotals,
    results: &[PlayerRoundResult],
) -> Result<RunningTotals, ScoringError> {
    for result in results {
        let total = totals.entry(result.player_id.clone()).or_default();
        *total = total
            .checked_add(result.change)
            .ok_or(ScoringError::Overflow("accumulating totals"))?;
    }
    Ok(totals)
}
