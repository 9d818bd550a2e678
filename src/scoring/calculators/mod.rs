mod near_pin;
mod pairwise;

pub use near_pin::NearPinBonusCalculator;
pub use pairwise::PairwiseSettlementCalculator;
