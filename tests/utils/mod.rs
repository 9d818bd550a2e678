pub mod assertions;
pub mod round_builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::TotalsAssertion;
pub use round_builders::RoundBuilder;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
