pub mod models;

pub use models::{Player, Roster};
