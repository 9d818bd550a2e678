use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("At least 2 players with a valid score are required, found {found}")]
    InsufficientPlayers { found: usize },

    #[error("Round does not balance: changes sum to {sum}")]
    UnbalancedRound { sum: i64 },

    #[error("Point arithmetic overflowed while {0}")]
    Overflow(&'static str),

    #[error("Roster flags more than one host: {0:?}")]
    MultipleHosts(Vec<String>),

    #[error("Unknown host player: {0}")]
    UnknownHost(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
