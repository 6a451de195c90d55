use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The match already has a verdict; a fresh state is required.
    #[error("match is over after {rounds} rounds, reset before playing again")]
    MatchOver { rounds: usize },
}
