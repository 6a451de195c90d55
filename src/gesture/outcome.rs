use super::Choice;
use colored::*;

/// Result of a single round, seen from the player's side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Player,
    Opponent,
    Draw,
    /// Neither side's choice beats the other. Only reachable through
    /// [`Outcome::resolve_labels`] with malformed input.
    Unknown,
}

impl Outcome {
    /// Fixed precedence: rock > scissors > paper > rock.
    pub fn resolve(player: Choice, opponent: Choice) -> Self {
        match (player, opponent) {
            (p, o) if p == o => Self::Draw,
            (p, o) if p.beats() == o => Self::Player,
            (p, o) if o.beats() == p => Self::Opponent,
            _ => Self::Unknown,
        }
    }
    /// Resolve raw labels. Anything outside the known set is `Unknown`.
    pub fn resolve_labels(player: &str, opponent: &str) -> Self {
        match (Choice::normalize(player), Choice::normalize(opponent)) {
            (Some(p), Some(o)) => Self::resolve(p, o),
            _ => Self::Unknown,
        }
    }
    /// Same round, seats swapped.
    pub fn flip(&self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
            other => *other,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "{}", "PLAYER".green()),
            Self::Opponent => write!(f, "{}", "OPPONENT".red()),
            Self::Draw => write!(f, "{}", "DRAW".yellow()),
            Self::Unknown => write!(f, "{}", "UNKNOWN".white()),
        }
    }
}
