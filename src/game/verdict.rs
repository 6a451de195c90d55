use colored::*;
use image::Rgb;

/// Final result of a completed match.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Verdict {
    Player,
    Opponent,
    Draw,
}

impl Verdict {
    /// Banner drawn across the frame.
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Player => "YOU WIN",
            Self::Opponent => "YOU LOSE",
            Self::Draw => "DRAW",
        }
    }
    pub const fn color(&self) -> Rgb<u8> {
        match self {
            Self::Player => Rgb([0, 255, 0]),
            Self::Opponent => Rgb([255, 0, 0]),
            Self::Draw => Rgb([255, 255, 0]),
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "{}", self.text().green()),
            Self::Opponent => write!(f, "{}", self.text().red()),
            Self::Draw => write!(f, "{}", self.text().yellow()),
        }
    }
}
