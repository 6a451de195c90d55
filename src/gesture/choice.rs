use crate::Arbitrary;
use rand::Rng;

/// One of the three gestures. Closed set; every label that reaches the
/// match engine has already been normalized into this.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }
    /// The single choice this one defeats.
    pub const fn beats(&self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Paper => Self::Rock,
            Self::Scissors => Self::Paper,
        }
    }
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }
    /// Uniform draw over the three choices.
    pub fn sample<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self::all()[rng.random_range(0..Self::all().len())]
    }
    /// Trim and lowercase a raw classifier label, then match it.
    pub fn normalize(label: &str) -> Option<Self> {
        Self::try_from(label).ok()
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::sample(&mut rand::rng())
    }
}

/// str isomorphism, modulo whitespace and case
impl TryFrom<&str> for Choice {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            _ => Err(anyhow::anyhow!("unrecognized gesture label {:?}", s)),
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
