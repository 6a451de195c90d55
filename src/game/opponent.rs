use crate::gesture::Choice;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Source of the computer's throw for each round.
pub trait Opponent {
    fn throw(&mut self) -> Choice;
}

/// Uniformly random opponent. Seedable for reproducible sessions.
pub struct RandomOpponent {
    rng: SmallRng,
}

impl RandomOpponent {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self {
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Opponent for RandomOpponent {
    fn throw(&mut self) -> Choice {
        Choice::sample(&mut self.rng)
    }
}
