use crate::REQUIRED_WINS;
use crate::TOTAL_ROUNDS;

/// Terminal conditions of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    total_rounds: usize,
    required_wins: usize,
}

impl Rules {
    pub fn new(total_rounds: usize, required_wins: usize) -> anyhow::Result<Self> {
        anyhow::ensure!(total_rounds > 0, "a match needs at least one round");
        anyhow::ensure!(
            (1..=total_rounds).contains(&required_wins),
            "required wins {} must be within 1..={}",
            required_wins,
            total_rounds
        );
        Ok(Self {
            total_rounds,
            required_wins,
        })
    }
    pub fn total_rounds(&self) -> usize {
        self.total_rounds
    }
    pub fn required_wins(&self) -> usize {
        self.required_wins
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            total_rounds: TOTAL_ROUNDS,
            required_wins: REQUIRED_WINS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_best_of_three() {
        let rules = Rules::default();
        assert!(rules.total_rounds() == 3);
        assert!(rules.required_wins() == 2);
        assert!(Rules::new(3, 2).ok() == Some(rules));
    }

    #[test]
    fn rejects_impossible_thresholds() {
        assert!(Rules::new(0, 0).is_err());
        assert!(Rules::new(3, 0).is_err());
        assert!(Rules::new(3, 4).is_err());
        assert!(Rules::new(5, 5).is_ok());
    }
}
