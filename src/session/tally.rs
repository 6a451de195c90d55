use crate::game::Verdict;

/// Running totals for one process. Logged at exit, never persisted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub captures: usize,
    pub aborted: usize,
    pub rounds: usize,
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
}

impl Tally {
    pub fn matches(&self) -> usize {
        self.wins + self.losses + self.draws
    }
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Player => self.wins += 1,
            Verdict::Opponent => self.losses += 1,
            Verdict::Draw => self.draws += 1,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} captures ({} not recognized), {} rounds, {} matches: {}W {}L {}D",
            self.captures,
            self.aborted,
            self.rounds,
            self.matches(),
            self.wins,
            self.losses,
            self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts_count_as_matches() {
        let mut tally = Tally::default();
        tally.record(Verdict::Player);
        tally.record(Verdict::Draw);
        tally.record(Verdict::Player);
        assert!(tally.matches() == 3);
        assert!(tally.wins == 2 && tally.losses == 0 && tally.draws == 1);
        assert!(tally.to_string().ends_with("3 matches: 2W 0L 1D"));
    }
}
