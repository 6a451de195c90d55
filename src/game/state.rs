use super::MatchError;
use super::Rules;
use super::Verdict;
use crate::gesture::Choice;
use crate::gesture::Outcome;

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No rounds played yet.
    Idle,
    /// At least one round played, no verdict.
    InProgress,
    /// Verdict reached. Only a fresh state can continue.
    Complete,
}

/// Round history and score of a single match.
///
/// Both histories grow together, one entry per resolved round. The verdict
/// is set exactly when the match ends, after which [`MatchState::apply`]
/// refuses further rounds and [`MatchState::reset`] is the only way on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    rules: Rules,
    player_history: Vec<Choice>,
    opponent_history: Vec<Choice>,
    player_wins: usize,
    opponent_wins: usize,
    verdict: Option<Verdict>,
}

impl MatchState {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            player_history: Vec::with_capacity(rules.total_rounds()),
            opponent_history: Vec::with_capacity(rules.total_rounds()),
            player_wins: 0,
            opponent_wins: 0,
            verdict: None,
        }
    }
    /// Brand-new match under the same rules.
    pub fn reset(&self) -> Self {
        Self::new(self.rules)
    }

    /// Resolve and record one round.
    ///
    /// Rejected without touching any field once the match has a verdict.
    pub fn apply(&mut self, player: Choice, opponent: Choice) -> Result<Outcome, MatchError> {
        if self.is_over() {
            return Err(MatchError::MatchOver {
                rounds: self.rounds(),
            });
        }
        let outcome = Outcome::resolve(player, opponent);
        self.player_history.push(player);
        self.opponent_history.push(opponent);
        match outcome {
            Outcome::Player => self.player_wins += 1,
            Outcome::Opponent => self.opponent_wins += 1,
            Outcome::Draw | Outcome::Unknown => {}
        }
        self.verdict = self.conclude();
        Ok(outcome)
    }

    /// Early threshold first, then the round cap.
    fn conclude(&self) -> Option<Verdict> {
        if self.player_wins >= self.rules.required_wins() {
            Some(Verdict::Player)
        } else if self.opponent_wins >= self.rules.required_wins() {
            Some(Verdict::Opponent)
        } else if self.rounds() >= self.rules.total_rounds() {
            match self.player_wins.cmp(&self.opponent_wins) {
                std::cmp::Ordering::Greater => Some(Verdict::Player),
                std::cmp::Ordering::Less => Some(Verdict::Opponent),
                std::cmp::Ordering::Equal => Some(Verdict::Draw),
            }
        } else {
            None
        }
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn player_history(&self) -> &[Choice] {
        &self.player_history
    }
    pub fn opponent_history(&self) -> &[Choice] {
        &self.opponent_history
    }
    pub fn player_wins(&self) -> usize {
        self.player_wins
    }
    pub fn opponent_wins(&self) -> usize {
        self.opponent_wins
    }
    pub fn draws(&self) -> usize {
        self.rounds() - self.player_wins - self.opponent_wins
    }
    pub fn rounds(&self) -> usize {
        self.player_history.len()
    }
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }
    pub fn is_over(&self) -> bool {
        self.verdict.is_some()
    }
    pub fn phase(&self) -> Phase {
        match (self.is_over(), self.rounds()) {
            (true, _) => Phase::Complete,
            (false, 0) => Phase::Idle,
            (false, _) => Phase::InProgress,
        }
    }
    /// 1-based round shown to the player: the next round to play, or the
    /// last one played once the match is over.
    pub fn current_round(&self) -> usize {
        let round = match self.is_over() {
            true => self.rounds(),
            false => (self.rounds() + 1).min(self.rules.total_rounds()),
        };
        round.max(1)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
