use super::Choice;
use crate::Confidence;
use crate::PREDICTION_TOP_K;

/// A classifier label after normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    Known(Choice),
    Unrecognized(String),
}

impl Label {
    pub fn choice(&self) -> Option<Choice> {
        match self {
            Self::Known(choice) => Some(*choice),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<&str> for Label {
    fn from(raw: &str) -> Self {
        match Choice::normalize(raw) {
            Some(choice) => Self::Known(choice),
            None => Self::Unrecognized(raw.trim().to_string()),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Known(choice) => write!(f, "{}", choice),
            Self::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}

/// Ranked classifier output for one snapshot.
///
/// Sorted descending by confidence and truncated to the top
/// [`PREDICTION_TOP_K`]. Confidences are scores, not a distribution, so
/// nothing here assumes they sum to one. Never empty: a classifier that
/// produced nothing is recorded as a single `unknown` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    ranked: Vec<(Label, Confidence)>,
}

impl Prediction {
    pub fn unknown() -> Self {
        Self {
            ranked: vec![(Label::Unrecognized(String::from("unknown")), 0.0)],
        }
    }
    pub fn ranked(&self) -> &[(Label, Confidence)] {
        &self.ranked
    }
    pub fn top(&self) -> &(Label, Confidence) {
        &self.ranked[0]
    }
    /// The gesture to play, if the best label is a known choice.
    pub fn top_choice(&self) -> Option<Choice> {
        self.top().0.choice()
    }
}

impl From<Vec<(String, Confidence)>> for Prediction {
    fn from(scores: Vec<(String, Confidence)>) -> Self {
        let mut ranked = scores
            .into_iter()
            .map(|(label, confidence)| (Label::from(label.as_str()), confidence))
            .collect::<Vec<_>>();
        // NaN scores sink to the bottom
        ranked.sort_by(|(_, a), (_, b)| rank(*b).total_cmp(&rank(*a)));
        ranked.truncate(PREDICTION_TOP_K);
        match ranked.is_empty() {
            true => Self::unknown(),
            false => Self { ranked },
        }
    }
}

fn rank(confidence: Confidence) -> Confidence {
    match confidence.is_nan() {
        true => Confidence::NEG_INFINITY,
        false => confidence,
    }
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let text = self
            .ranked
            .iter()
            .map(|(label, confidence)| format!("{} ({:.2})", label, confidence))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(pairs: &[(&str, Confidence)]) -> Vec<(String, Confidence)> {
        pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
    }

    #[test]
    fn sorted_descending_and_truncated() {
        let prediction = Prediction::from(scores(&[
            ("paper", 0.10),
            ("rock", 0.70),
            ("none", 0.05),
            ("scissors", 0.15),
        ]));
        assert!(prediction.ranked().len() == PREDICTION_TOP_K);
        assert!(prediction.top_choice() == Some(Choice::Rock));
        assert!(prediction.ranked()[1].0 == Label::Known(Choice::Scissors));
        assert!(prediction.ranked()[2].0 == Label::Known(Choice::Paper));
    }

    #[test]
    fn padded_label_is_accepted() {
        let prediction = Prediction::from(scores(&[("ROCK ", 0.9), ("paper", 0.1)]));
        assert!(prediction.top_choice() == Some(Choice::Rock));
    }

    #[test]
    fn unrecognized_top_label() {
        let prediction = Prediction::from(scores(&[("thumbs_up", 0.8), ("rock", 0.2)]));
        assert!(prediction.top_choice().is_none());
        assert!(prediction.top().0 == Label::Unrecognized(String::from("thumbs_up")));
    }

    #[test]
    fn empty_output_is_unknown() {
        let prediction = Prediction::from(Vec::new());
        assert!(prediction == Prediction::unknown());
        assert!(prediction.top_choice().is_none());
        assert!(prediction.to_string() == "unknown (0.00)");
    }

    #[test]
    fn unnormalized_scores_keep_their_order() {
        let prediction = Prediction::from(scores(&[("rock", 3.5), ("paper", 7.25)]));
        assert!(prediction.top_choice() == Some(Choice::Paper));
        assert!(prediction.to_string() == "paper (7.25), rock (3.50)");
    }

    #[test]
    fn nan_never_wins() {
        let prediction = Prediction::from(scores(&[("rock", f32::NAN), ("paper", 0.01)]));
        assert!(prediction.top_choice() == Some(Choice::Paper));
    }
}
