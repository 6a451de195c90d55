use super::ColorOrder;
use crate::Confidence;
use anyhow::Context;
use image::ImageFormat;
use image::RgbImage;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

/// Gesture recognition over a single region of interest.
pub trait Classifier {
    /// Scored labels in any order. Empty when nothing could be recognized.
    fn classify(&mut self, roi: &RgbImage) -> anyhow::Result<Vec<(String, Confidence)>>;
    /// Channel order `classify` expects.
    fn color_order(&self) -> ColorOrder {
        ColorOrder::Rgb
    }
}

/// Runs an external program once per snapshot.
///
/// The region is written to a temporary PNG whose path is appended as the
/// last argument. The program prints JSON on stdout: either a list of
/// `[label, score]` pairs, an object of `label: score`, or `null` when it
/// has no result.
pub struct CommandClassifier {
    program: PathBuf,
    args: Vec<String>,
    order: ColorOrder,
}

impl CommandClassifier {
    pub fn new(program: &Path, args: Vec<String>) -> Self {
        Self {
            program: program.to_path_buf(),
            args,
            order: ColorOrder::default(),
        }
    }
    pub fn order(mut self, order: ColorOrder) -> Self {
        self.order = order;
        self
    }
}

impl Classifier for CommandClassifier {
    fn classify(&mut self, roi: &RgbImage) -> anyhow::Result<Vec<(String, Confidence)>> {
        let snapshot = tempfile::Builder::new()
            .prefix("roi-")
            .suffix(".png")
            .tempfile()
            .context("create snapshot file")?;
        roi.save_with_format(snapshot.path(), ImageFormat::Png)
            .context("write snapshot")?;
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(snapshot.path())
            .output()
            .with_context(|| format!("run classifier {}", self.program.display()))?;
        anyhow::ensure!(
            output.status.success(),
            "classifier exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        parse(&output.stdout)
    }
    fn color_order(&self) -> ColorOrder {
        self.order
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scores {
    Pairs(Vec<(String, Confidence)>),
    Table(BTreeMap<String, Confidence>),
}

/// Decode classifier stdout.
pub fn parse(stdout: &[u8]) -> anyhow::Result<Vec<(String, Confidence)>> {
    let scores = serde_json::from_slice::<Option<Scores>>(stdout)
        .with_context(|| format!("unreadable classifier output {:?}", String::from_utf8_lossy(stdout)))?;
    Ok(match scores {
        Some(Scores::Pairs(pairs)) => pairs,
        Some(Scores::Table(table)) => table.into_iter().collect(),
        None => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let scores = parse(br#"[["rock", 0.9], ["paper", 0.1]]"#).unwrap();
        assert!(scores == vec![("rock".to_string(), 0.9), ("paper".to_string(), 0.1)]);
    }

    #[test]
    fn parses_table() {
        let scores = parse(br#"{"scissors": 0.25, "paper": 0.75}"#).unwrap();
        assert!(scores.len() == 2);
        assert!(scores.contains(&("paper".to_string(), 0.75)));
    }

    #[test]
    fn null_is_no_result() {
        assert!(parse(b"null").unwrap().is_empty());
        assert!(parse(b"[]").unwrap().is_empty());
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(parse(b"rock 0.9").is_err());
        assert!(parse(b"").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn runs_external_program() {
        let script = r#"test -s "$1" && echo '[["ROCK ", 0.8]]'"#;
        let args = vec!["-c".to_string(), script.to_string(), "sh".to_string()];
        let mut classifier = CommandClassifier::new(Path::new("sh"), args);
        let roi = RgbImage::new(8, 8);
        let scores = classifier.classify(&roi).unwrap();
        assert!(scores == vec![("ROCK ".to_string(), 0.8)]);
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_an_error() {
        let args = vec!["-c".to_string(), "exit 3".to_string()];
        let mut classifier = CommandClassifier::new(Path::new("sh"), args);
        assert!(classifier.classify(&RgbImage::new(4, 4)).is_err());
    }

    #[test]
    fn missing_program_is_an_error() {
        let mut classifier = CommandClassifier::new(Path::new("/nonexistent/classifier"), vec![]);
        assert!(classifier.classify(&RgbImage::new(4, 4)).is_err());
    }
}
