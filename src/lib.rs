//! Camera-driven rock-paper-scissors.
//!
//! A player shows a gesture inside a fixed capture region, an external
//! classifier turns the snapshot into a ranked [`gesture::Prediction`], and
//! the [`game::MatchState`] resolves a best-of-N match against a random
//! opponent. Every frame is composited with the live match state before it
//! is shown.
#![allow(dead_code)]

pub mod capture;
pub mod game;
pub mod gesture;
pub mod render;
pub mod session;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Classifier score for a label. Not assumed to be normalized.
pub type Confidence = f32;
/// Frame coordinates and extents in pixels.
pub type Pixels = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponents and tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Round cap for a single match.
pub const TOTAL_ROUNDS: usize = 3;
/// Round wins that end a match early.
pub const REQUIRED_WINS: usize = 2;

// ============================================================================
// CAPTURE
// ============================================================================
/// Side of the square region handed to the classifier.
pub const ROI_SIZE: Pixels = 280;
/// Countdown steps shown before the snapshot (3, 2, 1).
pub const COUNTDOWN_STEPS: u32 = 3;
/// Real-time hold per countdown step so the player can pose.
pub const COUNTDOWN_DELAY: std::time::Duration = std::time::Duration::from_secs(1);
/// Ranked predictions kept for display.
pub const PREDICTION_TOP_K: usize = 3;
/// Replay rate for folder-backed cameras.
pub const FRAMES_PER_SECOND: f32 = 30.0;

// ============================================================================
// HISTORY STRIP LAYOUT
// ============================================================================
/// Icons are pre-scaled to this square side.
pub const ICON_SIZE: Pixels = 24;
/// Horizontal gap between icon slots.
pub const ICON_SPACING: Pixels = 8;
/// Icons sit this far below the text baseline minus one icon height.
pub const ICON_VERTICAL_OFFSET: Pixels = 2;
/// Icon strips never start left of this column, keeping rows aligned.
pub const HISTORY_ICON_START_X: Pixels = 150;
/// Minimum gap between a row label and its first icon.
pub const LABEL_ICON_GAP: Pixels = 8;
/// Left margin for all HUD text.
pub const TEXT_MARGIN: Pixels = 10;

// ============================================================================
// TYPOGRAPHY
// Pixel heights roughly matching the usual 0.7 / 1.0 / 2.0 HUD text scales.
// ============================================================================
/// Instructions, predictions, history labels, round counter.
pub const TEXT_SMALL: f32 = 22.0;
/// Countdown message.
pub const TEXT_MEDIUM: f32 = 32.0;
/// Centered verdict.
pub const TEXT_LARGE: f32 = 64.0;
/// Stroke width of the capture region outline.
pub const OUTLINE_THICKNESS: Pixels = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::WriteLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        CarriageReturn(std::io::stderr()),
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Writes `\r\n` for every `\n`. The terminal display runs in raw mode,
/// where a bare line feed does not return the cursor.
#[cfg(feature = "cli")]
struct CarriageReturn<W>(W);

#[cfg(feature = "cli")]
impl<W: std::io::Write> std::io::Write for CarriageReturn<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut lines = buf.split(|b| *b == b'\n').peekable();
        while let Some(line) = lines.next() {
            self.0.write_all(line)?;
            if lines.peek().is_some() {
                self.0.write_all(b"\r\n")?;
            }
        }
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}
