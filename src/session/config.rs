use crate::COUNTDOWN_DELAY;
use crate::COUNTDOWN_STEPS;
use crate::Pixels;
use crate::ROI_SIZE;
use crate::game::Rules;
use std::time::Duration;

/// Whether captures feed a match or are only classified and shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Match,
    Probe,
}

/// Validated session parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rules: Rules,
    pub roi: Pixels,
    pub countdown: u32,
    pub delay: Duration,
    pub mode: Mode,
}

impl Settings {
    pub fn new(rules: Rules, roi: Pixels, countdown: u32, delay: Duration, mode: Mode) -> anyhow::Result<Self> {
        anyhow::ensure!(roi > 0, "capture region must be at least one pixel");
        anyhow::ensure!(countdown > 0, "countdown needs at least one step");
        Ok(Self {
            rules,
            roi,
            countdown,
            delay,
            mode,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            roi: ROI_SIZE,
            countdown: COUNTDOWN_STEPS,
            delay: COUNTDOWN_DELAY,
            mode: Mode::default(),
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::Args;

#[cfg(feature = "cli")]
mod cli {
    use super::*;
    use crate::FRAMES_PER_SECOND;
    use crate::REQUIRED_WINS;
    use crate::TOTAL_ROUNDS;
    use crate::capture::ColorOrder;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    pub struct Args {
        /// Directory of frames replayed as the camera, in file-name order
        #[arg(long, short = 'f')]
        pub frames: PathBuf,
        /// Frame replay rate; 0 reads as fast as possible
        #[arg(long, default_value_t = FRAMES_PER_SECOND)]
        pub fps: f32,
        /// Restart the frame directory instead of ending the session
        #[arg(long = "loop")]
        pub looping: bool,
        /// Image file rewritten with every composited frame
        #[arg(long, short = 'o', default_value = "frame.png")]
        pub output: PathBuf,
        /// Also keep every composited frame in this directory
        #[arg(long)]
        pub record: Option<PathBuf>,
        /// Classifier program; receives the snapshot path as its last argument
        #[arg(long, short = 'c')]
        pub classifier: PathBuf,
        /// Extra argument passed to the classifier before the snapshot path
        #[arg(long = "classifier-arg", allow_hyphen_values = true)]
        pub classifier_args: Vec<String>,
        /// Hand the classifier BGR pixels instead of RGB
        #[arg(long)]
        pub bgr: bool,
        /// Directory holding rock.png, paper.png and scissors.png
        #[arg(long, default_value = "assets")]
        pub assets: PathBuf,
        /// HUD font; the bundled DejaVu Sans Mono when absent or unreadable
        #[arg(long)]
        pub font: Option<PathBuf>,
        #[arg(long, default_value_t = TOTAL_ROUNDS)]
        pub rounds: usize,
        #[arg(long, default_value_t = REQUIRED_WINS)]
        pub wins: usize,
        /// Countdown steps before each snapshot
        #[arg(long, default_value_t = COUNTDOWN_STEPS)]
        pub countdown: u32,
        /// Hold per countdown step, in milliseconds
        #[arg(long, default_value_t = COUNTDOWN_DELAY.as_millis() as u64)]
        pub delay_ms: u64,
        /// Side of the square capture region
        #[arg(long, default_value_t = ROI_SIZE)]
        pub roi: Pixels,
        /// Seed for the opponent, for reproducible sessions
        #[arg(long)]
        pub seed: Option<u64>,
        /// Only classify and show predictions; no match is played
        #[arg(long)]
        pub probe: bool,
    }

    impl Args {
        pub fn settings(&self) -> anyhow::Result<Settings> {
            let mode = match self.probe {
                true => Mode::Probe,
                false => Mode::Match,
            };
            Settings::new(
                Rules::new(self.rounds, self.wins)?,
                self.roi,
                self.countdown,
                Duration::from_millis(self.delay_ms),
                mode,
            )
        }
        pub fn color_order(&self) -> ColorOrder {
            match self.bgr {
                true => ColorOrder::Bgr,
                false => ColorOrder::Rgb,
            }
        }
    }

}
