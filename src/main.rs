//! Interactive rock-paper-scissors against a random opponent.
//!
//! SPACE counts down and snaps the capture region, ESC quits.

use clap::Parser;
use roshambo::capture::CommandClassifier;
use roshambo::capture::FolderCamera;
use roshambo::capture::TerminalDisplay;
use roshambo::game::Opponent;
use roshambo::game::RandomOpponent;
use roshambo::render::Hud;
use roshambo::render::IconCache;
use roshambo::render::Typeface;
use roshambo::session::Args;
use roshambo::session::Session;

fn main() -> anyhow::Result<()> {
    roshambo::log();
    let args = Args::parse();
    let settings = args.settings()?;
    let camera = FolderCamera::open(&args.frames)?
        .fps(args.fps)
        .looping(args.looping);
    let classifier = CommandClassifier::new(&args.classifier, args.classifier_args.clone())
        .order(args.color_order());
    let opponent: Box<dyn Opponent> = match args.seed {
        Some(seed) => Box::new(RandomOpponent::seeded(seed)),
        None => Box::new(RandomOpponent::default()),
    };
    let typeface = Typeface::resolve(args.font.as_deref())?;
    let hud = Hud::new(IconCache::load(&args.assets), typeface);
    log::info!("frames are written to {}", args.output.display());
    log::info!("controls: SPACE = countdown + snap, ESC = quit");
    let screen = TerminalDisplay::open(&args.output, args.record.as_deref())?;
    Session::new(camera, screen, classifier, opponent, hud, settings).run()?;
    Ok(())
}
