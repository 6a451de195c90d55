use super::Mode;
use super::Settings;
use super::Tally;
use crate::capture::Camera;
use crate::capture::Classifier;
use crate::capture::Region;
use crate::capture::Screen;
use crate::game::MatchState;
use crate::game::Opponent;
use crate::gesture::Choice;
use crate::gesture::Prediction;
use crate::render::Hud;
use crate::render::View;
use std::ops::ControlFlow;

/// Shown after a capture that did not produce a playable gesture.
pub const NOT_RECOGNIZED: &str = "Not recognized, try again";

/// One interactive run: owns the camera, screen, classifier, opponent and
/// the current match, and drives them from a single frame loop.
///
/// Idle frames are composited and shown until a capture key arrives. A
/// capture resets a finished match, counts down, snapshots the capture
/// region, classifies it and, if the top label is a known gesture, plays a
/// round. Unrecognized gestures leave the match untouched.
pub struct Session<C, S, K>
where
    C: Camera,
    S: Screen,
    K: Classifier,
{
    camera: C,
    screen: S,
    classifier: K,
    opponent: Box<dyn Opponent>,
    hud: Hud,
    settings: Settings,
    state: MatchState,
    last: Option<Prediction>,
    notice: Option<&'static str>,
    tally: Tally,
}

impl<C, S, K> Session<C, S, K>
where
    C: Camera,
    S: Screen,
    K: Classifier,
{
    pub fn new(
        camera: C,
        screen: S,
        classifier: K,
        opponent: Box<dyn Opponent>,
        hud: Hud,
        settings: Settings,
    ) -> Self {
        Self {
            state: MatchState::new(settings.rules),
            camera,
            screen,
            classifier,
            opponent,
            hud,
            settings,
            last: None,
            notice: None,
            tally: Tally::default(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }
    pub fn last(&self) -> Option<&Prediction> {
        self.last.as_ref()
    }
    pub fn notice(&self) -> Option<&str> {
        self.notice
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Run until the exit key or end of stream. Camera and screen are
    /// released on every way out, errors included.
    pub fn run(&mut self) -> anyhow::Result<Tally> {
        log::info!(
            "session started: {:?} mode, best of {}, first to {}",
            self.settings.mode,
            self.settings.rules.total_rounds(),
            self.settings.rules.required_wins()
        );
        let result = self.drive();
        self.camera.release();
        self.screen.close();
        log::info!("session over: {}", self.tally);
        result.map(|()| self.tally.clone())
    }

    fn drive(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(mut frame) = self.camera.read() else {
                log::info!("end of stream");
                return Ok(());
            };
            let region = Region::within(&frame, self.settings.roi);
            self.hud.idle(&mut frame, &self.view(region));
            self.screen.show(&frame)?;
            match self.screen.poll_key() {
                Some(key) if key.is_exit() => return Ok(()),
                Some(key) if key.is_capture() => {
                    if self.capture()?.is_break() {
                        return Ok(());
                    }
                }
                _ => continue,
            }
        }
    }

    fn view(&self, region: Region) -> View<'_> {
        View {
            region,
            state: match self.settings.mode {
                Mode::Match => Some(&self.state),
                Mode::Probe => None,
            },
            last: self.last.as_ref(),
            notice: self.notice,
        }
    }

    /// Countdown, snapshot, classify, play. Breaks on exit key or end of
    /// stream.
    fn capture(&mut self) -> anyhow::Result<ControlFlow<()>> {
        if self.state.is_over() {
            log::debug!("starting a fresh match");
            self.state = self.state.reset();
            self.last = None;
        }
        self.notice = None;
        for step in (1..=self.settings.countdown).rev() {
            let Some(mut frame) = self.camera.read() else {
                log::info!("end of stream during countdown");
                return Ok(ControlFlow::Break(()));
            };
            let region = Region::within(&frame, self.settings.roi);
            self.hud.countdown(&mut frame, region, step);
            self.screen.show(&frame)?;
            if self.screen.poll_key().is_some_and(|key| key.is_exit()) {
                return Ok(ControlFlow::Break(()));
            }
            std::thread::sleep(self.settings.delay);
        }
        let Some(snapshot) = self.camera.read() else {
            log::info!("end of stream before snapshot");
            return Ok(ControlFlow::Break(()));
        };
        let region = Region::within(&snapshot, self.settings.roi);
        let roi = self.classifier.color_order().convert(region.extract(&snapshot));
        let prediction = match self.classifier.classify(&roi) {
            Ok(scores) => Prediction::from(scores),
            Err(e) => {
                log::warn!("classifier failed: {:#}", e);
                Prediction::unknown()
            }
        };
        log::debug!("prediction: {}", prediction);
        self.tally.captures += 1;
        let gesture = prediction.top_choice();
        self.last = Some(prediction);
        match (self.settings.mode, gesture) {
            (Mode::Probe, _) => {}
            (Mode::Match, Some(player)) => self.play(player)?,
            (Mode::Match, None) => {
                log::info!("gesture not recognized, round not played");
                self.notice = Some(NOT_RECOGNIZED);
                self.tally.aborted += 1;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn play(&mut self, player: Choice) -> anyhow::Result<()> {
        let opponent = self.opponent.throw();
        let outcome = self.state.apply(player, opponent)?;
        self.tally.rounds += 1;
        log::info!(
            "round {}: {} vs {} -> {}",
            self.state.rounds(),
            player,
            opponent,
            outcome
        );
        if let Some(verdict) = self.state.verdict() {
            log::info!(
                "match over {}-{}: {}",
                self.state.player_wins(),
                self.state.opponent_wins(),
                verdict
            );
            self.tally.record(verdict);
        }
        Ok(())
    }
}
