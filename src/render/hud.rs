use super::*;
use crate::OUTLINE_THICKNESS;
use crate::TEXT_LARGE;
use crate::TEXT_MARGIN;
use crate::TEXT_MEDIUM;
use crate::TEXT_SMALL;
use crate::capture::Region;
use crate::game::MatchState;
use crate::game::Verdict;
use crate::gesture::Prediction;

pub const INSTRUCTIONS: &str = "SPACE: countdown+snap | ESC: quit";

/// What a single idle frame should show.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub region: Region,
    /// Absent in probe mode: no history, counter or verdict.
    pub state: Option<&'a MatchState>,
    pub last: Option<&'a Prediction>,
    pub notice: Option<&'a str>,
}

/// Heads-up display composited over every frame.
pub struct Hud {
    icons: IconCache,
    typeface: Typeface,
}

impl Hud {
    pub fn new(icons: IconCache, typeface: Typeface) -> Self {
        Self { icons, typeface }
    }

    /// Idle frame: capture outline (hidden once a verdict is up),
    /// instructions, last prediction, notice, both history rows, the round
    /// counter and the verdict banner.
    pub fn idle(&self, frame: &mut Frame, view: &View) {
        let verdict = view.state.and_then(MatchState::verdict);
        if verdict.is_none() {
            self.outline(frame, view.region);
        }
        self.text(frame, INSTRUCTIONS, (10, 30), TEXT_SMALL, WHITE);
        if let Some(last) = view.last {
            let line = format!("Last: {}", last);
            self.text(frame, &line, (10, 70), TEXT_SMALL, YELLOW);
        }
        if let Some(notice) = view.notice {
            self.text(frame, notice, (10, 110), TEXT_SMALL, RED);
        }
        if let Some(state) = view.state {
            self.history(frame, state);
            self.counter(frame, state);
            if let Some(verdict) = verdict {
                self.banner(frame, verdict);
            }
        }
    }

    /// Countdown frame: outline plus "Capturing in N...".
    pub fn countdown(&self, frame: &mut Frame, region: Region, step: u32) {
        self.outline(frame, region);
        let line = format!("Capturing in {}...", step);
        self.text(frame, &line, (10, 70), TEXT_MEDIUM, YELLOW);
    }

    fn outline(&self, frame: &mut Frame, region: Region) {
        let side = region.side();
        outline(frame, region.origin(), (side, side), OUTLINE_THICKNESS, GREEN);
    }

    fn history(&self, frame: &mut Frame, state: &MatchState) {
        let h = frame.height();
        let slots = state.rules().total_rounds();
        let typeface = &self.typeface;
        let rows = [
            ("Player", state.player_history(), h.saturating_sub(60)),
            ("Opponent", state.opponent_history(), h.saturating_sub(20)),
        ];
        for (prefix, history, baseline) in rows {
            render_history(frame, typeface, prefix, history, baseline, &self.icons, slots);
        }
    }

    fn counter(&self, frame: &mut Frame, state: &MatchState) {
        let line = format!(
            "Round {}/{}",
            state.current_round(),
            state.rules().total_rounds()
        );
        let width = self.typeface.measure(&line, TEXT_SMALL).0 as i64;
        let x = frame.width() as i64 - width - TEXT_MARGIN as i64;
        let y = frame.height() as i64 - 20;
        self.text(frame, &line, (x, y), TEXT_SMALL, YELLOW);
    }

    fn banner(&self, frame: &mut Frame, verdict: Verdict) {
        let (w, ascent) = self.typeface.measure(verdict.text(), TEXT_LARGE);
        let x = (frame.width() as i64 - w as i64) / 2;
        let y = (frame.height() as i64 + ascent as i64) / 2;
        self.text(frame, verdict.text(), (x, y), TEXT_LARGE, verdict.color());
    }

    fn text(&self, frame: &mut Frame, text: &str, (x, y): (i64, i64), px: f32, color: image::Rgb<u8>) {
        self.typeface.draw(frame, text, x, y, px, color);
    }
}
