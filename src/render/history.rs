use super::Frame;
use super::IconCache;
use super::Typeface;
use super::WHITE;
use super::blend;
use crate::HISTORY_ICON_START_X;
use crate::ICON_SIZE;
use crate::ICON_SPACING;
use crate::ICON_VERTICAL_OFFSET;
use crate::LABEL_ICON_GAP;
use crate::Pixels;
use crate::TEXT_MARGIN;
use crate::TEXT_SMALL;
use crate::gesture::Choice;

/// Draw `"<prefix>:"` and a fixed-width strip of `slots` icon positions.
///
/// Slot `i` shows the icon for `history[i]` when that round was played and
/// an icon is cached for it; every other slot stays blank, so the strip
/// has the same width however many rounds are in.
pub fn render_history(
    frame: &mut Frame,
    typeface: &Typeface,
    prefix: &str,
    history: &[Choice],
    baseline: Pixels,
    icons: &IconCache,
    slots: usize,
) {
    let label = format!("{}:", prefix);
    typeface.draw(frame, &label, TEXT_MARGIN as i64, baseline as i64, TEXT_SMALL, WHITE);
    let width = typeface.measure(&label, TEXT_SMALL).0;
    let y = strip_top(baseline);
    let played = history.iter().take(slots);
    for (slot, choice) in played.enumerate() {
        if let Some(icon) = icons.get(*choice) {
            blend(frame, icon, slot_left(width, slot), y);
        }
    }
}

/// Left edge of icon slot `slot` after a label `label_width` pixels wide.
pub fn slot_left(label_width: Pixels, slot: usize) -> i64 {
    let start = (TEXT_MARGIN + label_width + LABEL_ICON_GAP).max(HISTORY_ICON_START_X);
    start as i64 + slot as i64 * (ICON_SIZE + ICON_SPACING) as i64
}

/// Icons hang from just above the text baseline.
pub fn strip_top(baseline: Pixels) -> i64 {
    (baseline as i64 - ICON_SIZE as i64 + ICON_VERTICAL_OFFSET as i64).max(0)
}
