//! Frame compositing: icons, history strips, text and the full HUD.
//!
//! Everything here draws into a caller-owned [`Frame`] in place and never
//! writes outside its bounds.

mod canvas;
mod history;
mod hud;
mod icons;
mod overlay;
mod typeface;

pub use canvas::*;
pub use history::*;
pub use hud::*;
pub use icons::*;
pub use overlay::*;
pub use typeface::*;
