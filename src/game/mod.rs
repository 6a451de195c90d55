//! Best-of-N match engine.
//!
//! [`MatchState`] is the functional core: it owns the round history and
//! counters and decides when a match is over. The capture loop drives it,
//! one resolved round at a time.

mod error;
mod opponent;
mod rules;
mod state;
mod verdict;

pub use error::*;
pub use opponent::*;
pub use rules::*;
pub use state::*;
pub use verdict::*;
