//! The capture/render loop and everything it owns.

mod config;
mod session;
mod tally;

pub use config::*;
pub use session::*;
pub use tally::*;
