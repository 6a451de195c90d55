//! Gesture vocabulary shared by the classifier boundary and the match engine.
//!
//! Raw classifier labels are normalized exactly once, here, into
//! [`Choice`]. Everything downstream works with the closed enum.

mod choice;
mod outcome;
mod prediction;

pub use choice::*;
pub use outcome::*;
pub use prediction::*;
