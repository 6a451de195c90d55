//! Capabilities the session borrows from the outside world: a camera, a
//! screen with a keyboard, and a gesture classifier. Each is a trait with
//! one concrete backend; any other backend can be swapped in.

mod camera;
mod classifier;
mod error;
mod region;
mod screen;

pub use camera::*;
pub use classifier::*;
pub use error::*;
pub use region::*;
pub use screen::*;
