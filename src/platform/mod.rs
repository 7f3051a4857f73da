//! Platform abstraction layer
//!
//! The simulation only ever sees these seams:
//! - Input: a pressed-action query with a reset
//! - Time: elapsed milliseconds between frames

pub mod input;
pub mod time;

pub use input::{Action, InputQuery, KeyboardState};
pub use time::FrameClock;
