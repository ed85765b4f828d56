//! Platform abstraction layer
//!
//! Browser and native front ends translate their raw events into
//! [`input::InputEvent`]s; the simulation only ever sees those.

pub mod autoplay;
pub mod input;

pub use autoplay::{aim_impulse, putt_input};
pub use input::{InputEvent, PointerDrag, canvas_point};
