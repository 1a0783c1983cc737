//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Input events (keyboard state to tick input)

pub mod input;

pub use input::{InputMapper, Key};
