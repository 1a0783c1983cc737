//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Clock readings are passed in, never sampled
//! - No rendering or platform dependencies

pub mod collision;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{resolve_paddle, touch, vertical_bounce, wall_bounce};
pub use round::{check_goals, is_frozen, restart, serve};
pub use state::{Ball, GameEvent, GameState, Paddle, Side, Stage};
pub use tick::{PaddleInput, TickInput, tick};
