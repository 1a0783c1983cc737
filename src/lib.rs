//! Pong - A classic two-player paddle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (collisions, rounds, stage machine)
//! - `ui`: Read-only frame snapshot handed to the presentation layer
//! - `renderer`: Scene geometry for the snapshot (no GPU device code)
//! - `platform`: Keyboard input mapping
//! - `settings`: Key bindings and window preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;
pub use ui::Frame;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Logical playfield size (presentation may scale)
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;
    /// Thickness of the top/bottom walls; also the paddle travel margin
    pub const WALL_MARGIN: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 50.0;
    pub const LEFT_PADDLE_X: f32 = 15.0;
    pub const RIGHT_PADDLE_X: f32 = SCREEN_WIDTH - 25.0;
    /// Pixels moved per frame while a direction key is held
    pub const PADDLE_STEP: f32 = 6.0;
    pub const PADDLE_MIN_Y: f32 = WALL_MARGIN;
    pub const PADDLE_MAX_Y: f32 = SCREEN_HEIGHT - PADDLE_HEIGHT - WALL_MARGIN;

    /// Ball defaults (the ball is a square)
    pub const BALL_SIZE: f32 = 10.0;
    /// Pixels per frame right after a serve
    pub const SERVE_SPEED: f32 = 3.0;
    /// Pixels per frame once the first paddle has returned the ball
    pub const RALLY_SPEED: f32 = 7.0;
    /// Half-width of the random spread added on a paddle face hit (degrees)
    pub const BOUNCE_SPREAD: f32 = 10.0;
    /// Half-width of the serve arc (degrees)
    pub const SERVE_ARC: i32 = 45;

    /// First score to reach this wins the match
    pub const WIN_SCORE: u8 = 10;
    /// Ball is held still this long after every serve
    pub const SERVE_DELAY: Duration = Duration::from_millis(1000);

    /// Nominal display cadence (~60 Hz)
    pub const FRAME_DT: Duration = Duration::from_micros(16_667);

    /// Window defaults
    pub const GAME_TITLE: &str = "PONG";
    pub const WINDOW_SCALE: u32 = 2;
}

/// Unit vector for an angle given in degrees (y grows downward)
#[inline]
pub fn heading(angle_deg: f32) -> glam::Vec2 {
    let rad = angle_deg.to_radians();
    glam::Vec2::new(rad.cos(), rad.sin())
}
