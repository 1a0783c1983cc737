//! Game state and core simulation types
//!
//! Everything the frame pass reads or writes lives in `GameState`; the
//! presentation layer only ever sees it through `ui::Frame`.

use std::time::Duration;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::heading;

/// One of the two players, named by the half of the field they defend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Player 1
    Left,
    /// Player 2
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// 1-based player number shown on screen
    pub fn player_number(self) -> u8 {
        match self {
            Side::Left => 1,
            Side::Right => 2,
        }
    }
}

/// Current stage of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Title screen, shown once at startup
    Menu,
    /// Active gameplay
    Play,
    /// A player reached the winning score
    Finished,
    /// Game is paused
    Paused,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball re-centred and launched toward `toward`
    Served { toward: Side },
    /// Ball reflected off the top or bottom wall
    WallBounce,
    /// Ball touched a paddle
    PaddleHit { side: Side },
    /// Ball left the field; `score` is the scorer's new total
    Goal { scorer: Side, score: u8 },
    StageChanged { from: Stage, to: Stage },
}

/// A player's paddle plus their score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    /// Width, height
    pub size: Vec2,
    pub score: u8,
}

impl Paddle {
    /// Paddle in its starting spot, vertically centred
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            pos: Vec2::new(x, (SCREEN_HEIGHT - PADDLE_HEIGHT) / 2.0),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            score: 0,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Apply one frame of movement.
    ///
    /// Up takes priority when both keys are held. A request toward a bound
    /// the paddle already sits on (or past) is ignored; every executed step
    /// lands inside `[PADDLE_MIN_Y, SCREEN_HEIGHT - height - WALL_MARGIN]`.
    pub fn move_by(&mut self, up: bool, down: bool) {
        let max_y = SCREEN_HEIGHT - self.size.y - WALL_MARGIN;
        if up {
            if self.pos.y <= PADDLE_MIN_Y {
                return;
            }
            self.pos.y = (self.pos.y - PADDLE_STEP).clamp(PADDLE_MIN_Y, max_y);
        } else if down {
            if self.pos.y >= max_y {
                return;
            }
            self.pos.y = (self.pos.y + PADDLE_STEP).clamp(PADDLE_MIN_Y, max_y);
        }
    }

    /// Score as drawn on the scoreboard
    pub fn score_text(&self) -> String {
        self.score.to_string()
    }
}

/// The ball: a square travelling at `speed` pixels per frame along `angle`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Edge length
    pub size: f32,
    /// Direction of travel in degrees (0 = right, 90 = down)
    pub angle: f32,
    pub speed: f32,
    /// Paddle contacts since the last serve
    pub bounces: u32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (SCREEN_WIDTH - BALL_SIZE) / 2.0,
                (SCREEN_HEIGHT - BALL_SIZE) / 2.0,
            ),
            size: BALL_SIZE,
            angle: 0.0,
            speed: SERVE_SPEED,
            bounces: 0,
        }
    }
}

impl Ball {
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Move one frame along the current heading
    pub fn advance(&mut self) {
        self.pos += heading(self.angle) * self.speed;
    }
}

/// Complete game state (deterministic for a given seed and input/clock trace)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// Source for serve angles and bounce spread
    pub(crate) rng: Pcg32,
    pub stage: Stage,
    /// Player 1
    pub left: Paddle,
    /// Player 2
    pub right: Paddle,
    pub ball: Ball,
    /// Side the next serve is sent toward
    pub next_serve: Side,
    /// Clock reading of the latest serve
    pub served_at: Duration,
    /// Frames processed
    pub frame: u64,
    /// Events raised by the latest tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new match in the menu stage with the first ball already served
    /// at clock reading zero
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let next_serve = if rng.random_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        };

        let mut state = Self {
            seed,
            rng,
            stage: Stage::Menu,
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            next_serve,
            served_at: Duration::ZERO,
            frame: 0,
            events: Vec::new(),
        };

        super::round::serve(&mut state, Duration::ZERO);
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Player with the higher score (ties go to player 2, as on the end screen)
    pub fn leader(&self) -> Side {
        if self.left.score > self.right.score {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub(crate) fn set_stage(&mut self, to: Stage) {
        let from = self.stage;
        if from == to {
            return;
        }
        self.stage = to;
        self.events.push(GameEvent::StageChanged { from, to });
        log::info!("Stage {:?} -> {:?}", from, to);
    }
}
