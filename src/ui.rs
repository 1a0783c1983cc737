//! Read-only frame snapshot for the presentation layer
//!
//! Text is described, not rendered: each label carries the string, a style
//! and an anchor. Measuring and drawing glyphs is the adapter's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::colors;
use crate::sim::{GameState, Side, Stage};

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// Font face a label is set in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextStyle {
    Title,
    Subtitle,
    Body,
    /// Scoreboard digits (separate display font)
    Score,
}

impl TextStyle {
    /// Point size at 72 DPI
    pub fn point_size(self) -> f32 {
        match self {
            TextStyle::Title => 80.0,
            TextStyle::Subtitle => 22.0,
            TextStyle::Body => 12.0,
            TextStyle::Score => 44.0,
        }
    }
}

/// How a label is positioned horizontally around `anchor.x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    /// Text ends at `anchor.x`
    Right,
    /// Text is centred on `anchor.x`
    Center,
    /// Text starts at `anchor.x`
    Left,
}

/// A line (or lines) of text to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
    /// x per `align`, y is the baseline of the first line
    pub anchor: Vec2,
    pub align: Align,
    /// Draw dark text on a light box hugging the text bounds
    pub boxed: bool,
    /// RGBA text colour
    pub color: [f32; 4],
    /// RGBA fill of the backing box, when `boxed`
    pub fill: Option<[f32; 4]>,
}

impl Label {
    fn centered(text: impl Into<String>, style: TextStyle, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            style,
            anchor: Vec2::new(x, y),
            align: Align::Center,
            boxed: false,
            color: colors::FOREGROUND,
            fill: None,
        }
    }

    /// Dark text on a light box
    fn boxed(self) -> Self {
        Self {
            boxed: true,
            color: colors::BOXED_TEXT,
            fill: Some(colors::FOREGROUND),
            ..self
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub stage: Stage,
    /// Player 1, player 2
    pub paddles: [Rect; 2],
    pub ball: Rect,
    /// Scoreboard text for player 1, player 2
    pub scores: [String; 2],
    /// Stage-specific text (menu, winner banner, pause prompt)
    pub labels: Vec<Label>,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        let paddle_rect = |side: Side| {
            let paddle = state.paddle(side);
            Rect {
                pos: paddle.pos,
                size: paddle.size,
            }
        };

        Self {
            stage: state.stage,
            paddles: [paddle_rect(Side::Left), paddle_rect(Side::Right)],
            ball: Rect {
                pos: state.ball.pos,
                size: Vec2::splat(state.ball.size),
            },
            scores: [state.left.score_text(), state.right.score_text()],
            labels: stage_labels(state),
        }
    }

    /// Scoreboard labels: player 1 right-aligned left of centre, player 2
    /// left-aligned right of centre
    pub fn score_labels(&self) -> [Label; 2] {
        let [left, right] = &self.scores;
        [
            Label {
                text: left.clone(),
                style: TextStyle::Score,
                anchor: Vec2::new(SCREEN_WIDTH / 2.0 - 70.0, 60.0),
                align: Align::Right,
                boxed: false,
                color: colors::FOREGROUND,
                fill: None,
            },
            Label {
                text: right.clone(),
                style: TextStyle::Score,
                anchor: Vec2::new(SCREEN_WIDTH / 2.0 + 70.0, 60.0),
                align: Align::Left,
                boxed: false,
                color: colors::FOREGROUND,
                fill: None,
            },
        ]
    }
}

fn stage_labels(state: &GameState) -> Vec<Label> {
    let center = SCREEN_WIDTH / 2.0;
    match state.stage {
        Stage::Menu => vec![
            Label::centered(GAME_TITLE, TextStyle::Title, center, 80.0),
            Label::centered("HIT P TO PLAY OR PAUSE", TextStyle::Body, center, 120.0),
            Label::centered(
                "PLAYER 1\nUse D & E keys",
                TextStyle::Body,
                SCREEN_WIDTH / 4.0,
                180.0,
            ),
            Label::centered(
                "PLAYER 2\nUse Arrow keys",
                TextStyle::Body,
                3.0 * SCREEN_WIDTH / 4.0,
                180.0,
            ),
        ],
        Stage::Play => Vec::new(),
        Stage::Finished => {
            let winner = state.leader();
            let x = match winner {
                Side::Left => SCREEN_WIDTH / 4.0,
                Side::Right => 3.0 * SCREEN_WIDTH / 4.0,
            };
            vec![
                Label::centered(
                    format!("Player {} wins!", winner.player_number()),
                    TextStyle::Subtitle,
                    x,
                    100.0,
                ),
                Label::centered("HIT P TO PLAY AGAIN", TextStyle::Body, x, 140.0),
            ]
        }
        Stage::Paused => vec![
            Label::centered("HIT P TO RESUME GAME", TextStyle::Subtitle, center, 100.0).boxed(),
        ],
    }
}
