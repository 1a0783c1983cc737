//! Serving, goals and match restarts

use std::time::Duration;

use rand::Rng;

use super::state::{Ball, GameEvent, GameState, Side, Stage};
use crate::consts::*;

/// Re-centre the ball and launch it toward `state.next_serve`.
///
/// The angle is a whole number of degrees drawn from a 91-degree arc:
/// `[-45, 45]` toward the right-hand player, `[135, 225]` toward the left.
/// The next serve goes the other way, and the serve clock restarts.
pub fn serve(state: &mut GameState, now: Duration) {
    let toward = state.next_serve;
    let offset = state.rng.random_range(-SERVE_ARC..=SERVE_ARC) as f32;
    let angle = match toward {
        Side::Right => offset,
        Side::Left => 180.0 + offset,
    };
    state.next_serve = toward.opposite();

    state.ball = Ball {
        angle,
        ..Ball::default()
    };
    state.served_at = now;

    log::debug!("Serve toward {:?} at {:.0} degrees", toward, angle);
    state.events.push(GameEvent::Served { toward });
}

/// True while the ball is held in place after the latest serve
pub fn is_frozen(state: &GameState, now: Duration) -> bool {
    now.saturating_sub(state.served_at) < SERVE_DELAY
}

/// Credit a goal if the ball has completely left the field.
///
/// Exiting past the left edge scores for player 2, past the right edge for
/// player 1. A goal re-serves immediately, so the same exit can never score
/// twice. Reaching `WIN_SCORE` ends the match.
pub fn check_goals(state: &mut GameState, now: Duration) -> Option<Side> {
    let scorer = if state.ball.right() <= 0.0 {
        Side::Right
    } else if state.ball.pos.x >= SCREEN_WIDTH {
        Side::Left
    } else {
        return None;
    };

    let paddle = state.paddle_mut(scorer);
    paddle.score += 1;
    let score = paddle.score;

    log::debug!("Player {} scores ({})", scorer.player_number(), score);
    state.events.push(GameEvent::Goal { scorer, score });

    serve(state, now);

    if score == WIN_SCORE {
        state.set_stage(Stage::Finished);
    }
    Some(scorer)
}

/// Zero both scores and serve a fresh ball
pub fn restart(state: &mut GameState, now: Duration) {
    state.left.score = 0;
    state.right.score = 0;
    serve(state, now);
}
