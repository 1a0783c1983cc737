//! Collision detection and response for the ball
//!
//! The ball is an axis-aligned square, so every test here is a pair of
//! interval overlaps. Paddle hits near a corner are ambiguous: the ball may be
//! striking the short top/bottom edge or the long face. The penetration depth
//! along each axis decides which.

use rand::Rng;

use super::state::{Ball, GameEvent, GameState, Paddle, Side};
use crate::consts::*;

/// Reflect off the top or bottom wall.
///
/// Mirrors the heading when the ball sits on or beyond either margin.
pub fn wall_bounce(ball: &mut Ball) -> bool {
    let at_top = ball.pos.y <= WALL_MARGIN;
    let at_bottom = ball.pos.y >= SCREEN_HEIGHT - ball.size - WALL_MARGIN;
    if at_top || at_bottom {
        ball.angle = -ball.angle;
        return true;
    }
    false
}

/// Send the ball back across the field off a paddle face.
///
/// `face_x` is where the ball's left edge is placed so it sits flush against
/// the paddle. The very first paddle contact of a serve bumps the ball to
/// rally speed.
pub fn vertical_bounce<R: Rng>(ball: &mut Ball, face_x: f32, rng: &mut R) {
    let spread: f32 = rng.random();
    ball.angle = 180.0 - ball.angle - BOUNCE_SPREAD + 2.0 * BOUNCE_SPREAD * spread;
    ball.pos.x = face_x;
    ball.bounces += 1;
    if ball.bounces == 1 {
        ball.speed = RALLY_SPEED;
    }
}

/// Resolve contact between the ball and the paddle guarding `side`.
///
/// Three regions are checked in order: the paddle's top corner, its bottom
/// corner, then the face in between. In the corner regions the deeper axis
/// wins: more horizontal overlap than vertical means the ball came over the
/// edge and only its vertical direction flips.
///
/// The two sides are not perfect mirrors. The left paddle counts a ball
/// touching its face from the right as overlapping, the right paddle does not
/// count a ball touching its back; and the right paddle's bottom corner
/// includes a ball whose top sits exactly on the paddle's bottom edge. These
/// boundaries change which frame a grazing hit registers on.
pub fn resolve_paddle<R: Rng>(ball: &mut Ball, paddle: &Paddle, side: Side, rng: &mut R) -> bool {
    let (overlaps_x, x_depth, face_x) = match side {
        Side::Left => (
            ball.pos.x <= paddle.right() && ball.right() >= paddle.left(),
            paddle.right() - ball.pos.x,
            paddle.right(),
        ),
        Side::Right => (
            ball.right() >= paddle.left() && ball.pos.x < paddle.right(),
            ball.right() - paddle.left(),
            paddle.left() - ball.size,
        ),
    };
    if !overlaps_x {
        return false;
    }

    let clears_bottom = match side {
        Side::Left => ball.pos.y < paddle.bottom(),
        Side::Right => ball.pos.y <= paddle.bottom(),
    };

    let y_depth = if ball.pos.y < paddle.top() && ball.bottom() >= paddle.top() {
        // Top corner
        ball.bottom() - paddle.top()
    } else if ball.bottom() > paddle.bottom() && clears_bottom {
        // Bottom corner
        paddle.bottom() - ball.pos.y
    } else if ball.bottom() > paddle.top() && ball.pos.y < paddle.bottom() {
        vertical_bounce(ball, face_x, rng);
        return true;
    } else {
        return false;
    };

    if x_depth > y_depth {
        ball.angle = -ball.angle;
    } else {
        vertical_bounce(ball, face_x, rng);
    }
    true
}

/// Run every bounce check for the current ball position: walls first, then
/// player 1's paddle, then player 2's.
pub fn touch(state: &mut GameState) {
    if wall_bounce(&mut state.ball) {
        log::trace!("Wall bounce at {:?}", state.ball.pos);
        state.events.push(GameEvent::WallBounce);
    }

    for side in [Side::Left, Side::Right] {
        let paddle = match side {
            Side::Left => &state.left,
            Side::Right => &state.right,
        };
        if resolve_paddle(&mut state.ball, paddle, side, &mut state.rng) {
            log::trace!(
                "Paddle {:?} hit, angle now {:.1}, bounces {}",
                side,
                state.ball.angle,
                state.ball.bounces
            );
            state.events.push(GameEvent::PaddleHit { side });
        }
    }
}
