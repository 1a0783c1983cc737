//! Per-frame simulation pass
//!
//! One call per display tick. All stage changes except the end of a match go
//! through the toggle input.

use std::time::Duration;

use super::collision::touch;
use super::round::{check_goals, is_frozen, restart};
use super::state::{GameState, Side, Stage};

/// Held direction keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Player 1
    pub left: PaddleInput,
    /// Player 2
    pub right: PaddleInput,
    /// Play/pause toggle (edge-triggered: true for one tick per press)
    pub toggle: bool,
}

impl TickInput {
    pub fn paddle(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Apply the toggle input to the stage machine
fn toggle_stage(state: &mut GameState, now: Duration) {
    match state.stage {
        Stage::Menu => state.set_stage(Stage::Play),
        Stage::Play => state.set_stage(Stage::Paused),
        Stage::Paused => state.set_stage(Stage::Play),
        Stage::Finished => {
            restart(state, now);
            state.set_stage(Stage::Play);
        }
    }
}

/// Advance the game by one frame.
///
/// `now` is the presentation clock reading for this frame; it only gates the
/// post-serve freeze.
pub fn tick(state: &mut GameState, input: &TickInput, now: Duration) {
    state.events.clear();
    state.frame += 1;

    // A toggle consumes the frame
    if input.toggle {
        toggle_stage(state, now);
        return;
    }

    if state.stage != Stage::Play {
        return;
    }

    for side in [Side::Left, Side::Right] {
        let keys = input.paddle(side);
        state.paddle_mut(side).move_by(keys.up, keys.down);
    }

    if is_frozen(state, now) {
        return;
    }

    state.ball.advance();
    touch(state);
    check_goals(state, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::GameEvent;
    use glam::Vec2;
    use proptest::prelude::*;

    const TOGGLE: TickInput = TickInput {
        left: PaddleInput { up: false, down: false },
        right: PaddleInput { up: false, down: false },
        toggle: true,
    };

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_menu_play_pause_cycle() {
        let mut state = GameState::new(12345);
        assert_eq!(state.stage, Stage::Menu);

        tick(&mut state, &TOGGLE, ms(10));
        assert_eq!(state.stage, Stage::Play);

        state.left.score = 3;
        state.right.score = 5;
        tick(&mut state, &TOGGLE, ms(20));
        assert_eq!(state.stage, Stage::Paused);

        tick(&mut state, &TOGGLE, ms(30));
        assert_eq!(state.stage, Stage::Play);
        assert_eq!((state.left.score, state.right.score), (3, 5));
    }

    #[test]
    fn test_nothing_moves_outside_play() {
        let mut state = GameState::new(1);
        let input = TickInput {
            left: PaddleInput { up: true, down: false },
            ..Default::default()
        };
        let before = (state.left.pos, state.ball.pos);
        tick(&mut state, &input, ms(5000));
        assert_eq!((state.left.pos, state.ball.pos), before);

        tick(&mut state, &TOGGLE, ms(5000));
        tick(&mut state, &TOGGLE, ms(7000));
        assert_eq!(state.stage, Stage::Paused);
        tick(&mut state, &input, ms(9000));
        assert_eq!((state.left.pos, state.ball.pos), before);
    }

    #[test]
    fn test_ball_frozen_for_one_second_after_serve() {
        let mut state = GameState::new(77);
        tick(&mut state, &TOGGLE, ms(0));
        let start = state.ball.pos;

        for t in [16, 500, 999] {
            tick(&mut state, &TickInput::default(), ms(t));
            assert_eq!(state.ball.pos, start, "ball moved at {t}ms");
        }

        tick(&mut state, &TickInput::default(), ms(1000));
        assert_ne!(state.ball.pos, start);
    }

    #[test]
    fn test_paddles_move_during_freeze() {
        let mut state = GameState::new(77);
        tick(&mut state, &TOGGLE, ms(0));
        let input = TickInput {
            left: PaddleInput { up: true, down: false },
            right: PaddleInput { up: false, down: true },
            toggle: false,
        };
        tick(&mut state, &input, ms(16));
        assert_eq!(state.left.pos.y, 215.0 - PADDLE_STEP);
        assert_eq!(state.right.pos.y, 215.0 + PADDLE_STEP);
    }

    #[test]
    fn test_menu_toggle_keeps_opening_serve_clock() {
        let mut state = GameState::new(77);
        tick(&mut state, &TOGGLE, ms(5000));
        assert_eq!(state.served_at, Duration::ZERO);
        let start = state.ball.pos;
        tick(&mut state, &TickInput::default(), ms(5016));
        assert_ne!(state.ball.pos, start);
    }

    #[test]
    fn test_no_goal_or_hit_checks_during_freeze() {
        let mut state = GameState::new(31);
        tick(&mut state, &TOGGLE, ms(0));

        // Serve at 10s, then drop the ball where it would score
        crate::sim::serve(&mut state, ms(10_000));
        state.ball.pos = Vec2::new(-20.0, 240.0);
        tick(&mut state, &TickInput::default(), ms(10_500));
        assert!(state.events.is_empty());
        assert_eq!((state.left.score, state.right.score), (0, 0));
        assert_eq!(state.ball.pos, Vec2::new(-20.0, 240.0));

        // Overlapping the left paddle face
        state.ball.pos = Vec2::new(20.0, 230.0);
        state.ball.angle = 180.0;
        tick(&mut state, &TickInput::default(), ms(10_999));
        assert!(state.events.is_empty());
        assert_eq!(state.ball.bounces, 0);
        assert_eq!(state.ball.angle, 180.0);

        // Checks resume once the delay is over
        state.ball.pos = Vec2::new(-20.0, 240.0);
        tick(&mut state, &TickInput::default(), ms(11_000));
        assert_eq!(state.right.score, 1);
    }

    #[test]
    fn test_left_exit_scenario() {
        let mut state = GameState::new(2024);
        tick(&mut state, &TOGGLE, ms(0));
        state.ball.pos = Vec2::new(5.0, 240.0);
        state.ball.angle = 180.0;

        let mut t = 1000;
        let mut goals = 0;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), ms(t));
            t += 16;
            if state.events.iter().any(|e| matches!(e, GameEvent::Goal { .. })) {
                goals += 1;
                break;
            }
        }

        assert_eq!(goals, 1);
        assert_eq!(state.right.score, 1);
        assert_eq!(state.left.score, 0);
        assert_eq!(state.ball.pos, Vec2::new(315.0, 235.0));
        assert_eq!(state.stage, Stage::Play);
    }

    #[test]
    fn test_finished_toggle_restarts_match() {
        let mut state = GameState::new(5);
        tick(&mut state, &TOGGLE, ms(0));
        state.right.score = WIN_SCORE - 1;
        state.ball.pos = Vec2::new(-20.0, 240.0);
        state.ball.angle = 180.0;

        tick(&mut state, &TickInput::default(), ms(2000));
        assert_eq!(state.stage, Stage::Finished);
        assert_eq!(state.right.score, WIN_SCORE);

        // Frozen in place until the toggle
        let ball = state.ball.pos;
        tick(&mut state, &TickInput::default(), ms(5000));
        assert_eq!(state.ball.pos, ball);

        tick(&mut state, &TOGGLE, ms(6000));
        assert_eq!(state.stage, Stage::Play);
        assert_eq!((state.left.score, state.right.score), (0, 0));
        assert_eq!(state.served_at, ms(6000));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let inputs = [
            TOGGLE,
            TickInput {
                left: PaddleInput { up: true, down: false },
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                right: PaddleInput { up: false, down: true },
                ..Default::default()
            },
        ];

        let mut t = 0;
        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input, ms(t));
                tick(&mut state2, input, ms(t));
                t += 16;
            }
            // Keep the match running
            if state1.stage == Stage::Paused {
                tick(&mut state1, &TOGGLE, ms(t));
                tick(&mut state2, &TOGGLE, ms(t));
            }
        }

        assert_eq!(state1.frame, state2.frame);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.ball.angle, state2.ball.angle);
        assert_eq!(state1.left.score, state2.left.score);
        assert_eq!(state1.right.score, state2.right.score);
    }

    proptest! {
        #[test]
        fn prop_ball_stays_between_walls(seed in any::<u64>(), frames in 1usize..600) {
            let mut state = GameState::new(seed);
            tick(&mut state, &TOGGLE, ms(0));
            let mut t = 1000;
            for _ in 0..frames {
                tick(&mut state, &TickInput::default(), ms(t));
                t += 16;
                // One frame of travel past a margin is corrected by the next
                let slack = RALLY_SPEED;
                prop_assert!(state.ball.pos.y >= WALL_MARGIN - slack);
                prop_assert!(state.ball.bottom() <= SCREEN_HEIGHT - WALL_MARGIN + slack);
            }
        }
    }
}
