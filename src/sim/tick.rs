//! Per-frame simulation tick
//!
//! Order within a tick: input -> ball lifecycle -> motion -> ball x brick ->
//! ball x paddle -> lost balls -> round reset.

use super::collision::{Collision, ball_collision, resolve_brick_hit, resolve_paddle_hit};
use super::state::{BallState, GameEvent, GameState};
use crate::consts::*;

/// Input signals for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move paddle left (held)
    pub left: bool,
    /// Move paddle right (held)
    pub right: bool,
    /// Hold/launch trigger (held, debounced)
    pub launch: bool,
    /// Idle/demo mode - the simulation plays itself
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;

    move_paddle(state, input, dt);
    if input.launch {
        handle_launch_trigger(state);
    }

    state.launch_timer += 1;
    if state.launch_timer > LAUNCH_TIMER_CAP {
        state.launch_timer = LAUNCH_DEBOUNCE_TICKS;
    }

    let width = state.window.x;
    for ball in &mut state.balls {
        ball.integrate(dt, width);
    }

    collide_bricks(state);
    collide_paddle(state);
    remove_lost_balls(state);

    if state.ball_counts().destroyed >= BALL_COUNT {
        state.reset_round();
    }
}

/// Steer toward the lowest launched ball and keep the trigger asserted
fn autopilot(state: &GameState, input: &mut TickInput) {
    input.launch = true;
    input.left = false;
    input.right = false;

    let lowest = state
        .balls
        .iter()
        .filter(|b| b.is_launched())
        .max_by(|a, b| {
            a.body
                .pos
                .y
                .partial_cmp(&b.body.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    if let Some(ball) = lowest {
        let target = ball.collision_center().x;
        let center = state.paddle.body.center().x;
        // Dead zone keeps the paddle from jittering under the ball
        let dead_zone = state.paddle.body.size.x / 4.0;
        if target < center - dead_zone {
            input.left = true;
        } else if target > center + dead_zone {
            input.right = true;
        }
    }
}

fn move_paddle(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = state.paddle_speed * dt;
    let mut dx = 0.0;
    if input.left {
        dx -= step;
    }
    if input.right {
        dx += step;
    }
    if dx == 0.0 {
        return;
    }

    state.paddle.move_by(dx, state.window.x);
    for ball in &mut state.balls {
        ball.follow(&state.paddle);
    }
}

/// Launch the held ball, or hold the next idle one. At most one ball changes
/// state per trigger.
fn handle_launch_trigger(state: &mut GameState) {
    if state.launch_timer < LAUNCH_DEBOUNCE_TICKS {
        return;
    }

    if let Some(i) = state.balls.iter().position(|b| b.is_held()) {
        state.balls[i].launch(&state.paddle);
        state.launch_timer = 0;
        state.events.push(GameEvent::BallLaunched { ball: i });
        log::debug!("Ball {} launched", i);
        return;
    }

    if let Some(i) = state
        .balls
        .iter()
        .position(|b| b.state() == BallState::Idle)
    {
        state.balls[i].hold(&state.paddle);
        state.launch_timer = 0;
        state.events.push(GameEvent::BallHeld { ball: i });
        log::debug!("Ball {} held", i);
    }
}

/// Each launched ball breaks at most the first brick it overlaps
fn collide_bricks(state: &mut GameState) {
    let level = &mut state.levels[state.current_level];

    for (ball_idx, ball) in state.balls.iter_mut().enumerate() {
        if !ball.is_launched() {
            continue;
        }

        let hit = level
            .bricks
            .iter()
            .enumerate()
            .filter(|(_, brick)| !brick.body.destroyed)
            .find_map(|(i, brick)| match ball_collision(ball, &brick.body) {
                Collision::Hit {
                    direction,
                    separation,
                } => Some((i, direction, separation)),
                Collision::Miss => None,
            });

        if let Some((brick_idx, direction, separation)) = hit {
            level.bricks[brick_idx].body.destroyed = true;
            resolve_brick_hit(ball, direction, separation);
            state.events.push(GameEvent::BrickDestroyed {
                ball: ball_idx,
                brick: brick_idx,
                direction,
            });
        }
    }
}

fn collide_paddle(state: &mut GameState) {
    for (i, ball) in state.balls.iter_mut().enumerate() {
        if !ball.is_launched() {
            continue;
        }
        if ball_collision(ball, &state.paddle.body).is_hit() {
            resolve_paddle_hit(ball, &state.paddle);
            state.events.push(GameEvent::PaddleHit { ball: i });
        }
    }
}

/// Launched balls past the bottom edge are destroyed
fn remove_lost_balls(state: &mut GameState) {
    let bottom = state.window.y;
    for (i, ball) in state.balls.iter_mut().enumerate() {
        if ball.is_launched() && ball.body.pos.y >= bottom {
            ball.destroy();
            state.events.push(GameEvent::BallLost { ball: i });
            log::debug!("Ball {} lost", i);
        }
    }
}
