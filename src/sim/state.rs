//! Game state and core simulation types
//!
//! Everything the update phase mutates lives here; rendering only reads it.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::Direction;
use super::level::{Level, LevelSource};
use crate::Settings;
use crate::consts::*;

/// Geometry and physics shared by the paddle, balls and bricks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Top-left corner, y grows downward
    pub pos: Vec2,
    pub size: Vec2,
    /// Units per second
    pub vel: Vec2,
    /// Rendering only
    pub color: Vec3,
    /// Destroyed entities are neither drawn nor collided with
    pub destroyed: bool,
}

impl Entity {
    pub fn new(pos: Vec2, size: Vec2, color: Vec3) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            color,
            destroyed: false,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        crate::rect_center(self.pos, self.size)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Entity,
}

impl Paddle {
    /// Default paddle: centered, resting on the bottom edge
    pub fn new(window: Vec2) -> Self {
        let size = Vec2::new(
            window.x / PADDLE_WIDTH_DIVISOR,
            window.y / PADDLE_HEIGHT_DIVISOR,
        );
        let pos = Vec2::new(window.x / 2.0 - size.x / 2.0, window.y - size.y);
        Self {
            body: Entity::new(pos, size, PLAYER_COLOR),
        }
    }

    /// Shift horizontally, clamped to `[0, window_width - width]`.
    /// Returns the distance actually moved.
    pub fn move_by(&mut self, dx: f32, window_width: f32) -> f32 {
        let max_x = (window_width - self.body.size.x).max(0.0);
        let old_x = self.body.pos.x;
        self.body.pos.x = (old_x + dx).clamp(0.0, max_x);
        self.body.pos.x - old_x
    }
}

/// Ball lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Waiting in reserve, not drawn
    Idle,
    /// Sitting on the paddle, following it
    Held,
    /// Moving under its own velocity
    Launched,
    /// Fell past the bottom edge; terminal until the round resets
    Destroyed,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub body: Entity,
    /// Collision radius, half the ball's width
    pub radius: f32,
    state: BallState,
}

impl Ball {
    /// A fresh Idle ball parked in its paddle slot
    pub fn new(paddle: &Paddle, window: Vec2) -> Self {
        let size = Vec2::new(window.x / BALL_WIDTH_DIVISOR, window.y / BALL_HEIGHT_DIVISOR);
        let mut body = Entity::new(Vec2::ZERO, size, PLAYER_COLOR);
        body.vel = BALL_START_VELOCITY;
        let mut ball = Self {
            body,
            radius: size.x / 2.0,
            state: BallState::Idle,
        };
        ball.body.pos = ball.paddle_slot(paddle);
        ball
    }

    pub fn state(&self) -> BallState {
        self.state
    }

    pub fn is_held(&self) -> bool {
        self.state == BallState::Held
    }

    /// Held, launched, or lost after being launched
    pub fn is_in_play(&self) -> bool {
        self.state != BallState::Idle
    }

    pub fn is_destroyed(&self) -> bool {
        self.state == BallState::Destroyed
    }

    pub fn is_launched(&self) -> bool {
        self.state == BallState::Launched
    }

    /// Held and launched balls are drawn
    pub fn is_visible(&self) -> bool {
        matches!(self.state, BallState::Held | BallState::Launched)
    }

    /// Center of the collision circle (position offset by radius on both axes)
    #[inline]
    pub fn collision_center(&self) -> Vec2 {
        self.body.pos + self.radius
    }

    /// Position centered on top of the paddle
    pub fn paddle_slot(&self, paddle: &Paddle) -> Vec2 {
        paddle.body.pos
            + Vec2::new(
                paddle.body.size.x / 2.0 - self.body.size.x / 2.0,
                -self.body.size.y,
            )
    }

    /// Idle -> Held. Returns false if the ball was not Idle.
    pub fn hold(&mut self, paddle: &Paddle) -> bool {
        if self.state != BallState::Idle {
            return false;
        }
        self.state = BallState::Held;
        self.body.pos = self.paddle_slot(paddle);
        true
    }

    /// Held -> Launched, keeping the preset velocity
    pub fn launch(&mut self, paddle: &Paddle) -> bool {
        if self.state != BallState::Held {
            return false;
        }
        self.state = BallState::Launched;
        self.body.pos = self.paddle_slot(paddle);
        true
    }

    /// Launched -> Destroyed
    pub fn destroy(&mut self) -> bool {
        if self.state != BallState::Launched {
            return false;
        }
        self.state = BallState::Destroyed;
        self.body.destroyed = true;
        true
    }

    /// Keep a held ball on the paddle
    pub fn follow(&mut self, paddle: &Paddle) {
        if self.state == BallState::Held {
            self.body.pos.x = self.paddle_slot(paddle).x;
        }
    }

    /// Integrate a launched ball and bounce it off the left, right and top
    /// edges. The bottom edge is open.
    pub fn integrate(&mut self, dt: f32, window_width: f32) {
        if self.state != BallState::Launched {
            return;
        }
        let body = &mut self.body;
        body.pos += body.vel * dt;

        if body.pos.x <= 0.0 {
            body.vel.x = -body.vel.x;
            body.pos.x = 0.0;
        } else if body.pos.x + body.size.x >= window_width {
            body.vel.x = -body.vel.x;
            body.pos.x = window_width - body.size.x;
        }
        if body.pos.y <= 0.0 {
            body.vel.y = -body.vel.y;
            body.pos.y = 0.0;
        }
    }
}

/// A brick built from one tile of a level grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub body: Entity,
    /// Tile code the brick was built from (0 = empty cell)
    pub tile: u32,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BallHeld { ball: usize },
    BallLaunched { ball: usize },
    BrickDestroyed { ball: usize, brick: usize, direction: Direction },
    PaddleHit { ball: usize },
    BallLost { ball: usize },
    RoundReset,
}

/// Ball totals per lifecycle state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallCounts {
    pub idle: usize,
    pub held: usize,
    pub launched: usize,
    pub destroyed: usize,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Window dimensions
    pub window: Vec2,
    /// Paddle speed while a move signal is held (units/second)
    pub paddle_speed: f32,
    pub paddle: Paddle,
    /// Fixed order; the first Idle ball is the next one held
    pub balls: Vec<Ball>,
    pub levels: Vec<Level>,
    pub current_level: usize,
    /// Frames since the last ball lifecycle transition
    pub launch_timer: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Full resets performed so far
    pub rounds_reset: u32,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build the game from settings, loading the level file.
    ///
    /// A level that fails to load leaves the round with no bricks.
    pub fn new(settings: &Settings) -> Self {
        let level = Level::new(
            LevelSource::File(settings.level_path.clone()),
            settings.level_size(),
        );
        Self::with_level(settings, level)
    }

    /// Build the game around an explicit level, loading it
    pub fn with_level(settings: &Settings, mut level: Level) -> Self {
        let window = settings.window_size();
        level.load();
        let paddle = Paddle::new(window);
        let mut state = Self {
            window,
            paddle_speed: settings.paddle_speed,
            paddle,
            balls: Vec::with_capacity(BALL_COUNT),
            levels: vec![level],
            current_level: 0,
            launch_timer: 0,
            time_ticks: 0,
            rounds_reset: 0,
            events: Vec::new(),
        };
        state.spawn_balls();
        state
    }

    pub fn level(&self) -> &Level {
        &self.levels[self.current_level]
    }

    pub fn level_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current_level]
    }

    /// Discard all balls and create a fresh Idle set
    pub fn spawn_balls(&mut self) {
        self.balls.clear();
        for _ in 0..BALL_COUNT {
            self.balls.push(Ball::new(&self.paddle, self.window));
        }
    }

    /// Reload the level, then reinitialize the paddle and the balls
    pub fn reset_round(&mut self) {
        self.level_mut().load();
        self.paddle = Paddle::new(self.window);
        self.spawn_balls();
        self.rounds_reset += 1;
        self.events.push(GameEvent::RoundReset);
        log::info!(
            "Round reset #{} ({} bricks reloaded)",
            self.rounds_reset,
            self.level().remaining()
        );
    }

    pub fn ball_counts(&self) -> BallCounts {
        let mut counts = BallCounts::default();
        for ball in &self.balls {
            match ball.state() {
                BallState::Idle => counts.idle += 1,
                BallState::Held => counts.held += 1,
                BallState::Launched => counts.launched += 1,
                BallState::Destroyed => counts.destroyed += 1,
            }
        }
        counts
    }
}
