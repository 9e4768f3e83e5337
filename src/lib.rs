//! Breakout Remix - a multi-ball Breakout core
//!
//! Core modules:
//! - `sim`: Simulation (entities, level loading, collisions, ball lifecycle)
//! - `renderer`: Rendering collaborator trait and a CPU vertex batch
//! - `settings`: Startup configuration
//! - `error`: Typed errors for level and settings loading

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{LevelError, SettingsError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::{Vec2, Vec3};

    /// Fixed timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Balls per round
    pub const BALL_COUNT: usize = 5;

    /// Frames that must pass after a lifecycle transition before the launch
    /// trigger fires again. Frame-count based, so it scales with frame rate.
    pub const LAUNCH_DEBOUNCE_TICKS: u32 = 240;
    /// The debounce counter folds back to `LAUNCH_DEBOUNCE_TICKS` past this
    pub const LAUNCH_TIMER_CAP: u32 = 1000;

    /// Preset velocity of a fresh ball (units/second)
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(100.0, -350.0);
    /// Ball size is window / divisor on each axis
    pub const BALL_WIDTH_DIVISOR: f32 = 48.0;
    pub const BALL_HEIGHT_DIVISOR: f32 = 36.0;

    /// Paddle size is window / divisor on each axis
    pub const PADDLE_WIDTH_DIVISOR: f32 = 8.0;
    pub const PADDLE_HEIGHT_DIVISOR: f32 = 36.0;

    /// Paddle steering: new vx = base * offset * strength before renormalizing
    pub const PADDLE_STEER_BASE: f32 = 100.0;
    pub const PADDLE_STEER_STRENGTH: f32 = 2.0;

    /// Shared paddle/ball color
    pub const PLAYER_COLOR: Vec3 = Vec3::new(0.7, 0.7, 0.4);
}

/// Center of an axis-aligned rectangle given its top-left corner and size
#[inline]
pub fn rect_center(pos: Vec2, size: Vec2) -> Vec2 {
    pos + size / 2.0
}
