//! Bike Jump - a side-view bike on a 2D canvas
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (actor, input latch, physics step)
//! - `renderer`: Draw-command generation and the Canvas 2D backend
//! - `tuning`: Data-driven physics and layout constants

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Default surface size used by the native trace and tests
    pub const DEFAULT_CANVAS_WIDTH: f32 = 800.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 400.0;

    /// Ground band height in pixels
    pub const GROUND_HEIGHT: f32 = 20.0;

    /// Actor defaults
    pub const ACTOR_WIDTH: f32 = 28.0;
    pub const ACTOR_HEIGHT: f32 = 18.0;
    pub const ACTOR_START_X: f32 = 40.0;
    /// Horizontal pixels per tick while a direction key is held
    pub const ACTOR_SPEED: f32 = 3.0;

    /// Downward acceleration, pixels per tick²
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied by a jump (negative is up)
    pub const JUMP_IMPULSE: f32 = -12.0;

    /// Wheel geometry, relative to the actor body
    pub const WHEEL_RADIUS: f32 = 6.0;
    pub const WHEEL_INSET: f32 = 6.0;
    /// How far the wheel centers tuck up into the body's bottom edge
    pub const WHEEL_TUCK: f32 = 2.0;

    /// Palette
    pub const GROUND_FILL: &str = "#0b1220";
    pub const GROUND_STROKE: &str = "#334155";
    pub const BODY_FILL: &str = "#f97316";
    pub const WHEEL_FILL: &str = "#111827";
}

/// Clamp `value` into `[min, max]`.
///
/// Unlike `f32::clamp` this never panics: when `min > max` the result is `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}
