//! Game state and core simulation types
//!
//! Everything the frame callback and the input callbacks share lives in
//! [`GameState`], owned by the driver and passed explicitly to each step.

use glam::Vec2;
use serde::Serialize;

use super::input::InputLatch;
use crate::clamp;
use crate::tuning::Tuning;

/// The player's bike
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Actor {
    /// Top-left corner in surface pixels (y grows downward)
    pub pos: Vec2,
    /// Width and height, fixed after creation
    pub size: Vec2,
    /// Vertical velocity in pixels per tick (negative is up)
    pub vel_y: f32,
    /// Horizontal pixels per tick per held direction key
    pub speed: f32,
    /// Lower edge rests on the ground line
    pub grounded: bool,
}

impl Actor {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.start_x, 0.0),
            size: Vec2::new(tuning.actor_width, tuning.actor_height),
            vel_y: 0.0,
            speed: tuning.speed,
            grounded: false,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// y coordinate of the lower edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Drawing surface dimensions and the ground band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub ground_height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, ground_height: f32) -> Self {
        Self {
            width,
            height,
            ground_height,
        }
    }

    /// Top edge of the ground band
    #[inline]
    pub fn ground_line(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Largest x an actor of `width` may occupy (never below zero)
    #[inline]
    pub fn max_x(&self, width: f32) -> f32 {
        (self.width - width).max(0.0)
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub actor: Actor,
    pub input: InputLatch,
    /// Gates the update step; rendering continues regardless
    pub running: bool,
    pub bounds: Bounds,
    pub tuning: Tuning,
    /// Update steps executed since the last reset
    pub frame: u64,
}

impl GameState {
    /// Create a state sized to a `width` x `height` surface, already reset
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Self {
        let mut state = Self {
            actor: Actor::new(&tuning),
            input: InputLatch::default(),
            running: true,
            bounds: Bounds::new(width, height, tuning.ground_height),
            tuning,
            frame: 0,
        };
        state.reset();
        state
    }

    /// Adopt new surface dimensions (the ground band keeps its height)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height, self.tuning.ground_height);
    }

    /// Put the actor back on the ground at the start position and resume
    pub fn reset(&mut self) {
        let ground = self.bounds.ground_line();
        let x = clamp(self.tuning.start_x, 0.0, self.bounds.max_x(self.actor.width()));
        self.actor.pos = Vec2::new(x, ground - self.actor.height());
        self.actor.vel_y = 0.0;
        self.actor.grounded = true;
        self.running = true;
        self.frame = 0;
    }

    /// Flip the running flag, returning the new value
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Stop updating and drop held directions (focus lost)
    pub fn suspend(&mut self) {
        self.running = false;
        self.input.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn state() -> GameState {
        GameState::new(800.0, 400.0, Tuning::default())
    }

    #[test]
    fn test_reset_places_actor_on_ground() {
        let s = state();
        assert_eq!(s.actor.pos.x, ACTOR_START_X);
        assert_eq!(s.actor.pos.y, 400.0 - 20.0 - ACTOR_HEIGHT);
        assert_eq!(s.actor.bottom(), s.bounds.ground_line());
        assert_eq!(s.actor.vel_y, 0.0);
        assert!(s.actor.grounded);
        assert!(s.running);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut s = state();
        s.actor.pos = Vec2::new(500.0, 12.0);
        s.actor.vel_y = -7.0;
        s.actor.grounded = false;
        s.running = false;
        s.frame = 99;

        s.reset();
        let first = (s.actor, s.running, s.frame);
        s.reset();
        let second = (s.actor, s.running, s.frame);
        assert_eq!(first, second);
    }

    #[test]
    fn test_toggle_running() {
        let mut s = state();
        assert!(!s.toggle_running());
        assert!(s.toggle_running());
    }

    #[test]
    fn test_suspend_releases_directions() {
        let mut s = state();
        s.input.left = true;
        s.input.right = true;
        s.suspend();
        assert!(!s.running);
        assert!(!s.input.left && !s.input.right);
    }

    #[test]
    fn test_reset_keeps_start_inside_surface() {
        let tuning = Tuning {
            start_x: 900.0,
            ..Tuning::default()
        };
        let s = GameState::new(800.0, 400.0, tuning);
        assert_eq!(s.actor.pos.x, 800.0 - ACTOR_WIDTH);
    }

    #[test]
    fn test_reset_after_resize_uses_new_surface() {
        let mut s = state();
        s.resize(640.0, 300.0);
        s.reset();
        assert_eq!(s.bounds.ground_line(), 280.0);
        assert_eq!(s.actor.pos.y, 280.0 - ACTOR_HEIGHT);
        assert!(s.actor.grounded);

        s.resize(30.0, 300.0);
        s.reset();
        assert_eq!(s.actor.pos.x, 2.0);
    }

    #[test]
    fn test_max_x_collapses_on_narrow_surface() {
        let bounds = Bounds::new(10.0, 400.0, 20.0);
        assert_eq!(bounds.max_x(28.0), 0.0);
        assert_eq!(Bounds::new(800.0, 400.0, 20.0).max_x(28.0), 772.0);
    }
}
