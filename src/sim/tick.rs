//! Fixed-tick simulation step
//!
//! One call advances the actor by exactly one host frame. There is no delta
//! time: all constants are per tick.

use super::state::{Actor, GameState};
use crate::clamp;

/// Start a jump if the actor is on the ground.
///
/// Returns whether the jump happened; an airborne actor is left untouched.
pub fn try_jump(actor: &mut Actor, impulse: f32) -> bool {
    if !actor.grounded {
        return false;
    }
    actor.vel_y = impulse;
    actor.grounded = false;
    true
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    if !state.running {
        return;
    }

    let actor = &mut state.actor;
    let bounds = &state.bounds;

    // Horizontal: both keys held cancel out
    if state.input.left {
        actor.pos.x -= actor.speed;
    }
    if state.input.right {
        actor.pos.x += actor.speed;
    }
    actor.pos.x = clamp(actor.pos.x, 0.0, bounds.max_x(actor.width()));

    // Vertical: integrate before the ground clamp
    actor.vel_y += state.tuning.gravity;
    actor.pos.y += actor.vel_y;

    let ground = bounds.ground_line();
    if actor.bottom() >= ground {
        actor.pos.y = ground - actor.height();
        actor.vel_y = 0.0;
        actor.grounded = true;
    } else {
        actor.grounded = false;
    }

    state.frame += 1;
}
