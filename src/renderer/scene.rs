//! Draw-command generation
//!
//! The scene is a pure function of the actor and surface bounds, so it can be
//! built and checked without a browser.

use crate::consts::*;
use crate::sim::{Actor, Bounds};

/// A single Canvas 2D drawing operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    /// Clear a rectangle to transparent
    Clear { x: f32, y: f32, w: f32, h: f32 },
    FillRect { x: f32, y: f32, w: f32, h: f32, color: &'static str },
    StrokeRect { x: f32, y: f32, w: f32, h: f32, color: &'static str },
    FillCircle { x: f32, y: f32, r: f32, color: &'static str },
}

/// Build the commands for one frame, in paint order
pub fn scene(actor: &Actor, bounds: &Bounds) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(6);

    cmds.push(DrawCmd::Clear {
        x: 0.0,
        y: 0.0,
        w: bounds.width,
        h: bounds.height,
    });

    // Ground band
    let ground = bounds.ground_line();
    cmds.push(DrawCmd::FillRect {
        x: 0.0,
        y: ground,
        w: bounds.width,
        h: bounds.ground_height,
        color: GROUND_FILL,
    });
    cmds.push(DrawCmd::StrokeRect {
        x: 0.0,
        y: ground,
        w: bounds.width,
        h: bounds.ground_height,
        color: GROUND_STROKE,
    });

    // Body
    cmds.push(DrawCmd::FillRect {
        x: actor.pos.x,
        y: actor.pos.y,
        w: actor.width(),
        h: actor.height(),
        color: BODY_FILL,
    });

    // Wheels hang just below the body
    let wheel_y = actor.bottom() + WHEEL_RADIUS - WHEEL_TUCK;
    for wheel_x in [
        actor.pos.x + WHEEL_INSET,
        actor.pos.x + actor.width() - WHEEL_INSET,
    ] {
        cmds.push(DrawCmd::FillCircle {
            x: wheel_x,
            y: wheel_y,
            r: WHEEL_RADIUS,
            color: WHEEL_FILL,
        });
    }

    cmds
}
