//! Canvas 2D backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCmd, scene};
use crate::sim::GameState;

/// Paints scenes onto a canvas element
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Draw the current frame
    pub fn render(&self, state: &GameState) -> Result<(), JsValue> {
        for cmd in scene(&state.actor, &state.bounds) {
            self.draw(cmd)?;
        }
        Ok(())
    }

    fn draw(&self, cmd: DrawCmd) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Clear { x, y, w, h } => {
                ctx.clear_rect(x as f64, y as f64, w as f64, h as f64);
            }
            DrawCmd::FillRect { x, y, w, h, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
            }
            DrawCmd::StrokeRect { x, y, w, h, color } => {
                ctx.set_stroke_style_str(color);
                ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);
            }
            DrawCmd::FillCircle { x, y, r, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(x as f64, y as f64, r as f64, 0.0, TAU)?;
                ctx.fill();
            }
        }
        Ok(())
    }
}
