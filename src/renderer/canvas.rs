//! Canvas 2D backend (web only)

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::shapes::{Shape, build_scene, css_color};
use super::{ArenaSnapshot, HudStatus, RenderSink};

/// Draws snapshots onto a `<canvas>` and mirrors the HUD into DOM text nodes
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    document: Document,
}

impl CanvasRenderer {
    /// Wrap a canvas, sizing it to the arena
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Result<Self, JsValue> {
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let document = canvas
            .owner_document()
            .ok_or_else(|| JsValue::from_str("canvas is detached"))?;
        Ok(Self { ctx, document })
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn draw_shape(&self, shape: &Shape) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match shape {
            Shape::Rect {
                origin,
                rotation,
                offset,
                size,
                color,
            } => {
                ctx.save();
                ctx.translate(origin.x as f64, origin.y as f64)?;
                ctx.rotate(*rotation as f64)?;
                ctx.set_fill_style_str(&css_color(*color));
                ctx.fill_rect(offset.x as f64, offset.y as f64, size.x as f64, size.y as f64);
                ctx.restore();
            }
            Shape::Circle {
                center,
                radius,
                color,
            } => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.begin_path();
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )?;
                ctx.fill();
            }
            Shape::Text {
                pos,
                size_px,
                text,
                color,
            } => {
                ctx.set_fill_style_str(&css_color(*color));
                ctx.set_font(&format!("{size_px}px Arial"));
                ctx.set_text_align("center");
                ctx.fill_text(text, pos.x as f64, pos.y as f64)?;
            }
        }
        Ok(())
    }
}

impl RenderSink for CanvasRenderer {
    fn publish_status(&mut self, status: &HudStatus) {
        self.set_text("score", &status.score.to_string());
        self.set_text("health", &status.health.to_string());
    }

    fn draw(&mut self, snapshot: &ArenaSnapshot<'_>) {
        for shape in build_scene(snapshot) {
            if let Err(e) = self.draw_shape(&shape) {
                log::warn!("Canvas draw failed: {:?}", e);
                return;
            }
        }
    }
}
