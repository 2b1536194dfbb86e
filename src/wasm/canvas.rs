use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::draw::{Baseline, DrawCommand, Point, Surface};
use crate::error::{Error, Result};

/// 2d-context backend for [`DrawCommand`]s.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(Error::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::NoContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Match the backing store to the window; this also clears the canvas.
    pub fn resize(&self, width: f64, height: f64) {
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
    }

    fn circle_path(&self, center: Point, radius: f64) -> Result<()> {
        self.ctx.begin_path();
        // arc() throws on negative radii
        self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU)?;
        Ok(())
    }
}

impl Surface for CanvasSurface {
    type Error = Error;

    fn execute(&mut self, command: &DrawCommand) -> Result<()> {
        match command {
            DrawCommand::Fade { color } => {
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.fill_rect(
                    0.0,
                    0.0,
                    self.canvas.width() as f64,
                    self.canvas.height() as f64,
                );
            }
            DrawCommand::StrokeCircle {
                center,
                radius,
                width,
                color,
            } => {
                self.circle_path(*center, *radius)?;
                self.ctx.set_line_width(*width);
                self.ctx.set_stroke_style_str(&color.to_css());
                self.ctx.stroke();
            }
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => {
                self.circle_path(*center, *radius)?;
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.fill();
            }
            DrawCommand::Text {
                text,
                at,
                size,
                color,
                baseline,
            } => {
                self.ctx.set_font(&format!("{size}px sans-serif"));
                self.ctx.set_text_align("left");
                self.ctx.set_text_baseline(baseline.as_css());
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.fill_text(text, at.x, at.y)?;
            }
            DrawCommand::ResetBaseline => {
                self.ctx.set_text_baseline(Baseline::default().as_css());
            }
        }
        Ok(())
    }
}
