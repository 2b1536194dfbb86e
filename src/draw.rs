//! Drawing primitives produced by the renderers and executed by a backend.

use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Vertical text anchoring, mirrors the canvas `textBaseline` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    #[default]
    Alphabetic,
    Top,
}

impl Baseline {
    pub fn as_css(self) -> &'static str {
        match self {
            Baseline::Alphabetic => "alphabetic",
            Baseline::Top => "top",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Translucent full-surface fill, leaves trails of earlier frames.
    Fade { color: Rgba },
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Rgba,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Rgba,
    },
    Text {
        text: String,
        at: Point,
        size: f64,
        color: Rgba,
        baseline: Baseline,
    },
    /// Restore the default text baseline after a `Text` that changed it.
    ResetBaseline,
}

/// A backend that can execute drawing commands in order.
pub trait Surface {
    type Error;

    fn execute(&mut self, command: &DrawCommand) -> Result<(), Self::Error>;

    fn draw_all(&mut self, commands: &[DrawCommand]) -> Result<(), Self::Error> {
        for command in commands {
            self.execute(command)?;
        }
        Ok(())
    }
}
