//! Instruction text drawn on top of every frame.

use crate::color::Rgba;
use crate::draw::{Baseline, DrawCommand, Point};
use crate::layout::{Viewport, MARGIN};

pub const DEFAULT_HINT: &str = "🎛 Tap colors + sliders → Your light show reacts instantly!";

const TEXT_SIZE: f64 = 16.0;
const DESKTOP_BOTTOM_OFFSET: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    BottomLeft,
    TopLeft,
}

pub fn anchor(viewport: &Viewport) -> Anchor {
    if viewport.is_mobile {
        Anchor::TopLeft
    } else {
        Anchor::BottomLeft
    }
}

/// Commands for the hint. A changed baseline is always followed by a reset so
/// later text draws start from the default state.
pub fn commands(viewport: &Viewport, hint: &str) -> Vec<DrawCommand> {
    let (at, baseline) = match anchor(viewport) {
        Anchor::BottomLeft => (
            Point::new(MARGIN, viewport.height - DESKTOP_BOTTOM_OFFSET),
            Baseline::Alphabetic,
        ),
        Anchor::TopLeft => (Point::new(MARGIN, MARGIN), Baseline::Top),
    };

    let mut cmds = vec![DrawCommand::Text {
        text: hint.to_string(),
        at,
        size: TEXT_SIZE,
        color: Rgba::WHITE,
        baseline,
    }];
    if baseline != Baseline::default() {
        cmds.push(DrawCommand::ResetBaseline);
    }
    cmds
}
