//! Composes one frame: background fade, the active pattern, then the hint.

use crate::color::Rgba;
use crate::draw::DrawCommand;
use crate::layout::Viewport;
use crate::overlay;
use crate::panel::PanelValues;
use crate::pattern::{self, PatternInputs};

/// Dark translucent wash; low alpha keeps fading trails of earlier frames.
pub const FADE: Rgba = Rgba::rgba(5, 5, 15, 40);

pub fn compose(values: &PanelValues, frame: u64, viewport: &Viewport, hint: &str) -> Vec<DrawCommand> {
    let mut cmds = vec![DrawCommand::Fade { color: FADE }];

    if let Some(mode) = values.pattern {
        let inputs = PatternInputs {
            colors: values.colors,
            size: values.size,
            speed: values.speed,
            frame,
            center: viewport.center(),
        };
        cmds.extend(pattern::render(mode, &inputs));
    }

    cmds.extend(overlay::commands(viewport, hint));
    cmds
}
