//! Responsive placement of the input widgets.
//!
//! Two discrete arrangements exist. Desktop stacks every control down a fixed
//! left margin; mobile puts the sliders side by side under the instruction
//! band, the pattern selector below them and enlarged color swatches below
//! that.

use crate::draw::Point;

/// Widths below this many logical pixels use the mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const MARGIN: f64 = 20.0;

pub const DESKTOP_SWATCH: f64 = 40.0;
pub const MOBILE_SWATCH: f64 = 60.0;

const DESKTOP_SLIDER_WIDTH: f64 = 200.0;
const DESKTOP_SLIDER_HEIGHT: f64 = 20.0;
const DESKTOP_SELECT_HEIGHT: f64 = 24.0;

const MOBILE_SLIDER_HEIGHT: f64 = 40.0;
const MOBILE_SELECT_HEIGHT: f64 = 44.0;
const MOBILE_SLIDER_TOP: f64 = 60.0;
const MOBILE_SELECT_TOP: f64 = 120.0;
const MOBILE_SWATCH_TOP: f64 = 180.0;
const MOBILE_SWATCH_PITCH: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub is_mobile: bool,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_breakpoint(width, height, MOBILE_BREAKPOINT)
    }

    pub fn with_breakpoint(width: f64, height: f64, breakpoint: f64) -> Self {
        Self {
            width,
            height,
            is_mobile: width < breakpoint,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        if self.is_mobile {
            LayoutMode::Mobile
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Absolute placement in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub mode: LayoutMode,
    pub colors: [Rect; 3],
    pub size: Rect,
    pub speed: Rect,
    pub pattern: Rect,
}

pub fn compute(viewport: &Viewport) -> PanelGeometry {
    match viewport.mode() {
        LayoutMode::Desktop => desktop(),
        LayoutMode::Mobile => mobile(viewport.width),
    }
}

fn desktop() -> PanelGeometry {
    PanelGeometry {
        mode: LayoutMode::Desktop,
        colors: std::array::from_fn(|i| {
            Rect::new(
                MARGIN,
                MARGIN + i as f64 * DESKTOP_SWATCH,
                DESKTOP_SWATCH,
                DESKTOP_SWATCH,
            )
        }),
        size: Rect::new(MARGIN, 160.0, DESKTOP_SLIDER_WIDTH, DESKTOP_SLIDER_HEIGHT),
        speed: Rect::new(MARGIN, 200.0, DESKTOP_SLIDER_WIDTH, DESKTOP_SLIDER_HEIGHT),
        pattern: Rect::new(MARGIN, 240.0, DESKTOP_SLIDER_WIDTH, DESKTOP_SELECT_HEIGHT),
    }
}

/// Not floored: on very narrow viewports the sliders simply get thin.
fn mobile_slider_width(width: f64) -> f64 {
    (width - 100.0) / 2.0
}

fn mobile(width: f64) -> PanelGeometry {
    let slider = mobile_slider_width(width);
    PanelGeometry {
        mode: LayoutMode::Mobile,
        colors: std::array::from_fn(|i| {
            Rect::new(
                MARGIN,
                MOBILE_SWATCH_TOP + i as f64 * MOBILE_SWATCH_PITCH,
                MOBILE_SWATCH,
                MOBILE_SWATCH,
            )
        }),
        size: Rect::new(MARGIN, MOBILE_SLIDER_TOP, slider, MOBILE_SLIDER_HEIGHT),
        speed: Rect::new(
            MARGIN + slider + 60.0,
            MOBILE_SLIDER_TOP,
            slider,
            MOBILE_SLIDER_HEIGHT,
        ),
        pattern: Rect::new(
            MARGIN,
            MOBILE_SELECT_TOP,
            width - 2.0 * MARGIN,
            MOBILE_SELECT_HEIGHT,
        ),
    }
}

/// Whether moving from `current` to `next` requires tearing the widgets down.
///
/// Crossing the breakpoint always does. While mobile the geometry depends on
/// the width, so every resize rebuilds.
pub fn needs_rebuild(current: LayoutMode, next: &Viewport) -> bool {
    current != next.mode() || next.is_mobile
}
