//! The three animated patterns.
//!
//! Every renderer is a pure function of its inputs and the frame count, so a
//! frame can be reproduced exactly from `(colors, size, speed, frame, center)`.

use std::f64::consts::TAU;

use serde::Deserialize;

use crate::color::Rgba;
use crate::draw::{DrawCommand, Point};

pub const STROKE_WIDTH: f64 = 4.0;

const PULSE_RATE: f64 = 0.05;
const SWIRL_RATE: f64 = 0.02;

pub const ORB_COUNT: usize = 10;
const ORB_DIAMETER: f64 = 30.0;

pub const WAVE_COUNT: usize = 8;
const WAVE_SPACING: f64 = 40.0;
const WAVE_AMPLITUDE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum PatternMode {
    #[default]
    #[serde(rename = "Pulse Rings")]
    PulseRings,
    #[serde(rename = "Swirl Orbs")]
    SwirlOrbs,
    #[serde(rename = "Outward Waves")]
    OutwardWaves,
}

impl PatternMode {
    /// Selector order.
    pub const ALL: [PatternMode; 3] = [
        PatternMode::PulseRings,
        PatternMode::SwirlOrbs,
        PatternMode::OutwardWaves,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PatternMode::PulseRings => "Pulse Rings",
            PatternMode::SwirlOrbs => "Swirl Orbs",
            PatternMode::OutwardWaves => "Outward Waves",
        }
    }

    /// `None` for labels outside the selector; callers draw no pattern then.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.label() == label)
    }
}

/// Everything a pattern reads for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternInputs {
    pub colors: [Rgba; 3],
    pub size: f64,
    pub speed: f64,
    pub frame: u64,
    pub center: Point,
}

impl PatternInputs {
    fn color(&self, i: usize) -> Rgba {
        self.colors[i % self.colors.len()]
    }
}

pub fn render(mode: PatternMode, inputs: &PatternInputs) -> Vec<DrawCommand> {
    match mode {
        PatternMode::PulseRings => pulse_rings(inputs),
        PatternMode::SwirlOrbs => swirl_orbs(inputs),
        PatternMode::OutwardWaves => outward_waves(inputs),
    }
}

/// Base ring radius, oscillating within `[0, size]`.
pub fn pulse_radius(size: f64, speed: f64, frame: u64) -> f64 {
    let phase = frame as f64 * PULSE_RATE * speed;
    size * (0.5 + 0.5 * phase.sin())
}

/// Rings of radius r, 1.5r and 2r (diameters 2r, 3r, 4r).
fn pulse_rings(inputs: &PatternInputs) -> Vec<DrawCommand> {
    let r = pulse_radius(inputs.size, inputs.speed, inputs.frame);
    [2.0, 3.0, 4.0]
        .into_iter()
        .enumerate()
        .map(|(i, diameter)| DrawCommand::StrokeCircle {
            center: inputs.center,
            radius: r * diameter / 2.0,
            width: STROKE_WIDTH,
            color: inputs.color(i),
        })
        .collect()
}

fn swirl_phase(speed: f64, frame: u64) -> f64 {
    frame as f64 * SWIRL_RATE * speed
}

pub fn orb_positions(center: Point, size: f64, speed: f64, frame: u64) -> [Point; ORB_COUNT] {
    let t = swirl_phase(speed, frame);
    std::array::from_fn(|i| {
        let angle = t + i as f64 * (TAU / ORB_COUNT as f64);
        Point::new(center.x + angle.cos() * size, center.y + angle.sin() * size)
    })
}

fn swirl_orbs(inputs: &PatternInputs) -> Vec<DrawCommand> {
    orb_positions(inputs.center, inputs.size, inputs.speed, inputs.frame)
        .into_iter()
        .enumerate()
        .map(|(i, center)| DrawCommand::FillCircle {
            center,
            radius: ORB_DIAMETER / 2.0,
            color: inputs.color(i),
        })
        .collect()
}

/// Radius of wave `index` at phase `t`.
pub fn wave_radius(size: f64, index: usize, t: f64) -> f64 {
    let i = index as f64;
    size + i * WAVE_SPACING + WAVE_AMPLITUDE * (t + i).sin()
}

fn outward_waves(inputs: &PatternInputs) -> Vec<DrawCommand> {
    let t = swirl_phase(inputs.speed, inputs.frame);
    (0..WAVE_COUNT)
        .map(|i| DrawCommand::StrokeCircle {
            center: inputs.center,
            radius: wave_radius(inputs.size, i, t),
            width: STROKE_WIDTH,
            color: inputs.color(i),
        })
        .collect()
}
