//! Application state shared by the frame and resize callbacks.

use crate::clock::FrameClock;
use crate::config::Config;
use crate::draw::DrawCommand;
use crate::layout::{self, Viewport};
use crate::panel::{ControlPanel, PanelSpec, PanelValues, WidgetHost};
use crate::scene;

pub struct App<H: WidgetHost> {
    host: H,
    panel: ControlPanel<H::Widget>,
    clock: FrameClock,
    viewport: Viewport,
    config: Config,
}

impl<H: WidgetHost> App<H> {
    /// Build the initial widget set for a `width` x `height` viewport.
    pub fn new(mut host: H, width: f64, height: f64, config: Config) -> Result<Self, H::Error> {
        let viewport = Viewport::with_breakpoint(width, height, config.breakpoint);
        let spec = PanelSpec {
            geometry: layout::compute(&viewport),
            values: PanelValues::defaults(&config),
        };
        let panel = ControlPanel::build(&mut host, &spec, &config)?;
        log::info!(
            "light show ready at {}x{} ({:?} layout)",
            width,
            height,
            viewport.mode()
        );

        Ok(Self {
            host,
            panel,
            clock: FrameClock::new(),
            viewport,
            config,
        })
    }

    /// Advance the clock and produce this frame's drawing commands.
    pub fn frame(&mut self) -> Vec<DrawCommand> {
        let frame = self.clock.tick();
        let values = self.panel.values(&self.host);
        scene::compose(&values, frame, &self.viewport, &self.config.hint)
    }

    /// Returns whether the widgets were recreated.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool, H::Error> {
        let viewport = Viewport::with_breakpoint(width, height, self.config.breakpoint);
        let previous = self.panel.mode();
        self.viewport = viewport;
        let rebuilt = self
            .panel
            .relayout(&mut self.host, &viewport, &self.config)?;
        if rebuilt {
            log::info!(
                "relayout {:?} -> {:?} at {}x{}",
                previous,
                viewport.mode(),
                width,
                height
            );
        }
        Ok(rebuilt)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn panel(&self) -> &ControlPanel<H::Widget> {
        &self.panel
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Host and panel together, for writing widget values.
    pub fn parts_mut(&mut self) -> (&mut H, &ControlPanel<H::Widget>) {
        (&mut self.host, &self.panel)
    }
}
