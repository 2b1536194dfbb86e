//! The control panel: three color pickers, size and speed sliders and the
//! pattern selector.
//!
//! Widgets are owned by a [`WidgetHost`]; the panel only keeps their handles.
//! Relayout is an explicit transition: [`apply_layout`] decides from the
//! current mode and the new viewport whether the widget set is kept or
//! replaced, and [`ControlPanel::relayout`] carries that out by releasing
//! every old widget before the replacements are created.

use crate::color::Rgba;
use crate::config::Config;
use crate::layout::{self, LayoutMode, PanelGeometry, Rect, Viewport};
use crate::param::RangeParam;
use crate::pattern::PatternMode;

/// Creates, reads and destroys input widgets.
pub trait WidgetHost {
    /// A cheap handle to a live widget.
    type Widget: Clone;
    type Error;

    fn create_color(&mut self, value: Rgba, rect: Rect) -> Result<Self::Widget, Self::Error>;

    fn create_slider(
        &mut self,
        param: &RangeParam,
        value: f64,
        rect: Rect,
    ) -> Result<Self::Widget, Self::Error>;

    fn create_select(
        &mut self,
        options: &[&str],
        selected: &str,
        rect: Rect,
    ) -> Result<Self::Widget, Self::Error>;

    fn remove(&mut self, widget: &Self::Widget);

    /// Current value in the widget's text form.
    fn read(&self, widget: &Self::Widget) -> String;

    fn write(&mut self, widget: &Self::Widget, value: &str);
}

/// A snapshot of what the user has selected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelValues {
    pub colors: [Rgba; 3],
    pub size: f64,
    pub speed: f64,
    /// `None` when the selector holds a label no pattern answers to.
    pub pattern: Option<PatternMode>,
}

impl PanelValues {
    pub fn defaults(config: &Config) -> Self {
        Self {
            colors: config.colors,
            size: config.size.default,
            speed: config.speed.default,
            pattern: Some(config.pattern),
        }
    }
}

/// Everything needed to build a widget set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSpec {
    pub geometry: PanelGeometry,
    pub values: PanelValues,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Keep,
    Rebuild(PanelSpec),
}

/// Decide how the panel reacts to `viewport`. Current values are carried into
/// the replacement set so a relayout never loses the user's choices.
pub fn apply_layout(current: LayoutMode, values: PanelValues, viewport: &Viewport) -> Transition {
    if layout::needs_rebuild(current, viewport) {
        Transition::Rebuild(PanelSpec {
            geometry: layout::compute(viewport),
            values,
        })
    } else {
        Transition::Keep
    }
}

#[derive(Debug)]
pub struct ControlPanel<W> {
    colors: [W; 3],
    size: W,
    speed: W,
    pattern: W,
    mode: LayoutMode,
    size_param: RangeParam,
    speed_param: RangeParam,
    /// Values the widgets were created with, used when a reading is unusable.
    built: PanelValues,
    /// Set when a rebuild failed; the handles above no longer exist.
    stale: bool,
}

impl<W: Clone> ControlPanel<W> {
    /// Create the full widget set. On failure every widget created so far is
    /// removed again, so the host is left as it was.
    pub fn build<H>(host: &mut H, spec: &PanelSpec, config: &Config) -> Result<Self, H::Error>
    where
        H: WidgetHost<Widget = W>,
    {
        let mut created = Vec::with_capacity(6);
        let panel = Self::create_all(host, spec, config, &mut created);
        if panel.is_err() {
            for widget in &created {
                host.remove(widget);
            }
            log::warn!(
                "building {:?} control panel failed, removed {} partial widgets",
                spec.geometry.mode,
                created.len()
            );
        }
        panel
    }

    fn create_all<H>(
        host: &mut H,
        spec: &PanelSpec,
        config: &Config,
        created: &mut Vec<W>,
    ) -> Result<Self, H::Error>
    where
        H: WidgetHost<Widget = W>,
    {
        let mut track = |widget: W| {
            created.push(widget.clone());
            widget
        };
        let values = spec.values;
        let geometry = &spec.geometry;

        let [c0, c1, c2] = geometry.colors;
        let colors = [
            track(host.create_color(values.colors[0], c0)?),
            track(host.create_color(values.colors[1], c1)?),
            track(host.create_color(values.colors[2], c2)?),
        ];
        let size = track(host.create_slider(&config.size, values.size, geometry.size)?);
        let speed = track(host.create_slider(&config.speed, values.speed, geometry.speed)?);
        let labels = PatternMode::ALL.map(PatternMode::label);
        let selected = values.pattern.unwrap_or(config.pattern).label();
        let pattern = track(host.create_select(&labels, selected, geometry.pattern)?);

        log::debug!("built {:?} control panel", geometry.mode);

        Ok(Self {
            colors,
            size,
            speed,
            pattern,
            mode: geometry.mode,
            size_param: config.size,
            speed_param: config.speed,
            built: values,
            stale: false,
        })
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Whether the last rebuild failed and the next relayout must recreate
    /// the widgets regardless of the viewport.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn colors<H>(&self, host: &H) -> [Rgba; 3]
    where
        H: WidgetHost<Widget = W>,
    {
        std::array::from_fn(|i| {
            host.read(&self.colors[i])
                .parse()
                .unwrap_or(self.built.colors[i])
        })
    }

    pub fn size<H>(&self, host: &H) -> f64
    where
        H: WidgetHost<Widget = W>,
    {
        self.size_param
            .parse(&host.read(&self.size))
            .unwrap_or_else(|| self.size_param.clamp(self.built.size))
    }

    pub fn speed<H>(&self, host: &H) -> f64
    where
        H: WidgetHost<Widget = W>,
    {
        self.speed_param
            .parse(&host.read(&self.speed))
            .unwrap_or_else(|| self.speed_param.clamp(self.built.speed))
    }

    pub fn pattern<H>(&self, host: &H) -> Option<PatternMode>
    where
        H: WidgetHost<Widget = W>,
    {
        PatternMode::from_label(&host.read(&self.pattern))
    }

    pub fn values<H>(&self, host: &H) -> PanelValues
    where
        H: WidgetHost<Widget = W>,
    {
        PanelValues {
            colors: self.colors(host),
            size: self.size(host),
            speed: self.speed(host),
            pattern: self.pattern(host),
        }
    }

    /// Returns `false` when `index` names no color picker.
    pub fn set_color<H>(&self, host: &mut H, index: usize, color: Rgba) -> bool
    where
        H: WidgetHost<Widget = W>,
    {
        match self.colors.get(index) {
            Some(widget) => {
                host.write(widget, &color.to_hex());
                true
            }
            None => false,
        }
    }

    pub fn release<H>(&self, host: &mut H)
    where
        H: WidgetHost<Widget = W>,
    {
        for widget in self
            .colors
            .iter()
            .chain([&self.size, &self.speed, &self.pattern])
        {
            host.remove(widget);
        }
    }

    /// Returns whether the widget set was replaced.
    ///
    /// If the replacement cannot be built the panel is marked stale: no
    /// widgets remain on the host and the next call rebuilds unconditionally.
    pub fn relayout<H>(
        &mut self,
        host: &mut H,
        viewport: &Viewport,
        config: &Config,
    ) -> Result<bool, H::Error>
    where
        H: WidgetHost<Widget = W>,
    {
        let transition = if self.stale {
            Transition::Rebuild(PanelSpec {
                geometry: layout::compute(viewport),
                values: self.built,
            })
        } else {
            apply_layout(self.mode, self.values(host), viewport)
        };

        match transition {
            Transition::Keep => Ok(false),
            Transition::Rebuild(spec) => {
                if !self.stale {
                    self.release(host);
                }
                match Self::build(host, &spec, config) {
                    Ok(panel) => {
                        *self = panel;
                        Ok(true)
                    }
                    Err(err) => {
                        self.stale = true;
                        self.built = spec.values;
                        Err(err)
                    }
                }
            }
        }
    }
}
