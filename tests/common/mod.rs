#![allow(dead_code)]

use std::collections::BTreeMap;

use lightshow_wasm::layout::Rect;
use lightshow_wasm::param::RangeParam;
use lightshow_wasm::{Rgba, WidgetHost};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Color,
    Slider,
    Select,
}

#[derive(Debug, Clone)]
pub struct Widget {
    pub kind: Kind,
    pub value: String,
    pub rect: Rect,
    pub options: Vec<String>,
}

/// Widget host that keeps every live widget in a map.
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub next_id: usize,
    pub alive: BTreeMap<usize, Widget>,
    pub created: usize,
    pub removed: usize,
    /// When set, every `create_slider` call is refused.
    pub refuse_sliders: bool,
}

impl MemoryHost {
    fn insert(&mut self, kind: Kind, value: String, rect: Rect, options: Vec<String>) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.created += 1;
        self.alive.insert(
            id,
            Widget {
                kind,
                value,
                rect,
                options,
            },
        );
        id
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.alive.values().filter(|w| w.kind == kind).count()
    }

    pub fn of_kind(&self, kind: Kind) -> Vec<&Widget> {
        self.alive.values().filter(|w| w.kind == kind).collect()
    }

    /// Overwrite a widget's value the way user input would.
    pub fn set_nth(&mut self, kind: Kind, n: usize, value: &str) {
        let widget = self
            .alive
            .values_mut()
            .filter(|w| w.kind == kind)
            .nth(n)
            .expect("no such widget");
        widget.value = value.to_string();
    }
}

impl WidgetHost for MemoryHost {
    type Widget = usize;
    type Error = &'static str;

    fn create_color(&mut self, value: Rgba, rect: Rect) -> Result<usize, &'static str> {
        Ok(self.insert(Kind::Color, value.to_hex(), rect, Vec::new()))
    }

    fn create_slider(
        &mut self,
        _param: &RangeParam,
        value: f64,
        rect: Rect,
    ) -> Result<usize, &'static str> {
        if self.refuse_sliders {
            return Err("slider refused");
        }
        Ok(self.insert(Kind::Slider, value.to_string(), rect, Vec::new()))
    }

    fn create_select(
        &mut self,
        options: &[&str],
        selected: &str,
        rect: Rect,
    ) -> Result<usize, &'static str> {
        let options = options.iter().map(|s| s.to_string()).collect();
        Ok(self.insert(Kind::Select, selected.to_string(), rect, options))
    }

    fn remove(&mut self, widget: &usize) {
        if self.alive.remove(widget).is_some() {
            self.removed += 1;
        }
    }

    fn read(&self, widget: &usize) -> String {
        self.alive
            .get(widget)
            .map(|w| w.value.clone())
            .unwrap_or_default()
    }

    fn write(&mut self, widget: &usize, value: &str) {
        if let Some(w) = self.alive.get_mut(widget) {
            w.value = value.to_string();
        }
    }
}
