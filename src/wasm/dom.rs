//! Input widgets as absolutely positioned DOM elements.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::layout::Rect;
use crate::panel::WidgetHost;
use crate::param::RangeParam;

#[derive(Clone)]
pub enum DomWidget {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
}

impl DomWidget {
    fn element(&self) -> &HtmlElement {
        match self {
            DomWidget::Input(el) => el,
            DomWidget::Select(el) => el,
        }
    }
}

pub struct DomHost {
    document: Document,
    parent: HtmlElement,
}

impl DomHost {
    /// Widgets are appended to the document body.
    pub fn new(document: Document) -> Result<Self> {
        let parent = document
            .body()
            .ok_or_else(|| Error::MissingElement("body".to_string()))?;
        Ok(Self { document, parent })
    }

    fn create<T: JsCast>(&self, tag: &str) -> Result<T> {
        self.document
            .create_element(tag)?
            .dyn_into::<T>()
            .map_err(|_| Error::Js(format!("<{tag}> is not the expected element type")))
    }

    fn input(&self, kind: &str) -> Result<HtmlInputElement> {
        let input: HtmlInputElement = self.create("input")?;
        input.set_type(kind);
        Ok(input)
    }

    fn mount(&self, el: &HtmlElement, rect: Rect) -> Result<()> {
        let style = el.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &format!("{}px", rect.x))?;
        style.set_property("top", &format!("{}px", rect.y))?;
        style.set_property("width", &format!("{}px", rect.width))?;
        style.set_property("height", &format!("{}px", rect.height))?;
        self.parent.append_child(el)?;
        Ok(())
    }
}

impl WidgetHost for DomHost {
    type Widget = DomWidget;
    type Error = Error;

    fn create_color(&mut self, value: Rgba, rect: Rect) -> Result<DomWidget> {
        let input = self.input("color")?;
        input.set_value(&value.to_hex());
        self.mount(&input, rect)?;
        Ok(DomWidget::Input(input))
    }

    fn create_slider(&mut self, param: &RangeParam, value: f64, rect: Rect) -> Result<DomWidget> {
        let input = self.input("range")?;
        input.set_min(&param.min.to_string());
        input.set_max(&param.max.to_string());
        input.set_step(&param.step.to_string());
        input.set_value(&value.to_string());
        self.mount(&input, rect)?;
        Ok(DomWidget::Input(input))
    }

    fn create_select(&mut self, options: &[&str], selected: &str, rect: Rect) -> Result<DomWidget> {
        let select: HtmlSelectElement = self.create("select")?;
        for label in options {
            let option: HtmlOptionElement = self.create("option")?;
            option.set_value(label);
            option.set_text(label);
            select.append_child(&option)?;
        }
        select.set_value(selected);
        self.mount(&select, rect)?;
        Ok(DomWidget::Select(select))
    }

    fn remove(&mut self, widget: &DomWidget) {
        widget.element().remove();
    }

    fn read(&self, widget: &DomWidget) -> String {
        match widget {
            DomWidget::Input(el) => el.value(),
            DomWidget::Select(el) => el.value(),
        }
    }

    fn write(&mut self, widget: &DomWidget, value: &str) {
        match widget {
            DomWidget::Input(el) => el.set_value(value),
            DomWidget::Select(el) => el.set_value(value),
        }
    }
}
