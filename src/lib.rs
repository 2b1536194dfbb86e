#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! A full-window light show: three colors, a size, a speed and a pattern
//! drive an animation on a `<canvas>`, with controls that rearrange
//! themselves for narrow viewports.
//!
//! Everything outside the `wasm` module is plain Rust and runs on the host.

pub mod app;
pub mod clock;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod layout;
pub mod overlay;
pub mod panel;
pub mod param;
pub mod pattern;
pub mod scene;

pub use app::App;
pub use color::Rgba;
pub use config::Config;
pub use error::{Error, Result};
pub use layout::Viewport;
pub use panel::{ControlPanel, WidgetHost};
pub use pattern::PatternMode;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::Config;
    use crate::error::Error;

    pub mod canvas;
    pub mod dom;
    mod render;

    const CANVAS_ID: &str = "c";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let document = window.document().ok_or(Error::NoDocument)?;
        // Pages without the canvas (test runners) load the module inertly.
        let Some(canvas) = document.get_element_by_id(CANVAS_ID) else {
            log::warn!("{}", Error::MissingElement(CANVAS_ID.to_string()));
            return Ok(());
        };
        let canvas = canvas.dyn_into::<web_sys::HtmlCanvasElement>()?;

        let config = load_config(&canvas);
        render::start(window, canvas, config)?;
        Ok(())
    }

    fn load_config(canvas: &web_sys::HtmlCanvasElement) -> Config {
        let Some(json) = canvas.get_attribute("data-config") else {
            return Config::default();
        };
        Config::from_json(&json).unwrap_or_else(|err| {
            log::warn!("ignoring data-config: {err}");
            Config::default()
        })
    }
}
