use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlCanvasElement, Window};

use super::canvas::CanvasSurface;
use super::dom::DomHost;
use crate::app::App;
use crate::config::Config;
use crate::draw::Surface;
use crate::error::{Error, Result};

/// Build the controls, then drive the frame loop and resize handling.
pub fn start(window: Window, canvas: HtmlCanvasElement, config: Config) -> Result<()> {
    let document = window.document().ok_or(Error::NoDocument)?;
    let (width, height) = window_size(&window)?;

    let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas)?));
    surface.borrow().resize(width, height);
    let app = Rc::new(RefCell::new(App::new(
        DomHost::new(document)?,
        width,
        height,
        config,
    )?));

    // Resize canvas to fit window and rearrange the controls
    let resize_closure = {
        let window = window.clone();
        let app = app.clone();
        let surface = surface.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = match window_size(&window) {
                Ok(size) => size,
                Err(err) => {
                    log::error!("resize: {err}");
                    return;
                }
            };
            surface.borrow().resize(w, h);
            if let Err(err) = app.borrow_mut().resize(w, h) {
                log::error!("relayout failed: {err}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    let frame_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let commands = app.borrow_mut().frame();
        if let Err(err) = surface.borrow_mut().draw_all(&commands) {
            log::error!("draw failed: {err}");
        }

        // schedule next
        if let Some(next) = f.borrow().as_ref() {
            if let Err(err) = request_frame(&frame_window, next) {
                log::error!("requestAnimationFrame failed: {err}");
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        request_frame(&window, first)?;
    }
    Ok(())
}

fn request_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32> {
    Ok(window.request_animation_frame(f.as_ref().unchecked_ref())?)
}

fn window_size(window: &Window) -> Result<(f64, f64)> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| Error::Js("innerWidth is not a number".to_string()))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| Error::Js("innerHeight is not a number".to_string()))?;
    Ok((width, height))
}
