//! Browser glue: finds the page elements, hooks up listeners and drives the
//! pure components from animation frames and timers.
//!
//! Every component starts independently. A missing element only disables its
//! own effect (with a console warning) so the rest of the page keeps working.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{console, window};

use crate::config::FxConfig;
use crate::scene::{AnimationHost, Scene, Surface};

mod canvas_fx;
mod page;
mod terminal;

pub(crate) fn log(msg: &str) {
    console::log_1(&JsValue::from_str(msg));
}

pub(crate) fn warn(msg: &str) {
    console::warn_1(&JsValue::from_str(msg));
}

pub(crate) fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Wire every effect on the current page.
pub fn start(config: FxConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    report("terminal", terminal::start_terminal(&doc, config.terminal));
    report(
        "network background",
        canvas_fx::start_network(&doc, config.network),
    );
    report(
        "skills cloud",
        canvas_fx::start_skills(&doc, config.orbit, config.skills),
    );
    report("page chrome", page::start_page(&doc));

    log("portfolio effects loaded");
    Ok(())
}

fn report(component: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn(&format!(
            "{component} disabled: {}",
            err.as_string().unwrap_or_else(|| format!("{err:?}"))
        ));
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `host.frame()` on every animation frame for the life of the page.
pub(crate) fn run_frame_loop<S, D>(host: Rc<RefCell<AnimationHost<S, D>>>)
where
    S: Scene + 'static,
    D: Surface + 'static,
{
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        host.borrow_mut().frame();
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&g);
}

fn request_frame(cb: &FrameCallback) {
    if let (Some(w), Some(closure)) = (window(), cb.borrow().as_ref()) {
        let _ = w.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}
