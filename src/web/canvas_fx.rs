use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, window};

use crate::config::{NetworkConfig, OrbitConfig, SkillSpec};
use crate::rng::FxRng;
use crate::scene::{AnimationHost, CanvasSurface, Filter, OrbitCloud, ParticleField, Scene};

use super::{run_frame_loop, warn};

const NETWORK_CANVAS: &str = "networkCanvas";
const SKILLS_CANVAS: &str = "skillsCanvas";
const SKILL_TOOLTIP: &str = "skillTooltip";
const FONT_VAR: &str = "--font-primary";

type Shared<S> = Rc<RefCell<AnimationHost<S, CanvasSurface>>>;

/// Look up a canvas and its 2D context. `Ok(None)` when the page has no such
/// canvas.
fn canvas_2d(
    doc: &Document,
    id: &str,
) -> Result<Option<(HtmlCanvasElement, CanvasRenderingContext2d)>, JsValue> {
    let Some(el) = doc.get_element_by_id(id) else {
        return Ok(None);
    };
    let canvas: HtmlCanvasElement = el.dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    Ok(Some((canvas, ctx)))
}

/// Match the backing store to the laid-out size; returns that size.
fn fit_to_layout(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let w = canvas.offset_width().max(0) as u32;
    let h = canvas.offset_height().max(0) as u32;
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f64, h as f64)
}

fn pointer_in(canvas: &Element, evt: &web_sys::MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (
        evt.client_x() as f64 - rect.left(),
        evt.client_y() as f64 - rect.top(),
    )
}

/// Value of a CSS custom property on the root element, empty when unset.
fn root_css_var(doc: &Document, name: &str) -> Result<String, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let Some(root) = doc.document_element() else {
        return Ok(String::new());
    };
    match win.get_computed_style(&root)? {
        Some(style) => style.get_property_value(name),
        None => Ok(String::new()),
    }
}

/// Refit the canvas and resize the scene whenever the window resizes.
fn on_window_resize<S: Scene + 'static>(
    canvas: HtmlCanvasElement,
    host: Shared<S>,
) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
        let (w, h) = fit_to_layout(&canvas);
        host.borrow_mut().scene_mut().resize(w, h);
    }) as Box<dyn FnMut(_)>);
    win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(super) fn start_network(doc: &Document, config: NetworkConfig) -> Result<(), JsValue> {
    let Some((canvas, ctx)) = canvas_2d(doc, NETWORK_CANVAS)? else {
        warn("no #networkCanvas; network background off");
        return Ok(());
    };
    let (w, h) = fit_to_layout(&canvas);
    let field = ParticleField::new(config, w, h, FxRng::from_entropy());
    let host: Shared<ParticleField> =
        Rc::new(RefCell::new(AnimationHost::new(field, CanvasSurface::new(ctx))));

    on_window_resize(canvas.clone(), host.clone())?;

    {
        let host = host.clone();
        let target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let pos = pointer_in(&target, &evt);
            host.borrow_mut().scene_mut().set_pointer(Some(pos));
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    run_frame_loop(host);
    Ok(())
}

pub(super) fn start_skills(
    doc: &Document,
    config: OrbitConfig,
    skills: Vec<SkillSpec>,
) -> Result<(), JsValue> {
    let Some((canvas, ctx)) = canvas_2d(doc, SKILLS_CANVAS)? else {
        warn("no #skillsCanvas; skills cloud off");
        return Ok(());
    };
    let config = config.with_label_font(&root_css_var(doc, FONT_VAR).unwrap_or_default());
    let (w, h) = fit_to_layout(&canvas);
    let cloud = OrbitCloud::new(config, skills, w, h);
    let host: Shared<OrbitCloud> =
        Rc::new(RefCell::new(AnimationHost::new(cloud, CanvasSurface::new(ctx))));
    let tooltip: Option<HtmlElement> = doc
        .get_element_by_id(SKILL_TOOLTIP)
        .and_then(|el| el.dyn_into().ok());

    on_window_resize(canvas.clone(), host.clone())?;

    // Hover + tooltip
    {
        let host = host.clone();
        let target = canvas.clone();
        let tooltip = tooltip.clone();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            let (x, y) = pointer_in(&target, &evt);
            let tip = {
                let mut host = host.borrow_mut();
                let cloud = host.scene_mut();
                cloud.hover_at(x, y);
                cloud.tooltip()
            };
            if let Some(el) = &tooltip {
                match tip {
                    Some(tip) => {
                        el.set_inner_html(&tip.to_html());
                        let style = el.style();
                        style.set_property("left", &format!("{}px", tip.left)).ok();
                        style.set_property("top", &format!("{}px", tip.top)).ok();
                        el.class_list().add_1("active").ok();
                    }
                    None => {
                        el.class_list().remove_1("active").ok();
                    }
                }
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let host = host.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            host.borrow_mut().scene_mut().pointer_left();
            if let Some(el) = &tooltip {
                el.class_list().remove_1("active").ok();
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Category filter buttons
    let buttons = doc.query_selector_all(".filter-btn")?;
    for i in 0..buttons.length() {
        let Some(btn) = buttons.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let host = host.clone();
        let all = buttons.clone();
        let this = btn.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            for j in 0..all.length() {
                if let Some(other) = all.item(j).and_then(|n| n.dyn_into::<Element>().ok()) {
                    other.class_list().remove_1("active").ok();
                }
            }
            this.class_list().add_1("active").ok();
            let category = this.get_attribute("data-category").unwrap_or_default();
            host.borrow_mut()
                .scene_mut()
                .set_filter(Filter::parse(&category));
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    run_frame_loop(host);
    Ok(())
}
