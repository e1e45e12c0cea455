use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window, window};

use crate::page::{
    ANCHOR_OFFSET, CounterAnimation, Theme, counter_in_view, navbar_background,
    parse_leading_number, scroll_progress, should_reveal,
};

use super::{performance_now, warn};

pub(super) fn start_page(doc: &Document) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    start_scroll_effects(&win, doc)?;
    start_mobile_menu(doc)?;
    start_theme_toggle(doc)?;
    start_smooth_scroll(&win, doc)?;
    start_deploy_buttons(doc)?;
    Ok(())
}

fn html_elements(doc: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn elements(doc: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = doc.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    el.style().set_property(prop, value).ok();
}

/// State touched by the single scroll listener.
struct ScrollState {
    progress_bar: Option<HtmlElement>,
    navbar: Option<HtmlElement>,
    /// Sections still waiting to fade in.
    hidden_sections: Vec<HtmlElement>,
    counters: Vec<HtmlElement>,
    counters_started: bool,
}

fn start_scroll_effects(win: &Window, doc: &Document) -> Result<(), JsValue> {
    let progress_bar: Option<HtmlElement> = doc
        .get_element_by_id("scrollProgress")
        .and_then(|el| el.dyn_into().ok());
    if progress_bar.is_none() {
        warn("no #scrollProgress; progress bar off");
    }
    let navbar: Option<HtmlElement> = doc
        .query_selector(".navbar")?
        .and_then(|el| el.dyn_into().ok());

    let hidden_sections = html_elements(doc, "section:not(#home)")?;
    for section in &hidden_sections {
        set_style(section, "opacity", "0");
        set_style(section, "transform", "translateY(30px)");
        set_style(section, "transition", "opacity 0.8s ease, transform 0.8s ease");
    }

    let state = Rc::new(RefCell::new(ScrollState {
        progress_bar,
        navbar,
        hidden_sections,
        counters: html_elements(doc, ".metric-value")?,
        counters_started: false,
    }));

    // Sections already on screen should not wait for the first scroll.
    on_scroll(&mut state.borrow_mut());
    {
        let state = state.clone();
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            on_scroll(&mut state.borrow_mut());
        }) as Box<dyn FnMut(_)>);
        win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn on_scroll(state: &mut ScrollState) {
    let Some(win) = window() else { return };
    let Some(root) = win.document().and_then(|d| d.document_element()) else {
        return;
    };
    let scroll_y = win.scroll_y().unwrap_or(0.0);
    let viewport_h = root.client_height() as f64;

    if let Some(bar) = &state.progress_bar {
        let pct = scroll_progress(scroll_y, root.scroll_height() as f64, viewport_h);
        set_style(bar, "width", &format!("{pct}%"));
    }
    if let Some(nav) = &state.navbar {
        set_style(nav, "background", navbar_background(scroll_y));
    }

    state.hidden_sections.retain(|section| {
        let rect = section.get_bounding_client_rect();
        if should_reveal(rect.top(), rect.bottom(), viewport_h) {
            set_style(section, "opacity", "1");
            set_style(section, "transform", "translateY(0)");
            false
        } else {
            true
        }
    });

    if !state.counters_started {
        let in_view = state.counters.iter().any(|c| {
            let rect = c.get_bounding_client_rect();
            counter_in_view(rect.top(), rect.bottom(), viewport_h)
        });
        if in_view {
            state.counters_started = true;
            start_counters(state.counters.clone());
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Count every metric up from zero to its `data-target`, one frame at a time,
/// until all of them land.
fn start_counters(elements: Vec<HtmlElement>) {
    let now = performance_now();
    let counters: Vec<(HtmlElement, CounterAnimation)> = elements
        .into_iter()
        .filter_map(|el| {
            let target = parse_leading_number(&el.get_attribute("data-target")?)?;
            Some((el, CounterAnimation::new(target, now)))
        })
        .collect();
    if counters.is_empty() {
        return;
    }

    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let now = performance_now();
        for (el, anim) in &counters {
            el.set_text_content(Some(&anim.display_at(now)));
        }
        if counters.iter().all(|(_, anim)| anim.is_done(now)) {
            return;
        }
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn start_mobile_menu(doc: &Document) -> Result<(), JsValue> {
    let (Some(hamburger), Some(menu)) =
        (doc.query_selector(".hamburger")?, doc.query_selector(".nav-menu")?)
    else {
        return Ok(());
    };

    {
        let (h, m) = (hamburger.clone(), menu.clone());
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            h.class_list().toggle("active").ok();
            m.class_list().toggle("active").ok();
        }) as Box<dyn FnMut(_)>);
        hamburger.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    for link in elements(doc, ".nav-link")? {
        let (h, m) = (hamburger.clone(), menu.clone());
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            h.class_list().remove_1("active").ok();
            m.class_list().remove_1("active").ok();
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn start_theme_toggle(doc: &Document) -> Result<(), JsValue> {
    let (Some(button), Some(body)) = (doc.get_element_by_id("themeToggle"), doc.body()) else {
        return Ok(());
    };
    let icon = button.query_selector("i")?;
    let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        let classes = body.class_list();
        let current = if classes.contains(Theme::Light.body_class()) {
            Theme::Light
        } else {
            Theme::Dark
        };
        let next = current.toggle();
        classes.remove_1(current.body_class()).ok();
        classes.add_1(next.body_class()).ok();
        if let Some(icon) = &icon {
            icon.class_list().remove_1(current.icon()).ok();
            icon.class_list().add_1(next.icon()).ok();
        }
    }) as Box<dyn FnMut(_)>);
    button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn start_smooth_scroll(win: &Window, doc: &Document) -> Result<(), JsValue> {
    for anchor in elements(doc, "a[href^=\"#\"]")? {
        let win = win.clone();
        let doc = doc.clone();
        let href = anchor.get_attribute("href").unwrap_or_default();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            evt.prevent_default();
            // a bare "#" is not a valid selector
            let target = doc
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                let opts = ScrollToOptions::new();
                opts.set_top(target.offset_top() as f64 - ANCHOR_OFFSET);
                opts.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&opts);
            }
        }) as Box<dyn FnMut(_)>);
        anchor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Delay before a deploy bar empties after the pointer leaves.
const DEPLOY_RESET_MS: i32 = 300;

fn start_deploy_buttons(doc: &Document) -> Result<(), JsValue> {
    for button in elements(doc, ".deploy-btn")? {
        let Some(progress) = button
            .query_selector(".deploy-progress")?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };
        {
            let progress = progress.clone();
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                set_style(&progress, "width", "100%");
            }) as Box<dyn FnMut(_)>);
            button.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
                let progress = progress.clone();
                let reset = Closure::once_into_js(move || set_style(&progress, "width", "0"));
                if let Some(w) = window() {
                    let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                        reset.unchecked_ref(),
                        DEPLOY_RESET_MS,
                    );
                }
            }) as Box<dyn FnMut(_)>);
            button.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
    }
    Ok(())
}
