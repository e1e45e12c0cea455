use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::config::TerminalConfig;
use crate::terminal::{TerminalStep, TerminalTyper};

use super::warn;

const OUTPUT_LINE_STYLE: &str = "color: #8B949E;";

type TimerCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub(super) fn start_terminal(doc: &Document, config: TerminalConfig) -> Result<(), JsValue> {
    let (Some(command_el), Some(output_el)) = (
        doc.get_element_by_id("typedCommand"),
        doc.get_element_by_id("terminalOutput"),
    ) else {
        warn("no #typedCommand / #terminalOutput; terminal animation off");
        return Ok(());
    };

    let mut typer = TerminalTyper::new(config);
    let doc = doc.clone();
    let f: TimerCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let step = typer.next_step();
        if let Err(err) = show_step(&doc, &command_el, &output_el, &step) {
            warn(&format!("terminal render failed: {err:?}"));
        }
        schedule(&f, step.delay_ms);
    }) as Box<dyn FnMut()>));
    schedule(&g, 0);
    Ok(())
}

fn schedule(cb: &TimerCallback, delay_ms: u32) {
    if let (Some(w), Some(closure)) = (window(), cb.borrow().as_ref()) {
        let _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        );
    }
}

fn show_step(
    doc: &Document,
    command_el: &Element,
    output_el: &Element,
    step: &TerminalStep,
) -> Result<(), JsValue> {
    command_el.set_text_content(Some(&step.command));

    // Only rebuild the output block when the line count changes.
    if output_el.child_element_count() as usize != step.output.len() {
        output_el.set_inner_html("");
        for line in &step.output {
            let div = doc.create_element("div")?;
            div.set_text_content(Some(line));
            div.set_attribute("style", OUTPUT_LINE_STYLE)?;
            output_el.append_child(&div)?;
        }
    }
    Ok(())
}
