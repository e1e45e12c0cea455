// Browser smoke tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use portfolio_fx::config::NetworkConfig;
use portfolio_fx::rng::FxRng;
use portfolio_fx::scene::{AnimationHost, CanvasSurface, ParticleField};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn particle_field_draws_on_a_real_canvas() {
    let doc = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = doc.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(200);
    canvas.set_height(100);
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    let field = ParticleField::new(NetworkConfig::default(), 200.0, 100.0, FxRng::from_entropy());
    let mut host = AnimationHost::new(field, CanvasSurface::new(ctx));
    for _ in 0..3 {
        host.frame();
    }
    assert_eq!(host.frames(), 3);
}

#[wasm_bindgen_test]
fn start_portfolio_tolerates_an_empty_page() {
    assert!(portfolio_fx::start_portfolio().is_ok());
}
