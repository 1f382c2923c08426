//! Browser tests - run with `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use token_grid::GridCanvas;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn drag_through_facade() {
    let mut grid = GridCanvas::new(canvas(800, 800), 40.0, 15, 15).unwrap();
    grid.add_token(1, 1, "#990099", "circle").unwrap();

    grid.pointer_down(61.0, 61.0);
    grid.pointer_move(141.0, 141.0);
    grid.pointer_up(141.0, 141.0);

    assert_eq!(
        grid.tokens_string().unwrap(),
        r##"[{"x":3,"y":3,"color":"#990099","type":"circle"}]"##
    );
}

#[wasm_bindgen_test]
fn wheel_through_facade() {
    let mut grid = GridCanvas::new(canvas(402, 402), 40.0, 15, 15).unwrap();
    grid.wheel(50.0, 0.0);
    assert_eq!(grid.x_offset(), -5.0);
    assert_eq!(grid.y_offset(), 0.0);
}

#[wasm_bindgen_test]
fn rejects_unknown_shape() {
    let mut grid = GridCanvas::new(canvas(100, 100), 40.0, 2, 2).unwrap();
    assert!(grid.add_token(0, 0, "#000", "hexagon").is_err());
}

#[wasm_bindgen_test]
fn load_state_swaps_grid() {
    let mut grid = GridCanvas::new(canvas(400, 400), 40.0, 15, 15).unwrap();
    grid.load_state(r#"{"tokens":"[]","rows":"4","cols":6}"#).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (4, 6));
}

#[wasm_bindgen_test]
fn rejects_degenerate_settings() {
    assert!(GridCanvas::new(canvas(100, 100), 0.0, 2, 2).is_err());
    assert!(GridCanvas::with_state(canvas(100, 100), r#"{"wheel_divisor":0}"#, r#"{"tokens":"","rows":2,"cols":2}"#).is_err());
}
