use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::domain::{Token, TokenGrid, TokenShape};
use crate::persistence::{encode_tokens, GridState};
use crate::view::{GridView, ViewSettings};

use super::dom::{self, Listeners, SharedView};

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2D context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| JsValue::from_str("2D context has unexpected type"))
}

fn element_by_id<T: JsCast>(id: &str) -> Result<T, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has unexpected type")))
}

#[wasm_bindgen]
pub struct GridCanvas {
    view: SharedView,
    canvas: HtmlCanvasElement,
    container: Option<Element>,
    // Kept alive for as long as the facade is; dropping unregisters them.
    _listeners: Option<Listeners>,
}

impl GridCanvas {
    fn build(canvas: HtmlCanvasElement, grid: TokenGrid, settings: ViewSettings) -> Result<GridCanvas, JsValue> {
        settings.validate().map_err(js_error)?;
        let ctx = context_2d(&canvas)?;
        let (width, height) = (canvas.width() as f64, canvas.height() as f64);
        let view = GridView::new(ctx, grid, settings, width, height);
        Ok(GridCanvas {
            view: Rc::new(RefCell::new(view)),
            canvas,
            container: None,
            _listeners: None,
        })
    }
}

#[wasm_bindgen]
impl GridCanvas {
    /// Empty `rows x cols` grid drawn on `canvas` at its current size.
    /// Input must be forwarded by the caller through the pointer methods.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, cell_size: f64, rows: u32, cols: u32) -> Result<GridCanvas, JsValue> {
        let grid = TokenGrid::new(rows, cols).map_err(js_error)?;
        Self::build(canvas, grid, ViewSettings::with_cell_size(cell_size))
    }

    /// Like `new`, but geometry/colors come from a settings JSON object and the
    /// grid from a stored `{tokens, rows, cols}` state.
    #[wasm_bindgen(js_name = withState)]
    pub fn with_state(canvas: HtmlCanvasElement, settings_json: &str, state_json: &str) -> Result<GridCanvas, JsValue> {
        let settings = ViewSettings::from_json(settings_json).map_err(js_error)?;
        let state = GridState::from_json(state_json).map_err(js_error)?;
        let grid = TokenGrid::from_state(&state).map_err(js_error)?;
        Self::build(canvas, grid, settings)
    }

    /// Look up `#canvas_id` inside `#container_id`, size the canvas to the
    /// container, show the starter layout and bind mouse/touch/wheel/resize
    /// listeners.
    pub fn attach(canvas_id: &str, container_id: &str, cell_size: f64) -> Result<GridCanvas, JsValue> {
        let canvas: HtmlCanvasElement = element_by_id(canvas_id)?;
        let container: Element = element_by_id(container_id)?;

        let mut facade = Self::build(canvas, TokenGrid::demo(), ViewSettings::with_cell_size(cell_size))?;
        dom::fit_canvas(&facade.view, &facade.canvas, &container);
        facade._listeners = Some(dom::bind(&facade.view, &facade.canvas, &container)?);
        facade.container = Some(container);
        Ok(facade)
    }

    #[wasm_bindgen(getter)]
    pub fn rows(&self) -> u32 { self.view.borrow().grid().rows() }

    #[wasm_bindgen(getter)]
    pub fn cols(&self) -> u32 { self.view.borrow().grid().cols() }

    #[wasm_bindgen(getter)]
    pub fn x_offset(&self) -> f64 { self.view.borrow().camera().offset().0 }

    #[wasm_bindgen(getter)]
    pub fn y_offset(&self) -> f64 { self.view.borrow().camera().offset().1 }

    /// Place a token; `shape` is "circle" or "square".
    pub fn add_token(&mut self, col: u32, row: u32, color: &str, shape: &str) -> Result<(), JsValue> {
        let shape = match shape {
            "circle" => TokenShape::Circle,
            "square" => TokenShape::Square,
            other => return Err(JsValue::from_str(&format!("unknown token shape `{other}`"))),
        };
        let mut view = self.view.borrow_mut();
        view.add_token(Token::new(col, row, color, shape)).map_err(js_error)?;
        Ok(())
    }

    // === Normalized input (canvas-local pixels) ===
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.view.borrow_mut().pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.view.borrow_mut().pointer_move(x, y);
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        self.view.borrow_mut().pointer_up(x, y);
    }

    pub fn pointer_leave(&mut self, x: f64, y: f64) {
        self.view.borrow_mut().pointer_up(x, y);
    }

    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) {
        self.view.borrow_mut().wheel(delta_x, delta_y);
    }

    /// Resize to the container when attached, else to the given size.
    pub fn resize(&mut self, width: f64, height: f64) {
        match &self.container {
            Some(container) => dom::fit_canvas(&self.view, &self.canvas, container),
            None => {
                self.canvas.set_width(width.max(0.0) as u32);
                self.canvas.set_height(height.max(0.0) as u32);
                self.view.borrow_mut().resize(width, height);
            }
        }
    }

    // === Persistence ===

    /// Current layout as the opaque token-state string.
    pub fn tokens_string(&self) -> Result<String, JsValue> {
        encode_tokens(self.view.borrow().grid()).map_err(js_error)
    }

    /// Replace the grid with a stored `{tokens, rows, cols}` state.
    pub fn load_state(&mut self, state_json: &str) -> Result<(), JsValue> {
        let state = GridState::from_json(state_json).map_err(js_error)?;
        let grid = TokenGrid::from_state(&state).map_err(|e| {
            log::warn!("rejected stored grid state: {e}");
            js_error(e)
        })?;
        self.view.borrow_mut().replace_grid(grid);
        Ok(())
    }
}
