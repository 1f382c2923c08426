//! DOM input wiring - mouse / touch / wheel / resize listeners
//!
//! Converts browser events into `InputEvent`s in canvas-local pixels. Touch
//! input only ever looks at the first touch point.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Element, Event, EventTarget, HtmlCanvasElement, MouseEvent, Touch,
    TouchEvent, TouchList, WheelEvent,
};

use crate::view::{GridView, InputEvent};

pub(crate) type SharedView = Rc<RefCell<GridView<CanvasRenderingContext2d>>>;

type Handler = Closure<dyn FnMut(Event)>;

/// Registered listeners; removed from their targets when dropped.
pub(crate) struct Listeners {
    handles: Vec<(EventTarget, &'static str, Handler)>,
}

impl Listeners {
    fn new() -> Self {
        Self { handles: Vec::new() }
    }

    fn add(&mut self, target: &EventTarget, name: &'static str, handler: Handler) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(name, handler.as_ref().unchecked_ref())?;
        self.handles.push((target.clone(), name, handler));
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (target, name, handler) in self.handles.drain(..) {
            let _ = target.remove_event_listener_with_callback(name, handler.as_ref().unchecked_ref());
        }
    }
}

/// Canvas-local position of a viewport (client) coordinate.
pub(crate) fn event_location(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

fn first_touch(list: TouchList) -> Option<Touch> {
    list.get(0)
}

fn mouse_input(canvas: &HtmlCanvasElement, event: &Event, kind: &str) -> Option<InputEvent> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    let (x, y) = event_location(canvas, mouse.client_x(), mouse.client_y());
    pointer_input(kind, x, y)
}

fn touch_input(canvas: &HtmlCanvasElement, event: &Event, kind: &str) -> Option<InputEvent> {
    let touch_event = event.dyn_ref::<TouchEvent>()?;
    let list = if ends_touch(kind) {
        touch_event.changed_touches()
    } else {
        touch_event.touches()
    };
    let touch = first_touch(list)?;
    let (x, y) = event_location(canvas, touch.client_x(), touch.client_y());
    pointer_input(kind, x, y)
}

// Lifted or cancelled fingers are no longer in `touches`, only in `changedTouches`.
fn ends_touch(kind: &str) -> bool {
    matches!(kind, "up" | "leave")
}

fn pointer_input(kind: &str, x: f64, y: f64) -> Option<InputEvent> {
    match kind {
        "down" => Some(InputEvent::Down { x, y }),
        "move" => Some(InputEvent::Move { x, y }),
        "up" => Some(InputEvent::Up { x, y }),
        "leave" => Some(InputEvent::Leave { x, y }),
        _ => None,
    }
}

fn dispatch(view: &SharedView, event: InputEvent) {
    // Handlers never nest, so the view is always free here.
    if let Ok(mut view) = view.try_borrow_mut() {
        view.handle_input(event);
    }
}

/// Match the canvas backing store to the container, then refit the view.
pub(crate) fn fit_canvas(view: &SharedView, canvas: &HtmlCanvasElement, container: &Element) {
    let width = container.client_width().max(0) as u32;
    let height = container.client_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    if let Ok(mut view) = view.try_borrow_mut() {
        view.resize(width as f64, height as f64);
    }
}

const TOUCH_EVENTS: [(&str, &str); 4] = [
    ("touchstart", "down"),
    ("touchmove", "move"),
    ("touchend", "up"),
    ("touchcancel", "leave"),
];

pub(crate) fn bind(
    view: &SharedView,
    canvas: &HtmlCanvasElement,
    container: &Element,
) -> Result<Listeners, JsValue> {
    let mut listeners = Listeners::new();
    let target: &EventTarget = canvas.as_ref();

    let mouse_events: [(&'static str, &'static str); 4] = [
        ("mousedown", "down"),
        ("mousemove", "move"),
        ("mouseup", "up"),
        ("mouseout", "leave"),
    ];
    for (name, kind) in mouse_events {
        let view = view.clone();
        let canvas = canvas.clone();
        let handler = Closure::wrap(Box::new(move |e: Event| {
            if let Some(input) = mouse_input(&canvas, &e, kind) {
                dispatch(&view, input);
            }
        }) as Box<dyn FnMut(Event)>);
        listeners.add(target, name, handler)?;
    }

    for (name, kind) in TOUCH_EVENTS {
        let view = view.clone();
        let canvas = canvas.clone();
        let handler = Closure::wrap(Box::new(move |e: Event| {
            if let Some(input) = touch_input(&canvas, &e, kind) {
                dispatch(&view, input);
            }
        }) as Box<dyn FnMut(Event)>);
        listeners.add(target, name, handler)?;
    }

    {
        let view = view.clone();
        let handler = Closure::wrap(Box::new(move |e: Event| {
            if let Some(wheel) = e.dyn_ref::<WheelEvent>() {
                e.prevent_default();
                dispatch(
                    &view,
                    InputEvent::Wheel {
                        delta_x: wheel.delta_x(),
                        delta_y: wheel.delta_y(),
                    },
                );
            }
        }) as Box<dyn FnMut(Event)>);
        listeners.add(target, "wheel", handler)?;
    }

    // Dragging across the canvas should not select page text.
    let handler = Closure::wrap(Box::new(move |e: Event| {
        e.prevent_default();
    }) as Box<dyn FnMut(Event)>);
    listeners.add(target, "selectstart", handler)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    for name in ["resize", "orientationchange"] {
        let view = view.clone();
        let canvas = canvas.clone();
        let container = container.clone();
        let handler = Closure::wrap(Box::new(move |_e: Event| {
            fit_canvas(&view, &canvas, &container);
        }) as Box<dyn FnMut(Event)>);
        listeners.add(window.as_ref(), name, handler)?;
    }

    info!("bound {} listeners", listeners.handles.len());
    Ok(listeners)
}
