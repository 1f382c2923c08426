//! Normalized input - what the view consumes after the embedding layer has
//! translated mouse / touch / wheel events into surface-local coordinates.

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave { x: f64, y: f64 },
    Wheel { delta_x: f64, delta_y: f64 },
}
