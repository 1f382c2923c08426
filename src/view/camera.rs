//! Camera - pan offset + fixed cell size, and the pixel <-> cell transforms
//!
//! Offsets are in pixels and never positive: panning right/down moves the grid
//! left/up, so `x_offset` lives in `[-max_x_offset, 0]`.

use super::settings::ViewSettings;

#[derive(Clone, Debug)]
pub struct Camera {
    cell_size: f64,
    fixed_offset: f64,
    token_inset: f64,
    token_size: f64,

    rows: u32,
    cols: u32,

    x_offset: f64,
    y_offset: f64,
    max_x_offset: f64,
    max_y_offset: f64,

    // Visible grid extent inside the surface
    view_width: f64,
    view_height: f64,

    // Whole surface (container) extent
    surface_width: f64,
    surface_height: f64,
}

impl Camera {
    pub fn new(settings: &ViewSettings, rows: u32, cols: u32) -> Self {
        let cell_size = settings.cell_size;
        let token_inset = cell_size / 10.0;
        Self {
            cell_size,
            fixed_offset: settings.fixed_offset,
            token_inset,
            token_size: cell_size - token_inset * 2.0,
            rows,
            cols,
            x_offset: 0.0,
            y_offset: 0.0,
            max_x_offset: 0.0,
            max_y_offset: 0.0,
            view_width: 0.0,
            view_height: 0.0,
            surface_width: 0.0,
            surface_height: 0.0,
        }
    }

    // === Accessors ===
    #[inline]
    pub fn cell_size(&self) -> f64 { self.cell_size }

    #[inline]
    pub fn fixed_offset(&self) -> f64 { self.fixed_offset }

    #[inline]
    pub fn token_size(&self) -> f64 { self.token_size }

    #[inline]
    pub fn offset(&self) -> (f64, f64) { (self.x_offset, self.y_offset) }

    #[inline]
    pub fn max_offset(&self) -> (f64, f64) { (self.max_x_offset, self.max_y_offset) }

    #[inline]
    pub fn view_size(&self) -> (f64, f64) { (self.view_width, self.view_height) }

    #[inline]
    pub fn surface_size(&self) -> (f64, f64) { (self.surface_width, self.surface_height) }

    // === Transforms ===

    /// Cell under a surface-local pixel. May be outside the grid; callers
    /// hand the result to the model, which bounds-checks it.
    pub fn pixel_to_cell(&self, px: f64, py: f64) -> (i32, i32) {
        let col = ((px - self.fixed_offset - self.x_offset) / self.cell_size).floor();
        let row = ((py - self.fixed_offset - self.y_offset) / self.cell_size).floor();
        (col as i32, row as i32)
    }

    /// Top-left paint position of a token sitting in `(col, row)`.
    pub fn cell_to_pixel(&self, col: u32, row: u32) -> (f64, f64) {
        let x = col as f64 * self.cell_size + self.fixed_offset + self.x_offset + self.token_inset;
        let y = row as f64 * self.cell_size + self.fixed_offset + self.y_offset + self.token_inset;
        (x, y)
    }

    /// Viewport hit test for pointer-down.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= 0.0 && py >= 0.0 && px <= self.view_width && py <= self.view_height
    }

    // === Offsets ===
    pub fn adjust_offset(&mut self, dx: f64, dy: f64) {
        self.adjust_x_offset(dx);
        self.adjust_y_offset(dy);
    }

    /// Non-finite deltas are ignored.
    pub fn adjust_x_offset(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.x_offset -= delta;
        self.x_offset = clamp_offset(self.x_offset, self.max_x_offset);
    }

    pub fn adjust_y_offset(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.y_offset -= delta;
        self.y_offset = clamp_offset(self.y_offset, self.max_y_offset);
    }

    /// Recompute the visible extent for a surface of `width x height` pixels.
    ///
    /// The view snaps down to a whole number of cells less the border inset on
    /// both sides. An axis whose whole grid fits gets a zero max offset, which
    /// pins that offset at 0.
    pub fn fit_to_space(&mut self, width: f64, height: f64) {
        self.surface_width = width;
        self.surface_height = height;

        let total_width = self.cell_size * self.cols as f64;
        let (view_width, max_x) = fit_axis(width, total_width, self.cell_size, self.fixed_offset);
        self.view_width = view_width;
        self.max_x_offset = max_x;
        self.x_offset = clamp_offset(self.x_offset, self.max_x_offset);

        let total_height = self.cell_size * self.rows as f64;
        let (view_height, max_y) = fit_axis(height, total_height, self.cell_size, self.fixed_offset);
        self.view_height = view_height;
        self.max_y_offset = max_y;
        self.y_offset = clamp_offset(self.y_offset, self.max_y_offset);
    }
}

/// Returns (view extent, max offset) for one axis.
fn fit_axis(available: f64, total: f64, cell_size: f64, fixed_offset: f64) -> (f64, f64) {
    let view = available - (available % cell_size) - fixed_offset * 2.0;
    if total < view {
        (total, 0.0)
    } else {
        (view, (total - view).max(0.0))
    }
}

#[inline]
fn clamp_offset(offset: f64, max_offset: f64) -> f64 {
    if offset.is_nan() || offset > 0.0 {
        0.0
    } else if offset < -max_offset {
        -max_offset
    } else {
        offset
    }
}
