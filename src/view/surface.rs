//! Surface - the immediate-mode 2D drawing calls the renderer needs
//!
//! Matches a subset of the HTML canvas 2D context, which gets the direct impl
//! below. `RecordingSurface` captures the same calls as data for headless use.

use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn stroke(&mut self);

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn fill(&mut self);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    /// Push drawing state (styles, line width)
    fn save(&mut self);
    /// Pop drawing state pushed by the matching `save`
    fn restore(&mut self);
}

impl Surface for CanvasRenderingContext2d {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, w, h);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        // Only fails for a negative radius; validated settings keep cell_size >= 1.
        let _ = CanvasRenderingContext2d::arc(self, x, y, radius, start, end);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, w, h);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }
}
