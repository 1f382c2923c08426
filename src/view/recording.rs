//! RecordingSurface - captures draw calls as data
//!
//! Used by tests and by headless embeddings that replay the command list
//! elsewhere. Tracks the current fill style / line width through save/restore
//! like a canvas would.

use super::surface::Surface;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Stroke,
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    Fill { style: String },
    FillRect { x: f64, y: f64, w: f64, h: f64, style: String },
    StrokeRect { x: f64, y: f64, w: f64, h: f64, line_width: f64 },
    SetFillStyle(String),
    SetStrokeStyle(String),
    SetLineWidth(f64),
    Save,
    Restore,
}

#[derive(Clone, Debug)]
struct DrawState {
    fill_style: String,
    stroke_style: String,
    line_width: f64,
}

impl Default for DrawState {
    fn default() -> Self {
        // Canvas 2D defaults
        Self {
            fill_style: "#000000".to_string(),
            stroke_style: "#000000".to_string(),
            line_width: 1.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop recorded commands; drawing state is kept.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fill_style(&self) -> &str {
        &self.state.fill_style
    }

    pub fn line_width(&self) -> f64 {
        self.state.line_width
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc { x, y, radius, start, end });
    }

    fn fill(&mut self) {
        let style = self.state.fill_style.clone();
        self.commands.push(DrawCommand::Fill { style });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let style = self.state.fill_style.clone();
        self.commands.push(DrawCommand::FillRect { x, y, w, h, style });
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let line_width = self.state.line_width;
        self.commands.push(DrawCommand::StrokeRect { x, y, w, h, line_width });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.state.fill_style = color.to_string();
        self.commands.push(DrawCommand::SetFillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.state.stroke_style = color.to_string();
        self.commands.push(DrawCommand::SetStrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn save(&mut self) {
        self.stack.push(self.state.clone());
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        // Unbalanced restore is ignored, as on a canvas.
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
        self.commands.push(DrawCommand::Restore);
    }
}
