//! GridView - camera + gesture + renderer composed over a drawing surface
//!
//! Every handler runs to completion synchronously: update state, then repaint
//! the whole frame when anything changed.

pub mod camera;
pub mod gesture;
pub mod input;
pub mod recording;
pub mod render;
pub mod settings;
pub mod surface;

pub use camera::Camera;
pub use gesture::Gesture;
pub use input::InputEvent;
pub use recording::{DrawCommand, RecordingSurface};
pub use settings::ViewSettings;
pub use surface::Surface;

use log::info;

use crate::core::error::GridError;
use crate::domain::{Token, TokenGrid, TokenId};

pub struct GridView<S: Surface> {
    surface: S,
    grid: TokenGrid,
    camera: Camera,
    gesture: Gesture,
    settings: ViewSettings,
}

impl<S: Surface> GridView<S> {
    /// Build a view and paint the first frame for a `width x height` surface.
    pub fn new(surface: S, grid: TokenGrid, settings: ViewSettings, width: f64, height: f64) -> Self {
        let camera = Camera::new(&settings, grid.rows(), grid.cols());
        let mut view = Self {
            surface,
            grid,
            camera,
            gesture: Gesture::Idle,
            settings,
        };
        view.resize(width, height);
        view
    }

    // === Accessors ===
    #[inline]
    pub fn grid(&self) -> &TokenGrid { &self.grid }

    #[inline]
    pub fn camera(&self) -> &Camera { &self.camera }

    #[inline]
    pub fn gesture(&self) -> &Gesture { &self.gesture }

    #[inline]
    pub fn settings(&self) -> &ViewSettings { &self.settings }

    #[inline]
    pub fn surface(&self) -> &S { &self.surface }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }

    /// Place a token and repaint.
    pub fn add_token(&mut self, token: Token) -> Result<TokenId, GridError> {
        let id = self.grid.add_token(token)?;
        self.render();
        Ok(id)
    }

    /// Swap in a freshly loaded grid. Any gesture in progress is dropped.
    pub fn replace_grid(&mut self, grid: TokenGrid) {
        let (width, height) = self.camera.surface_size();
        self.camera = Camera::new(&self.settings, grid.rows(), grid.cols());
        self.grid = grid;
        self.gesture = Gesture::Idle;
        self.resize(width, height);
    }

    // === Events ===

    /// Container changed size: refit the viewport and repaint.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.camera.fit_to_space(width, height);
        let (view_width, view_height) = self.camera.view_size();
        info!("resized to {width}x{height}, viewport {view_width}x{view_height}");
        self.render();
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Down { x, y } => self.pointer_down(x, y),
            InputEvent::Move { x, y } => self.pointer_move(x, y),
            InputEvent::Up { x, y } | InputEvent::Leave { x, y } => self.pointer_up(x, y),
            InputEvent::Wheel { delta_x, delta_y } => self.wheel(delta_x, delta_y),
        }
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if self.gesture.pointer_down(&self.camera, &mut self.grid, x, y) {
            self.render();
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.gesture.pointer_move(&mut self.camera, x, y) {
            self.render();
        }
    }

    /// Pointer-up and pointer-leave share this path.
    pub fn pointer_up(&mut self, x: f64, y: f64) {
        if self.gesture.pointer_up(&self.camera, &mut self.grid, x, y) {
            self.render();
        }
    }

    /// Wheel pans directly; it never starts or ends a gesture.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) {
        let divisor = self.settings.wheel_divisor;
        self.camera.adjust_offset(delta_x / divisor, delta_y / divisor);
        self.render();
    }

    pub fn render(&mut self) {
        render::render_frame(
            &mut self.surface,
            &self.camera,
            &self.grid,
            &self.gesture,
            &self.settings,
        );
    }
}
