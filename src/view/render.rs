//! Render - one full frame from camera + grid + gesture state
//!
//! Pass order matters: the carried token is painted last so neither grid
//! lines, other tokens nor the border mask can cover it.

use std::f64::consts::PI;

use crate::domain::{Token, TokenGrid, TokenShape};

use super::camera::Camera;
use super::gesture::Gesture;
use super::settings::ViewSettings;
use super::surface::Surface;

pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    grid: &TokenGrid,
    gesture: &Gesture,
    settings: &ViewSettings,
) {
    let (width, height) = camera.surface_size();
    surface.clear_rect(0.0, 0.0, width, height);
    render_grid(surface, camera, settings);
    render_idle_tokens(surface, camera, grid, gesture);
    render_border(surface, camera, settings);
    render_active_token(surface, camera, grid, gesture);
}

/// Grid lines, phase-shifted by the sub-cell part of the offset so they scroll
/// smoothly while panning.
fn render_grid<S: Surface + ?Sized>(surface: &mut S, camera: &Camera, settings: &ViewSettings) {
    let cell = camera.cell_size();
    let inset = camera.fixed_offset();
    let (view_width, view_height) = camera.view_size();
    let (x_offset, y_offset) = camera.offset();
    let phase_x = x_offset % cell;
    let phase_y = y_offset % cell;

    surface.save();
    surface.set_stroke_style(&settings.line_color);

    let mut i = 0.0;
    while i * cell + phase_x <= view_width {
        let x = i * cell + phase_x + inset;
        line_between(surface, x, inset, x, view_height + inset);
        i += 1.0;
    }

    let mut j = 0.0;
    while j * cell + phase_y <= view_height {
        let y = j * cell + phase_y + inset;
        line_between(surface, inset, y, view_width + inset, y);
        j += 1.0;
    }

    surface.restore();
}

fn line_between<S: Surface + ?Sized>(surface: &mut S, x1: f64, y1: f64, x2: f64, y2: f64) {
    surface.begin_path();
    surface.move_to(x1, y1);
    surface.line_to(x2, y2);
    surface.stroke();
}

fn render_idle_tokens<S: Surface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    grid: &TokenGrid,
    gesture: &Gesture,
) {
    let active = gesture.active_token().map(|(id, _, _)| id);
    for (id, token) in grid.tokens() {
        if Some(id) == active {
            continue;
        }
        let (x, y) = camera.cell_to_pixel(token.col(), token.row());
        render_token(surface, token, x, y, camera.token_size());
    }
}

fn render_active_token<S: Surface + ?Sized>(
    surface: &mut S,
    camera: &Camera,
    grid: &TokenGrid,
    gesture: &Gesture,
) {
    if let Some((id, x, y)) = gesture.active_token() {
        if let Some(token) = grid.token(id) {
            render_token(surface, token, x, y, camera.token_size());
        }
    }
}

/// Viewport frame, then blank out whatever lies right of / below it.
fn render_border<S: Surface + ?Sized>(surface: &mut S, camera: &Camera, settings: &ViewSettings) {
    let inset = camera.fixed_offset();
    let (view_width, view_height) = camera.view_size();
    let (width, height) = camera.surface_size();

    surface.save();
    surface.set_line_width(settings.border_width);
    surface.stroke_rect(inset, inset, view_width, view_height);
    surface.restore();

    surface.save();
    surface.set_fill_style(&settings.background_color);
    surface.fill_rect(0.0, view_height + inset * 2.0, width, height - view_height);
    surface.fill_rect(view_width + inset * 2.0, 0.0, width - view_width, height);
    surface.restore();
}

pub(crate) fn render_token<S: Surface + ?Sized>(surface: &mut S, token: &Token, x: f64, y: f64, size: f64) {
    surface.save();
    surface.set_fill_style(token.color());
    match token.shape() {
        TokenShape::Circle => {
            let radius = size / 2.0;
            surface.begin_path();
            surface.arc(x + radius, y + radius, radius, 0.0, 2.0 * PI);
            surface.fill();
        }
        TokenShape::Square => {
            surface.fill_rect(x, y, size, size);
        }
    }
    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::recording::{DrawCommand, RecordingSurface};

    fn setup(width: f64, height: f64) -> (Camera, TokenGrid, ViewSettings) {
        let settings = ViewSettings::default();
        let mut camera = Camera::new(&settings, 15, 15);
        camera.fit_to_space(width, height);
        (camera, TokenGrid::demo(), settings)
    }

    fn fills(surface: &RecordingSurface) -> Vec<String> {
        surface
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill { style } => Some(style.clone()),
                DrawCommand::FillRect { style, .. } => Some(style.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn frame_starts_with_clear_of_whole_surface() {
        let (camera, grid, settings) = setup(800.0, 700.0);
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &camera, &grid, &Gesture::Idle, &settings);
        assert_eq!(
            surface.commands()[0],
            DrawCommand::ClearRect { x: 0.0, y: 0.0, w: 800.0, h: 700.0 }
        );
        assert_eq!(surface.save_depth(), 0);
        assert_eq!(surface.fill_style(), "#000000");
    }

    #[test]
    fn grid_lines_cover_fitted_view() {
        let (camera, grid, settings) = setup(800.0, 800.0);
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &camera, &grid, &Gesture::Idle, &settings);
        let lines = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count();
        // 16 vertical + 16 horizontal across a 600px view
        assert_eq!(lines, 32);
    }

    #[test]
    fn grid_lines_shift_with_pan() {
        let (mut camera, grid, settings) = setup(400.0, 400.0);
        camera.adjust_offset(15.0, 0.0);
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &camera, &grid, &Gesture::Idle, &settings);
        let first_vertical = surface.commands().iter().find_map(|c| match c {
            DrawCommand::MoveTo { x, y } if *y == 1.0 => Some(*x),
            _ => None,
        });
        assert_eq!(first_vertical, Some(-14.0));
    }

    #[test]
    fn tokens_paint_in_insertion_order() {
        let (camera, grid, settings) = setup(800.0, 800.0);
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &camera, &grid, &Gesture::Idle, &settings);
        let styles = fills(&surface);
        let circle = styles.iter().position(|s| s == "#990099").unwrap();
        let square = styles.iter().position(|s| s == "#009900").unwrap();
        assert!(circle < square);
    }

    #[test]
    fn circle_is_inscribed_in_token_square() {
        let (camera, grid, settings) = setup(800.0, 800.0);
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &camera, &grid, &Gesture::Idle, &settings);
        assert!(surface.commands().contains(&DrawCommand::Arc {
            x: 61.0,
            y: 61.0,
            radius: 16.0,
            start: 0.0,
            end: 2.0 * PI,
        }));
    }

    #[test]
    fn dragged_token_paints_last_at_live_position() {
        let (camera, grid, settings) = setup(800.0, 800.0);
        let id = grid.token_at(1, 1).unwrap().unwrap();
        let gesture = Gesture::Dragging {
            token: id,
            x: 300.0,
            y: 250.0,
            last_x: 0.0,
            last_y: 0.0,
        };
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &camera, &grid, &gesture, &settings);

        let arcs: Vec<&DrawCommand> = surface
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Arc { .. }))
            .collect();
        assert_eq!(arcs.len(), 1);
        assert!(matches!(arcs[0], DrawCommand::Arc { x, y, .. } if *x == 316.0 && *y == 266.0));

        let last_fill = fills(&surface).pop().unwrap();
        assert_eq!(last_fill, "#990099");
    }

    #[test]
    fn border_masks_margin_with_background() {
        let (camera, grid, settings) = setup(800.0, 700.0);
        let mut surface = RecordingSurface::new();
        render_frame(&mut surface, &camera, &grid, &Gesture::Idle, &settings);
        let cmds = surface.commands();
        assert!(cmds.contains(&DrawCommand::StrokeRect {
            x: 1.0,
            y: 1.0,
            w: 600.0,
            h: 600.0,
            line_width: 3.0,
        }));
        assert!(cmds.contains(&DrawCommand::FillRect {
            x: 0.0,
            y: 602.0,
            w: 800.0,
            h: 100.0,
            style: "#ffffff".to_string(),
        }));
        assert!(cmds.contains(&DrawCommand::FillRect {
            x: 602.0,
            y: 0.0,
            w: 200.0,
            h: 700.0,
            style: "#ffffff".to_string(),
        }));
    }
}
