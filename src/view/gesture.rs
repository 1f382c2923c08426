//! Gesture - single-pointer pan / drag state machine
//!
//!   Idle --down on token--> Dragging --up/leave--> Idle
//!   Idle --down elsewhere-> Panning  --up/leave--> Idle
//!
//! Transitions only touch the camera and the grid; drawing is left to the
//! caller. Each transition returns whether the frame needs repainting.

use log::debug;

use crate::domain::{TokenGrid, TokenId};

use super::camera::Camera;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Panning {
        last_x: f64,
        last_y: f64,
    },
    Dragging {
        token: TokenId,
        // Live (unsnapped) top-left of the token being carried
        x: f64,
        y: f64,
        last_x: f64,
        last_y: f64,
    },
}

impl Gesture {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    /// The carried token and where it is currently drawn.
    pub fn active_token(&self) -> Option<(TokenId, f64, f64)> {
        match *self {
            Gesture::Dragging { token, x, y, .. } => Some((token, x, y)),
            _ => None,
        }
    }

    pub fn pointer_down(&mut self, camera: &Camera, grid: &mut TokenGrid, x: f64, y: f64) -> bool {
        // A second down without an up (lost pointer-up) closes the old gesture first.
        let finished = if self.is_idle() {
            false
        } else {
            self.pointer_up(camera, grid, x, y)
        };

        if !camera.contains(x, y) {
            debug!("pointer down at ({x}, {y}) outside viewport, ignored");
            return finished;
        }

        let (col, row) = camera.pixel_to_cell(x, y);
        *self = match grid.token_at(col, row) {
            Ok(Some(token)) => {
                let (tx, ty) = camera.cell_to_pixel(col as u32, row as u32);
                debug!("picked up {token:?} at ({col}, {row})");
                Gesture::Dragging {
                    token,
                    x: tx,
                    y: ty,
                    last_x: x,
                    last_y: y,
                }
            }
            // Border inset pixels map just outside the grid; treat as empty.
            Ok(None) | Err(_) => Gesture::Panning { last_x: x, last_y: y },
        };
        true
    }

    pub fn pointer_move(&mut self, camera: &mut Camera, x: f64, y: f64) -> bool {
        match self {
            Gesture::Idle => false,
            Gesture::Panning { last_x, last_y } => {
                let (dx, dy) = (*last_x - x, *last_y - y);
                *last_x = x;
                *last_y = y;
                camera.adjust_offset(dx, dy);
                true
            }
            Gesture::Dragging {
                x: token_x,
                y: token_y,
                last_x,
                last_y,
                ..
            } => {
                let (dx, dy) = (*last_x - x, *last_y - y);
                *last_x = x;
                *last_y = y;
                *token_x -= dx;
                *token_y -= dy;
                true
            }
        }
    }

    /// Pointer released (or left the surface) at `(x, y)`.
    ///
    /// A carried token is offered to the cell under the release point; the
    /// grid refuses occupied or off-grid cells, so a bad drop just leaves the
    /// token where it was.
    pub fn pointer_up(&mut self, camera: &Camera, grid: &mut TokenGrid, x: f64, y: f64) -> bool {
        if let Gesture::Dragging { token, .. } = *self {
            let (col, row) = camera.pixel_to_cell(x, y);
            if !grid.move_token(token, col, row) {
                debug!("drop of {token:?} on ({col}, {row}) rejected");
            }
        }
        *self = Gesture::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Token;
    use crate::view::settings::ViewSettings;

    fn setup() -> (Camera, TokenGrid, TokenId) {
        let mut grid = TokenGrid::new(15, 15).unwrap();
        let id = grid.add_token(Token::circle(1, 1, "#990099")).unwrap();
        let mut camera = Camera::new(&ViewSettings::default(), 15, 15);
        camera.fit_to_space(400.0, 400.0);
        (camera, grid, id)
    }

    #[test]
    fn down_on_empty_cell_pans() {
        let (camera, mut grid, _) = setup();
        let mut gesture = Gesture::Idle;
        assert!(gesture.pointer_down(&camera, &mut grid, 200.0, 200.0));
        assert_eq!(gesture, Gesture::Panning { last_x: 200.0, last_y: 200.0 });
    }

    #[test]
    fn down_on_token_drags_from_snapped_position() {
        let (camera, mut grid, id) = setup();
        let mut gesture = Gesture::Idle;
        gesture.pointer_down(&camera, &mut grid, 61.0, 70.0);
        assert_eq!(gesture.active_token(), Some((id, 45.0, 45.0)));
    }

    #[test]
    fn down_outside_viewport_is_ignored() {
        let (camera, mut grid, _) = setup();
        let mut gesture = Gesture::Idle;
        assert!(!gesture.pointer_down(&camera, &mut grid, 399.0, 10.0));
        assert!(gesture.is_idle());
    }

    #[test]
    fn down_on_border_inset_pans() {
        let (camera, mut grid, _) = setup();
        let mut gesture = Gesture::Idle;
        gesture.pointer_down(&camera, &mut grid, 0.0, 0.0);
        assert!(matches!(gesture, Gesture::Panning { .. }));
    }

    #[test]
    fn panning_moves_camera_against_pointer() {
        let (mut camera, mut grid, _) = setup();
        let mut gesture = Gesture::Idle;
        gesture.pointer_down(&camera, &mut grid, 200.0, 200.0);
        gesture.pointer_move(&mut camera, 170.0, 190.0);
        assert_eq!(camera.offset(), (-30.0, -10.0));
        gesture.pointer_move(&mut camera, 180.0, 190.0);
        assert_eq!(camera.offset(), (-20.0, -10.0));
    }

    #[test]
    fn dragging_follows_pointer_without_touching_grid() {
        let (mut camera, mut grid, id) = setup();
        let mut gesture = Gesture::Idle;
        gesture.pointer_down(&camera, &mut grid, 61.0, 61.0);
        gesture.pointer_move(&mut camera, 75.0, 50.0);
        gesture.pointer_move(&mut camera, 100.0, 52.0);
        assert_eq!(gesture.active_token(), Some((id, 84.0, 36.0)));
        assert_eq!(camera.offset(), (0.0, 0.0));
        assert_eq!(grid.token(id).unwrap().cell(), (1, 1));
    }

    #[test]
    fn move_while_idle_does_nothing() {
        let (mut camera, _, _) = setup();
        let mut gesture = Gesture::Idle;
        assert!(!gesture.pointer_move(&mut camera, 10.0, 10.0));
        assert_eq!(camera.offset(), (0.0, 0.0));
    }

    #[test]
    fn release_drops_on_pointer_cell() {
        let (mut camera, mut grid, id) = setup();
        let mut gesture = Gesture::Idle;
        gesture.pointer_down(&camera, &mut grid, 61.0, 61.0);
        gesture.pointer_move(&mut camera, 141.0, 141.0);
        assert!(gesture.pointer_up(&camera, &mut grid, 141.0, 141.0));
        assert!(gesture.is_idle());
        assert_eq!(grid.token(id).unwrap().cell(), (3, 3));
    }

    #[test]
    fn second_down_finishes_previous_drag() {
        let (camera, mut grid, id) = setup();
        let mut gesture = Gesture::Idle;
        gesture.pointer_down(&camera, &mut grid, 61.0, 61.0);
        // No up in between: the drag ends at (5, 5) and the new down picks the
        // token up again from there.
        gesture.pointer_down(&camera, &mut grid, 221.0, 221.0);
        assert_eq!(grid.token(id).unwrap().cell(), (5, 5));
        assert_eq!(gesture.active_token(), Some((id, 205.0, 205.0)));
    }

    #[test]
    fn second_down_finishes_previous_pan() {
        let (mut camera, mut grid, _) = setup();
        let mut gesture = Gesture::Idle;
        gesture.pointer_down(&camera, &mut grid, 300.0, 300.0);
        gesture.pointer_move(&mut camera, 290.0, 300.0);
        gesture.pointer_down(&camera, &mut grid, 250.0, 250.0);
        assert_eq!(gesture, Gesture::Panning { last_x: 250.0, last_y: 250.0 });
        assert_eq!(camera.offset(), (-10.0, 0.0));
    }
}
