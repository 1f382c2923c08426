use super::*;

impl TokenGrid {
    // === Dimensions ===
    #[inline]
    pub fn rows(&self) -> u32 { self.rows }

    #[inline]
    pub fn cols(&self) -> u32 { self.cols }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols as i32 && row >= 0 && row < self.rows as i32
    }

    // === Index conversion ===
    #[inline]
    pub(super) fn index(&self, col: u32, row: u32) -> usize {
        (row as usize) * (self.cols as usize) + col as usize
    }

    pub(super) fn checked_index(&self, col: i32, row: i32) -> Result<usize, GridError> {
        if !self.in_bounds(col, row) {
            return Err(GridError::OutOfBounds {
                col,
                row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(self.index(col as u32, row as u32))
    }
}
