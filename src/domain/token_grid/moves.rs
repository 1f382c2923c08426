use super::*;

impl TokenGrid {
    /// Relocate a token to `(col, row)`.
    ///
    /// Out-of-bounds or occupied destinations (including the token's own cell)
    /// are rejected without touching any state. Returns whether the token moved.
    pub fn move_token(&mut self, id: TokenId, col: i32, row: i32) -> bool {
        let Ok(dst) = self.checked_index(col, row) else {
            return false;
        };
        if self.cells[dst].is_some() {
            return false;
        }
        let Some(token) = self.tokens.get(id.0) else {
            return false;
        };

        let (old_col, old_row) = token.cell();
        let src = self.index(old_col, old_row);
        debug_assert_eq!(self.cells[src], Some(id), "lookup table out of sync for {:?}", id);

        self.cells[src] = None;
        self.tokens[id.0].set_cell(col as u32, row as u32);
        self.cells[dst] = Some(id);
        true
    }
}
