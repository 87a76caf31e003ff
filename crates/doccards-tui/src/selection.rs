/// Which card in the row has keyboard focus.
#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
    /// First tile row on screen.
    row_offset: usize,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn next(&mut self, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(max_count - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    pub fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// Scroll by whole rows so the selected card stays inside a grid of
    /// `visible_rows` rows holding `per_row` cards each.
    pub fn ensure_selected_visible(&mut self, count: usize, per_row: usize, visible_rows: usize) {
        if per_row == 0 || visible_rows == 0 {
            return;
        }

        let total_rows = count.div_ceil(per_row);
        self.row_offset = self.row_offset.min(total_rows.saturating_sub(visible_rows));

        if let Some(selected_idx) = self.selected_index {
            let row = selected_idx / per_row;
            if row < self.row_offset {
                self.row_offset = row;
            } else if row >= self.row_offset + visible_rows {
                self.row_offset = row + 1 - visible_rows;
            }
        }
    }

    /// Keep the selection valid after the collection changed size.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (Some(idx), len) => Some(idx.min(len - 1)),
            (None, _) => Some(0),
        };
    }
}
