use tracing::trace;

use crate::units::Pt;

use super::{cell::TableCellElement, TableError};

/// A single slot in the Span Grid.
///
/// Every slot in the grid is either the top-left of a span ([`CellKind::Entity`])
/// or a back-reference to one ([`CellKind::Phantom`]). A tagged enum is used here
/// instead of the negated-rowspan/colspan encoding the source used, since that
/// encoding cannot tell an entity at `(0, 0)` apart from a phantom of `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Entity { rowspan: usize, colspan: usize },
    Phantom { owner_row: usize, owner_col: usize },
}
impl CellKind {
    pub fn is_entity(&self) -> bool {
        matches!(self, CellKind::Entity { .. })
    }
}

/// A slot of the Span Grid.
pub struct TableCell {
    pub row: usize,
    pub col: usize,
    pub kind: CellKind,
    pub element: Option<Box<dyn TableCellElement>>,
    /// The row's solved minimum height. Shared by every slot in the row after [`super::height::solve_heights`].
    pub min_height: Pt,
    /// The cell's total vertical extent (the sum of `min_height` over the rows it spans).
    pub height: Pt,
    /// How many of this span's rows have been emitted on the current page.
    pub cell_writed: usize,
}
impl std::fmt::Debug for TableCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableCell")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("kind", &self.kind)
            .field("has_element", &self.element.is_some())
            .field("min_height", &self.min_height)
            .field("height", &self.height)
            .field("cell_writed", &self.cell_writed)
            .finish()
    }
}
impl TableCell {
    pub(crate) fn entity(row: usize, col: usize, rowspan: usize, colspan: usize, line_height: Pt) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Entity { rowspan, colspan },
            element: None,
            min_height: line_height,
            height: line_height,
            cell_writed: 0,
        }
    }
    pub(crate) fn phantom(row: usize, col: usize, owner_row: usize, owner_col: usize, line_height: Pt) -> Self {
        Self {
            row,
            col,
            kind: CellKind::Phantom {
                owner_row,
                owner_col,
            },
            element: None,
            min_height: line_height,
            height: line_height,
            cell_writed: 0,
        }
    }
    pub fn rowspan(&self) -> usize {
        match self.kind {
            CellKind::Entity { rowspan, .. } => rowspan,
            CellKind::Phantom { .. } => 0,
        }
    }
    pub fn colspan(&self) -> usize {
        match self.kind {
            CellKind::Entity { colspan, .. } => colspan,
            CellKind::Phantom { .. } => 0,
        }
    }
}

/// The root aggregate: a rectangular, possibly row/column-spanned, grid of cells
/// that gets paginated across a sequence of pages.
#[derive(Debug)]
pub struct Table {
    pub rows: usize,
    pub cols: usize,
    /// Absolute horizontal extent of the table.
    pub width: Pt,
    /// Fractional column widths. Invariant: sums to 1.
    pub col_widths: Vec<f32>,
    /// Default row height; every solved row height is at least this.
    pub line_height: Pt,
    pub margin: crate::graphics::styles::Margin<Pt>,
    pub styles: super::style::TableStyles,
    pub(crate) cells: Vec<Option<TableCell>>,
    next_row: isize,
    next_col: isize,
    /// Count of fully-written rows on the current page; `usize::MAX` before any page starts.
    pub(crate) has_writed: usize,
    /// Produces the page (and its page rules) a pagebreak continues onto.
    pub new_page: super::NewPageFn,
}
impl Table {
    pub fn new(rows: usize, cols: usize, width: Pt) -> Self {
        let col_widths = vec![1.0 / cols as f32; cols];
        Self {
            rows,
            cols,
            width,
            col_widths,
            line_height: Pt(14.0),
            margin: Default::default(),
            styles: Default::default(),
            cells: (0..rows * cols).map(|_| None).collect(),
            next_row: 0,
            next_col: 0,
            has_writed: usize::MAX,
            new_page: super::default_new_page,
        }
    }
    pub fn with_new_page(mut self, new_page: super::NewPageFn) -> Self {
        self.new_page = new_page;
        self
    }
    pub fn with_col_widths(mut self, col_widths: Vec<f32>) -> Result<Self, TableError> {
        if col_widths.len() != self.cols {
            return Err(TableError::ColumnValueMismatch {
                columns: self.cols,
                values: col_widths.len(),
                in_row: None,
            });
        }
        let sum: f32 = col_widths.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(TableError::ColumnWidthsDoNotSumToOne { sum });
        }
        self.col_widths = col_widths;
        Ok(self)
    }
    pub fn with_line_height(mut self, line_height: Pt) -> Self {
        self.line_height = line_height;
        self
    }
    pub fn with_margin(mut self, margin: crate::graphics::styles::Margin<Pt>) -> Self {
        self.margin = margin;
        self
    }
    pub fn with_styles(mut self, styles: super::style::TableStyles) -> Self {
        self.styles = styles;
        self
    }
    #[inline]
    pub(crate) fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
    pub fn cell(&self, row: usize, col: usize) -> &TableCell {
        self.cells[self.idx(row, col)]
            .as_ref()
            .expect("grid slot accessed before construction completed")
    }
    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut TableCell {
        let idx = self.idx(row, col);
        self.cells[idx]
            .as_mut()
            .expect("grid slot accessed before construction completed")
    }
    /// Resolves a slot to the grid coordinates of its owning entity.
    pub fn resolve(&self, row: usize, col: usize) -> (usize, usize) {
        match self.cell(row, col).kind {
            CellKind::Entity { .. } => (row, col),
            CellKind::Phantom {
                owner_row,
                owner_col,
            } => (owner_row, owner_col),
        }
    }
    /// The cursor's current insertion point, or `None` once the grid is full.
    pub fn cursor(&self) -> Option<(usize, usize)> {
        if self.next_row < 0 {
            None
        } else {
            Some((self.next_row as usize, self.next_col as usize))
        }
    }
    /// Allocates a 1x1 entity at the cursor.
    pub fn new_cell(
        &mut self,
        element: Option<Box<dyn TableCellElement>>,
    ) -> Result<(usize, usize), TableError> {
        self.new_cell_by_range(element, 1, 1)
    }
    /// Allocates a `colspan x rowspan` entity at the cursor.
    pub fn new_cell_by_range(
        &mut self,
        element: Option<Box<dyn TableCellElement>>,
        colspan: usize,
        rowspan: usize,
    ) -> Result<(usize, usize), TableError> {
        let Some((row, col)) = self.cursor() else {
            return Err(TableError::GridFull);
        };
        if colspan == 0 || rowspan == 0 {
            return Err(TableError::InvalidSpan { colspan, rowspan });
        }
        if row + rowspan > self.rows || col + colspan > self.cols {
            return Err(TableError::SpanOutOfBounds {
                row,
                col,
                colspan,
                rowspan,
            });
        }
        for i in 0..rowspan {
            for j in 0..colspan {
                let idx = self.idx(row + i, col + j);
                if self.cells[idx].is_some() {
                    return Err(TableError::SpanOverlap {
                        row: row + i,
                        col: col + j,
                    });
                }
            }
        }
        let height = element
            .as_ref()
            .map(|e| e.intrinsic_height())
            .unwrap_or(self.line_height);
        let mut entity = TableCell::entity(row, col, rowspan, colspan, self.line_height);
        entity.element = element;
        // `min_height` here holds the entity's intrinsic demand (used by
        // `height::solve_heights`), not yet the solved per-row height.
        entity.min_height = height;
        entity.height = height;
        let entity_idx = self.idx(row, col);
        self.cells[entity_idx] = Some(entity);
        for i in 0..rowspan {
            for j in 0..colspan {
                if i == 0 && j == 0 {
                    continue;
                }
                let idx = self.idx(row + i, col + j);
                self.cells[idx] = Some(TableCell::phantom(
                    row + i,
                    col + j,
                    row,
                    col,
                    self.line_height,
                ));
            }
        }
        self.advance_cursor(row, col);
        trace!(row, col, colspan, rowspan, "allocated table cell");
        Ok((row, col))
    }
    fn advance_cursor(&mut self, from_row: usize, from_col: usize) {
        let mut row = from_row;
        let mut col = from_col + 1;
        loop {
            if col >= self.cols {
                col = 0;
                row += 1;
            }
            if row >= self.rows {
                self.next_row = -1;
                self.next_col = -1;
                return;
            }
            if self.cells[self.idx(row, col)].is_none() {
                self.next_row = row as isize;
                self.next_col = col as isize;
                return;
            }
            col += 1;
        }
    }
    /// Deferred constraint check: every slot occupied, every entity's area accounted for.
    pub fn validate(&self) -> Result<(), TableError> {
        let occupied = self.cells.iter().filter(|c| c.is_some()).count();
        if occupied != self.rows * self.cols {
            return Err(TableError::CoverageMismatch {
                occupied,
                expected: self.rows * self.cols,
            });
        }
        let area: usize = self
            .cells
            .iter()
            .filter_map(|c| c.as_ref())
            .filter_map(|c| match c.kind {
                CellKind::Entity { rowspan, colspan } => Some(rowspan * colspan),
                CellKind::Phantom { .. } => None,
            })
            .sum();
        if area != self.rows * self.cols {
            return Err(TableError::AreaMismatch {
                area,
                expected: self.rows * self.cols,
            });
        }
        Ok(())
    }
    pub fn get_col_width(&self, col: usize) -> Result<f32, TableError> {
        self.col_widths
            .get(col)
            .copied()
            .ok_or(TableError::ColumnIndexOutOfBounds { col, cols: self.cols })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::table::cell::TextCellStub;

    fn grid(rows: usize, cols: usize) -> Table {
        Table::new(rows, cols, Pt(400.0))
    }

    #[test]
    fn uniform_two_by_two_coverage() {
        let mut table = grid(2, 2);
        for _ in 0..4 {
            table
                .new_cell(Some(Box::new(TextCellStub::new(Pt(20.0)))))
                .unwrap();
        }
        assert_eq!(table.cursor(), None);
        table.validate().unwrap();
    }

    #[test]
    fn col_widths_must_sum_to_one() {
        let table = grid(1, 2);
        assert!(table.with_col_widths(vec![0.6, 0.6]).is_err());
        let table = grid(1, 2);
        assert!(table.with_col_widths(vec![0.4, 0.6]).is_ok());
    }

    #[test]
    fn rowspan_starting_at_last_row_is_rejected() {
        let mut table = grid(2, 1);
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(20.0)))))
            .unwrap();
        let err = table
            .new_cell_by_range(Some(Box::new(TextCellStub::new(Pt(20.0)))), 1, 2)
            .unwrap_err();
        assert!(matches!(err, TableError::SpanOutOfBounds { .. }));
    }

    #[test]
    fn phantom_resolves_to_owning_entity() {
        let mut table = grid(2, 2);
        table
            .new_cell_by_range(Some(Box::new(TextCellStub::new(Pt(50.0)))), 1, 2)
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(20.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(20.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(20.0)))))
            .unwrap();
        assert_eq!(table.resolve(1, 0), (0, 0));
        table.validate().unwrap();
    }
}
