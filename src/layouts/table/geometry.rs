use crate::{graphics::PdfPosition, units::Pt};

use super::grid::Table;

/// Caches the x/y coordinates of every column edge and of the rows being
/// rendered on the current page, so the Page Renderer and Border Painter
/// never recompute a cumulative sum per cell.
///
/// Rebuilt once per page: `row_y_top`/`row_y_bottom` are indexed by the
/// position of a row within *this page's* window, not by absolute table row.
#[derive(Debug, Clone)]
pub struct GeometryCache {
    /// `col_x[i]` is the left edge of column `i`; `col_x[cols]` is the table's
    /// right edge. Length is `cols + 1`.
    col_x: Vec<Pt>,
    /// Top (greater) y of each row rendered this page, in page coordinates.
    row_y_top: Vec<Pt>,
    /// Bottom (lesser) y of each row rendered this page.
    row_y_bottom: Vec<Pt>,
}
impl GeometryCache {
    /// `origin` is the top-left corner the table starts drawing from on this
    /// page. `page_rows` lists, in render order, the absolute table row
    /// indices being placed on this page.
    pub fn build(table: &Table, origin: PdfPosition, page_rows: &[usize]) -> Self {
        let mut col_x = Vec::with_capacity(table.cols + 1);
        let mut x = origin.x;
        col_x.push(x);
        for width_fraction in &table.col_widths {
            x += table.width * *width_fraction;
            col_x.push(x);
        }

        let mut row_y_top = Vec::with_capacity(page_rows.len());
        let mut row_y_bottom = Vec::with_capacity(page_rows.len());
        let mut y = origin.y;
        for &row in page_rows {
            let height = table.cell(row, 0).min_height;
            row_y_top.push(y);
            y -= height;
            row_y_bottom.push(y);
        }

        Self {
            col_x,
            row_y_top,
            row_y_bottom,
        }
    }
    pub fn col_left(&self, col: usize) -> Pt {
        self.col_x[col]
    }
    pub fn col_right(&self, col: usize) -> Pt {
        self.col_x[col + 1]
    }
    pub fn col_width(&self, col: usize) -> Pt {
        self.col_right(col) - self.col_left(col)
    }
    /// Top y of the page-local row at index `row_index`.
    pub fn row_top(&self, row_index: usize) -> Pt {
        self.row_y_top[row_index]
    }
    /// Bottom y of the page-local row at index `row_index`.
    pub fn row_bottom(&self, row_index: usize) -> Pt {
        self.row_y_bottom[row_index]
    }
    /// Position of the top-left corner of `(row_index, col)`.
    pub fn cell_position(&self, row_index: usize, col: usize) -> PdfPosition {
        PdfPosition {
            x: self.col_left(col),
            y: self.row_top(row_index),
        }
    }
    pub fn page_row_count(&self) -> usize {
        self.row_y_top.len()
    }
    pub fn table_right(&self) -> Pt {
        self.col_x[self.col_x.len() - 1]
    }
    pub fn table_bottom(&self) -> Pt {
        *self
            .row_y_bottom
            .last()
            .unwrap_or(&self.row_y_top.first().copied().unwrap_or_default())
    }
    pub fn table_top(&self) -> Pt {
        self.row_y_top.first().copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::table::cell::TextCellStub;

    #[test]
    fn columns_split_width_by_fraction() {
        let mut table = Table::new(1, 2, Pt(200.0))
            .with_col_widths(vec![0.25, 0.75])
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(10.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(10.0)))))
            .unwrap();
        crate::layouts::table::height::solve_heights(&mut table);
        let geometry = GeometryCache::build(&table, PdfPosition::new(Pt(0.0), Pt(500.0)), &[0]);
        assert_eq!(geometry.col_left(0), Pt(0.0));
        assert_eq!(geometry.col_right(0), Pt(50.0));
        assert_eq!(geometry.col_right(1), Pt(200.0));
    }

    #[test]
    fn rows_stack_downward_from_origin() {
        let mut table = Table::new(2, 1, Pt(100.0));
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(20.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(30.0)))))
            .unwrap();
        crate::layouts::table::height::solve_heights(&mut table);
        let geometry = GeometryCache::build(&table, PdfPosition::new(Pt(0.0), Pt(100.0)), &[0, 1]);
        assert_eq!(geometry.row_top(0), Pt(100.0));
        assert_eq!(geometry.row_bottom(0), Pt(80.0));
        assert_eq!(geometry.row_top(1), Pt(80.0));
        assert_eq!(geometry.row_bottom(1), Pt(50.0));
    }
}
