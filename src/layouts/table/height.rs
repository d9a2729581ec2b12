use tracing::trace;

use crate::units::Pt;

use super::grid::{CellKind, Table};

/// Solves every row's minimum height in three passes, then rolls the solved
/// row heights back up into each entity's total vertical extent.
///
/// Runs once per page, before that page is rendered (`spec.md` §4.2): a
/// continuation entity produced by [`super::reflow`] asks only for its
/// *remaining* content (via [`super::cell::TableCellElement::last_intrinsic_height`]),
/// so re-running this against the reflowed grid gives the next page the right
/// row heights instead of the cell's original, now-partially-consumed demand.
pub fn solve_heights(table: &mut Table) {
    let rows = table.rows;
    let cols = table.cols;
    let mut row_min_height = vec![table.line_height; rows];

    // Pass 1: single-row entities set each row's baseline minimum.
    for row in 0..rows {
        for col in 0..cols {
            let cell = table.cell(row, col);
            if let CellKind::Entity { rowspan, .. } = cell.kind {
                if rowspan == 1 {
                    let demand = cell
                        .element
                        .as_ref()
                        .map(|e| e.last_intrinsic_height())
                        .unwrap_or(table.line_height);
                    row_min_height[row] = row_min_height[row].max(demand);
                }
            }
        }
    }

    // Pass 2: a multi-row entity that needs more height than the rows it
    // spans currently provide bumps the *last* spanned row. Row-major
    // iteration means every row above has already been finalized by the time
    // we reach this entity, so the last row is the only one still free to grow.
    for row in 0..rows {
        for col in 0..cols {
            let cell = table.cell(row, col);
            if let CellKind::Entity { rowspan, .. } = cell.kind {
                if rowspan > 1 {
                    let span_height: Pt =
                        row_min_height[row..row + rowspan].iter().copied().sum();
                    let needed = cell
                        .element
                        .as_ref()
                        .map(|e| e.last_intrinsic_height())
                        .unwrap_or(table.line_height);
                    if needed > span_height {
                        let delta = needed - span_height;
                        let last_row = row + rowspan - 1;
                        row_min_height[last_row] += delta;
                        trace!(row, col, ?delta, last_row, "bumped spanned row height");
                    }
                }
            }
        }
    }

    // Pass 3: write the solved per-row height onto every slot (phantom and
    // entity alike, since the Border Painter and Geometry Cache both key off
    // a slot's own row), then roll per-row heights up into each entity's
    // total vertical extent.
    for row in 0..rows {
        let height = row_min_height[row];
        for col in 0..cols {
            table.cell_mut(row, col).min_height = height;
        }
    }
    for row in 0..rows {
        for col in 0..cols {
            let rowspan = table.cell(row, col).rowspan();
            if rowspan > 0 {
                let total: Pt = row_min_height[row..row + rowspan].iter().copied().sum();
                table.cell_mut(row, col).height = total;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::table::cell::TextCellStub;

    #[test]
    fn uniform_rows_take_the_tallest_cell() {
        let mut table = Table::new(2, 2, Pt(400.0)).with_line_height(Pt(5.0));
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(10.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(30.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(12.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(8.0)))))
            .unwrap();
        solve_heights(&mut table);
        assert_eq!(table.cell(0, 0).min_height, Pt(30.0));
        assert_eq!(table.cell(1, 0).min_height, Pt(12.0));
    }

    #[test]
    fn rowspan_cell_bumps_last_spanned_row() {
        // line_height is dropped below the 10pt single-row cells so their
        // 10pt demand sets the row floor instead of the table's own default
        // (14pt, which would otherwise swallow the 10pt ask and make the
        // expected 10/90 split unreachable).
        let mut table = Table::new(2, 2, Pt(400.0)).with_line_height(Pt(5.0));
        table
            .new_cell_by_range(Some(Box::new(TextCellStub::new(Pt(100.0)))), 1, 2)
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(10.0)))))
            .unwrap();
        table
            .new_cell(Some(Box::new(TextCellStub::new(Pt(10.0)))))
            .unwrap();
        solve_heights(&mut table);
        let row0 = table.cell(0, 0).min_height;
        let row1 = table.cell(1, 0).min_height;
        assert_eq!(row0 + row1, Pt(100.0));
        // row 0 only needed to satisfy its own 10pt cell; all the slack goes to row 1.
        assert_eq!(row0, Pt(10.0));
        assert_eq!(row1, Pt(90.0));
    }
}
