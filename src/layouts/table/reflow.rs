use tracing::debug;

use super::grid::{CellKind, Table, TableCell};

/// Rewrites the grid after a page break at `break_row` (the row index, within
/// the grid as it stood for the page just rendered, that was only partially
/// written): trims the fully-written head rows and converts any entity still
/// straddling `break_row` into a fresh continuation entity at the new top row.
///
/// `spec.md` §4.7.
pub fn reflow_after_break(table: &mut Table, break_row: usize) {
    let m = compute_m(table, break_row);
    let target_row = break_row + m;
    rewrite_row(table, target_row);
    drop_rows(table, target_row);
    debug!(break_row, m, target_row, rows_left = table.rows, "reflowed table after page break");
}

/// §4.7 Step 1: the per-column count of rows at `h` already fully consumed,
/// telescoping through any chain of fully-written entities beneath them. The
/// minimum across columns (`m`) is how far past `h` the next page's top row
/// can be pushed without cutting off content that isn't actually there yet.
fn compute_m(table: &Table, h: usize) -> usize {
    (0..table.cols)
        .map(|col| column_consumed_rows(table, h, col))
        .min()
        .unwrap_or(0)
}

fn column_consumed_rows(table: &Table, h: usize, col: usize) -> usize {
    match table.cell(h, col).kind {
        CellKind::Entity { rowspan, .. } => {
            let cell_writed = table.cell(h, col).cell_writed;
            let mut count = cell_writed;
            if cell_writed == rowspan {
                count += count_standard_rows(table, h + rowspan, col);
            }
            count
        }
        CellKind::Phantom {
            owner_row,
            owner_col,
        } => {
            let owner = table.cell(owner_row, owner_col);
            let owner_rowspan = owner.rowspan();
            let mut count = owner.cell_writed.saturating_sub(h - owner_row);
            if owner.cell_writed == owner_rowspan {
                count += count_standard_rows(table, owner_row + owner_rowspan, col);
            }
            count
        }
    }
}

/// §4.7a `countStandardRow`: walks downward in a single column, accumulating
/// the span of each fully-consumed entity, and stops at the first one that is
/// either untouched or only partially written.
fn count_standard_rows(table: &Table, mut row: usize, col: usize) -> usize {
    let mut total = 0;
    while row < table.rows {
        let (owner_row, owner_col) = table.resolve(row, col);
        let owner = table.cell(owner_row, owner_col);
        let rowspan = owner.rowspan();
        if owner.cell_writed == 0 || owner.cell_writed != rowspan {
            break;
        }
        total += rowspan;
        row = owner_row + rowspan;
    }
    total
}

/// §4.7 Step 2: synthesizes a fresh continuation entity at `target_row` for
/// every phantom there whose owner hasn't finished writing yet. An entity
/// that already starts fresh at `target_row` (no phantom above it touching
/// this row) needs no rewriting.
fn rewrite_row(table: &mut Table, target_row: usize) {
    if target_row >= table.rows {
        return;
    }
    let mut owners_seen = Vec::new();
    for col in 0..table.cols {
        if let CellKind::Phantom {
            owner_row,
            owner_col,
        } = table.cell(target_row, col).kind
        {
            if owners_seen.contains(&(owner_row, owner_col)) {
                continue;
            }
            owners_seen.push((owner_row, owner_col));
            convert_to_continuation(table, owner_row, owner_col, target_row);
        }
    }
}

/// Splits `(owner_row, owner_col)`'s entity into a continuation entity at
/// `target_row`: same element (moved, not cloned -- its own `next_line`-style
/// state already tracks what it has left to write) and colspan, a rowspan
/// shrunk by however many of its rows were already consumed, and `cell_writed`
/// reset to 0 so the next page starts counting this entity's progress fresh.
fn convert_to_continuation(table: &mut Table, owner_row: usize, owner_col: usize, target_row: usize) {
    let owner_idx = table.idx(owner_row, owner_col);
    let (old_rowspan, colspan) = match table.cells[owner_idx]
        .as_ref()
        .expect("grid slot missing during reflow")
        .kind
    {
        CellKind::Entity { rowspan, colspan } => (rowspan, colspan),
        CellKind::Phantom { .. } => unreachable!("rewrite_row only visits phantom owners"),
    };
    let new_rowspan = old_rowspan - (target_row - owner_row);
    let element = table.cells[owner_idx]
        .as_mut()
        .expect("grid slot missing during reflow")
        .element
        .take();

    let mut entity = TableCell::entity(target_row, owner_col, new_rowspan, colspan, table.line_height);
    entity.element = element;
    entity.min_height = table.cell(target_row, owner_col).min_height;
    entity.height = (target_row..target_row + new_rowspan)
        .map(|r| table.cell(r, owner_col).min_height)
        .sum();
    let new_idx = table.idx(target_row, owner_col);
    table.cells[new_idx] = Some(entity);

    for i in 0..new_rowspan {
        for j in 0..colspan {
            if i == 0 && j == 0 {
                continue;
            }
            let idx = table.idx(target_row + i, owner_col + j);
            table.cells[idx] = Some(TableCell::phantom(
                target_row + i,
                owner_col + j,
                target_row,
                owner_col,
                table.line_height,
            ));
        }
    }
}

/// §4.7 Step 3: drops the rows before `drop_rows` from the grid and shifts
/// every remaining slot's (and phantom owner's) row index up to match.
fn drop_rows(table: &mut Table, drop_rows: usize) {
    if drop_rows == 0 {
        return;
    }
    let cols = table.cols;
    table.cells.drain(0..drop_rows * cols);
    table.rows -= drop_rows;
    for (idx, cell) in table.cells.iter_mut().enumerate() {
        let cell = cell.as_mut().expect("grid slot missing after reflow trim");
        cell.row = idx / cols;
        if let CellKind::Phantom { owner_row, .. } = &mut cell.kind {
            *owner_row -= drop_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layouts::table::{cell::TextCellStub, height::solve_heights},
        units::Pt,
    };

    /// A rowspan=3 entity straddling a page break mid-span keeps its
    /// unrendered remainder as a continuation entity instead of losing it.
    #[test]
    fn straddling_rowspan_entity_continues_after_trim() {
        let mut table = Table::new(3, 2, Pt(200.0)).with_line_height(Pt(10.0));
        table
            .new_cell_by_range(Some(Box::new(TextCellStub::new(Pt(60.0)))), 1, 3)
            .unwrap();
        for _ in 0..3 {
            table
                .new_cell(Some(Box::new(TextCellStub::new(Pt(10.0)))))
                .unwrap();
        }
        solve_heights(&mut table);

        // Simulate a page that rendered row 0 whole and broke while writing
        // row 1 (the straddling row): the rowspan entity fully consumed row 0
        // worth of its content, but not row 1's.
        table.cell_mut(0, 0).cell_writed = 1;

        reflow_after_break(&mut table, 1);

        assert_eq!(table.rows, 2);
        let owner = table.cell(0, 0);
        assert!(matches!(owner.kind, CellKind::Entity { rowspan: 2, colspan: 1 }));
        assert_eq!(owner.cell_writed, 0);
        assert!(owner.element.is_some(), "the element must survive the split, not be dropped");
        assert_eq!(table.resolve(1, 0), (0, 0));
    }

    /// A break that lands exactly on a fresh entity's own top row (no phantom
    /// above it) needs no rewriting, only trimming.
    #[test]
    fn break_on_a_fresh_row_only_trims() {
        let mut table = Table::new(3, 1, Pt(100.0)).with_line_height(Pt(10.0));
        for _ in 0..3 {
            table
                .new_cell(Some(Box::new(TextCellStub::new(Pt(10.0)))))
                .unwrap();
        }
        solve_heights(&mut table);

        reflow_after_break(&mut table, 1);

        assert_eq!(table.rows, 2);
        assert!(matches!(table.cell(0, 0).kind, CellKind::Entity { rowspan: 1, .. }));
        assert_eq!(table.cell(0, 0).cell_writed, 0);
    }
}
