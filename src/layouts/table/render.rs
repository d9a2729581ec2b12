use tracing::debug;

use crate::{document::PdfDocument, graphics::PdfPosition, page::PdfPage, units::Pt, TuxPdfError};

use super::{
    geometry::GeometryCache,
    grid::{CellKind, Table},
};

/// What the Driver should do after a page's worth of rows has been rendered.
#[derive(Debug)]
pub enum RenderOutcome {
    /// Every remaining row fit on this page; the table is finished.
    Done,
    /// The page ran out of room; `break_row` is the first row (in this page's
    /// grid, before reflow) that was only partially written and must be
    /// reflowed (`spec.md` §4.7) before the next page starts.
    PageBreak { break_row: usize },
    /// Not even row 0 of the current grid fit on this page at all; nothing
    /// was written, and the driver should discard this page and retry on a
    /// freshly sized one (`spec.md` §4.4 Step A, the `i == 0` case).
    NothingFit,
}

/// Renders every row that fits, starting at row 0 of the (possibly already
/// reflowed) grid, onto `page`.
pub fn render_page(
    table: &mut Table,
    document: &PdfDocument,
    page: &mut PdfPage,
    origin: PdfPosition,
    page_bottom_y: Pt,
) -> Result<(RenderOutcome, GeometryCache, Vec<usize>), TuxPdfError> {
    table.has_writed = usize::MAX;
    reset_page_state(table);

    // Row tops/bottoms for the whole remaining grid, floored at each row's
    // solved `min_height` (a spanning entity's own, possibly taller, demand
    // does not move where a break lands -- `spec.md` §4.4 Step A).
    let mut row_top = Vec::with_capacity(table.rows + 1);
    let mut y = origin.y;
    row_top.push(y);
    for row in 0..table.rows {
        y -= table.cell(row, 0).min_height;
        row_top.push(y);
    }

    let break_row = (0..table.rows).find(|&row| row_top[row + 1] < page_bottom_y);

    if break_row == Some(0) {
        debug!("row 0 does not fit at all on this page; nothing written");
        return Ok((RenderOutcome::NothingFit, GeometryCache::build(table, origin, &[]), Vec::new()));
    }

    let page_rows: Vec<usize> = match break_row {
        Some(br) => (0..=br).collect(),
        None => (0..table.rows).collect(),
    };
    let geometry = GeometryCache::build(table, origin, &page_rows);

    for (row_index, &row) in page_rows.iter().enumerate() {
        write_row(table, document, page, &geometry, row_index, row, page_bottom_y, break_row)?;
    }

    match break_row {
        None => Ok((RenderOutcome::Done, geometry, page_rows)),
        Some(br) => {
            table.has_writed = table.has_writed.min(br);
            debug!(break_row = br, "page filled mid-table");
            Ok((RenderOutcome::PageBreak { break_row: br }, geometry, page_rows))
        }
    }
}

/// Clears every element's per-page "has emitted" state before this page's
/// writes begin, so the Border Painter's predicates only see this page's work.
fn reset_page_state(table: &mut Table) {
    for row in 0..table.rows {
        for col in 0..table.cols {
            if let CellKind::Entity { .. } = table.cell(row, col).kind {
                if let Some(element) = table.cell_mut(row, col).element.as_mut() {
                    element.reset_page_state();
                }
            }
        }
    }
}

/// Writes every entity whose top row is `row`. An entity that doesn't reach
/// `break_row` is written whole; one that does gets whatever space remains
/// between its own top and `page_bottom_y` (`spec.md` §4.4 Step B).
fn write_row(
    table: &mut Table,
    document: &PdfDocument,
    page: &mut PdfPage,
    geometry: &GeometryCache,
    row_index: usize,
    row: usize,
    page_bottom_y: Pt,
    break_row: Option<usize>,
) -> Result<(), TuxPdfError> {
    for col in 0..table.cols {
        let (kind, has_element) = {
            let cell = table.cell(row, col);
            (cell.kind, cell.element.is_some())
        };
        let CellKind::Entity { rowspan, colspan } = kind else {
            continue;
        };
        if !has_element {
            continue;
        }
        let last_row = row + rowspan - 1;
        let straddles = break_row.is_some_and(|br| last_row >= br);
        let position = geometry.cell_position(row_index, col);
        let width: Pt = (0..colspan).map(|i| geometry.col_width(col + i)).sum();

        let budget = if straddles {
            geometry.row_top(row_index) - page_bottom_y
        } else {
            (row..=last_row).map(|r| table.cell(r, 0).min_height).sum()
        };

        let cell = table.cell_mut(row, col);
        let outcome = cell
            .element
            .as_mut()
            .expect("checked above")
            .generate(document, page, position, width, budget)?;

        // P6: a whole write always fully commits the span; a straddling write
        // only does if the element reports it drained everything it had.
        cell.cell_writed = if !straddles || outcome.complete {
            rowspan
        } else if rowspan > 1 {
            break_row.expect("straddles implies a break row") - row
        } else {
            0
        };
        debug!(row, col, ?outcome, straddles, cell_writed = cell.cell_writed, "wrote cell");
    }
    Ok(())
}
