use tracing::debug;

use crate::{
    graphics::{
        shapes::RectangleStyleType, size::Size, GraphicItems, GraphicStyles, GraphicsGroup,
        PdfPosition, primitives::StraightLine,
        shapes::{OutlineRect, PaintedRect},
    },
    units::Pt,
};

use super::{
    geometry::GeometryCache,
    grid::{CellKind, Table},
};

/// Whether `(row, col)`'s owning entity has emitted anything at all on this
/// page: `cell_writed` for a spanning entity, `produced_output` for a 1x1 one
/// (a single-row cell can write several partial lines before it's "done", so
/// `cell_writed` alone would under-report it).
fn has_emitted(table: &Table, row: usize, col: usize) -> bool {
    let (owner_row, owner_col) = table.resolve(row, col);
    let owner = table.cell(owner_row, owner_col);
    if owner.rowspan() > 1 {
        owner.cell_writed > 0
    } else {
        owner
            .element
            .as_ref()
            .map(|e| e.produced_output())
            .unwrap_or(false)
    }
}

/// §4.5 needs-vline predicate: at a straddling row, the right vertical is
/// required unless neither the current cell's nor the right neighbor's
/// element has emitted anything yet. The last column has no neighbor to
/// check; the outer edge covers it, so this returns `true` unconditionally.
fn needs_vline_at_straddle(table: &Table, row: usize, col: usize) -> bool {
    if col + 1 >= table.cols {
        return true;
    }
    if table.resolve(row, col) == table.resolve(row, col + 1) {
        return false;
    }
    has_emitted(table, row, col) || has_emitted(table, row, col + 1)
}

/// Whether a vertical line is needed between two adjacent, fully-on-page slots.
fn needs_vline(table: &Table, row: usize, col: usize) -> bool {
    if col + 1 >= table.cols {
        return false;
    }
    table.resolve(row, col) != table.resolve(row, col + 1)
}

/// Whether a horizontal line is needed between `(row, col)` and `(row + 1, col)`.
fn needs_hline(table: &Table, row: usize, col: usize) -> bool {
    if row + 1 >= table.rows {
        return false;
    }
    table.resolve(row, col) != table.resolve(row + 1, col)
}

/// §4.5 downstream-straddle predicate: true iff the entity starting right
/// below this one (along `col..col+colspan`, resolved through phantoms)
/// cannot write anything yet -- it hasn't emitted and `cell_writed` is still
/// 0. When true, the current entity's closing lines clamp to `page_bottom_y`
/// instead of its own natural bottom, since the next page's reflow will give
/// that entity its own page to start on.
fn downstream_cannot_write(table: &Table, row: usize, rowspan: usize, col: usize, colspan: usize) -> bool {
    let next_row = row + rowspan;
    if next_row >= table.rows {
        return false;
    }
    (col..col + colspan).all(|c| {
        let (owner_row, owner_col) = table.resolve(next_row, c);
        let owner = table.cell(owner_row, owner_col);
        owner.cell_writed == 0
            && !owner
                .element
                .as_ref()
                .map(|e| e.produced_output())
                .unwrap_or(false)
    })
}

/// Builds the full set of background fills, grid lines and the outer outline
/// for the rows rendered on a single page.
///
/// `break_row`, if present, is the absolute row index that was only partially
/// written this page: per the background-painting design decision
/// (`DESIGN.md`), it never gets a background fill, and the outer outline and
/// any cell closing lines clamp to `page_bottom_y` rather than the row's full,
/// unwritten extent.
pub fn paint_page(
    table: &Table,
    geometry: &GeometryCache,
    page_rows: &[usize],
    break_row: Option<usize>,
    page_bottom_y: Pt,
) -> GraphicsGroup {
    let mut items: Vec<GraphicItems> = Vec::new();
    items.extend(row_backgrounds(table, geometry, page_rows, break_row));
    items.extend(cell_backgrounds(table, geometry, page_rows, break_row));
    items.extend(grid_lines(table, geometry, page_rows, break_row, page_bottom_y));
    items.extend(table_outline(table, geometry, break_row, page_bottom_y));

    GraphicsGroup {
        styles: None,
        items,
        ..Default::default()
    }
}

fn row_backgrounds(
    table: &Table,
    geometry: &GeometryCache,
    page_rows: &[usize],
    break_row: Option<usize>,
) -> Vec<GraphicItems> {
    let mut out = Vec::new();
    let row_styles = &table.styles.row_styles;
    if row_styles.background_color.is_none() {
        return out;
    }
    let graphic_styles: GraphicStyles = row_styles.into();
    let Some(paint_mode) = row_styles.paint_mode() else {
        return out;
    };
    for (row_index, &row) in page_rows.iter().enumerate() {
        if Some(row) == break_row {
            continue;
        }
        let position = PdfPosition {
            x: geometry.col_left(0),
            y: geometry.row_top(row_index),
        };
        let size = Size {
            width: geometry.table_right() - geometry.col_left(0),
            height: geometry.row_top(row_index) - geometry.row_bottom(row_index),
        };
        let rect = PaintedRect {
            position: PdfPosition { x: position.x, y: position.y - size.height },
            size,
            paint_mode,
            ..Default::default()
        };
        out.push(
            GraphicsGroup {
                styles: Some(graphic_styles.clone()),
                items: vec![rect.into()],
                ..Default::default()
            }
            .into(),
        );
    }
    out
}

fn cell_backgrounds(
    table: &Table,
    geometry: &GeometryCache,
    page_rows: &[usize],
    break_row: Option<usize>,
) -> Vec<GraphicItems> {
    let mut out = Vec::new();
    let Some(cell_styles) = table.styles.cell_styles.clone() else {
        return out;
    };
    if cell_styles.background_color.is_none() {
        return out;
    }
    let graphic_styles: GraphicStyles = (&cell_styles).into();
    let Some(paint_mode) = cell_styles.paint_mode() else {
        return out;
    };
    for (row_index, &row) in page_rows.iter().enumerate() {
        if Some(row) == break_row {
            continue;
        }
        for col in 0..table.cols {
            if !table.cell(row, col).kind.is_entity() {
                continue;
            }
            let position = geometry.cell_position(row_index, col);
            let colspan = table.cell(row, col).colspan();
            let width: Pt = (0..colspan).map(|i| geometry.col_width(col + i)).sum();
            let height = geometry.row_top(row_index) - geometry.row_bottom(row_index);
            let rect = PaintedRect {
                position: PdfPosition { x: position.x, y: position.y - height },
                size: Size { width, height },
                paint_mode,
                ..Default::default()
            };
            out.push(
                GraphicsGroup {
                    styles: Some(graphic_styles.clone()),
                    items: vec![rect.into()],
                    ..Default::default()
                }
                .into(),
            );
        }
    }
    out
}

fn grid_lines(
    table: &Table,
    geometry: &GeometryCache,
    page_rows: &[usize],
    break_row: Option<usize>,
    page_bottom_y: Pt,
) -> Vec<GraphicItems> {
    let mut out = Vec::new();
    let Some(cell_styles) = table.styles.cell_styles.clone() else {
        return out;
    };
    let graphic_styles: GraphicStyles = (&cell_styles).into();

    for (row_index, &row) in page_rows.iter().enumerate() {
        for col in 0..table.cols {
            let CellKind::Entity { rowspan, colspan } = table.cell(row, col).kind else {
                continue;
            };
            if table.cell(row, col).element.is_none() {
                continue;
            }
            let last_row = row + rowspan - 1;
            let straddles = break_row.is_some_and(|br| last_row >= br);
            let x_left = geometry.col_left(col);
            let x_right = geometry.col_left(col + colspan);
            let y_top = geometry.row_top(row_index);

            if straddles {
                push_hline(&mut out, &graphic_styles, x_left, x_right, page_bottom_y);
                if needs_vline_at_straddle(table, row, col + colspan - 1) {
                    push_vline(&mut out, &graphic_styles, x_right, y_top, page_bottom_y);
                }
            } else {
                let height: Pt = (row..=last_row).map(|r| table.cell(r, 0).min_height).sum();
                let natural_bottom = y_top - height;
                let clamp = downstream_cannot_write(table, row, rowspan, col, colspan);
                let y_bottom = if clamp { page_bottom_y } else { natural_bottom };

                if needs_vline(table, row, col + colspan - 1) {
                    push_vline(&mut out, &graphic_styles, x_right, y_top, y_bottom);
                }
                if needs_hline(table, last_row, col) {
                    push_hline(&mut out, &graphic_styles, x_left, x_right, y_bottom);
                }
            }
        }
    }
    debug!(count = out.len(), "built grid lines");
    out
}

fn push_vline(out: &mut Vec<GraphicItems>, styles: &GraphicStyles, x: Pt, y_top: Pt, y_bottom: Pt) {
    let line = StraightLine {
        start: PdfPosition { x, y: y_top },
        points: vec![PdfPosition { x, y: y_bottom }],
        is_closed: false,
    };
    out.push(
        GraphicsGroup {
            styles: Some(styles.clone()),
            items: vec![line.into()],
            ..Default::default()
        }
        .into(),
    );
}

fn push_hline(out: &mut Vec<GraphicItems>, styles: &GraphicStyles, x_left: Pt, x_right: Pt, y: Pt) {
    let line = StraightLine {
        start: PdfPosition { x: x_left, y },
        points: vec![PdfPosition { x: x_right, y }],
        is_closed: false,
    };
    out.push(
        GraphicsGroup {
            styles: Some(styles.clone()),
            items: vec![line.into()],
            ..Default::default()
        }
        .into(),
    );
}

fn table_outline(table: &Table, geometry: &GeometryCache, break_row: Option<usize>, page_bottom_y: Pt) -> Option<GraphicItems> {
    let outer_styles = table.styles.outer_styles.clone()?;
    let styles: GraphicStyles = (&outer_styles).into();
    let position = PdfPosition {
        x: geometry.col_left(0),
        y: geometry.table_top(),
    };
    let bottom = if break_row.is_some() {
        page_bottom_y
    } else {
        geometry.table_bottom()
    };
    let size = Size {
        width: geometry.table_right() - geometry.col_left(0),
        height: geometry.table_top() - bottom,
    };
    let outline: StraightLine = OutlineRect { position, size }.into();
    Some(
        GraphicsGroup {
            styles: Some(styles),
            items: vec![outline.into()],
            ..Default::default()
        }
        .into(),
    )
}
