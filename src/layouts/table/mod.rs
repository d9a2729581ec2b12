/*!
 * # Table
 *
 * A paginating table layout: a rectangular grid of cells, any of which may
 * span multiple rows and/or columns, that lays itself out across as many
 * pages as its content needs.
 */
use thiserror::Error;
use tracing::debug;

use crate::{
    document::PdfDocument,
    graphics::{styles::Margin, size::Size, LayerType, PdfPosition},
    page::{page_sizes::A4, PdfPage},
    units::{Pt, UnitType},
    TuxPdfError,
};

pub mod border;
pub mod builder;
pub mod cell;
pub mod geometry;
pub mod grid;
pub mod height;
pub mod reflow;
pub mod render;
pub mod style;

pub use builder::{GridStyleGroup, TableColumnMaxWidth, TableColumnMinWidth};
pub use cell::{GenerateOutcome, TableCellElement, TextCell, TryGenerateOutcome};
pub use grid::{CellKind, Table, TableCell};
pub use render::RenderOutcome;
pub use style::{CellStyle, ColumnStyle, RowStyles, TableStyles};

/// Errors raised while constructing or rendering a [`Table`].
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Span of {colspan}x{rowspan} is invalid: both dimensions must be at least 1")]
    InvalidSpan { colspan: usize, rowspan: usize },
    #[error("Span of {colspan}x{rowspan} starting at ({row}, {col}) does not fit inside the grid")]
    SpanOutOfBounds {
        row: usize,
        col: usize,
        colspan: usize,
        rowspan: usize,
    },
    #[error("Cell at ({row}, {col}) overlaps a previously allocated span")]
    SpanOverlap { row: usize, col: usize },
    #[error("The grid has no remaining empty slots")]
    GridFull,
    #[error("Grid coverage is incomplete: {occupied} of {expected} slots filled")]
    CoverageMismatch { occupied: usize, expected: usize },
    #[error("Grid entity area does not cover every slot exactly: {area} of {expected}")]
    AreaMismatch { area: usize, expected: usize },
    #[error("Column {col} is out of bounds for a table with {cols} columns")]
    ColumnIndexOutOfBounds { col: usize, cols: usize },
    #[error("Number of columns and values do not match: expected {columns} got {values}")]
    ColumnValueMismatch {
        columns: usize,
        values: usize,
        in_row: Option<usize>,
    },
    #[error("Column widths must sum to 1.0, got {sum}")]
    ColumnWidthsDoNotSumToOne { sum: f32 },
    #[error("Header row is too wide for the table")]
    HeaderDoesNotFit,
    #[error("A grid can only have at most one auto-fill column")]
    MultipleAutoFillColumns,
    #[error("Row is too wide for the table")]
    RowTooWide,
    #[error("Grid builder columns were used before being initialized")]
    GridBuilderColumnsNotInitialized,
}

/// Where on the page the table may draw, for a single page.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePageRules {
    pub page_size: Size,
    pub table_start_y: Option<Pt>,
    pub table_stop_y: Option<Pt>,
    /// Left/right margin; top/bottom are expressed via `table_start_y`/`table_stop_y`.
    pub margin: Option<Margin<Pt>>,
}
impl Default for TablePageRules {
    fn default() -> Self {
        Self {
            page_size: A4,
            table_start_y: None,
            table_stop_y: None,
            margin: None,
        }
    }
}
impl TablePageRules {
    /// The top-left drawing origin and the lowest y the table may reach.
    fn drawable_area(&self) -> (PdfPosition, Pt) {
        let (left, _right, _top, _bottom): (Pt, Pt, Pt, Pt) =
            self.margin.clone().unwrap_or_default().into();
        let top = self.table_start_y.unwrap_or(self.page_size.height);
        let bottom = self.table_stop_y.unwrap_or_default();
        (PdfPosition { x: left, y: top }, bottom)
    }
}

/// Produces the page (and its page rules) a page break continues onto.
pub type NewPageFn = fn(document: &mut PdfDocument) -> (TablePageRules, PdfPage);

pub(crate) fn default_new_page(_: &mut PdfDocument) -> (TablePageRules, PdfPage) {
    let page = PdfPage::new_from_page_size(A4);
    (Default::default(), page)
}

impl Table {
    /// Runs the Driver loop: repeatedly solves row heights, asks the Page
    /// Renderer for as much of the table as fits on the current page, paints
    /// its borders, reflows any straddling entity, and opens a new page via
    /// `new_page` until the whole table has been written.
    ///
    /// An explicit loop, not recursion across pages (`spec.md` Design Notes).
    pub fn render(
        &mut self,
        document: &mut PdfDocument,
        first_page: (TablePageRules, PdfPage),
    ) -> Result<(), TuxPdfError> {
        self.validate()?;

        let (mut page_rules, mut page) = first_page;

        loop {
            // Re-solved every iteration (`spec.md` §4.2): a continuation entity
            // produced by the previous iteration's reflow only asks for its
            // remaining content, so the row heights this page sees must be
            // resolved against the grid as it stands now, not at the start.
            height::solve_heights(self);

            let (page_origin, page_bottom_y) = page_rules.drawable_area();
            let (left, _right, top, bottom_inset): (Pt, Pt, Pt, Pt) = self.margin.into();
            let origin = PdfPosition {
                x: page_origin.x + left,
                y: page_origin.y - top,
            };
            let bottom_y = page_bottom_y + bottom_inset;
            let (outcome, geometry, page_rows) =
                render::render_page(self, document, &mut page, origin, bottom_y)?;

            debug!(?outcome, ?page_rows, "rendered table page");
            match outcome {
                RenderOutcome::Done => {
                    let borders = border::paint_page(self, &geometry, &page_rows, None, bottom_y);
                    page.add_to_layer(borders)?;
                    document.add_page(page);
                    return Ok(());
                }
                RenderOutcome::PageBreak { break_row } => {
                    let borders = border::paint_page(self, &geometry, &page_rows, Some(break_row), bottom_y);
                    page.add_to_layer(borders)?;
                    document.add_page(page);
                    reflow::reflow_after_break(self, break_row);
                    let (new_rules, new_page) = (self.new_page)(document);
                    page_rules = new_rules;
                    page = new_page;
                }
                RenderOutcome::NothingFit => {
                    let (new_rules, new_page) = (self.new_page)(document);
                    page_rules = new_rules;
                    page = new_page;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{document::PdfDocument, layouts::table::cell::TextCellStub};

    #[test]
    fn single_page_table_renders_without_continuation() {
        let mut table = Table::new(3, 2, Pt(300.0));
        for _ in 0..6 {
            table
                .new_cell(Some(Box::new(TextCellStub::new(Pt(20.0)))))
                .unwrap();
        }
        let mut document = PdfDocument::new("table driver test");
        let page = PdfPage::new_from_page_size(A4);
        let rules = TablePageRules {
            table_start_y: Some(A4.height - 10f32.pt()),
            table_stop_y: Some(10f32.pt()),
            ..Default::default()
        };
        table.render(&mut document, (rules, page)).unwrap();
    }
}
