use tracing::{debug, error, warn};

use super::TableLayout;
use crate::{
    graphics::{size::Size, PdfPosition},
    layouts::table::{TableError, TablePageRules},
    layouts::table_grid::{
        column::SizedColumn,
        row::SizedGridRow,
        style::{
            size::ColumnMinWidth, GridBuilderColumn, GridBuilderRow, GridCell, GridStyleGroup,
            GridStyles,
        },
    },
    units::{Pt, UnitType},
};

/// Accumulates column/row geometry for a single-page [`TableLayout`].
///
/// A new one of these must be created for each page: unlike `layouts::table::Table`,
/// this grid has no pagination of its own, so a page boundary just means a fresh builder.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayoutBuilder {
    current_y: Pt,
    start: PdfPosition,
    max_grid_size: Size,
    styles: GridStyles,
    rows: Vec<GridBuilderRow>,
    columns: Vec<GridBuilderColumn>,
}
impl TableLayoutBuilder {
    pub fn new(
        table_page_rules: &TablePageRules,
        styles: GridStyles,
        columns: Vec<SizedColumn>,
        header_row_styles: Option<GridStyleGroup>,
    ) -> Result<Self, TableError> {
        let TablePageRules {
            page_size,
            table_start_y,
            table_stop_y,
            margin,
        } = table_page_rules;
        let page_width = page_size.width.pt();
        let page_height = page_size.height.pt();
        let (left, right, _top, _bottom) = margin.clone().unwrap_or_default().into();

        let max_width = page_width - left - right;
        let starting_y = table_start_y.unwrap_or(page_height);
        let max_height = table_stop_y.unwrap_or_default();
        let max_grid_size = Size::new(max_width, max_height);

        let mut builder = Self {
            current_y: starting_y,
            start: PdfPosition {
                x: left,
                y: starting_y,
            },
            max_grid_size,
            styles,
            rows: Default::default(),
            columns: Default::default(),
        };
        debug!(?builder, "Grid Layout created");
        if !builder.initialize_columns(columns)? {
            return Err(TableError::HeaderDoesNotFit);
        }
        builder.rows[0].styles = header_row_styles;
        debug!(?builder, "Columns initialized");

        Ok(builder)
    }

    pub fn available_size(&self) -> Size {
        Size::new(self.max_grid_size.width, self.current_y - self.max_grid_size.height)
    }

    /// Calculates the initial column widths/x positions and lays down the header row.
    fn initialize_columns(&mut self, columns: Vec<SizedColumn>) -> Result<bool, TableError> {
        let column_sizes: Vec<Size> = columns.iter().map(|column| column.initial_size).collect();
        self.columns.reserve(columns.len());
        let mut has_auto_fill = false;
        for (index, column) in columns.into_iter().enumerate() {
            let SizedColumn {
                initial_size,
                rules,
            } = column;
            if rules.min_width == Some(ColumnMinWidth::AutoFill) {
                if has_auto_fill {
                    return Err(TableError::MultipleAutoFillColumns);
                }
                has_auto_fill = true;
            }
            let horizontal_padding = self
                .styles
                .cell_content_padding
                .horizontal_value()
                .unwrap_or_default();
            let x = self.start.x
                + column_sizes
                    .iter()
                    .take(index)
                    .map(|size| size.width + horizontal_padding)
                    .sum::<Pt>();
            let width = initial_size.width + horizontal_padding;
            self.columns.push(GridBuilderColumn {
                width,
                x,
                rules,
            });
        }
        self.next_row(&column_sizes, None)
    }

    /// Widens columns whose new content no longer fits, and everything right of them.
    fn recalculate_columns(&mut self, column_sizes: &[Size]) -> Result<(), TableError> {
        if column_sizes.len() != self.columns.len() {
            return Err(TableError::ColumnValueMismatch {
                columns: self.columns.len(),
                values: column_sizes.len(),
                in_row: Some(self.rows.len()),
            });
        }
        let horizontal_padding = self
            .styles
            .cell_content_padding
            .horizontal_value()
            .unwrap_or_default();
        for (index, size) in column_sizes.iter().enumerate() {
            if self.columns[index].width < size.width + horizontal_padding {
                self.recalculate_columns_after(index, column_sizes);
                break;
            }
        }
        Ok(())
    }
    fn recalculate_columns_after(&mut self, column_index: usize, columns: &[Size]) {
        let mut x = if column_index == 0 {
            self.start.x
        } else {
            let prev_column = &self.columns[column_index - 1];
            prev_column.x + prev_column.width
        };
        let horizontal_padding = self
            .styles
            .cell_content_padding
            .horizontal_value()
            .unwrap_or_default();
        for (table_column, size) in self.columns.iter_mut().zip(columns.iter()).skip(column_index) {
            table_column.x = x + horizontal_padding;
            table_column.width = (size.width + horizontal_padding).max(table_column.width);
            x += table_column.width;
        }
    }
    /// Appends a row at `current_y - row_height`. Returns `false` (no row appended)
    /// if the row would run past `max_grid_size.height` -- the caller needs a new page.
    pub fn next_row(
        &mut self,
        column_sizes: &[Size],
        style: Option<GridStyleGroup>,
    ) -> Result<bool, TableError> {
        if self.columns.is_empty() {
            return Err(TableError::GridBuilderColumnsNotInitialized);
        }
        if column_sizes.len() != self.columns.len() {
            error!(?column_sizes, columns = ?self.columns, "Column sizes and columns mismatch");
            return Err(TableError::ColumnValueMismatch {
                columns: self.columns.len(),
                values: column_sizes.len(),
                in_row: Some(self.rows.len()),
            });
        }

        let row_height_base = column_sizes
            .iter()
            .map(|size| size.height)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let Some(row_height_base) = row_height_base else {
            warn!("No row height base");
            return Ok(false);
        };
        let row_height = row_height_base
            + self
                .styles
                .cell_content_padding
                .vertical_value()
                .unwrap_or_default();

        // (0, 0) is the page's bottom-left corner, so a lower row sits at a smaller y.
        let next_y = self.current_y - row_height;
        if next_y < self.max_grid_size.height {
            debug!(?next_y, max_height = ?self.max_grid_size, "row would overflow the page");
            return Ok(false);
        }
        self.current_y = next_y;
        self.recalculate_columns(column_sizes)?;

        self.rows.push(GridBuilderRow {
            y: self.current_y
                + self
                    .styles
                    .cell_content_padding
                    .vertical_value()
                    .unwrap_or_default(),
            content_start_y: self.current_y,
            height: row_height,
            styles: style,
        });
        Ok(true)
    }

    pub fn calculate_full_width(&self) -> Pt {
        self.columns.iter().fold(0f32.pt(), |acc, cell| acc + cell.width)
    }
    pub fn calculate_full_height(&self) -> Pt {
        self.rows.iter().fold(0f32.pt(), |acc, cell| acc + cell.height)
    }
    fn calculate_final_column_width_starting_at(&mut self, start_index: usize) {
        let mut x = if start_index == 0 {
            self.start.x
        } else {
            let prev_column = &self.columns[start_index - 1];
            prev_column.x + prev_column.width
        };
        for table_column in self.columns.iter_mut().skip(start_index) {
            table_column.x = x;
            x += table_column.width;
        }
    }
    fn recalculate_column_x_positions(&mut self) {
        let mut x = self.start.x;
        let horizontal_padding = self
            .styles
            .cell_content_padding
            .horizontal_value()
            .unwrap_or_default();
        for table_column in self.columns.iter_mut() {
            table_column.x = x + horizontal_padding;
            x += table_column.width;
        }
    }
    fn calculate_maximum_available_width(&self) -> Pt {
        self.max_grid_size.width - self.columns.iter().map(|column| column.width).sum::<Pt>()
    }
    /// Applies fixed/percentage/auto-fill column width rules, in that order, over
    /// the content-measured widths `initialize_columns` started from.
    fn apply_column_width_overrides(&mut self) {
        let mut auto_fill_index = None;
        for (index, column) in self.columns.iter_mut().enumerate() {
            if let Some(width_override) = column.rules.min_width {
                match width_override {
                    ColumnMinWidth::Fixed(pt) => {
                        if pt < column.width {
                            error!(?pt, ?column, "fixed width is less than the content width; skipping");
                            continue;
                        }
                        column.width = pt;
                    }
                    ColumnMinWidth::Percentage(percentage) => {
                        let new_width = self.max_grid_size.width * percentage;
                        if new_width < column.width {
                            error!(?new_width, ?column, "percentage width is less than the content width; skipping");
                            continue;
                        }
                        column.width = new_width;
                    }
                    ColumnMinWidth::AutoFill => {
                        auto_fill_index = Some(index);
                    }
                }
            }
        }
        self.recalculate_column_x_positions();
        if let Some(auto_fill_index) = auto_fill_index {
            let available_width = self.calculate_maximum_available_width();
            self.columns[auto_fill_index].width += available_width;
            if auto_fill_index > 0 {
                self.calculate_final_column_width_starting_at(auto_fill_index - 1);
            } else {
                self.calculate_final_column_width_starting_at(0);
            }
        }
    }
    pub fn build(mut self) -> TableLayout {
        self.apply_column_width_overrides();
        let final_size = Size::new(self.calculate_full_width(), self.calculate_full_height());

        let left_padding = self.styles.cell_content_padding.left.unwrap_or_default();
        let horizontal_padding = self
            .styles
            .cell_content_padding
            .horizontal_value()
            .unwrap_or_default();
        let top_padding = self.styles.cell_content_padding.top.unwrap_or_default();
        let vertical_padding = self
            .styles
            .cell_content_padding
            .vertical_value()
            .unwrap_or_default();

        let columns: Vec<GridCell> = self
            .columns
            .into_iter()
            .map(|column| GridCell {
                width: column.width,
                width_no_padding: column.width - horizontal_padding,
                x: column.x - horizontal_padding,
                content_x: column.x - left_padding,
                border_line_x: column.x,
            })
            .collect();
        let rows: Vec<SizedGridRow> = self
            .rows
            .into_iter()
            .map(|row| SizedGridRow {
                content_y: row.content_start_y + top_padding,
                border_line_y: row.y - vertical_padding,
                height: row.height,
                styles: row.styles,
            })
            .collect();

        TableLayout {
            final_size,
            start: self.start,
            styles: self.styles,
            rows,
            columns,
        }
    }
}
