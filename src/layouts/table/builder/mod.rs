mod types;
pub use types::*;

use tracing::{debug, error};

use super::TableError;
use crate::units::Pt;

/// Resolves a set of per-column width rules into the fractional `col_widths`
/// [`super::grid::Table`] stores (each in `0.0..=1.0`, summing to `1.0`).
///
/// `Fixed`/`Percentage` rules are honored first; any column without a rule,
/// and at most one `AutoFill` column, split whatever fraction is left over
/// evenly. Mirrors the old single-page builder's `apply_column_width_overrides`,
/// adapted from an absolute-pt running cursor to the Span Grid's fractional model.
pub fn resolve_column_widths(
    table_width: Pt,
    rules: &[GridColumnRules],
) -> Result<Vec<f32>, TableError> {
    let cols = rules.len();
    let mut widths = vec![None; cols];
    let mut auto_fill_index = None;
    let mut claimed = 0.0f32;

    for (index, rule) in rules.iter().enumerate() {
        match rule.min_width {
            Some(TableColumnMinWidth::Fixed(pt)) => {
                let fraction = (pt / table_width).clamp(0.0, 1.0);
                widths[index] = Some(fraction);
                claimed += fraction;
            }
            Some(TableColumnMinWidth::Percentage(percentage)) => {
                widths[index] = Some(percentage);
                claimed += percentage;
            }
            Some(TableColumnMinWidth::AutoFill) => {
                if auto_fill_index.is_some() {
                    return Err(TableError::MultipleAutoFillColumns);
                }
                auto_fill_index = Some(index);
            }
            None => {}
        }
    }

    let unclaimed_columns = widths.iter().filter(|w| w.is_none()).count();
    let leftover = (1.0 - claimed).max(0.0);
    if let Some(auto_fill_index) = auto_fill_index {
        let even_share = if unclaimed_columns > 1 {
            leftover / (unclaimed_columns) as f32
        } else {
            0.0
        };
        for width in widths.iter_mut() {
            if width.is_none() {
                *width = Some(even_share);
            }
        }
        widths[auto_fill_index] = Some(leftover - even_share * (unclaimed_columns.saturating_sub(1)) as f32);
    } else if unclaimed_columns > 0 {
        let even_share = leftover / unclaimed_columns as f32;
        for width in widths.iter_mut() {
            if width.is_none() {
                *width = Some(even_share);
            }
        }
    }

    let resolved: Vec<f32> = widths.into_iter().map(|w| w.unwrap_or(0.0)).collect();
    let sum: f32 = resolved.iter().sum();
    if (sum - 1.0).abs() > 1e-3 {
        error!(?resolved, sum, "resolved column widths do not sum to one");
    }
    debug!(?resolved, "resolved column widths");
    Ok(resolved)
}
