//! Column widths and left offsets.
//!
//! ## Algorithm
//!
//! ```text
//! n = column count, m = column margin
//! width  = 100% / n - (n - 1) * m / n          (n > 1)
//! left_k = k * 100% / n + k * (m - (n - 1) * m / n)
//! ```
//!
//! Every column gives up `(n - 1) * m / n` pixels so that `n` columns and
//! `n - 1` gaps exactly fill the container.

use log::debug;

use crate::breakpoints::{column_count, column_margin};
use crate::error::MasonryError;
use crate::types::{MasonryContext, MasonryOptions, Viewport};
use crate::value::{CalcSign, CssLength};

/// Width and left offset of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnGeometry {
    /// Zero-based column index.
    pub index: usize,
    /// Value for the column's `width`.
    pub width: CssLength,
    /// Value for the column's `left`.
    pub left: CssLength,
}

/// Resolved inputs shared by the width and offset formulas.
#[derive(Clone, Copy, Debug)]
struct ColumnMetrics {
    count: u32,
    columns: f64,
    margin: f64,
}

impl ColumnMetrics {
    fn resolve(viewport: Viewport, options: &MasonryOptions) -> Self {
        let count = column_count(viewport, options);
        Self {
            count,
            columns: f64::from(count),
            margin: column_margin(
                viewport,
                options.margin,
                &options.margin_breakpoints,
                options.policy,
            ),
        }
    }

    /// Pixels each column gives up to the gaps.
    fn margin_per_column(self) -> f64 {
        (self.columns - 1.0) * self.margin / self.columns
    }

    /// Column width as a percentage of the container, margins excluded.
    fn width_percent(self) -> f64 {
        100.0 / self.columns
    }
}

/// Width of a single column.
///
/// With `margins_included`, returns `100%` for a single column and
/// `calc(<width>% - <margin>px)` otherwise. Without it, returns the raw
/// percentage as a unitless number.
pub fn column_width(
    viewport: Viewport,
    options: &MasonryOptions,
    margins_included: bool,
) -> CssLength {
    let metrics = ColumnMetrics::resolve(viewport, options);
    let margin = metrics.margin_per_column();
    let width = metrics.width_percent();

    if !margins_included {
        return CssLength::Number(width);
    }

    if metrics.count == 1 {
        return CssLength::Percent(100.0);
    }

    CssLength::Calc {
        percent: width,
        sign: CalcSign::Minus,
        px: margin,
    }
}

/// Left offset of the zero-based column `col`.
///
/// The first column sits at `0`; later columns are offset by the widths
/// and margins of every column before them.
pub fn column_offset<C: ?Sized>(ctx: &MasonryContext<'_, C>, col: usize) -> CssLength {
    left_offset(ctx.viewport, ctx.options, col)
}

/// [`column_offset`] after validating the options and the column index.
///
/// # Errors
/// Returns any [`MasonryOptions::validate`] failure, or
/// [`MasonryError::ColumnOutOfRange`] when `col` is not a current column.
pub fn checked_column_offset<C: ?Sized>(
    ctx: &MasonryContext<'_, C>,
    col: usize,
) -> Result<CssLength, MasonryError> {
    ctx.options.validate()?;

    let columns = column_count(ctx.viewport, ctx.options);
    let in_range = u32::try_from(col).is_ok_and(|index| index < columns);
    if !in_range {
        return Err(MasonryError::ColumnOutOfRange { col, columns });
    }

    Ok(column_offset(ctx, col))
}

/// Width and offset for every column at the current viewport.
pub fn column_geometry(viewport: Viewport, options: &MasonryOptions) -> Vec<ColumnGeometry> {
    let columns = column_count(viewport, options);
    let width = column_width(viewport, options, true);

    let geometry: Vec<ColumnGeometry> = (0..columns as usize)
        .map(|index| ColumnGeometry {
            index,
            width,
            left: left_offset(viewport, options, index),
        })
        .collect();

    tracing::debug!(
        viewport = viewport.width_px,
        columns,
        width = %width,
        "resolved masonry column geometry"
    );
    geometry
}

fn left_offset(viewport: Viewport, options: &MasonryOptions, col: usize) -> CssLength {
    if col == 0 {
        return CssLength::Number(0.0);
    }

    let metrics = ColumnMetrics::resolve(viewport, options);
    let preceding = col as f64;
    let margin = (metrics.margin - metrics.margin_per_column()) * preceding;
    let width = metrics.width_percent() * preceding;

    debug!("[MASONRY] left offset: col={col} width={width}% margin={margin}px");

    CssLength::Calc {
        percent: width,
        sign: CalcSign::Plus,
        px: margin,
    }
}
