//! Breakpoint resolution for column counts and margins.

use core::num::FpCategory;

use log::trace;

use crate::types::{BreakpointPolicy, Breakpoints, MasonryOptions, Viewport};

/// Margin between columns for the current viewport.
///
/// A breakpoint applies while the viewport is strictly narrower than its
/// threshold. Falls back to `base_margin` when nothing applies, and under
/// [`BreakpointPolicy::Legacy`] also when the matched margin is `0`.
pub fn column_margin(
    viewport: Viewport,
    base_margin: f64,
    breakpoints: &Breakpoints<f64>,
    policy: BreakpointPolicy,
) -> f64 {
    let margin = resolve(viewport, breakpoints, policy, base_margin, |margin| {
        !matches!(margin.classify(), FpCategory::Zero | FpCategory::Nan)
    });
    trace!(
        "[MASONRY] margin: viewport={:.1} base={base_margin} resolved={margin}",
        viewport.width_px
    );
    margin
}

/// Number of columns for the current viewport.
///
/// Same matching rules as [`column_margin`], over `options.break_at` with
/// `options.columns` as the fallback.
pub fn column_count(viewport: Viewport, options: &MasonryOptions) -> u32 {
    let columns = resolve(
        viewport,
        &options.break_at,
        options.policy,
        options.columns,
        |columns| columns != 0,
    );
    trace!(
        "[MASONRY] columns: viewport={:.1} default={} resolved={columns}",
        viewport.width_px,
        options.columns
    );
    columns
}

fn resolve<T: Copy>(
    viewport: Viewport,
    table: &Breakpoints<T>,
    policy: BreakpointPolicy,
    base: T,
    is_set: impl Fn(T) -> bool,
) -> T {
    let width = viewport.width_px;
    match policy {
        BreakpointPolicy::Legacy => table
            .iter()
            .find(|breakpoint| width < breakpoint.threshold)
            .map(|breakpoint| breakpoint.value)
            .filter(|value| is_set(*value))
            .unwrap_or(base),
        BreakpointPolicy::Strict => table
            .iter()
            .filter(|breakpoint| width < breakpoint.threshold)
            .min_by(|lhs, rhs| lhs.threshold.total_cmp(&rhs.threshold))
            .map_or(base, |breakpoint| breakpoint.value),
    }
}
