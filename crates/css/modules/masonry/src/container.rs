//! Container height after a placement pass.

use log::debug;

use crate::types::MasonryContext;
use crate::value::CssLength;

/// The element wrapping the masonry columns.
pub trait Container {
    /// Write the rendered height style.
    fn set_height(&mut self, height: &CssLength);
}

/// A container backed by a plain inline-style record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InlineStyle {
    /// Last height written, as CSS text.
    pub height: Option<String>,
}

impl Container for InlineStyle {
    fn set_height(&mut self, height: &CssLength) {
        self.height = Some(height.to_string());
    }
}

/// Size the container to the tallest column.
///
/// Scans `ctx.rows` and writes `<max>px`, or `0px` when there are no rows.
/// Non-numeric heights never win the comparison.
pub fn set_container_height<C: Container + ?Sized>(ctx: &mut MasonryContext<'_, C>) {
    let tallest = ctx
        .rows
        .iter()
        .rev()
        .fold(0.0, |largest, &row| if row > largest { row } else { largest });

    debug!(
        "[MASONRY] container height: rows={} tallest={tallest}",
        ctx.rows.len()
    );
    ctx.container.set_height(&CssLength::Px(tallest));
}
