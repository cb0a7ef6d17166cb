//! Options, breakpoint tables and the per-pass layout context.

use serde::Deserialize;

use crate::error::MasonryError;

/// Viewport metrics used to pick the active breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    /// Current viewport width in CSS pixels.
    pub width_px: f64,
}

impl Viewport {
    /// Create a viewport of the given width.
    pub const fn new(width_px: f64) -> Self {
        Self { width_px }
    }
}

/// A single breakpoint: `value` applies while the viewport is narrower
/// than `threshold`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint<T> {
    /// Viewport width (px) below which `value` applies.
    pub threshold: f64,
    /// Value applied below `threshold`.
    pub value: T,
}

/// An ordered table of breakpoints.
///
/// Order matters under [`BreakpointPolicy::Legacy`]: the first entry whose
/// threshold exceeds the viewport width wins, so tables are expected to be
/// sorted ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints<T> {
    entries: Vec<Breakpoint<T>>,
}

impl<T> Default for Breakpoints<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Breakpoints<T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a breakpoint, keeping insertion order.
    #[must_use]
    pub fn with(mut self, threshold: f64, value: T) -> Self {
        self.push(threshold, value);
        self
    }

    /// Append a breakpoint, keeping insertion order.
    pub fn push(&mut self, threshold: f64, value: T) {
        self.entries.push(Breakpoint { threshold, value });
    }

    /// Breakpoints in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint<T>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(f64, T)> for Breakpoints<T> {
    fn from_iter<I: IntoIterator<Item = (f64, T)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(threshold, value)| Breakpoint { threshold, value })
                .collect(),
        }
    }
}

/// How a breakpoint table is matched against the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakpointPolicy {
    /// First qualifying entry in table order wins; a matched zero counts as
    /// "no match" and falls back to the base value.
    #[default]
    Legacy,
    /// Smallest qualifying threshold wins regardless of table order; a
    /// matched zero is honoured.
    Strict,
}

/// Masonry layout options.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasonryOptions {
    /// Column count when no breakpoint applies.
    pub columns: u32,
    /// Column counts per viewport threshold.
    pub break_at: Breakpoints<u32>,
    /// Horizontal margin between columns (px) when no breakpoint applies.
    pub margin: f64,
    /// Margins per viewport threshold.
    pub margin_breakpoints: Breakpoints<f64>,
    /// Breakpoint matching rules.
    pub policy: BreakpointPolicy,
}

impl Default for MasonryOptions {
    fn default() -> Self {
        Self {
            columns: 4,
            break_at: Breakpoints::new(),
            margin: 0.0,
            margin_breakpoints: Breakpoints::new(),
            policy: BreakpointPolicy::Legacy,
        }
    }
}

impl MasonryOptions {
    /// Check the options for values that would produce ill-defined geometry.
    ///
    /// The resolvers themselves never fail; callers that want typed
    /// failures run this first.
    ///
    /// # Errors
    /// Returns the first problem found, see [`MasonryError`].
    pub fn validate(&self) -> Result<(), MasonryError> {
        if self.columns == 0 {
            return Err(MasonryError::ZeroColumns);
        }
        check_margin(self.margin)?;

        for breakpoint in self.break_at.iter() {
            check_threshold(breakpoint.threshold)?;
            // Legacy tables may carry 0 to mean "use the default".
            if self.policy == BreakpointPolicy::Strict && breakpoint.value == 0 {
                return Err(MasonryError::ZeroBreakpointColumns {
                    threshold: breakpoint.threshold,
                });
            }
        }

        for breakpoint in self.margin_breakpoints.iter() {
            check_threshold(breakpoint.threshold)?;
            check_margin(breakpoint.value)?;
        }

        Ok(())
    }
}

fn check_threshold(threshold: f64) -> Result<(), MasonryError> {
    if threshold.is_finite() {
        Ok(())
    } else {
        Err(MasonryError::InvalidThreshold { threshold })
    }
}

fn check_margin(margin: f64) -> Result<(), MasonryError> {
    if margin.is_finite() && margin >= 0.0 {
        Ok(())
    } else {
        Err(MasonryError::InvalidMargin { margin })
    }
}

/// Everything a single layout pass reads, plus the container it writes.
#[derive(Debug)]
pub struct MasonryContext<'ctx, C: ?Sized> {
    /// Viewport the pass is evaluated against.
    pub viewport: Viewport,
    /// Element whose height tracks the tallest column.
    pub container: &'ctx mut C,
    /// Current height of each column (px).
    pub rows: &'ctx [f64],
    /// Layout options.
    pub options: &'ctx MasonryOptions,
}

impl<'ctx, C: ?Sized> MasonryContext<'ctx, C> {
    pub fn new(
        viewport: Viewport,
        container: &'ctx mut C,
        rows: &'ctx [f64],
        options: &'ctx MasonryOptions,
    ) -> Self {
        Self {
            viewport,
            container,
            rows,
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_defaults() {
        assert_eq!(MasonryOptions::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_zero_columns() {
        let options = MasonryOptions {
            columns: 0,
            ..MasonryOptions::default()
        };
        assert_eq!(options.validate(), Err(MasonryError::ZeroColumns));
    }

    #[test]
    fn zero_breakpoint_columns_only_rejected_when_strict() {
        let mut options = MasonryOptions {
            break_at: Breakpoints::new().with(520.0, 0),
            ..MasonryOptions::default()
        };
        assert_eq!(options.validate(), Ok(()));

        options.policy = BreakpointPolicy::Strict;
        assert_eq!(
            options.validate(),
            Err(MasonryError::ZeroBreakpointColumns { threshold: 520.0 })
        );
    }

    #[test]
    fn validate_rejects_negative_breakpoint_margin() {
        let options = MasonryOptions {
            margin_breakpoints: Breakpoints::new().with(400.0, -4.0),
            ..MasonryOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(MasonryError::InvalidMargin { margin: -4.0 })
        );
    }

    #[test]
    fn validate_rejects_infinite_threshold() {
        let options = MasonryOptions {
            break_at: Breakpoints::new().with(f64::INFINITY, 2),
            ..MasonryOptions::default()
        };
        assert_eq!(
            options.validate(),
            Err(MasonryError::InvalidThreshold {
                threshold: f64::INFINITY
            })
        );
    }
}
