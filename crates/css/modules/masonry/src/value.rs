//! CSS length values produced by the column calculators.

use core::fmt;
use core::num::FpCategory;

/// Operator inside a `calc()` expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcSign {
    Plus,
    Minus,
}

/// A CSS length as emitted into an inline style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CssLength {
    /// Unitless number (`0`, or a raw percentage with margins excluded).
    Number(f64),
    /// `<n>%`
    Percent(f64),
    /// `<n>px`
    Px(f64),
    /// `calc(<percent>% ± <px>px)`
    Calc {
        percent: f64,
        sign: CalcSign,
        px: f64,
    },
}

impl CssLength {
    /// Evaluate against a percentage basis, usually the container width.
    ///
    /// Unitless numbers are taken as pixels, the way `0` is accepted for a
    /// length.
    pub fn to_px(self, basis_px: f64) -> f64 {
        match self {
            Self::Number(px) | Self::Px(px) => px,
            Self::Percent(percent) => basis_px * percent / 100.0,
            Self::Calc { percent, sign, px } => {
                let from_percent = basis_px * percent / 100.0;
                match sign {
                    CalcSign::Plus => from_percent + px,
                    CalcSign::Minus => from_percent - px,
                }
            }
        }
    }

    /// True for a unitless zero, the offset of the first column.
    pub fn is_zero(self) -> bool {
        matches!(self, Self::Number(value) if value.classify() == FpCategory::Zero)
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(formatter, "{}", JsNumber(value)),
            Self::Percent(value) => write!(formatter, "{}%", JsNumber(value)),
            Self::Px(value) => write!(formatter, "{}px", JsNumber(value)),
            Self::Calc { percent, sign, px } => {
                let op = match sign {
                    CalcSign::Plus => '+',
                    CalcSign::Minus => '-',
                };
                write!(
                    formatter,
                    "calc({}% {op} {}px)",
                    JsNumber(percent),
                    JsNumber(px)
                )
            }
        }
    }
}

/// Formats an `f64` the way script string conversion does: shortest
/// round-trip digits, no `-0`, spelled-out non-finite values, and exponent
/// notation (`2e-7`, `1e+21`) below `1e-6` or from `1e21` up.
struct JsNumber(f64);

impl fmt::Display for JsNumber {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        match value.classify() {
            FpCategory::Nan => formatter.write_str("NaN"),
            FpCategory::Infinite if value.is_sign_negative() => formatter.write_str("-Infinity"),
            FpCategory::Infinite => formatter.write_str("Infinity"),
            FpCategory::Zero => formatter.write_str("0"),
            FpCategory::Normal | FpCategory::Subnormal => {
                let magnitude = value.abs();
                if !(1e-6..1e21).contains(&magnitude) {
                    // `{:e}` already gives shortest digits; only the sign of a
                    // positive exponent is missing.
                    let scientific = format!("{value:e}");
                    return match scientific.split_once('e') {
                        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                            write!(formatter, "{mantissa}e+{exponent}")
                        }
                        _ => formatter.write_str(&scientific),
                    };
                }
                write!(formatter, "{value}")
            }
        }
    }
}
