//! Engineering notation.
//!
//! A value is scaled into `[1, 1000)` and written with a fixed number of significant digits,
//! followed by the SI prefix (`1.23 km`) or, in exponential form, the power of ten (`1.23e3 m`).
//! Degrees beyond the prefix table (`10^±27` and up) always use the exponent.
//!
//! ```rust
//! use phys_units_core::io::engineering::EngineeringFormat;
//! use phys_units_core::units::si::{METER, MILLI, SECOND};
//!
//! assert_eq!((1230.0 * METER).engineering().to_string(), "1.23 km");
//! assert_eq!((100.0 * MILLI * SECOND).engineering().to_string(), "100 ms");
//!
//! let exact = EngineeringFormat::new().digits(5).exponential(true);
//! assert_eq!((1234.5 * METER).engineering_with(exact).to_string(), "1.2345e3 m");
//! ```

use super::UnitSymbol;
use crate::dimension::Dimension;
use crate::Quantity;
use core::fmt;

const PREFIXES: [[&str; 9]; 2] = [
    ["", "m", "u", "n", "p", "f", "a", "z", "y"],
    ["", "k", "M", "G", "T", "P", "E", "Z", "Y"],
];

const EXPONENTS: [[&str; 9]; 2] = [
    ["e0", "e-3", "e-6", "e-9", "e-12", "e-15", "e-18", "e-21", "e-24"],
    ["e0", "e3", "e6", "e9", "e12", "e15", "e18", "e21", "e24"],
];

/// Formatting options for engineering notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineeringFormat {
    /// Significant digits.
    pub digits: usize,
    /// Write `e3` instead of `k`.
    pub exponential: bool,
    /// Write a `+` before positive values.
    pub showpos: bool,
}

impl EngineeringFormat {
    /// Three digits, SI prefixes, no forced sign.
    pub const fn new() -> Self {
        Self {
            digits: 3,
            exponential: false,
            showpos: false,
        }
    }

    /// Sets the number of significant digits.
    pub const fn digits(mut self, digits: usize) -> Self {
        self.digits = digits;
        self
    }

    /// Selects exponential form.
    pub const fn exponential(mut self, exponential: bool) -> Self {
        self.exponential = exponential;
        self
    }

    /// Forces a sign on positive values.
    pub const fn showpos(mut self, showpos: bool) -> Self {
        self.showpos = showpos;
        self
    }
}

impl Default for EngineeringFormat {
    fn default() -> Self {
        Self::new()
    }
}

/// Power of 1000 of `value`.
fn degree_of(value: f64) -> i32 {
    if value == 0.0 {
        0
    } else {
        (value.abs().log10() / 3.0).floor() as i32
    }
}

/// Decimals needed for `digits` significant digits of `scaled`.
fn precision(scaled: f64, digits: usize) -> usize {
    let digits = digits as f64;
    let precision = if scaled == 0.0 {
        digits - 1.0
    } else {
        digits - scaled.abs().log10() - 2.0 * f64::EPSILON
    };
    if precision > 0.0 {
        precision as usize
    } else {
        0
    }
}

fn write_engineering(
    out: &mut dyn fmt::Write,
    value: f64,
    format: &EngineeringFormat,
    unit: &str,
) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("NaN");
    }
    if value.is_infinite() {
        return out.write_str("INFINITE");
    }

    let degree = degree_of(value);
    let scaled = if degree >= 0 {
        value / 1000f64.powi(degree)
    } else {
        value * 1000f64.powi(-degree)
    };
    let precision = precision(scaled, format.digits);

    if format.showpos {
        write!(out, "{scaled:+.precision$}")?;
    } else {
        write!(out, "{scaled:.precision$}")?;
    }

    let mut exponential = format.exponential;
    let index = degree.unsigned_abs() as usize;
    let table = if exponential { &EXPONENTS } else { &PREFIXES };
    if index < table[0].len() {
        if !exponential && degree != 0 {
            out.write_str(" ")?;
        }
        out.write_str(table[usize::from(degree >= 0)][index])?;
    } else {
        exponential = true;
        write!(out, "e{}", 3 * degree)?;
    }

    if (degree == 0 || exponential) && !unit.is_empty() {
        out.write_str(" ")?;
    }
    if unit.contains(['+', '-', ' ']) {
        write!(out, "({unit})")
    } else {
        out.write_str(unit)
    }
}

/// Formats `value` in engineering notation, optionally followed by `unit`.
///
/// Units containing `+`, `-` or a space are bracketed. NaN prints as `NaN` and infinities as
/// `INFINITE`, without the unit.
///
/// ```rust
/// use phys_units_core::io::engineering::{to_engineering_string, EngineeringFormat};
///
/// let format = EngineeringFormat::default();
/// assert_eq!(to_engineering_string(0.0047, &format, "A"), "4.70 mA");
/// assert_eq!(to_engineering_string(1500.0, &format, "m+2"), "1.50 k(m+2)");
/// assert_eq!(to_engineering_string(f64::NAN, &format, "m"), "NaN");
/// ```
pub fn to_engineering_string(value: f64, format: &EngineeringFormat, unit: &str) -> String {
    EngineeringText {
        value,
        format,
        unit,
    }
    .to_string()
}

struct EngineeringText<'a> {
    value: f64,
    format: &'a EngineeringFormat,
    unit: &'a str,
}

impl fmt::Display for EngineeringText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_engineering(f, self.value, self.format, self.unit)
    }
}

/// A quantity displayed in engineering notation, from [`Quantity::engineering`].
#[derive(Clone, Copy, Debug)]
pub struct Engineering {
    value: f64,
    format: EngineeringFormat,
    unit: UnitSymbol,
}

impl fmt::Display for Engineering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit.to_string();
        write_engineering(f, self.value, &self.format, &unit)
    }
}

impl<D: Dimension, T: Copy + Into<f64>> Quantity<D, T> {
    /// Displays the quantity in engineering notation with the default format.
    pub fn engineering(&self) -> Engineering {
        self.engineering_with(EngineeringFormat::default())
    }

    /// Displays the quantity in engineering notation with `format`.
    pub fn engineering_with(&self, format: EngineeringFormat) -> Engineering {
        Engineering {
            value: self.value.into(),
            format,
            unit: UnitSymbol::of::<D>(),
        }
    }
}
