//! Text output for quantities.
//!
//! A quantity prints as its magnitude in base SI units followed by a unit symbol. The symbol is
//! the preferred named unit of the dimension when one is registered (`N`, `Pa`, `m/s`, …) and
//! the composed base-unit form otherwise (`m+2 kg s-2`):
//!
//! ```rust
//! use phys_units_core::units::si::{KILO, METER, NEWTON, SECOND};
//!
//! assert_eq!((1.23 * KILO * METER).to_string(), "1230 m");
//! assert_eq!(format!("{:.1}", 2.0 * NEWTON), "2.0 N");
//! assert_eq!((3.0 * METER * METER / SECOND).to_string(), "3 m+2 s-1");
//! ```
//!
//! Engineering notation (`1.23 km`) is in [`engineering`].

use crate::dimension::{Dimension, DimensionVector};
use crate::literals::{
    Ampere, Candela, Coulomb, Farad, Henry, Hertz, Joule, Kelvin, Lux, Meter, Mole, Newton, Ohm,
    Pascal, Second, Siemens, Sievert, Tesla, Volt, Watt, Weber,
};
use crate::units::dimensions::{MassD, SpeedD};
use crate::{NamedUnit, Quantity};
use core::fmt;

#[cfg(feature = "std")]
pub mod engineering;

#[cfg(feature = "std")]
pub use engineering::{to_engineering_string, Engineering, EngineeringFormat};

// ─────────────────────────────────────────────────────────────────────────────
// Unit registry
// ─────────────────────────────────────────────────────────────────────────────

/// Name and symbol shown for one dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitInfo {
    /// Unit name, e.g. `"newton"`.
    pub name: &'static str,
    /// Unit symbol, e.g. `"N"`.
    pub symbol: &'static str,
    /// Dimension the entry applies to.
    pub dimension: DimensionVector,
}

impl UnitInfo {
    /// Creates an entry.
    pub const fn new(name: &'static str, symbol: &'static str, dimension: DimensionVector) -> Self {
        Self {
            name,
            symbol,
            dimension,
        }
    }

    /// Entry for a named unit.
    pub const fn of<U: NamedUnit>() -> Self {
        Self::new(U::NAME, U::SYMBOL, <U::Dim as Dimension>::VECTOR)
    }
}

/// Preferred units, at most one per dimension. Units sharing a dimension with an entry
/// (becquerel, gray, lumen) print as that entry.
static REGISTRY: [UnitInfo; 24] = [
    UnitInfo::of::<Meter>(),
    UnitInfo::new("kilogram", "kg", MassD::VECTOR),
    UnitInfo::of::<Second>(),
    UnitInfo::of::<Ampere>(),
    UnitInfo::of::<Kelvin>(),
    UnitInfo::of::<Mole>(),
    UnitInfo::of::<Candela>(),
    UnitInfo::of::<Newton>(),
    UnitInfo::of::<Pascal>(),
    UnitInfo::of::<Joule>(),
    UnitInfo::of::<Watt>(),
    UnitInfo::of::<Coulomb>(),
    UnitInfo::of::<Volt>(),
    UnitInfo::of::<Farad>(),
    UnitInfo::of::<Ohm>(),
    UnitInfo::of::<Siemens>(),
    UnitInfo::of::<Weber>(),
    UnitInfo::of::<Tesla>(),
    UnitInfo::of::<Henry>(),
    UnitInfo::of::<Lux>(),
    UnitInfo::of::<Sievert>(),
    UnitInfo::of::<Hertz>(),
    UnitInfo::new("Meter per second", "m/s", SpeedD::VECTOR),
    UnitInfo::new("(dimensionless)", "[]", DimensionVector::DIMENSIONLESS),
];

/// All registered units.
pub fn registry() -> &'static [UnitInfo] {
    &REGISTRY
}

/// Registered unit for `dimension`, if any.
pub fn lookup(dimension: DimensionVector) -> Option<&'static UnitInfo> {
    REGISTRY.iter().find(|info| info.dimension == dimension)
}

/// Displays the symbol of a dimension: the registered symbol, or the composed base-unit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitSymbol(DimensionVector);

impl UnitSymbol {
    /// Symbol of `dimension`.
    pub const fn new(dimension: DimensionVector) -> Self {
        Self(dimension)
    }

    /// Symbol of the dimension type `D`.
    pub const fn of<D: Dimension>() -> Self {
        Self(D::VECTOR)
    }
}

impl fmt::Display for UnitSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match lookup(self.0) {
            Some(info) => f.write_str(info.symbol),
            None => fmt::Display::fmt(&self.0, f),
        }
    }
}

/// Displays the name of a dimension: the registered name, or the composed base-unit form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitName(DimensionVector);

impl UnitName {
    /// Name of `dimension`.
    pub const fn new(dimension: DimensionVector) -> Self {
        Self(dimension)
    }

    /// Name of the dimension type `D`.
    pub const fn of<D: Dimension>() -> Self {
        Self(D::VECTOR)
    }
}

impl fmt::Display for UnitName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match lookup(self.0) {
            Some(info) => f.write_str(info.name),
            None => fmt::Display::fmt(&self.0, f),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity output
// ─────────────────────────────────────────────────────────────────────────────

/// Magnitude (with the formatter's width and precision) followed by a space and the unit symbol.
impl<D: Dimension, T: fmt::Display> fmt::Display for Quantity<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", UnitSymbol::of::<D>())
    }
}

/// Unit name of `q`'s dimension.
#[cfg(feature = "std")]
pub fn to_unit_name<D: Dimension, T>(_q: &Quantity<D, T>) -> String {
    UnitName::of::<D>().to_string()
}

/// Unit symbol of `q`'s dimension.
#[cfg(feature = "std")]
pub fn to_unit_symbol<D: Dimension, T>(_q: &Quantity<D, T>) -> String {
    UnitSymbol::of::<D>().to_string()
}

/// Magnitude of `q` as text.
#[cfg(feature = "std")]
pub fn to_magnitude<D: Dimension, T: fmt::Display>(q: &Quantity<D, T>) -> String {
    q.value.to_string()
}

// ─────────────────────────────────────────────────────────────────────────────
// Prefix lookup
// ─────────────────────────────────────────────────────────────────────────────

/// Factor of an SI prefix symbol (`"k"` is `1e3`, `"u"` is `1e-6`, `"da"` is `1e1`).
///
/// ```rust
/// use phys_units_core::io::prefix;
///
/// assert_eq!(prefix("M").unwrap(), 1e6);
/// assert!(prefix("x").is_err());
/// ```
#[cfg(feature = "std")]
pub fn prefix(symbol: &str) -> crate::Result<crate::Rep> {
    use crate::units::si::*;

    let factor = match symbol {
        "Y" => YOTTA,
        "Z" => ZETTA,
        "E" => EXA,
        "P" => PETA,
        "T" => TERA,
        "G" => GIGA,
        "M" => MEGA,
        "k" => KILO,
        "h" => HECTO,
        "da" => DEKA,
        "d" => DECI,
        "c" => CENTI,
        "m" => MILLI,
        "u" => MICRO,
        "n" => NANO,
        "p" => PICO,
        "f" => FEMTO,
        "a" => ATTO,
        "z" => ZEPTO,
        "y" => YOCTO,
        other => {
            log::debug!("unrecognized SI prefix '{other}'");
            return Err(crate::QuantityError::UnrecognizedPrefix {
                prefix: other.to_owned(),
            });
        }
    };
    Ok(factor)
}
