//! Named units.

use crate::dimension::Dimension;
use crate::{Magnitude, Quantity, Rep};

/// A unit with a name and a symbol, implemented by the marker types in
/// [`literals`](crate::literals) through `#[derive(Unit)]`.
///
/// * `Dim` is the dimension the unit measures.
/// * `FACTOR` is the size of one unit in base SI units (`1e-3` for the gram).
/// * `NAME` and `SYMBOL` are the printable forms used by the text output.
pub trait NamedUnit {
    /// Dimension measured by this unit.
    type Dim: Dimension;

    /// Unit name, e.g. `"newton"`.
    const NAME: &'static str;

    /// Unit symbol, e.g. `"N"`.
    const SYMBOL: &'static str;

    /// Size of one unit in base SI units.
    const FACTOR: Rep;

    /// One of this unit, as a quantity.
    const UNIT: Quantity<Self::Dim> = Quantity::new(Magnitude, Self::FACTOR);
}
