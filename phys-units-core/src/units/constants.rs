//! Physical constants, as tabulated in NIST Special Publication 811.
//!
//! ```rust
//! use phys_units_core::units::constants::{E, EV};
//! use phys_units_core::units::si::VOLT;
//!
//! let per_volt: f64 = EV / (E * VOLT);
//! assert!((per_volt - 1.0).abs() < 1e-6);
//! ```

use crate::units::dimensions::*;
use crate::units::si::*;
use crate::{Product, Quantity, Reciprocal};

/// Standard acceleration of free fall, g<sub>n</sub>.
pub const G_N: Quantity<AccelerationD> = METER.per(SECOND.squared()).scaled(9.80665);

/// Avogadro constant, N<sub>A</sub>.
pub const N_A: Quantity<Reciprocal<AmountOfSubstanceD>> = MOLE.recip().scaled(6.02214199e23);

/// Electronvolt.
pub const EV: Quantity<EnergyD> = JOULE.scaled(1.60217733e-19);

/// Elementary charge, e.
pub const E: Quantity<ElectricChargeD> = COULOMB.scaled(1.602176462e-19);

/// Planck constant, h.
pub const H: Quantity<Product<EnergyD, TimeIntervalD>> = JOULE.times(SECOND).scaled(6.62606876e-34);

/// Speed of light in vacuum, c.
pub const C: Quantity<SpeedD> = METER.per(SECOND).scaled(299792458.0);

/// Unified atomic mass unit, u.
pub const U: Quantity<MassD> = KILOGRAM.scaled(1.6605402e-27);
