//! Prefixed constructors for the SI units.
//!
//! Every unit below gets one `const fn` per SI prefix, from `Y` (yotta) to `y` (yocto), taking the
//! magnitude in that unit:
//!
//! ```rust
//! use phys_units_core::literals::{kg, km, ms, kN, uF};
//! use phys_units_core::units::si::{FARAD, KILOGRAM, METER, NEWTON, SECOND};
//!
//! assert_eq!(km(1.5), 1500.0 * METER);
//! assert_eq!(ms(250.0), 0.25 * SECOND);
//! assert_eq!(kN(2.0), 2000.0 * NEWTON);
//! assert!((kg(3.0).to(KILOGRAM) - 3.0).abs() < 1e-12);
//! assert!((uF(4.7).to(FARAD) - 4.7e-6).abs() < 1e-18);
//! ```
//!
//! Mass is built on the gram, so `kg(1.0)` is one kilogram. The atto-second constructor is a Rust
//! keyword and is spelled `r#as`.

use crate::units::dimensions::*;
use phys_units_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Base units
// ─────────────────────────────────────────────────────────────────────────────

/// Gram.
#[derive(Unit)]
#[unit(name = "gram", symbol = "g", dimension = MassD, factor = 1e-3)]
pub enum Gram {}

/// Metre.
#[derive(Unit)]
#[unit(name = "meter", symbol = "m", dimension = LengthD)]
pub enum Meter {}

/// Second.
#[derive(Unit)]
#[unit(name = "second", symbol = "s", dimension = TimeIntervalD)]
pub enum Second {}

/// Ampere.
#[derive(Unit)]
#[unit(name = "ampere", symbol = "A", dimension = ElectricCurrentD)]
pub enum Ampere {}

/// Kelvin.
#[derive(Unit)]
#[unit(name = "kelvin", symbol = "K", dimension = ThermodynamicTemperatureD)]
pub enum Kelvin {}

/// Mole.
#[derive(Unit)]
#[unit(name = "mole", symbol = "mol", dimension = AmountOfSubstanceD)]
pub enum Mole {}

/// Candela.
#[derive(Unit)]
#[unit(name = "candela", symbol = "cd", dimension = LuminousIntensityD)]
pub enum Candela {}

// ─────────────────────────────────────────────────────────────────────────────
// Derived units
// ─────────────────────────────────────────────────────────────────────────────

/// Newton.
#[derive(Unit)]
#[unit(name = "newton", symbol = "N", dimension = ForceD)]
pub enum Newton {}

/// Pascal.
#[derive(Unit)]
#[unit(name = "pascal", symbol = "Pa", dimension = PressureD)]
pub enum Pascal {}

/// Joule.
#[derive(Unit)]
#[unit(name = "joule", symbol = "J", dimension = EnergyD)]
pub enum Joule {}

/// Watt.
#[derive(Unit)]
#[unit(name = "watt", symbol = "W", dimension = PowerD)]
pub enum Watt {}

/// Coulomb.
#[derive(Unit)]
#[unit(name = "coulomb", symbol = "C", dimension = ElectricChargeD)]
pub enum Coulomb {}

/// Volt.
#[derive(Unit)]
#[unit(name = "volt", symbol = "V", dimension = ElectricPotentialD)]
pub enum Volt {}

/// Farad.
#[derive(Unit)]
#[unit(name = "farad", symbol = "F", dimension = CapacitanceD)]
pub enum Farad {}

/// Ohm.
#[derive(Unit)]
#[unit(name = "ohm", symbol = "Ohm", dimension = ElectricResistanceD)]
pub enum Ohm {}

/// Siemens.
#[derive(Unit)]
#[unit(name = "siemens", symbol = "S", dimension = ElectricConductanceD)]
pub enum Siemens {}

/// Weber.
#[derive(Unit)]
#[unit(name = "weber", symbol = "Wb", dimension = MagneticFluxD)]
pub enum Weber {}

/// Tesla.
#[derive(Unit)]
#[unit(name = "tesla", symbol = "T", dimension = MagneticFluxDensityD)]
pub enum Tesla {}

/// Henry.
#[derive(Unit)]
#[unit(name = "henry", symbol = "H", dimension = InductanceD)]
pub enum Henry {}

/// Lumen. The steradian is dimensionless, so the lumen has the dimension of the candela.
#[derive(Unit)]
#[unit(name = "lumen", symbol = "lm", dimension = LuminousFluxD)]
pub enum Lumen {}

/// Lux.
#[derive(Unit)]
#[unit(name = "lux", symbol = "lx", dimension = IlluminanceD)]
pub enum Lux {}

/// Becquerel.
#[derive(Unit)]
#[unit(name = "becquerel", symbol = "Bq", dimension = ActivityOfANuclideD)]
pub enum Becquerel {}

/// Gray.
#[derive(Unit)]
#[unit(name = "gray", symbol = "Gy", dimension = AbsorbedDoseD)]
pub enum Gray {}

/// Sievert.
#[derive(Unit)]
#[unit(name = "sievert", symbol = "Sv", dimension = DoseEquivalentD)]
pub enum Sievert {}

/// Hertz.
#[derive(Unit)]
#[unit(name = "hertz", symbol = "Hz", dimension = FrequencyD)]
pub enum Hertz {}
