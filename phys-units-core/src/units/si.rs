//! SI units.
//!
//! The seven base units tie magnitudes to the real world; every other unit is a `const`
//! expression over them. Prefixes and dimensionless units (radian, steradian, angles) are bare
//! [`Rep`] values, so they combine with units by plain multiplication:
//!
//! ```rust
//! use phys_units_core::units::si::{KILO, METER, MILLI, SECOND};
//!
//! let track = 1.5 * KILO * METER;
//! let lap = 250.0 * MILLI * SECOND;
//! assert_eq!((track / lap).to(METER / SECOND), 6000.0);
//! ```
//!
//! Values follow NIST Special Publication 811.

use crate::units::dimensions::*;
use crate::{Magnitude, Quantity, Rep};

// ─────────────────────────────────────────────────────────────────────────────
// Base units
// ─────────────────────────────────────────────────────────────────────────────

/// Metre.
pub const METER: Quantity<LengthD> = Quantity::new(Magnitude, 1.0);
/// Kilogram.
pub const KILOGRAM: Quantity<MassD> = Quantity::new(Magnitude, 1.0);
/// Second.
pub const SECOND: Quantity<TimeIntervalD> = Quantity::new(Magnitude, 1.0);
/// Ampere.
pub const AMPERE: Quantity<ElectricCurrentD> = Quantity::new(Magnitude, 1.0);
/// Kelvin.
pub const KELVIN: Quantity<ThermodynamicTemperatureD> = Quantity::new(Magnitude, 1.0);
/// Mole.
pub const MOLE: Quantity<AmountOfSubstanceD> = Quantity::new(Magnitude, 1.0);
/// Candela.
pub const CANDELA: Quantity<LuminousIntensityD> = Quantity::new(Magnitude, 1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Prefixes
// ─────────────────────────────────────────────────────────────────────────────

/// 10^24.
pub const YOTTA: Rep = 1e24;
/// 10^21.
pub const ZETTA: Rep = 1e21;
/// 10^18.
pub const EXA: Rep = 1e18;
/// 10^15.
pub const PETA: Rep = 1e15;
/// 10^12.
pub const TERA: Rep = 1e12;
/// 10^9.
pub const GIGA: Rep = 1e9;
/// 10^6.
pub const MEGA: Rep = 1e6;
/// 10^3.
pub const KILO: Rep = 1e3;
/// 10^2.
pub const HECTO: Rep = 1e2;
/// 10^1.
pub const DEKA: Rep = 1e1;
/// 10^-1.
pub const DECI: Rep = 1e-1;
/// 10^-2.
pub const CENTI: Rep = 1e-2;
/// 10^-3.
pub const MILLI: Rep = 1e-3;
/// 10^-6.
pub const MICRO: Rep = 1e-6;
/// 10^-9.
pub const NANO: Rep = 1e-9;
/// 10^-12.
pub const PICO: Rep = 1e-12;
/// 10^-15.
pub const FEMTO: Rep = 1e-15;
/// 10^-18.
pub const ATTO: Rep = 1e-18;
/// 10^-21.
pub const ZEPTO: Rep = 1e-21;
/// 10^-24.
pub const YOCTO: Rep = 1e-24;

/// 2^10.
pub const KIBI: Rep = 1024.0;
/// 2^20.
pub const MEBI: Rep = 1024.0 * KIBI;
/// 2^30.
pub const GIBI: Rep = 1024.0 * MEBI;
/// 2^40.
pub const TEBI: Rep = 1024.0 * GIBI;
/// 2^50.
pub const PEBI: Rep = 1024.0 * TEBI;
/// 2^60.
pub const EXBI: Rep = 1024.0 * PEBI;
/// 2^70.
pub const ZEBI: Rep = 1024.0 * EXBI;
/// 2^80.
pub const YOBI: Rep = 1024.0 * ZEBI;

// ─────────────────────────────────────────────────────────────────────────────
// Handy values
// ─────────────────────────────────────────────────────────────────────────────

/// π.
pub const PI: Rep = core::f64::consts::PI as Rep;
/// 1/100.
pub const PERCENT: Rep = 1.0 / 100.0;

/// Gram. Not approved for use alone, but needed with prefixes.
pub const GRAM: Quantity<MassD> = KILOGRAM.scaled(1e-3);

// ─────────────────────────────────────────────────────────────────────────────
// Derived units (SP811)
// ─────────────────────────────────────────────────────────────────────────────

/// Radian.
pub const RADIAN: Rep = 1.0;
/// Steradian.
pub const STERADIAN: Rep = 1.0;
/// Newton.
pub const NEWTON: Quantity<ForceD> = METER.times(KILOGRAM).per(SECOND.squared());
/// Pascal.
pub const PASCAL: Quantity<PressureD> = NEWTON.per(METER.squared());
/// Joule.
pub const JOULE: Quantity<EnergyD> = NEWTON.times(METER);
/// Watt.
pub const WATT: Quantity<PowerD> = JOULE.per(SECOND);
/// Coulomb.
pub const COULOMB: Quantity<ElectricChargeD> = SECOND.times(AMPERE);
/// Volt.
pub const VOLT: Quantity<ElectricPotentialD> = WATT.per(AMPERE);
/// Farad.
pub const FARAD: Quantity<CapacitanceD> = COULOMB.per(VOLT);
/// Ohm.
pub const OHM: Quantity<ElectricResistanceD> = VOLT.per(AMPERE);
/// Siemens.
pub const SIEMENS: Quantity<ElectricConductanceD> = AMPERE.per(VOLT);
/// Weber.
pub const WEBER: Quantity<MagneticFluxD> = VOLT.times(SECOND);
/// Tesla.
pub const TESLA: Quantity<MagneticFluxDensityD> = WEBER.per(METER.squared());
/// Henry.
pub const HENRY: Quantity<InductanceD> = WEBER.per(AMPERE);
/// Degree Celsius, as a temperature interval.
pub const DEGREE_CELSIUS: Quantity<ThermodynamicTemperatureD> = KELVIN;
/// Lumen.
pub const LUMEN: Quantity<LuminousFluxD> = CANDELA.scaled(STERADIAN);
/// Lux.
pub const LUX: Quantity<IlluminanceD> = LUMEN.per(METER).per(METER);
/// Becquerel.
pub const BECQUEREL: Quantity<ActivityOfANuclideD> = SECOND.recip();
/// Gray.
pub const GRAY: Quantity<AbsorbedDoseD> = JOULE.per(KILOGRAM);
/// Sievert.
pub const SIEVERT: Quantity<DoseEquivalentD> = JOULE.per(KILOGRAM);
/// Hertz.
pub const HERTZ: Quantity<FrequencyD> = SECOND.recip();

// ─────────────────────────────────────────────────────────────────────────────
// Units accepted for use with the SI (SP811)
// ─────────────────────────────────────────────────────────────────────────────

/// Ångström.
pub const ANGSTROM: Quantity<LengthD> = METER.scaled(1e-10);
/// Are.
pub const ARE: Quantity<AreaD> = METER.squared().scaled(1e2);
/// Bar.
pub const BAR: Quantity<PressureD> = PASCAL.scaled(1e5);
/// Barn.
pub const BARN: Quantity<AreaD> = METER.squared().scaled(1e-28);
/// Curie.
pub const CURIE: Quantity<ActivityOfANuclideD> = BECQUEREL.scaled(3.7e10);
/// Day.
pub const DAY: Quantity<TimeIntervalD> = SECOND.scaled(86400.0);
/// Degree of plane angle.
pub const DEGREE_ANGLE: Rep = PI / 180.0;
/// Gal.
pub const GAL: Quantity<AccelerationD> = METER.per(SECOND.squared()).scaled(1e-2);
/// Hectare.
pub const HECTARE: Quantity<AreaD> = METER.squared().scaled(1e4);
/// Hour.
pub const HOUR: Quantity<TimeIntervalD> = SECOND.scaled(3600.0);
/// Knot, one nautical mile per hour.
pub const KNOT: Quantity<SpeedD> = METER.per(SECOND).scaled(1852.0 / 3600.0);
/// Liter.
pub const LITER: Quantity<VolumeD> = METER.cubed().scaled(1e-3);
/// Minute.
pub const MINUTE: Quantity<TimeIntervalD> = SECOND.scaled(60.0);
/// Minute of plane angle.
pub const MINUTE_ANGLE: Rep = PI / 10800.0;
/// Nautical mile.
pub const MILE_NAUTICAL: Quantity<LengthD> = METER.scaled(1852.0);
/// Rad (absorbed dose).
pub const RAD: Quantity<AbsorbedDoseD> = GRAY.scaled(1e-2);
/// Rem.
pub const REM: Quantity<DoseEquivalentD> = SIEVERT.scaled(1e-2);
/// Röntgen.
pub const ROENTGEN: Quantity<ExposureD> = COULOMB.per(KILOGRAM).scaled(2.58e-4);
/// Second of plane angle.
pub const SECOND_ANGLE: Rep = PI / 648000.0;
/// Metric ton.
pub const TON_METRIC: Quantity<MassD> = KILOGRAM.scaled(1e3);

// ─────────────────────────────────────────────────────────────────────────────
// Alternate spellings
// ─────────────────────────────────────────────────────────────────────────────

/// Metre.
pub const METRE: Quantity<LengthD> = METER;
/// Litre.
pub const LITRE: Quantity<VolumeD> = LITER;
/// 10^1.
pub const DECA: Rep = DEKA;
/// Tonne.
pub const TONNE: Quantity<MassD> = TON_METRIC;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn base_units_have_unit_magnitude() {
        assert_eq!(METER.magnitude(), 1.0);
        assert_eq!(KILOGRAM.magnitude(), 1.0);
        assert_eq!(SECOND.magnitude(), 1.0);
        assert_eq!(AMPERE.magnitude(), 1.0);
        assert_eq!(KELVIN.magnitude(), 1.0);
        assert_eq!(MOLE.magnitude(), 1.0);
        assert_eq!(CANDELA.magnitude(), 1.0);
    }

    #[test]
    fn derived_units_agree_with_operators() {
        assert_eq!(NEWTON, METER * KILOGRAM / (SECOND * SECOND));
        assert_eq!(PASCAL, NEWTON / (METER * METER));
        assert_eq!(WATT, JOULE / SECOND);
        assert_eq!(OHM, VOLT / AMPERE);
        assert_eq!(HERTZ, 1.0 / SECOND);
        assert_eq!(LUX, LUMEN / METER / METER);
    }

    #[test]
    fn gram_and_binary_prefixes() {
        assert_relative_eq!(GRAM.magnitude(), 1e-3);
        assert_eq!(MEBI, 1_048_576.0);
        assert_eq!(YOBI, 1024f64.powi(8) as Rep);
        assert_eq!(PERCENT, 0.01);
    }

    #[test]
    fn accepted_units() {
        assert_eq!(HOUR.to(MINUTE), 60.0);
        assert_eq!(DAY.to(HOUR), 24.0);
        assert_relative_eq!(LITER.to(METER.cubed()), 1e-3);
        assert_relative_eq!(KNOT.to(MILE_NAUTICAL / HOUR), 1.0);
        assert_relative_eq!(180.0 * DEGREE_ANGLE, PI, max_relative = 1e-12);
        assert_relative_eq!(60.0 * SECOND_ANGLE, MINUTE_ANGLE, max_relative = 1e-12);
        assert_eq!(TONNE, 1000.0 * KILOGRAM);
    }
}
