//! Units outside the SI.
//!
//! Conversion factors for legacy, customary and CGS units, as tabulated in NIST Special
//! Publication 811 (Appendix B). Most factors carry seven significant digits.
//!
//! ```rust
//! use phys_units_core::units::other::{FOOT, INCH, MILE, YARD};
//!
//! assert!((FOOT.to(INCH) - 12.0).abs() < 1e-12);
//! assert!((MILE.to(YARD) - 1760.0).abs() < 1e-9);
//! ```

use crate::units::dimensions::*;
use crate::units::si::*;
use crate::{Product, Quantity, Quotient, Reciprocal, Rep};

/// Abampere.
pub const ABAMPERE: Quantity<ElectricCurrentD> = AMPERE.scaled(1e1);
/// Abcoulomb.
pub const ABCOULOMB: Quantity<ElectricChargeD> = COULOMB.scaled(1e1);
/// Abfarad.
pub const ABFARAD: Quantity<CapacitanceD> = FARAD.scaled(1e9);
/// Abhenry.
pub const ABHENRY: Quantity<InductanceD> = HENRY.scaled(1e-9);
/// Abmho.
pub const ABMHO: Quantity<ElectricConductanceD> = SIEMENS.scaled(1e9);
/// Abohm.
pub const ABOHM: Quantity<ElectricResistanceD> = OHM.scaled(1e-9);
/// Abvolt.
pub const ABVOLT: Quantity<ElectricPotentialD> = VOLT.scaled(1e-8);
/// Acre.
pub const ACRE: Quantity<AreaD> = METER.squared().scaled(4.046873e3);
/// Acre foot.
pub const ACRE_FOOT: Quantity<VolumeD> = METER.cubed().scaled(1.233489e3);
/// Astronomical unit.
pub const ASTRONOMICAL_UNIT: Quantity<LengthD> = METER.scaled(1.495979e11);
/// Atmosphere std.
pub const ATMOSPHERE_STD: Quantity<PressureD> = PASCAL.scaled(1.01325e5);
/// Atmosphere tech.
pub const ATMOSPHERE_TECH: Quantity<PressureD> = PASCAL.scaled(9.80665e4);
/// Barrel.
pub const BARREL: Quantity<VolumeD> = METER.cubed().scaled(1.589873e-1);
/// Biot.
pub const BIOT: Quantity<ElectricCurrentD> = AMPERE.scaled(1e1);
/// Btu.
pub const BTU: Quantity<EnergyD> = JOULE.scaled(1.05587e3);
/// Btu it.
pub const BTU_IT: Quantity<EnergyD> = JOULE.scaled(1.055056e3);
/// Btu th.
pub const BTU_TH: Quantity<EnergyD> = JOULE.scaled(1.054350e3);
/// Btu 39F.
pub const BTU_39F: Quantity<EnergyD> = JOULE.scaled(1.05967e3);
/// Btu 59F.
pub const BTU_59F: Quantity<EnergyD> = JOULE.scaled(1.05480e3);
/// Btu 60F.
pub const BTU_60F: Quantity<EnergyD> = JOULE.scaled(1.05468e3);
/// Bushel.
pub const BUSHEL: Quantity<VolumeD> = METER.cubed().scaled(3.523907e-2);
/// Calorie.
pub const CALORIE: Quantity<EnergyD> = JOULE.scaled(4.19002);
/// Calorie it.
pub const CALORIE_IT: Quantity<EnergyD> = JOULE.scaled(4.1868);
/// Calorie th.
pub const CALORIE_TH: Quantity<EnergyD> = JOULE.scaled(4.184);
/// Calorie 15C.
pub const CALORIE_15C: Quantity<EnergyD> = JOULE.scaled(4.18580);
/// Calorie 20C.
pub const CALORIE_20C: Quantity<EnergyD> = JOULE.scaled(4.18190);
/// Carat metric.
pub const CARAT_METRIC: Quantity<MassD> = KILOGRAM.scaled(2e-4);
/// Chain.
pub const CHAIN: Quantity<LengthD> = METER.scaled(2.011684e1);
/// Clo.
pub const CLO: Quantity<ThermalInsulanceD> = METER.squared().times(KELVIN).per(WATT).scaled(1.55e-1);
/// Cm mercury.
pub const CM_MERCURY: Quantity<PressureD> = PASCAL.scaled(1.333224e3);
/// Cord.
pub const CORD: Quantity<VolumeD> = METER.cubed().scaled(3.624556);
/// Cup.
pub const CUP: Quantity<VolumeD> = METER.cubed().scaled(2.365882e-4);
/// Darcy.
pub const DARCY: Quantity<AreaD> = METER.squared().scaled(9.869233e-13);
/// Day sidereal.
pub const DAY_SIDEREAL: Quantity<TimeIntervalD> = SECOND.scaled(8.616409e4);
/// Debye.
pub const DEBYE: Quantity<Product<ElectricChargeD, LengthD>> = COULOMB.times(METER).scaled(3.335641e-30);
/// Degree fahrenheit.
pub const DEGREE_FAHRENHEIT: Quantity<ThermodynamicTemperatureD> = KELVIN.scaled(5.555556e-1);
/// Degree rankine.
pub const DEGREE_RANKINE: Quantity<ThermodynamicTemperatureD> = KELVIN.scaled(5.555556e-1);
/// Denier.
pub const DENIER: Quantity<Quotient<MassD, LengthD>> = KILOGRAM.per(METER).scaled(1.111111e-7);
/// Dyne.
pub const DYNE: Quantity<ForceD> = NEWTON.scaled(1e-5);
/// Erg.
pub const ERG: Quantity<EnergyD> = JOULE.scaled(1e-7);
/// Faraday.
pub const FARADAY: Quantity<ElectricChargeD> = COULOMB.scaled(9.648531e4);
/// Fathom.
pub const FATHOM: Quantity<LengthD> = METER.scaled(1.828804);
/// Fermi.
pub const FERMI: Quantity<LengthD> = METER.scaled(1e-15);
/// Foot.
pub const FOOT: Quantity<LengthD> = METER.scaled(3.048e-1);
/// Foot pound force.
pub const FOOT_POUND_FORCE: Quantity<EnergyD> = JOULE.scaled(1.355818);
/// Foot poundal.
pub const FOOT_POUNDAL: Quantity<EnergyD> = JOULE.scaled(4.214011e-2);
/// Foot us survey.
pub const FOOT_US_SURVEY: Quantity<LengthD> = METER.scaled(3.048006e-1);
/// Footcandle.
pub const FOOTCANDLE: Quantity<IlluminanceD> = LUX.scaled(1.076391e1);
/// Footlambert.
pub const FOOTLAMBERT: Quantity<IlluminanceD> = CANDELA.per(METER.squared()).scaled(3.426259);
/// Fortnight. Fourteen days.
pub const FORTNIGHT: Quantity<TimeIntervalD> = DAY.scaled(14.0);
/// Franklin.
pub const FRANKLIN: Quantity<ElectricChargeD> = COULOMB.scaled(3.335641e-10);
/// Furlong.
pub const FURLONG: Quantity<LengthD> = METER.scaled(2.01168e2);
/// Gallon imperial.
pub const GALLON_IMPERIAL: Quantity<VolumeD> = METER.cubed().scaled(4.54609e-3);
/// Gallon us.
pub const GALLON_US: Quantity<VolumeD> = METER.cubed().scaled(3.785412e-3);
/// Gamma.
pub const GAMMA: Quantity<MagneticFluxDensityD> = TESLA.scaled(1e-9);
/// Gamma mass.
pub const GAMMA_MASS: Quantity<MassD> = KILOGRAM.scaled(1e-9);
/// Gauss.
pub const GAUSS: Quantity<MagneticFluxDensityD> = TESLA.scaled(1e-4);
/// Gilbert.
pub const GILBERT: Quantity<ElectricCurrentD> = AMPERE.scaled(7.957747e-1);
/// Gill imperial.
pub const GILL_IMPERIAL: Quantity<VolumeD> = METER.cubed().scaled(1.420653e-4);
/// Gill us.
pub const GILL_US: Quantity<VolumeD> = METER.cubed().scaled(1.182941e-4);
/// Gon.
pub const GON: Rep = 9e-1 * DEGREE_ANGLE;
/// Grain.
pub const GRAIN: Quantity<MassD> = KILOGRAM.scaled(6.479891e-5);
/// Horsepower.
pub const HORSEPOWER: Quantity<PowerD> = WATT.scaled(7.456999e2);
/// Horsepower boiler.
pub const HORSEPOWER_BOILER: Quantity<PowerD> = WATT.scaled(9.80950e3);
/// Horsepower electric.
pub const HORSEPOWER_ELECTRIC: Quantity<PowerD> = WATT.scaled(7.46e2);
/// Horsepower metric.
pub const HORSEPOWER_METRIC: Quantity<PowerD> = WATT.scaled(7.354988e2);
/// Horsepower uk.
pub const HORSEPOWER_UK: Quantity<PowerD> = WATT.scaled(7.4570e2);
/// Horsepower water.
pub const HORSEPOWER_WATER: Quantity<PowerD> = WATT.scaled(7.46043e2);
/// Hour sidereal.
pub const HOUR_SIDEREAL: Quantity<TimeIntervalD> = SECOND.scaled(3.590170e3);
/// Hundredweight long.
pub const HUNDREDWEIGHT_LONG: Quantity<MassD> = KILOGRAM.scaled(5.080235e1);
/// Hundredweight short.
pub const HUNDREDWEIGHT_SHORT: Quantity<MassD> = KILOGRAM.scaled(4.535924e1);
/// Inch.
pub const INCH: Quantity<LengthD> = METER.scaled(2.54e-2);
/// Inches mercury.
pub const INCHES_MERCURY: Quantity<PressureD> = PASCAL.scaled(3.386389e3);
/// Kayser.
pub const KAYSER: Quantity<WaveNumberD> = METER.recip().scaled(1e2);
/// Kilogram force.
pub const KILOGRAM_FORCE: Quantity<ForceD> = NEWTON.scaled(9.80665);
/// Kilopond.
pub const KILOPOND: Quantity<ForceD> = NEWTON.scaled(9.80665);
/// Kip.
pub const KIP: Quantity<ForceD> = NEWTON.scaled(4.448222e3);
/// Lambda volume.
pub const LAMBDA_VOLUME: Quantity<VolumeD> = METER.cubed().scaled(1e-9);
/// Lambert.
pub const LAMBERT: Quantity<IlluminanceD> = CANDELA.per(METER.squared()).scaled(3.183099e3);
/// Langley.
pub const LANGLEY: Quantity<HeatDensityD> = JOULE.per(METER.squared()).scaled(4.184e4);
/// Light year.
pub const LIGHT_YEAR: Quantity<LengthD> = METER.scaled(9.46073e15);
/// Maxwell.
pub const MAXWELL: Quantity<MagneticFluxD> = WEBER.scaled(1e-8);
/// Mho. Same as the siemens.
pub const MHO: Quantity<ElectricConductanceD> = SIEMENS;
/// Micron. One micrometre.
pub const MICRON: Quantity<LengthD> = METER.scaled(MICRO);
/// Mil.
pub const MIL: Quantity<LengthD> = METER.scaled(2.54e-5);
/// Mil angle.
pub const MIL_ANGLE: Rep = 5.625e-2 * DEGREE_ANGLE;
/// Mil circular.
pub const MIL_CIRCULAR: Quantity<AreaD> = METER.squared().scaled(5.067075e-10);
/// Mile.
pub const MILE: Quantity<LengthD> = METER.scaled(1.609344e3);
/// Mile us survey.
pub const MILE_US_SURVEY: Quantity<LengthD> = METER.scaled(1.609347e3);
/// Minute sidereal.
pub const MINUTE_SIDEREAL: Quantity<TimeIntervalD> = SECOND.scaled(5.983617e1);
/// Oersted.
pub const OERSTED: Quantity<MagneticFieldStrengthD> = AMPERE.per(METER).scaled(7.957747e1);
/// Ounce avdp.
pub const OUNCE_AVDP: Quantity<MassD> = KILOGRAM.scaled(2.834952e-2);
/// Ounce fluid imperial.
pub const OUNCE_FLUID_IMPERIAL: Quantity<VolumeD> = METER.cubed().scaled(2.841306e-5);
/// Ounce fluid us.
pub const OUNCE_FLUID_US: Quantity<VolumeD> = METER.cubed().scaled(2.957353e-5);
/// Ounce force.
pub const OUNCE_FORCE: Quantity<ForceD> = NEWTON.scaled(2.780139e-1);
/// Ounce troy.
pub const OUNCE_TROY: Quantity<MassD> = KILOGRAM.scaled(3.110348e-2);
/// Parsec.
pub const PARSEC: Quantity<LengthD> = METER.scaled(3.085678e16);
/// Peck.
pub const PECK: Quantity<VolumeD> = METER.cubed().scaled(8.809768e-3);
/// Pennyweight.
pub const PENNYWEIGHT: Quantity<MassD> = KILOGRAM.scaled(1.555174e-3);
/// Perm 0C.
pub const PERM_0C: Quantity<SubstancePermeabilityD> = KILOGRAM.per(PASCAL).per(SECOND).per(METER.squared()).scaled(5.72135e-11);
/// Perm 23C.
pub const PERM_23C: Quantity<SubstancePermeabilityD> = KILOGRAM.per(PASCAL).per(SECOND).per(METER.squared()).scaled(5.74525e-11);
/// Phot.
pub const PHOT: Quantity<IlluminanceD> = LUX.scaled(1e4);
/// Pica computer.
pub const PICA_COMPUTER: Quantity<LengthD> = METER.scaled(4.233333e-3);
/// Pica printers.
pub const PICA_PRINTERS: Quantity<LengthD> = METER.scaled(4.217518e-3);
/// Pint dry.
pub const PINT_DRY: Quantity<VolumeD> = METER.cubed().scaled(5.506105e-4);
/// Pint liquid.
pub const PINT_LIQUID: Quantity<VolumeD> = METER.cubed().scaled(4.731765e-4);
/// Point computer.
pub const POINT_COMPUTER: Quantity<LengthD> = METER.scaled(3.527778e-4);
/// Point printers.
pub const POINT_PRINTERS: Quantity<LengthD> = METER.scaled(3.514598e-4);
/// Poise.
pub const POISE: Quantity<DynamicViscosityD> = PASCAL.times(SECOND).scaled(1e-1);
/// Pound avdp.
pub const POUND_AVDP: Quantity<MassD> = KILOGRAM.scaled(4.5359237e-1);
/// Pound force.
pub const POUND_FORCE: Quantity<ForceD> = NEWTON.scaled(4.448222);
/// Pound troy.
pub const POUND_TROY: Quantity<MassD> = KILOGRAM.scaled(3.732417e-1);
/// Poundal.
pub const POUNDAL: Quantity<ForceD> = NEWTON.scaled(1.382550e-1);
/// Psi.
pub const PSI: Quantity<PressureD> = PASCAL.scaled(6.894757e3);
/// Quad.
pub const QUAD: Quantity<EnergyD> = BTU_IT.scaled(1e15);
/// Quart dry.
pub const QUART_DRY: Quantity<VolumeD> = METER.cubed().scaled(1.101221e-3);
/// Quart liquid.
pub const QUART_LIQUID: Quantity<VolumeD> = METER.cubed().scaled(9.463529e-4);
/// Revolution.
pub const REVOLUTION: Rep = 2.0 * PI;
/// Rhe.
pub const RHE: Quantity<Reciprocal<DynamicViscosityD>> = PASCAL.times(SECOND).recip().scaled(1e1);
/// Rod.
pub const ROD: Quantity<LengthD> = METER.scaled(5.029210);
/// Rpm.
pub const RPM: Quantity<AngularVelocityD> = SECOND.recip().scaled(1.047198e-1);
/// Second sidereal.
pub const SECOND_SIDEREAL: Quantity<TimeIntervalD> = SECOND.scaled(9.972696e-1);
/// Shake.
pub const SHAKE: Quantity<TimeIntervalD> = SECOND.scaled(1e-8);
/// Slug.
pub const SLUG: Quantity<MassD> = KILOGRAM.scaled(1.459390e1);
/// Statampere.
pub const STATAMPERE: Quantity<ElectricCurrentD> = AMPERE.scaled(3.335641e-10);
/// Statcoulomb.
pub const STATCOULOMB: Quantity<ElectricChargeD> = COULOMB.scaled(3.335641e-10);
/// Statfarad.
pub const STATFARAD: Quantity<CapacitanceD> = FARAD.scaled(1.112650e-12);
/// Stathenry.
pub const STATHENRY: Quantity<InductanceD> = HENRY.scaled(8.987552e11);
/// Statmho.
pub const STATMHO: Quantity<ElectricConductanceD> = SIEMENS.scaled(1.112650e-12);
/// Statohm.
pub const STATOHM: Quantity<ElectricResistanceD> = OHM.scaled(8.987552e11);
/// Statvolt.
pub const STATVOLT: Quantity<ElectricPotentialD> = VOLT.scaled(2.997925e2);
/// Stere.
pub const STERE: Quantity<VolumeD> = METER.cubed();
/// Stilb.
pub const STILB: Quantity<IlluminanceD> = CANDELA.per(METER.squared()).scaled(1e4);
/// Stokes.
pub const STOKES: Quantity<KinematicViscosityD> = METER.squared().per(SECOND).scaled(1e-4);
/// Tablespoon.
pub const TABLESPOON: Quantity<VolumeD> = METER.cubed().scaled(1.478676e-5);
/// Teaspoon.
pub const TEASPOON: Quantity<VolumeD> = METER.cubed().scaled(4.928922e-6);
/// Tex.
pub const TEX: Quantity<Quotient<MassD, LengthD>> = KILOGRAM.per(METER).scaled(1e-6);
/// Therm ec.
pub const THERM_EC: Quantity<EnergyD> = JOULE.scaled(1.05506e8);
/// Therm us.
pub const THERM_US: Quantity<EnergyD> = JOULE.scaled(1.054804e8);
/// Ton assay.
pub const TON_ASSAY: Quantity<MassD> = KILOGRAM.scaled(2.916667e-2);
/// Ton force.
pub const TON_FORCE: Quantity<ForceD> = NEWTON.scaled(8.896443e3);
/// Ton long.
pub const TON_LONG: Quantity<MassD> = KILOGRAM.scaled(1.016047e3);
/// Ton refrigeration.
pub const TON_REFRIGERATION: Quantity<HeatFlowRateD> = WATT.scaled(3.516853e3);
/// Ton register.
pub const TON_REGISTER: Quantity<VolumeD> = METER.cubed().scaled(2.831685);
/// Ton short.
pub const TON_SHORT: Quantity<MassD> = KILOGRAM.scaled(9.071847e2);
/// Ton tnt.
pub const TON_TNT: Quantity<EnergyD> = JOULE.scaled(4.184e9);
/// Torr.
pub const TORR: Quantity<PressureD> = PASCAL.scaled(1.333224e2);
/// Unit pole.
pub const UNIT_POLE: Quantity<MagneticFluxD> = WEBER.scaled(1.256637e-7);
/// Week. Seven days.
pub const WEEK: Quantity<TimeIntervalD> = SECOND.scaled(604800.0);
/// X unit.
pub const X_UNIT: Quantity<LengthD> = METER.scaled(1.002e-13);
/// Yard.
pub const YARD: Quantity<LengthD> = METER.scaled(9.144e-1);
/// Year sidereal.
pub const YEAR_SIDEREAL: Quantity<TimeIntervalD> = SECOND.scaled(3.155815e7);
/// Year std. 365 days.
pub const YEAR_STD: Quantity<TimeIntervalD> = SECOND.scaled(3.1536e7);
/// Year tropical.
pub const YEAR_TROPICAL: Quantity<TimeIntervalD> = SECOND.scaled(3.155693e7);
