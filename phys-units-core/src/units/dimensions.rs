//! Named dimensions.
//!
//! Aliases for the base dimensions and for the derived dimensions tabulated in NIST Special
//! Publication 811. Several names denote the same vector (energy and torque, frequency and
//! angular velocity); they are the same type.
//!
//! ```rust
//! use phys_units_core::units::dimensions::{EnergyD, TorqueD};
//!
//! fn same_type(_: EnergyD) {}
//! same_type(TorqueD::default());
//! ```

use crate::dimension::Dimensions;
use typenum::{N1, N2, N3, P1, P2, P3, P4, Z0};

pub use crate::dimension::DimensionlessD;

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// Length (metre).
pub type LengthD = Dimensions<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Mass (kilogram).
pub type MassD = Dimensions<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
/// Time interval (second).
pub type TimeIntervalD = Dimensions<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
/// Electric current (ampere).
pub type ElectricCurrentD = Dimensions<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
/// Thermodynamic temperature (kelvin).
pub type ThermodynamicTemperatureD = Dimensions<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
/// Amount of substance (mole).
pub type AmountOfSubstanceD = Dimensions<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
/// Luminous intensity (candela).
pub type LuminousIntensityD = Dimensions<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

// ─────────────────────────────────────────────────────────────────────────────
// Derived dimensions (SP811)
// ─────────────────────────────────────────────────────────────────────────────

/// Absorbed dose (gray).
pub type AbsorbedDoseD = Dimensions<P2, Z0, N2, Z0, Z0, Z0, Z0>;
/// Absorbed dose rate (gray per second).
pub type AbsorbedDoseRateD = Dimensions<P2, Z0, N3, Z0, Z0, Z0, Z0>;
/// Acceleration (metre per second squared).
pub type AccelerationD = Dimensions<P1, Z0, N2, Z0, Z0, Z0, Z0>;
/// Activity of a radionuclide (becquerel).
pub type ActivityOfANuclideD = Dimensions<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
/// Angular velocity (radian per second).
pub type AngularVelocityD = Dimensions<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
/// Angular acceleration (radian per second squared).
pub type AngularAccelerationD = Dimensions<Z0, Z0, N2, Z0, Z0, Z0, Z0>;
/// Area (square metre).
pub type AreaD = Dimensions<P2, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Capacitance (farad).
pub type CapacitanceD = Dimensions<N2, N1, P4, P2, Z0, Z0, Z0>;
/// Amount-of-substance concentration (mole per cubic metre).
pub type ConcentrationD = Dimensions<N3, Z0, Z0, Z0, Z0, P1, Z0>;
/// Current density (ampere per square metre).
pub type CurrentDensityD = Dimensions<N2, Z0, Z0, P1, Z0, Z0, Z0>;
/// Dose equivalent (sievert).
pub type DoseEquivalentD = Dimensions<P2, Z0, N2, Z0, Z0, Z0, Z0>;
/// Dynamic viscosity (pascal second).
pub type DynamicViscosityD = Dimensions<N1, P1, N1, Z0, Z0, Z0, Z0>;
/// Electric charge (coulomb).
pub type ElectricChargeD = Dimensions<Z0, Z0, P1, P1, Z0, Z0, Z0>;
/// Electric charge density (coulomb per cubic metre).
pub type ElectricChargeDensityD = Dimensions<N3, Z0, P1, P1, Z0, Z0, Z0>;
/// Electric conductance (siemens).
pub type ElectricConductanceD = Dimensions<N2, N1, P3, P2, Z0, Z0, Z0>;
/// Electric field strength (volt per metre).
pub type ElectricFieldStrengthD = Dimensions<P1, P1, N3, N1, Z0, Z0, Z0>;
/// Electric flux density (coulomb per square metre).
pub type ElectricFluxDensityD = Dimensions<N2, Z0, P1, P1, Z0, Z0, Z0>;
/// Electric potential difference (volt).
pub type ElectricPotentialD = Dimensions<P2, P1, N3, N1, Z0, Z0, Z0>;
/// Electric resistance (ohm).
pub type ElectricResistanceD = Dimensions<P2, P1, N3, N2, Z0, Z0, Z0>;
/// Energy, work, quantity of heat (joule).
pub type EnergyD = Dimensions<P2, P1, N2, Z0, Z0, Z0, Z0>;
/// Energy density (joule per cubic metre).
pub type EnergyDensityD = Dimensions<N1, P1, N2, Z0, Z0, Z0, Z0>;
/// Exposure to x and gamma rays (coulomb per kilogram).
pub type ExposureD = Dimensions<Z0, N1, P1, P1, Z0, Z0, Z0>;
/// Force (newton).
pub type ForceD = Dimensions<P1, P1, N2, Z0, Z0, Z0, Z0>;
/// Frequency (hertz).
pub type FrequencyD = Dimensions<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
/// Heat capacity, entropy (joule per kelvin).
pub type HeatCapacityD = Dimensions<P2, P1, N2, Z0, N1, Z0, Z0>;
/// Heat density (joule per square metre).
pub type HeatDensityD = Dimensions<Z0, P1, N2, Z0, Z0, Z0, Z0>;
/// Heat density flow rate (watt per square metre).
pub type HeatDensityFlowRateD = Dimensions<Z0, P1, N3, Z0, Z0, Z0, Z0>;
/// Heat flow rate (watt).
pub type HeatFlowRateD = Dimensions<P2, P1, N3, Z0, Z0, Z0, Z0>;
/// Heat flux density (watt per square metre).
pub type HeatFluxDensityD = Dimensions<Z0, P1, N3, Z0, Z0, Z0, Z0>;
/// Heat transfer coefficient (watt per square metre kelvin).
pub type HeatTransferCoefficientD = Dimensions<Z0, P1, N3, Z0, N1, Z0, Z0>;
/// Illuminance (lux).
pub type IlluminanceD = Dimensions<N2, Z0, Z0, Z0, Z0, Z0, P1>;
/// Inductance (henry).
pub type InductanceD = Dimensions<P2, P1, N2, N2, Z0, Z0, Z0>;
/// Irradiance (watt per square metre).
pub type IrradianceD = Dimensions<Z0, P1, N3, Z0, Z0, Z0, Z0>;
/// Kinematic viscosity (square metre per second).
pub type KinematicViscosityD = Dimensions<P2, Z0, N1, Z0, Z0, Z0, Z0>;
/// Luminance (candela per square metre).
pub type LuminanceD = Dimensions<N2, Z0, Z0, Z0, Z0, Z0, P1>;
/// Luminous flux (lumen).
pub type LuminousFluxD = Dimensions<Z0, Z0, Z0, Z0, Z0, Z0, P1>;
/// Magnetic field strength (ampere per metre).
pub type MagneticFieldStrengthD = Dimensions<N1, Z0, Z0, P1, Z0, Z0, Z0>;
/// Magnetic flux (weber).
pub type MagneticFluxD = Dimensions<P2, P1, N2, N1, Z0, Z0, Z0>;
/// Magnetic flux density (tesla).
pub type MagneticFluxDensityD = Dimensions<Z0, P1, N2, N1, Z0, Z0, Z0>;
/// Permeability (henry per metre).
pub type MagneticPermeabilityD = Dimensions<P1, P1, N2, N2, Z0, Z0, Z0>;
/// Mass density (kilogram per cubic metre).
pub type MassDensityD = Dimensions<N3, P1, Z0, Z0, Z0, Z0, Z0>;
/// Mass flow rate (kilogram per second).
pub type MassFlowRateD = Dimensions<Z0, P1, N1, Z0, Z0, Z0, Z0>;
/// Molar energy (joule per mole).
pub type MolarEnergyD = Dimensions<P2, P1, N2, Z0, Z0, N1, Z0>;
/// Molar entropy as tabulated in SP811 (joule per mole kelvin).
pub type MolarEntropyD = Dimensions<P2, P1, N2, N1, Z0, N1, Z0>;
/// Moment of force (newton metre).
pub type MomentOfForceD = Dimensions<P2, P1, N2, Z0, Z0, Z0, Z0>;
/// Permittivity (farad per metre).
pub type PermittivityD = Dimensions<N3, N1, P4, P2, Z0, Z0, Z0>;
/// Power, radiant flux (watt).
pub type PowerD = Dimensions<P2, P1, N3, Z0, Z0, Z0, Z0>;
/// Pressure, stress (pascal).
pub type PressureD = Dimensions<N1, P1, N2, Z0, Z0, Z0, Z0>;
/// Radiance (watt per square metre steradian).
pub type RadianceD = Dimensions<Z0, P1, N3, Z0, Z0, Z0, Z0>;
/// Radiant intensity (watt per steradian).
pub type RadiantIntensityD = Dimensions<P2, P1, N3, Z0, Z0, Z0, Z0>;
/// Speed (metre per second).
pub type SpeedD = Dimensions<P1, Z0, N1, Z0, Z0, Z0, Z0>;
/// Specific energy (joule per kilogram).
pub type SpecificEnergyD = Dimensions<P2, Z0, N2, Z0, Z0, Z0, Z0>;
/// Specific heat capacity (joule per kilogram kelvin).
pub type SpecificHeatCapacityD = Dimensions<P2, Z0, N2, Z0, N1, Z0, Z0>;
/// Specific volume (cubic metre per kilogram).
pub type SpecificVolumeD = Dimensions<P3, N1, Z0, Z0, Z0, Z0, Z0>;
/// Substance permeability (kilogram per pascal second square metre).
pub type SubstancePermeabilityD = Dimensions<N1, Z0, P1, Z0, Z0, Z0, Z0>;
/// Surface tension (newton per metre).
pub type SurfaceTensionD = Dimensions<Z0, P1, N2, Z0, Z0, Z0, Z0>;
/// Thermal conductivity (watt per metre kelvin).
pub type ThermalConductivityD = Dimensions<P1, P1, N3, Z0, N1, Z0, Z0>;
/// Thermal diffusivity (square metre per second).
pub type ThermalDiffusivityD = Dimensions<P2, Z0, N1, Z0, Z0, Z0, Z0>;
/// Thermal insulance (square metre kelvin per watt).
pub type ThermalInsulanceD = Dimensions<Z0, N1, P3, Z0, P1, Z0, Z0>;
/// Thermal resistance (kelvin per watt).
pub type ThermalResistanceD = Dimensions<N2, N1, P3, Z0, P1, Z0, Z0>;
/// Thermal resistivity (metre kelvin per watt).
pub type ThermalResistivityD = Dimensions<N1, N1, P3, Z0, P1, Z0, Z0>;
/// Torque (newton metre).
pub type TorqueD = Dimensions<P2, P1, N2, Z0, Z0, Z0, Z0>;
/// Volume (cubic metre).
pub type VolumeD = Dimensions<P3, Z0, Z0, Z0, Z0, Z0, Z0>;
/// Volume flow rate (cubic metre per second).
pub type VolumeFlowRateD = Dimensions<P3, Z0, N1, Z0, Z0, Z0, Z0>;
/// Wave number (reciprocal metre).
pub type WaveNumberD = Dimensions<N1, Z0, Z0, Z0, Z0, Z0, Z0>;

/// Velocity; same vector as [`SpeedD`].
pub type VelocityD = SpeedD;
