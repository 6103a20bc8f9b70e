//! Zero-overhead compile-time dimensional analysis.
//!
//! `phys-units` is the user-facing crate in this workspace. It re-exports the full API from `phys-units-core`,
//! with the SI units at the crate root.
//!
//! The core idea is: a value is always a `Quantity<D, T>`, where `D` is a zero-sized type holding the seven SI
//! dimension exponents. Dimensions are checked by the compiler and cost nothing at run time; a quantity has the
//! size and speed of its representation.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can’t add metres to seconds).
//! - Computes the dimension of products, quotients, powers and roots at compile time.
//! - Turns dimensionless results (`m / m`) back into plain numbers.
//! - Provides SI and legacy units, physical constants and prefixed constructors (`km(1.5)`).
//!
//! # What this crate does not try to solve
//!
//! - Runtime unit handling: `"kg"` is never parsed into a dimension.
//! - Rational exponents: `sqrt` of a volume does not compile.
//! - Arbitrary-precision magnitudes: the representation is whatever numeric type you choose.
//!
//! # Quick start
//!
//! ```rust
//! use phys_units::{JOULE, METER, NEWTON, SECOND};
//!
//! let work = (2.0 * NEWTON) * (2.0 * METER);
//! assert_eq!(work, 4.0 * JOULE);
//!
//! let v = 20.0 * METER / SECOND;
//! assert_eq!(v / 5.0, 4.0 * METER / SECOND);
//! assert_eq!(8.0 / (4.0 * METER / SECOND), 2.0 * SECOND / METER);
//!
//! let area = 10_000.0 * METER * METER * METER * METER;
//! assert_eq!(area.sqrt(), 100.0 * METER * METER);
//! ```
//!
//! Prefixed constructors and text output:
//!
//! ```rust
//! use phys_units::literals::{km, ms};
//!
//! let pace = km(1.23) / ms(500.0);
//! assert_eq!(km(1.23).to_string(), "1230 m");
//! assert_eq!(km(1.23).engineering().to_string(), "1.23 km");
//! assert_eq!(pace.to_string(), "2460 m/s");
//! ```
//!
//! # Incorrect usage (type errors)
//!
//! Adding different dimensions:
//!
//! ```compile_fail
//! use phys_units::{METER, SECOND};
//!
//! let _ = 1.0 * METER + 1.0 * SECOND;
//! ```
//!
//! Comparing different dimensions:
//!
//! ```compile_fail
//! use phys_units::{KILOGRAM, METER};
//!
//! let _ = 1.0 * METER < 1.0 * KILOGRAM;
//! ```
//!
//! Converting to a reference unit of another dimension:
//!
//! ```compile_fail
//! use phys_units::{METER, SECOND};
//!
//! let _ = (3.0 * METER).to(SECOND);
//! ```
//!
//! Square root of an odd exponent:
//!
//! ```compile_fail
//! use phys_units::METER;
//!
//! let _ = (8.0 * METER * METER * METER).sqrt();
//! ```
//!
//! Building a dimensionless quantity:
//!
//! ```compile_fail
//! use phys_units::{DimensionlessD, Magnitude, Quantity};
//!
//! let q: Quantity<DimensionlessD> = Quantity::new(Magnitude, 1.0);
//! println!("{:?}", q.magnitude());
//! ```
//!
//! Building a quantity without the `Magnitude` tag:
//!
//! ```compile_fail
//! use phys_units::Quantity;
//! use phys_units::dimensions::LengthD;
//!
//! let q: Quantity<LengthD> = Quantity::new(1.0);
//! ```
//!
//! # Modules
//!
//! - `phys_units::si` (base and derived SI units, prefixes; also re-exported at the crate root)
//! - `phys_units::other` (foot, mile, calorie, horsepower, …)
//! - `phys_units::constants` (standard gravity, Avogadro, Planck, …)
//! - `phys_units::dimensions` (`LengthD`, `ForceD`, `EnergyD`, …)
//! - `phys_units::literals` (`km`, `ms`, `kN`, …)
//! - `phys_units::io` (names, symbols, engineering notation, prefix lookup)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `phys-units-core`.
//! - `f32`: makes `Rep` and every unit constant `f32`.
//! - `serde`: enables `serde` support for `Quantity<D, T>`; serialization is the raw magnitude only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! phys-units = { version = "0.3.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Dimensional mistakes are compile errors. Arithmetic follows the representation (IEEE-754 for floats) and does
//! not panic on its own. The only run-time error is an unrecognized prefix in [`io::prefix`], reported as
//! [`QuantityError`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use phys_units_core::*;

/// Derive macro used by `phys-units-core` to define named units and their prefixed constructors.
///
/// This macro expands in terms of `crate::NamedUnit` and `crate::Quantity`, so it is intended for use inside
/// `phys-units-core` (or crates exposing the same crate-root API). Most users should not need this.
pub use phys_units_derive::Unit;

pub use phys_units_core::units::constants;
pub use phys_units_core::units::dimensions;
pub use phys_units_core::units::other;
pub use phys_units_core::units::si;

pub use phys_units_core::units::si::*;
