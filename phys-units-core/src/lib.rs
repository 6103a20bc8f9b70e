//! Core type system for zero-overhead dimensional analysis.
//!
//! `phys-units-core` tags numbers with their physical dimension at the type level:
//!
//! - A *dimension* is a type [`Dimensions<L, M, T, I, Th, N, J>`] of seven `typenum` integers, the exponents
//!   of the SI base quantities.
//! - A value tagged with a dimension is a [`Quantity<D, T>`], backed by any numeric representation `T`
//!   (default [`Rep`]).
//! - Products, quotients, powers and roots compute their result dimension at compile time
//!   ([`Product`], [`Quotient`], [`Reciprocal`], [`Power`], [`Root`]).
//! - A result whose dimension is all zero is not a quantity but the bare number ([`Collapse`]).
//!
//! Most users should depend on `phys-units` (the facade crate) unless they need direct access to these
//! primitives.
//!
//! # Quick start
//!
//! ```rust
//! use phys_units_core::units::si::{JOULE, METER, NEWTON, SECOND};
//!
//! let work = (2.0 * NEWTON) * (2.0 * METER);
//! assert_eq!(work, 4.0 * JOULE);
//!
//! let speed = 20.0 * METER / SECOND;
//! assert_eq!(speed / 5.0, 4.0 * METER / SECOND);
//!
//! let ratio: f64 = (3.0 * METER) / (1.5 * METER);
//! assert_eq!(ratio, 2.0);
//! ```
//!
//! Adding quantities of different dimensions does not compile:
//!
//! ```compile_fail
//! use phys_units_core::units::si::{METER, SECOND};
//!
//! let nonsense = 1.0 * METER + 1.0 * SECOND;
//! ```
//!
//! # What this crate does not try to solve
//!
//! - Runtime unit systems: dimensions are never parsed from text.
//! - Rational exponents: roots only exist where every exponent divides exactly.
//! - Affine units: temperatures are kelvin intervals.
//!
//! # `no_std`
//!
//! Disable default features to build `phys-units-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! phys-units-core = { version = "0.3.0", default-features = false }
//! ```
//!
//! Floating-point math that isn't available in `core` is then provided by `num-traits` through `libm`. Text
//! helpers that allocate, engineering notation and [`QuantityError`] require `std`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `f32`: makes [`Rep`] (the default representation and the type of the unit constants) `f32`.
//! - `serde`: enables `serde` support for `Quantity<D, T>`; serialization is the raw magnitude only.
//!   [`serde_with_unit`] keeps the unit symbol.
//!
//! # Panics and errors
//!
//! Dimensional errors are compile errors. Arithmetic follows the representation (IEEE-754 for floats) and
//! never panics on its own. The only run-time error is an unknown SI prefix in [`io::prefix`].

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

mod algebra;
mod collapse;
mod dimension;
#[cfg(feature = "std")]
mod error;
mod ops;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use algebra::{DimDiv, DimInv, DimMul, DimPow, DimRoot, Power, Product, Quotient, Reciprocal, Root};
pub use collapse::{Collapse, Flag};
pub use dimension::{BaseDimension, Dimension, DimensionVector, Dimensions, DimensionlessD, Exponent, BASE_DIMENSIONS};
#[cfg(feature = "std")]
pub use error::{QuantityError, Result};
pub use quantity::{abs, cube, dimension, magnitude, nth_power, nth_root, sqrt, square, Magnitude, Quantity};
pub use unit::NamedUnit;

#[cfg(all(feature = "serde", feature = "std"))]
pub use quantity::serde_with_unit;

/// Default magnitude representation, and the type of every unit constant.
#[cfg(not(feature = "f32"))]
pub type Rep = f64;

/// Default magnitude representation, and the type of every unit constant.
#[cfg(feature = "f32")]
pub type Rep = f32;

// ─────────────────────────────────────────────────────────────────────────────
// Units, literals and text output
// ─────────────────────────────────────────────────────────────────────────────

/// Unit tables: dimension aliases, SI and legacy units, physical constants.
pub mod units;

pub mod literals;

pub mod io;
