//! The collapse rule.
//!
//! An operation whose result dimension is all zero does not produce a quantity: it produces the
//! bare representation value. [`Collapse<D, T>`] names that result type, `T` when `D` is
//! dimensionless and [`Quantity<D, T>`] otherwise. The decision is made by the type-level bit
//! [`Dimension::IsDimensionless`].
//!
//! ```rust
//! use phys_units_core::units::si::{METER, SECOND};
//!
//! let ratio: f64 = (3.0 * METER) / (1.5 * METER);
//! assert_eq!(ratio, 2.0);
//!
//! let cycles: f64 = (50.0 / SECOND) * (2.0 * SECOND);
//! assert_eq!(cycles, 100.0);
//! ```

use crate::dimension::Dimension;
use crate::quantity::Quantity;
use typenum::{Bit, B0, B1};

/// A type-level boolean used by the dimension machinery.
///
/// Implemented for `typenum`'s [`B0`] and [`B1`] only.
pub trait Flag: Bit {
    /// Logical conjunction with another flag.
    type And<R: Flag>: Flag;

    /// `T` for [`B1`], `Quantity<D, T>` for [`B0`].
    type Collapse<D: Dimension, T>;

    /// Applies the rule to a value.
    #[doc(hidden)]
    fn collapse<D: Dimension, T>(value: T) -> Self::Collapse<D, T>;
}

impl Flag for B1 {
    type And<R: Flag> = R;
    type Collapse<D: Dimension, T> = T;

    #[inline(always)]
    fn collapse<D: Dimension, T>(value: T) -> T {
        value
    }
}

impl Flag for B0 {
    type And<R: Flag> = B0;
    type Collapse<D: Dimension, T> = Quantity<D, T>;

    #[inline(always)]
    fn collapse<D: Dimension, T>(value: T) -> Quantity<D, T> {
        Quantity::from_raw(value)
    }
}

pub(crate) type And<A, B> = <A as Flag>::And<B>;

/// Result type of an operation with result dimension `D` and representation `T`.
pub type Collapse<D, T> = <<D as Dimension>::IsDimensionless as Flag>::Collapse<D, T>;

/// Wraps `value` as a `Quantity<D, T>`, or returns it unchanged when `D` is dimensionless.
#[inline(always)]
pub(crate) fn collapse<D: Dimension, T>(value: T) -> Collapse<D, T> {
    <D::IsDimensionless as Flag>::collapse::<D, T>(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::{DimensionlessD, Dimensions};
    use typenum::{N1, P1, Z0};

    type Length = Dimensions<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    type Wavenumber = Dimensions<N1, Z0, Z0, Z0, Z0, Z0, Z0>;

    #[test]
    fn dimensionless_collapses_to_representation() {
        let x: f64 = collapse::<DimensionlessD, f64>(2.5);
        assert_eq!(x, 2.5);
        let n: i32 = collapse::<DimensionlessD, i32>(7);
        assert_eq!(n, 7);
    }

    #[test]
    fn dimensioned_result_stays_a_quantity() {
        let q: Quantity<Length, f64> = collapse::<Length, f64>(2.5);
        assert_eq!(q.magnitude(), 2.5);
        let k: Quantity<Wavenumber, f32> = collapse::<Wavenumber, f32>(0.5);
        assert_eq!(k.magnitude(), 0.5);
    }

    #[test]
    fn and_flag() {
        assert!(<And<B1, B1> as Bit>::BOOL);
        assert!(!<And<B1, B0> as Bit>::BOOL);
        assert!(!<And<B0, B1> as Bit>::BOOL);
        assert!(!<And<B0, B0> as Bit>::BOOL);
    }
}
