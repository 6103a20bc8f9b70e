//! Dimension vectors.
//!
//! Every quantity is tagged with a dimension: seven signed integer exponents over the SI base
//! quantities, in the fixed order length, mass, time, electric current, thermodynamic temperature,
//! amount of substance and luminous intensity.
//!
//! The tag exists twice:
//!
//! - at the type level as [`Dimensions`], parameterised by `typenum` integers (`Z0`, `P1`, `N2`, …).
//!   Each distinct vector is exactly one type, so dimensional agreement is type equality.
//! - at run time as [`DimensionVector`], obtained from any dimension type through
//!   [`Dimension::VECTOR`]. It is only used for introspection and printing.
//!
//! ```rust
//! use phys_units_core::{Dimension, DimensionVector};
//! use phys_units_core::units::dimensions::ForceD;
//!
//! assert_eq!(ForceD::VECTOR, DimensionVector::new([1, 1, -2, 0, 0, 0, 0]));
//! assert_eq!(ForceD::VECTOR.to_string(), "m kg s-2");
//! ```

use crate::collapse::{And, Flag};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use typenum::{Integer, NInt, NonZero, PInt, Unsigned, B0, B1, Z0};

/// Number of SI base dimensions.
pub const BASE_DIMENSIONS: usize = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Base dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// The seven SI base quantities, in dimension-vector order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Time interval (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Substance,
    /// Luminous intensity (candela).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions in vector order.
    pub const ALL: [BaseDimension; BASE_DIMENSIONS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Substance,
        BaseDimension::LuminousIntensity,
    ];

    /// Position of this dimension inside a [`DimensionVector`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol of the SI base unit, e.g. `"kg"` for mass.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Substance => "mol",
            BaseDimension::LuminousIntensity => "cd",
        }
    }

    /// Name of the SI base unit, e.g. `"kilogram"` for mass.
    pub const fn unit_name(self) -> &'static str {
        match self {
            BaseDimension::Length => "meter",
            BaseDimension::Mass => "kilogram",
            BaseDimension::Time => "second",
            BaseDimension::Current => "ampere",
            BaseDimension::Temperature => "kelvin",
            BaseDimension::Substance => "mole",
            BaseDimension::LuminousIntensity => "candela",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime dimension vector
// ─────────────────────────────────────────────────────────────────────────────

/// Run-time mirror of a dimension: seven exponents in [`BaseDimension`] order.
///
/// Exponent arithmetic is checked: operations return `None` instead of overflowing `i8`.
/// All operations are `const fn`, so they can be evaluated next to the type-level algebra and
/// compared against it.
///
/// ```rust
/// use phys_units_core::DimensionVector;
///
/// let velocity = DimensionVector::new([1, 0, -1, 0, 0, 0, 0]);
/// let time = DimensionVector::new([0, 0, 1, 0, 0, 0, 0]);
/// let distance = velocity.product(time);
/// assert_eq!(distance, Some(DimensionVector::new([1, 0, 0, 0, 0, 0, 0])));
/// assert!(distance.is_some_and(DimensionVector::is_base));
/// assert!(velocity.quotient(velocity).is_some_and(DimensionVector::is_dimensionless));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionVector([i8; BASE_DIMENSIONS]);

impl DimensionVector {
    /// The all-zero vector.
    pub const DIMENSIONLESS: Self = Self([0; BASE_DIMENSIONS]);

    /// Builds a vector from its seven exponents.
    #[inline]
    pub const fn new(exponents: [i8; BASE_DIMENSIONS]) -> Self {
        Self(exponents)
    }

    /// The vector with a single exponent of one at `dimension`.
    pub const fn base(dimension: BaseDimension) -> Self {
        let mut exponents = [0; BASE_DIMENSIONS];
        exponents[dimension.index()] = 1;
        Self(exponents)
    }

    /// The seven exponents.
    #[inline]
    pub const fn exponents(self) -> [i8; BASE_DIMENSIONS] {
        self.0
    }

    /// Exponent of a single base dimension.
    #[inline]
    pub const fn exponent(self, dimension: BaseDimension) -> i8 {
        self.0[dimension.index()]
    }

    /// `true` when every exponent is zero.
    pub const fn is_dimensionless(self) -> bool {
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// `true` when exactly one exponent is nonzero and it equals one.
    pub const fn is_base(self) -> bool {
        let mut nonzero = 0;
        let mut sum = 0i32;
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            if self.0[i] != 0 {
                nonzero += 1;
            }
            sum += self.0[i] as i32;
            i += 1;
        }
        nonzero == 1 && sum == 1
    }

    /// Component-wise sum; the dimension of a product. `None` if an exponent leaves the `i8`
    /// range.
    pub const fn product(self, rhs: Self) -> Option<Self> {
        let mut out = [0; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = match self.0[i].checked_add(rhs.0[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self(out))
    }

    /// Component-wise difference; the dimension of a quotient. `None` on exponent overflow.
    pub const fn quotient(self, rhs: Self) -> Option<Self> {
        let mut out = [0; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = match self.0[i].checked_sub(rhs.0[i]) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self(out))
    }

    /// Component-wise negation. `None` if an exponent is `i8::MIN`.
    pub const fn reciprocal(self) -> Option<Self> {
        self.power(-1)
    }

    /// Every exponent multiplied by `n`. `n == 0` gives the dimensionless vector; `None` on
    /// exponent overflow.
    ///
    /// ```rust
    /// use phys_units_core::DimensionVector;
    ///
    /// let force = DimensionVector::new([1, 1, -2, 0, 0, 0, 0]);
    /// assert_eq!(force.power(2), Some(DimensionVector::new([2, 2, -4, 0, 0, 0, 0])));
    /// assert_eq!(DimensionVector::new([100, 0, 0, 0, 0, 0, 0]).power(2), None);
    /// ```
    pub const fn power(self, n: i8) -> Option<Self> {
        let mut out = [0; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            out[i] = match self.0[i].checked_mul(n) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self(out))
    }

    /// Every exponent divided by `n`, or `None` if `n` is zero, does not divide every exponent
    /// exactly, or the quotient overflows.
    ///
    /// ```rust
    /// use phys_units_core::DimensionVector;
    ///
    /// let area = DimensionVector::new([2, 0, 0, 0, 0, 0, 0]);
    /// assert_eq!(area.root(2), Some(DimensionVector::new([1, 0, 0, 0, 0, 0, 0])));
    /// assert_eq!(area.root(3), None);
    /// assert_eq!(area.root(0), None);
    /// ```
    pub const fn root(self, n: i8) -> Option<Self> {
        let mut out = [0; BASE_DIMENSIONS];
        let mut i = 0;
        while i < BASE_DIMENSIONS {
            match self.0[i].checked_rem(n) {
                Some(0) => {}
                _ => return None,
            }
            out[i] = match self.0[i].checked_div(n) {
                Some(exponent) => exponent,
                None => return None,
            };
            i += 1;
        }
        Some(Self(out))
    }
}

/// Writes the composed base-unit symbol: `m+2 kg s-2`.
///
/// Exponent one is written bare, larger exponents with a `+` sign, negative exponents with their
/// `-` sign. The dimensionless vector writes nothing.
impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for base in BaseDimension::ALL {
            let exponent = self.exponent(base);
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(base.symbol())?;
            if exponent > 1 {
                write!(f, "+{exponent}")?;
            } else if exponent < 0 {
                write!(f, "{exponent}")?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level exponents and dimensions
// ─────────────────────────────────────────────────────────────────────────────

/// A type-level exponent: one of `typenum`'s signed integers.
pub trait Exponent: Integer + Send + Sync {
    /// [`B1`] for zero, [`B0`] otherwise.
    type IsZero: Flag;
}

impl Exponent for Z0 {
    type IsZero = B1;
}

impl<U: Unsigned + NonZero + Send + Sync> Exponent for PInt<U> {
    type IsZero = B0;
}

impl<U: Unsigned + NonZero + Send + Sync> Exponent for NInt<U> {
    type IsZero = B0;
}

/// A type-level dimension vector.
///
/// Implemented only by [`Dimensions`]; values are zero-sized.
pub trait Dimension: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// [`B1`] when all seven exponents are zero, [`B0`] otherwise.
    type IsDimensionless: Flag;

    /// Run-time form of this dimension.
    const VECTOR: DimensionVector;

    /// Run-time form of this dimension.
    #[inline]
    fn vector(self) -> DimensionVector {
        Self::VECTOR
    }
}

/// Type-level dimension vector.
///
/// The parameters are `typenum` integers for length, mass, time, electric current,
/// thermodynamic temperature, amount of substance and luminous intensity.
///
/// ```rust
/// use phys_units_core::{Dimension, Dimensions};
/// use typenum::{N2, P1, Z0};
///
/// type Force = Dimensions<P1, P1, N2, Z0, Z0, Z0, Z0>;
/// assert_eq!(Force::VECTOR.exponents(), [1, 1, -2, 0, 0, 0, 0]);
/// ```
pub struct Dimensions<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

/// The all-zero dimension. Quantities of this dimension are never built; they collapse to their
/// representation instead.
pub type DimensionlessD = Dimensions<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

impl<L, M, T, I, Th, N, J> Dimension for Dimensions<L, M, T, I, Th, N, J>
where
    L: Exponent,
    M: Exponent,
    T: Exponent,
    I: Exponent,
    Th: Exponent,
    N: Exponent,
    J: Exponent,
{
    type IsDimensionless = And<
        L::IsZero,
        And<M::IsZero, And<T::IsZero, And<I::IsZero, And<Th::IsZero, And<N::IsZero, J::IsZero>>>>>,
    >;

    const VECTOR: DimensionVector =
        DimensionVector::new([L::I8, M::I8, T::I8, I::I8, Th::I8, N::I8, J::I8]);
}

impl<L, M, T, I, Th, N, J> Clone for Dimensions<L, M, T, I, Th, N, J> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L, M, T, I, Th, N, J> Copy for Dimensions<L, M, T, I, Th, N, J> {}

impl<L, M, T, I, Th, N, J> Default for Dimensions<L, M, T, I, Th, N, J> {
    #[inline]
    fn default() -> Self {
        Dimensions(PhantomData)
    }
}

impl<L, M, T, I, Th, N, J> fmt::Debug for Dimensions<L, M, T, I, Th, N, J>
where
    L: Exponent,
    M: Exponent,
    T: Exponent,
    I: Exponent,
    Th: Exponent,
    N: Exponent,
    J: Exponent,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Dimensions")
            .field(&Self::VECTOR.exponents())
            .finish()
    }
}

impl<L, M, T, I, Th, N, J, L2, M2, T2, I2, Th2, N2, J2>
    PartialEq<Dimensions<L2, M2, T2, I2, Th2, N2, J2>> for Dimensions<L, M, T, I, Th, N, J>
where
    Self: Dimension,
    Dimensions<L2, M2, T2, I2, Th2, N2, J2>: Dimension,
{
    #[inline]
    fn eq(&self, _other: &Dimensions<L2, M2, T2, I2, Th2, N2, J2>) -> bool {
        Self::VECTOR == <Dimensions<L2, M2, T2, I2, Th2, N2, J2> as Dimension>::VECTOR
    }
}

impl<L, M, T, I, Th, N, J> Eq for Dimensions<L, M, T, I, Th, N, J> where Self: Dimension {}

impl<L, M, T, I, Th, N, J> Hash for Dimensions<L, M, T, I, Th, N, J>
where
    Self: Dimension,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        Self::VECTOR.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use typenum::{Bit, N1, N2, N3, P1, P2, P3};

    type Length = Dimensions<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    type Energy = Dimensions<P2, P1, N2, Z0, Z0, Z0, Z0>;
    type Odd = Dimensions<N3, Z0, P3, N1, Z0, Z0, Z0>;

    fn vector() -> impl Strategy<Value = DimensionVector> {
        prop::array::uniform7(-6i8..=6).prop_map(DimensionVector::new)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Type-level form
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn type_level_vector_matches_parameters() {
        assert_eq!(Length::VECTOR.exponents(), [1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(Energy::VECTOR.exponents(), [2, 1, -2, 0, 0, 0, 0]);
        assert_eq!(Odd::VECTOR.exponents(), [-3, 0, 3, -1, 0, 0, 0]);
        assert_eq!(DimensionlessD::VECTOR, DimensionVector::DIMENSIONLESS);
    }

    fn assert_dimension<D: Dimension>() {}

    #[test]
    fn dimensions_are_thread_safe_markers() {
        assert_dimension::<Length>();
        assert_dimension::<Odd>();
        assert_dimension::<DimensionlessD>();
        fn assert_send_sync<X: Send + Sync + 'static>() {}
        assert_send_sync::<crate::Quantity<Energy>>();
    }

    #[test]
    fn dimensionless_flag() {
        assert!(<DimensionlessD as Dimension>::IsDimensionless::BOOL);
        assert!(!<Length as Dimension>::IsDimensionless::BOOL);
        assert!(!<Odd as Dimension>::IsDimensionless::BOOL);
    }

    #[test]
    fn dimension_values_compare_by_vector() {
        assert_eq!(Length::default(), Length::default());
        assert_ne!(Length::default(), Energy::default());
        assert_eq!(Energy::default().vector(), Energy::VECTOR);
    }

    #[test]
    fn debug_shows_exponents() {
        let shown = format!("{:?}", Energy::default());
        assert_eq!(shown, "Dimensions([2, 1, -2, 0, 0, 0, 0])");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Predicates
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn is_base_only_for_single_unit_exponent() {
        for base in BaseDimension::ALL {
            assert!(DimensionVector::base(base).is_base());
        }
        assert!(!DimensionVector::DIMENSIONLESS.is_base());
        assert!(!DimensionVector::new([2, 0, 0, 0, 0, 0, 0]).is_base());
        assert!(!DimensionVector::new([1, 1, 0, 0, 0, 0, 0]).is_base());
        assert!(!DimensionVector::new([2, -1, 0, 0, 0, 0, 0]).is_base());
    }

    #[test]
    fn base_dimension_labels() {
        let symbols: Vec<_> = BaseDimension::ALL.iter().map(|b| b.symbol()).collect();
        assert_eq!(symbols, ["m", "kg", "s", "A", "K", "mol", "cd"]);
        assert_eq!(BaseDimension::Temperature.unit_name(), "kelvin");
        assert_eq!(BaseDimension::LuminousIntensity.index(), 6);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_composed_symbol() {
        assert_eq!(Energy::VECTOR.to_string(), "m+2 kg s-2");
        assert_eq!(Length::VECTOR.to_string(), "m");
        assert_eq!(
            DimensionVector::new([0, 0, 0, 0, 1, -1, 2]).to_string(),
            "K mol-1 cd+2"
        );
        assert_eq!(DimensionVector::DIMENSIONLESS.to_string(), "");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebra laws
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn exponent_overflow_is_none() {
        let big = DimensionVector::new([100, 0, 0, 0, 0, 0, 0]);
        assert_eq!(big.product(big), None);
        assert_eq!(big.power(2), None);
        assert_eq!(big.quotient(big.power(-1).unwrap()), None);

        let min = DimensionVector::new([i8::MIN, 0, 0, 0, 0, 0, 0]);
        assert_eq!(min.reciprocal(), None);
        assert_eq!(min.root(-1), None);
        assert_eq!(min.root(2), Some(DimensionVector::new([-64, 0, 0, 0, 0, 0, 0])));

        let max = DimensionVector::new([i8::MAX, 0, 0, 0, 0, 0, 0]);
        assert_eq!(max.product(min), Some(DimensionVector::new([-1, 0, 0, 0, 0, 0, 0])));
        assert_eq!(max.quotient(min), None);
        assert_eq!(min.quotient(max), None);
        assert_eq!(max.reciprocal(), Some(DimensionVector::new([-127, 0, 0, 0, 0, 0, 0])));
    }

    proptest! {
        #[test]
        fn product_is_commutative(a in vector(), b in vector()) {
            prop_assert_eq!(a.product(b), b.product(a));
        }

        #[test]
        fn quotient_is_product_with_reciprocal(a in vector(), b in vector()) {
            prop_assert_eq!(a.quotient(b), b.reciprocal().and_then(|r| a.product(r)));
        }

        #[test]
        fn quotient_with_self_is_dimensionless(a in vector()) {
            prop_assert_eq!(a.quotient(a), Some(DimensionVector::DIMENSIONLESS));
        }

        #[test]
        fn reciprocal_is_quotient_from_dimensionless(a in vector()) {
            prop_assert_eq!(a.reciprocal(), DimensionVector::DIMENSIONLESS.quotient(a));
        }

        #[test]
        fn root_inverts_power(a in vector(), n in 1i8..=3) {
            prop_assert_eq!(a.power(n).and_then(|p| p.root(n)), Some(a));
        }

        #[test]
        fn power_zero_is_dimensionless(a in vector()) {
            prop_assert_eq!(a.power(0), Some(DimensionVector::DIMENSIONLESS));
        }

        #[test]
        fn checked_ops_never_panic(
            a in prop::array::uniform7(any::<i8>()).prop_map(DimensionVector::new),
            b in prop::array::uniform7(any::<i8>()).prop_map(DimensionVector::new),
            n in any::<i8>(),
        ) {
            let _ = (a.product(b), a.quotient(b), a.reciprocal(), a.power(n), a.root(n));
        }
    }
}
