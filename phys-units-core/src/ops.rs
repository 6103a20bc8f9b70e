//! Operator and comparison impls for [`Quantity`].
//!
//! Addition, subtraction and comparison require the same dimension on both sides; anything else
//! has no impl and fails to compile. Multiplication and division combine dimensions and collapse a
//! dimensionless result to the bare magnitude. The result representation is always the output
//! type of the representation's own operator.

use crate::algebra::{DimDiv, DimInv, DimMul, Product, Quotient, Reciprocal};
use crate::collapse::{collapse, Collapse};
use crate::dimension::Dimension;
use crate::quantity::Quantity;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::Zero;

// ─────────────────────────────────────────────────────────────────────────────
// Same-dimension arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, X: Add<Y>, Y> Add<Quantity<D, Y>> for Quantity<D, X> {
    type Output = Quantity<D, X::Output>;
    #[inline]
    fn add(self, rhs: Quantity<D, Y>) -> Self::Output {
        Quantity::from_raw(self.value + rhs.value)
    }
}

impl<D: Dimension, X: AddAssign<Y>, Y> AddAssign<Quantity<D, Y>> for Quantity<D, X> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<D, Y>) {
        self.value += rhs.value;
    }
}

impl<D: Dimension, X: Sub<Y>, Y> Sub<Quantity<D, Y>> for Quantity<D, X> {
    type Output = Quantity<D, X::Output>;
    #[inline]
    fn sub(self, rhs: Quantity<D, Y>) -> Self::Output {
        Quantity::from_raw(self.value - rhs.value)
    }
}

impl<D: Dimension, X: SubAssign<Y>, Y> SubAssign<Quantity<D, Y>> for Quantity<D, X> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<D, Y>) {
        self.value -= rhs.value;
    }
}

impl<D: Dimension, X: Neg> Neg for Quantity<D, X> {
    type Output = Quantity<D, X::Output>;
    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::from_raw(-self.value)
    }
}

impl<D: Dimension, T: Zero> Sum for Quantity<D, T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl<'a, D: Dimension, T: Zero + Copy> Sum<&'a Quantity<D, T>> for Quantity<D, T> {
    fn sum<I: Iterator<Item = &'a Quantity<D, T>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + *q)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dimension-combining arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<Dx, Dy, X, Y> Mul<Quantity<Dy, Y>> for Quantity<Dx, X>
where
    Dx: Dimension + DimMul<Dy>,
    Dy: Dimension,
    X: Mul<Y>,
{
    type Output = Collapse<Product<Dx, Dy>, X::Output>;
    #[inline]
    fn mul(self, rhs: Quantity<Dy, Y>) -> Self::Output {
        collapse::<Product<Dx, Dy>, _>(self.value * rhs.value)
    }
}

impl<Dx, Dy, X, Y> Div<Quantity<Dy, Y>> for Quantity<Dx, X>
where
    Dx: Dimension + DimDiv<Dy>,
    Dy: Dimension,
    X: Div<Y>,
{
    type Output = Collapse<Quotient<Dx, Dy>, X::Output>;
    #[inline]
    fn div(self, rhs: Quantity<Dy, Y>) -> Self::Output {
        collapse::<Quotient<Dx, Dy>, _>(self.value / rhs.value)
    }
}

impl_scalar_ops!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, X: PartialEq<Y>, Y> PartialEq<Quantity<D, Y>> for Quantity<D, X> {
    #[inline]
    fn eq(&self, other: &Quantity<D, Y>) -> bool {
        self.value == other.value
    }
}

impl<D: Dimension, T: Eq> Eq for Quantity<D, T> {}

impl<D: Dimension, X: PartialOrd<Y>, Y> PartialOrd<Quantity<D, Y>> for Quantity<D, X> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<D, Y>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }

    #[inline]
    fn lt(&self, other: &Quantity<D, Y>) -> bool {
        self.value < other.value
    }

    #[inline]
    fn le(&self, other: &Quantity<D, Y>) -> bool {
        self.value <= other.value
    }

    #[inline]
    fn gt(&self, other: &Quantity<D, Y>) -> bool {
        self.value > other.value
    }

    #[inline]
    fn ge(&self, other: &Quantity<D, Y>) -> bool {
        self.value >= other.value
    }
}

impl<D: Dimension, T: Ord> Ord for Quantity<D, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<D: Dimension, T: Hash> Hash for Quantity<D, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::units::dimensions::{
        EnergyD, ForceD, FrequencyD, LengthD, MassD, TimeIntervalD, VelocityD,
    };
    use crate::units::si::{JOULE, KILOGRAM, METER, NEWTON, SECOND};
    use crate::{Magnitude, Quantity};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    type Length = Quantity<LengthD>;

    fn meters(x: f64) -> Length {
        x * METER
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Same-dimension arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_sub_neg() {
        assert_eq!(meters(3.0) + meters(7.0), meters(10.0));
        assert_eq!(meters(10.0) - meters(3.0), meters(7.0));
        assert_eq!(-meters(5.0), meters(-5.0));
    }

    #[test]
    fn compound_assignment() {
        let mut q = meters(5.0);
        q += meters(3.0);
        assert_eq!(q, meters(8.0));
        q -= meters(2.0);
        assert_eq!(q, meters(6.0));
        q *= 2.0;
        assert_eq!(q, meters(12.0));
        q /= 4.0;
        assert_eq!(q, meters(3.0));
    }

    #[test]
    fn integer_representation_addition() {
        let a: Quantity<LengthD, i32> = Quantity::new(Magnitude, 4);
        let b: Quantity<LengthD, i32> = Quantity::new(Magnitude, 3);
        let sum: Quantity<LengthD, i32> = a + b;
        assert_eq!(sum.magnitude(), 7);
        let mut acc: Quantity<LengthD, i64> = Quantity::new(Magnitude, 1);
        acc += Quantity::<LengthD, i64>::new(Magnitude, 2);
        assert_eq!(acc.magnitude(), 3);
    }

    /// Fixed-point millimetres that accept `f64` metres on the right-hand side.
    #[derive(Clone, Copy, Debug, PartialEq)]
    struct Millis(i64);

    impl core::ops::Add<f64> for Millis {
        type Output = Millis;
        fn add(self, rhs: f64) -> Millis {
            Millis(self.0 + (rhs * 1e3).round() as i64)
        }
    }

    impl core::ops::AddAssign<f64> for Millis {
        fn add_assign(&mut self, rhs: f64) {
            *self = *self + rhs;
        }
    }

    #[test]
    fn mixed_representation_addition() {
        let fixed: Quantity<LengthD, Millis> = Quantity::new(Magnitude, Millis(1500));
        let sum: Quantity<LengthD, Millis> = fixed + meters(0.25);
        assert_eq!(sum.into_magnitude(), Millis(1750));

        let mut acc = fixed;
        acc += meters(2.0);
        assert_eq!(acc.into_magnitude(), Millis(3500));
    }

    #[test]
    fn sum_of_iterator() {
        let parts = [meters(1.0), meters(2.0), meters(3.5)];
        let total: Length = parts.iter().sum();
        assert_eq!(total, meters(6.5));
        let total: Length = parts.into_iter().sum();
        assert_eq!(total, meters(6.5));
        let empty: Length = core::iter::empty::<Length>().sum();
        assert_eq!(empty, meters(0.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dimension-combining arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn product_combines_dimensions() {
        let work: Quantity<EnergyD> = (2.0 * NEWTON) * meters(2.0);
        assert_eq!(work, 4.0 * JOULE);
        let force: Quantity<ForceD> = (3.0 * KILOGRAM) * (2.0 * METER / (SECOND * SECOND));
        assert_eq!(force.magnitude(), 6.0);
    }

    #[test]
    fn quotient_combines_dimensions() {
        let v: Quantity<VelocityD> = meters(20.0) / (5.0 * SECOND);
        assert_eq!(v.magnitude(), 4.0);
    }

    #[test]
    fn dimensionless_results_collapse() {
        let ratio: f64 = meters(6.0) / meters(3.0);
        assert_eq!(ratio, 2.0);
        let count: f64 = (5.0 / SECOND) * (4.0 * SECOND);
        assert_eq!(count, 20.0);
        let int_ratio: i32 =
            Quantity::<MassD, i32>::new(Magnitude, 9) / Quantity::<MassD, i32>::new(Magnitude, 2);
        assert_eq!(int_ratio, 4);
    }

    #[test]
    fn scalar_operations() {
        let v = 20.0 * METER / SECOND;
        assert_eq!(v / 5.0, 4.0 * METER / SECOND);
        assert_eq!(v * 0.5, 10.0 * METER / SECOND);
        assert_eq!(0.5 * v, 10.0 * METER / SECOND);
        let f: Quantity<FrequencyD> = 8.0 / (4.0 * SECOND);
        assert_eq!(f.magnitude(), 2.0);
        let pace: Quantity<crate::Reciprocal<VelocityD>> = 8.0 / (4.0 * METER / SECOND);
        assert_eq!(pace.magnitude(), 2.0);
    }

    #[test]
    fn integer_scalars() {
        let n: Quantity<TimeIntervalD, u32> = Quantity::new(Magnitude, 6);
        assert_eq!((n * 2u32).magnitude(), 12);
        assert_eq!((3u32 * n).magnitude(), 18);
        assert_eq!((n / 4u32).magnitude(), 1);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparisons() {
        assert!(meters(1.0) < meters(2.0));
        assert!(meters(2.0) <= meters(2.0));
        assert!(meters(3.0) > meters(2.0));
        assert!(meters(2.0) >= meters(2.0));
        assert!(meters(1.0) != meters(2.0));
        let nan = meters(f64::NAN);
        assert!(nan != nan);
        assert_eq!(nan.partial_cmp(&nan), None);
    }

    #[test]
    fn integer_quantities_are_ord_and_hash() {
        use std::collections::HashSet;
        let mut q: Vec<Quantity<LengthD, i64>> =
            [3, 1, 2].iter().map(|&n| Quantity::new(Magnitude, n)).collect();
        q.sort();
        assert_eq!(q.iter().map(|x| x.magnitude()).collect::<Vec<_>>(), [1, 2, 3]);
        let set: HashSet<_> = q.into_iter().chain([Quantity::new(Magnitude, 2)]).collect();
        assert_eq!(set.len(), 3);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebraic laws
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn addition_is_commutative(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(meters(a) + meters(b), meters(b) + meters(a));
        }

        #[test]
        fn additive_inverse(a in -1e6f64..1e6) {
            prop_assert_eq!(meters(a) + (-meters(a)), meters(0.0));
            prop_assert_eq!(meters(a) - meters(a), meters(0.0));
        }

        #[test]
        fn negation_is_an_involution(a in -1e6f64..1e6) {
            prop_assert_eq!(-(-meters(a)), meters(a));
        }

        #[test]
        fn subtraction_is_anticommutative(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(meters(a) - meters(b), -(meters(b) - meters(a)));
        }

        #[test]
        fn non_strict_ordering_agrees_with_strict(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let (x, y) = (meters(a), meters(b));
            prop_assert_eq!(x <= y, x < y || x == y);
            prop_assert_eq!(x >= y, x > y || x == y);
            prop_assert_eq!(x < y, y > x);
        }

        #[test]
        fn ordering_is_total_for_finite_values(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            let (x, y) = (meters(a), meters(b));
            let holds = [x < y, x == y, x > y].iter().filter(|&&p| p).count();
            prop_assert_eq!(holds, 1);
        }

        #[test]
        fn square_root_inverts_square(a in 1e-3f64..1e3) {
            let back = meters(a).square().sqrt();
            prop_assert!((back.to(METER) - a).abs() <= 1e-12 * a);
        }
    }

    #[test]
    fn product_then_quotient_restores() {
        let m = 3.0 * KILOGRAM;
        let l = meters(2.0);
        assert_relative_eq!(((m * l) / l).to(KILOGRAM), 3.0);
    }
}
