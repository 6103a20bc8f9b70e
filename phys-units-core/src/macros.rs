//! Macros for the operator and conversion impls that cannot be written generically.

/// Generates `From<Quantity<D, $from>> for Quantity<D, $to>` for each listed lossless widening.
///
/// A blanket impl over `Y: From<X>` would overlap with `impl<T> From<T> for T`, so the pairs are
/// spelled out.
macro_rules! impl_widening_from {
    ($($from:ty => $($to:ty),+);* $(;)?) => {
        $($(
            impl<D: $crate::Dimension> From<$crate::Quantity<D, $from>> for $crate::Quantity<D, $to> {
                #[inline]
                fn from(value: $crate::Quantity<D, $from>) -> Self {
                    value.convert()
                }
            }
        )+)*
    };
}

/// Generates the quantity/scalar operators for each primitive scalar type.
///
/// Scalars keep the dimension (`q * k`, `k * q`, `q / k`, `q *= k`, `q /= k`), except `k / q`
/// which takes the reciprocal dimension and collapses.
macro_rules! impl_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl<D: Dimension, X: Mul<$scalar>> Mul<$scalar> for Quantity<D, X> {
                type Output = Quantity<D, X::Output>;
                #[inline]
                fn mul(self, rhs: $scalar) -> Self::Output {
                    Quantity::from_raw(self.value * rhs)
                }
            }

            impl<D: Dimension, Y> Mul<Quantity<D, Y>> for $scalar
            where
                $scalar: Mul<Y>,
            {
                type Output = Quantity<D, <$scalar as Mul<Y>>::Output>;
                #[inline]
                fn mul(self, rhs: Quantity<D, Y>) -> Self::Output {
                    Quantity::from_raw(self * rhs.value)
                }
            }

            impl<D: Dimension, X: MulAssign<$scalar>> MulAssign<$scalar> for Quantity<D, X> {
                #[inline]
                fn mul_assign(&mut self, rhs: $scalar) {
                    self.value *= rhs;
                }
            }

            impl<D: Dimension, X: Div<$scalar>> Div<$scalar> for Quantity<D, X> {
                type Output = Quantity<D, X::Output>;
                #[inline]
                fn div(self, rhs: $scalar) -> Self::Output {
                    Quantity::from_raw(self.value / rhs)
                }
            }

            impl<D: Dimension, X: DivAssign<$scalar>> DivAssign<$scalar> for Quantity<D, X> {
                #[inline]
                fn div_assign(&mut self, rhs: $scalar) {
                    self.value /= rhs;
                }
            }

            impl<D: DimInv, Y> Div<Quantity<D, Y>> for $scalar
            where
                $scalar: Div<Y>,
            {
                type Output = Collapse<Reciprocal<D>, <$scalar as Div<Y>>::Output>;
                #[inline]
                fn div(self, rhs: Quantity<D, Y>) -> Self::Output {
                    collapse::<Reciprocal<D>, _>(self / rhs.value)
                }
            }
        )*
    };
}
