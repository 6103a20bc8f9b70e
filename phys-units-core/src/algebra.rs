//! Type-level dimension algebra.
//!
//! Each trait computes a result dimension from one or two [`Dimensions`] at compile time, exponent
//! by exponent, with `typenum` arithmetic. The aliases ([`Product`], [`Quotient`], [`Reciprocal`],
//! [`Power`], [`Root`]) are what the operator impls spell out.
//!
//! Roots use [`PartialDiv`], which only exists for exact division: taking the square root of a
//! volume, or a zeroth root of anything, has no impl and does not compile.

use crate::dimension::{Dimension, Dimensions, Exponent};
use core::ops::{Add, Mul, Neg, Sub};
use typenum::{Diff, Integer, Negate, NonZero, PartialDiv, PartialQuot, Prod, Sum};

/// Dimension of a product: exponents add.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of a quotient: exponents subtract.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of a reciprocal: exponents negate.
pub trait DimInv: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of an integer power `E`: exponents are multiplied by `E`.
pub trait DimPow<E: Integer>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of an integer root `E`: exponents are divided by `E`, exactly.
pub trait DimRoot<E: Integer + NonZero>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// `A * B`.
pub type Product<A, B> = <A as DimMul<B>>::Output;
/// `A / B`.
pub type Quotient<A, B> = <A as DimDiv<B>>::Output;
/// `1 / A`.
pub type Reciprocal<A> = <A as DimInv>::Output;
/// `A` raised to `E`.
pub type Power<A, E> = <A as DimPow<E>>::Output;
/// The `E`-th root of `A`.
pub type Root<A, E> = <A as DimRoot<E>>::Output;

impl<La, Ma, Ta, Ia, Tha, Na, Ja, Lb, Mb, Tb, Ib, Thb, Nb, Jb>
    DimMul<Dimensions<Lb, Mb, Tb, Ib, Thb, Nb, Jb>> for Dimensions<La, Ma, Ta, Ia, Tha, Na, Ja>
where
    Self: Dimension,
    Dimensions<Lb, Mb, Tb, Ib, Thb, Nb, Jb>: Dimension,
    La: Add<Lb>,
    Ma: Add<Mb>,
    Ta: Add<Tb>,
    Ia: Add<Ib>,
    Tha: Add<Thb>,
    Na: Add<Nb>,
    Ja: Add<Jb>,
    Sum<La, Lb>: Exponent,
    Sum<Ma, Mb>: Exponent,
    Sum<Ta, Tb>: Exponent,
    Sum<Ia, Ib>: Exponent,
    Sum<Tha, Thb>: Exponent,
    Sum<Na, Nb>: Exponent,
    Sum<Ja, Jb>: Exponent,
{
    type Output = Dimensions<
        Sum<La, Lb>,
        Sum<Ma, Mb>,
        Sum<Ta, Tb>,
        Sum<Ia, Ib>,
        Sum<Tha, Thb>,
        Sum<Na, Nb>,
        Sum<Ja, Jb>,
    >;
}

impl<La, Ma, Ta, Ia, Tha, Na, Ja, Lb, Mb, Tb, Ib, Thb, Nb, Jb>
    DimDiv<Dimensions<Lb, Mb, Tb, Ib, Thb, Nb, Jb>> for Dimensions<La, Ma, Ta, Ia, Tha, Na, Ja>
where
    Self: Dimension,
    Dimensions<Lb, Mb, Tb, Ib, Thb, Nb, Jb>: Dimension,
    La: Sub<Lb>,
    Ma: Sub<Mb>,
    Ta: Sub<Tb>,
    Ia: Sub<Ib>,
    Tha: Sub<Thb>,
    Na: Sub<Nb>,
    Ja: Sub<Jb>,
    Diff<La, Lb>: Exponent,
    Diff<Ma, Mb>: Exponent,
    Diff<Ta, Tb>: Exponent,
    Diff<Ia, Ib>: Exponent,
    Diff<Tha, Thb>: Exponent,
    Diff<Na, Nb>: Exponent,
    Diff<Ja, Jb>: Exponent,
{
    type Output = Dimensions<
        Diff<La, Lb>,
        Diff<Ma, Mb>,
        Diff<Ta, Tb>,
        Diff<Ia, Ib>,
        Diff<Tha, Thb>,
        Diff<Na, Nb>,
        Diff<Ja, Jb>,
    >;
}

impl<L, M, T, I, Th, N, J> DimInv for Dimensions<L, M, T, I, Th, N, J>
where
    Self: Dimension,
    L: Neg,
    M: Neg,
    T: Neg,
    I: Neg,
    Th: Neg,
    N: Neg,
    J: Neg,
    Negate<L>: Exponent,
    Negate<M>: Exponent,
    Negate<T>: Exponent,
    Negate<I>: Exponent,
    Negate<Th>: Exponent,
    Negate<N>: Exponent,
    Negate<J>: Exponent,
{
    type Output = Dimensions<
        Negate<L>,
        Negate<M>,
        Negate<T>,
        Negate<I>,
        Negate<Th>,
        Negate<N>,
        Negate<J>,
    >;
}

impl<L, M, T, I, Th, N, J, E> DimPow<E> for Dimensions<L, M, T, I, Th, N, J>
where
    Self: Dimension,
    E: Integer,
    L: Mul<E>,
    M: Mul<E>,
    T: Mul<E>,
    I: Mul<E>,
    Th: Mul<E>,
    N: Mul<E>,
    J: Mul<E>,
    Prod<L, E>: Exponent,
    Prod<M, E>: Exponent,
    Prod<T, E>: Exponent,
    Prod<I, E>: Exponent,
    Prod<Th, E>: Exponent,
    Prod<N, E>: Exponent,
    Prod<J, E>: Exponent,
{
    type Output = Dimensions<
        Prod<L, E>,
        Prod<M, E>,
        Prod<T, E>,
        Prod<I, E>,
        Prod<Th, E>,
        Prod<N, E>,
        Prod<J, E>,
    >;
}

impl<L, M, T, I, Th, N, J, E> DimRoot<E> for Dimensions<L, M, T, I, Th, N, J>
where
    Self: Dimension,
    E: Integer + NonZero,
    L: PartialDiv<E>,
    M: PartialDiv<E>,
    T: PartialDiv<E>,
    I: PartialDiv<E>,
    Th: PartialDiv<E>,
    N: PartialDiv<E>,
    J: PartialDiv<E>,
    PartialQuot<L, E>: Exponent,
    PartialQuot<M, E>: Exponent,
    PartialQuot<T, E>: Exponent,
    PartialQuot<I, E>: Exponent,
    PartialQuot<Th, E>: Exponent,
    PartialQuot<N, E>: Exponent,
    PartialQuot<J, E>: Exponent,
{
    type Output = Dimensions<
        PartialQuot<L, E>,
        PartialQuot<M, E>,
        PartialQuot<T, E>,
        PartialQuot<I, E>,
        PartialQuot<Th, E>,
        PartialQuot<N, E>,
        PartialQuot<J, E>,
    >;
}
