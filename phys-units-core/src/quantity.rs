//! Quantity type and its implementations.

use crate::algebra::{DimDiv, DimInv, DimMul, DimPow, DimRoot, Power, Product, Quotient, Reciprocal, Root};
use crate::collapse::{collapse, Collapse};
use crate::dimension::Dimension;
use crate::Rep;
use core::fmt;
use core::marker::PhantomData;
use core::ops::{Div, Mul};
use num_traits::{AsPrimitive, Float, Signed, Zero};
use typenum::{Integer, NonZero, P2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Tag that must be spelled out to build a quantity from a bare number.
///
/// Building a quantity straight from a magnitude bypasses the unit system, so
/// [`Quantity::new`] asks for this tag to make the call site stand out. The usual way to get a
/// quantity is a number times a unit constant: `3.0 * METER`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Magnitude;

/// A physical quantity: a magnitude of type `T` tagged with the dimension `D`.
///
/// The dimension lives only in the type. A `Quantity<D, T>` has the size and layout of `T`, and
/// every operation compiles to the operation on `T`. Quantities with an all-zero dimension are
/// never built: operations that would produce one return the bare magnitude instead (see
/// [`Collapse`](crate::Collapse)), and every constructor rejects such a `D` at compile time.
///
/// ```rust
/// use phys_units_core::units::si::{METER, NEWTON, JOULE};
///
/// let work = (2.0 * NEWTON) * (2.0 * METER);
/// assert_eq!(work, 4.0 * JOULE);
/// assert_eq!(work.to(JOULE), 4.0);
/// ```
#[repr(transparent)]
pub struct Quantity<D: Dimension, T = Rep> {
    pub(crate) value: T,
    dimension: PhantomData<D>,
}

impl<D: Dimension, T> Quantity<D, T> {
    /// Creates a quantity from its magnitude in base SI units.
    ///
    /// ```rust
    /// use phys_units_core::{Magnitude, Quantity};
    /// use phys_units_core::units::dimensions::LengthD;
    ///
    /// const HEIGHT: Quantity<LengthD> = Quantity::new(Magnitude, 1.8);
    /// assert_eq!(HEIGHT.magnitude(), 1.8);
    /// ```
    #[inline]
    pub const fn new(_tag: Magnitude, value: T) -> Self {
        Self::from_raw(value)
    }

    #[inline(always)]
    pub(crate) const fn from_raw(value: T) -> Self {
        const {
            assert!(
                !D::VECTOR.is_dimensionless(),
                "quantity dimensions must not all be zero"
            )
        };
        Self {
            value,
            dimension: PhantomData,
        }
    }

    /// Returns the magnitude in base SI units.
    #[inline]
    pub const fn magnitude(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Consumes the quantity and returns its magnitude.
    #[inline]
    pub fn into_magnitude(self) -> T {
        self.value
    }

    /// Returns the zero-sized dimension value. Use `D::VECTOR` for the run-time exponents.
    ///
    /// ```rust
    /// use phys_units_core::Dimension;
    /// use phys_units_core::units::si::VOLT;
    ///
    /// assert_eq!(VOLT.dimension().vector().exponents(), [2, 1, -3, -1, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn dimension(&self) -> D {
        D::default()
    }

    /// Expresses this quantity as a multiple of `unit`, which must have the same dimension.
    ///
    /// ```rust
    /// use phys_units_core::units::si::{KILO, METER};
    ///
    /// let d = 2500.0 * METER;
    /// assert_eq!(d.to(KILO * METER), 2.5);
    /// ```
    #[inline]
    pub fn to<Y>(self, unit: Quantity<D, Y>) -> <T as Div<Y>>::Output
    where
        T: Div<Y>,
    {
        self.value / unit.value
    }

    /// The zero quantity of this dimension and representation.
    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::from_raw(T::zero())
    }

    /// Converts the representation losslessly through [`From`].
    ///
    /// ```rust
    /// use phys_units_core::{Magnitude, Quantity};
    /// use phys_units_core::units::dimensions::TimeIntervalD;
    ///
    /// let ticks: Quantity<TimeIntervalD, i32> = Quantity::new(Magnitude, 3);
    /// let wide: Quantity<TimeIntervalD, i64> = ticks.convert();
    /// assert_eq!(wide.magnitude(), 3i64);
    /// ```
    #[inline]
    pub fn convert<Y: From<T>>(self) -> Quantity<D, Y> {
        Quantity::from_raw(Y::from(self.value))
    }

    /// Converts the representation with `as` semantics (possibly lossy).
    #[inline]
    pub fn cast<Y>(self) -> Quantity<D, Y>
    where
        T: AsPrimitive<Y>,
        Y: Copy + 'static,
    {
        Quantity::from_raw(self.value.as_())
    }

    /// Absolute value.
    #[inline]
    pub fn abs(self) -> Self
    where
        T: Signed,
    {
        Self::from_raw(self.value.abs())
    }

    /// Raises the quantity to the integer power `E`; the dimension is multiplied by `E`.
    ///
    /// ```rust
    /// use phys_units_core::units::si::METER;
    /// use typenum::P3;
    ///
    /// let volume = (2.0 * METER).nth_power::<P3>();
    /// assert_eq!(volume, 8.0 * METER * METER * METER);
    /// ```
    #[inline]
    pub fn nth_power<E>(self) -> Collapse<Power<D, E>, T>
    where
        E: Integer,
        D: DimPow<E>,
        T: Float,
    {
        collapse::<Power<D, E>, T>(self.value.powi(E::I32))
    }

    /// `self * self`.
    #[inline]
    pub fn square(self) -> <Self as Mul>::Output
    where
        T: Copy,
        Self: Mul,
    {
        self * self
    }

    /// `self * self * self`.
    #[inline]
    pub fn cube(self) -> <<Self as Mul>::Output as Mul<Self>>::Output
    where
        T: Copy,
        Self: Mul,
        <Self as Mul>::Output: Mul<Self>,
    {
        self * self * self
    }

    /// The `E`-th root; every exponent of the dimension must be divisible by `E`.
    ///
    /// ```rust
    /// use phys_units_core::units::si::METER;
    /// use typenum::P3;
    ///
    /// let volume = 27.0 * METER * METER * METER;
    /// let side = volume.nth_root::<P3>();
    /// assert!((side.to(METER) - 3.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn nth_root<E>(self) -> Collapse<Root<D, E>, T>
    where
        E: Integer + NonZero,
        D: DimRoot<E>,
        T: Float + From<i8>,
    {
        let exponent = T::one() / <T as From<i8>>::from(E::I8);
        collapse::<Root<D, E>, T>(self.value.powf(exponent))
    }

    /// Square root; every exponent of the dimension must be even.
    ///
    /// ```rust
    /// use phys_units_core::units::si::METER;
    ///
    /// let area = 10_000.0 * METER * METER * METER * METER;
    /// assert_eq!(area.sqrt(), 100.0 * METER * METER);
    /// ```
    #[inline]
    pub fn sqrt(self) -> Collapse<Root<D, P2>, T>
    where
        D: DimRoot<P2>,
        T: Float,
    {
        collapse::<Root<D, P2>, T>(self.value.sqrt())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Const builders for unit tables
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension> Quantity<D, Rep> {
    /// Multiplies the magnitude by `factor`; usable in `const` items.
    #[inline]
    pub const fn scaled(self, factor: Rep) -> Self {
        Self::from_raw(self.value * factor)
    }

    /// `self * rhs`, usable in `const` items.
    ///
    /// Unlike the `*` operator this does not collapse: a dimensionless product is a compile
    /// error.
    ///
    /// ```rust
    /// use phys_units_core::Quantity;
    /// use phys_units_core::units::dimensions::EnergyD;
    /// use phys_units_core::units::si::{METER, NEWTON};
    ///
    /// const NEWTON_METER: Quantity<EnergyD> = NEWTON.times(METER);
    /// assert_eq!(NEWTON_METER.magnitude(), 1.0);
    /// ```
    #[inline]
    pub const fn times<E: Dimension>(self, rhs: Quantity<E, Rep>) -> Quantity<Product<D, E>, Rep>
    where
        D: DimMul<E>,
    {
        Quantity::from_raw(self.value * rhs.value)
    }

    /// `self / rhs`, usable in `const` items. A dimensionless quotient is a compile error.
    #[inline]
    pub const fn per<E: Dimension>(self, rhs: Quantity<E, Rep>) -> Quantity<Quotient<D, E>, Rep>
    where
        D: DimDiv<E>,
    {
        Quantity::from_raw(self.value / rhs.value)
    }

    /// `1 / self`, usable in `const` items.
    #[inline]
    pub const fn recip(self) -> Quantity<Reciprocal<D>, Rep>
    where
        D: DimInv,
    {
        Quantity::from_raw(1.0 / self.value)
    }

    /// `self * self`, usable in `const` items.
    #[inline]
    pub const fn squared(self) -> Quantity<Product<D, D>, Rep>
    where
        D: DimMul<D>,
    {
        self.times(self)
    }

    /// `self * self * self`, usable in `const` items.
    #[inline]
    pub const fn cubed(self) -> Quantity<Product<Product<D, D>, D>, Rep>
    where
        D: DimMul<D>,
        Product<D, D>: DimMul<D>,
    {
        self.squared().times(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free functions
// ─────────────────────────────────────────────────────────────────────────────

/// Magnitude of `q` in base SI units.
#[inline]
pub fn magnitude<D: Dimension, T: Copy>(q: &Quantity<D, T>) -> T {
    q.value
}

/// Dimension value of `q`.
#[inline]
pub fn dimension<D: Dimension, T>(q: &Quantity<D, T>) -> D {
    q.dimension()
}

/// Absolute value of `q`.
#[inline]
pub fn abs<D: Dimension, T: Signed>(q: Quantity<D, T>) -> Quantity<D, T> {
    q.abs()
}

/// `q` raised to the integer power `E`.
#[inline]
pub fn nth_power<E, D, T>(q: Quantity<D, T>) -> Collapse<Power<D, E>, T>
where
    E: Integer,
    D: DimPow<E>,
    T: Float,
{
    q.nth_power::<E>()
}

/// `q * q`.
#[inline]
pub fn square<D, T>(q: Quantity<D, T>) -> <Quantity<D, T> as Mul>::Output
where
    D: Dimension,
    T: Copy,
    Quantity<D, T>: Mul,
{
    q.square()
}

/// `q * q * q`.
#[inline]
pub fn cube<D, T>(q: Quantity<D, T>) -> <<Quantity<D, T> as Mul>::Output as Mul<Quantity<D, T>>>::Output
where
    D: Dimension,
    T: Copy,
    Quantity<D, T>: Mul,
    <Quantity<D, T> as Mul>::Output: Mul<Quantity<D, T>>,
{
    q.cube()
}

/// The `E`-th root of `q`.
#[inline]
pub fn nth_root<E, D, T>(q: Quantity<D, T>) -> Collapse<Root<D, E>, T>
where
    E: Integer + NonZero,
    D: DimRoot<E>,
    T: Float + From<i8>,
{
    q.nth_root::<E>()
}

/// Square root of `q`.
#[inline]
pub fn sqrt<D, T>(q: Quantity<D, T>) -> Collapse<Root<D, P2>, T>
where
    D: DimRoot<P2>,
    T: Float,
{
    q.sqrt()
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait impls
// ─────────────────────────────────────────────────────────────────────────────

impl<D: Dimension, T: Clone> Clone for Quantity<D, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_raw(self.value.clone())
    }
}

impl<D: Dimension, T: Copy> Copy for Quantity<D, T> {}

impl<D: Dimension, T: Default> Default for Quantity<D, T> {
    #[inline]
    fn default() -> Self {
        Self::from_raw(T::default())
    }
}

impl<D: Dimension, T: fmt::Debug> fmt::Debug for Quantity<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("magnitude", &self.value)
            .field("dimension", &D::VECTOR.exponents())
            .finish()
    }
}

impl<D: Dimension, T: Zero> Zero for Quantity<D, T> {
    #[inline]
    fn zero() -> Self {
        Self::from_raw(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl_widening_from! {
    f32 => f64;
    i8 => i16, i32, i64, i128, f32, f64;
    i16 => i32, i64, i128, f32, f64;
    i32 => i64, i128, f64;
    i64 => i128;
    u8 => u16, u32, u64, u128, i16, i32, i64, i128, f32, f64;
    u16 => u32, u64, u128, i32, i64, i128, f32, f64;
    u32 => u64, u128, i64, i128, f64;
    u64 => u128, i128;
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D: Dimension, T: Serialize> Serialize for Quantity<D, T> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D: Dimension, T: Deserialize<'de>> Deserialize<'de> for Quantity<D, T> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Quantity::from_raw)
    }
}

/// Serde helper module for serializing quantities with their unit symbol.
///
/// Use it with `#[serde(with = "...")]` to keep the symbol in the serialized form. On input the
/// symbol is optional; when present it must match the field's dimension.
///
/// ```rust
/// use phys_units_core::Quantity;
/// use phys_units_core::units::dimensions::ForceD;
/// use phys_units_core::units::si::NEWTON;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Load {
///     #[serde(with = "phys_units_core::serde_with_unit")]
///     peak: Quantity<ForceD>, // {"value": 12.0, "unit": "N"}
///     mean: Quantity<ForceD>, // 8.0
/// }
///
/// let load = Load { peak: 12.0 * NEWTON, mean: 8.0 * NEWTON };
/// let json = serde_json::to_string(&load).unwrap();
/// assert_eq!(json, r#"{"peak":{"value":12.0,"unit":"N"},"mean":8.0}"#);
/// ```
#[cfg(all(feature = "serde", feature = "std"))]
pub mod serde_with_unit {
    use super::*;
    use crate::error::QuantityError;
    use crate::io::UnitSymbol;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<D, T>` as a struct with `value` and `unit` fields.
    pub fn serialize<D, T, S>(quantity: &Quantity<D, T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        T: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value)?;
        state.serialize_field("unit", &UnitSymbol::of::<D>().to_string())?;
        state.end()
    }

    /// Deserializes a `Quantity<D, T>` from a struct with `value` and an optional `unit` field.
    pub fn deserialize<'de, D, T, De>(deserializer: De) -> Result<Quantity<D, T>, De::Error>
    where
        D: Dimension,
        T: Deserialize<'de>,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<D, T>(PhantomData<(D, T)>);

        impl<'de, D: Dimension, T: Deserialize<'de>> Visitor<'de> for QuantityVisitor<D, T> {
            type Value = Quantity<D, T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D, T>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(found) = unit {
                    let expected = UnitSymbol::of::<D>().to_string();
                    if found != expected {
                        log::debug!("rejecting quantity with unit '{found}', expected '{expected}'");
                        return Err(de::Error::custom(QuantityError::UnitMismatch {
                            expected,
                            found,
                        }));
                    }
                }

                Ok(Quantity::from_raw(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::dimensions::{AreaD, LengthD, MassD, TimeIntervalD, VelocityD, VolumeD};
    use crate::units::si::{KILOGRAM, METER, SECOND};
    use approx::assert_relative_eq;
    use typenum::{N1, P3, Z0};

    type Length = Quantity<LengthD>;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and access
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_and_magnitude() {
        let q: Length = Quantity::new(Magnitude, 42.0);
        assert_eq!(q.magnitude(), 42.0);
        assert_eq!(magnitude(&q), 42.0);
        assert_eq!(q.into_magnitude(), 42.0);
    }

    #[test]
    fn dimension_value() {
        let v = 3.0 * METER / SECOND;
        assert_eq!(v.dimension().vector(), VelocityD::VECTOR);
        assert_eq!(dimension(&v), VelocityD::default());
    }

    #[test]
    fn zero_and_default() {
        assert_eq!(Length::zero().magnitude(), 0.0);
        assert_eq!(Length::default().magnitude(), 0.0);
        assert!(<Length as Zero>::zero().is_zero());
        let ticks: Quantity<TimeIntervalD, u32> = Default::default();
        assert_eq!(ticks.magnitude(), 0);
    }

    #[test]
    fn layout_is_transparent() {
        assert_eq!(core::mem::size_of::<Length>(), core::mem::size_of::<Rep>());
        assert_eq!(core::mem::size_of::<Quantity<MassD, u8>>(), 1);
    }

    #[test]
    fn debug_shows_magnitude_and_exponents() {
        let q = 2.0 * KILOGRAM;
        let shown = format!("{q:?}");
        assert!(shown.contains("magnitude: 2.0"));
        assert!(shown.contains("[0, 1, 0, 0, 0, 0, 0]"));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Representation conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn convert_and_from_widen() {
        let n: Quantity<LengthD, i16> = Quantity::new(Magnitude, -7);
        let wide: Quantity<LengthD, i64> = n.convert();
        assert_eq!(wide.magnitude(), -7);
        let float: Quantity<LengthD, f64> = Quantity::from(Quantity::<LengthD, i32>::new(Magnitude, 5));
        assert_eq!(float.magnitude(), 5.0);
        let single: Quantity<LengthD, f32> = Quantity::new(Magnitude, 1.5);
        let double: Quantity<LengthD, f64> = single.into();
        assert_eq!(double.magnitude(), 1.5);
    }

    #[test]
    fn cast_truncates() {
        let q: Quantity<LengthD, f64> = Quantity::new(Magnitude, 2.75);
        let n: Quantity<LengthD, i32> = q.cast();
        assert_eq!(n.magnitude(), 2);
    }

    #[test]
    fn to_reference_unit() {
        let d = 1500.0 * METER;
        assert_eq!(d.to(METER), 1500.0);
        assert_relative_eq!(d.to(1000.0 * METER), 1.5);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Const builders
    // ─────────────────────────────────────────────────────────────────────────────

    const AREA: Quantity<AreaD> = METER.squared();
    const VOLUME: Quantity<VolumeD> = METER.cubed();
    const SPEED: Quantity<VelocityD> = METER.scaled(3.0).per(SECOND);
    const HERTZ_LIKE: Quantity<crate::units::dimensions::FrequencyD> = SECOND.scaled(0.5).recip();

    #[test]
    fn const_builders() {
        assert_eq!(AREA.magnitude(), 1.0);
        assert_eq!(VOLUME.magnitude(), 1.0);
        assert_eq!(SPEED.magnitude(), 3.0);
        assert_eq!(HERTZ_LIKE.magnitude(), 2.0);
        assert_eq!(METER.times(KILOGRAM).magnitude(), 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Powers and roots
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn abs_keeps_dimension() {
        let q = -3.0 * METER;
        assert_eq!(q.abs(), 3.0 * METER);
        assert_eq!(abs(q), 3.0 * METER);
    }

    #[test]
    fn powers() {
        let side = 2.0 * METER;
        let volume: Quantity<VolumeD> = side.nth_power::<P3>();
        assert_eq!(volume.magnitude(), 8.0);
        assert_eq!(nth_power::<P3, _, _>(side), volume);
        assert_eq!(side.square(), 4.0 * METER * METER);
        assert_eq!(cube(side), volume);
        assert_eq!(square(side), side.square());
    }

    #[test]
    fn power_zero_collapses() {
        let one: f64 = (5.0 * METER).nth_power::<Z0>();
        assert_eq!(one, 1.0);
    }

    #[test]
    fn negative_power() {
        let inv = (4.0 * SECOND).nth_power::<N1>();
        assert_eq!(inv, 0.25 / SECOND);
    }

    #[test]
    fn roots() {
        let volume = 27.0 * METER.cubed();
        assert_relative_eq!(volume.nth_root::<P3>().to(METER), 3.0, epsilon = 1e-12);
        assert_relative_eq!(nth_root::<P3, _, _>(volume).to(METER), 3.0, epsilon = 1e-12);
        let area = 16.0 * METER.squared();
        assert_eq!(area.sqrt(), 4.0 * METER);
        assert_eq!(sqrt(area), 4.0 * METER);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use crate::units::dimensions::ForceD;
        use crate::units::si::NEWTON;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serializes_as_bare_magnitude() {
            let q = 12.5 * METER;
            assert_eq!(serde_json::to_string(&q).unwrap(), "12.5");
            let back: Length = serde_json::from_str("12.5").unwrap();
            assert_eq!(back, q);
        }

        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Load {
            #[serde(with = "crate::serde_with_unit")]
            peak: Quantity<ForceD>,
        }

        #[test]
        fn with_unit_round_trip() {
            let load = Load { peak: 3.0 * NEWTON };
            let json = serde_json::to_string(&load).unwrap();
            assert_eq!(json, r#"{"peak":{"value":3.0,"unit":"N"}}"#);
            let back: Load = serde_json::from_str(&json).unwrap();
            assert_eq!(back, load);
        }

        #[test]
        fn with_unit_accepts_missing_symbol() {
            let back: Load = serde_json::from_str(r#"{"peak":{"value":2.0}}"#).unwrap();
            assert_eq!(back.peak, 2.0 * NEWTON);
        }

        #[test]
        fn with_unit_rejects_wrong_symbol() {
            let err = serde_json::from_str::<Load>(r#"{"peak":{"value":2.0,"unit":"J"}}"#)
                .unwrap_err()
                .to_string();
            assert!(err.contains("unit mismatch: expected 'N', found 'J'"));
        }

        #[test]
        fn with_unit_rejects_missing_value() {
            let err = serde_json::from_str::<Load>(r#"{"peak":{"unit":"N"}}"#).unwrap_err();
            assert!(err.to_string().contains("missing field `value`"));
        }
    }
}
