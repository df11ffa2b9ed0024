//! Per-type registry of numeric constants and conversions.
//!
//! Scalar types do not carry their identity elements as members. Instead the
//! [`NumberTraits`] trait is implemented once per scalar type and looked up
//! through the type itself, which lets third-party numeric types take part
//! without being modified.
//!
//! # Examples
//!
//! ```
//! use digital_geometry::kernel::number_traits::NumberTraits;
//!
//! assert_eq!(<i32 as NumberTraits>::zero(), 0);
//! assert_eq!(<i32 as NumberTraits>::one(), 1);
//! assert_eq!(42_i64.cast_to_double(), 42.0);
//!
//! assert!(<i16 as NumberTraits>::IS_SIGNED);
//! assert!(!<u16 as NumberTraits>::IS_SIGNED);
//! assert!(<f64 as NumberTraits>::IS_BOUNDED);
//! assert_eq!(<u8 as NumberTraits>::max_value(), Some(255));
//! ```

use num_traits::{Bounded, ToPrimitive};
use std::ops::{Add, Sub};

/// Numeric constants and conversions registered for a scalar type.
///
/// The identity elements are exposed as functions rather than associated
/// constants so that heap-backed integers (e.g. `BigInt`) can be registered.
pub trait NumberTraits: Sized {
    /// Whether the type can represent negative values.
    const IS_SIGNED: bool;

    /// Whether the type has finite minimum and maximum values.
    const IS_BOUNDED: bool;

    /// Whether the type only represents integers.
    const IS_INTEGRAL: bool;

    /// The additive identity.
    #[must_use]
    fn zero() -> Self;

    /// The multiplicative identity.
    #[must_use]
    fn one() -> Self;

    /// Converts the value to `f64`.
    ///
    /// The conversion is lossy for wide integers. Values outside the `f64`
    /// range map to an infinity of the matching sign.
    #[must_use]
    fn cast_to_double(&self) -> f64;

    /// The smallest representable value, if the type is bounded.
    #[must_use]
    fn min_value() -> Option<Self>;

    /// The largest representable value, if the type is bounded.
    #[must_use]
    fn max_value() -> Option<Self>;
}

macro_rules! impl_number_traits {
    (integer: $signed:expr; $($t:ty),*) => {
        $(
            impl NumberTraits for $t {
                const IS_SIGNED: bool = $signed;
                const IS_BOUNDED: bool = true;
                const IS_INTEGRAL: bool = true;

                #[inline(always)]
                fn zero() -> Self {
                    0
                }

                #[inline(always)]
                fn one() -> Self {
                    1
                }

                #[inline]
                fn cast_to_double(&self) -> f64 {
                    ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
                }

                #[inline]
                fn min_value() -> Option<Self> {
                    Some(<$t as Bounded>::min_value())
                }

                #[inline]
                fn max_value() -> Option<Self> {
                    Some(<$t as Bounded>::max_value())
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl NumberTraits for $t {
                const IS_SIGNED: bool = true;
                const IS_BOUNDED: bool = true;
                const IS_INTEGRAL: bool = false;

                #[inline(always)]
                fn zero() -> Self {
                    0.0
                }

                #[inline(always)]
                fn one() -> Self {
                    1.0
                }

                #[inline]
                fn cast_to_double(&self) -> f64 {
                    f64::from(*self)
                }

                #[inline]
                fn min_value() -> Option<Self> {
                    Some(<$t>::MIN)
                }

                #[inline]
                fn max_value() -> Option<Self> {
                    Some(<$t>::MAX)
                }
            }
        )*
    };
}

impl_number_traits!(integer: true; i8, i16, i32, i64, i128, isize);
impl_number_traits!(integer: false; u8, u16, u32, u64, u128, usize);
impl_number_traits!(float: f32, f64);

#[cfg(feature = "bigint")]
impl NumberTraits for num_bigint::BigInt {
    const IS_SIGNED: bool = true;
    const IS_BOUNDED: bool = false;
    const IS_INTEGRAL: bool = true;

    fn zero() -> Self {
        Self::from(0_i8)
    }

    fn one() -> Self {
        Self::from(1_i8)
    }

    fn cast_to_double(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    fn min_value() -> Option<Self> {
        None
    }

    fn max_value() -> Option<Self> {
        None
    }
}

// =============================================================================
// BOUND-AWARE ARITHMETIC
// =============================================================================

/// Computes `value + delta`, clamped to the registered bounds of `T`.
///
/// Unbounded types add exactly. The overflow test itself never leaves the
/// range of `T`.
///
/// ```
/// use digital_geometry::kernel::number_traits::saturating_add;
///
/// assert_eq!(saturating_add(&i32::MAX, &5), i32::MAX);
/// assert_eq!(saturating_add(&i32::MIN, &-1), i32::MIN);
/// assert_eq!(saturating_add(&-3, &5), 2);
/// ```
#[must_use]
pub fn saturating_add<T>(value: &T, delta: &T) -> T
where
    T: NumberTraits + Clone + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    if *delta >= T::zero() {
        if let Some(max) = T::max_value() {
            if *value > max.clone() - delta.clone() {
                return max;
            }
        }
    } else if let Some(min) = T::min_value() {
        if *value < min.clone() - delta.clone() {
            return min;
        }
    }
    value.clone() + delta.clone()
}

/// Computes `value - delta`, clamped to the registered bounds of `T`.
///
/// ```
/// use digital_geometry::kernel::number_traits::saturating_sub;
///
/// assert_eq!(saturating_sub(&i32::MIN, &5), i32::MIN);
/// assert_eq!(saturating_sub(&0, &i32::MIN), i32::MAX);
/// assert_eq!(saturating_sub(&10_i8, &3), 7);
/// ```
#[must_use]
pub fn saturating_sub<T>(value: &T, delta: &T) -> T
where
    T: NumberTraits + Clone + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    if *delta >= T::zero() {
        if let Some(min) = T::min_value() {
            if *value < min.clone() + delta.clone() {
                return min;
            }
        }
    } else if let Some(max) = T::max_value() {
        if *value > max.clone() + delta.clone() {
            return max;
        }
    }
    value.clone() - delta.clone()
}
