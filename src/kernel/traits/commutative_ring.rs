//! Compile-time contract for unitary commutative rings.
//!
//! A scalar type is a [`CommutativeRing`] when it supports addition,
//! subtraction, negation and multiplication closed over the type, is
//! equality-comparable and ordered, can be built from a primitive integer,
//! and has its identity elements registered in
//! [`NumberTraits`](crate::kernel::number_traits::NumberTraits).
//!
//! Models are registered explicitly. Registration is checked by the
//! compiler: a type that misses any requirement cannot implement the trait,
//! and any generic algorithm bounded by `T: CommutativeRing` rejects it at
//! the instantiation site.
//!
//! # Arbitrary-precision integers
//!
//! `num_bigint::BigInt` (feature `bigint`) is not certified from its
//! operator set. It is first checked against the narrower
//! [`SignedInteger`] contract, and its ring registration is derived from
//! that certification.
//!
//! # Examples
//!
//! ```
//! use digital_geometry::kernel::traits::commutative_ring::{CommutativeRing, is_commutative_ring};
//!
//! fn sum_of_squares<T: CommutativeRing>(values: &[T]) -> T {
//!     values
//!         .iter()
//!         .cloned()
//!         .fold(T::zero(), |acc, v| acc + v.clone() * v)
//! }
//!
//! assert_eq!(sum_of_squares(&[1_i32, 2, 3]), 14);
//! assert!(is_commutative_ring::<f64>());
//! ```
//!
//! A type without a registered zero and one is rejected:
//!
//! ```compile_fail
//! use digital_geometry::kernel::traits::commutative_ring::CommutativeRing;
//! use std::ops::{Add, Mul, Neg, Sub};
//!
//! #[derive(Clone, Debug, PartialEq, PartialOrd)]
//! struct Unregistered(i64);
//!
//! impl From<i8> for Unregistered {
//!     fn from(value: i8) -> Self { Self(i64::from(value)) }
//! }
//! impl Add for Unregistered {
//!     type Output = Self;
//!     fn add(self, rhs: Self) -> Self { Self(self.0 + rhs.0) }
//! }
//! impl Sub for Unregistered {
//!     type Output = Self;
//!     fn sub(self, rhs: Self) -> Self { Self(self.0 - rhs.0) }
//! }
//! impl Mul for Unregistered {
//!     type Output = Self;
//!     fn mul(self, rhs: Self) -> Self { Self(self.0 * rhs.0) }
//! }
//! impl Neg for Unregistered {
//!     type Output = Self;
//!     fn neg(self) -> Self { Self(-self.0) }
//! }
//!
//! // error: `Unregistered` does not implement `NumberTraits`
//! impl CommutativeRing for Unregistered {}
//! ```
//!
//! Unsigned integers have no negation and are not rings:
//!
//! ```compile_fail
//! digital_geometry::assert_commutative_ring!(u32);
//! ```

use crate::kernel::number_traits::NumberTraits;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A unitary commutative ring.
///
/// # Required Traits
///
/// - `Add`, `Sub`, `Mul`, `Neg` with `Output = Self`: closure of the ring operations
/// - `From<i8>`: construction from a primitive integer
/// - `PartialEq`, `PartialOrd`: equality and ordering
/// - `NumberTraits`: registered `zero()` and `one()`
/// - `Clone`, `Debug`
///
/// The algebraic laws (associativity, commutativity, distributivity,
/// identities, `x + (-x) == zero`) are assumed, not enforced. See
/// [`check_ring_axioms`](crate::kernel::ring_axioms::check_ring_axioms) for a
/// runtime check suitable for property tests.
pub trait CommutativeRing:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + NumberTraits
    + From<i8>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
}

/// A signed integer type, possibly of arbitrary precision.
///
/// This is the narrower contract that arbitrary-precision integers are
/// certified against before being registered as a [`CommutativeRing`].
pub trait SignedInteger:
    Clone + Debug + Ord + NumberTraits + From<i8> + num_integer::Integer + num_traits::Signed
{
}

/// Returns `true` for every [`CommutativeRing`] model.
///
/// Only type-checks for models, which makes it usable as a compile-time
/// assertion inside a `const` item.
#[must_use]
pub const fn is_commutative_ring<T: CommutativeRing>() -> bool {
    true
}

/// Returns `true` for every [`SignedInteger`] model.
#[must_use]
pub const fn is_signed_integer<T: SignedInteger>() -> bool {
    true
}

/// Asserts at compile time that each listed type is a [`CommutativeRing`].
///
/// ```
/// digital_geometry::assert_commutative_ring!(i32, i64, f64);
/// ```
#[macro_export]
macro_rules! assert_commutative_ring {
    ($($t:ty),+ $(,)?) => {
        $(
            const _: () = assert!(
                $crate::kernel::traits::commutative_ring::is_commutative_ring::<$t>()
            );
        )+
    };
}

macro_rules! impl_signed_integer {
    ($($t:ty),*) => {
        $(
            impl SignedInteger for $t {}
        )*
    };
}

// Unified macro for registering ring models
macro_rules! impl_commutative_ring {
    (primitive: $($t:ty),*) => {
        $(
            impl CommutativeRing for $t {}
        )*
    };
    (signed_integer: $($t:ty),*) => {
        $(
            const _: () = assert!(is_signed_integer::<$t>());
            impl CommutativeRing for $t {}
        )*
    };
}

impl_signed_integer!(i8, i16, i32, i64, i128, isize);
impl_commutative_ring!(primitive: i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(feature = "bigint")]
impl_signed_integer!(num_bigint::BigInt);
#[cfg(feature = "bigint")]
impl_commutative_ring!(signed_integer: num_bigint::BigInt);
