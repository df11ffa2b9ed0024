//! Digital spaces and their point contract.
//!
//! A [`Space`] bundles the types a geometric algorithm works with: the
//! integral scalar, the digital point and the real point. Shapes are generic
//! over one `Space` and only use what the [`SpacePoint`] contract provides,
//! so the same code runs in every dimension.
//!
//! # Examples
//!
//! ```
//! use digital_geometry::kernel::point_vector::PointVector;
//! use digital_geometry::kernel::space::{Space, SpacePoint, Z3i};
//!
//! assert_eq!(Z3i::DIMENSION, 3);
//!
//! let p: <Z3i as Space>::Point = PointVector::new([1, 2, 2]);
//! assert_eq!(p.norm(), 3.0);
//! assert_eq!(<Z3i as Space>::Point::diagonal(4), PointVector::new([4, 4, 4]));
//! ```

use crate::kernel::point_vector::PointVector;
use crate::kernel::traits::commutative_ring::CommutativeRing;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

/// Operations a shape needs from the points of its space.
///
/// `I` is the integral scalar type of the space.
pub trait SpacePoint<I>:
    Clone + Debug + PartialEq + Add<Output = Self> + Sub<Output = Self>
{
    /// The point whose coordinates all equal `value`.
    #[must_use]
    fn diagonal(value: I) -> Self;

    /// Euclidean norm of the point seen as a vector.
    #[must_use]
    fn norm(&self) -> f64;

    /// Euclidean distance to `other`, defined for every pair of points of
    /// the space.
    #[must_use]
    fn distance(&self, other: &Self) -> f64;

    /// `self + diagonal(delta)`, clamped to the range of `I`.
    #[must_use]
    fn saturating_add_diagonal(&self, delta: &I) -> Self;

    /// `self - diagonal(delta)`, clamped to the range of `I`.
    #[must_use]
    fn saturating_sub_diagonal(&self, delta: &I) -> Self;

    /// Whether every coordinate is `<=` the matching coordinate of `other`.
    #[must_use]
    fn is_lower(&self, other: &Self) -> bool;

    /// Whether every coordinate is `>=` the matching coordinate of `other`.
    #[must_use]
    fn is_upper(&self, other: &Self) -> bool;
}

impl<T, const D: usize> SpacePoint<T> for PointVector<T, D>
where
    T: CommutativeRing,
{
    #[inline]
    fn diagonal(value: T) -> Self {
        Self::diagonal(value)
    }

    #[inline]
    fn norm(&self) -> f64 {
        Self::norm(self)
    }

    #[inline]
    fn distance(&self, other: &Self) -> f64 {
        Self::distance(self, other)
    }

    #[inline]
    fn saturating_add_diagonal(&self, delta: &T) -> Self {
        Self::saturating_add_diagonal(self, delta)
    }

    #[inline]
    fn saturating_sub_diagonal(&self, delta: &T) -> Self {
        Self::saturating_sub_diagonal(self, delta)
    }

    #[inline]
    fn is_lower(&self, other: &Self) -> bool {
        Self::is_lower(self, other)
    }

    #[inline]
    fn is_upper(&self, other: &Self) -> bool {
        Self::is_upper(self, other)
    }
}

/// A dimensionality-parameterized coordinate system.
pub trait Space {
    /// Number of axes.
    const DIMENSION: usize;

    /// Integral scalar used for coordinates and radii.
    type Integer: CommutativeRing;

    /// Point with `Integer` coordinates.
    type Point: SpacePoint<Self::Integer>;

    /// Point with floating-point coordinates.
    type RealPoint: Clone + Debug + PartialEq;
}

/// The `D`-dimensional digital space with coordinates of type `I`.
///
/// This is a type-level marker and is never instantiated with data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpaceND<const D: usize, I = i32> {
    _integer: PhantomData<I>,
}

impl<const D: usize, I> SpaceND<D, I> {
    /// Creates the space marker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _integer: PhantomData,
        }
    }
}

impl<const D: usize, I> Space for SpaceND<D, I>
where
    I: CommutativeRing,
{
    const DIMENSION: usize = D;

    type Integer = I;
    type Point = PointVector<I, D>;
    type RealPoint = PointVector<f64, D>;
}

/// The digital plane with 32-bit coordinates.
pub type Z2i = SpaceND<2, i32>;

/// The digital 3D space with 32-bit coordinates.
pub type Z3i = SpaceND<3, i32>;

/// Shorthand for the point type of a space.
pub type PointOf<S> = <S as Space>::Point;

/// Shorthand for the integer type of a space.
pub type IntegerOf<S> = <S as Space>::Integer;
