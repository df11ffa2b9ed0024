//! Data and operations on d-dimensional coordinate vectors.
//!
//! [`PointVector`] is the point type of [`SpaceND`](crate::kernel::space::SpaceND):
//! with integral coordinates it is a digital point, with `f64` coordinates it
//! is a real point. Arithmetic is component-wise. Ordering is lexicographic,
//! while the bounding-box predicates [`PointVector::is_lower`] and
//! [`PointVector::is_upper`] compare every coordinate.

#![forbid(unsafe_code)]

use crate::kernel::norms::{euclidean_norm, hypot, squared_norm};
use crate::kernel::number_traits::{NumberTraits, saturating_add, saturating_sub};
use num_traits::cast::{self, NumCast};
use serde::de::{Error, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::any;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur while converting coordinates into a [`PointVector`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PointConversionError {
    /// A coordinate could not be represented in the target scalar type.
    #[error(
        "Failed to convert coordinate at index {coordinate_index} from {from_type} to {to_type}: {coordinate_value}"
    )]
    ConversionFailed {
        /// Index of the coordinate that failed to convert
        coordinate_index: usize,
        /// String representation of the problematic coordinate value
        coordinate_value: String,
        /// Source type name
        from_type: &'static str,
        /// Target type name
        to_type: &'static str,
    },
    /// The number of coordinates does not match the dimension.
    #[error("Expected {expected} coordinates, got {actual}")]
    DimensionMismatch {
        /// Dimension of the target point
        expected: usize,
        /// Number of coordinates supplied
        actual: usize,
    },
}

// =============================================================================
// POINT VECTOR STRUCT DEFINITION
// =============================================================================

/// A vector of `D` coordinates of type `T`.
///
/// The coordinates are private: a point is built once from an array and only
/// read afterwards.
///
/// # Examples
///
/// ```rust
/// use digital_geometry::kernel::point_vector::PointVector;
///
/// let a = PointVector::new([1, 2]);
/// let b = PointVector::new([4, 6]);
/// assert_eq!(b - a, PointVector::new([3, 4]));
/// assert_eq!((b - a).norm(), 5.0);
/// assert_eq!(PointVector::diagonal(7), PointVector::new([7, 7]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointVector<T, const D: usize> {
    coords: [T; D],
}

// =============================================================================
// PUBLIC API
// =============================================================================

impl<T, const D: usize> PointVector<T, D> {
    /// Creates a point from its coordinates.
    #[inline]
    #[must_use]
    pub const fn new(coords: [T; D]) -> Self {
        Self { coords }
    }

    /// Returns a reference to the coordinates.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[T; D] {
        &self.coords
    }

    /// Returns the dimension `D`.
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> usize {
        D
    }

    /// Returns the coordinate at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.coords.get(index)
    }

    /// Consumes the point and returns its coordinates.
    #[inline]
    #[must_use]
    pub fn into_array(self) -> [T; D] {
        self.coords
    }

    /// Applies `f` to every coordinate.
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> PointVector<U, D>
    where
        F: FnMut(&T) -> U,
    {
        PointVector::new(std::array::from_fn(|i| f(&self.coords[i])))
    }
}

impl<T: Clone, const D: usize> PointVector<T, D> {
    /// Returns a copy of the coordinates.
    #[inline]
    #[must_use]
    pub fn to_array(&self) -> [T; D] {
        self.coords.clone()
    }

    /// Creates the point whose coordinates all equal `value`.
    ///
    /// ```
    /// use digital_geometry::kernel::point_vector::PointVector;
    ///
    /// let p: PointVector<i64, 3> = PointVector::diagonal(-2);
    /// assert_eq!(p.coords(), &[-2, -2, -2]);
    /// ```
    #[must_use]
    pub fn diagonal(value: T) -> Self {
        Self::new(std::array::from_fn(|_| value.clone()))
    }
}

impl<T: Clone + PartialOrd, const D: usize> PointVector<T, D> {
    /// Coordinate-wise minimum of two points.
    ///
    /// ```
    /// use digital_geometry::kernel::point_vector::PointVector;
    ///
    /// let a = PointVector::new([1, 5]);
    /// let b = PointVector::new([3, -2]);
    /// assert_eq!(a.inf(&b), PointVector::new([1, -2]));
    /// assert_eq!(a.sup(&b), PointVector::new([3, 5]));
    /// ```
    #[must_use]
    pub fn inf(&self, other: &Self) -> Self {
        Self::new(std::array::from_fn(|i| {
            if other.coords[i] < self.coords[i] {
                other.coords[i].clone()
            } else {
                self.coords[i].clone()
            }
        }))
    }

    /// Coordinate-wise maximum of two points.
    #[must_use]
    pub fn sup(&self, other: &Self) -> Self {
        Self::new(std::array::from_fn(|i| {
            if other.coords[i] > self.coords[i] {
                other.coords[i].clone()
            } else {
                self.coords[i].clone()
            }
        }))
    }

    /// Returns `true` if every coordinate of `self` is `<=` the matching
    /// coordinate of `other`.
    #[must_use]
    pub fn is_lower(&self, other: &Self) -> bool {
        self.coords.iter().zip(&other.coords).all(|(a, b)| a <= b)
    }

    /// Returns `true` if every coordinate of `self` is `>=` the matching
    /// coordinate of `other`.
    #[must_use]
    pub fn is_upper(&self, other: &Self) -> bool {
        self.coords.iter().zip(&other.coords).all(|(a, b)| a >= b)
    }
}

impl<T: NumberTraits, const D: usize> PointVector<T, D> {
    /// The origin.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(std::array::from_fn(|_| T::zero()))
    }

    /// Euclidean norm, computed in `f64`.
    #[must_use]
    pub fn norm(&self) -> f64 {
        euclidean_norm(&self.coords)
    }

    /// Converts every coordinate to `f64`.
    #[must_use]
    pub fn to_real(&self) -> PointVector<f64, D> {
        self.map(T::cast_to_double)
    }
}

impl<T, const D: usize> PointVector<T, D>
where
    T: NumberTraits + Clone + Add<Output = T> + std::ops::Mul<Output = T>,
{
    /// Sum of squared coordinates, computed in `T`.
    #[must_use]
    pub fn squared_norm(&self) -> T {
        squared_norm(&self.coords)
    }
}

impl<T, const D: usize> PointVector<T, D>
where
    T: NumberTraits + Clone + PartialOrd + Add<Output = T> + Sub<Output = T>,
{
    /// Euclidean distance between two points.
    ///
    /// For bounded scalar types the coordinates are cast to `f64` before
    /// subtracting, so points at opposite ends of the range never overflow.
    /// Unbounded types subtract exactly and cast the difference.
    ///
    /// ```
    /// use digital_geometry::kernel::point_vector::PointVector;
    ///
    /// let a = PointVector::new([i32::MIN, 0]);
    /// let b = PointVector::new([i32::MAX, 0]);
    /// assert_eq!(a.distance(&b), 4_294_967_295.0);
    /// ```
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        if T::IS_BOUNDED {
            hypot::<D>(&std::array::from_fn(|i| {
                self.coords[i].cast_to_double() - other.coords[i].cast_to_double()
            }))
        } else {
            euclidean_norm::<T, D>(&std::array::from_fn(|i| {
                self.coords[i].clone() - other.coords[i].clone()
            }))
        }
    }

    /// Adds `delta` to every coordinate, clamping at the bounds of `T`.
    #[must_use]
    pub fn saturating_add_diagonal(&self, delta: &T) -> Self {
        self.map(|c| saturating_add(c, delta))
    }

    /// Subtracts `delta` from every coordinate, clamping at the bounds of `T`.
    #[must_use]
    pub fn saturating_sub_diagonal(&self, delta: &T) -> Self {
        self.map(|c| saturating_sub(c, delta))
    }
}

// =============================================================================
// ARITHMETIC
// =============================================================================

impl<T, const D: usize> Add for PointVector<T, D>
where
    T: Clone + Add<Output = T>,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| {
            self.coords[i].clone() + rhs.coords[i].clone()
        }))
    }
}

impl<T, const D: usize> Sub for PointVector<T, D>
where
    T: Clone + Sub<Output = T>,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(std::array::from_fn(|i| {
            self.coords[i].clone() - rhs.coords[i].clone()
        }))
    }
}

impl<T, const D: usize> Neg for PointVector<T, D>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(self.coords.map(Neg::neg))
    }
}

// =============================================================================
// FORMATTING AND SERIALIZATION
// =============================================================================

impl<T: fmt::Display, const D: usize> fmt::Display for PointVector<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{coord}")?;
        }
        f.write_str(")")
    }
}

// Serialized as a fixed-length tuple of coordinates
impl<T: Serialize, const D: usize> Serialize for PointVector<T, D> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeTuple;
        let mut tuple = serializer.serialize_tuple(D)?;
        for coord in &self.coords {
            tuple.serialize_element(coord)?;
        }
        tuple.end()
    }
}

impl<'de, T, const D: usize> Deserialize<'de> for PointVector<T, D>
where
    T: Deserialize<'de>,
{
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
        DE: Deserializer<'de>,
    {
        struct ArrayVisitor<T, const D: usize>(PhantomData<T>);

        impl<'de, T, const D: usize> Visitor<'de> for ArrayVisitor<T, D>
        where
            T: Deserialize<'de>,
        {
            type Value = PointVector<T, D>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_fmt(format_args!("an array of {D} coordinates"))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut coords = Vec::with_capacity(D);
                for i in 0..D {
                    let coord: T = seq
                        .next_element()?
                        .ok_or_else(|| Error::invalid_length(i, &self))?;
                    coords.push(coord);
                }
                if seq.next_element::<serde::de::IgnoredAny>()?.is_some() {
                    return Err(Error::invalid_length(D + 1, &self));
                }

                let coords_len = coords.len();
                let coords_array: [T; D] = coords
                    .try_into()
                    .map_err(|_| Error::invalid_length(coords_len, &self))?;

                Ok(PointVector::new(coords_array))
            }
        }

        deserializer.deserialize_tuple(D, ArrayVisitor(PhantomData))
    }
}

// =============================================================================
// TYPE CONVERSION IMPLEMENTATIONS
// =============================================================================

/// Numeric conversion from arrays of another scalar type.
///
/// Fails if any coordinate cannot be represented in the target type.
///
/// ```
/// use digital_geometry::kernel::point_vector::PointVector;
///
/// let p = PointVector::<i8, 2>::try_from([12_i64, -3]).unwrap();
/// assert_eq!(p, PointVector::new([12_i8, -3]));
/// assert!(PointVector::<i8, 2>::try_from([1000_i64, 0]).is_err());
/// ```
impl<T, U, const D: usize> TryFrom<[T; D]> for PointVector<U, D>
where
    T: NumCast + fmt::Debug,
    U: NumCast,
{
    type Error = PointConversionError;

    fn try_from(coords: [T; D]) -> Result<Self, Self::Error> {
        let mut out = Vec::with_capacity(D);
        for (i, c) in coords.into_iter().enumerate() {
            let c_debug = format!("{c:?}");
            let v: U = cast::cast(c).ok_or_else(|| PointConversionError::ConversionFailed {
                coordinate_index: i,
                coordinate_value: c_debug,
                from_type: any::type_name::<T>(),
                to_type: any::type_name::<U>(),
            })?;
            out.push(v);
        }
        Self::try_from(out)
    }
}

/// Conversion from a vector of coordinates; the length must equal `D`.
impl<T, const D: usize> TryFrom<Vec<T>> for PointVector<T, D> {
    type Error = PointConversionError;

    fn try_from(coords: Vec<T>) -> Result<Self, Self::Error> {
        let actual = coords.len();
        <[T; D]>::try_from(coords)
            .map(Self::new)
            .map_err(|_| PointConversionError::DimensionMismatch {
                expected: D,
                actual,
            })
    }
}

impl<T, const D: usize> From<PointVector<T, D>> for [T; D] {
    #[inline]
    fn from(point: PointVector<T, D>) -> [T; D] {
        point.coords
    }
}
