//! Vector norm computations.
//!
//! Points with integral coordinates are measured in `f64`: coordinates are
//! cast through [`NumberTraits::cast_to_double`] and the Euclidean norm is
//! then computed with a scaled, overflow-free algorithm.

use crate::kernel::number_traits::NumberTraits;

/// Sum of squares of a coordinate array, computed in the coordinate type.
///
/// # Examples
///
/// ```
/// use digital_geometry::kernel::norms::squared_norm;
///
/// assert_eq!(squared_norm(&[3, 4]), 25);
/// assert_eq!(squared_norm(&[1, -2, 2]), 9);
/// ```
pub fn squared_norm<T, const D: usize>(coords: &[T; D]) -> T
where
    T: NumberTraits + Clone + std::ops::Add<Output = T> + std::ops::Mul<Output = T>,
{
    coords
        .iter()
        .cloned()
        .fold(T::zero(), |acc, x| acc + x.clone() * x)
}

/// Compute the d-dimensional hypot (Euclidean norm) of a coordinate array.
///
/// For 2D the standard library's `f64::hypot` is used. For higher
/// dimensions every coordinate is scaled by the largest magnitude before
/// squaring, which avoids overflow and underflow.
///
/// # Examples
///
/// ```
/// use digital_geometry::kernel::norms::hypot;
///
/// assert_eq!(hypot(&[3.0, 4.0]), 5.0);
/// assert_eq!(hypot(&[1.0, 2.0, 2.0]), 3.0);
/// assert_eq!(hypot(&[1.0, 1.0, 1.0, 1.0]), 2.0);
/// ```
#[must_use]
pub fn hypot<const D: usize>(coords: &[f64; D]) -> f64 {
    match D {
        0 => 0.0,
        1 => coords[0].abs(),
        2 => coords[0].hypot(coords[1]),
        _ => {
            let max_abs = coords
                .iter()
                .map(|x| x.abs())
                .fold(0.0_f64, |acc, x| if x > acc { x } else { acc });

            if max_abs == 0.0 {
                return 0.0;
            }

            let sum_of_scaled_squares: f64 = coords
                .iter()
                .map(|&x| {
                    let scaled = x / max_abs;
                    scaled * scaled
                })
                .sum();

            max_abs * sum_of_scaled_squares.sqrt()
        }
    }
}

/// Euclidean norm of a coordinate array of any registered scalar type.
///
/// # Examples
///
/// ```
/// use digital_geometry::kernel::norms::euclidean_norm;
///
/// assert_eq!(euclidean_norm(&[-6_i32, 8]), 10.0);
/// assert_eq!(euclidean_norm(&[0_i64, 0, -4]), 4.0);
/// ```
#[must_use]
pub fn euclidean_norm<T: NumberTraits, const D: usize>(coords: &[T; D]) -> f64 {
    hypot::<D>(&std::array::from_fn(|i| coords[i].cast_to_double()))
}
