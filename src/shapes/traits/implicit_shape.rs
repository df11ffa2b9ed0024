//! Shapes described by a signed scalar field.
//!
//! An implicit shape maps every point of its space to an `f64`: positive
//! inside, zero on the boundary, negative outside. Containment and
//! orientation queries are derived from the sign of that field, and every
//! shape reports an axis-aligned box that contains it.

use crate::kernel::space::{PointOf, Space, SpacePoint};

/// Position of a point relative to a shape boundary.
///
/// # Examples
///
/// ```rust
/// use digital_geometry::shapes::traits::implicit_shape::Orientation;
///
/// assert_eq!(Orientation::from_field(2.0), Orientation::Inside);
/// assert_eq!(Orientation::from_field(0.0), Orientation::On);
/// assert_eq!(Orientation::from_field(-0.5), Orientation::Outside);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Strictly inside (positive field).
    Inside,
    /// On the boundary (zero field).
    On,
    /// Strictly outside (negative field).
    Outside,
}

impl Orientation {
    /// Classifies a field value by its sign.
    ///
    /// NaN is classified as [`Orientation::Outside`].
    #[must_use]
    pub fn from_field(value: f64) -> Self {
        if value > 0.0 {
            Self::Inside
        } else if value == 0.0 {
            Self::On
        } else {
            Self::Outside
        }
    }
}

/// A shape given by a signed scalar field over a [`Space`].
///
/// Implementors provide the field and the bounding corners. Everything else
/// is derived from the field value:
///
/// | Query | Definition |
/// |---|---|
/// | [`is_inside`](Self::is_inside) | `field(p) > 0` (boundary excluded) |
/// | [`is_inside_or_on`](Self::is_inside_or_on) | `field(p) >= 0` |
/// | [`orientation`](Self::orientation) | sign of `field(p)` |
pub trait ImplicitShape {
    /// The space the shape lives in.
    type Space: Space;

    /// Signed field value at `point`.
    fn field(&self, point: &PointOf<Self::Space>) -> f64;

    /// Lower corner of an axis-aligned box containing the shape.
    fn lower_bound(&self) -> PointOf<Self::Space>;

    /// Upper corner of an axis-aligned box containing the shape.
    fn upper_bound(&self) -> PointOf<Self::Space>;

    /// Strict containment: boundary points are outside.
    fn is_inside(&self, point: &PointOf<Self::Space>) -> bool {
        self.field(point) > 0.0
    }

    /// Closed containment: boundary points are inside.
    fn is_inside_or_on(&self, point: &PointOf<Self::Space>) -> bool {
        self.field(point) >= 0.0
    }

    /// Position of `point` relative to the boundary.
    fn orientation(&self, point: &PointOf<Self::Space>) -> Orientation {
        Orientation::from_field(self.field(point))
    }

    /// Both bounding corners, lower first.
    fn bounding_box(&self) -> (PointOf<Self::Space>, PointOf<Self::Space>) {
        (self.lower_bound(), self.upper_bound())
    }

    /// Whether `point` lies in the bounding box, bounds included.
    fn is_in_bounding_box(&self, point: &PointOf<Self::Space>) -> bool {
        let (lower, upper) = self.bounding_box();
        lower.is_lower(point) && upper.is_upper(point)
    }

    /// Self-consistency check.
    fn is_valid(&self) -> bool {
        true
    }
}
