//! Balls in any dimension, described by their signed distance field.
//!
//! # Overview
//!
//! An [`ImplicitBall`] stores a center and an integral radius. Its field at
//! a point `p` is
//!
//! ```text
//! field(p) = radius - ‖p - center‖
//! ```
//!
//! which is positive inside, zero on the sphere and negative outside. The
//! ball is open: [`is_inside`](ImplicitShape::is_inside) excludes the
//! boundary, so a ball of radius zero contains nothing. A negative radius is
//! accepted and yields an empty ball whose field is negative everywhere.
//!
//! The bounding corners are `center ∓ diagonal(radius)`, an axis-aligned
//! hypercube that contains the ball. For bounded integer types the corners
//! are clamped to the representable range, and the field casts coordinates
//! to `f64` before subtracting, so no query overflows.
//!
//! # Examples
//!
//! ```rust
//! use digital_geometry::prelude::*;
//!
//! let ball: ImplicitBall<Z2i> = ImplicitBall::new(PointVector::new([0, 0]), 5);
//!
//! assert_eq!(ball.field(&PointVector::new([4, 0])), 1.0);
//! assert_eq!(ball.field(&PointVector::new([5, 0])), 0.0);
//! assert!(ball.is_inside(&PointVector::new([4, 0])));
//! assert!(!ball.is_inside(&PointVector::new([5, 0])));
//! assert_eq!(ball.orientation(&PointVector::new([5, 0])), Orientation::On);
//!
//! assert_eq!(ball.lower_bound(), PointVector::new([-5, -5]));
//! assert_eq!(ball.upper_bound(), PointVector::new([5, 5]));
//! ```

#![forbid(unsafe_code)]

use crate::kernel::number_traits::NumberTraits;
use crate::kernel::space::{PointOf, Space, SpacePoint};
use crate::shapes::traits::implicit_shape::ImplicitShape;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// IMPLICIT BALL STRUCT DEFINITION
// =============================================================================

/// A solid ball in the space `S`.
///
/// There is no default value and no way to change the center or radius of
/// an existing ball. A ball is built with [`ImplicitBall::new`] or through
/// [`ImplicitBallBuilder`], whose `build` fails unless both fields are set:
///
/// ```rust
/// use digital_geometry::prelude::*;
///
/// let ball = ImplicitBallBuilder::<Z3i>::default()
///     .center(PointVector::new([1, 2, 3]))
///     .radius(4)
///     .build()
///     .unwrap();
/// assert_eq!(ball.radius(), &4);
///
/// let missing = ImplicitBallBuilder::<Z3i>::default().radius(4).build();
/// assert!(missing.is_err());
/// ```
#[derive(Builder, Serialize)]
#[builder(pattern = "owned", build_fn(private, name = "build_fields"))]
#[serde(bound(serialize = "S::Point: Serialize, S::Integer: Serialize"))]
pub struct ImplicitBall<S>
where
    S: Space,
{
    /// Ball center.
    center: S::Point,
    /// Ball radius, expected but not required to be non-negative.
    radius: S::Integer,
}

impl<S> ImplicitBall<S>
where
    S: Space,
{
    /// Creates the ball with the given center and radius.
    ///
    /// Any radius is accepted; see the [module documentation](self) for the
    /// meaning of a zero or negative radius.
    pub fn new(center: S::Point, radius: S::Integer) -> Self {
        if radius < <S::Integer as NumberTraits>::zero() {
            tracing::debug!(?center, ?radius, "negative radius, the ball is empty");
        } else {
            tracing::trace!(?center, ?radius, "implicit ball created");
        }
        Self { center, radius }
    }

    /// The center of the ball.
    #[must_use]
    pub const fn center(&self) -> &S::Point {
        &self.center
    }

    /// The radius of the ball.
    #[must_use]
    pub const fn radius(&self) -> &S::Integer {
        &self.radius
    }
}

impl<S> ImplicitBallBuilder<S>
where
    S: Space,
{
    /// Builds the ball through [`ImplicitBall::new`].
    ///
    /// # Errors
    ///
    /// Returns [`ImplicitBallBuilderError::UninitializedField`] if the
    /// center or the radius was not set.
    pub fn build(self) -> Result<ImplicitBall<S>, ImplicitBallBuilderError> {
        let ImplicitBall { center, radius } = self.build_fields()?;
        Ok(ImplicitBall::new(center, radius))
    }
}

impl<S> ImplicitShape for ImplicitBall<S>
where
    S: Space,
{
    type Space = S;

    #[inline]
    fn field(&self, point: &PointOf<S>) -> f64 {
        self.radius.cast_to_double() - point.distance(&self.center)
    }

    /// `center - diagonal(radius)`, clamped to the range of the integer type.
    #[inline]
    fn lower_bound(&self) -> PointOf<S> {
        self.center.saturating_sub_diagonal(&self.radius)
    }

    /// `center + diagonal(radius)`, clamped to the range of the integer type.
    #[inline]
    fn upper_bound(&self) -> PointOf<S> {
        self.center.saturating_add_diagonal(&self.radius)
    }

    /// A ball is valid when its radius is representable as a finite double.
    fn is_valid(&self) -> bool {
        self.radius.cast_to_double().is_finite()
    }
}

// =============================================================================
// TRAIT IMPLEMENTATIONS
// =============================================================================

// Manual implementations: derives would require `S` itself to implement the traits

impl<S> Clone for ImplicitBall<S>
where
    S: Space,
{
    fn clone(&self) -> Self {
        Self {
            center: self.center.clone(),
            radius: self.radius.clone(),
        }
    }
}

impl<S> fmt::Debug for ImplicitBall<S>
where
    S: Space,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplicitBall")
            .field("center", &self.center)
            .field("radius", &self.radius)
            .finish()
    }
}

impl<S> PartialEq for ImplicitBall<S>
where
    S: Space,
{
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && self.radius == other.radius
    }
}

// Deserialized balls go through `new` like every other construction path
impl<'de, S> Deserialize<'de> for ImplicitBall<S>
where
    S: Space,
    S::Point: Deserialize<'de>,
    S::Integer: Deserialize<'de>,
{
    fn deserialize<DE>(deserializer: DE) -> Result<Self, DE::Error>
    where
        DE: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename = "ImplicitBall")]
        struct Fields<P, I> {
            center: P,
            radius: I,
        }

        let Fields { center, radius } = Fields::<S::Point, S::Integer>::deserialize(deserializer)?;
        Ok(Self::new(center, radius))
    }
}

impl<S> fmt::Display for ImplicitBall<S>
where
    S: Space,
    S::Point: fmt::Display,
    S::Integer: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ImplicitBall(center: {}, radius: {})",
            self.center, self.radius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_normal;
    use crate::kernel::point_vector::PointVector;
    use crate::kernel::space::{SpaceND, Z2i, Z3i};
    use crate::shapes::traits::implicit_shape::Orientation;
    use approx::assert_relative_eq;

    fn init_tracing() {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init();
        });
    }

    fn p2(x: i32, y: i32) -> PointVector<i32, 2> {
        PointVector::new([x, y])
    }

    // =============================================================================
    // FIELD AND CONTAINMENT
    // =============================================================================

    #[test]
    fn ball_2d_radius_5_scenario() {
        init_tracing();
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(0, 0), 5);

        assert_relative_eq!(ball.field(&p2(5, 0)), 0.0);
        assert!(!ball.is_inside(&p2(5, 0)));

        assert_relative_eq!(ball.field(&p2(4, 0)), 1.0);
        assert!(ball.is_inside(&p2(4, 0)));

        assert_relative_eq!(ball.field(&p2(6, 0)), -1.0);
        assert!(!ball.is_inside(&p2(6, 0)));

        assert_eq!(ball.lower_bound(), p2(-5, -5));
        assert_eq!(ball.upper_bound(), p2(5, 5));
    }

    #[test]
    fn ball_field_is_radius_minus_distance() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(2, -1), 10);
        // distance from (2, -1) to (5, 3) is 5
        assert_relative_eq!(ball.field(&p2(5, 3)), 5.0);
        assert_relative_eq!(ball.field(&p2(2, -1)), 10.0);
        // far away points are not clamped
        assert_relative_eq!(ball.field(&p2(2, 99)), -90.0);
    }

    #[test]
    fn ball_zero_radius_is_empty() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(0, 0), 0);
        assert_relative_eq!(ball.field(&p2(0, 0)), 0.0);
        assert!(!ball.is_inside(&p2(0, 0)));
        assert!(ball.is_inside_or_on(&p2(0, 0)));
        assert_eq!(ball.orientation(&p2(0, 0)), Orientation::On);
        assert_eq!(ball.lower_bound(), ball.upper_bound());
    }

    #[test]
    fn ball_negative_radius_is_empty() {
        init_tracing();
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(1, 1), -3);
        assert_relative_eq!(ball.field(&p2(1, 1)), -3.0);
        assert!(!ball.is_inside(&p2(1, 1)));
        assert!(!ball.is_inside_or_on(&p2(1, 1)));
        assert_eq!(ball.orientation(&p2(1, 1)), Orientation::Outside);
        assert!(ball.is_valid());
    }

    #[test]
    fn ball_center_inside_iff_positive_radius() {
        for radius in -2..=2 {
            let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(7, -7), radius);
            assert_eq!(ball.is_inside(&p2(7, -7)), radius > 0, "radius {radius}");
        }
    }

    #[test]
    fn ball_3d_field_and_bounds() {
        let center = PointVector::new([1, 1, 1]);
        let ball: ImplicitBall<Z3i> = ImplicitBall::new(center, 3);

        // (1, 2, 2) away from the center: distance 3
        assert_relative_eq!(ball.field(&PointVector::new([2, 3, 3])), 0.0, epsilon = 1e-12);
        assert!(ball.is_inside(&PointVector::new([2, 2, 2])));
        assert!(!ball.is_inside(&PointVector::new([4, 4, 1])));

        assert_eq!(ball.lower_bound(), PointVector::new([-2, -2, -2]));
        assert_eq!(ball.upper_bound(), PointVector::new([4, 4, 4]));
        assert_eq!(
            ball.bounding_box(),
            (PointVector::new([-2, -2, -2]), PointVector::new([4, 4, 4]))
        );
    }

    #[test]
    fn ball_bounds_are_symmetric_about_center() {
        let center = PointVector::new([3, -8, 0, 12]);
        let ball: ImplicitBall<SpaceND<4, i64>> = ImplicitBall::new(center, 6);
        let up = ball.upper_bound() - center;
        let down = center - ball.lower_bound();
        assert_eq!(up, down);
        assert_eq!(up, PointVector::diagonal(6));
    }

    #[test]
    fn ball_interior_points_are_in_bounding_box() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(-3, 4), 4);
        for x in -10..=10 {
            for y in -10..=10 {
                let p = p2(x, y);
                if ball.is_inside(&p) {
                    assert!(ball.is_in_bounding_box(&p), "{p} escapes the box");
                }
            }
        }
    }

    #[test]
    fn ball_1d() {
        let ball: ImplicitBall<SpaceND<1, i16>> = ImplicitBall::new(PointVector::new([10]), 2);
        assert!(ball.is_inside(&PointVector::new([11])));
        assert!(!ball.is_inside(&PointVector::new([12])));
        assert_eq!(ball.bounding_box(), (PointVector::new([8]), PointVector::new([12])));
    }

    // =============================================================================
    // VALUE SEMANTICS
    // =============================================================================

    #[test]
    fn ball_accessors_and_clone() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(1, 2), 3);
        assert_eq!(ball.center(), &p2(1, 2));
        assert_eq!(ball.radius(), &3);

        let copy = ball.clone();
        assert_eq!(copy, ball);
        assert_ne!(copy, ImplicitBall::new(p2(1, 2), 4));
    }

    #[test]
    fn ball_is_normal() {
        assert!(is_normal::<ImplicitBall<Z2i>>());
        assert!(is_normal::<ImplicitBall<SpaceND<5, i64>>>());
    }

    #[test]
    fn ball_debug_and_display() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(0, -1), 5);
        assert_eq!(
            format!("{ball:?}"),
            "ImplicitBall { center: PointVector { coords: [0, -1] }, radius: 5 }"
        );
        assert_eq!(ball.to_string(), "ImplicitBall(center: (0, -1), radius: 5)");
    }

    #[test]
    fn ball_serialization_roundtrip() {
        let ball: ImplicitBall<Z3i> = ImplicitBall::new(PointVector::new([1, 2, 3]), 9);
        let json = serde_json::to_string(&ball).unwrap();
        assert_eq!(json, r#"{"center":[1,2,3],"radius":9}"#);

        let back: ImplicitBall<Z3i> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ball);

        assert!(serde_json::from_str::<ImplicitBall<Z3i>>(r#"{"center":[1,2,3]}"#).is_err());
    }

    // =============================================================================
    // BUILDER
    // =============================================================================

    #[test]
    fn builder_requires_every_field() {
        let ball = ImplicitBallBuilder::<Z2i>::default()
            .center(p2(4, 4))
            .radius(2)
            .build()
            .unwrap();
        assert_eq!(ball, ImplicitBall::new(p2(4, 4), 2));

        let err = ImplicitBallBuilder::<Z2i>::default()
            .center(p2(4, 4))
            .build()
            .unwrap_err();
        assert!(matches!(err, ImplicitBallBuilderError::UninitializedField("radius")));

        let err = ImplicitBallBuilder::<Z2i>::default()
            .radius(2)
            .build()
            .unwrap_err();
        assert!(matches!(err, ImplicitBallBuilderError::UninitializedField("center")));
    }

    // =============================================================================
    // OTHER SCALAR TYPES
    // =============================================================================

    #[test]
    fn ball_with_float_coordinates() {
        let ball: ImplicitBall<SpaceND<2, f64>> =
            ImplicitBall::new(PointVector::new([0.5, 0.5]), 1.5);
        assert_relative_eq!(ball.field(&PointVector::new([0.5, 1.5])), 0.5);
        assert_eq!(ball.lower_bound(), PointVector::new([-1.0, -1.0]));
        assert_eq!(ball.upper_bound(), PointVector::new([2.0, 2.0]));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn ball_with_bigint_coordinates() {
        use num_bigint::BigInt;

        type ZBig = SpaceND<2, BigInt>;
        let big = |v: i64| BigInt::from(v);

        let ball: ImplicitBall<ZBig> =
            ImplicitBall::new(PointVector::new([big(0), big(0)]), big(5));
        assert_relative_eq!(ball.field(&PointVector::new([big(3), big(4)])), 0.0);
        assert!(ball.is_inside(&PointVector::new([big(3), big(3)])));
        assert_eq!(ball.upper_bound(), PointVector::new([big(5), big(5)]));
        assert!(ball.is_valid());

        let huge = BigInt::from(1_u8) << 2000_usize;
        let unbounded: ImplicitBall<ZBig> =
            ImplicitBall::new(PointVector::new([big(0), big(0)]), huge);
        assert!(!unbounded.is_valid());
    }

    // =============================================================================
    // RANGE EXTREMES
    // =============================================================================

    #[test]
    fn ball_field_far_from_center_does_not_overflow() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(-10, 0), 5);
        assert_relative_eq!(ball.field(&p2(i32::MAX, 0)), 5.0 - 2_147_483_657.0);
        assert!(!ball.is_inside(&p2(i32::MAX, 0)));

        let corner: ImplicitBall<Z2i> = ImplicitBall::new(p2(i32::MIN, i32::MIN), 1);
        let expected = 1.0 - 4_294_967_295.0 * 2.0_f64.sqrt();
        assert_relative_eq!(
            corner.field(&p2(i32::MAX, i32::MAX)),
            expected,
            max_relative = 1e-12
        );
        assert_eq!(corner.orientation(&p2(i32::MIN, i32::MIN)), Orientation::Inside);
    }

    #[test]
    fn ball_bounds_clamp_at_integer_range() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(i32::MAX - 2, 0), 5);
        assert_eq!(ball.upper_bound(), p2(i32::MAX, 5));
        assert_eq!(ball.lower_bound(), p2(i32::MAX - 7, -5));

        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(0, i32::MIN + 1), 4);
        assert_eq!(ball.lower_bound(), p2(-4, i32::MIN));
        assert_eq!(ball.upper_bound(), p2(4, i32::MIN + 5));

        let huge: ImplicitBall<SpaceND<1, i8>> = ImplicitBall::new(PointVector::new([0]), i8::MAX);
        assert_eq!(huge.bounding_box(), (PointVector::new([-127]), PointVector::new([127])));
        assert!(huge.is_in_bounding_box(&PointVector::new([i8::MIN + 1])));
    }

    #[test]
    fn ball_bounds_with_extreme_negative_radius() {
        let ball: ImplicitBall<Z2i> = ImplicitBall::new(p2(0, 0), i32::MIN);
        assert_eq!(ball.lower_bound(), p2(i32::MAX, i32::MAX));
        assert_eq!(ball.upper_bound(), p2(i32::MIN, i32::MIN));
        assert!(!ball.is_inside_or_on(&p2(0, 0)));
    }

    // =============================================================================
    // CONSTRUCTION EVENTS
    // =============================================================================

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Runs `f` with a debug-level subscriber and returns everything it logged.
    fn capture_debug_events(f: impl FnOnce()) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        log.contents()
    }

    #[test]
    fn negative_radius_is_logged_on_every_construction_path() {
        let from_new = capture_debug_events(|| {
            let _ = ImplicitBall::<Z2i>::new(p2(0, 0), -1);
        });
        assert!(from_new.contains("negative radius"), "{from_new}");

        let from_builder = capture_debug_events(|| {
            let _ = ImplicitBallBuilder::<Z2i>::default()
                .center(p2(0, 0))
                .radius(-2)
                .build()
                .unwrap();
        });
        assert!(from_builder.contains("negative radius"), "{from_builder}");

        let from_json = capture_debug_events(|| {
            let _: ImplicitBall<Z2i> =
                serde_json::from_str(r#"{"center":[0,0],"radius":-3}"#).unwrap();
        });
        assert!(from_json.contains("negative radius"), "{from_json}");

        let non_negative = capture_debug_events(|| {
            let _ = ImplicitBall::<Z2i>::new(p2(0, 0), 3);
        });
        assert!(!non_negative.contains("negative radius"), "{non_negative}");
    }
}
