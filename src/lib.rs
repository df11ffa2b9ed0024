//! # `digital_geometry`
//!
//! Generic building blocks for n-dimensional digital geometry:
//!
//! - a compile-time contract, [`CommutativeRing`](kernel::traits::commutative_ring::CommutativeRing),
//!   certifying that a scalar type supports ring arithmetic and has its
//!   identity elements registered in [`NumberTraits`](kernel::number_traits::NumberTraits);
//! - implicit shapes, described by a signed scalar field over a
//!   [`Space`](kernel::space::Space), with [`ImplicitBall`](shapes::implicit::implicit_ball::ImplicitBall)
//!   as the reference shape.
//!
//! Both are resolved statically: a scalar type that is not a ring, or a space
//! that lacks the point operations a shape needs, is rejected when the
//! generic code is instantiated. Queries on a constructed shape never fail.
//!
//! # Features
//!
//! - Any dimension, selected with a const generic (`SpaceND<D, I>`)
//! - Integral and floating-point coordinates (`i8`..`i128`, `f32`, `f64`)
//! - Arbitrary-precision coordinates with `num_bigint::BigInt` (feature `bigint`, on by default)
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! ```rust
//! use digital_geometry::prelude::*;
//!
//! let ball: ImplicitBall<Z2i> = ImplicitBall::new(PointVector::new([0, 0]), 5);
//!
//! // Signed field: positive inside, zero on the boundary, negative outside
//! assert_eq!(ball.field(&PointVector::new([4, 0])), 1.0);
//! assert_eq!(ball.field(&PointVector::new([6, 0])), -1.0);
//!
//! // The ball is open: boundary points are not inside
//! assert!(!ball.is_inside(&PointVector::new([5, 0])));
//!
//! // Axis-aligned bounding hypercube
//! assert_eq!(ball.bounding_box(), (PointVector::new([-5, -5]), PointVector::new([5, 5])));
//! ```
//!
//! # Ring contract
//!
//! Generic algorithms state the arithmetic they need as a trait bound:
//!
//! ```rust
//! use digital_geometry::prelude::*;
//!
//! fn dot<T: CommutativeRing, const D: usize>(a: &PointVector<T, D>, b: &PointVector<T, D>) -> T {
//!     a.coords()
//!         .iter()
//!         .zip(b.coords())
//!         .fold(T::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
//! }
//!
//! assert_eq!(dot(&PointVector::new([1, 2, 3]), &PointVector::new([4, -5, 6])), 12);
//!
//! // Compile-time certification
//! digital_geometry::assert_commutative_ring!(i64, f64);
//! ```
//!
//! The ring laws themselves are not checked by the compiler. Use
//! [`check_ring_axioms`](kernel::ring_axioms::check_ring_axioms) in tests to
//! verify them on concrete values.

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

#[macro_use]
extern crate derive_builder;

/// Scalar contracts, points and spaces.
///
/// This module provides the numeric-trait registry, the commutative ring
/// contract, the `PointVector` coordinate type and the `Space` abstraction
/// that shapes are generic over.
pub mod kernel {
    pub mod norms;
    pub mod number_traits;
    pub mod point_vector;
    /// Runtime verification of the ring laws
    pub mod ring_axioms;
    pub mod space;
    /// Compile-time contracts on scalar types.
    pub mod traits {
        pub mod commutative_ring;
        pub use commutative_ring::*;
    }
    pub use number_traits::*;
    pub use point_vector::*;
    pub use space::*;
    pub use traits::*;
}

/// Implicit shapes: regions given by the sign of a scalar field.
pub mod shapes {
    /// Concrete implicit shapes
    pub mod implicit {
        pub mod implicit_ball;
        pub use implicit_ball::*;
    }
    /// Traits shared by all implicit shapes
    pub mod traits {
        pub mod implicit_shape;
        pub use implicit_shape::*;
    }
    pub use implicit::*;
    pub use traits::*;
}

/// A prelude module that re-exports commonly used types and macros.
pub mod prelude {
    pub use crate::kernel::{
        norms::*, number_traits::*, point_vector::*, ring_axioms::*, space::*,
        traits::commutative_ring::*,
    };
    pub use crate::shapes::{implicit::implicit_ball::*, traits::implicit_shape::*};

    pub use crate::assert_commutative_ring;
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
