//! Runtime checking of the commutative ring laws.
//!
//! The [`CommutativeRing`] contract only certifies that the operations
//! exist. Whether they obey the algebraic laws cannot be expressed in the
//! type system, so this module evaluates them on concrete operands. It is
//! meant to be driven by property tests over the scalar types an algorithm
//! relies on.
//!
//! ```
//! use digital_geometry::kernel::ring_axioms::{RingAxiomError, check_ring_axioms};
//!
//! assert!(check_ring_axioms(&3_i64, &-8, &21).is_ok());
//!
//! // Floating-point addition is not associative in general.
//! let result = check_ring_axioms(&0.1_f64, &0.2, &0.3);
//! assert!(matches!(result, Err(RingAxiomError::AdditiveAssociativity { .. })));
//! ```

use crate::kernel::traits::commutative_ring::CommutativeRing;
use thiserror::Error;

/// A violated ring law, with the operands that exhibit it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RingAxiomError {
    /// `a + b != b + a`
    #[error("Addition is not commutative for a = {a}, b = {b}")]
    AdditiveCommutativity {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
    },
    /// `(a + b) + c != a + (b + c)`
    #[error("Addition is not associative for a = {a}, b = {b}, c = {c}")]
    AdditiveAssociativity {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
        /// Third operand.
        c: String,
    },
    /// `a + 0 != a`
    #[error("Zero is not an additive identity for {value}")]
    AdditiveIdentity {
        /// Offending operand.
        value: String,
    },
    /// `a + (-a) != 0`
    #[error("Negation is not an additive inverse for {value}")]
    AdditiveInverse {
        /// Offending operand.
        value: String,
    },
    /// `a * b != b * a`
    #[error("Multiplication is not commutative for a = {a}, b = {b}")]
    MultiplicativeCommutativity {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
    },
    /// `(a * b) * c != a * (b * c)`
    #[error("Multiplication is not associative for a = {a}, b = {b}, c = {c}")]
    MultiplicativeAssociativity {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
        /// Third operand.
        c: String,
    },
    /// `a * 1 != a`
    #[error("One is not a multiplicative identity for {value}")]
    MultiplicativeIdentity {
        /// Offending operand.
        value: String,
    },
    /// `a * (b + c) != a * b + a * c`
    #[error("Multiplication does not distribute over addition for a = {a}, b = {b}, c = {c}")]
    Distributivity {
        /// First operand.
        a: String,
        /// Second operand.
        b: String,
        /// Third operand.
        c: String,
    },
}

fn show<T: CommutativeRing>(value: &T) -> String {
    format!("{value:?}")
}

/// Checks the ring laws that involve at most one operand.
///
/// # Errors
///
/// Returns the first violated law among additive identity, additive inverse
/// and multiplicative identity.
pub fn check_identities<T: CommutativeRing>(a: &T) -> Result<(), RingAxiomError> {
    if a.clone() + T::zero() != *a {
        return Err(RingAxiomError::AdditiveIdentity { value: show(a) });
    }
    if a.clone() + (-a.clone()) != T::zero() {
        return Err(RingAxiomError::AdditiveInverse { value: show(a) });
    }
    if a.clone() * T::one() != *a {
        return Err(RingAxiomError::MultiplicativeIdentity { value: show(a) });
    }
    Ok(())
}

/// Checks every commutative ring law on the operands `a`, `b` and `c`.
///
/// The laws are evaluated in a fixed order: additive commutativity and
/// associativity, the identities of `a` (see [`check_identities`]),
/// multiplicative commutativity and associativity, then distributivity.
/// Arithmetic overflow in the operand type is not guarded against.
///
/// # Errors
///
/// Returns the first violated law as a [`RingAxiomError`].
pub fn check_ring_axioms<T: CommutativeRing>(a: &T, b: &T, c: &T) -> Result<(), RingAxiomError> {
    if a.clone() + b.clone() != b.clone() + a.clone() {
        return Err(RingAxiomError::AdditiveCommutativity {
            a: show(a),
            b: show(b),
        });
    }
    if (a.clone() + b.clone()) + c.clone() != a.clone() + (b.clone() + c.clone()) {
        return Err(RingAxiomError::AdditiveAssociativity {
            a: show(a),
            b: show(b),
            c: show(c),
        });
    }

    check_identities(a)?;

    if a.clone() * b.clone() != b.clone() * a.clone() {
        return Err(RingAxiomError::MultiplicativeCommutativity {
            a: show(a),
            b: show(b),
        });
    }
    if (a.clone() * b.clone()) * c.clone() != a.clone() * (b.clone() * c.clone()) {
        return Err(RingAxiomError::MultiplicativeAssociativity {
            a: show(a),
            b: show(b),
            c: show(c),
        });
    }
    if a.clone() * (b.clone() + c.clone()) != a.clone() * b.clone() + a.clone() * c.clone() {
        tracing::debug!(?a, ?b, ?c, "distributivity violated");
        return Err(RingAxiomError::Distributivity {
            a: show(a),
            b: show(b),
            c: show(c),
        });
    }
    Ok(())
}
