//! "Backends" representing the circuit capabilities the verifier is built on:
//! elliptic curve arithmetic over G1 witnesses, and a batched pairing check.
//!
//! The types implementing these traits are supplied by the enclosing circuit framework,
//! either as native-field gadgets or as emulated (nonnative) gadgets. In tests they are
//! backed by Arkworks.

use core::fmt::{self, Display, Formatter};

/// An error that occurs when performing elliptic curve arithmetic over witnesses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveArithmeticError {
    /// A field element witness is not a canonical encoding,
    /// e.g. a limb exceeds its bit width or the value is not reduced
    MalformedElement,
    /// A point witness is not on the curve, or not in its prime-order subgroup
    InvalidPoint,
}

impl Display for CurveArithmeticError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CurveArithmeticError::MalformedElement => write!(f, "malformed field element witness"),
            CurveArithmeticError::InvalidPoint => write!(f, "invalid curve point witness"),
        }
    }
}

/// An error that occurs when evaluating a pairing check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingError {
    /// The G1 and G2 sequences have different lengths
    LengthMismatch {
        /// The number of G1 elements passed
        g1: usize,
        /// The number of G2 elements passed
        g2: usize,
    },
    /// One of the paired elements is not a valid witness
    Arithmetic(CurveArithmeticError),
}

impl Display for PairingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PairingError::LengthMismatch { g1, g2 } => {
                write!(f, "pairing inputs differ in length: {} G1 vs {} G2", g1, g2)
            }
            PairingError::Arithmetic(e) => write!(f, "pairing input rejected: {}", e),
        }
    }
}

impl From<CurveArithmeticError> for PairingError {
    fn from(value: CurveArithmeticError) -> Self {
        PairingError::Arithmetic(value)
    }
}

/// Encapsulates the implementation of elliptic curve arithmetic on the G1 source group
/// of a pairing-friendly curve, expressed over circuit witnesses.
///
/// Implementations must be free of hidden state: calling a method twice with the same
/// arguments must yield the same result.
pub trait CurveBackend {
    /// The scalar field witness type
    type Scalar;
    /// The G1 group element witness type
    type G1;

    /// Multiply the fixed generator of G1 by a scalar
    fn scalar_mul_base(&self, scalar: &Self::Scalar) -> Result<Self::G1, CurveArithmeticError>;
    /// Multiply a G1 point by a scalar
    fn scalar_mul(
        &self,
        point: &Self::G1,
        scalar: &Self::Scalar,
    ) -> Result<Self::G1, CurveArithmeticError>;
    /// Add two points in G1
    fn add(&self, a: &Self::G1, b: &Self::G1) -> Result<Self::G1, CurveArithmeticError>;
    /// Negate a point in G1
    fn neg(&self, point: &Self::G1) -> Result<Self::G1, CurveArithmeticError>;

    /// A helper for computing `a - b` in G1
    fn sub(&self, a: &Self::G1, b: &Self::G1) -> Result<Self::G1, CurveArithmeticError> {
        let neg_b = self.neg(b)?;
        self.add(&neg_b, a)
    }
}

/// Encapsulates a batched pairing identity check between G1 and G2 witnesses
pub trait PairingBackend {
    /// The G1 group element witness type
    type G1;
    /// The G2 group element witness type
    type G2;

    /// Check whether `e(p_1, q_1) * ... * e(p_n, q_n)` is the identity of the target group.
    ///
    /// Returns `Ok(false)` when the product is not the identity, and an error when the
    /// inputs themselves cannot be paired.
    fn pairing_check(&self, p: &[&Self::G1], q: &[&Self::G2]) -> Result<bool, PairingError>;
}
