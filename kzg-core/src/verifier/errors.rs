//! Errors stemming from verifier operations

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use kzg_common::backends::{CurveArithmeticError, PairingError};

/// Errors that can occur when asserting an opening proof
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifierError {
    /// The pairing identity does not hold for the given commitment, proof & setup
    ProofInvalid,
    /// An error that occurred in the operations of the curve arithmetic backend
    CurveArithmetic(CurveArithmeticError),
    /// An error that occurred in the pairing backend
    PairingBackend(PairingError),
}

impl Display for VerifierError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            VerifierError::ProofInvalid => write!(f, "invalid opening proof"),
            VerifierError::CurveArithmetic(e) => write!(f, "curve arithmetic failed: {}", e),
            VerifierError::PairingBackend(e) => write!(f, "pairing check failed: {}", e),
        }
    }
}

impl Error for VerifierError {}

impl From<CurveArithmeticError> for VerifierError {
    fn from(value: CurveArithmeticError) -> Self {
        VerifierError::CurveArithmetic(value)
    }
}

impl From<PairingError> for VerifierError {
    fn from(value: PairingError) -> Self {
        VerifierError::PairingBackend(value)
    }
}
