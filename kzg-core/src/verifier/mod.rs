//! The KZG opening verifier.
//!
//! Given a commitment `C` to a polynomial `f`, an evaluation point `a`, a claimed value `v`
//! and the commitment `Q` to the quotient `(f(X) - v) / (X - a)`, the verifier asserts
//! `e(C - [v]G + [a]Q, [1]₂) · e(-Q, [α]₂) = 1` with a single batched pairing check.
//!
//! The verifier holds a setup, and borrows the curve arithmetic & pairing capabilities of the
//! enclosing circuit. It is written once against those capabilities, and so serves both the
//! emulated BN254 family and the native BLS12-377 family.

pub mod errors;

use kzg_common::{
    backends::{CurveBackend, PairingBackend},
    types::{Commitment, OpeningProof, SetupParams},
};
use tracing::{debug, warn};

use self::errors::VerifierError;

/// The verifier struct, which is defined generically over curve arithmetic and pairing backends
pub struct Verifier<'a, C, P>
where
    C: CurveBackend,
    P: PairingBackend<G1 = C::G1>,
{
    /// The verifier's fragment of the trusted setup
    setup: SetupParams<P::G2>,
    /// The curve arithmetic capability
    curve: &'a C,
    /// The pairing capability
    pairing: &'a P,
}

impl<'a, C, P> Verifier<'a, C, P>
where
    C: CurveBackend,
    P: PairingBackend<G1 = C::G1>,
{
    /// Construct a verifier for the given setup, over the given capabilities
    pub fn new(setup: SetupParams<P::G2>, curve: &'a C, pairing: &'a P) -> Self {
        Self {
            setup,
            curve,
            pairing,
        }
    }

    /// The setup this verifier checks proofs against
    pub fn setup(&self) -> &SetupParams<P::G2> {
        &self.setup
    }

    /// Assert that `proof` opens `commitment` to `proof.claimed_value` at `proof.point`.
    ///
    /// Returns [`VerifierError::ProofInvalid`] if the pairing identity does not hold, and a
    /// backend error if the capabilities reject one of the witnesses.
    pub fn assert_valid(
        &self,
        commitment: &Commitment<C::G1>,
        proof: &OpeningProof<C::Scalar, C::G1>,
    ) -> Result<(), VerifierError> {
        let lhs = self.step_1(commitment, proof)?;
        let neg_quotient = self.step_2(proof)?;

        if self.step_3(&lhs, &neg_quotient)? {
            debug!("opening proof verified");
            Ok(())
        } else {
            warn!("opening proof rejected: pairing identity does not hold");
            Err(VerifierError::ProofInvalid)
        }
    }

    /// Compute the G1 element paired against `[1]₂`:
    /// `C - [v]G + [a]Q`
    fn step_1(
        &self,
        commitment: &Commitment<C::G1>,
        proof: &OpeningProof<C::Scalar, C::G1>,
    ) -> Result<C::G1, VerifierError> {
        let claimed_value_g1 = self.curve.scalar_mul_base(&proof.claimed_value)?;
        let shifted_commitment = self.curve.sub(&commitment.g1, &claimed_value_g1)?;
        let scaled_quotient = self.curve.scalar_mul(&proof.quotient, &proof.point)?;

        Ok(self.curve.add(&scaled_quotient, &shifted_commitment)?)
    }

    /// Compute the G1 element paired against `[α]₂`:
    /// `-Q`
    fn step_2(&self, proof: &OpeningProof<C::Scalar, C::G1>) -> Result<C::G1, VerifierError> {
        Ok(self.curve.neg(&proof.quotient)?)
    }

    /// Compute the final pairing check:
    /// `e(C - [v]G + [a]Q, [1]₂) · e(-Q, [α]₂) = 1`
    ///
    /// This rearranges `e(C - [v]G, [1]₂) = e(Q, [α - a]₂)`, so that no G2 arithmetic
    /// is needed in-circuit.
    fn step_3(&self, lhs: &C::G1, neg_quotient: &C::G1) -> Result<bool, VerifierError> {
        Ok(self
            .pairing
            .pairing_check(&[lhs, neg_quotient], &self.setup.pairing_bases())?)
    }
}
