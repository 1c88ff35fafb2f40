//! Arkworks-backed implementations of the verifier's circuit capabilities.
//!
//! Witnesses are decoded into native points (rejecting malformed encodings),
//! operated on natively, and re-encoded.

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::One;
use core::marker::PhantomData;
use kzg_common::{
    backends::{CurveArithmeticError, CurveBackend, PairingBackend, PairingError},
    family::{Bls12_377, Bn254, EngineG1, EngineG2, WitnessFamily},
};

/// Curve arithmetic & pairing checks over the witnesses of family `F`
pub struct ArkworksBackend<F: WitnessFamily>(PhantomData<F>);

impl<F: WitnessFamily> Default for ArkworksBackend<F> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

/// The backend for BN254 witnesses emulated over the circuit field `N`
pub type EmulatedBn254Backend<N> = ArkworksBackend<Bn254<N>>;
/// The backend for BLS12-377 witnesses
pub type NativeBls12_377Backend = ArkworksBackend<Bls12_377>;

impl<F: WitnessFamily> CurveBackend for ArkworksBackend<F> {
    type Scalar = F::Scalar;
    type G1 = F::G1;

    fn scalar_mul_base(&self, scalar: &F::Scalar) -> Result<F::G1, CurveArithmeticError> {
        let scalar = F::scalar_to_native(scalar)?;
        let res = <EngineG1<F> as AffineRepr>::generator() * scalar;
        Ok(F::g1_from_native(&res.into_affine()))
    }

    fn scalar_mul(&self, point: &F::G1, scalar: &F::Scalar) -> Result<F::G1, CurveArithmeticError> {
        let point = F::g1_to_native(point)?;
        let scalar = F::scalar_to_native(scalar)?;
        Ok(F::g1_from_native(&(point * scalar).into_affine()))
    }

    fn add(&self, a: &F::G1, b: &F::G1) -> Result<F::G1, CurveArithmeticError> {
        let a = F::g1_to_native(a)?;
        let b = F::g1_to_native(b)?;
        Ok(F::g1_from_native(&(a.into_group() + b.into_group()).into_affine()))
    }

    fn neg(&self, point: &F::G1) -> Result<F::G1, CurveArithmeticError> {
        let point = F::g1_to_native(point)?;
        Ok(F::g1_from_native(&(-point.into_group()).into_affine()))
    }
}

impl<F: WitnessFamily> PairingBackend for ArkworksBackend<F> {
    type G1 = F::G1;
    type G2 = F::G2;

    fn pairing_check(&self, p: &[&F::G1], q: &[&F::G2]) -> Result<bool, PairingError> {
        if p.len() != q.len() {
            return Err(PairingError::LengthMismatch {
                g1: p.len(),
                g2: q.len(),
            });
        }

        let p = p
            .iter()
            .map(|p| F::g1_to_native(p))
            .collect::<Result<Vec<EngineG1<F>>, _>>()?;
        let q = q
            .iter()
            .map(|q| F::g2_to_native(q))
            .collect::<Result<Vec<EngineG2<F>>, _>>()?;

        Ok(<F::Engine as Pairing>::multi_pairing(p, q).0
            == <F::Engine as Pairing>::TargetField::one())
    }
}
