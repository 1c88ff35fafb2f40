//! Conversion of native (out-of-circuit) KZG values into circuit witnesses.
//!
//! The family is selected with a type parameter implementing [`WitnessFamily`]. Each native
//! value carries its own family tag, and a value tagged with the other family is rejected with
//! [`ConversionError::TypeMismatch`] rather than reinterpreted.
//!
//! When the family is only known at runtime, e.g. from a config file, use the
//! `*_from_native_by_name` variants in [`by_name`].

pub mod by_name;
pub mod errors;

use kzg_common::{
    family::{CurveFamily, WitnessFamily},
    native::{NativeCommitment, NativeOpeningProof, NativePoint, NativeSetup},
    types::{Commitment, OpeningProof, SetupParams},
};
use tracing::{debug, warn};

use self::errors::ConversionError;

/// Converts a native commitment into a commitment witness of family `F`
pub fn commitment_from_native<F: WitnessFamily>(
    native: &NativeCommitment,
) -> Result<Commitment<F::G1>, ConversionError> {
    let cmt = F::select_commitment(native).ok_or_else(|| mismatch::<F>(native.family()))?;

    debug!(family = %F::FAMILY, "converting commitment");
    Ok(Commitment {
        g1: F::g1_from_native(cmt),
    })
}

/// Converts a native opening proof, along with the point it opens at,
/// into an opening proof witness of family `F`
pub fn opening_proof_from_native<F: WitnessFamily>(
    point: &NativePoint,
    proof: &NativeOpeningProof,
) -> Result<OpeningProof<F::Scalar, F::G1>, ConversionError> {
    let opening = F::select_opening_proof(proof).ok_or_else(|| mismatch::<F>(proof.family()))?;
    let point = F::select_point(point).ok_or_else(|| mismatch::<F>(point.family()))?;

    debug!(family = %F::FAMILY, "converting opening proof");
    Ok(OpeningProof {
        quotient: F::g1_from_native(&opening.quotient),
        claimed_value: F::scalar_from_native(&opening.claimed_value),
        point: F::scalar_from_native(point),
    })
}

/// Converts a native verifier setup into a setup witness of family `F`
pub fn setup_from_native<F: WitnessFamily>(
    native: &NativeSetup,
) -> Result<SetupParams<F::G2>, ConversionError> {
    let setup = F::select_setup(native).ok_or_else(|| mismatch::<F>(native.family()))?;

    debug!(family = %F::FAMILY, "converting setup");
    Ok(SetupParams {
        g2_base: F::g2_from_native(&setup.g2),
        g2_alpha: F::g2_from_native(&setup.g2_alpha),
    })
}

/// Builds the error reported when a native value of family `found` is passed
/// where family `F` was requested
fn mismatch<F: WitnessFamily>(found: CurveFamily) -> ConversionError {
    warn!(expected = %F::FAMILY, found = %found, "native value does not match requested family");
    ConversionError::TypeMismatch {
        expected: F::FAMILY,
        found,
    }
}

#[cfg(test)]
mod tests {
    use ark_ec::AffineRepr;
    use ark_std::UniformRand;
    use kzg_common::{
        family::{Bls12_377, Bn254, CurveFamily},
        native::{KzgOpening, KzgVerifierSetup, NativeCommitment, NativeOpeningProof, NativePoint},
    };
    use rand::thread_rng;

    use super::{
        commitment_from_native, errors::ConversionError, opening_proof_from_native,
        setup_from_native,
    };

    /// The circuit field over which BN254 is emulated in these tests
    type Circuit = ark_bn254::Fr;

    #[test]
    fn test_commitment_family_mismatch() {
        let native = NativeCommitment::Bls12_377(ark_bls12_377::G1Affine::generator());
        let err = commitment_from_native::<Bn254<Circuit>>(&native).unwrap_err();

        assert_eq!(
            err,
            ConversionError::TypeMismatch {
                expected: CurveFamily::Bn254,
                found: CurveFamily::Bls12_377,
            }
        );
    }

    #[test]
    fn test_opening_proof_point_mismatch() {
        let mut rng = thread_rng();
        let proof = NativeOpeningProof::from(KzgOpening::<ark_bls12_377::Bls12_377> {
            quotient: ark_bls12_377::G1Affine::generator(),
            claimed_value: ark_bls12_377::Fr::rand(&mut rng),
        });
        // The proof matches the requested family, the point does not
        let point = NativePoint::from(ark_bn254::Fr::rand(&mut rng));

        let err = opening_proof_from_native::<Bls12_377>(&point, &proof).unwrap_err();
        assert_eq!(
            err,
            ConversionError::TypeMismatch {
                expected: CurveFamily::Bls12_377,
                found: CurveFamily::Bn254,
            }
        );
    }

    #[test]
    fn test_setup_family_mismatch() {
        let native = KzgVerifierSetup::<ark_bn254::Bn254> {
            g2: ark_bn254::G2Affine::generator(),
            g2_alpha: ark_bn254::G2Affine::generator(),
        };
        let err = setup_from_native::<Bls12_377>(&native.into()).unwrap_err();
        assert!(matches!(err, ConversionError::TypeMismatch { .. }));
    }

    #[test]
    fn test_conversion_idempotent() {
        let mut rng = thread_rng();
        let opening = KzgOpening::<ark_bn254::Bn254> {
            quotient: ark_bn254::G1Affine::generator(),
            claimed_value: ark_bn254::Fr::rand(&mut rng),
        };
        let proof = NativeOpeningProof::from(opening);
        let point = NativePoint::from(ark_bn254::Fr::rand(&mut rng));

        let first = opening_proof_from_native::<Bn254<Circuit>>(&point, &proof).unwrap();
        let second = opening_proof_from_native::<Bn254<Circuit>>(&point, &proof).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.claimed_value.value().unwrap(), opening.claimed_value);
    }
}
