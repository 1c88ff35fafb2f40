//! Conversions where the requested family is named at runtime, e.g. read from a config file.
//!
//! The requested name is parsed into a [`CurveFamily`]. Names other than those of the supported
//! families fail with [`ConversionError::UnsupportedFamily`], and values that belong to the
//! other family fail with [`ConversionError::TypeMismatch`].

use ark_ff::PrimeField;
use kzg_common::{
    family::{Bls12_377, Bn254, CurveFamily, WitnessFamily},
    native::{NativeCommitment, NativeOpeningProof, NativePoint, NativeSetup},
    types::{Commitment, OpeningProof, SetupParams},
};

use super::{
    commitment_from_native, errors::ConversionError, opening_proof_from_native,
    setup_from_native,
};

/// A witness of whichever family was selected at runtime
#[allow(non_camel_case_types)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selected<B, L> {
    /// A BN254 witness, emulated over the circuit field
    Bn254(B),
    /// A BLS12-377 witness, native to the circuit field
    Bls12_377(L),
}

impl<B, L> Selected<B, L> {
    /// The family of the selected witness
    pub fn family(&self) -> CurveFamily {
        match self {
            Selected::Bn254(_) => CurveFamily::Bn254,
            Selected::Bls12_377(_) => CurveFamily::Bls12_377,
        }
    }
}

/// The G1 witness type of family `F`
pub type G1Of<F> = <F as WitnessFamily>::G1;
/// The G2 witness type of family `F`
pub type G2Of<F> = <F as WitnessFamily>::G2;
/// The scalar witness type of family `F`
pub type ScalarOf<F> = <F as WitnessFamily>::Scalar;

/// A commitment witness of a runtime-selected family
pub type SelectedCommitment<N> =
    Selected<Commitment<G1Of<Bn254<N>>>, Commitment<G1Of<Bls12_377>>>;

/// An opening proof witness of a runtime-selected family
pub type SelectedOpeningProof<N> = Selected<
    OpeningProof<ScalarOf<Bn254<N>>, G1Of<Bn254<N>>>,
    OpeningProof<ScalarOf<Bls12_377>, G1Of<Bls12_377>>,
>;

/// A setup witness of a runtime-selected family
pub type SelectedSetup<N> = Selected<SetupParams<G2Of<Bn254<N>>>, SetupParams<G2Of<Bls12_377>>>;

/// Converts a native commitment into a witness of the family named by `family`.
///
/// BN254 witnesses are emulated over the circuit field `N`.
pub fn commitment_from_native_by_name<N: PrimeField>(
    family: &str,
    native: &NativeCommitment,
) -> Result<SelectedCommitment<N>, ConversionError> {
    match family.parse::<CurveFamily>()? {
        CurveFamily::Bn254 => commitment_from_native::<Bn254<N>>(native).map(Selected::Bn254),
        CurveFamily::Bls12_377 => {
            commitment_from_native::<Bls12_377>(native).map(Selected::Bls12_377)
        }
    }
}

/// Converts a native opening proof into a witness of the family named by `family`
pub fn opening_proof_from_native_by_name<N: PrimeField>(
    family: &str,
    point: &NativePoint,
    proof: &NativeOpeningProof,
) -> Result<SelectedOpeningProof<N>, ConversionError> {
    match family.parse::<CurveFamily>()? {
        CurveFamily::Bn254 => {
            opening_proof_from_native::<Bn254<N>>(point, proof).map(Selected::Bn254)
        }
        CurveFamily::Bls12_377 => {
            opening_proof_from_native::<Bls12_377>(point, proof).map(Selected::Bls12_377)
        }
    }
}

/// Converts a native verifier setup into a witness of the family named by `family`
pub fn setup_from_native_by_name<N: PrimeField>(
    family: &str,
    native: &NativeSetup,
) -> Result<SelectedSetup<N>, ConversionError> {
    match family.parse::<CurveFamily>()? {
        CurveFamily::Bn254 => setup_from_native::<Bn254<N>>(native).map(Selected::Bn254),
        CurveFamily::Bls12_377 => setup_from_native::<Bls12_377>(native).map(Selected::Bls12_377),
    }
}

#[cfg(test)]
mod tests {
    use ark_ec::AffineRepr;
    use ark_std::UniformRand;
    use kzg_common::{
        family::CurveFamily,
        native::{KzgOpening, KzgVerifierSetup, NativeCommitment, NativeOpeningProof, NativePoint},
        types::{EmulatedG1Affine, NativeFieldG2Affine},
    };
    use rand::thread_rng;

    use super::{
        commitment_from_native_by_name, opening_proof_from_native_by_name,
        setup_from_native_by_name, Selected,
    };
    use crate::conversion::errors::ConversionError;

    /// The circuit field over which BN254 is emulated in these tests
    type Circuit = ark_bn254::Fr;

    #[test]
    fn test_unsupported_family_name() {
        let mut rng = thread_rng();
        let unsupported = ConversionError::UnsupportedFamily("bls12-381".to_string());

        let native = NativeCommitment::Bn254(ark_bn254::G1Affine::generator());
        let err = commitment_from_native_by_name::<Circuit>("bls12-381", &native).unwrap_err();
        assert_eq!(err, unsupported);

        let proof = NativeOpeningProof::from(KzgOpening::<ark_bn254::Bn254> {
            quotient: ark_bn254::G1Affine::generator(),
            claimed_value: ark_bn254::Fr::rand(&mut rng),
        });
        let point = NativePoint::from(ark_bn254::Fr::rand(&mut rng));
        let err = opening_proof_from_native_by_name::<Circuit>("bls12-381", &point, &proof)
            .unwrap_err();
        assert_eq!(err, unsupported);

        let g2 = ark_bn254::G2Affine::generator();
        let setup = KzgVerifierSetup::<ark_bn254::Bn254> { g2, g2_alpha: g2 };
        let err = setup_from_native_by_name::<Circuit>("bls12-381", &setup.into()).unwrap_err();
        assert_eq!(err, unsupported);
    }

    #[test]
    fn test_selects_emulated_encoding() {
        let generator = ark_bn254::G1Affine::generator();
        let native = NativeCommitment::Bn254(generator);

        let selected = commitment_from_native_by_name::<Circuit>("bn254", &native).unwrap();
        assert_eq!(selected.family(), CurveFamily::Bn254);
        match selected {
            Selected::Bn254(cmt) => {
                assert_eq!(cmt.g1, EmulatedG1Affine::from_native(&generator))
            }
            Selected::Bls12_377(_) => panic!("expected a BN254 witness"),
        }
    }

    #[test]
    fn test_selects_native_field_encoding() {
        let g2 = ark_bls12_377::G2Affine::generator();
        let native = KzgVerifierSetup::<ark_bls12_377::Bls12_377> { g2, g2_alpha: g2 };

        let selected = setup_from_native_by_name::<Circuit>("BLS12-377", &native.into()).unwrap();
        match selected {
            Selected::Bls12_377(setup) => {
                assert_eq!(setup.g2_base, NativeFieldG2Affine::from_native(&g2))
            }
            Selected::Bn254(_) => panic!("expected a BLS12-377 witness"),
        }
    }

    #[test]
    fn test_mismatch_by_name() {
        let mut rng = thread_rng();
        let proof = NativeOpeningProof::from(KzgOpening::<ark_bn254::Bn254> {
            quotient: ark_bn254::G1Affine::generator(),
            claimed_value: ark_bn254::Fr::rand(&mut rng),
        });
        let point = NativePoint::from(ark_bn254::Fr::rand(&mut rng));

        let err =
            opening_proof_from_native_by_name::<Circuit>("bls12-377", &point, &proof).unwrap_err();
        assert_eq!(
            err,
            ConversionError::TypeMismatch {
                expected: CurveFamily::Bls12_377,
                found: CurveFamily::Bn254,
            }
        );
    }
}
