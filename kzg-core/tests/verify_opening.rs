//! End-to-end verification of natively produced KZG openings, through the conversion layer

use ark_ff::One;
use eyre::Result;
use kzg_common::{
    family::{Bls12_377, Bn254},
    native::{NativeCommitment, NativeOpeningProof, NativePoint, NativeSetup},
};
use kzg_core::{
    conversion::{
        by_name::{
            commitment_from_native_by_name, opening_proof_from_native_by_name,
            setup_from_native_by_name, Selected,
        },
        commitment_from_native, opening_proof_from_native, setup_from_native,
    },
    verifier::{errors::VerifierError, Verifier},
};
use rand::thread_rng;
use test_helpers::{
    backends::{EmulatedBn254Backend, NativeBls12_377Backend},
    kzg::NativeInstance,
    misc::init_test_logging,
};

/// The circuit field over which BN254 is emulated in these tests
type Circuit = ark_bn254::Fr;

/// The degree of the committed polynomials
const DEGREE: usize = 32;

#[test]
fn test_bn254_opening() -> Result<()> {
    init_test_logging();
    let mut rng = thread_rng();
    let native = NativeInstance::<ark_bn254::Bn254>::random(DEGREE, &mut rng)?;

    let setup = setup_from_native::<Bn254<Circuit>>(&native.setup.into())?;
    let commitment =
        commitment_from_native::<Bn254<Circuit>>(&NativeCommitment::Bn254(native.commitment))?;
    let proof = opening_proof_from_native::<Bn254<Circuit>>(
        &native.point.into(),
        &native.opening.into(),
    )?;

    let backend = EmulatedBn254Backend::<Circuit>::default();
    Verifier::new(setup, &backend, &backend).assert_valid(&commitment, &proof)?;
    Ok(())
}

#[test]
fn test_bls12_377_opening() -> Result<()> {
    init_test_logging();
    let mut rng = thread_rng();
    let native = NativeInstance::<ark_bls12_377::Bls12_377>::random(DEGREE, &mut rng)?;

    let setup = setup_from_native::<Bls12_377>(&native.setup.into())?;
    let commitment =
        commitment_from_native::<Bls12_377>(&NativeCommitment::Bls12_377(native.commitment))?;
    let proof =
        opening_proof_from_native::<Bls12_377>(&native.point.into(), &native.opening.into())?;

    let backend = NativeBls12_377Backend::default();
    let verifier = Verifier::new(setup, &backend, &backend);
    verifier.assert_valid(&commitment, &proof)?;

    // The same verifier rejects a proof for a different evaluation point
    let other_point = NativePoint::from(native.point + ark_bls12_377::Fr::one());
    let proof = opening_proof_from_native::<Bls12_377>(&other_point, &native.opening.into())?;
    assert_eq!(
        verifier.assert_valid(&commitment, &proof),
        Err(VerifierError::ProofInvalid)
    );
    Ok(())
}

#[test]
fn test_opening_with_family_from_config() -> Result<()> {
    init_test_logging();
    let mut rng = thread_rng();
    let native = NativeInstance::<ark_bls12_377::Bls12_377>::random(DEGREE, &mut rng)?;
    let family: String = serde_json::from_str("\"bls12-377\"")?;

    let setup = NativeSetup::from(native.setup);
    let commitment = NativeCommitment::Bls12_377(native.commitment);
    let point = NativePoint::from(native.point);
    let proof = NativeOpeningProof::from(native.opening);

    let setup = setup_from_native_by_name::<Circuit>(&family, &setup)?;
    let commitment = commitment_from_native_by_name::<Circuit>(&family, &commitment)?;
    let proof = opening_proof_from_native_by_name::<Circuit>(&family, &point, &proof)?;

    match (setup, commitment, proof) {
        (
            Selected::Bls12_377(setup),
            Selected::Bls12_377(commitment),
            Selected::Bls12_377(proof),
        ) => {
            let backend = NativeBls12_377Backend::default();
            Verifier::new(setup, &backend, &backend).assert_valid(&commitment, &proof)?;
        }
        _ => panic!("expected BLS12-377 witnesses"),
    }
    Ok(())
}
