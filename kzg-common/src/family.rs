//! The supported curve families, and the per-family witness encodings.
//!
//! Exactly two families are supported:
//! - [`Bn254`], emulated over a circuit field `N`
//! - [`Bls12_377`], native to the BW6-761 scalar field
//!
//! The family is selected at compile time through the sealed [`WitnessFamily`] trait, or
//! at runtime (e.g. from a config file) through the closed [`CurveFamily`] enum.

use alloc::string::{String, ToString};
use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use core::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
    str::FromStr,
};
use serde::{Deserialize, Serialize};

use crate::{
    backends::CurveArithmeticError,
    constants::{BLS12_377_NAME, BN254_NAME},
    native::{
        KzgOpening, KzgVerifierSetup, NativeCommitment, NativeOpeningProof, NativePoint,
        NativeSetup,
    },
    types::{
        EmulatedG1Affine, EmulatedG2Affine, EmulatedScalar, NativeFieldG1Affine,
        NativeFieldG2Affine, NativeFieldScalar,
    },
};

/// Shorthand for the scalar field of a family's pairing engine
pub type EngineScalar<F> = <<F as WitnessFamily>::Engine as Pairing>::ScalarField;
/// Shorthand for the G1 affine group of a family's pairing engine
pub type EngineG1<F> = <<F as WitnessFamily>::Engine as Pairing>::G1Affine;
/// Shorthand for the G2 affine group of a family's pairing engine
pub type EngineG2<F> = <<F as WitnessFamily>::Engine as Pairing>::G2Affine;

// ----------------
// | CURVE FAMILY |
// ----------------

/// A runtime name for one of the supported curve families.
///
/// Deserialization goes through [`FromStr`], so config files accept the same names as
/// the by-name conversions.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CurveFamily {
    /// BN254, verified with emulated arithmetic
    #[serde(rename = "bn254")]
    Bn254,
    /// BLS12-377, verified with native-field arithmetic
    #[serde(rename = "bls12-377")]
    Bls12_377,
}

impl CurveFamily {
    /// The configuration name of the family
    pub fn name(&self) -> &'static str {
        match self {
            CurveFamily::Bn254 => BN254_NAME,
            CurveFamily::Bls12_377 => BLS12_377_NAME,
        }
    }
}

impl Display for CurveFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The error returned when a family name does not match a supported family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFamily(pub String);

impl Display for UnknownFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported curve family: {}", self.0)
    }
}

impl FromStr for CurveFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case(BN254_NAME) {
            Ok(CurveFamily::Bn254)
        } else if name.eq_ignore_ascii_case(BLS12_377_NAME) {
            Ok(CurveFamily::Bls12_377)
        } else {
            Err(UnknownFamily(s.to_string()))
        }
    }
}

impl TryFrom<String> for CurveFamily {
    type Error = UnknownFamily;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ------------------
// | WITNESS FAMILY |
// ------------------

/// Restricts [`WitnessFamily`] implementations to this crate
mod sealed {
    /// The sealing supertrait
    pub trait Sealed {}
}

/// A curve family usable by the verifier, defining how its native values are encoded
/// as circuit witnesses.
///
/// The `*_from_native` methods are the strongly-typed conversion entry points of the family,
/// and the `*_to_native` methods read witnesses back, validating their encoding.
/// The `select_*` methods match a tagged native value against the family, returning `None`
/// when the value belongs to the other family.
pub trait WitnessFamily: sealed::Sealed {
    /// The runtime name of the family
    const FAMILY: CurveFamily;

    /// The native pairing engine of the family
    type Engine: Pairing;
    /// The scalar witness type
    type Scalar: Clone + Debug + PartialEq;
    /// The G1 witness type
    type G1: Clone + Debug + PartialEq;
    /// The G2 witness type
    type G2: Clone + Debug + PartialEq;

    /// Encodes a native scalar
    fn scalar_from_native(scalar: &EngineScalar<Self>) -> Self::Scalar;
    /// Encodes a native G1 point
    fn g1_from_native(point: &EngineG1<Self>) -> Self::G1;
    /// Encodes a native G2 point
    fn g2_from_native(point: &EngineG2<Self>) -> Self::G2;

    /// Reads a scalar witness back into a native scalar
    fn scalar_to_native(
        scalar: &Self::Scalar,
    ) -> Result<EngineScalar<Self>, CurveArithmeticError>;
    /// Reads a G1 witness back into a native point
    fn g1_to_native(point: &Self::G1) -> Result<EngineG1<Self>, CurveArithmeticError>;
    /// Reads a G2 witness back into a native point
    fn g2_to_native(point: &Self::G2) -> Result<EngineG2<Self>, CurveArithmeticError>;

    /// Selects a commitment of this family
    fn select_commitment(native: &NativeCommitment) -> Option<&EngineG1<Self>>;
    /// Selects an evaluation point of this family
    fn select_point(native: &NativePoint) -> Option<&EngineScalar<Self>>;
    /// Selects an opening proof of this family
    fn select_opening_proof(native: &NativeOpeningProof) -> Option<&KzgOpening<Self::Engine>>;
    /// Selects a verifier setup of this family
    fn select_setup(native: &NativeSetup) -> Option<&KzgVerifierSetup<Self::Engine>>;
}

/// The BN254 family, emulated over the circuit field `N`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bn254<N: PrimeField>(PhantomData<N>);

/// The BLS12-377 family, native to the BW6-761 scalar field
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12_377;

impl<N: PrimeField> sealed::Sealed for Bn254<N> {}
impl sealed::Sealed for Bls12_377 {}

impl<N: PrimeField> WitnessFamily for Bn254<N> {
    const FAMILY: CurveFamily = CurveFamily::Bn254;

    type Engine = ark_bn254::Bn254;
    type Scalar = EmulatedScalar<N>;
    type G1 = EmulatedG1Affine<N>;
    type G2 = EmulatedG2Affine<N>;

    fn scalar_from_native(scalar: &ark_bn254::Fr) -> Self::Scalar {
        EmulatedScalar::from_native(scalar)
    }

    fn g1_from_native(point: &ark_bn254::G1Affine) -> Self::G1 {
        EmulatedG1Affine::from_native(point)
    }

    fn g2_from_native(point: &ark_bn254::G2Affine) -> Self::G2 {
        EmulatedG2Affine::from_native(point)
    }

    fn scalar_to_native(scalar: &Self::Scalar) -> Result<ark_bn254::Fr, CurveArithmeticError> {
        scalar.value()
    }

    fn g1_to_native(point: &Self::G1) -> Result<ark_bn254::G1Affine, CurveArithmeticError> {
        point.to_native()
    }

    fn g2_to_native(point: &Self::G2) -> Result<ark_bn254::G2Affine, CurveArithmeticError> {
        point.to_native()
    }

    fn select_commitment(native: &NativeCommitment) -> Option<&ark_bn254::G1Affine> {
        match native {
            NativeCommitment::Bn254(cmt) => Some(cmt),
            NativeCommitment::Bls12_377(_) => None,
        }
    }

    fn select_point(native: &NativePoint) -> Option<&ark_bn254::Fr> {
        match native {
            NativePoint::Bn254(point) => Some(point),
            NativePoint::Bls12_377(_) => None,
        }
    }

    fn select_opening_proof(
        native: &NativeOpeningProof,
    ) -> Option<&KzgOpening<ark_bn254::Bn254>> {
        match native {
            NativeOpeningProof::Bn254(proof) => Some(proof),
            NativeOpeningProof::Bls12_377(_) => None,
        }
    }

    fn select_setup(native: &NativeSetup) -> Option<&KzgVerifierSetup<ark_bn254::Bn254>> {
        match native {
            NativeSetup::Bn254(setup) => Some(setup),
            NativeSetup::Bls12_377(_) => None,
        }
    }
}

impl WitnessFamily for Bls12_377 {
    const FAMILY: CurveFamily = CurveFamily::Bls12_377;

    type Engine = ark_bls12_377::Bls12_377;
    type Scalar = NativeFieldScalar;
    type G1 = NativeFieldG1Affine;
    type G2 = NativeFieldG2Affine;

    fn scalar_from_native(scalar: &ark_bls12_377::Fr) -> Self::Scalar {
        NativeFieldScalar::from_native(scalar)
    }

    fn g1_from_native(point: &ark_bls12_377::G1Affine) -> Self::G1 {
        NativeFieldG1Affine::from_native(point)
    }

    fn g2_from_native(point: &ark_bls12_377::G2Affine) -> Self::G2 {
        NativeFieldG2Affine::from_native(point)
    }

    fn scalar_to_native(
        scalar: &Self::Scalar,
    ) -> Result<ark_bls12_377::Fr, CurveArithmeticError> {
        scalar.value()
    }

    fn g1_to_native(point: &Self::G1) -> Result<ark_bls12_377::G1Affine, CurveArithmeticError> {
        point.to_native()
    }

    fn g2_to_native(point: &Self::G2) -> Result<ark_bls12_377::G2Affine, CurveArithmeticError> {
        point.to_native()
    }

    fn select_commitment(native: &NativeCommitment) -> Option<&ark_bls12_377::G1Affine> {
        match native {
            NativeCommitment::Bls12_377(cmt) => Some(cmt),
            NativeCommitment::Bn254(_) => None,
        }
    }

    fn select_point(native: &NativePoint) -> Option<&ark_bls12_377::Fr> {
        match native {
            NativePoint::Bls12_377(point) => Some(point),
            NativePoint::Bn254(_) => None,
        }
    }

    fn select_opening_proof(
        native: &NativeOpeningProof,
    ) -> Option<&KzgOpening<ark_bls12_377::Bls12_377>> {
        match native {
            NativeOpeningProof::Bls12_377(proof) => Some(proof),
            NativeOpeningProof::Bn254(_) => None,
        }
    }

    fn select_setup(
        native: &NativeSetup,
    ) -> Option<&KzgVerifierSetup<ark_bls12_377::Bls12_377>> {
        match native {
            NativeSetup::Bls12_377(setup) => Some(setup),
            NativeSetup::Bn254(_) => None,
        }
    }
}
