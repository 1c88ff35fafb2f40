//! Out-of-circuit ("native") KZG values, as produced by an ordinary KZG implementation.
//!
//! Values handed to the conversion layer are tagged with the curve family they belong to,
//! so that a value of one family can never be reinterpreted as a witness of the other.

use ark_ec::pairing::Pairing;

use crate::family::CurveFamily;

/// A native KZG opening proof for a single evaluation point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KzgOpening<E: Pairing> {
    /// The commitment to the quotient polynomial
    pub quotient: E::G1Affine,
    /// The evaluation of the committed polynomial at the opening point
    pub claimed_value: E::ScalarField,
}

/// The verifier's part of a native KZG structured reference string
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KzgVerifierSetup<E: Pairing> {
    /// The G2 generator used by the setup, `[1]₂`
    pub g2: E::G2Affine,
    /// The setup secret in G2, `[α]₂`
    pub g2_alpha: E::G2Affine,
}

/// A native commitment, tagged with its curve family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeCommitment {
    /// A commitment over BN254
    Bn254(ark_bn254::G1Affine),
    /// A commitment over BLS12-377
    Bls12_377(ark_bls12_377::G1Affine),
}

/// A native evaluation point, tagged with its curve family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativePoint {
    /// A point in the BN254 scalar field
    Bn254(ark_bn254::Fr),
    /// A point in the BLS12-377 scalar field
    Bls12_377(ark_bls12_377::Fr),
}

/// A native opening proof, tagged with its curve family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeOpeningProof {
    /// An opening proof over BN254
    Bn254(KzgOpening<ark_bn254::Bn254>),
    /// An opening proof over BLS12-377
    Bls12_377(KzgOpening<ark_bls12_377::Bls12_377>),
}

/// A native verifier setup, tagged with its curve family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NativeSetup {
    /// A setup over BN254
    Bn254(KzgVerifierSetup<ark_bn254::Bn254>),
    /// A setup over BLS12-377
    Bls12_377(KzgVerifierSetup<ark_bls12_377::Bls12_377>),
}

/// Implements `family` for a tagged native value, and optionally the `From` conversions.
///
/// The `From` conversions are only generated for values whose per-family types are distinct:
/// the G1 affine aliases of both curves are projections that coherence cannot tell apart.
macro_rules! impl_tagged_native {
    ($tagged:ident) => {
        impl $tagged {
            /// The curve family this value belongs to
            pub fn family(&self) -> CurveFamily {
                match self {
                    $tagged::Bn254(_) => CurveFamily::Bn254,
                    $tagged::Bls12_377(_) => CurveFamily::Bls12_377,
                }
            }
        }
    };
    ($tagged:ident, $bn254:ty, $bls12_377:ty) => {
        impl_tagged_native!($tagged);

        impl From<$bn254> for $tagged {
            fn from(value: $bn254) -> Self {
                $tagged::Bn254(value)
            }
        }

        impl From<$bls12_377> for $tagged {
            fn from(value: $bls12_377) -> Self {
                $tagged::Bls12_377(value)
            }
        }
    };
}

impl_tagged_native!(NativeCommitment);
impl_tagged_native!(NativePoint, ark_bn254::Fr, ark_bls12_377::Fr);
impl_tagged_native!(
    NativeOpeningProof,
    KzgOpening<ark_bn254::Bn254>,
    KzgOpening<ark_bls12_377::Bls12_377>
);
impl_tagged_native!(
    NativeSetup,
    KzgVerifierSetup<ark_bn254::Bn254>,
    KzgVerifierSetup<ark_bls12_377::Bls12_377>
);
