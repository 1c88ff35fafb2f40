//! Witness types used throughout the verifier.
//!
//! The KZG witnesses ([`Commitment`], [`OpeningProof`], [`SetupParams`]) are generic over
//! the element representation. Two representations are defined here:
//! - the emulated representation of BN254, where every field element is split into
//!   [`NUM_LIMBS`] limbs of the enclosing circuit's field `N`
//! - the native-field representation of BLS12-377, whose G1 base field is the circuit's
//!   own field, so coordinates are carried as single circuit-field elements

use ark_ec::short_weierstrass::{Affine, SWCurveConfig};
use ark_ff::{PrimeField, Zero};
use core::marker::PhantomData;
use num_bigint::BigUint;

use crate::{
    backends::CurveArithmeticError,
    constants::{G2_EXTENSION_DEGREE, LIMB_BITS, NUM_LIMBS, NUM_SETUP_G2_ELEMENTS},
};

// -----------------
// | KZG WITNESSES |
// -----------------

/// A KZG commitment to a polynomial, as a circuit witness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment<G1> {
    /// The commitment, a G1 element
    pub g1: G1,
}

/// An opening proof asserting that the committed polynomial evaluates to
/// `claimed_value` at `point`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpeningProof<S, G1> {
    /// The commitment to the quotient polynomial `(f(X) - f(a)) / (X - a)`
    pub quotient: G1,
    /// The claimed evaluation `f(a)`
    pub claimed_value: S,
    /// The evaluation point `a`
    pub point: S,
}

/// The fragment of the trusted setup consumed by the verifier.
///
/// It is assumed, and never checked, that `g2_alpha = [α]g2_base` for the
/// discarded setup secret `α`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupParams<G2> {
    /// The G2 base point `[1]₂`
    pub g2_base: G2,
    /// The G2 commitment to the setup secret `[α]₂`
    pub g2_alpha: G2,
}

impl<G2> SetupParams<G2> {
    /// The setup elements in the order they are paired against by the verifier
    pub fn pairing_bases(&self) -> [&G2; NUM_SETUP_G2_ELEMENTS] {
        [&self.g2_base, &self.g2_alpha]
    }
}

// ---------------------------
// | EMULATED REPRESENTATION |
// ---------------------------

/// An element of the field `P`, emulated over the circuit field `N`.
///
/// Limbs are little-endian, each holding [`LIMB_BITS`] bits. The circuit field must be wider
/// than a limb, a narrower `N` fails to compile as soon as an element is built or read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmulatedElement<N: PrimeField, P: PrimeField> {
    /// The limbs of the element
    limbs: [N; NUM_LIMBS],
    /// The emulated field
    _field: PhantomData<P>,
}

impl<N: PrimeField, P: PrimeField> EmulatedElement<N, P> {
    /// Whether every [`LIMB_BITS`]-bit limb is representable in `N` without reduction
    pub const LIMBS_FIT: bool = N::MODULUS_BIT_SIZE as usize > LIMB_BITS;

    /// Rejects, when the element type is instantiated, circuit fields too narrow to hold a limb
    const ASSERT_LIMBS_FIT: () = assert!(
        Self::LIMBS_FIT,
        "the circuit field is too narrow to hold an emulated limb"
    );

    /// Wraps raw limbs without checking that they form a canonical encoding
    pub fn from_limbs(limbs: [N; NUM_LIMBS]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::ASSERT_LIMBS_FIT;
        Self {
            limbs,
            _field: PhantomData,
        }
    }

    /// Encodes an element of the emulated field into limbs
    pub fn from_native(value: &P) -> Self {
        let mask = (BigUint::from(1u8) << LIMB_BITS) - 1u8;
        let mut remaining: BigUint = (*value).into();
        let limbs = core::array::from_fn(|_| {
            let limb = &remaining & &mask;
            remaining >>= LIMB_BITS;
            N::from(limb)
        });

        Self::from_limbs(limbs)
    }

    /// The limbs of the element, least significant first
    pub fn limbs(&self) -> &[N; NUM_LIMBS] {
        &self.limbs
    }

    /// Recombines the limbs into an element of the emulated field.
    ///
    /// Fails if a limb exceeds [`LIMB_BITS`] bits, or if the recombined value is not
    /// reduced modulo the emulated field's modulus.
    pub fn value(&self) -> Result<P, CurveArithmeticError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::ASSERT_LIMBS_FIT;
        let limb_bound = BigUint::from(1u8) << LIMB_BITS;
        let mut acc = BigUint::from(0u8);
        for limb in self.limbs.iter().rev() {
            let limb: BigUint = (*limb).into();
            if limb >= limb_bound {
                return Err(CurveArithmeticError::MalformedElement);
            }
            acc = (acc << LIMB_BITS) + limb;
        }

        let modulus: BigUint = P::MODULUS.into();
        if acc >= modulus {
            return Err(CurveArithmeticError::MalformedElement);
        }
        Ok(P::from(acc))
    }
}

/// A BN254 scalar, emulated over the circuit field `N`
pub type EmulatedScalar<N> = EmulatedElement<N, ark_bn254::Fr>;

/// An element of the BN254 base field, emulated over the circuit field `N`
pub type EmulatedBaseField<N> = EmulatedElement<N, ark_bn254::Fq>;

/// A BN254 G1 point in affine form with emulated coordinates.
///
/// The point at infinity is encoded as `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmulatedG1Affine<N: PrimeField> {
    /// The x coordinate
    pub x: EmulatedBaseField<N>,
    /// The y coordinate
    pub y: EmulatedBaseField<N>,
}

impl<N: PrimeField> EmulatedG1Affine<N> {
    /// Encodes a BN254 G1 point
    pub fn from_native(point: &ark_bn254::G1Affine) -> Self {
        let (x, y) = affine_coordinates(point);
        Self {
            x: EmulatedElement::from_native(&x),
            y: EmulatedElement::from_native(&y),
        }
    }

    /// Decodes the witness into a BN254 G1 point, checking curve & subgroup membership
    pub fn to_native(&self) -> Result<ark_bn254::G1Affine, CurveArithmeticError> {
        affine_from_coordinates(self.x.value()?, self.y.value()?)
    }
}

/// A BN254 G2 point in affine form with emulated coordinates.
///
/// Each coordinate is an `Fq2` element stored as `[c0, c1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmulatedG2Affine<N: PrimeField> {
    /// The x coordinate
    pub x: [EmulatedBaseField<N>; G2_EXTENSION_DEGREE],
    /// The y coordinate
    pub y: [EmulatedBaseField<N>; G2_EXTENSION_DEGREE],
}

impl<N: PrimeField> EmulatedG2Affine<N> {
    /// Encodes a BN254 G2 point
    pub fn from_native(point: &ark_bn254::G2Affine) -> Self {
        let (x, y) = affine_coordinates(point);
        Self {
            x: [
                EmulatedElement::from_native(&x.c0),
                EmulatedElement::from_native(&x.c1),
            ],
            y: [
                EmulatedElement::from_native(&y.c0),
                EmulatedElement::from_native(&y.c1),
            ],
        }
    }

    /// Decodes the witness into a BN254 G2 point, checking curve & subgroup membership
    pub fn to_native(&self) -> Result<ark_bn254::G2Affine, CurveArithmeticError> {
        let x = ark_bn254::Fq2::new(self.x[0].value()?, self.x[1].value()?);
        let y = ark_bn254::Fq2::new(self.y[0].value()?, self.y[1].value()?);
        affine_from_coordinates(x, y)
    }
}

// -------------------------------
// | NATIVE-FIELD REPRESENTATION |
// -------------------------------

/// The circuit field in which BLS12-377 witnesses are native: the BLS12-377 base field,
/// equivalently the BW6-761 scalar field
pub type CircuitField = ark_bls12_377::Fq;

/// A BLS12-377 scalar embedded directly into the circuit field.
///
/// The BLS12-377 scalar field is smaller than the circuit field, so the embedding is the
/// identity on canonical integer representatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeFieldScalar(pub CircuitField);

impl NativeFieldScalar {
    /// Embeds a BLS12-377 scalar into the circuit field
    pub fn from_native(scalar: &ark_bls12_377::Fr) -> Self {
        let value: BigUint = (*scalar).into();
        Self(CircuitField::from(value))
    }

    /// Reads the scalar back, failing if the witness exceeds the scalar field modulus
    pub fn value(&self) -> Result<ark_bls12_377::Fr, CurveArithmeticError> {
        let value: BigUint = self.0.into();
        let modulus: BigUint = ark_bls12_377::Fr::MODULUS.into();
        if value >= modulus {
            return Err(CurveArithmeticError::MalformedElement);
        }
        Ok(ark_bls12_377::Fr::from(value))
    }
}

/// A BLS12-377 G1 point in affine form with circuit-field coordinates.
///
/// The point at infinity is encoded as `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeFieldG1Affine {
    /// The x coordinate
    pub x: CircuitField,
    /// The y coordinate
    pub y: CircuitField,
}

impl NativeFieldG1Affine {
    /// Encodes a BLS12-377 G1 point
    pub fn from_native(point: &ark_bls12_377::G1Affine) -> Self {
        let (x, y) = affine_coordinates(point);
        Self { x, y }
    }

    /// Decodes the witness into a BLS12-377 G1 point, checking curve & subgroup membership
    pub fn to_native(&self) -> Result<ark_bls12_377::G1Affine, CurveArithmeticError> {
        affine_from_coordinates(self.x, self.y)
    }
}

/// A BLS12-377 G2 point in affine form, each `Fq2` coordinate stored as `[c0, c1]`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeFieldG2Affine {
    /// The x coordinate
    pub x: [CircuitField; G2_EXTENSION_DEGREE],
    /// The y coordinate
    pub y: [CircuitField; G2_EXTENSION_DEGREE],
}

impl NativeFieldG2Affine {
    /// Encodes a BLS12-377 G2 point
    pub fn from_native(point: &ark_bls12_377::G2Affine) -> Self {
        let (x, y) = affine_coordinates(point);
        Self {
            x: [x.c0, x.c1],
            y: [y.c0, y.c1],
        }
    }

    /// Decodes the witness into a BLS12-377 G2 point, checking curve & subgroup membership
    pub fn to_native(&self) -> Result<ark_bls12_377::G2Affine, CurveArithmeticError> {
        let x = ark_bls12_377::Fq2::new(self.x[0], self.x[1]);
        let y = ark_bls12_377::Fq2::new(self.y[0], self.y[1]);
        affine_from_coordinates(x, y)
    }
}

// -----------
// | HELPERS |
// -----------

/// Returns the affine coordinates of a point, mapping the point at infinity to `(0, 0)`
fn affine_coordinates<P: SWCurveConfig>(point: &Affine<P>) -> (P::BaseField, P::BaseField) {
    if point.infinity {
        (P::BaseField::zero(), P::BaseField::zero())
    } else {
        (point.x, point.y)
    }
}

/// Builds a point from affine coordinates, treating `(0, 0)` as the point at infinity
fn affine_from_coordinates<P: SWCurveConfig>(
    x: P::BaseField,
    y: P::BaseField,
) -> Result<Affine<P>, CurveArithmeticError> {
    if x.is_zero() && y.is_zero() {
        return Ok(Affine::identity());
    }

    let point = Affine::new_unchecked(x, y);
    if !point.is_on_curve() || !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(CurveArithmeticError::InvalidPoint);
    }
    Ok(point)
}
