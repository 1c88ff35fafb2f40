//! A native univariate KZG implementation, used to produce the commitments,
//! opening proofs & setups fed to the in-circuit verifier

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{Field, One, Zero};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_std::UniformRand;
use eyre::{eyre, Result};
use kzg_common::native::{KzgOpening, KzgVerifierSetup};
use rand::Rng;

use crate::misc::random_polynomial;

/// A structured reference string over the pairing engine `E`.
///
/// G1 powers are taken over the fixed generator of G1, which the verifier
/// uses to lift the claimed evaluation into the group.
#[derive(Clone, Debug)]
pub struct KzgSrs<E: Pairing> {
    /// `[1]₁, [α]₁, ..., [α^d]₁`
    pub powers_of_g1: Vec<E::G1Affine>,
    /// `[1]₂`
    pub g2: E::G2Affine,
    /// `[α]₂`
    pub g2_alpha: E::G2Affine,
}

impl<E: Pairing> KzgSrs<E> {
    /// Samples a fresh setup supporting polynomials up to `max_degree`,
    /// discarding the secret
    pub fn setup(max_degree: usize, rng: &mut impl Rng) -> Self {
        let alpha = E::ScalarField::rand(rng);
        let g1 = E::G1Affine::generator();
        let g2 = E::G2Affine::generator();

        let powers: Vec<E::G1> = (0..=max_degree)
            .scan(E::ScalarField::one(), |power, _| {
                let point = g1 * *power;
                *power *= alpha;
                Some(point)
            })
            .collect();

        Self {
            powers_of_g1: E::G1::normalize_batch(&powers),
            g2,
            g2_alpha: (g2 * alpha).into_affine(),
        }
    }

    /// The largest degree of polynomial this setup can commit to
    pub fn max_degree(&self) -> usize {
        self.powers_of_g1.len() - 1
    }

    /// The verifier's part of the setup
    pub fn verifier_setup(&self) -> KzgVerifierSetup<E> {
        KzgVerifierSetup {
            g2: self.g2,
            g2_alpha: self.g2_alpha,
        }
    }

    /// Commits to a polynomial
    pub fn commit(&self, poly: &DensePolynomial<E::ScalarField>) -> Result<E::G1Affine> {
        let coeffs = poly.coeffs();
        if coeffs.len() > self.powers_of_g1.len() {
            return Err(eyre!(
                "polynomial of degree {} exceeds setup of degree {}",
                poly.degree(),
                self.max_degree()
            ));
        }

        let bases = &self.powers_of_g1[..coeffs.len()];
        let commitment = <E::G1 as VariableBaseMSM>::msm(bases, coeffs)
            .map_err(|n| eyre!("msm length mismatch: {n}"))?;
        Ok(commitment.into_affine())
    }

    /// Opens a polynomial at `point`, committing to the quotient `(f(X) - f(point)) / (X - point)`
    pub fn open(
        &self,
        poly: &DensePolynomial<E::ScalarField>,
        point: &E::ScalarField,
    ) -> Result<KzgOpening<E>> {
        let quotient = divide_by_linear(poly, point);

        Ok(KzgOpening {
            quotient: self.commit(&quotient)?,
            claimed_value: poly.evaluate(point),
        })
    }

    /// Checks an opening natively, as `e(C - [v]₁, [1]₂) = e(Q, [α]₂ - [a]₂)`
    pub fn verify(
        setup: &KzgVerifierSetup<E>,
        commitment: &E::G1Affine,
        point: &E::ScalarField,
        opening: &KzgOpening<E>,
    ) -> bool {
        let lhs = E::pairing(
            commitment.into_group() - E::G1Affine::generator() * opening.claimed_value,
            setup.g2,
        );
        let rhs = E::pairing(
            opening.quotient,
            setup.g2_alpha.into_group() - setup.g2 * *point,
        );
        lhs == rhs
    }
}

/// Synthetic division of `poly` by `X - point`, discarding the remainder
fn divide_by_linear<F: Field>(poly: &DensePolynomial<F>, point: &F) -> DensePolynomial<F> {
    let coeffs = poly.coeffs();
    if coeffs.len() < 2 {
        return DensePolynomial::zero();
    }

    let mut quotient = vec![F::zero(); coeffs.len() - 1];
    let mut carry = F::zero();
    for i in (1..coeffs.len()).rev() {
        carry = coeffs[i] + carry * point;
        quotient[i - 1] = carry;
    }

    DensePolynomial::from_coefficients_vec(quotient)
}

/// A random polynomial committed & opened at a random point under a fresh setup
pub struct NativeInstance<E: Pairing> {
    /// The verifier's part of the setup
    pub setup: KzgVerifierSetup<E>,
    /// The commitment to the polynomial
    pub commitment: E::G1Affine,
    /// The opening point
    pub point: E::ScalarField,
    /// The opening proof
    pub opening: KzgOpening<E>,
}

impl<E: Pairing> NativeInstance<E> {
    /// Samples an instance over a random polynomial of the given degree
    pub fn random(degree: usize, rng: &mut impl Rng) -> Result<Self> {
        let srs = KzgSrs::<E>::setup(degree, rng);
        let poly = random_polynomial::<E::ScalarField>(degree, rng);
        let point = E::ScalarField::rand(rng);

        Ok(Self {
            setup: srs.verifier_setup(),
            commitment: srs.commit(&poly)?,
            point,
            opening: srs.open(&poly, &point)?,
        })
    }
}
