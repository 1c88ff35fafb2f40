//! Miscellaneous test helpers

use ark_ff::{PrimeField, Zero};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial};
use rand::Rng;
use tracing_subscriber::{fmt, EnvFilter};

/// The environment variable read to filter test logs
const TEST_LOG_ENV: &str = "KZG_TEST_LOG";

pub fn random_scalars<F: PrimeField>(n: usize, rng: &mut impl Rng) -> Vec<F> {
    (0..n).map(|_| F::rand(rng)).collect()
}

/// Samples a random polynomial of exactly the given degree
pub fn random_polynomial<F: PrimeField>(degree: usize, rng: &mut impl Rng) -> DensePolynomial<F> {
    let mut coeffs = random_scalars::<F>(degree + 1, rng);
    while coeffs[degree].is_zero() {
        coeffs[degree] = F::rand(rng);
    }
    DensePolynomial::from_coefficients_vec(coeffs)
}

/// Installs a log subscriber writing through the test harness.
///
/// Safe to call from every test, only the first call installs the subscriber.
pub fn init_test_logging() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_env(TEST_LOG_ENV))
        .with_test_writer()
        .try_init();
}
