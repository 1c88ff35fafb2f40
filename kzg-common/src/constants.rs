//! Constants that parameterize the witness encodings

/// The number of bits held by each limb of an emulated field element
pub const LIMB_BITS: usize = 88;

/// The number of limbs used to encode an emulated field element.
///
/// Three 88-bit limbs cover 264 bits, enough for both BN254 fields.
pub const NUM_LIMBS: usize = 3;

/// The degree of the extension field over which G2 coordinates are defined
pub const G2_EXTENSION_DEGREE: usize = 2;

/// The number of G2 elements of the setup consumed by the verifier
pub const NUM_SETUP_G2_ELEMENTS: usize = 2;

/// The configuration name of the BN254 family
pub const BN254_NAME: &str = "bn254";

/// The configuration name of the BLS12-377 family
pub const BLS12_377_NAME: &str = "bls12-377";
