//! Common types used by the in-circuit KZG verifier: the curve & pairing capability
//! interfaces, the witness representations of both supported curve families, and the
//! tagged out-of-circuit values that are converted into them.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![no_std]

extern crate alloc;

pub mod backends;
pub mod constants;
pub mod family;
pub mod native;
pub mod types;
