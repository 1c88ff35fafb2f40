//! Core in-circuit KZG verification: conversion of native values into witnesses,
//! and the verifier asserting an opening proof through injected circuit capabilities.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod conversion;
pub mod verifier;
