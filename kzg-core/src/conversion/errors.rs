//! Errors stemming from the conversion of native values into witnesses

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use kzg_common::family::{CurveFamily, UnknownFamily};

/// Errors that can occur when converting native values into witnesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// A native value belongs to a different family than the one requested
    TypeMismatch {
        /// The family requested by the caller
        expected: CurveFamily,
        /// The family of the native value supplied
        found: CurveFamily,
    },
    /// The requested family is not one of the supported families
    UnsupportedFamily(String),
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::TypeMismatch { expected, found } => {
                write!(f, "mismatching types: expected a {} value, got {}", expected, found)
            }
            ConversionError::UnsupportedFamily(s) => write!(f, "unsupported curve family: {}", s),
        }
    }
}

impl Error for ConversionError {}

impl From<UnknownFamily> for ConversionError {
    fn from(value: UnknownFamily) -> Self {
        ConversionError::UnsupportedFamily(value.0)
    }
}
