#![forbid(unsafe_code)]

//! Error types for configuration and manual edits.

use std::fmt;

/// Invalid panel construction parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A field is NaN or infinite.
    NonFinite { field: &'static str },
    /// The container extent is negative.
    NegativeExtent { field: &'static str, value: f64 },
    /// The handle size is negative or not finite.
    InvalidHandleSize { value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "panel config field {field} is not finite"),
            Self::NegativeExtent { field, value } => {
                write!(f, "container extent {field} must be >= 0 (got {value})")
            }
            Self::InvalidHandleSize { value } => {
                write!(f, "handle size must be a finite value >= 0 (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A manual numeric edit that was rejected.
///
/// The live value is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// The text has no leading integer.
    NotANumber { raw: String },
    /// The leading integer does not fit the value range.
    OutOfRange { raw: String },
    /// A programmatic write supplied NaN or an infinity.
    NotFinite,
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { raw } => write!(f, "{raw:?} is not a number"),
            Self::OutOfRange { raw } => write!(f, "{raw:?} is out of range"),
            Self::NotFinite => write!(f, "value is not finite"),
        }
    }
}

impl std::error::Error for EditError {}
