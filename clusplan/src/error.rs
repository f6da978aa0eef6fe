//! Error types for plan validation and sizing.
//!
//! Findings about a configuration (missing networks, tiny volumes, and so on)
//! are never errors: they are recorded in [`Diagnostics`](crate::Diagnostics).
//! The types here cover contract violations by the caller, such as asking the
//! estimator to size a cluster of one node.

use thiserror::Error;

/// Address family / notation rejected by a primitive validator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid IP address format")]
    IpAddress,

    #[error("Invalid CIDR notation")]
    Cidr,

    #[error("Invalid subnet mask")]
    SubnetMask,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input value outside the range an operation accepts.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Malformed address literal.
    #[error("Invalid address '{value}': {source}")]
    InvalidAddress {
        value: String,
        #[source]
        source: AddressError,
    },
}

impl Error {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Error::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
