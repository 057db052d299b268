//! Error codes for artifact packing and the CLI boundary.
//!
//! The cryptographic core is total: neither the permutation nor the sponge
//! has a failure path. Every error below is detected before hashing begins,
//! so a caller never observes a partially computed digest.

use thiserror::Error;

/// All error codes raised by this crate.
///
/// 1xx codes are input plumbing (hex, JSON, file I/O); 3xx codes are
/// artifact format violations detected at the packing boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorCode {
    /// A JSON document could not be parsed.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// A hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// An artifact file could not be read or written.
    #[error("cannot access {path}: {reason}")]
    Io {
        /// Path of the file that failed.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },

    /// Public-input bytes do not divide into whole 32-byte field elements.
    #[error("public inputs length {0} is not a multiple of 32")]
    PublicInputsNotFieldAligned(u64),

    /// Proof bytes do not divide into whole 32-byte field elements.
    #[error("proof length {0} is not a multiple of 32")]
    ProofNotFieldAligned(u64),

    /// The combined field count does not fit the 4-byte big-endian header.
    #[error("field count {0} exceeds the u32 blob header")]
    FieldCountOverflow(u64),
}

impl ErrorCode {
    /// Get the numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            ErrorCode::InvalidJson(_) => 100,
            ErrorCode::InvalidHex(_) => 101,
            ErrorCode::Io { .. } => 102,
            ErrorCode::PublicInputsNotFieldAligned(_) => 300,
            ErrorCode::ProofNotFieldAligned(_) => 301,
            ErrorCode::FieldCountOverflow(_) => 302,
        }
    }

    /// Get the stable error name.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::InvalidJson(_) => "InvalidJson",
            ErrorCode::InvalidHex(_) => "InvalidHex",
            ErrorCode::Io { .. } => "Io",
            ErrorCode::PublicInputsNotFieldAligned(_) => "PublicInputsNotFieldAligned",
            ErrorCode::ProofNotFieldAligned(_) => "ProofNotFieldAligned",
            ErrorCode::FieldCountOverflow(_) => "FieldCountOverflow",
        }
    }

    /// True for format violations in the artifact bytes themselves, as
    /// opposed to plumbing failures around them.
    pub fn is_format_error(&self) -> bool {
        self.code() >= 300
    }
}

/// Result type for packing operations.
pub type PackResult<T> = Result<T, ErrorCode>;
