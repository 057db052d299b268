//! Proof artifact packing and Keccak-256 proof identifiers.
//!
//! This crate packs zero-knowledge proof artifacts (public inputs and proof
//! bytes, both sequences of 32-byte field elements) into the length-prefixed
//! wire blob an external verifier consumes, and derives the canonical
//! Keccak-256 identifier of that blob.
//!
//! # Architecture
//!
//! - [`keccak`] - Keccak-f[1600] permutation and the Keccak-256 sponge
//! - [`artifact`] - proof blob packing and identifier derivation
//! - [`vectors`] - known-answer vector corpus used by `selftest`
//! - [`error`] - error codes raised at the packing boundary
//!
//! The hash is the pre-standardization Keccak variant (0x01 padding domain
//! byte), not NIST SHA3-256, matching Ethereum-style digests.

// Identifiers must be reproducible bit-for-bit across independent
// implementations; library code avoids unwrap/expect/panic so every failure
// surfaces as an error code.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod artifact;
pub mod error;
pub mod keccak;
pub mod vectors;

// Re-export commonly used types
pub use artifact::{compute_proof_id, pack_proof_blob, ProofArtifacts, ProofId};
pub use error::{ErrorCode, PackResult};
pub use keccak::{keccak256, Keccak256};
