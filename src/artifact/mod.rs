//! Proof artifact packing.
//!
//! Transforms the three independently supplied artifact blobs (verification
//! key, public inputs, proof) into the length-prefixed wire blob the
//! external verifier consumes, and derives the blob's canonical Keccak-256
//! identifier. The verification key travels alongside the blob but is never
//! part of the hashed message.

mod pack;
mod types;

pub use pack::{compute_proof_id, pack_proof_blob, FIELD_BYTES, HEADER_BYTES};
pub use types::{ProofArtifacts, ProofId};
