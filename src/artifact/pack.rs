//! Proof blob packing and identifier derivation.

use crate::error::{ErrorCode, PackResult};
use crate::keccak::keccak256;

use super::types::ProofId;

/// Size of one field element in the blob, in bytes.
pub const FIELD_BYTES: usize = 32;

/// Size of the big-endian field-count prefix, in bytes.
pub const HEADER_BYTES: usize = 4;

/// Count whole field elements, rejecting misaligned byte sequences.
fn field_count(bytes: &[u8], misaligned: fn(u64) -> ErrorCode) -> PackResult<u64> {
    if bytes.len() % FIELD_BYTES != 0 {
        return Err(misaligned(bytes.len() as u64));
    }
    Ok((bytes.len() / FIELD_BYTES) as u64)
}

/// Pack public inputs and proof into the length-prefixed wire blob.
///
/// Layout: 4-byte big-endian total field count, then public inputs, then
/// proof. Public inputs always precede the proof bytes; the external
/// verifier depends on this exact order and a swap is undetectable after
/// hashing.
///
/// Both inputs must be whole multiples of 32 bytes; violations fail before
/// any bytes are assembled.
pub fn pack_proof_blob(public_inputs: &[u8], proof: &[u8]) -> PackResult<Vec<u8>> {
    let total_fields = field_count(public_inputs, ErrorCode::PublicInputsNotFieldAligned)?
        + field_count(proof, ErrorCode::ProofNotFieldAligned)?;
    let header =
        u32::try_from(total_fields).map_err(|_| ErrorCode::FieldCountOverflow(total_fields))?;

    let mut blob = Vec::with_capacity(HEADER_BYTES + public_inputs.len() + proof.len());
    blob.extend_from_slice(&header.to_be_bytes());
    blob.extend_from_slice(public_inputs);
    blob.extend_from_slice(proof);
    Ok(blob)
}

/// Derive the canonical proof identifier: Keccak-256 of the packed blob.
///
/// Total function; format validation already happened when the blob was
/// packed.
pub fn compute_proof_id(blob: &[u8]) -> ProofId {
    ProofId(keccak256(blob))
}
