//! Artifact types: ProofId and the artifact bundle.

use crate::error::{ErrorCode, PackResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::pack::{self, FIELD_BYTES};

/// A 32-byte Keccak-256 proof identifier.
///
/// Downstream systems treat this as an opaque lookup key; it is never
/// interpreted, only compared and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProofId(pub [u8; 32]);

impl Serialize for ProofId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ProofId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ProofId::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl ProofId {
    /// Create from a hex string (64 hex chars, 0x prefix tolerated).
    pub fn from_hex(hex_str: &str) -> PackResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);

        let bytes = hex::decode(hex_str)
            .map_err(|_| ErrorCode::InvalidHex(hex_str.to_string()))?;
        if bytes.len() != 32 {
            return Err(ErrorCode::InvalidHex(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }

        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(ProofId(arr))
    }

    /// Convert to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for ProofId {
    fn from(arr: [u8; 32]) -> Self {
        ProofId(arr)
    }
}

impl fmt::Display for ProofId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// The three independently supplied artifact blobs.
///
/// `vk` is opaque here: it is passed through to the verifier unmodified and
/// never enters the hash input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProofArtifacts {
    /// Verification key bytes (not hashed).
    pub vk: Vec<u8>,
    /// Public input bytes, N x 32-byte field elements.
    pub public_inputs: Vec<u8>,
    /// Proof bytes, M x 32-byte field elements.
    pub proof: Vec<u8>,
}

impl ProofArtifacts {
    /// Bundle the three blobs.
    pub fn new(vk: Vec<u8>, public_inputs: Vec<u8>, proof: Vec<u8>) -> Self {
        Self {
            vk,
            public_inputs,
            proof,
        }
    }

    /// Number of 32-byte field elements in the public inputs.
    pub fn public_input_fields(&self) -> PackResult<u64> {
        if self.public_inputs.len() % FIELD_BYTES != 0 {
            return Err(ErrorCode::PublicInputsNotFieldAligned(
                self.public_inputs.len() as u64,
            ));
        }
        Ok((self.public_inputs.len() / FIELD_BYTES) as u64)
    }

    /// Number of 32-byte field elements in the proof.
    pub fn proof_fields(&self) -> PackResult<u64> {
        if self.proof.len() % FIELD_BYTES != 0 {
            return Err(ErrorCode::ProofNotFieldAligned(self.proof.len() as u64));
        }
        Ok((self.proof.len() / FIELD_BYTES) as u64)
    }

    /// Pack public inputs and proof into the wire blob.
    pub fn pack(&self) -> PackResult<Vec<u8>> {
        pack::pack_proof_blob(&self.public_inputs, &self.proof)
    }

    /// Pack and derive the canonical proof identifier.
    pub fn proof_id(&self) -> PackResult<ProofId> {
        Ok(pack::compute_proof_id(&self.pack()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proof_id_hex_roundtrip() {
        let id = ProofId([0xab; 32]);
        let recovered = ProofId::from_hex(&id.to_hex()).unwrap();
        assert_eq!(id, recovered);
    }

    #[test]
    fn test_proof_id_accepts_0x_prefix() {
        let hex = format!("0x{}", "11".repeat(32));
        assert_eq!(ProofId::from_hex(&hex).unwrap(), ProofId([0x11; 32]));
    }

    #[test]
    fn test_proof_id_rejects_wrong_length() {
        assert!(matches!(
            ProofId::from_hex("abcd"),
            Err(ErrorCode::InvalidHex(_))
        ));
    }

    #[test]
    fn test_proof_id_serde_as_hex_string() {
        let id = ProofId([0x42; 32]);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", "42".repeat(32)));

        let back: ProofId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_field_counts() {
        let artifacts = ProofArtifacts::new(b"vk".to_vec(), vec![0; 64], vec![0; 96]);
        assert_eq!(artifacts.public_input_fields().unwrap(), 2);
        assert_eq!(artifacts.proof_fields().unwrap(), 3);
    }

    #[test]
    fn test_misaligned_public_inputs() {
        let artifacts = ProofArtifacts::new(vec![], vec![0; 33], vec![0; 32]);
        assert_eq!(
            artifacts.public_input_fields(),
            Err(ErrorCode::PublicInputsNotFieldAligned(33))
        );
    }

    #[test]
    fn test_vk_does_not_affect_proof_id() {
        let a = ProofArtifacts::new(b"one vk".to_vec(), vec![0; 32], vec![0; 32]);
        let b = ProofArtifacts::new(b"another vk".to_vec(), vec![0; 32], vec![0; 32]);
        assert_eq!(a.proof_id().unwrap(), b.proof_id().unwrap());
    }
}
