//! Known-answer vector corpus.
//!
//! Loads digest and packing vectors from JSON and replays them against the
//! implementation. The embedded corpus backs the CLI `selftest` command and
//! the integration tests; external corpora can be loaded from disk.

use crate::artifact::{compute_proof_id, pack_proof_blob};
use crate::keccak::keccak256;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A corpus of test vectors.
#[derive(Debug, Deserialize)]
pub struct Corpus {
    /// Corpus format version.
    pub version: String,
    /// The vectors to replay.
    pub vectors: Vec<TestVector>,
}

/// A single test vector: one operation, hex-encoded inputs, an expected
/// outcome.
#[derive(Debug, Deserialize)]
pub struct TestVector {
    /// Unique identifier for the vector.
    pub id: String,
    /// Operation to exercise ("keccak256", "pack_blob", "proof_id").
    pub op: String,
    /// Input parameters for the operation.
    pub input: serde_json::Value,
    /// Expected result: `{"ok": …}` or `{"err": {"code": …}}`.
    pub expected: serde_json::Value,
}

/// Result of replaying a single vector.
#[derive(Debug)]
pub enum TestResult {
    /// Output matched the recorded expectation.
    Pass,
    /// Output differed from the recorded expectation.
    Fail {
        /// Expected value from the corpus.
        expected: String,
        /// Actual value produced.
        actual: String,
    },
    /// Vector could not be run (unknown op, malformed entry).
    Skip {
        /// Reason for skipping.
        reason: String,
    },
}

impl TestResult {
    /// Returns true if this is a passing result.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }
}

/// Accumulated results from replaying a corpus.
#[derive(Debug, Default)]
pub struct CorpusResults {
    /// Number of vectors that passed.
    pub passed: usize,
    /// Number of vectors that failed.
    pub failed: usize,
    /// Number of vectors that were skipped.
    pub skipped: usize,
    /// Per-vector results.
    pub details: Vec<(String, TestResult)>,
}

impl CorpusResults {
    /// Record one result.
    pub fn record(&mut self, id: &str, result: TestResult) {
        match &result {
            TestResult::Pass => self.passed += 1,
            TestResult::Fail { .. } => self.failed += 1,
            TestResult::Skip { .. } => self.skipped += 1,
        }
        self.details.push((id.to_string(), result));
    }

    /// Total vectors replayed.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// True when nothing failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed, {} skipped (total: {})",
            self.passed,
            self.failed,
            self.skipped,
            self.total()
        )
    }

    /// Failures only.
    pub fn failures(&self) -> Vec<&(String, TestResult)> {
        self.details
            .iter()
            .filter(|(_, r)| matches!(r, TestResult::Fail { .. }))
            .collect()
    }
}

/// Replays a corpus against the implementation.
pub struct CorpusRunner {
    corpus: Corpus,
}

impl CorpusRunner {
    /// Load a corpus from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("failed to read corpus file: {}", e))?;
        Self::from_json(&content)
    }

    /// Parse a corpus from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, String> {
        let corpus: Corpus = serde_json::from_str(content)
            .map_err(|e| format!("failed to parse corpus JSON: {}", e))?;
        Ok(Self { corpus })
    }

    /// Number of vectors in the corpus.
    pub fn vector_count(&self) -> usize {
        self.corpus.vectors.len()
    }

    /// Replay every vector.
    pub fn run_all(&self) -> CorpusResults {
        let mut results = CorpusResults::default();
        for vector in &self.corpus.vectors {
            results.record(&vector.id, run_vector(vector));
        }
        results
    }
}

fn run_vector(vector: &TestVector) -> TestResult {
    match vector.op.as_str() {
        "keccak256" => run_keccak256(vector),
        "pack_blob" => run_pack_blob(vector),
        "proof_id" => run_proof_id(vector),
        other => TestResult::Skip {
            reason: format!("unknown operation: {}", other),
        },
    }
}

fn hex_field(value: &serde_json::Value, key: &str) -> Result<Vec<u8>, String> {
    let hex_str = value
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing '{}' in input", key))?;
    hex::decode(hex_str).map_err(|e| format!("invalid hex in '{}': {}", key, e))
}

fn check_hex_output(expected: &serde_json::Value, key: &str, actual_hex: String) -> TestResult {
    let Some(ok) = expected.get("ok") else {
        return TestResult::Skip {
            reason: "missing 'ok' in expected".to_string(),
        };
    };
    let expected_hex = ok
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_lowercase();
    if actual_hex == expected_hex {
        TestResult::Pass
    } else {
        TestResult::Fail {
            expected: expected_hex,
            actual: actual_hex,
        }
    }
}

fn run_keccak256(vector: &TestVector) -> TestResult {
    let message = match hex_field(&vector.input, "message") {
        Ok(m) => m,
        Err(reason) => return TestResult::Skip { reason },
    };
    let digest = hex::encode(keccak256(&message));
    check_hex_output(&vector.expected, "digest", digest)
}

fn run_pack_blob(vector: &TestVector) -> TestResult {
    let public_inputs = match hex_field(&vector.input, "public_inputs") {
        Ok(b) => b,
        Err(reason) => return TestResult::Skip { reason },
    };
    let proof = match hex_field(&vector.input, "proof") {
        Ok(b) => b,
        Err(reason) => return TestResult::Skip { reason },
    };

    let result = pack_proof_blob(&public_inputs, &proof);

    if let Some(err) = vector.expected.get("err") {
        let expected_code = err.get("code").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        return match result {
            Ok(blob) => TestResult::Fail {
                expected: format!("err code {}", expected_code),
                actual: format!("ok blob of {} bytes", blob.len()),
            },
            Err(e) if e.code() == expected_code => TestResult::Pass,
            Err(e) => TestResult::Fail {
                expected: format!("err code {}", expected_code),
                actual: format!("err code {}", e.code()),
            },
        };
    }

    match result {
        Ok(blob) => check_hex_output(&vector.expected, "blob", hex::encode(blob)),
        Err(e) => TestResult::Fail {
            expected: "ok".to_string(),
            actual: format!("err code {}", e.code()),
        },
    }
}

fn run_proof_id(vector: &TestVector) -> TestResult {
    let public_inputs = match hex_field(&vector.input, "public_inputs") {
        Ok(b) => b,
        Err(reason) => return TestResult::Skip { reason },
    };
    let proof = match hex_field(&vector.input, "proof") {
        Ok(b) => b,
        Err(reason) => return TestResult::Skip { reason },
    };

    match pack_proof_blob(&public_inputs, &proof) {
        Ok(blob) => {
            let id = compute_proof_id(&blob);
            check_hex_output(&vector.expected, "id", id.to_hex())
        }
        Err(e) => TestResult::Fail {
            expected: "ok".to_string(),
            actual: format!("err code {}", e.code()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_accounting() {
        let mut results = CorpusResults::default();
        results.record("a", TestResult::Pass);
        results.record(
            "b",
            TestResult::Fail {
                expected: "x".to_string(),
                actual: "y".to_string(),
            },
        );
        results.record(
            "c",
            TestResult::Skip {
                reason: "unknown operation: nope".to_string(),
            },
        );

        assert_eq!(results.passed, 1);
        assert_eq!(results.failed, 1);
        assert_eq!(results.skipped, 1);
        assert_eq!(results.total(), 3);
        assert!(!results.all_passed());
        assert_eq!(results.failures().len(), 1);
    }

    #[test]
    fn test_inline_corpus_roundtrip() {
        let corpus = r#"{
            "version": "1",
            "vectors": [
                {
                    "id": "keccak_empty",
                    "op": "keccak256",
                    "input": {"message": ""},
                    "expected": {"ok": {"digest": "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"}}
                },
                {
                    "id": "pack_misaligned",
                    "op": "pack_blob",
                    "input": {"public_inputs": "00", "proof": ""},
                    "expected": {"err": {"code": 300}}
                }
            ]
        }"#;

        let runner = CorpusRunner::from_json(corpus).unwrap();
        assert_eq!(runner.vector_count(), 2);

        let results = runner.run_all();
        assert!(results.all_passed(), "{}", results.summary());
    }
}
