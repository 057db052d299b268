//! Corpus replay tests.
//!
//! Loads vectors/corpus.json and verifies every recorded vector against the
//! implementation.

use proofpack::vectors::{CorpusRunner, TestResult};
use std::path::Path;

/// Path to the corpus file relative to the project root.
const CORPUS_PATH: &str = "vectors/corpus.json";

fn load_runner() -> CorpusRunner {
    let corpus_path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CORPUS_PATH);
    CorpusRunner::load(&corpus_path).expect("Failed to load corpus")
}

#[test]
fn test_full_corpus() {
    let runner = load_runner();
    println!("Loaded corpus with {} vectors", runner.vector_count());

    let results = runner.run_all();
    println!("{}", results.summary());

    for (id, result) in results.failures() {
        if let TestResult::Fail { expected, actual } = result {
            println!("  {} - expected: {}, actual: {}", id, expected, actual);
        }
    }

    assert!(
        results.all_passed(),
        "Corpus replay failed: {}",
        results.summary()
    );
}

#[test]
fn test_corpus_has_no_skipped_vectors() {
    // Every shipped vector must use a known operation and well-formed inputs.
    let results = load_runner().run_all();
    assert_eq!(results.skipped, 0, "{}", results.summary());
}

#[test]
fn test_corpus_covers_every_operation() {
    let runner = load_runner();
    let results = runner.run_all();

    for prefix in ["keccak_", "pack_", "proof_id_"] {
        let count = results
            .details
            .iter()
            .filter(|(id, _)| id.starts_with(prefix))
            .count();
        assert!(count > 0, "no corpus vectors with prefix '{}'", prefix);
    }
}

#[test]
fn test_corpus_includes_negative_cases() {
    let runner = load_runner();
    let results = runner.run_all();

    let negatives: Vec<_> = results
        .details
        .iter()
        .filter(|(id, _)| id.contains("misaligned"))
        .collect();

    assert!(!negatives.is_empty(), "corpus has no rejection vectors");
    for (id, result) in &negatives {
        assert!(result.is_pass(), "negative vector {} did not pass", id);
    }
}
