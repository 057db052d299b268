//! proofpack CLI.
//!
//! Packs proof artifacts into the length-prefixed wire blob and derives
//! Keccak-256 proof identifiers. Results are printed as JSON on stdout:
//! `{"ok": …}` on success, `{"err": {"code", "name", "message"}}` on
//! failure, with exit code 0/1 to match.

use clap::{Parser, Subcommand};
use proofpack::vectors::{CorpusRunner, TestResult};
use proofpack::{compute_proof_id, pack_proof_blob, ErrorCode, PackResult};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Known-answer corpus shipped with the binary.
const EMBEDDED_CORPUS: &str = include_str!("../vectors/corpus.json");

#[derive(Parser)]
#[command(name = "proofpack")]
#[command(about = "Pack proof artifacts and derive Keccak-256 proof identifiers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack public inputs and proof into the wire blob and print a summary
    Pack {
        /// Public input bytes (N x 32-byte field elements)
        #[arg(long)]
        public_inputs: PathBuf,

        /// Proof bytes (M x 32-byte field elements)
        #[arg(long)]
        proof: PathBuf,

        /// Verification key, echoed in the summary but never hashed
        #[arg(long)]
        vk: Option<PathBuf>,

        /// Write the packed blob to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compute the Keccak-256 digest of a file's contents
    Digest {
        /// File to hash
        path: PathBuf,
    },

    /// Replay the embedded known-answer corpus
    Selftest,
}

fn read_bytes(path: &Path) -> PackResult<Vec<u8>> {
    fs::read(path).map_err(|e| ErrorCode::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn write_bytes(path: &Path, bytes: &[u8]) -> PackResult<()> {
    fs::write(path, bytes).map_err(|e| ErrorCode::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn run_pack(
    public_inputs: &Path,
    proof: &Path,
    vk: Option<&Path>,
    output: Option<&Path>,
) -> PackResult<serde_json::Value> {
    let public_inputs = read_bytes(public_inputs)?;
    let proof = read_bytes(proof)?;
    let vk_bytes = match vk {
        Some(path) => Some(read_bytes(path)?),
        None => None,
    };

    let blob = pack_proof_blob(&public_inputs, &proof)?;
    let proof_id = compute_proof_id(&blob);

    if let Some(path) = output {
        write_bytes(path, &blob)?;
    }

    let mut summary = json!({
        "public_input_bytes": public_inputs.len(),
        "proof_bytes": proof.len(),
        "public_input_fields": public_inputs.len() / 32,
        "proof_fields": proof.len() / 32,
        "total_fields": (public_inputs.len() + proof.len()) / 32,
        "blob_bytes": blob.len(),
        "proof_id": proof_id.to_hex(),
    });
    if let (Some(obj), Some(vk_bytes)) = (summary.as_object_mut(), vk_bytes) {
        obj.insert("vk_bytes".to_string(), json!(vk_bytes.len()));
    }

    Ok(summary)
}

fn run_digest(path: &Path) -> PackResult<serde_json::Value> {
    let data = read_bytes(path)?;
    let digest = proofpack::keccak256(&data);
    Ok(json!({
        "input_bytes": data.len(),
        "digest": hex::encode(digest),
    }))
}

fn run_selftest() -> ExitCode {
    let runner = match CorpusRunner::from_json(EMBEDDED_CORPUS) {
        Ok(r) => r,
        Err(message) => {
            println!("{}", json!({"err": {"code": 100, "name": "InvalidJson", "message": message}}));
            return ExitCode::FAILURE;
        }
    };

    let results = runner.run_all();
    for (id, result) in &results.details {
        if let TestResult::Fail { expected, actual } = result {
            eprintln!("FAIL {}: expected {}, got {}", id, expected, actual);
        }
    }

    println!(
        "{}",
        json!({"ok": {
            "summary": results.summary(),
            "passed": results.passed,
            "failed": results.failed,
            "skipped": results.skipped,
        }})
    );

    if results.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn report(result: PackResult<serde_json::Value>) -> ExitCode {
    match result {
        Ok(ok) => {
            println!("{}", json!({ "ok": ok }));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!(
                "{}",
                json!({"err": {
                    "code": e.code(),
                    "name": e.name(),
                    "message": e.to_string(),
                }})
            );
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            public_inputs,
            proof,
            vk,
            output,
        } => report(run_pack(
            &public_inputs,
            &proof,
            vk.as_deref(),
            output.as_deref(),
        )),
        Commands::Digest { path } => report(run_digest(&path)),
        Commands::Selftest => run_selftest(),
    }
}
