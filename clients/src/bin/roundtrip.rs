//! `ldslot-roundtrip`: reads one vocabulary document and writes it back.
//!
//! The output is what the object model produces for the input: resolved
//! properties in declaration order, language maps, then every key the
//! vocabulary does not declare.
//!
//! **Usage:**
//! ```text
//! ldslot-roundtrip <input> [--out <path>] [--no-context] [--check]
//! ```
//!
//! With `--check`, exits non-zero if the output differs from the input
//! (`@context` aside).

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use ldslot::CONTEXT_KEY;
use serde_json::Value;
use tracing::info;

/// Read a vocabulary document and write it back.
#[derive(Parser)]
#[command(name = "ldslot-roundtrip", about = "Round-trip a vocabulary document")]
struct Args {
    /// Input JSON document.
    input: PathBuf,

    /// Output file (default: stdout).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Omit `@context` from the output.
    #[arg(long)]
    no_context: bool,

    /// Fail if the output differs from the input.
    #[arg(long)]
    check: bool,

    /// Log resolution decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ldslot_clients::init_tracing(args.verbose);

    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let input: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", args.input.display()))?;

    let mut node = ldslot_streams::from_document(&input)
        .with_context(|| format!("Failed to deserialize {}", args.input.display()))?;
    info!(type_name = node.type_name(), "deserialized document");

    let mut output = ldslot_streams::to_document(node.as_mut()).context("Failed to serialize")?;
    if args.no_context {
        if let Value::Object(map) = &mut output {
            map.remove(CONTEXT_KEY);
        }
    }

    let text = serde_json::to_string_pretty(&output).context("Failed to format output")?;
    match &args.out {
        Some(path) => {
            fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("  Written: {}", path.display());
        }
        None => println!("{text}"),
    }

    if args.check && strip_context(input) != strip_context(output) {
        eprintln!("Round trip FAILED: output differs from {}", args.input.display());
        process::exit(1);
    }
    Ok(())
}

fn strip_context(mut document: Value) -> Value {
    if let Value::Object(map) = &mut document {
        map.remove(CONTEXT_KEY);
    }
    document
}
