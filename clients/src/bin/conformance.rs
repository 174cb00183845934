//! `ldslot-conformance`: runs the ldslot conformance suite.
//!
//! Checks the vocabulary registry, then reads and re-writes every fixture
//! document below the fixture directory.
//!
//! **Usage:**
//! ```text
//! ldslot-conformance [--fixtures <path>] [--verbose]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use ldslot_conformance::{run_all, Severity, SuitePaths, DEFAULT_FIXTURES};

/// Run the ldslot conformance suite.
#[derive(Parser)]
#[command(
    name = "ldslot-conformance",
    about = "Check that vocabulary documents survive a read/write cycle unchanged"
)]
struct Args {
    /// Directory holding the `*.json` fixture documents.
    #[arg(long, default_value = DEFAULT_FIXTURES)]
    fixtures: PathBuf,

    /// Log resolution decisions to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ldslot_clients::init_tracing(args.verbose);

    let report = run_all(&SuitePaths {
        fixtures: args.fixtures,
    })?;

    println!("ldslot Conformance Report");
    println!("=========================");
    println!();

    for result in &report.results {
        println!("{result}");
    }

    let passed = report.count(Severity::Pass);
    let warned = report.count(Severity::Warning);
    let failed = report.failure_count();

    println!();
    println!("Summary: {passed} passed, {warned} warnings, {failed} failed");

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
