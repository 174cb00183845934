//! ldslot conformance suite.
//!
//! Checks the object model against real documents: every fixture must read
//! and write back unchanged, and the vocabulary registry must match the
//! vocabulary table it is built from.
//!
//! # Conformance Scope
//!
//! | Check | Requirement |
//! |-------|-------------|
//! | Fixtures | every `*.json` file is a JSON object |
//! | Round trip | output equals input, ignoring `@context` |
//! | Idempotence | writing twice yields the same output |
//! | Re-read | reading the output yields an equal object |
//! | Vocabulary | registry, capabilities and core properties are consistent |
//!
//! # Entry Point
//!
//! ```no_run
//! use ldslot_conformance::{run_all, SuitePaths};
//! use std::path::PathBuf;
//!
//! let paths = SuitePaths {
//!     fixtures: PathBuf::from("conformance/fixtures"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::PathBuf;

pub use report::{ConformanceReport, Severity, TestResult};

/// Default fixture directory, relative to the workspace root.
pub const DEFAULT_FIXTURES: &str = "conformance/fixtures";

/// Paths required by the conformance runner.
#[derive(Debug, Clone)]
pub struct SuitePaths {
    /// Directory holding the `*.json` fixture documents.
    pub fixtures: PathBuf,
}

impl Default for SuitePaths {
    fn default() -> Self {
        Self {
            fixtures: PathBuf::from(DEFAULT_FIXTURES),
        }
    }
}

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Vocabulary inventory (no file I/O)
/// 2. Fixture discovery and parsing
/// 3. Round trip, idempotence and re-read, per fixture
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(paths: &SuitePaths) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1. Vocabulary inventory
    report.extend(validators::vocabulary::validate());

    // 2. Fixtures
    let fixtures = validators::fixtures::validate(&paths.fixtures)?;
    let usable = fixtures.results.iter().all(|r| !r.is_failure());
    report.extend(fixtures);

    // 3. Round trip
    if usable {
        report.extend(validators::roundtrip::validate(&paths.fixtures)?);
    }

    Ok(report)
}
