//! Fixture discovery.
//!
//! A fixture is any `*.json` file below the fixture directory, visited in
//! path order so reports are stable across runs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "fixtures";

/// One parsed fixture document.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Path relative to the fixture directory.
    pub name: String,
    /// The parsed document.
    pub document: Value,
}

/// Lists the `*.json` files below `dir`, sorted by path.
///
/// # Errors
///
/// Returns an error if the directory cannot be traversed.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to traverse {}", dir.display()))?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|x| x == "json") {
            paths.push(entry.into_path());
        }
    }
    Ok(paths)
}

/// Loads every fixture that parses as JSON. Files that do not parse are
/// skipped here and reported by [`validate`].
///
/// # Errors
///
/// Returns an error if the directory cannot be traversed or a file cannot
/// be read.
pub fn load(dir: &Path) -> Result<Vec<Fixture>> {
    let mut fixtures = Vec::new();
    for path in discover(dir)? {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match serde_json::from_str(&content) {
            Ok(document) => fixtures.push(Fixture {
                name: relative_name(dir, &path),
                document,
            }),
            Err(err) => debug!(path = %path.display(), %err, "skipping unparsable fixture"),
        }
    }
    Ok(fixtures)
}

/// Checks that the fixture directory exists, is non-empty, and that every
/// fixture is a JSON object.
///
/// # Errors
///
/// Returns an error if the directory cannot be traversed or a file cannot
/// be read.
pub fn validate(dir: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !dir.is_dir() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("fixture directory {} not found", dir.display()),
        ));
        return Ok(report);
    }

    let paths = discover(dir)?;
    if paths.is_empty() {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("no *.json fixtures in {}", dir.display()),
        ));
        return Ok(report);
    }

    let mut malformed = Vec::new();
    for path in &paths {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(_)) => {}
            Ok(_) => malformed.push(format!("{}: not a JSON object", relative_name(dir, path))),
            Err(err) => malformed.push(format!("{}: {err}", relative_name(dir, path))),
        }
    }

    if malformed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} fixtures parse as JSON objects", paths.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} of {} fixtures are malformed", malformed.len(), paths.len()),
            malformed,
        ));
    }

    Ok(report)
}

fn relative_name(dir: &Path, path: &Path) -> String {
    path.strip_prefix(dir)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
