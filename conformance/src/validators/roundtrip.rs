//! Round-trip validator.
//!
//! For every fixture document:
//! - reading and re-writing it reproduces the document (`@context` aside)
//! - writing it a second time changes nothing
//! - reading the written document yields an equal object

use std::path::Path;

use anyhow::Result;
use ldslot::{Node, CONTEXT_KEY};
use serde_json::{Map, Value};
use tracing::debug;

use crate::report::{ConformanceReport, TestResult};
use crate::validators::fixtures::{self, Fixture};

const VALIDATOR: &str = "roundtrip";

/// Runs the round-trip checks over every fixture below `dir`.
///
/// # Errors
///
/// Returns an error if fixtures cannot be read.
pub fn validate(dir: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for fixture in fixtures::load(dir)? {
        report.push(check(&fixture));
    }
    Ok(report)
}

/// Runs the round-trip checks over one fixture.
#[must_use]
pub fn check(fixture: &Fixture) -> TestResult {
    let name = &fixture.name;
    debug!(fixture = %name, "checking round trip");

    let mut node = match ldslot_streams::from_document(&fixture.document) {
        Ok(node) => node,
        Err(err) => {
            return TestResult::fail(
                VALIDATOR,
                format!("{name}: does not deserialize: {:#}", anyhow::Error::new(err)),
            )
        }
    };

    let first = match ldslot_streams::to_document(node.as_mut()) {
        Ok(value) => value,
        Err(err) => {
            return TestResult::fail(
                VALIDATOR,
                format!("{name}: does not serialize: {:#}", anyhow::Error::new(err)),
            )
        }
    };

    let differences = diff(&without_context(&fixture.document), &without_context(&first));
    if !differences.is_empty() {
        return TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: output differs from input"),
            differences,
        );
    }

    match ldslot_streams::to_document(node.as_mut()) {
        Ok(second) if second == first => {}
        Ok(_) => {
            return TestResult::fail(
                VALIDATOR,
                format!("{name}: second serialization differs from the first"),
            )
        }
        Err(err) => {
            return TestResult::fail(
                VALIDATOR,
                format!("{name}: second serialization failed: {:#}", anyhow::Error::new(err)),
            )
        }
    }

    match ldslot_streams::from_document(&first) {
        Ok(reread) if reread.eq_node(node.as_ref()) => {
            TestResult::pass(VALIDATOR, format!("{name} round-trips"))
        }
        Ok(_) => TestResult::fail(
            VALIDATOR,
            format!("{name}: re-reading the output yields a different object"),
        ),
        Err(err) => TestResult::fail(
            VALIDATOR,
            format!("{name}: output does not deserialize: {:#}", anyhow::Error::new(err)),
        ),
    }
}

fn without_context(document: &Value) -> Value {
    match document {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| key.as_str() != CONTEXT_KEY)
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect::<Map<_, _>>(),
        ),
        other => other.clone(),
    }
}

/// Lists the top-level keys whose values differ between `expected` and `actual`.
fn diff(expected: &Value, actual: &Value) -> Vec<String> {
    let (Value::Object(expected), Value::Object(actual)) = (expected, actual) else {
        return if expected == actual {
            Vec::new()
        } else {
            vec![format!("expected {expected}, found {actual}")]
        };
    };
    let mut differences = Vec::new();
    for (key, want) in expected {
        match actual.get(key) {
            None => differences.push(format!("key `{key}` missing from output")),
            Some(got) if got != want => {
                differences.push(format!("key `{key}`: expected {want}, found {got}"));
            }
            Some(_) => {}
        }
    }
    for key in actual.keys().filter(|key| !expected.contains_key(*key)) {
        differences.push(format!("key `{key}` added to output"));
    }
    differences
}
