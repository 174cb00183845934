//! Vocabulary inventory validator.
//!
//! Verifies the live registry against the vocabulary table (no file I/O):
//! - every type is registered under exactly its declared capabilities
//! - every factory builds a node of the type it was registered for
//! - every capability a candidate asks for has at least one provider
//! - every type declares `id` and `type`

use std::collections::HashSet;

use ldslot::{Candidate, Capability, Node, ID_KEY, TYPE_KEY};
use ldslot_streams::vocabulary::TYPES;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "vocabulary";

/// Validates the vocabulary and its registry.
#[must_use]
pub fn validate() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    check_registrations(&mut report);
    check_capability_providers(&mut report);
    check_core_properties(&mut report);
    report
}

fn check_registrations(report: &mut ConformanceReport) {
    let registry = ldslot_streams::registry();
    let mut problems = Vec::new();

    for ty in TYPES {
        let name = ty.schema.name;
        let registered: Vec<Capability> = registry.capabilities(name).collect();
        if registered != ty.capabilities {
            problems.push(format!(
                "{name}: registered as {registered:?}, declared {:?}",
                ty.capabilities
            ));
        }
        for &capability in ty.capabilities {
            let built = registry.resolve(name, capability).map(|factory| factory());
            match built {
                Some(node) if node.type_name() == name => {}
                Some(node) => problems.push(format!(
                    "{name} as {capability}: factory builds {}",
                    node.type_name()
                )),
                None => problems.push(format!("{name} as {capability}: no factory")),
            }
        }
    }

    if problems.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} types registered under their capabilities", TYPES.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "registry does not match the vocabulary table",
            problems,
        ));
    }
}

fn check_capability_providers(report: &mut ConformanceReport) {
    let provided: HashSet<Capability> = TYPES
        .iter()
        .flat_map(|ty| ty.capabilities.iter().copied())
        .collect();
    let mut orphans = Vec::new();
    for ty in TYPES {
        for decl in ty.schema.properties() {
            for candidate in decl.candidates {
                if let Candidate::Node(capability) = candidate {
                    if !provided.contains(capability) {
                        orphans.push(format!("{}.{}: {capability}", ty.schema.name, decl.name));
                    }
                }
            }
        }
    }

    if orphans.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "every node candidate has a provider",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "node candidates ask for capabilities nothing provides",
            orphans,
        ));
    }
}

fn check_core_properties(report: &mut ConformanceReport) {
    let missing: Vec<String> = TYPES
        .iter()
        .filter(|ty| ty.schema.find(ID_KEY).is_none() || ty.schema.find(TYPE_KEY).is_none())
        .map(|ty| ty.schema.name.to_owned())
        .collect();

    if missing.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "every type declares id and type"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "types without id or type",
            missing,
        ));
    }
}
