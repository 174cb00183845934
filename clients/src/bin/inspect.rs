//! `ldslot-inspect`: shows how each property of a document was resolved.
//!
//! For every declared property with a value, prints the candidate each
//! element matched (or `unrecognized`), then the language maps and the
//! keys kept verbatim.
//!
//! **Usage:**
//! ```text
//! ldslot-inspect <input>
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ldslot::{Node, Resource, Slot};
use serde_json::Value;

/// Show how a vocabulary document resolves.
#[derive(Parser)]
#[command(name = "ldslot-inspect", about = "Show property resolution for a document")]
struct Args {
    /// Input JSON document.
    input: PathBuf,

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
    let node = ldslot_streams::from_document(&input)
        .with_context(|| format!("Failed to deserialize {}", args.input.display()))?;

    let Some(resource) = node.as_any().downcast_ref::<Resource>() else {
        bail!("{} is not a schema-driven object", node.type_name());
    };
    print_resource(resource, 0);
    Ok(())
}

fn print_resource(resource: &Resource, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}{} ({})", resource.schema().name, resource.types().join(", "));

    for decl in resource.schema().properties() {
        let Some(values) = resource.property(decl.name) else {
            continue;
        };
        for (index, slot) in values.slots().iter().enumerate() {
            let label = match slot.candidate() {
                Some(candidate) => candidate.to_string(),
                None => "unrecognized".to_owned(),
            };
            println!("{indent}  {}[{index}]: {label}", decl.name);
            if let Some(nested) = nested_resource(slot) {
                print_resource(nested, depth + 2);
            }
        }
        if let Some(map) = resource.language_map(decl.name) {
            let languages: Vec<&str> = map.languages().into_iter().collect();
            println!("{indent}  {}Map: [{}]", decl.name, languages.join(", "));
        }
    }

    for key in resource.vault().keys() {
        println!("{indent}  {key}: verbatim");
    }
}

fn nested_resource(slot: &Slot) -> Option<&Resource> {
    slot.as_node()?.as_any().downcast_ref::<Resource>()
}
