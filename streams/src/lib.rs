//! ActivityStreams 2.0 vocabulary for the `ldslot` object model.
//!
//! The vocabulary is pure data: [`vocabulary::TYPES`] lists every type's
//! [`TypeSchema`](ldslot::TypeSchema) and the capabilities it provides. The
//! generic [`Resource`](ldslot::Resource) does the rest.
//!
//! # Reading a document
//!
//! ```
//! use ldslot::Resource;
//!
//! let doc = serde_json::json!({
//!     "@context": "https://www.w3.org/ns/activitystreams",
//!     "type": "Like",
//!     "actor": "https://example.com/alice",
//!     "object": {"type": "Note", "content": "Hello"}
//! });
//! let mut like = ldslot_streams::from_document(&doc).unwrap();
//! let resource = like.downcast_ref::<Resource>().unwrap();
//! assert_eq!(resource.non_functional("actor").map(|a| a.len()), Some(1));
//! assert_eq!(ldslot_streams::to_document(like.as_mut()).unwrap(), doc);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod capabilities;
pub mod error;
pub mod vocabulary;

use std::sync::OnceLock;

use ldslot::{Node, Registry, Resource, CONTEXT_KEY};
use serde_json::Value;
use tracing::warn;

pub use error::{Error, Result};

/// The ActivityStreams JSON-LD context IRI.
pub const ACTIVITYSTREAMS_CONTEXT: &str = "https://www.w3.org/ns/activitystreams";

/// Returns the registry holding every vocabulary type under each of its
/// capabilities. Built on first use; read-only afterwards.
#[must_use]
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        for ty in vocabulary::TYPES {
            let schema = ty.schema;
            for &capability in ty.capabilities {
                let factory = move || -> Box<dyn Node> { Box::new(Resource::new(schema)) };
                if let Err(err) = registry.register(schema.name, capability, factory) {
                    warn!(%err, "skipping vocabulary registration");
                }
            }
        }
        registry
    })
}

/// Creates an empty object of the named type.
#[must_use]
pub fn new_object(type_name: &str) -> Option<Box<dyn Node>> {
    let registry = registry();
    let capability = registry.capabilities(type_name).next()?;
    registry.resolve(type_name, capability).map(|factory| factory())
}

/// Reads a top-level document into the object its `type` names.
///
/// When `type` lists several names the first registered one is used; the
/// others are kept in the declared-types list. `@context` is ignored.
///
/// # Errors
///
/// Returns [`Error::MissingType`] if the document has no type name,
/// [`Error::UnknownType`] if none of its names is registered, and otherwise
/// propagates the object's deserialization failure.
pub fn from_document(document: &Value) -> Result<Box<dyn Node>> {
    let map = document.as_object().ok_or(ldslot::Error::NotAMapping {
        found: ldslot::error::value_kind(document),
    })?;
    let names = ldslot::slot::type_names(map);
    if names.is_empty() {
        return Err(Error::MissingType);
    }
    let mut node = names
        .iter()
        .find_map(|name| new_object(name))
        .ok_or_else(|| Error::UnknownType {
            names: names.iter().map(|n| (*n).to_owned()).collect(),
        })?;
    node.deserialize(map, registry())?;
    Ok(node)
}

/// Serializes `node` as a top-level document carrying the ActivityStreams
/// `@context`.
///
/// # Errors
///
/// Propagates the node's serialization failure.
pub fn to_document(node: &mut dyn Node) -> Result<Value> {
    let mut value = node.serialize()?;
    if let Value::Object(map) = &mut value {
        map.entry(CONTEXT_KEY)
            .or_insert_with(|| Value::String(ACTIVITYSTREAMS_CONTEXT.to_owned()));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::{ACTIVITY, IMAGE, LINK, OBJECT};

    #[test]
    fn every_type_is_registered() {
        let registry = registry();
        assert_eq!(registry.len(), vocabulary::TYPES.len());
        for ty in vocabulary::TYPES {
            let registered: Vec<_> = registry.capabilities(ty.schema.name).collect();
            assert_eq!(registered, ty.capabilities, "{}", ty.schema.name);
        }
    }

    #[test]
    fn capabilities_narrow_lookups() {
        let registry = registry();
        assert!(registry.resolve("Image", IMAGE).is_some());
        assert!(registry.resolve("Image", OBJECT).is_some());
        assert!(registry.resolve("Note", IMAGE).is_none());
        assert!(registry.resolve("Mention", LINK).is_some());
        assert!(registry.resolve("Mention", OBJECT).is_none());
        assert!(registry.resolve("Follow", ACTIVITY).is_some());
    }

    #[test]
    fn new_object_builds_the_named_type() {
        let note = new_object("Note");
        assert_eq!(note.as_ref().map(|n| n.type_name()), Some("Note"));
        assert!(new_object("Unicorn").is_none());
    }

    #[test]
    fn documents_need_a_registered_type() {
        let missing = from_document(&serde_json::json!({"content": "x"}));
        assert!(matches!(missing, Err(Error::MissingType)));
        let unknown = from_document(&serde_json::json!({"type": ["Unicorn"]}));
        assert!(matches!(unknown, Err(Error::UnknownType { ref names }) if names == &["Unicorn"]));
        let scalar = from_document(&serde_json::json!(42));
        assert!(matches!(
            scalar,
            Err(Error::Model(ldslot::Error::NotAMapping { .. }))
        ));
    }

    #[test]
    fn first_registered_name_wins() {
        let node = from_document(&serde_json::json!({"type": ["Unicorn", "Note", "Article"]}));
        assert_eq!(node.ok().map(|n| n.type_name().to_owned()).as_deref(), Some("Note"));
    }
}
