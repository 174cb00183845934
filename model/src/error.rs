//! Error type shared by every component of the object model.

use serde_json::Value;
use thiserror::Error;

use crate::schema::{Capability, LiteralKind};

/// Errors raised while resolving, building, or emitting vocabulary objects.
///
/// A value that no candidate accepts is *not* an error: it is kept as an
/// unrecognized slot. Only structural failures surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// A candidate matched by type name, but the nested node rejected the value.
    #[error("property `{property}`: nested `{type_name}` failed to deserialize")]
    NestedDeserialize {
        /// Property whose value held the nested node.
        property: String,
        /// Type name the registry resolved.
        type_name: String,
        /// The nested failure.
        #[source]
        source: Box<Error>,
    },
    /// A populated candidate failed to produce its value.
    #[error("property `{property}` failed to serialize")]
    Serialize {
        /// Property being emitted.
        property: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },
    /// A float literal holds NaN or an infinity, which the value tree cannot carry.
    #[error("{value} is not a finite number")]
    NonFiniteNumber {
        /// The offending value.
        value: f64,
    },
    /// A node was asked to deserialize something other than a mapping.
    #[error("expected a mapping, found {found}")]
    NotAMapping {
        /// Shape of the value actually supplied.
        found: &'static str,
    },
    /// A `<property>Map` key held something other than a tag → string mapping.
    #[error("`{property}Map` is not a language map: {reason}")]
    InvalidLanguageMap {
        /// Property owning the map.
        property: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// Text handed to a literal constructor does not parse as that kind.
    #[error("{input:?} is not a valid {kind}")]
    InvalidLiteral {
        /// Kind the input was parsed as.
        kind: LiteralKind,
        /// The rejected input.
        input: String,
    },
    /// Text handed to a reference constructor is not an absolute IRI.
    #[error("{input:?} is not an absolute IRI")]
    InvalidIri {
        /// The rejected input.
        input: String,
    },
    /// The same type name was registered twice for one capability.
    #[error("type `{type_name}` is already registered with capability {capability}")]
    DuplicateRegistration {
        /// Type name being registered.
        type_name: String,
        /// Capability it was already registered with.
        capability: Capability,
    },
    /// A positional operation addressed an element past the end.
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Current length.
        len: usize,
    },
    /// Failure reported by an external node implementation.
    #[error("{0}")]
    Custom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Names the JSON shape of a value, for error messages.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
