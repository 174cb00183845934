//! The property slot: one occurrence of a property value, resolved into
//! exactly one of the property's declared candidate kinds.
//!
//! Resolution order:
//!
//! 1. If the value is a mapping carrying `type`/`@type`, collect its type names.
//! 2. Try each capability-typed candidate in declared order against the
//!    registry; the first hit is deserialized as a nested node.
//! 3. Otherwise try each literal and reference candidate in declared order;
//!    the first parser that succeeds wins.
//! 4. Otherwise keep the value verbatim as [`Slot::Unrecognized`].
//!
//! A nested node that fails to deserialize is a hard error. A literal parser
//! that fails only moves on to the next candidate.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::iri::Iri;
use crate::literal::{LangString, Literal, XsdDuration};
use crate::node::Node;
use crate::registry::Registry;
use crate::schema::{Candidate, Capability};
use crate::TYPE_KEYS;

/// One resolved property value.
#[derive(Debug, Clone)]
pub enum Slot {
    /// An embedded node matched through the registry.
    Node {
        /// Capability the node was resolved as.
        capability: Capability,
        /// The nested node.
        node: Box<dyn Node>,
    },
    /// A primitive value.
    Literal(Literal),
    /// A bare IRI reference.
    Reference(Iri),
    /// A value no declared candidate accepted, kept verbatim.
    Unrecognized(Value),
}

impl Slot {
    /// Resolves `value` against the ordered `candidates` of `property`.
    ///
    /// Resolution is deterministic: the same input and candidate order always
    /// populate the same candidate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NestedDeserialize`] if a capability-typed candidate
    /// matched by type name but its node rejected the value.
    pub fn resolve(
        property: &str,
        value: &Value,
        candidates: &[Candidate],
        registry: &Registry,
    ) -> Result<Self> {
        if let Value::Object(map) = value {
            if let Some(slot) = resolve_node(property, map, candidates, registry)? {
                return Ok(slot);
            }
        }

        for candidate in candidates {
            let slot = match *candidate {
                Candidate::Node(_) => None,
                Candidate::Literal(kind) => Literal::parse(kind, value).map(Slot::Literal),
                Candidate::Reference => Iri::from_value(value).map(Slot::Reference),
            };
            if let Some(slot) = slot {
                trace!(property, %candidate, "resolved slot");
                return Ok(slot);
            }
        }

        debug!(
            property,
            found = crate::error::value_kind(value),
            "no candidate matched; keeping value verbatim"
        );
        Ok(Slot::Unrecognized(value.clone()))
    }

    /// Produces the slot's value representation.
    ///
    /// # Errors
    ///
    /// Propagates a nested node's or a literal's serialization failure.
    pub fn to_value(&mut self) -> Result<Value> {
        match self {
            Slot::Node { node, .. } => node.serialize(),
            Slot::Literal(literal) => literal.to_value(),
            Slot::Reference(iri) => Ok(iri.to_value()),
            Slot::Unrecognized(value) => Ok(value.clone()),
        }
    }

    /// Returns the candidate kind this slot populated, or `None` if unrecognized.
    #[must_use]
    pub fn candidate(&self) -> Option<Candidate> {
        match self {
            Slot::Node { capability, .. } => Some(Candidate::Node(*capability)),
            Slot::Literal(literal) => Some(Candidate::Literal(literal.kind())),
            Slot::Reference(_) => Some(Candidate::Reference),
            Slot::Unrecognized(_) => None,
        }
    }

    /// Returns the position of the populated candidate within `candidates`.
    #[must_use]
    pub fn kind_index(&self, candidates: &[Candidate]) -> Option<usize> {
        let candidate = self.candidate()?;
        candidates.iter().position(|c| *c == candidate)
    }

    /// Returns true if the slot populated `candidate`.
    #[must_use]
    pub fn is(&self, candidate: Candidate) -> bool {
        self.candidate() == Some(candidate)
    }

    /// Returns true if no candidate accepted the value.
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Slot::Unrecognized(_))
    }

    /// Returns the nested node, whatever its capability.
    #[must_use]
    pub fn as_node(&self) -> Option<&(dyn Node + 'static)> {
        match self {
            Slot::Node { node, .. } => Some(node.as_ref()),
            _ => None,
        }
    }

    /// Returns the nested node mutably.
    #[must_use]
    pub fn as_node_mut(&mut self) -> Option<&mut (dyn Node + 'static)> {
        match self {
            Slot::Node { node, .. } => Some(node.as_mut()),
            _ => None,
        }
    }

    /// Returns the nested node if it was resolved as `capability`.
    #[must_use]
    pub fn as_node_of(&self, capability: Capability) -> Option<&(dyn Node + 'static)> {
        match self {
            Slot::Node { capability: c, node } if *c == capability => Some(node.as_ref()),
            _ => None,
        }
    }

    /// Returns the literal, whatever its kind.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Slot::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns the IRI reference.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Slot::Reference(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the `xsd:string` value.
    #[must_use]
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Slot::Literal(Literal::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the `rdf:langString` value.
    #[must_use]
    pub fn as_lang_string(&self) -> Option<&LangString> {
        match self {
            Slot::Literal(Literal::LangString(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the `xsd:dateTime` value.
    #[must_use]
    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Slot::Literal(Literal::DateTime(dt)) => Some(dt),
            _ => None,
        }
    }

    /// Returns the `xsd:duration` value.
    #[must_use]
    pub fn as_duration(&self) -> Option<&XsdDuration> {
        match self {
            Slot::Literal(Literal::Duration(d)) => Some(d),
            _ => None,
        }
    }

    /// Returns the `xsd:float` value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Slot::Literal(Literal::Float(f)) => Some(*f),
            _ => None,
        }
    }

    /// Returns the `xsd:nonNegativeInteger` value.
    #[must_use]
    pub fn as_non_negative_integer(&self) -> Option<u64> {
        match self {
            Slot::Literal(Literal::NonNegativeInteger(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the `xsd:boolean` value.
    #[must_use]
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Slot::Literal(Literal::Boolean(b)) => Some(*b),
            _ => None,
        }
    }

    /// Returns the `rfc:bcp47` value.
    #[must_use]
    pub fn as_language_tag(&self) -> Option<&str> {
        match self {
            Slot::Literal(Literal::LanguageTag(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the `rfc:rfc2045` value.
    #[must_use]
    pub fn as_media_type(&self) -> Option<&str> {
        match self {
            Slot::Literal(Literal::MediaType(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the verbatim value of an unrecognized slot.
    #[must_use]
    pub fn as_unrecognized(&self) -> Option<&Value> {
        match self {
            Slot::Unrecognized(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if the slot holds `text` as a string literal or a
    /// reference.
    #[must_use]
    pub fn names(&self, text: &str) -> bool {
        match self {
            Slot::Literal(Literal::String(s)) => s == text,
            Slot::Reference(iri) => iri.as_str() == text,
            _ => false,
        }
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Slot::Node { capability: a, node: x },
                Slot::Node { capability: b, node: y },
            ) => a == b && x.eq_node(y.as_ref()),
            (Slot::Literal(a), Slot::Literal(b)) => a == b,
            (Slot::Reference(a), Slot::Reference(b)) => a == b,
            (Slot::Unrecognized(a), Slot::Unrecognized(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Literal> for Slot {
    fn from(value: Literal) -> Self {
        Slot::Literal(value)
    }
}

impl From<Iri> for Slot {
    fn from(value: Iri) -> Self {
        Slot::Reference(value)
    }
}

/// Collects the type names a mapping declares under `type` or `@type`.
#[must_use]
pub fn type_names(map: &Map<String, Value>) -> Vec<&str> {
    TYPE_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .flat_map(|value| match value {
            Value::String(name) => vec![name.as_str()],
            Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        })
        .collect()
}

fn resolve_node(
    property: &str,
    map: &Map<String, Value>,
    candidates: &[Candidate],
    registry: &Registry,
) -> Result<Option<Slot>> {
    let names = type_names(map);
    if names.is_empty() {
        return Ok(None);
    }
    for candidate in candidates {
        let Candidate::Node(capability) = *candidate else {
            continue;
        };
        let Some((type_name, factory)) = registry.resolve_any(names.iter().copied(), capability) else {
            continue;
        };
        let mut node = factory();
        node.deserialize(map, registry)
            .map_err(|source| Error::NestedDeserialize {
                property: property.to_owned(),
                type_name: type_name.to_owned(),
                source: Box::new(source),
            })?;
        trace!(property, type_name, %capability, "resolved nested node");
        return Ok(Some(Slot::Node { capability, node }));
    }
    Ok(None)
}
