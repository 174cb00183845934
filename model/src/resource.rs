//! The schema-driven vocabulary object.
//!
//! A [`Resource`] is one generic implementation of [`Node`] parameterized by
//! a static [`TypeSchema`]: every declared property gets a [`Cardinality`]
//! wrapper (plus a [`LanguageMap`] when the declaration allows one), and any
//! undeclared key lands in the [`Vault`].

use std::any::Any;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::cardinality::{Cardinality, Functional, NonFunctional};
use crate::error::{value_kind, Error, Result};
use crate::iri::Iri;
use crate::langmap::LanguageMap;
use crate::literal::Literal;
use crate::node::Node;
use crate::registry::Registry;
use crate::schema::{PropertyDecl, TypeSchema};
use crate::slot::Slot;
use crate::vault::Vault;
use crate::{CONTEXT_KEY, KEYWORD_TYPE_KEY, TYPE_KEY};

/// State of one declared property.
#[derive(Debug, Clone, PartialEq)]
struct PropertyState {
    values: Cardinality,
    language_map: Option<LanguageMap>,
}

impl PropertyState {
    fn empty(decl: &PropertyDecl) -> Self {
        Self {
            values: Cardinality::empty_for(decl),
            language_map: None,
        }
    }
}

/// A vocabulary object whose shape is fixed by a [`TypeSchema`].
#[derive(Debug, Clone)]
pub struct Resource {
    schema: &'static TypeSchema,
    properties: Vec<PropertyState>,
    vault: Vault,
}

impl Resource {
    /// Creates an empty object of the given type.
    #[must_use]
    pub fn new(schema: &'static TypeSchema) -> Self {
        Self {
            schema,
            properties: schema.properties().map(PropertyState::empty).collect(),
            vault: Vault::new(),
        }
    }

    /// Creates an object of the given type and deserializes `map` into it.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of [`Node::deserialize`].
    pub fn from_map(
        schema: &'static TypeSchema,
        map: &Map<String, Value>,
        registry: &Registry,
    ) -> Result<Self> {
        let mut resource = Self::new(schema);
        resource.deserialize(map, registry)?;
        Ok(resource)
    }

    /// Like [`Resource::from_map`], for an arbitrary value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotAMapping`] if `value` is not a mapping, and
    /// otherwise propagates the first failure of [`Node::deserialize`].
    pub fn from_value(
        schema: &'static TypeSchema,
        value: &Value,
        registry: &Registry,
    ) -> Result<Self> {
        let map = value.as_object().ok_or(Error::NotAMapping {
            found: value_kind(value),
        })?;
        Self::from_map(schema, map, registry)
    }

    /// Returns the type declaration.
    #[must_use]
    pub fn schema(&self) -> &'static TypeSchema {
        self.schema
    }

    /// Returns the values of a declared property.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Cardinality> {
        let index = self.schema.position(name)?;
        self.properties.get(index).map(|p| &p.values)
    }

    /// Returns the values of a declared property mutably.
    #[must_use]
    pub fn property_mut(&mut self, name: &str) -> Option<&mut Cardinality> {
        let index = self.schema.position(name)?;
        self.properties.get_mut(index).map(|p| &mut p.values)
    }

    /// Returns a declared functional property.
    #[must_use]
    pub fn functional(&self, name: &str) -> Option<&Functional> {
        match self.property(name)? {
            Cardinality::Functional(f) => Some(f),
            Cardinality::NonFunctional(_) => None,
        }
    }

    /// Returns a declared functional property mutably.
    #[must_use]
    pub fn functional_mut(&mut self, name: &str) -> Option<&mut Functional> {
        match self.property_mut(name)? {
            Cardinality::Functional(f) => Some(f),
            Cardinality::NonFunctional(_) => None,
        }
    }

    /// Returns a declared non-functional property.
    #[must_use]
    pub fn non_functional(&self, name: &str) -> Option<&NonFunctional> {
        match self.property(name)? {
            Cardinality::NonFunctional(n) => Some(n),
            Cardinality::Functional(_) => None,
        }
    }

    /// Returns a declared non-functional property mutably.
    #[must_use]
    pub fn non_functional_mut(&mut self, name: &str) -> Option<&mut NonFunctional> {
        match self.property_mut(name)? {
            Cardinality::NonFunctional(n) => Some(n),
            Cardinality::Functional(_) => None,
        }
    }

    /// Returns the language map of `name`, if one is present.
    #[must_use]
    pub fn language_map(&self, name: &str) -> Option<&LanguageMap> {
        let index = self.schema.position(name)?;
        self.properties.get(index)?.language_map.as_ref()
    }

    /// Returns the language map of `name`, creating an empty one if the
    /// property allows a map and none is present yet.
    ///
    /// Once created, the map is emitted on serialization even while empty.
    #[must_use]
    pub fn language_map_mut(&mut self, name: &str) -> Option<&mut LanguageMap> {
        let index = self.schema.position(name)?;
        if !self.schema.property_at(index)?.language_map {
            return None;
        }
        let state = self.properties.get_mut(index)?;
        Some(state.language_map.get_or_insert_with(LanguageMap::new))
    }

    /// Drops the language map of `name`, so it is no longer emitted.
    pub fn remove_language_map(&mut self, name: &str) -> Option<LanguageMap> {
        let index = self.schema.position(name)?;
        self.properties.get_mut(index)?.language_map.take()
    }

    /// Returns the unknown-value vault.
    #[must_use]
    pub fn vault(&self) -> &Vault {
        &self.vault
    }

    /// Returns the unknown-value vault mutably.
    #[must_use]
    pub fn vault_mut(&mut self) -> &mut Vault {
        &mut self.vault
    }

    /// Returns the names in the declared-types list, in order. References
    /// appear as their IRI text.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        self.property(TYPE_KEY)
            .map(|values| {
                values
                    .slots()
                    .iter()
                    .filter_map(|slot| slot.as_string().or_else(|| slot.as_iri().map(Iri::as_str)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns true if the declared-types list, or an `@type` kept in the
    /// vault, contains `name`.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        let declared = self
            .property(TYPE_KEY)
            .is_some_and(|values| values.slots().iter().any(|slot| slot.names(name)));
        declared || self.keyword_types().contains(&name)
    }

    fn keyword_types(&self) -> Vec<&str> {
        match self.vault.get(KEYWORD_TYPE_KEY) {
            Some(Value::String(name)) => vec![name.as_str()],
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Inserts the canonical type name into the declared-types list unless
    /// [`Resource::has_type`] already finds it. Returns true if the list changed.
    ///
    /// Types whose schema declares no `type` property record nothing.
    pub fn ensure_type(&mut self) -> bool {
        let name = self.schema.name;
        if self.has_type(name) {
            return false;
        }
        let inserted = match self.property_mut(TYPE_KEY) {
            Some(Cardinality::NonFunctional(values)) => {
                values.append(Literal::from(name));
                true
            }
            Some(Cardinality::Functional(value)) if value.is_empty() => {
                value.set(Literal::from(name));
                true
            }
            _ => false,
        };
        if inserted {
            debug!(type_name = name, "recorded canonical type name");
        }
        inserted
    }

    fn apply(&mut self, key: &str, value: &Value, registry: &Registry) -> Result<()> {
        if key == CONTEXT_KEY {
            trace!(type_name = self.schema.name, "skipping schema context");
            return Ok(());
        }
        if let Some(index) = self.schema.position(key) {
            if let (Some(decl), Some(state)) =
                (self.schema.property_at(index), self.properties.get_mut(index))
            {
                state.values = Cardinality::resolve(decl, value, registry)?;
                return Ok(());
            }
        }
        if let Some(index) = self.schema.map_position(key) {
            if let (Some(decl), Some(state)) =
                (self.schema.property_at(index), self.properties.get_mut(index))
            {
                state.language_map = Some(LanguageMap::from_value(decl.name, value)?);
                return Ok(());
            }
        }
        debug!(type_name = self.schema.name, key, "undeclared key stored in vault");
        self.vault.set(key, value.clone());
        Ok(())
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name == other.schema.name
            && self.properties == other.properties
            && self.vault == other.vault
    }
}

impl Node for Resource {
    fn type_name(&self) -> &str {
        self.schema.name
    }

    /// Applies every key of `map`. The update is all-or-nothing: on error
    /// the object is left exactly as it was.
    fn deserialize(&mut self, map: &Map<String, Value>, registry: &Registry) -> Result<()> {
        let mut staged = self.clone();
        for (key, value) in map {
            staged.apply(key, value, registry)?;
        }
        *self = staged;
        Ok(())
    }

    fn serialize(&mut self) -> Result<Value> {
        self.ensure_type();
        let mut out = Map::new();
        for (decl, state) in self.schema.properties().zip(self.properties.iter_mut()) {
            let value = state.values.to_value().map_err(|source| Error::Serialize {
                property: decl.name.to_owned(),
                source: Box::new(source),
            })?;
            if let Some(value) = value {
                out.insert(decl.name.to_owned(), value);
            }
            if let (Some(map), Some(key)) = (&state.language_map, decl.map_key()) {
                out.insert(key, map.to_value());
            }
        }
        self.vault.contribute(&mut out);
        Ok(Value::Object(out))
    }

    fn clone_node(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }

    fn eq_node(&self, other: &dyn Node) -> bool {
        other
            .as_any()
            .downcast_ref::<Resource>()
            .is_some_and(|other| other == self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Candidate, Capability, LiteralKind};
    use serde_json::json;

    const OBJECT: Capability = Capability::new("Object");
    const TEXT: &[Candidate] = &[Candidate::Literal(LiteralKind::String)];
    const REFERENCE: &[Candidate] = &[Candidate::Reference];
    const TYPES: &[Candidate] = &[Candidate::Reference, Candidate::Literal(LiteralKind::String)];
    const SCORE: &[Candidate] = &[Candidate::Literal(LiteralKind::Float)];
    const NESTED: &[Candidate] = &[Candidate::Node(OBJECT), Candidate::Reference];

    const PROPERTIES: &[PropertyDecl] = &[
        PropertyDecl::functional("id", REFERENCE),
        PropertyDecl::non_functional(TYPE_KEY, TYPES),
        PropertyDecl::non_functional("name", TEXT).with_language_map(),
        PropertyDecl::functional("score", SCORE),
        PropertyDecl::non_functional("attachment", NESTED),
    ];
    static THING: TypeSchema = TypeSchema {
        name: "Thing",
        groups: &[PROPERTIES],
    };
    static BARE: TypeSchema = TypeSchema {
        name: "Bare",
        groups: &[],
    };

    fn registry() -> Registry {
        let mut registry = Registry::new();
        let _ = registry.register("Thing", OBJECT, || Box::new(Resource::new(&THING)));
        registry
    }

    fn thing(value: &Value) -> Resource {
        match Resource::from_value(&THING, value, &registry()) {
            Ok(thing) => thing,
            Err(err) => panic!("{err}"),
        }
    }

    fn serialize(node: &mut Resource) -> Value {
        match node.serialize() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    #[test]
    fn type_name_is_added_once() {
        let mut node = Resource::new(&THING);
        assert!(!node.has_type("Thing"));
        assert_eq!(serialize(&mut node), json!({"type": "Thing"}));
        assert_eq!(serialize(&mut node), json!({"type": "Thing"}));
        assert_eq!(node.types(), ["Thing"]);
        assert!(!node.ensure_type());
    }

    #[test]
    fn existing_type_names_are_kept() {
        let mut node = thing(&json!({"type": ["Custom", "Thing"]}));
        assert_eq!(serialize(&mut node), json!({"type": ["Custom", "Thing"]}));
        let mut other = thing(&json!({"type": "Custom"}));
        assert_eq!(serialize(&mut other), json!({"type": ["Custom", "Thing"]}));
    }

    #[test]
    fn keyword_type_counts_as_declared() {
        let input = json!({"@type": "Thing", "name": "Hi"});
        let mut node = thing(&input);
        assert!(node.vault().has("@type"));
        assert!(node.has_type("Thing"));
        assert_eq!(serialize(&mut node), input);

        let listed = json!({"@type": ["Custom", "Thing"]});
        assert_eq!(serialize(&mut thing(&listed)), listed);

        let mut other = thing(&json!({"@type": "Custom"}));
        assert_eq!(
            serialize(&mut other),
            json!({"@type": "Custom", "type": "Thing"})
        );
    }

    #[test]
    fn schema_without_type_property_records_nothing() {
        let mut node = Resource::new(&BARE);
        assert!(!node.ensure_type());
        assert_eq!(serialize(&mut node), json!({}));
    }

    #[test]
    fn context_is_neither_declared_nor_vaulted() {
        let node = thing(&json!({"@context": "https://www.w3.org/ns/activitystreams", "type": "Thing"}));
        assert!(node.vault().is_empty());
    }

    #[test]
    fn undeclared_keys_round_trip_through_the_vault() {
        let input = json!({"type": "Thing", "unfamiliarKey": {"nested": [1, 2, 3]}});
        let mut node = thing(&input);
        assert!(node.vault().has("unfamiliarKey"));
        assert_eq!(serialize(&mut node), input);
    }

    #[test]
    fn language_maps_are_side_channels() {
        let input = json!({"type": "Thing", "name": "Hi", "nameMap": {"en": "Hi", "fr": "Salut"}});
        let mut node = thing(&input);
        assert_eq!(node.non_functional("name").map(NonFunctional::len), Some(1));
        assert_eq!(node.language_map("name").map(|m| m.get("fr")), Some("Salut"));
        assert_eq!(serialize(&mut node), input);
    }

    #[test]
    fn present_empty_map_is_emitted_until_removed() {
        let mut node = Resource::new(&THING);
        assert!(node.language_map_mut("name").is_some());
        assert!(node.language_map_mut("score").is_none());
        assert_eq!(serialize(&mut node), json!({"type": "Thing", "nameMap": {}}));
        assert!(node.remove_language_map("name").is_some());
        assert_eq!(serialize(&mut node), json!({"type": "Thing"}));
    }

    #[test]
    fn failed_deserialize_leaves_the_object_untouched() {
        let mut node = thing(&json!({"type": "Thing", "name": "before"}));
        let before = node.clone();
        let input = json!({"name": "after", "nameMap": ["not", "a", "map"]});
        let map = input.as_object().cloned().unwrap_or_default();
        let result = node.deserialize(&map, &registry());
        assert!(matches!(result, Err(Error::InvalidLanguageMap { .. })));
        assert_eq!(node, before);
    }

    #[test]
    fn non_mapping_input_is_rejected() {
        let err = Resource::from_value(&THING, &json!("Thing"), &registry());
        assert!(matches!(err, Err(Error::NotAMapping { found: "a string" })));
    }

    #[test]
    fn nested_nodes_round_trip() {
        let input = json!({
            "type": "Thing",
            "attachment": [
                {"type": "Thing", "name": "inner"},
                "https://example.com/other"
            ]
        });
        let mut node = thing(&input);
        let attachment = node.non_functional("attachment");
        let inner = attachment
            .and_then(|a| a.get_node(0))
            .and_then(|n| n.downcast_ref::<Resource>());
        assert_eq!(
            inner.and_then(|r| r.non_functional("name")).and_then(|n| n.get_string(0)),
            Some("inner")
        );
        assert_eq!(serialize(&mut node), input);
    }

    #[test]
    fn serialize_failure_names_the_property() {
        let mut node = Resource::new(&THING);
        if let Some(score) = node.functional_mut("score") {
            score.set(Literal::Float(f64::NAN));
        }
        let err = node.serialize();
        assert!(matches!(
            err,
            Err(Error::Serialize { ref property, .. }) if property == "score"
        ));
    }

    #[test]
    fn programmatic_building() {
        let mut node = Resource::new(&THING);
        if let (Some(id), Ok(iri)) = (node.functional_mut("id"), Iri::parse("https://example.com/t")) {
            id.set(iri);
        }
        if let Some(score) = node.functional_mut("score") {
            score.set(Literal::Float(3.0));
        }
        if let Some(name) = node.non_functional_mut("name") {
            name.append_string("a");
            name.append_string("b");
        }
        assert!(node.non_functional_mut("id").is_none());
        assert_eq!(
            serialize(&mut node),
            json!({"id": "https://example.com/t", "type": "Thing", "name": ["a", "b"], "score": 3})
        );
    }

    #[test]
    fn resources_compare_structurally() {
        let a = thing(&json!({"type": "Thing", "name": "x"}));
        let b = thing(&json!({"name": ["x"], "type": ["Thing"]}));
        assert_eq!(a, b);
        assert!(a.eq_node(&b));
        assert!(!a.eq_node(&Resource::new(&BARE)));
        let boxed: Box<dyn Node> = Box::new(a.clone());
        assert!(boxed.clone().eq_node(&a));
        assert_eq!(Slot::from(Literal::from("x")), Slot::Literal(Literal::String("x".to_owned())));
    }
}
