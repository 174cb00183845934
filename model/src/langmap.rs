//! Natural-language maps: the `<property>Map` companion of a string property.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{value_kind, Error, Result};

/// Language tag → text. At most one entry per tag.
///
/// Tags are kept as written; no BCP 47 validation or case folding is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageMap(BTreeMap<String, String>);

impl LanguageMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set of tags present.
    #[must_use]
    pub fn languages(&self) -> BTreeSet<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Returns the text for `tag`, or `""` if the tag is absent.
    ///
    /// Use [`LanguageMap::contains`] to tell an absent tag from an empty text.
    #[must_use]
    pub fn get(&self, tag: &str) -> &str {
        self.0.get(tag).map_or("", String::as_str)
    }

    /// Inserts or overwrites the text for `tag`, returning the previous text.
    pub fn set(&mut self, tag: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(tag.into(), text.into())
    }

    /// Removes `tag`, returning its text.
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.0.remove(tag)
    }

    /// Returns true if `tag` has an entry.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains_key(tag)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(tag, text)` pairs in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reads the map held under `<property>Map`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLanguageMap`] unless `value` is a mapping of
    /// strings to strings.
    pub fn from_value(property: &str, value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidLanguageMap {
                property: property.to_owned(),
                reason: format!("expected a mapping, found {}", value_kind(value)),
            });
        }
        Self::deserialize(value).map_err(|err| Error::InvalidLanguageMap {
            property: property.to_owned(),
            reason: err.to_string(),
        })
    }

    /// Produces the map's value representation.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.0
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
