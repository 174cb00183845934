//! Bare identifier references.
//!
//! A reference is any string that parses as an absolute URL, i.e. one with a
//! scheme. The text is kept exactly as written; [`url::Url`] normalizes, so
//! it is only used for validation and on request.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use url::Url;

use crate::error::Error;

/// An absolute IRI, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(String);

impl Iri {
    /// Validates and wraps `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIri`] if `text` is not an absolute URL.
    pub fn parse(text: &str) -> Result<Self, Error> {
        Self::try_from_str(text).ok_or_else(|| Error::InvalidIri {
            input: text.to_owned(),
        })
    }

    fn try_from_str(text: &str) -> Option<Self> {
        let url = Url::parse(text).ok()?;
        (!url.scheme().is_empty()).then(|| Self(text.to_owned()))
    }

    /// Returns the IRI exactly as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the parsed, normalized URL.
    #[must_use]
    pub fn to_url(&self) -> Option<Url> {
        Url::parse(&self.0).ok()
    }

    pub(crate) fn from_value(value: &Value) -> Option<Self> {
        Self::try_from_str(value.as_str()?)
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl FromStr for Iri {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Iri> for String {
    fn from(value: Iri) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_the_original_text() {
        let iri = Iri::parse("HTTPS://Example.COM/alice");
        assert_eq!(iri.as_ref().map(Iri::as_str).ok(), Some("HTTPS://Example.COM/alice"));
        let normalized = iri.ok().and_then(|i| i.to_url()).map(String::from);
        assert_eq!(normalized.as_deref(), Some("https://example.com/alice"));
    }

    #[test]
    fn requires_a_scheme() {
        assert!(Iri::parse("https://example.com/").is_ok());
        assert!(Iri::parse("mailto:alice@example.com").is_ok());
        assert!(Iri::parse("urn:uuid:6e8bc430-9c3a-11d9-9669-0800200c9a66").is_ok());
        assert!(Iri::parse("Note").is_err());
        assert!(Iri::parse("/relative/path").is_err());
        assert!(Iri::parse("").is_err());
        assert_eq!(Iri::from_value(&json!(42)), None);
    }
}
