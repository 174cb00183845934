//! String-shaped literals: `xsd:string`, `rdf:langString`, BCP 47 language
//! tags and RFC 2045 media types.

use serde_json::{Map, Value};

/// JSON-LD value-object key holding the lexical form.
pub const VALUE_KEY: &str = "@value";
/// JSON-LD value-object key holding the language tag.
pub const LANGUAGE_KEY: &str = "@language";

/// A string tagged with its natural language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangString {
    /// BCP 47 language tag (e.g. `"en"`).
    pub language: String,
    /// The text.
    pub value: String,
}

impl LangString {
    /// Creates a language-tagged string.
    pub fn new(language: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            value: value.into(),
        }
    }
}

pub(crate) fn parse_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

pub(crate) fn format_string(value: &str) -> Value {
    Value::String(value.to_owned())
}

/// Accepts exactly `{"@value": <string>, "@language": <string>}`.
pub(crate) fn parse_lang_string(value: &Value) -> Option<LangString> {
    let map = value.as_object()?;
    if map.len() != 2 {
        return None;
    }
    let text = map.get(VALUE_KEY)?.as_str()?;
    let language = map.get(LANGUAGE_KEY)?.as_str()?;
    Some(LangString::new(language, text))
}

pub(crate) fn format_lang_string(value: &LangString) -> Value {
    let mut map = Map::new();
    map.insert(VALUE_KEY.to_owned(), Value::String(value.value.clone()));
    map.insert(LANGUAGE_KEY.to_owned(), Value::String(value.language.clone()));
    Value::Object(map)
}

pub(crate) fn parse_language_tag(value: &Value) -> Option<String> {
    let tag = value.as_str()?;
    is_language_tag(tag).then(|| tag.to_owned())
}

pub(crate) fn parse_media_type(value: &Value) -> Option<String> {
    let media_type = value.as_str()?;
    is_media_type(media_type).then(|| media_type.to_owned())
}

/// Checks the BCP 47 shape: a 1–8 letter primary subtag followed by
/// `-`-separated 1–8 character alphanumeric subtags.
#[must_use]
pub fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic()));
    primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

/// Checks the RFC 2045 shape `type/subtype` with optional `;`-separated
/// parameters.
#[must_use]
pub fn is_media_type(media_type: &str) -> bool {
    let essence = media_type.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };
    is_token(kind) && is_token(subtype)
}

fn is_token(s: &str) -> bool {
    !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || matches!(b, b'!' | b'#' | b'$' | b'&' | b'-' | b'^' | b'_' | b'.' | b'+')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lang_string_requires_exactly_value_and_language() {
        assert_eq!(
            parse_lang_string(&json!({"@value": "Salut", "@language": "fr"})),
            Some(LangString::new("fr", "Salut"))
        );
        assert_eq!(parse_lang_string(&json!({"@value": "Salut"})), None);
        assert_eq!(
            parse_lang_string(&json!({"@value": "x", "@language": "fr", "extra": 1})),
            None
        );
        assert_eq!(parse_lang_string(&json!("Salut")), None);
    }

    #[test]
    fn language_tags() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("zh-Hant-TW"));
        assert!(is_language_tag("de-CH-1996"));
        assert!(!is_language_tag(""));
        assert!(!is_language_tag("en-"));
        assert!(!is_language_tag("1en"));
        assert!(!is_language_tag("toolongprimary"));
    }

    #[test]
    fn media_types() {
        assert!(is_media_type("text/html"));
        assert!(is_media_type("image/svg+xml"));
        assert!(is_media_type("application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\""));
        assert!(!is_media_type("text"));
        assert!(!is_media_type("/html"));
        assert!(!is_media_type("text/"));
    }
}
