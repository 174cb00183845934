//! Literal parsers.
//!
//! Each [`LiteralKind`] has an independent parse/format pair. A parser either
//! returns a typed value or `None`; it never errors and never has side
//! effects, so a slot can try the declared kinds in order and stop at the
//! first success.

pub mod datetime;
pub mod duration;
pub mod number;
pub mod text;

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::schema::LiteralKind;

pub use duration::XsdDuration;
pub use text::LangString;

/// A parsed primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `xsd:string`.
    String(String),
    /// `rdf:langString`.
    LangString(LangString),
    /// `xsd:dateTime`.
    DateTime(DateTime<FixedOffset>),
    /// `xsd:duration`.
    Duration(XsdDuration),
    /// `xsd:float`.
    Float(f64),
    /// `xsd:nonNegativeInteger`.
    NonNegativeInteger(u64),
    /// `xsd:boolean`.
    Boolean(bool),
    /// `rfc:bcp47`.
    LanguageTag(String),
    /// `rfc:rfc2045`.
    MediaType(String),
}

impl Literal {
    /// Attempts to parse `value` as the given kind.
    #[must_use]
    pub fn parse(kind: LiteralKind, value: &Value) -> Option<Self> {
        match kind {
            LiteralKind::String => text::parse_string(value).map(Literal::String),
            LiteralKind::LangString => text::parse_lang_string(value).map(Literal::LangString),
            LiteralKind::DateTime => datetime::parse_date_time(value).map(Literal::DateTime),
            LiteralKind::Duration => duration::parse_duration(value).map(Literal::Duration),
            LiteralKind::Float => number::parse_float(value).map(Literal::Float),
            LiteralKind::NonNegativeInteger => {
                number::parse_non_negative_integer(value).map(Literal::NonNegativeInteger)
            }
            LiteralKind::Boolean => number::parse_boolean(value).map(Literal::Boolean),
            LiteralKind::LanguageTag => text::parse_language_tag(value).map(Literal::LanguageTag),
            LiteralKind::MediaType => text::parse_media_type(value).map(Literal::MediaType),
        }
    }

    /// Builds a literal of `kind` from its lexical form.
    ///
    /// `rdf:langString` has no single-string lexical form; build it with
    /// [`LangString::new`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if `text` is not a valid `kind`.
    pub fn parse_str(kind: LiteralKind, text: &str) -> Result<Self> {
        let parsed = match kind {
            LiteralKind::String => Some(Literal::String(text.to_owned())),
            LiteralKind::LangString => None,
            LiteralKind::DateTime => datetime::parse_date_time_str(text).map(Literal::DateTime),
            LiteralKind::Duration => text.parse().ok().map(Literal::Duration),
            LiteralKind::Float => text
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .map(Literal::Float),
            LiteralKind::NonNegativeInteger => text.parse().ok().map(Literal::NonNegativeInteger),
            LiteralKind::Boolean => text.parse().ok().map(Literal::Boolean),
            LiteralKind::LanguageTag => {
                text::is_language_tag(text).then(|| Literal::LanguageTag(text.to_owned()))
            }
            LiteralKind::MediaType => {
                text::is_media_type(text).then(|| Literal::MediaType(text.to_owned()))
            }
        };
        parsed.ok_or_else(|| Error::InvalidLiteral {
            kind,
            input: text.to_owned(),
        })
    }

    /// Returns the kind this literal was parsed as.
    #[must_use]
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::String(_) => LiteralKind::String,
            Literal::LangString(_) => LiteralKind::LangString,
            Literal::DateTime(_) => LiteralKind::DateTime,
            Literal::Duration(_) => LiteralKind::Duration,
            Literal::Float(_) => LiteralKind::Float,
            Literal::NonNegativeInteger(_) => LiteralKind::NonNegativeInteger,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::LanguageTag(_) => LiteralKind::LanguageTag,
            Literal::MediaType(_) => LiteralKind::MediaType,
        }
    }

    /// Formats the literal back into a value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteNumber`](crate::Error::NonFiniteNumber) for a
    /// NaN or infinite float; every other kind is infallible.
    pub fn to_value(&self) -> Result<Value> {
        Ok(match self {
            Literal::String(s) | Literal::LanguageTag(s) | Literal::MediaType(s) => {
                text::format_string(s)
            }
            Literal::LangString(s) => text::format_lang_string(s),
            Literal::DateTime(dt) => datetime::format_date_time(dt),
            Literal::Duration(d) => duration::format_duration(d),
            Literal::Float(f) => number::format_float(*f)?,
            Literal::NonNegativeInteger(n) => number::format_non_negative_integer(*n),
            Literal::Boolean(b) => number::format_boolean(*b),
        })
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_owned())
    }
}

impl From<LangString> for Literal {
    fn from(value: LangString) -> Self {
        Literal::LangString(value)
    }
}

impl From<DateTime<FixedOffset>> for Literal {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Literal::DateTime(value)
    }
}

impl From<XsdDuration> for Literal {
    fn from(value: XsdDuration) -> Self {
        Literal::Duration(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal::NonNegativeInteger(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}
