//! Candidate lists shared by many property declarations.
//!
//! Each list is the ordered set of representations a property value may take.
//! Capability-typed candidates come first, then literals, then a bare
//! reference, so an embedded object wins over a link and a link over an IRI.

use ldslot::{Candidate, LiteralKind};

use crate::capabilities::{COLLECTION, IMAGE, LINK, OBJECT};

/// `@id`-style identifier.
pub const ID: &[Candidate] = &[Candidate::Reference];

/// Type names: absolute IRIs or compact names.
pub const TYPES: &[Candidate] = &[Candidate::Reference, Candidate::Literal(LiteralKind::String)];

/// `range: Object | Link`.
pub const OBJECT_OR_LINK: &[Candidate] = &[
    Candidate::Node(OBJECT),
    Candidate::Node(LINK),
    Candidate::Reference,
];

/// `range: Image | Link`.
pub const IMAGE_OR_LINK: &[Candidate] = &[
    Candidate::Node(IMAGE),
    Candidate::Node(LINK),
    Candidate::Reference,
];

/// `range: Link | xsd:anyURI`.
pub const LINK_OR_IRI: &[Candidate] = &[Candidate::Node(LINK), Candidate::Reference];

/// `range: Collection`.
pub const COLLECTION_REF: &[Candidate] = &[Candidate::Node(COLLECTION), Candidate::Reference];

/// Natural-language text.
pub const TEXT: &[Candidate] = &[
    Candidate::Literal(LiteralKind::String),
    Candidate::Literal(LiteralKind::LangString),
];

/// A plain string.
pub const STRING: &[Candidate] = &[Candidate::Literal(LiteralKind::String)];

/// Either an IRI or a plain string.
pub const IRI_OR_STRING: &[Candidate] = &[Candidate::Reference, Candidate::Literal(LiteralKind::String)];

/// `xsd:dateTime`.
pub const DATE_TIME: &[Candidate] = &[Candidate::Literal(LiteralKind::DateTime)];

/// `xsd:duration`.
pub const DURATION: &[Candidate] = &[Candidate::Literal(LiteralKind::Duration)];

/// `xsd:float`.
pub const FLOAT: &[Candidate] = &[Candidate::Literal(LiteralKind::Float)];

/// `xsd:nonNegativeInteger`.
pub const COUNT: &[Candidate] = &[Candidate::Literal(LiteralKind::NonNegativeInteger)];

/// `rfc:rfc2045`.
pub const MEDIA_TYPE: &[Candidate] = &[Candidate::Literal(LiteralKind::MediaType)];

/// `rfc:bcp47`.
pub const LANGUAGE_TAG: &[Candidate] = &[Candidate::Literal(LiteralKind::LanguageTag)];
