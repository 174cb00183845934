//! Static schema declarations.
//!
//! A vocabulary is described entirely by data: every type is a [`TypeSchema`]
//! listing its properties, and every property is a [`PropertyDecl`] carrying
//! the ordered list of [`Candidate`] kinds a value may resolve to. Schemas are
//! built as `const`/`static` items and referenced via `&'static` borrows.

use std::fmt;

/// A named capability a nested node provides (e.g. `Object`, `Link`, `Image`).
///
/// Capabilities are the unit of registration in the
/// [`Registry`](crate::Registry): a type name resolves to a factory only for
/// the capabilities it was registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Capability(&'static str);

impl Capability {
    /// Creates a capability with the given name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the capability name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The primitive kinds a literal candidate may parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// `xsd:string`: any JSON string.
    String,
    /// `rdf:langString`: a `{"@value", "@language"}` value object.
    LangString,
    /// `xsd:dateTime`: an RFC 3339 timestamp.
    DateTime,
    /// `xsd:duration`: an ISO 8601 duration.
    Duration,
    /// `xsd:float`: any JSON number.
    Float,
    /// `xsd:nonNegativeInteger`: a JSON integer `>= 0`.
    NonNegativeInteger,
    /// `xsd:boolean`: a JSON boolean.
    Boolean,
    /// `rfc:bcp47`: a language tag string.
    LanguageTag,
    /// `rfc:rfc2045`: a media type string.
    MediaType,
}

impl LiteralKind {
    /// Returns the prefixed datatype name (e.g. `"xsd:dateTime"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralKind::String => "xsd:string",
            LiteralKind::LangString => "rdf:langString",
            LiteralKind::DateTime => "xsd:dateTime",
            LiteralKind::Duration => "xsd:duration",
            LiteralKind::Float => "xsd:float",
            LiteralKind::NonNegativeInteger => "xsd:nonNegativeInteger",
            LiteralKind::Boolean => "xsd:boolean",
            LiteralKind::LanguageTag => "rfc:bcp47",
            LiteralKind::MediaType => "rfc:rfc2045",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One alternative representation a property value may resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// An embedded node, matched by its type discriminator against the registry.
    Node(Capability),
    /// A primitive value, matched by a dedicated parser.
    Literal(LiteralKind),
    /// A bare IRI pointing at, rather than embedding, a value.
    Reference,
}

impl Candidate {
    /// Returns true for capability-typed candidates.
    #[must_use]
    pub fn is_node(self) -> bool {
        matches!(self, Candidate::Node(_))
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Candidate::Node(capability) => write!(f, "node<{capability}>"),
            Candidate::Literal(kind) => write!(f, "{kind}"),
            Candidate::Reference => f.write_str("xsd:anyURI"),
        }
    }
}

/// Declaration of one property of a vocabulary type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDecl {
    /// Compact property name as it appears in documents (e.g. `"actor"`).
    pub name: &'static str,
    /// Whether the property holds at most one value.
    pub functional: bool,
    /// Whether the property also accepts a `<name>Map` natural-language map.
    pub language_map: bool,
    /// Candidate kinds in resolution order.
    pub candidates: &'static [Candidate],
}

impl PropertyDecl {
    /// Declares a functional (0..1) property.
    #[must_use]
    pub const fn functional(name: &'static str, candidates: &'static [Candidate]) -> Self {
        Self {
            name,
            functional: true,
            language_map: false,
            candidates,
        }
    }

    /// Declares a non-functional (0..N, ordered) property.
    #[must_use]
    pub const fn non_functional(name: &'static str, candidates: &'static [Candidate]) -> Self {
        Self {
            name,
            functional: false,
            language_map: false,
            candidates,
        }
    }

    /// Marks the property as carrying a `<name>Map` language map.
    #[must_use]
    pub const fn with_language_map(mut self) -> Self {
        self.language_map = true;
        self
    }

    /// Returns the document key of the language map, if the property has one.
    #[must_use]
    pub fn map_key(&self) -> Option<String> {
        self.language_map.then(|| format!("{}Map", self.name))
    }
}

/// Declaration of one vocabulary type.
///
/// Properties are grouped so that types sharing a base (every `Note` is an
/// `Object`) can reuse the base's declarations; the flattened order of the
/// groups is the serialization order.
#[derive(Debug)]
pub struct TypeSchema {
    /// Canonical type name (e.g. `"Note"`).
    pub name: &'static str,
    /// Property declaration groups, base groups first.
    pub groups: &'static [&'static [PropertyDecl]],
}

impl TypeSchema {
    /// Iterates all declared properties in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &'static PropertyDecl> {
        let groups: &'static [&'static [PropertyDecl]] = self.groups;
        groups.iter().flat_map(|group| group.iter())
    }

    /// Returns the number of declared properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.groups.iter().map(|group| group.len()).sum()
    }

    /// Looks up a property by its document key. Returns its flat index.
    #[must_use]
    pub fn position(&self, key: &str) -> Option<usize> {
        self.properties().position(|decl| decl.name == key)
    }

    /// Looks up the property owning a `<name>Map` key. Returns its flat index.
    #[must_use]
    pub fn map_position(&self, key: &str) -> Option<usize> {
        let name = key.strip_suffix("Map")?;
        self.properties()
            .position(|decl| decl.language_map && decl.name == name)
    }

    /// Returns the declaration at a flat index.
    #[must_use]
    pub fn property_at(&self, index: usize) -> Option<&'static PropertyDecl> {
        self.properties().nth(index)
    }

    /// Looks up a property declaration by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static PropertyDecl> {
        self.properties().find(|decl| decl.name == name)
    }
}
