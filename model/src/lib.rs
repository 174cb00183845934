//! Schema-driven object model for polymorphic JSON-LD vocabularies.
//!
//! In vocabularies like ActivityStreams a single property (`actor`,
//! `content`, `published`) may hold an embedded typed object, a bare link, a
//! plain or language-tagged string, a timestamp, a duration, a number or a
//! bare reference. This crate resolves any such value into exactly one of the
//! statically declared candidate representations, keeps what it cannot
//! classify, and writes back a value tree equal to the one it read.
//!
//! # Layers
//!
//! | Layer | Type |
//! |-------|------|
//! | Schema data | [`TypeSchema`], [`PropertyDecl`], [`Candidate`] |
//! | Literal parsers | [`Literal`] and the [`literal`] modules |
//! | Property slot | [`Slot`] |
//! | Cardinality | [`Functional`], [`NonFunctional`], [`Cardinality`] |
//! | Side channels | [`LanguageMap`], [`Vault`] |
//! | Type dispatch | [`Registry`] |
//! | Vocabulary object | [`Resource`] implementing [`Node`] |
//!
//! # Example
//!
//! ```
//! use ldslot::{Candidate, Node, PropertyDecl, Registry, Resource, TypeSchema};
//!
//! const ACTOR: &[Candidate] = &[Candidate::Reference];
//! const PROPERTIES: &[PropertyDecl] = &[PropertyDecl::non_functional("actor", ACTOR)];
//! static LIKE: TypeSchema = TypeSchema { name: "Like", groups: &[PROPERTIES] };
//!
//! let input = serde_json::json!({"actor": "https://example.com/alice"});
//! let mut like = Resource::from_value(&LIKE, &input, &Registry::new()).unwrap();
//! assert_eq!(like.non_functional("actor").map(|a| a.len()), Some(1));
//! assert_eq!(like.serialize().unwrap(), input);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod cardinality;
pub mod error;
pub mod iri;
pub mod langmap;
pub mod literal;
pub mod node;
pub mod registry;
pub mod resource;
pub mod schema;
pub mod slot;
pub mod vault;

pub use cardinality::{Cardinality, Functional, NonFunctional};
pub use error::{Error, Result};
pub use iri::Iri;
pub use langmap::LanguageMap;
pub use literal::{LangString, Literal, XsdDuration};
pub use node::Node;
pub use registry::{Factory, Registration, Registry};
pub use resource::Resource;
pub use schema::{Candidate, Capability, LiteralKind, PropertyDecl, TypeSchema};
pub use slot::Slot;
pub use vault::Vault;

/// Reserved key carrying the JSON-LD context; never declared, never vaulted.
pub const CONTEXT_KEY: &str = "@context";

/// Key of the declared-types list.
pub const TYPE_KEY: &str = "type";

/// JSON-LD keyword form of the type discriminator. Kept in the vault.
pub const KEYWORD_TYPE_KEY: &str = "@type";

/// Keys recognized as type discriminators, in lookup order.
pub const TYPE_KEYS: [&str; 2] = [TYPE_KEY, KEYWORD_TYPE_KEY];

/// Key of the node identifier.
pub const ID_KEY: &str = "id";
