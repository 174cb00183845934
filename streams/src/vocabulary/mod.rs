//! The ActivityStreams 2.0 type declarations.
//!
//! Each submodule holds the static [`TypeSchema`]s of one family of types.
//! [`TYPES`] lists every type together with the capabilities it is
//! registered under; [`crate::registry`] is built from it.

pub mod activity;
pub mod actor;
pub mod collection;
pub mod link;
pub mod object;
pub mod ranges;

use ldslot::{Capability, TypeSchema};

use crate::capabilities::{ACTIVITY, COLLECTION, IMAGE, LINK, OBJECT};

/// A vocabulary type and the capabilities it provides.
#[derive(Debug, Clone, Copy)]
pub struct VocabularyType {
    /// The type declaration.
    pub schema: &'static TypeSchema,
    /// Capabilities the type is registered under.
    pub capabilities: &'static [Capability],
}

const AS_OBJECT: &[Capability] = &[OBJECT];
const AS_LINK: &[Capability] = &[LINK];
const AS_IMAGE: &[Capability] = &[OBJECT, IMAGE];
const AS_COLLECTION: &[Capability] = &[OBJECT, COLLECTION];
const AS_ACTIVITY: &[Capability] = &[OBJECT, ACTIVITY];

/// Every type of the vocabulary.
pub static TYPES: &[VocabularyType] = &[
    VocabularyType { schema: &object::OBJECT, capabilities: AS_OBJECT },
    VocabularyType { schema: &link::LINK, capabilities: AS_LINK },
    VocabularyType { schema: &link::MENTION, capabilities: AS_LINK },
    VocabularyType { schema: &object::IMAGE, capabilities: AS_IMAGE },
    VocabularyType { schema: &object::DOCUMENT, capabilities: AS_OBJECT },
    VocabularyType { schema: &object::NOTE, capabilities: AS_OBJECT },
    VocabularyType { schema: &object::ARTICLE, capabilities: AS_OBJECT },
    VocabularyType { schema: &actor::PERSON, capabilities: AS_OBJECT },
    VocabularyType { schema: &actor::SERVICE, capabilities: AS_OBJECT },
    VocabularyType { schema: &actor::APPLICATION, capabilities: AS_OBJECT },
    VocabularyType { schema: &actor::GROUP, capabilities: AS_OBJECT },
    VocabularyType { schema: &actor::ORGANIZATION, capabilities: AS_OBJECT },
    VocabularyType { schema: &activity::ACTIVITY, capabilities: AS_ACTIVITY },
    VocabularyType { schema: &activity::CREATE, capabilities: AS_ACTIVITY },
    VocabularyType { schema: &activity::UPDATE, capabilities: AS_ACTIVITY },
    VocabularyType { schema: &activity::DELETE, capabilities: AS_ACTIVITY },
    VocabularyType { schema: &activity::FOLLOW, capabilities: AS_ACTIVITY },
    VocabularyType { schema: &activity::LIKE, capabilities: AS_ACTIVITY },
    VocabularyType { schema: &activity::ANNOUNCE, capabilities: AS_ACTIVITY },
    VocabularyType { schema: &collection::COLLECTION, capabilities: AS_COLLECTION },
    VocabularyType { schema: &collection::ORDERED_COLLECTION, capabilities: AS_COLLECTION },
    VocabularyType { schema: &object::TOMBSTONE, capabilities: AS_OBJECT },
    VocabularyType { schema: &object::PLACE, capabilities: AS_OBJECT },
];

/// Looks up a type declaration by its canonical name.
#[must_use]
pub fn schema(type_name: &str) -> Option<&'static TypeSchema> {
    TYPES
        .iter()
        .map(|t| t.schema)
        .find(|schema| schema.name == type_name)
}
