//! Actor types. The ActivityPub actor properties (`inbox`, `outbox`, ...)
//! are declared here so federated profiles round-trip without touching the
//! vault.

use ldslot::{PropertyDecl, TypeSchema};

use super::object::{CORE, OBJECT_PROPERTIES};
use super::ranges::{COLLECTION_REF, TEXT};

const ACTOR_PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::functional("followers", COLLECTION_REF),
    PropertyDecl::functional("following", COLLECTION_REF),
    PropertyDecl::functional("inbox", COLLECTION_REF),
    PropertyDecl::functional("liked", COLLECTION_REF),
    PropertyDecl::functional("outbox", COLLECTION_REF),
    PropertyDecl::functional("preferredUsername", TEXT).with_language_map(),
];

/// `as:Person`.
pub static PERSON: TypeSchema = TypeSchema {
    name: "Person",
    groups: &[CORE, OBJECT_PROPERTIES, ACTOR_PROPERTIES],
};

/// `as:Service`.
pub static SERVICE: TypeSchema = TypeSchema {
    name: "Service",
    groups: &[CORE, OBJECT_PROPERTIES, ACTOR_PROPERTIES],
};

/// `as:Application`.
pub static APPLICATION: TypeSchema = TypeSchema {
    name: "Application",
    groups: &[CORE, OBJECT_PROPERTIES, ACTOR_PROPERTIES],
};

/// `as:Group`.
pub static GROUP: TypeSchema = TypeSchema {
    name: "Group",
    groups: &[CORE, OBJECT_PROPERTIES, ACTOR_PROPERTIES],
};

/// `as:Organization`.
pub static ORGANIZATION: TypeSchema = TypeSchema {
    name: "Organization",
    groups: &[CORE, OBJECT_PROPERTIES, ACTOR_PROPERTIES],
};
