//! `as:Collection` and `as:OrderedCollection`.

use ldslot::{PropertyDecl, TypeSchema};

use super::object::{CORE, OBJECT_PROPERTIES};
use super::ranges::{COUNT, LINK_OR_IRI, OBJECT_OR_LINK};

const COLLECTION_PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::functional("current", LINK_OR_IRI),
    PropertyDecl::functional("first", LINK_OR_IRI),
    PropertyDecl::non_functional("items", OBJECT_OR_LINK),
    PropertyDecl::functional("last", LINK_OR_IRI),
    PropertyDecl::functional("totalItems", COUNT),
];

const ORDERED_PROPERTIES: &[PropertyDecl] =
    &[PropertyDecl::non_functional("orderedItems", OBJECT_OR_LINK)];

/// `as:Collection`.
pub static COLLECTION: TypeSchema = TypeSchema {
    name: "Collection",
    groups: &[CORE, OBJECT_PROPERTIES, COLLECTION_PROPERTIES],
};

/// `as:OrderedCollection`.
pub static ORDERED_COLLECTION: TypeSchema = TypeSchema {
    name: "OrderedCollection",
    groups: &[CORE, OBJECT_PROPERTIES, COLLECTION_PROPERTIES, ORDERED_PROPERTIES],
};
