//! `as:Object` and the object types that add no behaviour of their own.
//!
//! `Image`, `Document`, `Note` and `Article` share the object properties
//! verbatim; `Tombstone` and `Place` extend them.

use ldslot::{PropertyDecl, TypeSchema};

use super::ranges::{
    COLLECTION_REF, DATE_TIME, DURATION, FLOAT, ID, IMAGE_OR_LINK, IRI_OR_STRING, LINK_OR_IRI,
    MEDIA_TYPE, OBJECT_OR_LINK, TEXT, TYPES,
};

/// `id` and `type`, declared by every type.
pub const CORE: &[PropertyDecl] = &[
    PropertyDecl::functional("id", ID),
    PropertyDecl::non_functional("type", TYPES),
];

/// Properties of `as:Object`, in document order.
pub const OBJECT_PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::non_functional("attachment", OBJECT_OR_LINK),
    PropertyDecl::non_functional("attributedTo", OBJECT_OR_LINK),
    PropertyDecl::non_functional("audience", OBJECT_OR_LINK),
    PropertyDecl::non_functional("bcc", OBJECT_OR_LINK),
    PropertyDecl::non_functional("bto", OBJECT_OR_LINK),
    PropertyDecl::non_functional("cc", OBJECT_OR_LINK),
    PropertyDecl::non_functional("content", TEXT).with_language_map(),
    PropertyDecl::non_functional("context", OBJECT_OR_LINK),
    PropertyDecl::functional("duration", DURATION),
    PropertyDecl::functional("endTime", DATE_TIME),
    PropertyDecl::non_functional("generator", OBJECT_OR_LINK),
    PropertyDecl::non_functional("icon", IMAGE_OR_LINK),
    PropertyDecl::non_functional("image", IMAGE_OR_LINK),
    PropertyDecl::non_functional("inReplyTo", OBJECT_OR_LINK),
    PropertyDecl::non_functional("location", OBJECT_OR_LINK),
    PropertyDecl::functional("mediaType", MEDIA_TYPE),
    PropertyDecl::non_functional("name", TEXT).with_language_map(),
    PropertyDecl::non_functional("preview", OBJECT_OR_LINK),
    PropertyDecl::functional("published", DATE_TIME),
    PropertyDecl::functional("replies", COLLECTION_REF),
    PropertyDecl::functional("startTime", DATE_TIME),
    PropertyDecl::non_functional("summary", TEXT).with_language_map(),
    PropertyDecl::non_functional("tag", OBJECT_OR_LINK),
    PropertyDecl::non_functional("to", OBJECT_OR_LINK),
    PropertyDecl::functional("updated", DATE_TIME),
    PropertyDecl::non_functional("url", LINK_OR_IRI),
];

const TOMBSTONE_PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::non_functional("formerType", IRI_OR_STRING),
    PropertyDecl::functional("deleted", DATE_TIME),
];

const PLACE_PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::functional("accuracy", FLOAT),
    PropertyDecl::functional("altitude", FLOAT),
    PropertyDecl::functional("latitude", FLOAT),
    PropertyDecl::functional("longitude", FLOAT),
    PropertyDecl::functional("radius", FLOAT),
    PropertyDecl::functional("units", IRI_OR_STRING),
];

/// `as:Object`.
pub static OBJECT: TypeSchema = TypeSchema {
    name: "Object",
    groups: &[CORE, OBJECT_PROPERTIES],
};

/// `as:Image`.
pub static IMAGE: TypeSchema = TypeSchema {
    name: "Image",
    groups: &[CORE, OBJECT_PROPERTIES],
};

/// `as:Document`.
pub static DOCUMENT: TypeSchema = TypeSchema {
    name: "Document",
    groups: &[CORE, OBJECT_PROPERTIES],
};

/// `as:Note`: a short written work.
pub static NOTE: TypeSchema = TypeSchema {
    name: "Note",
    groups: &[CORE, OBJECT_PROPERTIES],
};

/// `as:Article`.
pub static ARTICLE: TypeSchema = TypeSchema {
    name: "Article",
    groups: &[CORE, OBJECT_PROPERTIES],
};

/// `as:Tombstone`: stands in for a deleted object.
pub static TOMBSTONE: TypeSchema = TypeSchema {
    name: "Tombstone",
    groups: &[CORE, OBJECT_PROPERTIES, TOMBSTONE_PROPERTIES],
};

/// `as:Place`.
pub static PLACE: TypeSchema = TypeSchema {
    name: "Place",
    groups: &[CORE, OBJECT_PROPERTIES, PLACE_PROPERTIES],
};
