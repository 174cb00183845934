//! `as:Link` and `as:Mention`.

use ldslot::{PropertyDecl, TypeSchema};

use super::object::CORE;
use super::ranges::{COUNT, ID, LANGUAGE_TAG, MEDIA_TYPE, OBJECT_OR_LINK, STRING, TEXT};

/// Properties of `as:Link`, in document order.
pub const LINK_PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::functional("height", COUNT),
    PropertyDecl::functional("href", ID),
    PropertyDecl::functional("hreflang", LANGUAGE_TAG),
    PropertyDecl::functional("mediaType", MEDIA_TYPE),
    PropertyDecl::non_functional("name", TEXT).with_language_map(),
    PropertyDecl::non_functional("preview", OBJECT_OR_LINK),
    PropertyDecl::non_functional("rel", STRING),
    PropertyDecl::functional("width", COUNT),
];

/// `as:Link`.
pub static LINK: TypeSchema = TypeSchema {
    name: "Link",
    groups: &[CORE, LINK_PROPERTIES],
};

/// `as:Mention`.
pub static MENTION: TypeSchema = TypeSchema {
    name: "Mention",
    groups: &[CORE, LINK_PROPERTIES],
};
