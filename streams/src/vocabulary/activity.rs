//! `as:Activity` and the activity types a federated server sees most.

use ldslot::{PropertyDecl, TypeSchema};

use super::object::{CORE, OBJECT_PROPERTIES};
use super::ranges::OBJECT_OR_LINK;

/// Properties of `as:Activity`, in document order.
pub const ACTIVITY_PROPERTIES: &[PropertyDecl] = &[
    PropertyDecl::non_functional("actor", OBJECT_OR_LINK),
    PropertyDecl::non_functional("instrument", OBJECT_OR_LINK),
    PropertyDecl::non_functional("object", OBJECT_OR_LINK),
    PropertyDecl::non_functional("origin", OBJECT_OR_LINK),
    PropertyDecl::non_functional("result", OBJECT_OR_LINK),
    PropertyDecl::non_functional("target", OBJECT_OR_LINK),
];

const GROUPS: &[&[PropertyDecl]] = &[CORE, OBJECT_PROPERTIES, ACTIVITY_PROPERTIES];

/// `as:Activity`.
pub static ACTIVITY: TypeSchema = TypeSchema {
    name: "Activity",
    groups: GROUPS,
};

/// `as:Create`.
pub static CREATE: TypeSchema = TypeSchema {
    name: "Create",
    groups: GROUPS,
};

/// `as:Update`.
pub static UPDATE: TypeSchema = TypeSchema {
    name: "Update",
    groups: GROUPS,
};

/// `as:Delete`.
pub static DELETE: TypeSchema = TypeSchema {
    name: "Delete",
    groups: GROUPS,
};

/// `as:Follow`.
pub static FOLLOW: TypeSchema = TypeSchema {
    name: "Follow",
    groups: GROUPS,
};

/// `as:Like`.
pub static LIKE: TypeSchema = TypeSchema {
    name: "Like",
    groups: GROUPS,
};

/// `as:Announce`.
pub static ANNOUNCE: TypeSchema = TypeSchema {
    name: "Announce",
    groups: GROUPS,
};
