//! Capabilities of the ActivityStreams vocabulary.
//!
//! A capability is what a property's candidate asks for (`attachment` takes
//! any `Object`, `icon` takes an `Image`). Every type is registered under each
//! capability it provides.

use ldslot::Capability;

/// Anything that is an `as:Object` or one of its subtypes.
pub const OBJECT: Capability = Capability::new("Object");

/// `as:Link` and its subtypes.
pub const LINK: Capability = Capability::new("Link");

/// `as:Image`.
pub const IMAGE: Capability = Capability::new("Image");

/// `as:Collection` and `as:OrderedCollection`.
pub const COLLECTION: Capability = Capability::new("Collection");

/// `as:Activity` and its subtypes.
pub const ACTIVITY: Capability = Capability::new("Activity");

/// Every capability, in the order candidates usually list them.
pub const ALL: [Capability; 5] = [OBJECT, LINK, IMAGE, COLLECTION, ACTIVITY];
