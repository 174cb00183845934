//! The contract every capability-typed value implements.
//!
//! A slot that resolves to a capability-typed candidate holds a boxed
//! [`Node`]. The schema-driven [`Resource`](crate::Resource) is the stock
//! implementation; vocabularies may register their own.

use std::any::Any;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::registry::Registry;

/// A vocabulary object that can be read from and written to a value tree.
pub trait Node: fmt::Debug + Send + Sync + Any {
    /// Canonical type name (e.g. `"Note"`).
    fn type_name(&self) -> &str;

    /// Populates the node from a mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the mapping is structurally malformed for this node.
    fn deserialize(&mut self, map: &Map<String, Value>, registry: &Registry) -> Result<()>;

    /// Produces the node's value representation.
    ///
    /// Takes `&mut self` because serialization may record the node's own type
    /// name in its declared-types list.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any populated property.
    fn serialize(&mut self) -> Result<Value>;

    /// Clones the node behind a fresh box.
    fn clone_node(&self) -> Box<dyn Node>;

    /// Compares with another node of possibly different concrete type.
    fn eq_node(&self, other: &dyn Node) -> bool;

    /// Upcast for downcasting to the concrete type.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete type.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Node {
    /// Returns the node as `T` if that is its concrete type.
    #[must_use]
    pub fn downcast_ref<T: Node>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Returns the node as a mutable `T` if that is its concrete type.
    #[must_use]
    pub fn downcast_mut<T: Node>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

impl Clone for Box<dyn Node> {
    fn clone(&self) -> Self {
        self.clone_node()
    }
}

impl PartialEq for dyn Node {
    fn eq(&self, other: &Self) -> bool {
        self.eq_node(other)
    }
}
