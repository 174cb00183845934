//! The type registry: type name → capability-tagged factories.
//!
//! A registry is filled once, before any document is read, and is read-only
//! afterwards. It holds no interior mutability, so a fully built registry can
//! live in a `static` `OnceLock` and be shared across threads freely.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::schema::Capability;

/// A zero-argument constructor for a node implementation.
pub type Factory = Arc<dyn Fn() -> Box<dyn Node> + Send + Sync>;

/// One factory registered under a type name.
#[derive(Clone)]
pub struct Registration {
    /// Capability the factory produces.
    pub capability: Capability,
    /// Constructor for a fresh, empty node.
    pub factory: Factory,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("capability", &self.capability)
            .finish_non_exhaustive()
    }
}

/// Type name → factories, each tagged with the capability it produces.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Vec<Registration>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `type_name` with a capability and its factory.
    ///
    /// One type name may be registered under several capabilities (an
    /// `Image` is both an `Object` and an `Image`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateRegistration`] if the pair is already present.
    pub fn register<F>(&mut self, type_name: &str, capability: Capability, factory: F) -> Result<()>
    where
        F: Fn() -> Box<dyn Node> + Send + Sync + 'static,
    {
        let registrations = self.entries.entry(type_name.to_owned()).or_default();
        if registrations.iter().any(|r| r.capability == capability) {
            return Err(Error::DuplicateRegistration {
                type_name: type_name.to_owned(),
                capability,
            });
        }
        registrations.push(Registration {
            capability,
            factory: Arc::new(factory),
        });
        Ok(())
    }

    /// Exact-match lookup of the factory for `type_name` restricted to `capability`.
    #[must_use]
    pub fn resolve(&self, type_name: &str, capability: Capability) -> Option<&Factory> {
        self.entries
            .get(type_name)?
            .iter()
            .find(|r| r.capability == capability)
            .map(|r| &r.factory)
    }

    /// Returns the first of `type_names` that resolves for `capability`,
    /// together with its factory.
    pub fn resolve_any<'n, I>(&self, type_names: I, capability: Capability) -> Option<(&'n str, &Factory)>
    where
        I: IntoIterator<Item = &'n str>,
    {
        type_names
            .into_iter()
            .find_map(|name| self.resolve(name, capability).map(|f| (name, f)))
    }

    /// Returns the capabilities registered for `type_name`, in registration order.
    pub fn capabilities(&self, type_name: &str) -> impl Iterator<Item = Capability> + '_ {
        self.entries
            .get(type_name)
            .into_iter()
            .flatten()
            .map(|r| r.capability)
    }

    /// Returns true if `type_name` has any registration.
    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Returns every registered type name, sorted.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered type names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
