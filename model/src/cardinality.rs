//! Cardinality wrappers: adapt property slots to functional (0..1) and
//! non-functional (0..N, ordered) properties.
//!
//! Serialization of a non-functional property collapses singletons: one
//! element is emitted as a bare value, two or more as a sequence, none omits
//! the key. Deserialization mirrors it, so `x` and `[x]` read identically.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::iri::Iri;
use crate::literal::Literal;
use crate::node::Node;
use crate::registry::Registry;
use crate::schema::{Candidate, Capability, PropertyDecl};
use crate::slot::Slot;

/// A property holding at most one value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Functional {
    slot: Option<Slot>,
}

impl Functional {
    /// Creates an empty property.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a single value. A sequence is not unpacked: it resolves as
    /// one value, which normally leaves it unrecognized.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::NestedDeserialize`] from the slot.
    pub fn resolve(decl: &PropertyDecl, value: &Value, registry: &Registry) -> Result<Self> {
        let slot = Slot::resolve(decl.name, value, decl.candidates, registry)?;
        Ok(Self { slot: Some(slot) })
    }

    /// Returns the value, if set.
    #[must_use]
    pub fn get(&self) -> Option<&Slot> {
        self.slot.as_ref()
    }

    /// Returns the value mutably, if set.
    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut Slot> {
        self.slot.as_mut()
    }

    /// Replaces the value entirely.
    pub fn set(&mut self, slot: impl Into<Slot>) {
        self.slot = Some(slot.into());
    }

    /// Replaces the value with a nested node.
    pub fn set_node(&mut self, capability: Capability, node: Box<dyn Node>) {
        self.slot = Some(Slot::Node { capability, node });
    }

    /// Removes and returns the value.
    pub fn take(&mut self) -> Option<Slot> {
        self.slot.take()
    }

    /// Removes the value.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Returns true if no value is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Returns true if the value populated `candidate`.
    #[must_use]
    pub fn is(&self, candidate: Candidate) -> bool {
        self.slot.as_ref().is_some_and(|s| s.is(candidate))
    }

    /// Produces the value, or `None` to omit the key.
    ///
    /// # Errors
    ///
    /// Propagates the slot's serialization failure.
    pub fn to_value(&mut self) -> Result<Option<Value>> {
        self.slot.as_mut().map(Slot::to_value).transpose()
    }
}

/// A property holding an ordered, possibly empty list of values.
/// Duplicates are permitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NonFunctional {
    slots: Vec<Slot>,
}

impl NonFunctional {
    /// Creates an empty property.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves each element of a sequence in order, or a bare value as the
    /// sole element.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::NestedDeserialize`] raised by any element.
    pub fn resolve(decl: &PropertyDecl, value: &Value, registry: &Registry) -> Result<Self> {
        let resolve = |v: &Value| Slot::resolve(decl.name, v, decl.candidates, registry);
        let slots = match value {
            Value::Array(items) => items.iter().map(resolve).collect::<Result<Vec<_>>>()?,
            single => vec![resolve(single)?],
        };
        Ok(Self { slots })
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the value at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Returns the value at `index` mutably.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    /// Iterates values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// Iterates values mutably in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Slot> {
        self.slots.iter_mut()
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns true if the value at `index` populated `candidate`.
    #[must_use]
    pub fn is(&self, index: usize, candidate: Candidate) -> bool {
        self.slots.get(index).is_some_and(|s| s.is(candidate))
    }

    /// Returns the position, within `candidates`, of the kind populated at
    /// `index`.
    #[must_use]
    pub fn kind_index(&self, index: usize, candidates: &[Candidate]) -> Option<usize> {
        self.slots.get(index)?.kind_index(candidates)
    }

    /// Returns the IRI at `index`, if that value is a reference.
    #[must_use]
    pub fn get_iri(&self, index: usize) -> Option<&Iri> {
        self.slots.get(index).and_then(Slot::as_iri)
    }

    /// Returns the string at `index`, if that value is an `xsd:string`.
    #[must_use]
    pub fn get_string(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(Slot::as_string)
    }

    /// Returns the node at `index`, if that value is a nested node.
    #[must_use]
    pub fn get_node(&self, index: usize) -> Option<&(dyn Node + 'static)> {
        self.slots.get(index).and_then(Slot::as_node)
    }

    /// Appends a value at the end.
    pub fn append(&mut self, slot: impl Into<Slot>) {
        self.slots.push(slot.into());
    }

    /// Inserts a value at the front, shifting the rest back.
    pub fn prepend(&mut self, slot: impl Into<Slot>) {
        self.slots.insert(0, slot.into());
    }

    /// Appends an IRI reference.
    pub fn append_iri(&mut self, iri: Iri) {
        self.append(iri);
    }

    /// Appends an `xsd:string`.
    pub fn append_string(&mut self, text: impl Into<String>) {
        self.append(Literal::String(text.into()));
    }

    /// Appends a nested node.
    pub fn append_node(&mut self, capability: Capability, node: Box<dyn Node>) {
        self.slots.push(Slot::Node { capability, node });
    }

    /// Prepends a nested node.
    pub fn prepend_node(&mut self, capability: Capability, node: Box<dyn Node>) {
        self.slots.insert(0, Slot::Node { capability, node });
    }

    /// Inserts a value before `index`; `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, slot: impl Into<Slot>) -> Result<()> {
        if index > self.slots.len() {
            return Err(self.out_of_bounds(index));
        }
        self.slots.insert(index, slot.into());
        Ok(())
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, slot: impl Into<Slot>) -> Result<Slot> {
        let len = self.slots.len();
        match self.slots.get_mut(index) {
            Some(current) => Ok(std::mem::replace(current, slot.into())),
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Removes and returns the value at `index`; later values shift forward.
    pub fn remove(&mut self, index: usize) -> Option<Slot> {
        (index < self.slots.len()).then(|| self.slots.remove(index))
    }

    /// Swaps the values at `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if either index is past the end.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        if let Some(&index) = [a, b].iter().find(|&&i| i >= self.slots.len()) {
            return Err(self.out_of_bounds(index));
        }
        self.slots.swap(a, b);
        Ok(())
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.slots.len(),
        }
    }

    /// Produces the value per the singleton-collapse rule, or `None` to omit
    /// the key. A sole element that is itself a sequence stays wrapped.
    ///
    /// # Errors
    ///
    /// Propagates the first element's serialization failure.
    pub fn to_value(&mut self) -> Result<Option<Value>> {
        match self.slots.as_mut_slice() {
            [] => Ok(None),
            [only] => match only.to_value()? {
                // A sole sequence element stays wrapped so it reads back as one element.
                Value::Array(items) => Ok(Some(Value::Array(vec![Value::Array(items)]))),
                value => Ok(Some(value)),
            },
            many => {
                let values = many
                    .iter_mut()
                    .map(Slot::to_value)
                    .collect::<Result<Vec<_>>>()?;
                Ok(Some(Value::Array(values)))
            }
        }
    }
}

impl<'a> IntoIterator for &'a NonFunctional {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl<S: Into<Slot>> FromIterator<S> for NonFunctional {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The values of one declared property, in the shape its declaration demands.
#[derive(Debug, Clone, PartialEq)]
pub enum Cardinality {
    /// A functional property.
    Functional(Functional),
    /// A non-functional property.
    NonFunctional(NonFunctional),
}

impl Cardinality {
    /// Creates the empty wrapper matching `decl`.
    #[must_use]
    pub fn empty_for(decl: &PropertyDecl) -> Self {
        if decl.functional {
            Cardinality::Functional(Functional::new())
        } else {
            Cardinality::NonFunctional(NonFunctional::new())
        }
    }

    /// Resolves `value` with the wrapper matching `decl`.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::NestedDeserialize`] from any element.
    pub fn resolve(decl: &PropertyDecl, value: &Value, registry: &Registry) -> Result<Self> {
        Ok(if decl.functional {
            Cardinality::Functional(Functional::resolve(decl, value, registry)?)
        } else {
            Cardinality::NonFunctional(NonFunctional::resolve(decl, value, registry)?)
        })
    }

    /// Returns the values as a slice, in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        match self {
            Cardinality::Functional(f) => f.slot.as_slice(),
            Cardinality::NonFunctional(n) => n.as_slice(),
        }
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots().len()
    }

    /// Returns true if there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    /// Produces the property's value, or `None` to omit the key.
    ///
    /// # Errors
    ///
    /// Propagates the first serialization failure.
    pub fn to_value(&mut self) -> Result<Option<Value>> {
        match self {
            Cardinality::Functional(f) => f.to_value(),
            Cardinality::NonFunctional(n) => n.to_value(),
        }
    }
}
