//! Observed external slots.
//!
//! Components read and write state the host owns: the selected index, the
//! entry list, and the focused-entry slot. A [`Ref`] is a small
//! single-threaded handle over that storage; the host may bind its own
//! `Ref` into a component's options, or accept the component-private
//! default. Cloning a `Ref` shares the backing storage.

use std::{cell::RefCell, rc::Rc};

/// A shared slot holding one value. All access goes through accessor calls;
/// no borrow is held across component calls.
#[derive(Debug, Default)]
pub struct Ref<T> {
    /// Shared backing storage.
    inner: Rc<RefCell<T>>,
}

impl<T> Ref<T> {
    /// Construct a slot holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Replace the stored value.
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Run a closure over a shared borrow of the value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Run a closure over a mutable borrow of the value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.borrow_mut())
    }
}

impl<T: Copy> Ref<T> {
    /// Copy the stored value out.
    pub fn get(&self) -> T {
        *self.inner.borrow()
    }
}

impl<T> Clone for Ref<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> From<T> for Ref<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// The entry set of a list-style component: an ordered sequence of display
/// strings, owned by the host and referenced by the component.
pub type StringListRef = Ref<Vec<String>>;

impl StringListRef {
    /// Build an entry list from string slices.
    pub fn from_strs(entries: &[&str]) -> Self {
        Self::new(entries.iter().map(|e| (*e).to_string()).collect())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.with(Vec::len)
    }

    /// Is the entry list empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_storage() {
        let host = Ref::new(3usize);
        let component = host.clone();
        component.set(5);
        assert_eq!(host.get(), 5);
    }

    #[test]
    fn entry_list() {
        let entries = StringListRef::from_strs(&["a", "b"]);
        assert_eq!(entries.len(), 2);
        entries.with_mut(|e| e.push("c".into()));
        assert_eq!(entries.len(), 3);
        assert!(!entries.is_empty());
    }
}
