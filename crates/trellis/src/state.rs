//! Per-component state tracked on behalf of the [`Context`](crate::Context).

use std::sync::atomic::AtomicU64;

use convert_case::{Case, Casing};

use crate::{Result, error};

/// Monotonic source for component ids.
static CURRENT_ID: AtomicU64 = AtomicU64::new(0);

/// Is this a character permitted in a node name?
pub fn valid_nodename_char(c: char) -> bool {
    (c.is_ascii_lowercase() || c.is_ascii_digit()) || c == '_'
}

/// Is this a valid node name?
pub fn valid_nodename(name: &str) -> bool {
    name.chars().all(valid_nodename_char)
}

/// A component name, which consists of lowercase ASCII alphanumeric
/// characters, plus underscores. Used for tracing and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName {
    /// The validated name.
    name: String,
}

impl NodeName {
    /// Create a new `NodeName`, returning an error if the string contains
    /// invalid characters.
    fn new(name: &str) -> Result<Self> {
        if !valid_nodename(name) {
            return Err(error::Error::Invalid(name.into()));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    /// Takes a string and munges it into a valid node name, by converting it
    /// to snake case and dropping all invalid characters.
    pub fn convert(name: &str) -> Self {
        let name = name.to_case(Case::Snake);
        Self {
            name: name.chars().filter(|x| valid_nodename_char(*x)).collect(),
        }
    }
}

impl std::fmt::Display for NodeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

/// Converts a string into the standard node name format, and errors if it
/// doesn't comply.
impl TryFrom<&str> for NodeName {
    type Error = error::Error;
    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

/// An opaque structure used to track component state. Each component keeps a
/// `ComponentState` and offers it up to [`Context`](crate::Context) calls.
#[derive(Debug, PartialEq, Eq)]
pub struct ComponentState {
    /// Unique component id.
    pub(crate) id: u64,

    /// This component's focus generation. The context increments a global
    /// focus counter when focus changes, invalidating the current focus
    /// generation without having to touch every component.
    pub(crate) focus_gen: u64,
}

impl Default for ComponentState {
    fn default() -> Self {
        let id = CURRENT_ID.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Self { id, focus_gen: 0 }
    }
}

impl ComponentState {
    /// A unique id for this component.
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodename_convert() {
        assert_eq!(NodeName::convert("UnderlineToggle"), "underline_toggle");
        assert_eq!(NodeName::convert("toggle"), "toggle");
    }

    #[test]
    fn nodename_validation() {
        assert!(NodeName::try_from("toggle").is_ok());
        assert!(NodeName::try_from("Toggle").is_err());
    }

    #[test]
    fn ids_are_unique() {
        let a = ComponentState::default();
        let b = ComponentState::default();
        assert_ne!(a.id(), b.id());
    }
}
