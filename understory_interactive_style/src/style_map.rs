// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered inline style declarations.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// An ordered map of CSS property to value.
///
/// Setting a property that is already present replaces its value in place, so
/// the first insertion decides where the declaration appears. Merging a later
/// map therefore overrides values without reordering them.
///
/// ```rust
/// use understory_interactive_style::StyleMap;
///
/// let mut style = StyleMap::new().with("color", "black").with("cursor", "default");
/// style.merge(&StyleMap::new().with("cursor", "pointer").with("outline", "none"));
///
/// assert_eq!(style.to_string(), "color: black; cursor: pointer; outline: none");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets `property`, returning the map for chaining.
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Sets `property`. Returns the previous value, if any.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, old)) => Some(core::mem::replace(old, value)),
            None => {
                self.entries.push((property, value));
                None
            }
        }
    }

    /// The value of `property`, if set.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Removes `property`, returning its value.
    pub fn remove(&mut self, property: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(p, _)| p == property)?;
        Some(self.entries.remove(idx).1)
    }

    /// Applies every declaration of `other` on top of this map.
    pub fn merge(&mut self, other: &Self) {
        for (property, value) in &other.entries {
            self.set(property.as_str(), value.as_str());
        }
    }

    /// Declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Some declaration has a blank property name.
    pub(crate) fn has_empty_property(&self) -> bool {
        self.entries.iter().any(|(p, _)| p.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (property, value) in iter {
            map.set(property, value);
        }
        map
    }
}

/// Formats as CSS declaration text, as used by a `style` attribute.
impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}
