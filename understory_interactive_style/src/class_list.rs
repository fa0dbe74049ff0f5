// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Space-separated class name lists.

use alloc::string::String;
use core::fmt;

use smallvec::SmallVec;

/// An ordered list of class names, rendered space-separated.
///
/// Blank entries are skipped and a name already present is not added twice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassList {
    names: SmallVec<[String; 4]>,
}

impl ClassList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every whitespace-separated name in `names`.
    pub fn push(&mut self, names: &str) {
        for name in names.split_whitespace() {
            if !self.contains(name) {
                self.names.push(String::from(name));
            }
        }
    }

    /// Whether `name` is in the list.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Returns `true` if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
