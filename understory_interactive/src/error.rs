// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration errors.
//!
//! Runtime event handling never fails: unknown event and modality combinations
//! are ignored. Only an invalid configuration is reported, once, when an
//! instance or a style table is built.

use alloc::string::String;
use core::fmt;

/// A configuration rejected at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A timing constant is zero, negative or not finite.
    InvalidTiming {
        /// The offending [`Timing`](crate::timing::Timing) field, or
        /// `recent_touch_ms` for the document-wide window.
        field: &'static str,
    },
    /// A class name is empty or contains whitespace.
    InvalidClassName {
        /// The style slot the class name was given for.
        slot: &'static str,
        /// The rejected class name.
        name: String,
    },
    /// A style declaration has an empty property name.
    EmptyStyleProperty {
        /// The style slot the declaration was given for.
        slot: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTiming { field } => {
                write!(f, "timing field `{field}` must be positive and finite")
            }
            Self::InvalidClassName { slot, name } => write!(
                f,
                "class name {name:?} for `{slot}` must be non-empty and contain no whitespace"
            ),
            Self::EmptyStyleProperty { slot } => {
                write!(f, "style for `{slot}` has a declaration with an empty property name")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_offender() {
        let err = ConfigError::InvalidTiming {
            field: "recent_touch_ms",
        };
        assert_eq!(
            err.to_string(),
            "timing field `recent_touch_ms` must be positive and finite"
        );
        let err = ConfigError::InvalidClassName {
            slot: "hover",
            name: String::from("is hovered"),
        };
        assert!(err.to_string().contains("\"is hovered\""));
        assert!(err.to_string().contains("`hover`"));
    }
}
