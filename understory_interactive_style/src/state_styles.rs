// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state class names and styles.
//!
//! [`StateStyles`] is immutable and shared: cloning it bumps a reference count,
//! so one table can be handed to every instance of a widget.

use alloc::rc::Rc;
use alloc::string::String;

use understory_interactive::ConfigError;

use crate::slot::StyleSlot;
use crate::style_map::StyleMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SlotStyle {
    class_name: Option<String>,
    style: Option<StyleMap>,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct StateStylesData {
    slots: [SlotStyle; 10],
}

/// Class names and style overrides for each [`StyleSlot`].
///
/// Slots without an explicit class name use the slot name (`"hover"`,
/// `"mouseActive"`, ...). Slots without a style contribute nothing.
///
/// ```rust
/// use understory_interactive_style::{StateStylesBuilder, StyleMap, StyleSlot};
///
/// let styles = StateStylesBuilder::new()
///     .class_name(StyleSlot::Hover, "is-hovered")
///     .style(StyleSlot::FocusFromKey, StyleMap::new().with("outline", "2px solid"))
///     .build()
///     .unwrap();
///
/// assert_eq!(styles.class_name(StyleSlot::Hover), "is-hovered");
/// assert_eq!(styles.class_name(StyleSlot::Active), "active");
/// assert!(styles.style(StyleSlot::Hover).is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateStyles {
    inner: Rc<StateStylesData>,
}

impl StateStyles {
    /// The class name applied while `slot` holds.
    #[must_use]
    pub fn class_name(&self, slot: StyleSlot) -> &str {
        self.inner.slots[slot.index()]
            .class_name
            .as_deref()
            .unwrap_or(slot.as_str())
    }

    /// The style applied while `slot` holds, if one was configured.
    #[must_use]
    pub fn style(&self, slot: StyleSlot) -> Option<&StyleMap> {
        self.inner.slots[slot.index()].style.as_ref()
    }
}

/// Builder for [`StateStyles`].
#[derive(Clone, Debug, Default)]
pub struct StateStylesBuilder {
    slots: [SlotStyle; 10],
}

impl StateStylesBuilder {
    /// Starts with every slot at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the class name of `slot`.
    #[must_use]
    pub fn class_name(mut self, slot: StyleSlot, name: impl Into<String>) -> Self {
        self.slots[slot.index()].class_name = Some(name.into());
        self
    }

    /// Sets the style of `slot`, replacing any earlier one.
    #[must_use]
    pub fn style(mut self, slot: StyleSlot, style: StyleMap) -> Self {
        self.slots[slot.index()].style = Some(style);
        self
    }

    /// Validates and freezes the table.
    ///
    /// Class names must be non-empty and free of whitespace; style properties
    /// must be non-empty.
    pub fn build(self) -> Result<StateStyles, ConfigError> {
        for slot in StyleSlot::ALL {
            let entry = &self.slots[slot.index()];
            if let Some(name) = &entry.class_name {
                if name.is_empty() || name.chars().any(char::is_whitespace) {
                    return Err(ConfigError::InvalidClassName {
                        slot: slot.as_str(),
                        name: name.clone(),
                    });
                }
            }
            if entry.style.as_ref().is_some_and(StyleMap::has_empty_property) {
                return Err(ConfigError::EmptyStyleProperty {
                    slot: slot.as_str(),
                });
            }
        }
        Ok(StateStyles {
            inner: Rc::new(StateStylesData { slots: self.slots }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_slot_names() {
        let styles = StateStyles::default();
        for slot in StyleSlot::ALL {
            assert_eq!(styles.class_name(slot), slot.as_str());
            assert!(styles.style(slot).is_none());
        }
    }

    #[test]
    fn whitespace_in_class_name_is_rejected() {
        let err = StateStylesBuilder::new()
            .class_name(StyleSlot::TouchActive, "touch active")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidClassName {
                slot: "touchActive",
                name: String::from("touch active"),
            }
        );
    }

    #[test]
    fn empty_class_name_is_rejected() {
        assert!(
            StateStylesBuilder::new()
                .class_name(StyleSlot::Disabled, "")
                .build()
                .is_err()
        );
    }

    #[test]
    fn empty_style_property_is_rejected() {
        let err = StateStylesBuilder::new()
            .style(StyleSlot::Focus, StyleMap::new().with("", "red"))
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyStyleProperty { slot: "focus" });
    }

    #[test]
    fn clones_share_storage() {
        let styles = StateStylesBuilder::new().build().unwrap();
        let copy = styles.clone();
        assert!(Rc::ptr_eq(&styles.inner, &copy.inner));
    }
}
