// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus provenance: who asked for the focus change that is arriving now?
//!
//! Three sources move focus on an interactive element:
//!
//! - the engine itself, through [`Element::focus`](crate::element::Element::focus) on a
//!   mouse press or a tap, or [`Element::blur`](crate::element::Element::blur) when the
//!   element is disabled or state is forced;
//! - the browser, for Tab navigation and its own click focusing;
//! - nobody at all, when a focused element becomes disabled and the platform
//!   forgets to send `blur`.
//!
//! [`FocusTracker`] records the engine's own requests so that the platform
//! event they trigger is attributed to the right modality, and so a second
//! imperative call is never issued while one is still in flight.
//!
//! A host may swallow the focus event a request triggers. A pending focus
//! request therefore lapses after [`PENDING_FOCUS_MS`]; focus arriving later is
//! classified on its own.

use crate::state::FocusKind;
use crate::timing::PENDING_FOCUS_MS;

/// The focus change the engine is waiting on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusTransition {
    /// Nothing requested; focus events come from the platform.
    #[default]
    Idle,
    /// The engine called `focus()` at `since`; the next focus event has this
    /// provenance.
    Focusing {
        /// The provenance to record.
        kind: FocusKind,
        /// When the request was made.
        since: u64,
    },
    /// The engine called `blur()`; the next blur event is expected.
    Blurring,
}

/// Records the engine's pending focus requests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusTracker {
    transition: FocusTransition,
}

impl FocusTracker {
    /// Create an idle tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transition: FocusTransition::Idle,
        }
    }

    /// The pending request.
    #[must_use]
    pub const fn transition(&self) -> FocusTransition {
        self.transition
    }

    /// Request focus with `kind` provenance at `now_ms`.
    ///
    /// Returns `false` if a focus request is still pending; the caller must
    /// not invoke `focus()` again.
    pub fn begin_focus(&mut self, kind: FocusKind, now_ms: u64) -> bool {
        if self.pending_focus(now_ms).is_some() {
            return false;
        }
        self.transition = FocusTransition::Focusing { kind, since: now_ms };
        true
    }

    /// The provenance of a focus request that has not lapsed by `now_ms`.
    #[must_use]
    pub fn pending_focus(&self, now_ms: u64) -> Option<FocusKind> {
        match self.transition {
            FocusTransition::Focusing { kind, since }
                if now_ms < since.saturating_add(PENDING_FOCUS_MS) =>
            {
                Some(kind)
            }
            _ => None,
        }
    }

    /// Request a blur.
    ///
    /// Returns `false` if a blur request is already pending.
    pub fn begin_blur(&mut self) -> bool {
        if self.transition == FocusTransition::Blurring {
            return false;
        }
        self.transition = FocusTransition::Blurring;
        true
    }

    /// A focus event arrived at `now_ms`. Returns the provenance to record:
    /// the pending request's, or `classified` for platform-initiated focus.
    pub fn resolve_focus(&mut self, classified: FocusKind, now_ms: u64) -> FocusKind {
        let kind = self.pending_focus(now_ms).unwrap_or(classified);
        self.transition = FocusTransition::Idle;
        kind
    }

    /// A blur event arrived.
    pub fn resolve_blur(&mut self) {
        self.transition = FocusTransition::Idle;
    }

    /// Forget any pending request.
    pub fn reset(&mut self) {
        self.transition = FocusTransition::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_focus_keeps_its_classification() {
        let mut f = FocusTracker::new();
        assert_eq!(f.resolve_focus(FocusKind::Key, 0), FocusKind::Key);
        assert_eq!(f.transition(), FocusTransition::Idle);
    }

    #[test]
    fn requested_focus_overrides_classification() {
        let mut f = FocusTracker::new();
        assert!(f.begin_focus(FocusKind::Mouse, 0));
        assert_eq!(f.resolve_focus(FocusKind::Key, 5), FocusKind::Mouse);
        // Consumed: the next platform focus is classified normally.
        assert_eq!(f.resolve_focus(FocusKind::Key, 6), FocusKind::Key);
    }

    #[test]
    fn second_focus_request_is_refused() {
        let mut f = FocusTracker::new();
        assert!(f.begin_focus(FocusKind::Touch, 0));
        assert!(!f.begin_focus(FocusKind::Mouse, 10));
        assert_eq!(f.pending_focus(10), Some(FocusKind::Touch));
    }

    #[test]
    fn unanswered_focus_request_lapses() {
        let mut f = FocusTracker::new();
        assert!(f.begin_focus(FocusKind::Mouse, 1_000));
        assert_eq!(f.pending_focus(1_000 + PENDING_FOCUS_MS - 1), Some(FocusKind::Mouse));
        assert_eq!(f.pending_focus(1_000 + PENDING_FOCUS_MS), None);
        // A later Tab focus keeps its own provenance.
        assert_eq!(f.resolve_focus(FocusKind::Key, 5_000), FocusKind::Key);
        // And a lapsed request never blocks a new one.
        assert!(f.begin_focus(FocusKind::Mouse, 6_000));
        assert!(f.begin_focus(FocusKind::Touch, 6_000 + PENDING_FOCUS_MS));
        assert_eq!(f.resolve_focus(FocusKind::Key, 6_150), FocusKind::Touch);
    }

    #[test]
    fn blur_request_replaces_focus_request() {
        let mut f = FocusTracker::new();
        f.begin_focus(FocusKind::Mouse, 0);
        assert!(f.begin_blur());
        assert!(!f.begin_blur());
        f.resolve_blur();
        assert_eq!(f.transition(), FocusTransition::Idle);
    }
}
