// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide input bus shared by every interactive instance in a document.
//!
//! A document needs one set of real listeners, not one per element. The bus
//! owns what those listeners feed:
//!
//! - the [`RecentInput`] record used by classification;
//! - the subscription registry, whose [`Lifecycle`] tells the host when to
//!   install its document listeners (first subscriber) and when to remove them
//!   (last unsubscription);
//! - a hold count for document-wide text-selection suppression, so selection
//!   comes back only once no instance needs it suppressed.
//!
//! The bus holds no callbacks. Fan-out to instances is done by whoever owns both
//! the bus and the instances.
//!
//! ```
//! use understory_interactive::bus::{InputBus, Lifecycle};
//!
//! let mut bus = InputBus::default();
//! let (a, lifecycle) = bus.subscribe();
//! assert_eq!(lifecycle, Lifecycle::Started);
//! let (b, lifecycle) = bus.subscribe();
//! assert_eq!(lifecycle, Lifecycle::Unchanged);
//!
//! assert_eq!(bus.unsubscribe(a), Lifecycle::Unchanged);
//! assert_eq!(bus.unsubscribe(b), Lifecycle::Stopped);
//! ```

use hashbrown::HashSet;

use crate::event::InputEvent;
use crate::modality::{InputModality, RecentInput, event_from};

/// Handle for one bus subscription.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// The raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// What a subscription change means for the host's document listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// The first subscriber arrived: install document listeners.
    Started,
    /// Listeners stay as they are.
    Unchanged,
    /// The last subscriber left: remove document listeners.
    Stopped,
}

/// Shared document-level input state.
#[derive(Clone, Debug, Default)]
pub struct InputBus {
    recent: RecentInput,
    subscribers: HashSet<SubscriptionId>,
    next_id: u64,
    selection_holds: usize,
}

impl InputBus {
    /// Create a bus whose recent-touch window lasts `recent_touch_ms`.
    #[must_use]
    pub fn new(recent_touch_ms: u64) -> Self {
        Self {
            recent: RecentInput::new(recent_touch_ms),
            ..Self::default()
        }
    }

    /// Register an instance.
    pub fn subscribe(&mut self) -> (SubscriptionId, Lifecycle) {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        let lifecycle = if self.subscribers.is_empty() {
            log::debug!("input bus started");
            Lifecycle::Started
        } else {
            Lifecycle::Unchanged
        };
        self.subscribers.insert(id);
        (id, lifecycle)
    }

    /// Remove a registration. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Lifecycle {
        if self.subscribers.remove(&id) && self.subscribers.is_empty() {
            log::debug!("input bus stopped");
            Lifecycle::Stopped
        } else {
            Lifecycle::Unchanged
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Document listeners should be installed.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        !self.subscribers.is_empty()
    }

    /// Record a document-level event and classify it.
    pub fn record(&mut self, event: &InputEvent) -> InputModality {
        self.recent.record(event);
        event_from(event, &self.recent)
    }

    /// The recent-input record.
    #[must_use]
    pub fn recent(&self) -> &RecentInput {
        &self.recent
    }

    /// Take a text-selection suppression hold.
    ///
    /// Returns `true` when this hold starts suppression and the host must apply
    /// the document-wide style.
    pub fn suppress_text_selection(&mut self) -> bool {
        self.selection_holds += 1;
        self.selection_holds == 1
    }

    /// Release a hold.
    ///
    /// Returns `true` when the last hold was released and the host must restore
    /// text selection. Releasing with no holds is a no-op.
    pub fn release_text_selection(&mut self) -> bool {
        match self.selection_holds {
            0 => false,
            n => {
                self.selection_holds = n - 1;
                self.selection_holds == 0
            }
        }
    }

    /// Some instance currently suppresses text selection.
    #[must_use]
    pub fn text_selection_suppressed(&self) -> bool {
        self.selection_holds > 0
    }

    /// When the recent-touch window closes, if one is open.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.recent.touch_deadline()
    }

    /// Close the recent-touch window if it has expired.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        self.recent.expire(now_ms)
    }
}
