// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing constants and host-agnostic deadlines.
//!
//! The engine never owns a timer. It records deadlines as absolute timestamps;
//! the host asks for the earliest one with [`Deadlines::next`], arms a single
//! platform timer, and calls back into the engine when it fires. Cancelling a
//! deadline is just clearing it.
//!
//! The default constants are empirically tuned for current browsers and are
//! approximate; they are exposed through [`Timing`] so embedders can retune them.

use crate::error::ConfigError;

/// Longest touch sequence, in milliseconds, that still counts as a tap.
pub const TAP_MAX_DURATION_MS: u64 = 500;

/// Base movement tolerance, in pixels, for a touch point in a tap.
pub const TAP_TOLERANCE: f64 = 15.0;

/// Extra tolerance, in pixels, granted per simultaneous touch point.
pub const TAP_TOLERANCE_PER_POINT: f64 = 3.0;

/// Fallback exit for `touchActive` when no end event arrives.
pub const TOUCH_ACTIVE_TIMEOUT_MS: u64 = 750;

/// How long after touch activity mouse events are treated as touch noise.
///
/// This window is document-wide: it is owned by the
/// [`RecentInput`](crate::modality::RecentInput) record on the input bus, and
/// instances read it from there for click swallowing as well.
pub const RECENT_TOUCH_MS: u64 = 600;

/// How long a focus request made through `Element::focus` waits for its focus
/// event before later focus events are classified on their own again.
pub const PENDING_FOCUS_MS: u64 = 100;

/// Delay before document text selection is restored after extended touch-active.
pub const TEXT_SELECTION_RESTORE_MS: u64 = 100;

/// Tunable timing and tolerance constants.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timing {
    /// See [`TAP_MAX_DURATION_MS`].
    pub tap_max_duration_ms: u64,
    /// See [`TAP_TOLERANCE`].
    pub tap_tolerance: f64,
    /// See [`TAP_TOLERANCE_PER_POINT`].
    pub tap_tolerance_per_point: f64,
    /// See [`TOUCH_ACTIVE_TIMEOUT_MS`].
    pub touch_active_timeout_ms: u64,
    /// See [`TEXT_SELECTION_RESTORE_MS`].
    pub text_selection_restore_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
            tap_tolerance: TAP_TOLERANCE,
            tap_tolerance_per_point: TAP_TOLERANCE_PER_POINT,
            touch_active_timeout_ms: TOUCH_ACTIVE_TIMEOUT_MS,
            text_selection_restore_ms: TEXT_SELECTION_RESTORE_MS,
        }
    }
}

impl Timing {
    /// The movement tolerance for a sequence with `points` simultaneous touches.
    #[must_use]
    pub fn tap_tolerance_for(&self, points: usize) -> f64 {
        let points = u32::try_from(points).map_or(f64::from(u32::MAX), f64::from);
        self.tap_tolerance + self.tap_tolerance_per_point * points
    }

    /// Check that every duration is non-zero and every tolerance finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let durations = [
            ("tap_max_duration_ms", self.tap_max_duration_ms),
            ("touch_active_timeout_ms", self.touch_active_timeout_ms),
            ("text_selection_restore_ms", self.text_selection_restore_ms),
        ];
        for (field, value) in durations {
            if value == 0 {
                return Err(ConfigError::InvalidTiming { field });
            }
        }
        let tolerances = [
            ("tap_tolerance", self.tap_tolerance),
            ("tap_tolerance_per_point", self.tap_tolerance_per_point),
        ];
        for (field, value) in tolerances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTiming { field });
            }
        }
        Ok(())
    }
}

/// A deferred engine action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Force `touchActive` off if no end event arrived.
    TouchActiveExit,
    /// Give document text selection back after extended touch-active.
    TextSelectionRestore,
}

/// Pending deadlines of one interactive instance.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Deadlines {
    touch_active_exit: Option<u64>,
    text_selection_restore: Option<u64>,
}

impl Deadlines {
    /// Arm (or re-arm) a deadline.
    pub fn set(&mut self, kind: TimerKind, at_ms: u64) {
        *self.slot(kind) = Some(at_ms);
    }

    /// Cancel a deadline. Returns `true` if one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.slot(kind).take().is_some()
    }

    /// When `kind` fires, if armed.
    #[must_use]
    pub fn get(&self, kind: TimerKind) -> Option<u64> {
        match kind {
            TimerKind::TouchActiveExit => self.touch_active_exit,
            TimerKind::TextSelectionRestore => self.text_selection_restore,
        }
    }

    /// The earliest armed deadline.
    #[must_use]
    pub fn next(&self) -> Option<u64> {
        match (self.touch_active_exit, self.text_selection_restore) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Disarm and return `kind` if it is due at `now_ms`.
    pub fn take_due(&mut self, kind: TimerKind, now_ms: u64) -> bool {
        let slot = self.slot(kind);
        if slot.is_some_and(|at| at <= now_ms) {
            *slot = None;
            true
        } else {
            false
        }
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&mut self, kind: TimerKind) -> &mut Option<u64> {
        match kind {
            TimerKind::TouchActiveExit => &mut self.touch_active_exit,
            TimerKind::TextSelectionRestore => &mut self.text_selection_restore,
        }
    }
}
