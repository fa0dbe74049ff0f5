// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap disambiguation: was a touch sequence a tap, and with how many fingers?
//!
//! A sequence starts with the first `touchstart` on the element and ends when
//! the last touch on the element lifts. It is a tap when it was short, no
//! point moved beyond tolerance, and no simultaneous touch happened elsewhere
//! on the page.
//!
//! ## Usage
//!
//! Feed every touch event on the element to [`TapTracker::touch`]. It returns a
//! [`TapCount`] when a sequence ends as a tap.
//!
//! ```
//! use kurbo::Point;
//! use understory_interactive::event::{InputEvent, EventKind, TouchPhase, TouchPoint};
//! use understory_interactive::tap::{TapCount, TapTracker};
//! use understory_interactive::timing::Timing;
//!
//! let timing = Timing::default();
//! let mut taps = TapTracker::new();
//!
//! let start = InputEvent::touch(TouchPhase::Start, [TouchPoint::new(7, Point::new(100.0, 100.0))], 1, 1, 0);
//! let end = InputEvent::touch(TouchPhase::End, [TouchPoint::new(7, Point::new(105.0, 103.0))], 0, 0, 120);
//!
//! for event in [&start, &end] {
//!     let EventKind::Touch(touch) = &event.kind else { unreachable!() };
//!     if let Some(count) = taps.touch(touch, event.time_ms, &timing) {
//!         assert_eq!(count, TapCount::One);
//!     }
//! }
//! ```

use hashbrown::HashMap;
use kurbo::Point;

use crate::event::{TouchEvent, TouchPhase};
use crate::timing::Timing;

/// How many fingers a recognised tap used.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TapCount {
    /// A single-finger tap; also produces a normalised click.
    One,
    /// A two-finger tap.
    Two,
    /// A three-finger tap.
    Three,
    /// A four-finger tap.
    Four,
}

impl TapCount {
    /// Map a touch point count to a tap count. Five or more fingers is not a tap.
    #[must_use]
    pub const fn from_points(points: usize) -> Option<Self> {
        match points {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Number of fingers.
    #[must_use]
    pub const fn fingers(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct TrackedPoint {
    start: Point,
    end: Point,
}

impl TrackedPoint {
    fn within(&self, tolerance: f64) -> bool {
        (self.end.x - self.start.x).abs() < tolerance && (self.end.y - self.start.y).abs() < tolerance
    }
}

/// Tracks one touch sequence on an element.
#[derive(Clone, Debug, Default)]
pub struct TapTracker {
    points: HashMap<u64, TrackedPoint>,
    start_time: Option<u64>,
    canceled: bool,
}

impl TapTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_time.is_some()
    }

    /// The current sequence can no longer become a tap.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.canceled
    }

    /// Number of touch points seen in the current sequence.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Feed a touch event targeting the element.
    ///
    /// Returns the tap count when this event ends a sequence that qualifies.
    pub fn touch(&mut self, event: &TouchEvent, time_ms: u64, timing: &Timing) -> Option<TapCount> {
        match event.phase {
            TouchPhase::Start => {
                self.start(event, time_ms);
                None
            }
            TouchPhase::Move => {
                self.update_ends(event);
                None
            }
            TouchPhase::End => {
                self.update_ends(event);
                if event.target_touches == 0 {
                    self.finish(time_ms, timing)
                } else {
                    None
                }
            }
            TouchPhase::Cancel => {
                self.reset();
                None
            }
        }
    }

    /// Mark the current sequence as not-a-tap (for example, a touch started elsewhere).
    pub fn cancel(&mut self) {
        if self.is_tracking() {
            self.canceled = true;
        }
    }

    /// Forget the current sequence.
    pub fn reset(&mut self) {
        self.points.clear();
        self.start_time = None;
        self.canceled = false;
    }

    fn start(&mut self, event: &TouchEvent, time_ms: u64) {
        if self.start_time.is_none() {
            self.start_time = Some(time_ms);
        }
        if event.target_touches != event.page_touches {
            self.canceled = true;
        }
        for point in &event.changed {
            self.points.insert(
                point.id,
                TrackedPoint {
                    start: point.position,
                    end: point.position,
                },
            );
        }
    }

    fn update_ends(&mut self, event: &TouchEvent) {
        for point in &event.changed {
            if let Some(tracked) = self.points.get_mut(&point.id) {
                tracked.end = point.position;
            }
        }
    }

    fn finish(&mut self, time_ms: u64, timing: &Timing) -> Option<TapCount> {
        let qualifies = match self.start_time {
            Some(start) if !self.canceled => {
                let tolerance = timing.tap_tolerance_for(self.points.len());
                time_ms.saturating_sub(start) < timing.tap_max_duration_ms
                    && self.points.values().all(|p| p.within(tolerance))
            }
            _ => false,
        };
        let count = if qualifies {
            TapCount::from_points(self.points.len())
        } else {
            None
        };
        self.reset();
        count
    }
}
