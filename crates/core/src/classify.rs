// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot classification against an availability snapshot.
//!
//! Classification is recomputed per render from the current snapshot;
//! nothing here is stored. Booked takes precedence over Past: a slot that
//! is both is still "booked" semantically, though neither is selectable.

use arena_book_domain::{AvailabilitySnapshot, CourtId, TimeOfDay, TimeRange};
use chrono::{NaiveDate, NaiveDateTime};

/// The clock inputs classification depends on.
///
/// `date` is the date being displayed; `today` and `now` describe the
/// wall clock. Carrying them explicitly keeps classification a pure
/// function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayContext {
    /// The calendar date on display.
    pub date: NaiveDate,
    /// Today's calendar date.
    pub today: NaiveDate,
    /// The current time of day.
    pub now: TimeOfDay,
}

impl DayContext {
    /// Creates a new context from explicit clock inputs.
    #[must_use]
    pub const fn new(date: NaiveDate, today: NaiveDate, now: TimeOfDay) -> Self {
        Self { date, today, now }
    }

    /// Creates a context for a displayed date from a wall-clock instant.
    #[must_use]
    pub fn at(date: NaiveDate, wall_clock: NaiveDateTime) -> Self {
        Self {
            date,
            today: wall_clock.date(),
            now: TimeOfDay::from_naive(wall_clock.time()),
        }
    }

    /// Whether a slot starting at `t` has already passed.
    #[must_use]
    pub fn slot_is_past(&self, t: TimeOfDay) -> bool {
        self.date < self.today || (self.date == self.today && t < self.now)
    }
}

/// Classification of a single 30-minute slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// A booked range intersects the slot.
    Booked,
    /// The slot's start lies in the past. Rendered distinctly, never
    /// clickable.
    Past,
    /// The slot is open for selection.
    Free,
}

impl SlotStatus {
    /// Whether a slot with this status may start or extend a selection.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Free)
    }
}

/// Classifies the slot `[t, next)` against a snapshot.
///
/// # Arguments
///
/// * `snapshot` - The court's availability for the displayed date
/// * `ctx` - The clock inputs
/// * `t` - The slot start boundary
/// * `next` - The slot end boundary
#[must_use]
pub fn classify_slot(
    snapshot: &AvailabilitySnapshot,
    ctx: &DayContext,
    t: TimeOfDay,
    next: TimeOfDay,
) -> SlotStatus {
    if snapshot.is_booked_at(t, next) {
        SlotStatus::Booked
    } else if ctx.slot_is_past(t) {
        SlotStatus::Past
    } else {
        SlotStatus::Free
    }
}

/// Whether every constituent slot of `span` is simultaneously free and
/// non-past.
///
/// Used for preset duration options and the submit-time re-check; a span
/// qualifies only when each of its 30-minute slots classifies as `Free`.
#[must_use]
pub fn is_span_free(snapshot: &AvailabilitySnapshot, ctx: &DayContext, span: TimeRange) -> bool {
    let mut cursor: TimeOfDay = span.start;
    while cursor < span.end {
        let Some(next) = cursor.add_half_hour() else {
            return false;
        };
        if classify_slot(snapshot, ctx, cursor, next) != SlotStatus::Free {
            return false;
        }
        cursor = next;
    }
    true
}

/// Whether a selection span is still fully contained in the snapshot's
/// free ranges.
///
/// This is the refresh-reconciliation test: it ignores the clock (a
/// selection made moments ago does not become invalid merely by time
/// passing mid-session) and checks containment against the freshly
/// installed free ranges.
#[must_use]
pub fn span_still_free(snapshot: &AvailabilitySnapshot, court_id: CourtId, span: TimeRange) -> bool {
    snapshot.court.id == court_id && snapshot.span_is_free(span)
}
