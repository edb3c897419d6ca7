// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability snapshots and free-range derivation.
//!
//! A snapshot is the full booked/free state for one court and one date as
//! of the last fetch. Snapshots are replaced wholesale on every refresh;
//! there is no incremental patching.

use crate::types::{BookingStatus, Court, TimeOfDay, TimeRange};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A booked interval with its owner label.
///
/// The backend may include cancelled bookings in a snapshot; a
/// cancelled booking does not hold its slot and is ignored by every
/// availability computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedRange {
    /// The booked interval.
    #[serde(flatten)]
    pub range: TimeRange,
    /// The booking status as reported by the backend.
    pub status: BookingStatus,
    /// The customer the slot is held for.
    pub customer_name: String,
}

impl BookedRange {
    /// Whether this booking currently holds its slot.
    #[must_use]
    pub const fn holds_slot(&self) -> bool {
        !matches!(self.status, BookingStatus::Cancelled)
    }
}

/// The booked/free state for one court on one date.
///
/// Booked ranges are assumed non-overlapping as provided by the backend;
/// the engine does not deduplicate them. Free ranges are merged only when
/// generating announcement text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySnapshot {
    /// The court this snapshot describes.
    pub court: Court,
    /// The calendar date this snapshot describes.
    pub date: NaiveDate,
    /// Booked intervals, ordered by start.
    pub booked: Vec<BookedRange>,
    /// Free intervals, ordered by start.
    pub free: Vec<TimeRange>,
}

impl AvailabilitySnapshot {
    /// Whether any slot-holding booked range intersects the slot
    /// `[t, next)`.
    #[must_use]
    pub fn is_booked_at(&self, t: TimeOfDay, next: TimeOfDay) -> bool {
        self.booked
            .iter()
            .any(|b| b.holds_slot() && b.range.intersects(t, next))
    }

    /// Whether the span `[start, end)` lies entirely inside the free
    /// ranges.
    ///
    /// Free ranges are merged before the containment test, so a span that
    /// straddles two touching free ranges still counts as free.
    #[must_use]
    pub fn span_is_free(&self, span: TimeRange) -> bool {
        merge_ranges(&self.free).iter().any(|r| r.contains(span))
    }
}

/// Derives the free ranges of an operating window from its bookings.
///
/// This is the cursor sweep the backend performs when building a
/// snapshot: bookings are visited in start order and the gaps between
/// them become free ranges. Cancelled bookings do not hold their slot and
/// are skipped.
///
/// # Arguments
///
/// * `open` - Window start (inclusive)
/// * `close` - Window end (exclusive)
/// * `booked` - Booked ranges, in any order
#[must_use]
pub fn compute_free_ranges(
    open: TimeOfDay,
    close: TimeOfDay,
    booked: &[BookedRange],
) -> Vec<TimeRange> {
    let mut holding: Vec<&BookedRange> = booked.iter().filter(|b| b.holds_slot()).collect();
    holding.sort_by_key(|b| b.range.start);

    let mut free: Vec<TimeRange> = Vec::new();
    let mut cursor: TimeOfDay = open;
    for booking in holding {
        if cursor < booking.range.start {
            if let Ok(range) = TimeRange::new(cursor, booking.range.start) {
                free.push(range);
            }
        }
        if cursor < booking.range.end {
            cursor = booking.range.end;
        }
    }
    if cursor < close {
        if let Ok(range) = TimeRange::new(cursor, close) {
            free.push(range);
        }
    }
    free
}

/// Merges overlapping or touching ranges.
///
/// Ranges are sorted by start and coalesced whenever the next range
/// starts at or before the current range's end.
#[must_use]
pub fn merge_ranges(ranges: &[TimeRange]) -> Vec<TimeRange> {
    let mut sorted: Vec<TimeRange> = ranges.to_vec();
    sorted.sort_by_key(|r| r.start);

    let mut merged: Vec<TimeRange> = Vec::new();
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                if range.end > last.end {
                    last.end = range.end;
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}
