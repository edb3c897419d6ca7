// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The 30-minute gap rule.
//!
//! A selection must not strand an unbookable 30-minute sliver between
//! itself and an existing booking: slivers that small can never satisfy
//! the one-hour minimum, so the court would sit idle. The rule checks the
//! nearest booking on each side of a candidate selection and flags the
//! selection when either neighbor sits exactly one slot away.
//!
//! Whether the flag blocks reservation is a configuration choice in the
//! selection engine; this module only computes it.

use crate::availability::BookedRange;
use crate::types::{SLOT_MINUTES, TimeRange};

/// Whether the candidate selection leaves an exact 30-minute gap next to
/// an existing booking.
///
/// The nearest slot-holding booked range ending at or before the
/// selection start and the nearest one starting at or after the
/// selection end are each tested; a separation of exactly one slot (no
/// more, no less) on either side flags the selection. Cancelled
/// bookings do not hold their slot and are ignored.
///
/// # Arguments
///
/// * `booked` - The court's booked ranges for the date
/// * `selection` - The candidate selection span
#[must_use]
pub fn leaves_half_hour_gap(booked: &[BookedRange], selection: TimeRange) -> bool {
    let gap: i32 = i32::from(SLOT_MINUTES);

    let previous_end = booked
        .iter()
        .filter(|b| b.holds_slot())
        .map(|b| b.range.end)
        .filter(|end| *end <= selection.start)
        .max();
    if let Some(end) = previous_end {
        if end.minutes_until(selection.start) == gap {
            return true;
        }
    }

    let next_start = booked
        .iter()
        .filter(|b| b.holds_slot())
        .map(|b| b.range.start)
        .filter(|start| *start >= selection.end)
        .min();
    if let Some(start) = next_start {
        if selection.end.minutes_until(start) == gap {
            return true;
        }
    }

    false
}
