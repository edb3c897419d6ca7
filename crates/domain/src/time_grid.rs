// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed 30-minute display grid.
//!
//! The grid is derived, never stored: an operating window expands into an
//! ordered sequence of slot boundaries, and every other computation
//! (classification, selection, announcements) is keyed off those
//! boundaries.
//!
//! ## Invariants
//!
//! - Boundaries step by exactly 30 minutes
//! - Both `open` and `close` appear in the output (`N + 1` boundaries for
//!   `N` slots)
//! - The `24:00` sentinel is a valid `close` and sorts last

use crate::types::{SLOT_MINUTES, TimeOfDay};

/// Enumerates the slot boundaries of an operating window.
///
/// Inputs are trusted to be slot-aligned with `open < close`; a window
/// that violates this yields the degenerate single-boundary sequence
/// `[open]`.
///
/// # Arguments
///
/// * `open` - The first boundary (inclusive)
/// * `close` - The last boundary (inclusive, may be `24:00`)
///
/// # Returns
///
/// The ordered boundary sequence. `enumerate_slots(00:00, 24:00)` yields
/// 49 boundaries describing 48 slots.
#[must_use]
pub fn enumerate_slots(open: TimeOfDay, close: TimeOfDay) -> Vec<TimeOfDay> {
    let mut boundaries: Vec<TimeOfDay> = Vec::new();
    let mut cursor: TimeOfDay = open;
    while cursor < close {
        boundaries.push(cursor);
        match cursor.add_half_hour() {
            Some(next) => cursor = next,
            None => break,
        }
    }
    boundaries.push(close);
    boundaries
}

/// Number of whole slots between two aligned boundaries.
#[must_use]
pub fn slot_count(open: TimeOfDay, close: TimeOfDay) -> usize {
    let minutes: i32 = open.minutes_until(close);
    if minutes <= 0 {
        0
    } else {
        minutes.unsigned_abs() as usize / usize::from(SLOT_MINUTES)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_full_day_has_49_boundaries() {
        let boundaries = enumerate_slots(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY);
        assert_eq!(boundaries.len(), 49);
        assert_eq!(boundaries[0], TimeOfDay::MIDNIGHT);
        assert_eq!(*boundaries.last().unwrap(), TimeOfDay::END_OF_DAY);
    }

    #[test]
    fn test_boundaries_are_monotonic() {
        let boundaries = enumerate_slots(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY);
        for pair in boundaries.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].minutes_until(pair[1]), 30);
        }
    }

    #[test]
    fn test_partial_window() {
        let boundaries = enumerate_slots(at(8, 0), at(10, 0));
        assert_eq!(
            boundaries,
            vec![at(8, 0), at(8, 30), at(9, 0), at(9, 30), at(10, 0)]
        );
    }

    #[test]
    fn test_sentinel_sorts_after_all_boundaries() {
        let boundaries = enumerate_slots(at(22, 0), TimeOfDay::END_OF_DAY);
        assert!(boundaries.iter().all(|b| *b <= TimeOfDay::END_OF_DAY));
        assert_eq!(*boundaries.last().unwrap(), TimeOfDay::END_OF_DAY);
    }

    #[test]
    fn test_slot_count() {
        assert_eq!(slot_count(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY), 48);
        assert_eq!(slot_count(at(8, 0), at(9, 0)), 2);
        assert_eq!(slot_count(at(9, 0), at(9, 0)), 0);
    }
}
