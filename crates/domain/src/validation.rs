// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-level validation shared by the selection engine and the API
//! boundary.

use crate::error::DomainError;
use crate::types::{TimeOfDay, TimeRange};

/// Validates that a candidate booking span is well formed.
///
/// A span must be slot-aligned at both edges, run forward within a single
/// day, and meet the minimum duration.
///
/// # Arguments
///
/// * `start` - The span start
/// * `end` - The span end (may be the `24:00` sentinel)
/// * `min_duration_minutes` - The minimum bookable duration
///
/// # Errors
///
/// Returns an error if either edge is unaligned, the span is empty or
/// inverted, or the duration is below the minimum.
pub fn validate_booking_span(
    start: TimeOfDay,
    end: TimeOfDay,
    min_duration_minutes: u16,
) -> Result<TimeRange, DomainError> {
    if !start.is_slot_aligned() {
        return Err(DomainError::UnalignedTime { time: start });
    }
    if !end.is_slot_aligned() {
        return Err(DomainError::UnalignedTime { time: end });
    }
    let range: TimeRange = TimeRange::new(start, end)?;
    if range.duration_minutes() < min_duration_minutes {
        return Err(DomainError::SelectionTooShort {
            minutes: range.duration_minutes(),
            minimum: min_duration_minutes,
        });
    }
    Ok(range)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn at(h: u16, m: u16) -> TimeOfDay {
        TimeOfDay::from_hm(h, m).unwrap()
    }

    #[test]
    fn test_valid_span() {
        let range = validate_booking_span(at(9, 0), at(10, 0), 60).unwrap();
        assert_eq!(range.duration_minutes(), 60);
    }

    #[test]
    fn test_unaligned_edge_rejected() {
        let err = validate_booking_span(at(9, 15), at(10, 15), 60).unwrap_err();
        assert_eq!(err, DomainError::UnalignedTime { time: at(9, 15) });
    }

    #[test]
    fn test_inverted_span_rejected() {
        let err = validate_booking_span(at(10, 0), at(9, 0), 60).unwrap_err();
        assert!(matches!(err, DomainError::InvertedRange { .. }));
    }

    #[test]
    fn test_too_short_rejected() {
        let err = validate_booking_span(at(9, 0), at(9, 30), 60).unwrap_err();
        assert_eq!(
            err,
            DomainError::SelectionTooShort {
                minutes: 30,
                minimum: 60
            }
        );
    }

    #[test]
    fn test_sentinel_end_accepted() {
        let range = validate_booking_span(at(23, 0), TimeOfDay::END_OF_DAY, 60).unwrap();
        assert_eq!(range.duration_minutes(), 60);
    }
}
