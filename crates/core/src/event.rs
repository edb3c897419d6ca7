// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use arena_book_domain::{CourtId, TimeRange};

/// The user's in-progress, not-yet-submitted candidate booking span.
///
/// Exactly one selection may be active at a time, scoped to one court.
/// Selections are pure in-memory state, rebuilt from scratch each time
/// the grid mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// The court the selection is bound to.
    pub court_id: CourtId,
    /// The selected span.
    pub span: TimeRange,
}

/// Emitted to the host application on every selection transition so it
/// can drive confirm/cancel affordances and warning banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// The selection after the transition, if any.
    pub selection: Option<Selection>,
    /// Whether the selection is eligible for booking.
    pub valid: bool,
    /// Whether the selection leaves a 30-minute sliver next to an
    /// existing booking. Always `false` when the gap rule is not
    /// enforced.
    pub leaves_gap: bool,
}

impl SelectionChange {
    /// The change emitted when the selection is cleared.
    #[must_use]
    pub const fn cleared() -> Self {
        Self {
            selection: None,
            valid: false,
            leaves_gap: false,
        }
    }
}

/// Warning categories reported when reservation is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveWarning {
    /// The current selection is not valid; the user should pick one of
    /// the offered durations. Self-dismisses in the UI (the timer is a
    /// host concern) and is distinct from the gap-violation warning.
    PickOfferedDuration,
}

/// The outcome of a reserve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveOutcome {
    /// The selection is valid; the host may navigate to the booking flow.
    Proceed(Selection),
    /// The attempt is blocked; no navigation occurs.
    Blocked(ReserveWarning),
}

/// A preset duration option offered from a chosen start slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationOption {
    /// The option length in minutes.
    pub minutes: u16,
    /// Whether every constituent slot is simultaneously free and
    /// non-past.
    pub available: bool,
    /// The quoted price in bani for this option.
    pub price_bani: i64,
}
