// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The selection state machine.
//!
//! Tracks the in-progress `(court, start, end)` selection, applies
//! contiguous-extension and business-rule validation on every candidate
//! change, and emits a [`SelectionChange`] for the host on each
//! transition.
//!
//! ## Invariants
//!
//! - At most one selection is active, bound to one court
//! - Edges are always slot-aligned and `start < end`
//! - Clicking a booked or past slot never mutates state
//! - A non-contiguous click never leaves two disjoint selections: the
//!   existing one is cleared and the click starts fresh

use crate::classify::{DayContext, SlotStatus, classify_slot, is_span_free};
use crate::config::{GridConfig, OFFERED_DURATIONS};
use crate::error::CoreError;
use crate::event::{DurationOption, ReserveOutcome, ReserveWarning, Selection, SelectionChange};
use arena_book_domain::{AvailabilitySnapshot, TimeOfDay, TimeRange, leaves_half_hour_gap};

/// The selection state machine.
///
/// States are `Empty` (no selection) and `Pending` (an active
/// `(court, start, end)` span with derived validity flags).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    config: GridConfig,
    selection: Option<Selection>,
    valid: bool,
    leaves_gap: bool,
}

impl SelectionEngine {
    /// Creates an empty engine with the given configuration.
    #[must_use]
    pub const fn new(config: GridConfig) -> Self {
        Self {
            config,
            selection: None,
            valid: false,
            leaves_gap: false,
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Returns the active selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Whether the active selection is eligible for booking.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Handles a click on the slot starting at `t` of the snapshot's
    /// court.
    ///
    /// Clicking a booked or past slot is a no-op and returns `None`.
    /// Otherwise the selection is started fresh, extended at a contiguous
    /// edge, or restarted at the clicked slot, and the resulting
    /// [`SelectionChange`] is returned.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - The clicked court's availability
    /// * `ctx` - The clock inputs
    /// * `t` - The clicked slot's start boundary
    pub fn click_slot(
        &mut self,
        snapshot: &AvailabilitySnapshot,
        ctx: &DayContext,
        t: TimeOfDay,
    ) -> Option<SelectionChange> {
        let next: TimeOfDay = t.add_half_hour()?;
        if classify_slot(snapshot, ctx, t, next) != SlotStatus::Free {
            return None;
        }

        let court_id = snapshot.court.id;
        let extended: Option<TimeRange> = match &self.selection {
            Some(sel) if sel.court_id == court_id && t == sel.span.end => {
                TimeRange::new(sel.span.start, next).ok()
            }
            Some(sel) if sel.court_id == court_id && next == sel.span.start => {
                TimeRange::new(t, sel.span.end).ok()
            }
            _ => None,
        };

        // Any non-contiguous click (or court change) starts fresh; the
        // previous selection is dropped, never kept alongside
        let span: TimeRange = match extended {
            Some(span) => span,
            None => TimeRange::new(t, next).ok()?,
        };

        Some(self.install(snapshot, Selection { court_id, span }))
    }

    /// Sets the selection to `[start, start + minutes)` via the preset
    /// duration path.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - The court's availability
    /// * `ctx` - The clock inputs
    /// * `start` - The chosen start slot boundary
    /// * `minutes` - One of the offered durations (60, 90, 120)
    ///
    /// # Errors
    ///
    /// Returns an error if the duration is not an offered option or the
    /// span is not free and non-past for its whole length.
    pub fn choose_duration(
        &mut self,
        snapshot: &AvailabilitySnapshot,
        ctx: &DayContext,
        start: TimeOfDay,
        minutes: u16,
    ) -> Result<SelectionChange, CoreError> {
        if !OFFERED_DURATIONS.contains(&minutes) {
            return Err(CoreError::UnsupportedDuration { minutes });
        }
        let span: TimeRange = span_from_start(start, minutes).ok_or(CoreError::SpanUnavailable {
            start,
            end: TimeOfDay::END_OF_DAY,
        })?;
        if !is_span_free(snapshot, ctx, span) {
            return Err(CoreError::SpanUnavailable {
                start: span.start,
                end: span.end,
            });
        }
        Ok(self.install(
            snapshot,
            Selection {
                court_id: snapshot.court.id,
                span,
            },
        ))
    }

    /// Reports availability and price for each offered duration from a
    /// chosen start slot.
    #[must_use]
    pub fn duration_options(
        &self,
        snapshot: &AvailabilitySnapshot,
        ctx: &DayContext,
        start: TimeOfDay,
    ) -> Vec<DurationOption> {
        OFFERED_DURATIONS
            .iter()
            .map(|&minutes| {
                let available: bool = span_from_start(start, minutes)
                    .is_some_and(|span| is_span_free(snapshot, ctx, span));
                let price_bani: i64 =
                    snapshot.court.price_per_hour_bani * i64::from(minutes) / 60;
                DurationOption {
                    minutes,
                    available,
                    price_bani,
                }
            })
            .collect()
    }

    /// Clears the selection.
    ///
    /// Fired on the external clear signal, on date changes, and after a
    /// refresh invalidates the active span.
    pub fn clear(&mut self) -> SelectionChange {
        self.selection = None;
        self.valid = false;
        self.leaves_gap = false;
        SelectionChange::cleared()
    }

    /// Re-validates the active selection against a freshly installed
    /// snapshot.
    ///
    /// Returns `None` when the snapshot concerns another court or nothing
    /// changed. A selection whose span is no longer free is cleared; one
    /// that survives has its validity flags recomputed against the new
    /// booked ranges.
    pub fn reconcile(&mut self, snapshot: &AvailabilitySnapshot) -> Option<SelectionChange> {
        let sel: Selection = *self.selection.as_ref()?;
        if sel.court_id != snapshot.court.id {
            return None;
        }
        if !snapshot.span_is_free(sel.span) {
            return Some(self.clear());
        }
        let (valid, leaves_gap) = self.evaluate(snapshot, sel.span);
        if valid == self.valid && leaves_gap == self.leaves_gap {
            return None;
        }
        self.valid = valid;
        self.leaves_gap = leaves_gap;
        Some(SelectionChange {
            selection: Some(sel),
            valid,
            leaves_gap,
        })
    }

    /// Attempts to proceed to booking with the current selection.
    ///
    /// An invalid (or absent) selection never navigates forward; it
    /// surfaces the pick-a-duration warning instead.
    #[must_use]
    pub fn try_reserve(&self) -> ReserveOutcome {
        match &self.selection {
            Some(sel) if self.valid => ReserveOutcome::Proceed(*sel),
            _ => ReserveOutcome::Blocked(ReserveWarning::PickOfferedDuration),
        }
    }

    /// Installs a selection and recomputes its validity flags.
    fn install(&mut self, snapshot: &AvailabilitySnapshot, selection: Selection) -> SelectionChange {
        let (valid, leaves_gap) = self.evaluate(snapshot, selection.span);
        self.selection = Some(selection);
        self.valid = valid;
        self.leaves_gap = leaves_gap;
        SelectionChange {
            selection: Some(selection),
            valid,
            leaves_gap,
        }
    }

    /// Computes `(valid, leaves_gap)` for a span.
    ///
    /// With the gap rule disabled the flag is unconditionally `false`, so
    /// neither validity nor the host's gap warning is affected — the call
    /// sites stay wired either way.
    fn evaluate(&self, snapshot: &AvailabilitySnapshot, span: TimeRange) -> (bool, bool) {
        let meets_min_duration: bool =
            span.duration_minutes() >= self.config.min_duration_minutes;
        let leaves_gap: bool =
            self.config.enforce_gap_rule && leaves_half_hour_gap(&snapshot.booked, span);
        (meets_min_duration && !leaves_gap, leaves_gap)
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

/// Builds the span `[start, start + minutes)`, or `None` past end of
/// day.
fn span_from_start(start: TimeOfDay, minutes: u16) -> Option<TimeRange> {
    let mut end: TimeOfDay = start;
    let mut remaining: u16 = minutes;
    while remaining > 0 {
        end = end.add_half_hour()?;
        remaining = remaining.saturating_sub(30);
    }
    TimeRange::new(start, end).ok()
}
