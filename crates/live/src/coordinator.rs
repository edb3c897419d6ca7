// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Refresh coordination for the availability grid.
//!
//! Bookings change underneath an in-progress selection because other
//! clients book concurrently. The coordinator owns the installed
//! snapshot set for the displayed `(date, sport filter)` view, guards
//! installation with per-view fetch tokens so a stale response never
//! overwrites a newer one, and re-validates the active selection after
//! every installation.
//!
//! The host performs the actual network fetch: it calls [`RefreshCoordinator::begin_fetch`]
//! before issuing the request and [`RefreshCoordinator::complete_fetch`]
//! with the response. Redundant or out-of-order completions are
//! idempotent; the last valid snapshot wins.

use arena_book::{SelectionChange, SelectionEngine};
use arena_book_domain::{AvailabilitySnapshot, CourtId, Sport};
use chrono::NaiveDate;
use tracing::{debug, info};

/// The parameters identifying one availability fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchKey {
    /// The displayed date.
    pub date: NaiveDate,
    /// The displayed sport filter, if any.
    pub sport_filter: Option<Sport>,
}

/// A token issued per fetch. Completion is honored only for the latest
/// token of the currently displayed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken {
    key: FetchKey,
    serial: u64,
}

/// Notices surfaced to the user after a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshNotice {
    /// The selected court's span is no longer free; the selection was
    /// cleared.
    CourtUnavailable,
}

/// The result of offering a fetch response to the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The snapshots were installed.
    Installed {
        /// The selection transition caused by re-validation, if any.
        change: Option<SelectionChange>,
        /// A user-facing notice, if the selection was lost.
        notice: Option<RefreshNotice>,
    },
    /// The response was stale (superseded token or changed view) and was
    /// discarded.
    Stale,
}

/// Coordinates snapshot installation for one availability grid.
#[derive(Debug)]
pub struct RefreshCoordinator {
    view: FetchKey,
    latest_serial: u64,
    snapshots: Vec<AvailabilitySnapshot>,
    dirty: bool,
}

impl RefreshCoordinator {
    /// Creates a coordinator for an initial view with no snapshots
    /// installed yet.
    #[must_use]
    pub const fn new(view: FetchKey) -> Self {
        Self {
            view,
            latest_serial: 0,
            snapshots: Vec::new(),
            dirty: true,
        }
    }

    /// Returns the currently displayed view key.
    #[must_use]
    pub const fn view(&self) -> FetchKey {
        self.view
    }

    /// Returns the installed snapshots.
    #[must_use]
    pub fn snapshots(&self) -> &[AvailabilitySnapshot] {
        &self.snapshots
    }

    /// Returns the installed snapshot for one court, if present.
    #[must_use]
    pub fn snapshot_for(&self, court_id: CourtId) -> Option<&AvailabilitySnapshot> {
        self.snapshots.iter().find(|s| s.court.id == court_id)
    }

    /// Whether the installed snapshots may be stale and a re-fetch is
    /// due.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Marks the current view dirty in response to an invalidation
    /// receipt. The host should follow up with a fetch.
    pub fn invalidated(&mut self) {
        debug!(date = %self.view.date, "View marked dirty by invalidation");
        self.dirty = true;
    }

    /// Switches the displayed view.
    ///
    /// A changed date or sport filter invalidates every outstanding
    /// token for the previous view, drops its snapshots, and clears the
    /// selection. Returns the clearing change, or `None` if the key is
    /// unchanged.
    pub fn set_view(
        &mut self,
        view: FetchKey,
        engine: &mut SelectionEngine,
    ) -> Option<SelectionChange> {
        if view == self.view {
            return None;
        }
        info!(date = %view.date, "View changed");
        self.view = view;
        self.latest_serial += 1;
        self.snapshots.clear();
        self.dirty = true;
        Some(engine.clear())
    }

    /// Issues a token for a fetch of the current view. Any token issued
    /// earlier is superseded.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.latest_serial += 1;
        FetchToken {
            key: self.view,
            serial: self.latest_serial,
        }
    }

    /// Offers a completed fetch response.
    ///
    /// The snapshots are installed only when the token is the latest
    /// issued and its key still matches the displayed view; anything
    /// else is discarded as stale. After installation the active
    /// selection is re-validated against the new snapshot for its court.
    pub fn complete_fetch(
        &mut self,
        token: FetchToken,
        snapshots: Vec<AvailabilitySnapshot>,
        engine: &mut SelectionEngine,
    ) -> FetchOutcome {
        if token.key != self.view || token.serial != self.latest_serial {
            debug!(
                token_serial = token.serial,
                latest_serial = self.latest_serial,
                "Stale fetch completion discarded"
            );
            return FetchOutcome::Stale;
        }

        info!(
            date = %self.view.date,
            courts = snapshots.len(),
            "Availability snapshots installed"
        );
        self.snapshots = snapshots;
        self.dirty = false;

        let (change, notice) = self.revalidate_selection(engine);
        FetchOutcome::Installed { change, notice }
    }

    /// Re-validates the active selection against the installed
    /// snapshots.
    ///
    /// A selection whose court is missing from the view, or whose span
    /// is no longer free, is cleared and the unavailability notice is
    /// surfaced. A surviving selection has its validity flags
    /// recomputed.
    fn revalidate_selection(
        &self,
        engine: &mut SelectionEngine,
    ) -> (Option<SelectionChange>, Option<RefreshNotice>) {
        let Some(selection) = engine.selection().copied() else {
            return (None, None);
        };
        let Some(snapshot) = self.snapshot_for(selection.court_id) else {
            debug!("Selected court absent from refreshed view; clearing selection");
            return (Some(engine.clear()), Some(RefreshNotice::CourtUnavailable));
        };
        match engine.reconcile(snapshot) {
            Some(change) if change.selection.is_none() => {
                debug!("Selection span lost to refresh; clearing selection");
                (Some(change), Some(RefreshNotice::CourtUnavailable))
            }
            other => (other, None),
        }
    }
}
