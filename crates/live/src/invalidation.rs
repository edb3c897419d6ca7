// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Invalidation pub/sub for "bookings changed" signals.
//!
//! Events are informational only and never authoritative: any receipt
//! means the current availability snapshot may be stale and should be
//! re-fetched. The payload is a hint and is never trusted as state.
//! Cross-tab broadcasts, storage events, and polling all reduce to this
//! fan-out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of events to buffer per subscriber. A subscriber that
/// cannot keep up loses its oldest events.
const EVENT_BUFFER_SIZE: usize = 100;

/// A change notification received over any transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InvalidationEvent {
    /// One or more bookings changed. The date is an optional hint; a
    /// receipt with no date (or a wrong one) still triggers a re-fetch.
    BookingsChanged {
        /// The affected date, if the sender knew it.
        date: Option<NaiveDate>,
    },
}

/// Handle identifying one subscriber's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriberId(u64);

/// Fan-out of invalidation events to per-subscriber queues.
#[derive(Debug, Default)]
pub struct Invalidations {
    next_id: u64,
    queues: Vec<(SubscriberId, VecDeque<InvalidationEvent>)>,
}

impl Invalidations {
    /// Creates an empty fan-out with no subscribers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            queues: Vec::new(),
        }
    }

    /// Registers a subscriber and returns its handle.
    pub fn subscribe(&mut self) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.queues.push((id, VecDeque::new()));
        id
    }

    /// Removes a subscriber. Unknown handles are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.queues.retain(|(sub, _)| *sub != id);
    }

    /// Delivers an event to every subscriber queue.
    pub fn publish(&mut self, event: &InvalidationEvent) {
        for (_, queue) in &mut self.queues {
            if queue.len() == EVENT_BUFFER_SIZE {
                queue.pop_front();
            }
            queue.push_back(event.clone());
        }
        tracing::debug!(subscribers = self.queues.len(), "Invalidation published");
    }

    /// Pops the oldest pending event for a subscriber, if any.
    pub fn poll(&mut self, id: SubscriberId) -> Option<InvalidationEvent> {
        self.queues
            .iter_mut()
            .find(|(sub, _)| *sub == id)
            .and_then(|(_, queue)| queue.pop_front())
    }
}
