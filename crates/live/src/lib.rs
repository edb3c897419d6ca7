// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live refresh layer for the Arena Book grid.
//!
//! Ties the selection engine to the outside world: fetch-token guarded
//! snapshot installation, invalidation fan-out, and the small
//! preference store that survives grid mounts. Transports (websockets,
//! cross-tab broadcasts, polling timers) live in the host; this crate
//! only defines what happens when their events arrive.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod coordinator;
mod error;
mod invalidation;
mod prefs;

#[cfg(test)]
mod tests;

pub use coordinator::{FetchKey, FetchOutcome, FetchToken, RefreshCoordinator, RefreshNotice};
pub use error::LiveError;
pub use invalidation::{InvalidationEvent, Invalidations, SubscriberId};
pub use prefs::{MemoryBackend, PreferenceBackend, PreferenceStore, SESSION_TTL_SECONDS};
