// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod classify;
mod config;
mod error;
mod event;
mod selection;

#[cfg(test)]
mod tests;

pub use classify::{DayContext, SlotStatus, classify_slot, is_span_free, span_still_free};
pub use config::{GridConfig, OFFERED_DURATIONS};
pub use error::CoreError;
pub use event::{DurationOption, ReserveOutcome, ReserveWarning, Selection, SelectionChange};
pub use selection::SelectionEngine;
