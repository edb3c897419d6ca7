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

mod availability;
mod error;
mod gap_rule;
mod time_grid;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilitySnapshot, BookedRange, compute_free_ranges, merge_ranges};
pub use error::DomainError;
pub use gap_rule::leaves_half_hour_gap;
pub use time_grid::{enumerate_slots, slot_count};
pub use types::{
    BookingStatus, Court, CourtId, END_OF_DAY_MINUTES, SLOT_MINUTES, Sport, TimeOfDay, TimeRange,
};
pub use validation::validate_booking_span;
