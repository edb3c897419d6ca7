// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Free-slot announcement text generation.
//!
//! Turns a court's availability snapshot into the plain-text listing
//! published to messaging channels: a header naming the sport and the
//! court, then one `HH:MM-HH:MM` line per free interval within the
//! fixed publishing window. The chunked variant additionally splits
//! long intervals into bookable-sized pieces; chunking is a
//! presentation policy, not a scheduling constraint, and follows a
//! fixed remainder table so output is reproducible.

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

use arena_book_domain::{AvailabilitySnapshot, TimeOfDay, TimeRange, merge_ranges};

#[cfg(test)]
mod tests;

/// Start of the fixed publishing window (08:00). Free time before this
/// is never announced.
pub const PUBLISH_OPEN: TimeOfDay = {
    let result = TimeOfDay::from_hm(8, 0);
    let time = match &result {
        Ok(t) => *t,
        // 08:00 is a valid time; the arm is never taken
        Err(_) => TimeOfDay::MIDNIGHT,
    };
    // `forget` avoids evaluating the error type's destructor, which
    // const context forbids.
    core::mem::forget(result);
    time
};

/// End of the fixed publishing window (the `24:00` sentinel).
pub const PUBLISH_CLOSE: TimeOfDay = TimeOfDay::END_OF_DAY;

/// Generates the announcement text for one court.
///
/// Free ranges are clipped to the publishing window, empties dropped,
/// and adjacent or overlapping ranges merged before formatting. The
/// header reads `POZITII LIBERE {SPORT} {court}`; each merged interval
/// follows on its own line. A day with nothing publishable yields the
/// bare header.
#[must_use]
pub fn generate(snapshot: &AvailabilitySnapshot) -> String {
    let intervals: Vec<TimeRange> = publishable_ranges(&snapshot.free);
    render(snapshot, &intervals)
}

/// Generates the announcement text with long intervals split into
/// bookable-sized chunks.
///
/// Each merged interval is divided by [`chunk_durations`]; `08:00-12:00`
/// becomes `08:00-10:00` and `10:00-12:00`.
#[must_use]
pub fn generate_chunked(snapshot: &AvailabilitySnapshot) -> String {
    let intervals: Vec<TimeRange> = publishable_ranges(&snapshot.free)
        .iter()
        .flat_map(|range| split_interval(*range))
        .collect();
    render(snapshot, &intervals)
}

/// Clips free ranges to the publishing window, drops empties, and
/// merges what remains.
fn publishable_ranges(free: &[TimeRange]) -> Vec<TimeRange> {
    let clipped: Vec<TimeRange> = free
        .iter()
        .filter_map(|range| {
            let start: TimeOfDay = range.start.max(PUBLISH_OPEN);
            let end: TimeOfDay = range.end.min(PUBLISH_CLOSE);
            TimeRange::new(start, end).ok()
        })
        .collect();
    merge_ranges(&clipped)
}

fn render(snapshot: &AvailabilitySnapshot, intervals: &[TimeRange]) -> String {
    let header: String = format!(
        "POZITII LIBERE {} {}",
        snapshot.court.sport.announcement_label(),
        snapshot.court.name
    );
    if intervals.is_empty() {
        return header;
    }
    let lines: Vec<String> = intervals.iter().map(ToString::to_string).collect();
    format!("{header}\n\n{}", lines.join("\n"))
}

/// Splits one merged interval into chunk spans per the preference
/// table.
fn split_interval(range: TimeRange) -> Vec<TimeRange> {
    let durations: Vec<u16> = chunk_durations(range.duration_minutes());
    let mut chunks: Vec<TimeRange> = Vec::with_capacity(durations.len());
    let mut cursor: TimeOfDay = range.start;
    for duration in durations {
        let Ok(end) = TimeOfDay::from_minutes(cursor.minutes() + duration) else {
            break;
        };
        let Ok(chunk) = TimeRange::new(cursor, end) else {
            break;
        };
        chunks.push(chunk);
        cursor = end;
    }
    chunks
}

/// The chunk preference table.
///
/// Emits 120-minute chunks while more than 240 minutes remain, then
/// finishes with the fixed remainder table. A tail that is shorter than
/// 60 minutes or not a multiple of 30 is emitted as-is, never invented
/// or dropped.
fn chunk_durations(total_minutes: u16) -> Vec<u16> {
    let mut chunks: Vec<u16> = Vec::new();
    let mut remaining: u16 = total_minutes;
    while remaining > 240 {
        chunks.push(120);
        remaining -= 120;
    }
    match remaining {
        0 => {}
        60 | 90 | 120 => chunks.push(remaining),
        150 => chunks.extend([90, 60]),
        180 => chunks.extend([120, 60]),
        210 => chunks.extend([120, 90]),
        240 => chunks.extend([120, 120]),
        other => chunks.push(other),
    }
    chunks
}
