// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{BookingStatus, TimeOfDay};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time-of-day value is outside `[00:00, 24:00]`.
    TimeOutOfRange {
        /// The offending minutes-since-midnight value.
        minutes: u32,
    },
    /// Failed to parse a time-of-day from an `HH:MM` string.
    TimeParseError {
        /// The invalid time string.
        value: String,
    },
    /// A time is not aligned to a 30-minute slot boundary.
    UnalignedTime {
        /// The unaligned time.
        time: TimeOfDay,
    },
    /// A range's start is not strictly before its end.
    InvertedRange {
        /// The range start.
        start: TimeOfDay,
        /// The range end.
        end: TimeOfDay,
    },
    /// A court's operating window is empty or inverted.
    InvalidOperatingWindow {
        /// The opening time.
        open: TimeOfDay,
        /// The closing time.
        close: TimeOfDay,
    },
    /// Sport identifier is not recognized.
    InvalidSport(String),
    /// Court name is empty or invalid.
    InvalidCourtName(String),
    /// A booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: BookingStatus,
        /// The requested status.
        to: BookingStatus,
    },
    /// A selection span is shorter than the minimum bookable duration.
    SelectionTooShort {
        /// The selection duration in minutes.
        minutes: u16,
        /// The minimum required duration in minutes.
        minimum: u16,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeOutOfRange { minutes } => {
                write!(
                    f,
                    "Time value {minutes} minutes is outside the day (0-1440)"
                )
            }
            Self::TimeParseError { value } => {
                write!(f, "Failed to parse time '{value}': expected HH:MM")
            }
            Self::UnalignedTime { time } => {
                write!(f, "Time {time} is not aligned to a 30-minute boundary")
            }
            Self::InvertedRange { start, end } => {
                write!(f, "Range start {start} must be before end {end}")
            }
            Self::InvalidOperatingWindow { open, close } => {
                write!(f, "Operating window {open}-{close} is empty or inverted")
            }
            Self::InvalidSport(value) => write!(f, "Unknown sport '{value}'"),
            Self::InvalidCourtName(msg) => write!(f, "Invalid court name: {msg}"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Booking status cannot change from {from} to {to}")
            }
            Self::SelectionTooShort { minutes, minimum } => {
                write!(
                    f,
                    "Selection of {minutes} minutes is below the {minimum} minute minimum"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
