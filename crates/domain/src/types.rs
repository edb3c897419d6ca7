// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of minutes in a single grid slot.
pub const SLOT_MINUTES: u16 = 30;

/// Minutes-since-midnight value of the `24:00` end-of-day sentinel.
pub const END_OF_DAY_MINUTES: u16 = 24 * 60;

/// A time of day on the booking grid, stored as minutes since midnight.
///
/// Values range over `[0, 1440]`. The maximum value `1440` is the `24:00`
/// end-of-day sentinel: it is a valid exclusive range end and sorts after
/// every other time, but it never starts a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    /// Minutes since midnight (0-1440).
    minutes: u16,
}

impl TimeOfDay {
    /// Midnight (`00:00`).
    pub const MIDNIGHT: Self = Self { minutes: 0 };

    /// The `24:00` end-of-day sentinel.
    pub const END_OF_DAY: Self = Self {
        minutes: END_OF_DAY_MINUTES,
    };

    /// Creates a `TimeOfDay` from minutes since midnight.
    ///
    /// # Arguments
    ///
    /// * `minutes` - Minutes since midnight, at most 1440
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes` exceeds the end-of-day sentinel.
    #[allow(clippy::cast_lossless)]
    pub const fn from_minutes(minutes: u16) -> Result<Self, DomainError> {
        if minutes > END_OF_DAY_MINUTES {
            return Err(DomainError::TimeOutOfRange {
                minutes: minutes as u32,
            });
        }
        Ok(Self { minutes })
    }

    /// Creates a `TimeOfDay` from an hour and minute pair.
    ///
    /// # Arguments
    ///
    /// * `hour` - The hour (0-24; 24 only with minute 0)
    /// * `minute` - The minute (0-59)
    ///
    /// # Errors
    ///
    /// Returns an error if the pair is outside `[00:00, 24:00]`.
    #[allow(clippy::cast_lossless)]
    pub const fn from_hm(hour: u16, minute: u16) -> Result<Self, DomainError> {
        if minute > 59 {
            return Err(DomainError::TimeOutOfRange {
                minutes: hour as u32 * 60 + minute as u32,
            });
        }
        Self::from_minutes(hour * 60 + minute)
    }

    /// Converts a `chrono::NaiveTime` wall-clock time, truncating seconds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_naive(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        // hour() < 24 and minute() < 60, so both components fit in u16
        Self {
            minutes: time.hour() as u16 * 60 + time.minute() as u16,
        }
    }

    /// Returns the minutes-since-midnight value.
    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.minutes
    }

    /// Whether this time falls on a 30-minute slot boundary.
    #[must_use]
    pub const fn is_slot_aligned(self) -> bool {
        self.minutes % SLOT_MINUTES == 0
    }

    /// Whether this is the `24:00` end-of-day sentinel.
    #[must_use]
    pub const fn is_end_of_day(self) -> bool {
        self.minutes == END_OF_DAY_MINUTES
    }

    /// Returns this time advanced by one slot, or `None` past end of day.
    #[must_use]
    pub const fn add_half_hour(self) -> Option<Self> {
        if self.minutes + SLOT_MINUTES > END_OF_DAY_MINUTES {
            None
        } else {
            Some(Self {
                minutes: self.minutes + SLOT_MINUTES,
            })
        }
    }

    /// Returns this time moved back by one slot, or `None` before midnight.
    #[must_use]
    pub const fn sub_half_hour(self) -> Option<Self> {
        if self.minutes < SLOT_MINUTES {
            None
        } else {
            Some(Self {
                minutes: self.minutes - SLOT_MINUTES,
            })
        }
    }

    /// Signed minutes from `self` to `other`.
    ///
    /// Negative when `other` is earlier. There is no midnight wraparound:
    /// times belong to a single calendar day.
    #[must_use]
    pub fn minutes_until(self, other: Self) -> i32 {
        i32::from(other.minutes) - i32::from(self.minutes)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DomainError::TimeParseError {
            value: s.to_string(),
        };
        let (hour_str, minute_str) = s.split_once(':').ok_or_else(parse_error)?;
        let hour: u16 = hour_str.parse().map_err(|_| parse_error())?;
        let minute: u16 = minute_str.parse().map_err(|_| parse_error())?;
        if minute_str.len() != 2 {
            return Err(parse_error());
        }
        Self::from_hm(hour, minute).map_err(|_| parse_error())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// A half-open time interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// The inclusive start time.
    pub start: TimeOfDay,
    /// The exclusive end time (may be the `24:00` sentinel).
    pub end: TimeOfDay,
}

impl TimeRange {
    /// Creates a validated `TimeRange`.
    ///
    /// # Arguments
    ///
    /// * `start` - The inclusive start time
    /// * `end` - The exclusive end time
    ///
    /// # Errors
    ///
    /// Returns an error if `start >= end`. Zero-length and inverted ranges
    /// are rejected; midnight wraparound is not supported.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, DomainError> {
        if start.minutes() >= end.minutes() {
            return Err(DomainError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The range duration in minutes.
    #[must_use]
    pub const fn duration_minutes(self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether this range intersects the half-open interval `[t, next)`.
    #[must_use]
    pub const fn intersects(self, t: TimeOfDay, next: TimeOfDay) -> bool {
        !(self.end.minutes() <= t.minutes() || self.start.minutes() >= next.minutes())
    }

    /// Whether `other` is fully contained within this range.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.start.minutes() <= other.start.minutes() && other.end.minutes() <= self.end.minutes()
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// The sports a court can be dedicated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sport {
    /// Tennis.
    Tennis,
    /// Padel.
    Padel,
    /// Beach volleyball.
    BeachVolley,
    /// Basketball.
    Basketball,
    /// Footvolley.
    Footvolley,
    /// Table tennis.
    TableTennis,
}

impl Sport {
    /// The backend wire identifier for this sport.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tennis => "TENNIS",
            Self::Padel => "PADEL",
            Self::BeachVolley => "BEACH_VOLLEY",
            Self::Basketball => "BASKETBALL",
            Self::Footvolley => "FOOTVOLLEY",
            Self::TableTennis => "TABLE_TENNIS",
        }
    }

    /// The display label shown to customers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tennis => "Tenis",
            Self::Padel => "Padel",
            Self::BeachVolley => "Volei pe plajă",
            Self::Basketball => "Baschet",
            Self::Footvolley => "Tenis de picior",
            Self::TableTennis => "Tenis de masă",
        }
    }

    /// The uppercase, diacritic-free label used in announcement text.
    #[must_use]
    pub const fn announcement_label(self) -> &'static str {
        match self {
            Self::Tennis => "TENIS",
            Self::Padel => "PADEL",
            Self::BeachVolley => "VOLEI PE PLAJA",
            Self::Basketball => "BASCHET",
            Self::Footvolley => "TENIS DE PICIOR",
            Self::TableTennis => "TENIS DE MASA",
        }
    }
}

impl FromStr for Sport {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TENNIS" => Ok(Self::Tennis),
            "PADEL" => Ok(Self::Padel),
            "BEACH_VOLLEY" => Ok(Self::BeachVolley),
            "BASKETBALL" => Ok(Self::Basketball),
            "FOOTVOLLEY" => Ok(Self::Footvolley),
            "TABLE_TENNIS" => Ok(Self::TableTennis),
            _ => Err(DomainError::InvalidSport(s.to_string())),
        }
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical numeric identifier for a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourtId {
    /// The identifier value assigned by the backend.
    value: i64,
}

impl CourtId {
    /// Creates a new `CourtId`.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }
}

impl std::fmt::Display for CourtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A bookable court.
///
/// Courts are owned by the backend and read-only to this engine; a court
/// is immutable for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Court {
    /// The canonical identifier.
    pub id: CourtId,
    /// The display name.
    pub name: String,
    /// The sport played on this court.
    pub sport: Sport,
    /// Whether the court is indoors.
    pub indoor: bool,
    /// Whether the court is heated.
    pub heated: bool,
    /// Whether the court has lighting.
    pub lighting: bool,
    /// Hourly price in bani (1 leu = 100 bani).
    pub price_per_hour_bani: i64,
    /// Opening time of the operating window.
    pub open_time: TimeOfDay,
    /// Closing time of the operating window (may be the `24:00` sentinel).
    pub close_time: TimeOfDay,
}

impl Court {
    /// Validates the court's invariant fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the operating window is
    /// empty or inverted.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidCourtName(String::from(
                "name must not be empty",
            )));
        }
        if self.open_time >= self.close_time {
            return Err(DomainError::InvalidOperatingWindow {
                open: self.open_time,
                close: self.close_time,
            });
        }
        Ok(())
    }
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// The booking holds its slot.
    #[default]
    Confirmed,
    /// The booking was cancelled and no longer holds its slot.
    Cancelled,
}

impl BookingStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Checks if a transition from this status to another is valid.
    ///
    /// Valid transitions are:
    /// - Confirmed → Cancelled (admin cancel)
    /// - Cancelled → Confirmed (admin restore)
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Confirmed, Self::Cancelled) | (Self::Cancelled, Self::Confirmed)
        )
    }

    /// Applies a transition to the target status.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not permitted.
    pub const fn transition_to(self, target: Self) -> Result<Self, DomainError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self,
                to: target,
            })
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
