// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use arena_book_domain::{
    AvailabilitySnapshot, BookedRange, BookingStatus, Court, CourtId, Sport, TimeOfDay, TimeRange,
};
use chrono::NaiveDate;

/// API request for the availability of all courts on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityQuery {
    /// The requested date.
    pub date: NaiveDate,
    /// Restricts the result to one sport, if set.
    pub sport_filter: Option<Sport>,
}

/// One court's availability within an availability response.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AvailabilityRow {
    /// The court.
    pub court: Court,
    /// The booked ranges for the date.
    pub booked: Vec<BookedRange>,
    /// The free ranges for the date.
    pub free: Vec<TimeRange>,
}

impl AvailabilityRow {
    /// Converts this row into the snapshot consumed by the grid.
    #[must_use]
    pub fn into_snapshot(self, date: NaiveDate) -> AvailabilitySnapshot {
        AvailabilitySnapshot {
            court: self.court,
            date,
            booked: self.booked,
            free: self.free,
        }
    }
}

/// API request to create a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookingRequest {
    /// The court to book.
    pub court_id: CourtId,
    /// The booking date.
    pub date: NaiveDate,
    /// The span start.
    pub start: TimeOfDay,
    /// The span end.
    pub end: TimeOfDay,
    /// The customer's name.
    pub customer_name: String,
    /// The customer's phone number.
    pub customer_phone: String,
    /// The customer's email address, if provided.
    pub customer_email: Option<String>,
}

/// API response for a successful booking creation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingResponse {
    /// The canonical booking identifier.
    pub booking_id: i64,
    /// The booked court.
    pub court_id: CourtId,
    /// The booking date.
    pub date: NaiveDate,
    /// The span start.
    pub start: TimeOfDay,
    /// The span end.
    pub end: TimeOfDay,
    /// The booking status.
    pub status: BookingStatus,
    /// The total price in bani.
    pub price_bani: i64,
    /// A success message.
    pub message: String,
}

/// API request to cancel a confirmed booking (admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelBookingRequest {
    /// The booking to cancel.
    pub booking_id: i64,
}

/// API request to restore a cancelled booking (admin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoreBookingRequest {
    /// The booking to restore.
    pub booking_id: i64,
}

/// API response for a court detail (price) lookup.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CourtDetailResponse {
    /// The court, including its hourly price.
    pub court: Court,
}

/// A price quote for a candidate booking span.
///
/// The total is absent when the court detail fetch failed; the booking
/// form shows the span without a price rather than blocking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PriceQuote {
    /// The span length in minutes.
    pub minutes: u16,
    /// The total in bani, if the court's price is known.
    pub total_bani: Option<i64>,
}
