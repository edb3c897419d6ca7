// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking form validation and the submit-time availability re-check.

use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{CourtDetailResponse, CreateBookingRequest, PriceQuote};
use arena_book::{GridConfig, Selection, span_still_free};
use arena_book_domain::{
    AvailabilitySnapshot, BookingStatus, Court, TimeRange, leaves_half_hour_gap,
    validate_booking_span,
};
use thiserror::Error;
use tracing::warn;

/// Booking form field errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingFormError {
    /// The customer name is empty.
    #[error("Customer name must not be empty")]
    EmptyName,

    /// The phone number is not a Romanian mobile number.
    #[error("Phone number must be 07xxxxxxxx or +407xxxxxxxx")]
    InvalidPhone,

    /// The email address is malformed.
    #[error("Email address is not valid")]
    InvalidEmail,
}

impl BookingFormError {
    /// The request field this error concerns.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "customer_name",
            Self::InvalidPhone => "customer_phone",
            Self::InvalidEmail => "customer_email",
        }
    }
}

/// Normalizes a Romanian mobile number.
///
/// Spaces and dashes are stripped; the result must be `07` plus eight
/// digits, or `+407` plus eight digits.
#[must_use]
pub fn normalize_phone(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| *c != ' ' && *c != '-').collect();
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if cleaned.len() == 10 && cleaned.starts_with("07") && all_digits(&cleaned) {
        return Some(cleaned);
    }
    if cleaned.len() == 12 && cleaned.starts_with("+407") && all_digits(&cleaned[1..]) {
        return Some(cleaned);
    }
    None
}

/// Validates the customer fields of a booking request.
///
/// # Errors
///
/// Returns the first failing field check.
pub fn validate_customer_fields(request: &CreateBookingRequest) -> Result<(), BookingFormError> {
    if request.customer_name.trim().is_empty() {
        return Err(BookingFormError::EmptyName);
    }
    if normalize_phone(&request.customer_phone).is_none() {
        return Err(BookingFormError::InvalidPhone);
    }
    if let Some(email) = &request.customer_email {
        let well_formed: bool = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !well_formed {
            return Err(BookingFormError::InvalidEmail);
        }
    }
    Ok(())
}

/// Validates a booking request at the API boundary.
///
/// Checks 30-minute alignment, span direction, minimum duration, and
/// the customer fields.
///
/// # Errors
///
/// Returns `InvalidSelection` for span rule violations and
/// `InvalidInput` for malformed fields.
pub fn validate_booking_request(
    request: &CreateBookingRequest,
    config: &GridConfig,
) -> Result<TimeRange, ApiError> {
    let span: TimeRange =
        validate_booking_span(request.start, request.end, config.min_duration_minutes)
            .map_err(|e| translate_domain_error(&e))?;
    validate_customer_fields(request).map_err(|e| ApiError::InvalidInput {
        field: String::from(e.field()),
        message: e.to_string(),
    })?;
    Ok(span)
}

/// The availability re-check performed immediately before submit.
///
/// The grid's snapshot may be seconds old; a concurrent booking can
/// have taken the span. The span is re-validated against the freshest
/// snapshot and a lost span maps to [`ApiError::SlotConflict`] — the
/// same error a conflicting write returns, so the caller handles both
/// identically.
///
/// # Errors
///
/// Returns `SlotConflict` when the span is no longer free, or the
/// validation error when the selection violates a booking rule.
pub fn confirm_before_submit(
    snapshot: &AvailabilitySnapshot,
    selection: &Selection,
    config: &GridConfig,
) -> Result<(), ApiError> {
    if !span_still_free(snapshot, selection.court_id, selection.span) {
        warn!(
            court_id = selection.court_id.value(),
            span = %selection.span,
            "Selection lost before submit"
        );
        return Err(ApiError::SlotConflict {
            start: selection.span.start,
            end: selection.span.end,
        });
    }
    validate_booking_span(
        selection.span.start,
        selection.span.end,
        config.min_duration_minutes,
    )
    .map_err(|e| translate_domain_error(&e))?;
    if config.enforce_gap_rule && leaves_half_hour_gap(&snapshot.booked, selection.span) {
        return Err(ApiError::InvalidSelection {
            message: format!(
                "Span {} would strand a 30-minute gap next to an existing booking",
                selection.span
            ),
        });
    }
    Ok(())
}

/// Computes the total price for a span in bani.
///
/// Full half-hours are billed; a span ending at `24:00` is charged for
/// its whole length.
#[must_use]
pub fn quote_price(court: &Court, span: TimeRange) -> i64 {
    court.price_per_hour_bani * i64::from(span.duration_minutes()) / 60
}

/// Builds a price quote from an optional court detail response.
///
/// A failed detail fetch degrades the price to absent instead of
/// blocking the form.
#[must_use]
pub fn quote_from_detail(detail: Option<&CourtDetailResponse>, span: TimeRange) -> PriceQuote {
    PriceQuote {
        minutes: span.duration_minutes(),
        total_bani: detail.map(|d| quote_price(&d.court, span)),
    }
}

/// Formats a bani amount for display.
#[must_use]
pub fn format_lei(bani: i64) -> String {
    if bani % 100 == 0 {
        format!("{} lei", bani / 100)
    } else {
        format!("{}.{:02} lei", bani / 100, (bani % 100).abs())
    }
}

/// Applies an admin cancellation to a booking's status.
///
/// # Errors
///
/// Returns an error if the booking is not currently confirmed.
pub fn cancel_booking(current: BookingStatus) -> Result<BookingStatus, ApiError> {
    current
        .transition_to(BookingStatus::Cancelled)
        .map_err(|e| translate_domain_error(&e))
}

/// Applies an admin restore to a booking's status.
///
/// # Errors
///
/// Returns an error if the booking is not currently cancelled.
pub fn restore_booking(current: BookingStatus) -> Result<BookingStatus, ApiError> {
    current
        .transition_to(BookingStatus::Confirmed)
        .map_err(|e| translate_domain_error(&e))
}
