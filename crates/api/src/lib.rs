// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for Arena Book.
//!
//! Defines the request/response contracts the grid exchanges with its
//! backend, the boundary validation applied to them, and the error
//! taxonomy the grid reacts to. The HTTP transport itself lives in the
//! host application.

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

mod booking;
mod error;
mod request_response;

#[cfg(test)]
mod tests;

pub use booking::{
    BookingFormError, cancel_booking, confirm_before_submit, format_lei, normalize_phone,
    quote_from_detail, quote_price, restore_booking, validate_booking_request,
    validate_customer_fields,
};
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use request_response::{
    AvailabilityQuery, AvailabilityRow, BookingResponse, CancelBookingRequest,
    CourtDetailResponse, CreateBookingRequest, PriceQuote, RestoreBookingRequest,
};
