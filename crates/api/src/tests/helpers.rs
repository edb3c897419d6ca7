// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::request_response::CreateBookingRequest;
use arena_book_domain::{
    AvailabilitySnapshot, BookedRange, BookingStatus, Court, CourtId, Sport, TimeOfDay, TimeRange,
    compute_free_ranges,
};
use chrono::NaiveDate;

pub fn at(h: u16, m: u16) -> TimeOfDay {
    TimeOfDay::from_hm(h, m).unwrap()
}

pub fn range(sh: u16, sm: u16, eh: u16, em: u16) -> TimeRange {
    TimeRange::new(at(sh, sm), at(eh, em)).unwrap()
}

pub fn booked(sh: u16, sm: u16, eh: u16, em: u16) -> BookedRange {
    BookedRange {
        range: range(sh, sm, eh, em),
        status: BookingStatus::Confirmed,
        customer_name: String::from("Test Customer"),
    }
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn make_court(id: i64) -> Court {
    Court {
        id: CourtId::new(id),
        name: format!("Teren {id}"),
        sport: Sport::Tennis,
        indoor: false,
        heated: false,
        lighting: true,
        price_per_hour_bani: 8000,
        open_time: TimeOfDay::MIDNIGHT,
        close_time: TimeOfDay::END_OF_DAY,
    }
}

pub fn make_snapshot(court_id: i64, booked_ranges: Vec<BookedRange>) -> AvailabilitySnapshot {
    let free = compute_free_ranges(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY, &booked_ranges);
    AvailabilitySnapshot {
        court: make_court(court_id),
        date: test_date(),
        booked: booked_ranges,
        free,
    }
}

pub fn valid_request() -> CreateBookingRequest {
    CreateBookingRequest {
        court_id: CourtId::new(1),
        date: test_date(),
        start: at(9, 0),
        end: at(10, 0),
        customer_name: String::from("Ion Popescu"),
        customer_phone: String::from("0712345678"),
        customer_email: Some(String::from("ion@example.com")),
    }
}
