// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::FetchKey;
use arena_book::DayContext;
use arena_book_domain::{
    AvailabilitySnapshot, BookedRange, BookingStatus, Court, CourtId, Sport, TimeOfDay, TimeRange,
    compute_free_ranges,
};
use chrono::NaiveDate;

pub fn at(h: u16, m: u16) -> TimeOfDay {
    TimeOfDay::from_hm(h, m).unwrap()
}

pub fn booked(sh: u16, sm: u16, eh: u16, em: u16) -> BookedRange {
    BookedRange {
        range: TimeRange::new(at(sh, sm), at(eh, em)).unwrap(),
        status: BookingStatus::Confirmed,
        customer_name: String::from("Test Customer"),
    }
}

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

pub fn make_snapshot(court_id: i64, booked_ranges: Vec<BookedRange>) -> AvailabilitySnapshot {
    let free = compute_free_ranges(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY, &booked_ranges);
    AvailabilitySnapshot {
        court: Court {
            id: CourtId::new(court_id),
            name: format!("Teren {court_id}"),
            sport: Sport::Tennis,
            indoor: false,
            heated: false,
            lighting: true,
            price_per_hour_bani: 8000,
            open_time: TimeOfDay::MIDNIGHT,
            close_time: TimeOfDay::END_OF_DAY,
        },
        date: test_date(),
        booked: booked_ranges,
        free,
    }
}

pub fn view() -> FetchKey {
    FetchKey {
        date: test_date(),
        sport_filter: Some(Sport::Tennis),
    }
}

pub fn future_ctx() -> DayContext {
    DayContext::new(
        test_date(),
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        at(12, 0),
    )
}
