// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingStatus, Court, CourtId, DomainError, Sport, TimeOfDay, TimeRange};

fn at(h: u16, m: u16) -> TimeOfDay {
    TimeOfDay::from_hm(h, m).unwrap()
}

#[test]
fn test_time_of_day_parse_and_display() {
    let t: TimeOfDay = "09:30".parse().unwrap();
    assert_eq!(t, at(9, 30));
    assert_eq!(t.to_string(), "09:30");
}

#[test]
fn test_end_of_day_sentinel_parses_and_formats() {
    let t: TimeOfDay = "24:00".parse().unwrap();
    assert_eq!(t, TimeOfDay::END_OF_DAY);
    assert_eq!(t.to_string(), "24:00");
    assert!(t.is_end_of_day());
}

#[test]
fn test_sentinel_sorts_after_everything() {
    assert!(at(23, 30) < TimeOfDay::END_OF_DAY);
    assert!(TimeOfDay::MIDNIGHT < TimeOfDay::END_OF_DAY);
}

#[test]
fn test_time_parse_rejects_garbage() {
    for bad in ["", "9", "24:30", "25:00", "09:60", "09:5", "ab:cd"] {
        assert!(
            bad.parse::<TimeOfDay>().is_err(),
            "'{bad}' should not parse"
        );
    }
}

#[test]
fn test_half_hour_arithmetic() {
    assert_eq!(at(9, 0).add_half_hour(), Some(at(9, 30)));
    assert_eq!(at(23, 30).add_half_hour(), Some(TimeOfDay::END_OF_DAY));
    assert_eq!(TimeOfDay::END_OF_DAY.add_half_hour(), None);
    assert_eq!(at(0, 30).sub_half_hour(), Some(TimeOfDay::MIDNIGHT));
    assert_eq!(TimeOfDay::MIDNIGHT.sub_half_hour(), None);
}

#[test]
fn test_from_naive_truncates_seconds() {
    let t = chrono::NaiveTime::from_hms_opt(14, 45, 59).unwrap();
    assert_eq!(TimeOfDay::from_naive(t), at(14, 45));
    let end = chrono::NaiveTime::from_hms_opt(23, 59, 0).unwrap();
    assert_eq!(TimeOfDay::from_naive(end).minutes(), 23 * 60 + 59);
}

#[test]
fn test_minutes_until_is_signed() {
    assert_eq!(at(9, 0).minutes_until(at(10, 0)), 60);
    assert_eq!(at(10, 0).minutes_until(at(9, 0)), -60);
}

#[test]
fn test_slot_alignment() {
    assert!(at(9, 0).is_slot_aligned());
    assert!(at(9, 30).is_slot_aligned());
    assert!(!at(9, 15).is_slot_aligned());
}

#[test]
fn test_time_range_rejects_inverted_and_empty() {
    assert!(TimeRange::new(at(10, 0), at(9, 0)).is_err());
    assert!(TimeRange::new(at(9, 0), at(9, 0)).is_err());
}

#[test]
fn test_time_range_intersection_is_half_open() {
    let range = TimeRange::new(at(9, 0), at(10, 0)).unwrap();
    // The slot ending exactly at the range start does not intersect
    assert!(!range.intersects(at(8, 30), at(9, 0)));
    // Neither does the slot starting exactly at the range end
    assert!(!range.intersects(at(10, 0), at(10, 30)));
    assert!(range.intersects(at(9, 30), at(10, 0)));
    assert!(range.intersects(at(8, 30), at(9, 30)));
}

#[test]
fn test_sport_round_trip() {
    for sport in [
        Sport::Tennis,
        Sport::Padel,
        Sport::BeachVolley,
        Sport::Basketball,
        Sport::Footvolley,
        Sport::TableTennis,
    ] {
        assert_eq!(sport.as_str().parse::<Sport>().unwrap(), sport);
    }
    assert!(matches!(
        "SQUASH".parse::<Sport>(),
        Err(DomainError::InvalidSport(_))
    ));
}

#[test]
fn test_booking_status_transitions() {
    assert_eq!(
        BookingStatus::Confirmed.transition_to(BookingStatus::Cancelled),
        Ok(BookingStatus::Cancelled)
    );
    assert_eq!(
        BookingStatus::Cancelled.transition_to(BookingStatus::Confirmed),
        Ok(BookingStatus::Confirmed)
    );
    assert!(
        BookingStatus::Confirmed
            .transition_to(BookingStatus::Confirmed)
            .is_err()
    );
}

#[test]
fn test_court_validation() {
    let mut court = Court {
        id: CourtId::new(1),
        name: String::from("Teren 1"),
        sport: Sport::Tennis,
        indoor: false,
        heated: false,
        lighting: true,
        price_per_hour_bani: 8000,
        open_time: TimeOfDay::MIDNIGHT,
        close_time: TimeOfDay::END_OF_DAY,
    };
    assert!(court.validate().is_ok());

    court.name = String::from("  ");
    assert!(court.validate().is_err());

    court.name = String::from("Teren 1");
    court.close_time = TimeOfDay::MIDNIGHT;
    assert!(matches!(
        court.validate(),
        Err(DomainError::InvalidOperatingWindow { .. })
    ));
}
