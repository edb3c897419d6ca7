// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::test_date;
use crate::{MemoryBackend, PreferenceBackend, PreferenceStore, SESSION_TTL_SECONDS};
use arena_book_domain::Sport;
use chrono::{DateTime, TimeDelta, Utc};

fn clock() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-02T10:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_last_sport_round_trip() {
    let mut store = PreferenceStore::new(MemoryBackend::new());
    let now = clock();

    assert_eq!(store.last_sport(now), None);
    store.set_last_sport(Sport::BeachVolley, now).unwrap();
    assert_eq!(store.last_sport(now), Some(Sport::BeachVolley));

    // Preferences never expire
    let much_later = now + TimeDelta::days(365);
    assert_eq!(store.last_sport(much_later), Some(Sport::BeachVolley));
}

#[test]
fn test_last_date_round_trip() {
    let mut store = PreferenceStore::new(MemoryBackend::new());
    let now = clock();

    store.set_last_date(test_date(), now).unwrap();
    assert_eq!(store.last_date(now), Some(test_date()));
}

#[test]
fn test_admin_session_expires_after_one_hour() {
    let mut store = PreferenceStore::new(MemoryBackend::new());
    let now = clock();

    assert!(!store.admin_session_active(now));
    store.stamp_admin_session(now).unwrap();
    assert!(store.admin_session_active(now));

    let just_before = now + TimeDelta::seconds(SESSION_TTL_SECONDS - 1);
    assert!(store.admin_session_active(just_before));

    let at_limit = now + TimeDelta::seconds(SESSION_TTL_SECONDS);
    assert!(!store.admin_session_active(at_limit));

    // The expired read purged the stamp; it stays gone even for an
    // earlier clock
    assert!(!store.admin_session_active(now));
}

#[test]
fn test_clear_admin_session() {
    let mut store = PreferenceStore::new(MemoryBackend::new());
    let now = clock();

    store.stamp_admin_session(now).unwrap();
    store.clear_admin_session();
    assert!(!store.admin_session_active(now));
}

#[test]
fn test_corrupt_entry_reads_as_absent_and_is_purged() {
    let mut backend = MemoryBackend::new();
    backend.set("last_sport", String::from("not json"));
    let mut store = PreferenceStore::new(backend);

    assert_eq!(store.last_sport(clock()), None);
    // A later write works normally
    store.set_last_sport(Sport::Tennis, clock()).unwrap();
    assert_eq!(store.last_sport(clock()), Some(Sport::Tennis));
}
