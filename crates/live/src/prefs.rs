// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Small key/value preference store with per-entry TTL.
//!
//! Remembers the last viewed sport and date across grid mounts and
//! holds the admin session stamp. Every entry is stored as a JSON
//! envelope carrying its written-at instant; expired or unreadable
//! entries behave as absent and are purged on read. The clock is always
//! an explicit argument.

use crate::error::LiveError;
use arena_book_domain::Sport;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use tracing::warn;

/// Admin session lifetime in seconds.
pub const SESSION_TTL_SECONDS: i64 = 3600;

const KEY_LAST_SPORT: &str = "last_sport";
const KEY_LAST_DATE: &str = "last_date";
const KEY_ADMIN_SESSION: &str = "admin_session";

/// Raw string storage behind the preference store.
///
/// Browser `localStorage`, a disk file, or the in-memory test backend
/// are interchangeable here.
pub trait PreferenceBackend {
    /// Reads the raw value for a key.
    fn get(&self, key: &str) -> Option<String>;
    /// Writes the raw value for a key.
    fn set(&mut self, key: &str, value: String);
    /// Removes a key. Unknown keys are ignored.
    fn remove(&mut self, key: &str);
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// JSON envelope wrapping every stored value.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope<T> {
    written_at: DateTime<Utc>,
    value: T,
}

/// TTL policy for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ttl {
    NonExpiring,
    Seconds(i64),
}

impl Ttl {
    fn expired(self, written_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Self::NonExpiring => false,
            Self::Seconds(limit) => (now - written_at).num_seconds() >= limit,
        }
    }
}

/// Typed preference store over a raw backend.
#[derive(Debug)]
pub struct PreferenceStore<B: PreferenceBackend> {
    backend: B,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    /// Wraps a backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Remembers the last viewed sport.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn set_last_sport(&mut self, sport: Sport, now: DateTime<Utc>) -> Result<(), LiveError> {
        self.write(KEY_LAST_SPORT, &sport, now)
    }

    /// Returns the last viewed sport, if remembered.
    pub fn last_sport(&mut self, now: DateTime<Utc>) -> Option<Sport> {
        self.read(KEY_LAST_SPORT, Ttl::NonExpiring, now)
    }

    /// Remembers the last viewed date.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn set_last_date(&mut self, date: NaiveDate, now: DateTime<Utc>) -> Result<(), LiveError> {
        self.write(KEY_LAST_DATE, &date, now)
    }

    /// Returns the last viewed date, if remembered.
    pub fn last_date(&mut self, now: DateTime<Utc>) -> Option<NaiveDate> {
        self.read(KEY_LAST_DATE, Ttl::NonExpiring, now)
    }

    /// Stamps the admin session as freshly authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be serialized.
    pub fn stamp_admin_session(&mut self, now: DateTime<Utc>) -> Result<(), LiveError> {
        self.write(KEY_ADMIN_SESSION, &true, now)
    }

    /// Whether the admin session stamp exists and is younger than
    /// [`SESSION_TTL_SECONDS`]. An expired stamp is purged.
    pub fn admin_session_active(&mut self, now: DateTime<Utc>) -> bool {
        self.read::<bool>(KEY_ADMIN_SESSION, Ttl::Seconds(SESSION_TTL_SECONDS), now)
            .unwrap_or(false)
    }

    /// Drops the admin session stamp.
    pub fn clear_admin_session(&mut self) {
        self.backend.remove(KEY_ADMIN_SESSION);
    }

    fn write<T: Serialize>(
        &mut self,
        key: &str,
        value: &T,
        now: DateTime<Utc>,
    ) -> Result<(), LiveError> {
        let envelope = Envelope {
            written_at: now,
            value,
        };
        let raw: String = serde_json::to_string(&envelope)?;
        self.backend.set(key, raw);
        Ok(())
    }

    /// Reads an entry, treating expired or unreadable payloads as
    /// absent and purging them.
    fn read<T: DeserializeOwned>(&mut self, key: &str, ttl: Ttl, now: DateTime<Utc>) -> Option<T> {
        let raw: String = self.backend.get(key)?;
        let envelope: Envelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(key, error = %err, "Unreadable preference entry purged");
                self.backend.remove(key);
                return None;
            }
        };
        if ttl.expired(envelope.written_at, now) {
            self.backend.remove(key);
            return None;
        }
        Some(envelope.value)
    }
}
