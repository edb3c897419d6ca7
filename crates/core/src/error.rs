// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use arena_book_domain::{DomainError, TimeOfDay};

/// Errors that can occur during selection transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requested preset duration is not one of the offered options.
    UnsupportedDuration {
        /// The requested duration in minutes.
        minutes: u16,
    },
    /// The requested span is not free for its whole length.
    SpanUnavailable {
        /// The span start.
        start: TimeOfDay,
        /// The span end.
        end: TimeOfDay,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::UnsupportedDuration { minutes } => {
                write!(f, "Duration of {minutes} minutes is not an offered option")
            }
            Self::SpanUnavailable { start, end } => {
                write!(f, "Span {start}-{end} is not fully free")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
