// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use arena_book::CoreError;
use arena_book_domain::{DomainError, TimeOfDay};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract. A lost slot (`SlotConflict`) is deliberately separate from
/// an invalid selection and from generic failures: the grid reacts to
/// each differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The requested span is no longer free. Raised both when a refresh
    /// invalidates the selection and when the write itself is rejected
    /// with a conflict.
    SlotConflict {
        /// The span start.
        start: TimeOfDay,
        /// The span end.
        end: TimeOfDay,
    },
    /// The selection violates a booking rule (duration, alignment, gap).
    InvalidSelection {
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A collaborator could not be reached. Callers degrade (absent
    /// price, retried fetch) rather than abort.
    Unavailable {
        /// A description of what was unreachable.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlotConflict { start, end } => {
                write!(f, "Slot {start}-{end} is no longer free")
            }
            Self::InvalidSelection { message } => {
                write!(f, "Invalid selection: {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Unavailable { message } => {
                write!(f, "Service unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Rule violations that concern the selected span become
/// `InvalidSelection`; malformed values become `InvalidInput`.
#[must_use]
pub fn translate_domain_error(error: &DomainError) -> ApiError {
    match error {
        DomainError::UnalignedTime { .. }
        | DomainError::InvertedRange { .. }
        | DomainError::SelectionTooShort { .. } => ApiError::InvalidSelection {
            message: error.to_string(),
        },
        DomainError::TimeOutOfRange { .. } | DomainError::TimeParseError { .. } => {
            ApiError::InvalidInput {
                field: String::from("time"),
                message: error.to_string(),
            }
        }
        DomainError::InvalidSport(_) => ApiError::InvalidInput {
            field: String::from("sport"),
            message: error.to_string(),
        },
        DomainError::InvalidCourtName(_) | DomainError::InvalidOperatingWindow { .. } => {
            ApiError::InvalidInput {
                field: String::from("court"),
                message: error.to_string(),
            }
        }
        DomainError::InvalidStatusTransition { .. } => ApiError::InvalidInput {
            field: String::from("status"),
            message: error.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// An unavailable span maps to `SlotConflict`: by the time the core
/// rejects it, another booking holds the slot.
#[must_use]
pub fn translate_core_error(error: &CoreError) -> ApiError {
    match error {
        CoreError::DomainViolation(domain_error) => translate_domain_error(domain_error),
        CoreError::UnsupportedDuration { .. } => ApiError::InvalidSelection {
            message: error.to_string(),
        },
        CoreError::SpanUnavailable { start, end } => ApiError::SlotConflict {
            start: *start,
            end: *end,
        },
    }
}
