// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the traffic signal library.
//!
//! Validation failures ([`ValueError`]) are raised synchronously where the
//! invalid input enters the library and never leave an object partially
//! updated. Runtime lifecycle misuse is reported through [`Error`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while parsing text or configuration.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// `stop` was called while no runtime was active.
    #[error("no active runtime to stop")]
    NoActiveRuntime,

    /// `run` was called while a runtime was already active.
    #[error("a runtime is already active for this controller")]
    RuntimeAlreadyActive,

    /// `run` was called outside of a tokio runtime.
    #[error("no tokio runtime available to spawn the light cycle")]
    NoAsyncRuntime,

    /// The background cycle terminated abnormally.
    #[error("light cycle terminated abnormally: {0}")]
    RuntimeFault(String),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric field is outside its allowed range.
    #[error("{field} value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the field being validated.
        field: &'static str,
        /// Minimum allowed value.
        min: u8,
        /// Maximum allowed value.
        max: u8,
        /// The actual value that was provided.
        actual: u8,
    },

    /// A clock was advanced by zero seconds.
    #[error("a clock can only be advanced by a positive number of seconds")]
    NonPositiveAdvance,

    /// Advancing a clock would overflow its seconds counter.
    #[error("advancing the clock would overflow its seconds counter")]
    ClockOverflow,

    /// A phase duration was negative.
    #[error("phase duration must be at least 0 seconds, got {0}")]
    NegativeDuration(i64),

    /// A phase duration does not fit the seconds counter.
    #[error("phase duration {actual} exceeds the maximum of {max} seconds")]
    DurationTooLong {
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: i64,
    },

    /// A time that must be a time-of-day has overflowed into a later day.
    #[error("{field} must be on the reference day, but is {days} day(s) later")]
    NotSameDay {
        /// Name of the value being validated.
        field: &'static str,
        /// Days elapsed on the rejected value.
        days: u64,
    },

    /// The inactive window start and end are equal.
    #[error("the inactive window start and end must be different")]
    EmptyInactiveWindow,
}

/// Errors related to parsing clock text and configuration documents.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: &'static str,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
