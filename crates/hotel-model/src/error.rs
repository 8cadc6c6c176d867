//! Error types for the hotel data model.

use thiserror::Error;

/// Errors produced by [`crate::Date`] validation.
///
/// Each variant carries the offending values so the rendered message names
/// the exact bound that was violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Day outside the absolute 1-31 range, before any month is consulted.
    #[error("expected day ({day}) to be between 1 and 31")]
    DayOutOfRange { day: u32 },

    /// Month outside the 1-12 range.
    #[error("expected month ({month}) to be between 1 and 12")]
    MonthOutOfRange { month: u32 },

    /// Day past the 29th of February in a leap year.
    #[error("day ({day}) greater than 29 in leap year ({year})")]
    LeapFebruaryDay { day: u32, year: u32 },

    /// Day past the 28th of February in a non-leap year.
    #[error("day ({day}) greater than 28 in non-leap year ({year})")]
    FebruaryDay { day: u32, year: u32 },

    /// Day past the end of a 30- or 31-day month.
    #[error("expected day ({day}) to be at most {max} for month {month}")]
    DayExceedsMonth {
        day: u32,
        max: u32,
        month: &'static str,
    },
}

/// Errors produced while parsing a room record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Record does not have exactly the expected number of fields.
    #[error("invalid record: expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Room number field is not unsigned integer text.
    #[error("invalid record id '{value}': {source}")]
    InvalidId {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Price field is not unsigned integer text.
    #[error("invalid record price '{value}': {source}")]
    InvalidPrice {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// State field is not one of the recognized state literals.
    #[error("invalid record state '{value}': unrecognized state")]
    UnknownState { value: String },
}
