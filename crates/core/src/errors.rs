use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Reasons a planning request is rejected before any slot is computed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("range start {start} is after range end {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("slot duration must be positive, got {0} minutes")]
    NonPositiveDuration(i64),

    #[error("pause must not be negative, got {0} minutes")]
    NegativePause(i64),

    #[error(
        "day window start {} must be before day window end {} (compared to the minute)",
        .start.format("%H:%M"),
        .end.format("%H:%M")
    )]
    EmptyDayWindow { start: NaiveTime, end: NaiveTime },

    #[error("capacity per slot must be positive, got {0}")]
    NonPositiveCapacity(i32),

    #[error("at least one weekday must be allowed")]
    NoWeekdays,

    #[error("weekday {0} is out of range (0=Sunday..6=Saturday)")]
    UnknownWeekday(u8),

    #[error("request would create {requested} slots, the limit is {limit}")]
    TooManySlots { requested: u64, limit: u64 },
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid planning request: {0}")]
    InvalidRequest(#[from] InvalidRequest),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

pub type PlanResult<T> = Result<T, PlanError>;
