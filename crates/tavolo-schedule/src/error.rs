use thiserror::Error;

/// Scheduling-engine validation errors
#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Invalid opening hours: {0}")]
    InvalidHours(String),

    #[error("Invalid booking interval: {0}")]
    InvalidBooking(String),

    #[error("Invalid recurrence pattern: {0}")]
    InvalidPattern(String),

    #[error(transparent)]
    CoreError(#[from] tavolo_core::error::CoreError),
}

pub type ScheduleResult<T> = std::result::Result<T, ScheduleError>;
