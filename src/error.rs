//! Typed failures of the window engine and its record sources.
//!
//! Public functions return [`anyhow::Result`]; these variants are what the
//! errors carry, so callers can tell them apart with
//! [`anyhow::Error::downcast_ref`].

use thiserror::Error;

use crate::data_structs::typedef::PosType;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The record source produced no records at all.
    #[error("Record source is empty, nothing to build a window from")]
    EmptySource,

    /// A record arrived out of `(chromosome, start)` order.
    #[error("Records are not sorted: {current} follows {previous}")]
    OrderingViolation { previous: String, current: String },

    #[error("Window size must be a positive integer, got {0}")]
    InvalidWindowSize(PosType),

    #[error("Interval start {start} is greater than stop {stop}")]
    InvalidInterval { start: PosType, stop: PosType },

    /// An input line could not be turned into a record.
    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}
