use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by scoring and aggregation.
///
/// Every failure here is a logic or data error, never a transient one; callers
/// should fix the input or configuration rather than retry.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No scorer registered for attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid attribute value: {0}")]
    InvalidAttributeValue(String),

    #[error("Score {0} is outside the valid domain for the aggregation strategy")]
    InvalidScoreRange(f64),

    #[error("Cannot aggregate an empty score vector")]
    EmptyScoreVector,

    #[error("Schema cannot be empty")]
    EmptySchema,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
