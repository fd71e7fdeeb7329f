use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum LedgerError {
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Member {0} is already registered")]
    DuplicateMember(String),
    #[error("Member {0} not found")]
    MemberNotFound(String),
    #[error("Invalid split member: {0}")]
    InvalidSplitMember(String),
    #[error("No members registered")]
    EmptyRoster,
    #[error("Payment {0} not found")]
    PaymentNotFound(String),
    #[error("Attributed shares fall short of the amount by {0}")]
    AttributionShortfall(f64),
    #[error("Attributed shares exceed the amount by {0}")]
    AttributionOverage(f64),
    #[error("Storage error: {0}")]
    StorageError(String),
    #[error("Logging error: {0}")]
    LoggingError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::SerializationError(err.to_string())
    }
}
