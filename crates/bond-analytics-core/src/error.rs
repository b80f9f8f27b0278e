use thiserror::Error;

#[derive(Debug, Error)]
pub enum BondAnalyticsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BondAnalyticsError {
    fn from(e: serde_json::Error) -> Self {
        BondAnalyticsError::SerializationError(e.to_string())
    }
}
