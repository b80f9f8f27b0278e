pub mod error;
pub mod types;

#[cfg(feature = "amortization")]
pub mod amortization;

#[cfg(feature = "calculators")]
pub mod calculators;

pub use error::BondAnalyticsError;
pub use types::*;

/// Standard result type for all bond-analytics operations
pub type BondAnalyticsResult<T> = Result<T, BondAnalyticsError>;
