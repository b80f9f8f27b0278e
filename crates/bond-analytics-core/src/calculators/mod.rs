//! Stand-alone financial calculators for the home-loan product: bond
//! repayment, affordability, deposit savings and additional-payment
//! projections. Each is a pure function over validated inputs returning a
//! [`crate::types::ComputationOutput`] envelope.

pub mod additional_payment;
pub mod affordability;
pub mod deposit_savings;
pub mod repayment;
