//! Amortization engine: baseline schedule projection, payment-modification
//! scenarios, and comparative savings analysis.
//!
//! The entry point is [`analysis::generate_property_analysis`], which builds
//! the unmodified schedule for a property, overlays each active scenario
//! independently, and folds all active scenarios into a combined projection
//! when more than one is active. All schedules are freshly built value
//! sequences; nothing aliases the baseline.

pub mod analysis;
pub mod baseline;
pub mod combine;
pub mod model;
pub mod payment;
pub mod scenario;
