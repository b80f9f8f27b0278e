pub mod analysis;
pub mod calculators;
