use chrono::NaiveDate;
use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use bond_analytics_core::amortization::model::{LoanScenario, Property};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct AnalysisBindingInput {
    property: Property,
    #[serde(default)]
    scenarios: Vec<LoanScenario>,
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

#[napi]
pub fn generate_property_analysis(input_json: String) -> NapiResult<String> {
    let binding_input: AnalysisBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let as_of = binding_input
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let output = bond_analytics_core::amortization::analysis::generate_property_analysis(
        &binding_input.property,
        &binding_input.scenarios,
        as_of,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn baseline_schedule(input_json: String) -> NapiResult<String> {
    let binding_input: AnalysisBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let as_of = binding_input
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let output =
        bond_analytics_core::amortization::baseline::build_schedule(&binding_input.property, as_of)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculators
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_repayment(input_json: String) -> NapiResult<String> {
    let input: bond_analytics_core::calculators::repayment::RepaymentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = bond_analytics_core::calculators::repayment::calculate_repayment(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_affordability(input_json: String) -> NapiResult<String> {
    let input: bond_analytics_core::calculators::affordability::AffordabilityInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = bond_analytics_core::calculators::affordability::calculate_affordability(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_deposit_savings(input_json: String) -> NapiResult<String> {
    let input: bond_analytics_core::calculators::deposit_savings::DepositSavingsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        bond_analytics_core::calculators::deposit_savings::calculate_deposit_savings(&input)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_additional_payment(input_json: String) -> NapiResult<String> {
    let input: bond_analytics_core::calculators::additional_payment::AdditionalPaymentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        bond_analytics_core::calculators::additional_payment::calculate_additional_payment(&input)
            .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
