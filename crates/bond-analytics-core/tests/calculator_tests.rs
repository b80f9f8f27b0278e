use bond_analytics_core::calculators::additional_payment::{
    calculate_additional_payment, AdditionalPaymentInput,
};
use bond_analytics_core::calculators::affordability::{
    calculate_affordability, AffordabilityInput,
};
use bond_analytics_core::calculators::deposit_savings::{
    calculate_deposit_savings, DepositSavingsInput,
};
use bond_analytics_core::calculators::repayment::{calculate_repayment, RepaymentInput};
use bond_analytics_core::error::BondAnalyticsError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Repayment tests
// ===========================================================================

#[test]
fn test_repayment_reference_bond() {
    // R1.2m purchase, R200k deposit, 11.5% over 20 years: the financed
    // R1m costs roughly R10,664/month.
    let input = RepaymentInput {
        purchase_price: dec!(1_200_000),
        deposit: dec!(200_000),
        annual_interest_rate: dec!(11.5),
        term_months: 240,
    };
    let out = calculate_repayment(&input).unwrap();

    assert_eq!(out.result.loan_amount, dec!(1_000_000));
    let diff = (out.result.monthly_instalment - dec!(10_664.30)).abs();
    assert!(diff < dec!(1.0), "instalment was {}", out.result.monthly_instalment);
    assert_eq!(
        out.result.total_interest,
        out.result.total_repaid - out.result.loan_amount
    );
}

#[test]
fn test_repayment_shorter_term_costs_less_interest() {
    let base = RepaymentInput {
        purchase_price: dec!(1_000_000),
        deposit: dec!(0),
        annual_interest_rate: dec!(11.0),
        term_months: 240,
    };
    let shorter = RepaymentInput {
        term_months: 120,
        ..base.clone()
    };

    let long = calculate_repayment(&base).unwrap().result;
    let short = calculate_repayment(&shorter).unwrap().result;
    assert!(short.monthly_instalment > long.monthly_instalment);
    assert!(short.total_interest < long.total_interest);
}

#[test]
fn test_repayment_rejects_degenerate_inputs() {
    let zero_price = RepaymentInput {
        purchase_price: dec!(0),
        deposit: dec!(0),
        annual_interest_rate: dec!(11.0),
        term_months: 240,
    };
    assert!(calculate_repayment(&zero_price).is_err());

    let zero_term = RepaymentInput {
        purchase_price: dec!(1_000_000),
        deposit: dec!(0),
        annual_interest_rate: dec!(11.0),
        term_months: 0,
    };
    assert!(calculate_repayment(&zero_term).is_err());
}

// ===========================================================================
// Affordability tests
// ===========================================================================

#[test]
fn test_affordability_instalment_supports_loan() {
    let input = AffordabilityInput {
        gross_monthly_income: dec!(60_000),
        monthly_expenses: dec!(15_000),
        deposit: dec!(150_000),
        annual_interest_rate: dec!(11.5),
        term_months: 240,
    };
    let out = calculate_affordability(&input).unwrap().result;

    // 30% of R60k = R18k instalment.
    assert_eq!(out.max_monthly_instalment, dec!(18_000));
    assert!(out.max_loan_amount > dec!(1_500_000));
    assert_eq!(out.max_purchase_price, out.max_loan_amount + dec!(150_000));

    // The affordable loan at the quoted rate costs no more than the
    // affordable instalment.
    let check = RepaymentInput {
        purchase_price: out.max_loan_amount,
        deposit: dec!(0),
        annual_interest_rate: input.annual_interest_rate,
        term_months: input.term_months,
    };
    let instalment = calculate_repayment(&check).unwrap().result.monthly_instalment;
    let diff = (instalment - out.max_monthly_instalment).abs();
    assert!(diff < dec!(0.01), "round-trip instalment was {}", instalment);
}

#[test]
fn test_affordability_zero_rate_loan_is_instalment_times_term() {
    let input = AffordabilityInput {
        gross_monthly_income: dec!(30_000),
        monthly_expenses: dec!(0),
        deposit: dec!(0),
        annual_interest_rate: dec!(0),
        term_months: 120,
    };
    let out = calculate_affordability(&input).unwrap().result;
    assert_eq!(out.max_loan_amount, dec!(9_000) * dec!(120));
}

#[test]
fn test_affordability_overcommitted_household() {
    let input = AffordabilityInput {
        gross_monthly_income: dec!(25_000),
        monthly_expenses: dec!(26_000),
        deposit: dec!(50_000),
        annual_interest_rate: dec!(11.5),
        term_months: 240,
    };
    let out = calculate_affordability(&input).unwrap();
    assert_eq!(out.result.max_monthly_instalment, Decimal::ZERO);
    assert_eq!(out.result.max_loan_amount, Decimal::ZERO);
    assert_eq!(out.result.max_purchase_price, dec!(50_000));
    assert!(!out.warnings.is_empty());
}

// ===========================================================================
// Deposit savings tests
// ===========================================================================

#[test]
fn test_deposit_savings_reference_horizon() {
    // R120k target from R20k at R3k/month with 6% interest lands well
    // under the 34 months the zero-interest arithmetic would need.
    let input = DepositSavingsInput {
        target_amount: dec!(120_000),
        current_savings: dec!(20_000),
        monthly_saving: dec!(3_000),
        annual_interest_rate: dec!(6),
    };
    let out = calculate_deposit_savings(&input).unwrap().result;

    assert!(out.months_to_target > 0);
    assert!(out.months_to_target < 34);
    assert!(out.projected_balance >= dec!(120_000));
    assert_eq!(
        out.projected_balance,
        input.current_savings + out.total_contributed + out.interest_earned
    );
}

#[test]
fn test_deposit_savings_interest_alone_can_reach_target() {
    // No monthly saving, but compounding on the opening balance still
    // gets there eventually.
    let input = DepositSavingsInput {
        target_amount: dec!(110_000),
        current_savings: dec!(100_000),
        monthly_saving: dec!(0),
        annual_interest_rate: dec!(8),
    };
    let out = calculate_deposit_savings(&input).unwrap().result;
    assert!(out.months_to_target > 0);
    assert_eq!(out.total_contributed, Decimal::ZERO);
    assert!(out.interest_earned >= dec!(10_000));
}

#[test]
fn test_deposit_savings_unreachable_target_is_an_error() {
    let input = DepositSavingsInput {
        target_amount: dec!(1_000_000_000),
        current_savings: dec!(0),
        monthly_saving: dec!(50),
        annual_interest_rate: dec!(0),
    };
    assert!(matches!(
        calculate_deposit_savings(&input),
        Err(BondAnalyticsError::FinancialImpossibility(_))
    ));
}

// ===========================================================================
// Additional payment tests
// ===========================================================================

#[test]
fn test_additional_payment_reference_savings() {
    // R900k at 11.25% over 20 years: an extra R1,000/month cuts several
    // years and six figures of interest.
    let input = AdditionalPaymentInput {
        loan_amount: dec!(900_000),
        annual_interest_rate: dec!(11.25),
        term_months: 240,
        extra_monthly: dec!(1_000),
    };
    let out = calculate_additional_payment(&input).unwrap().result;

    assert_eq!(out.original_term_months, 240);
    assert!(out.months_saved >= 36, "saved only {} months", out.months_saved);
    assert!(out.interest_saved > dec!(100_000));
    assert_eq!(
        out.interest_saved,
        out.total_interest_without_extra - out.total_interest_with_extra
    );
}

#[test]
fn test_additional_payment_scales_with_extra() {
    let small = AdditionalPaymentInput {
        loan_amount: dec!(900_000),
        annual_interest_rate: dec!(11.25),
        term_months: 240,
        extra_monthly: dec!(500),
    };
    let large = AdditionalPaymentInput {
        extra_monthly: dec!(2_000),
        ..small.clone()
    };

    let small_out = calculate_additional_payment(&small).unwrap().result;
    let large_out = calculate_additional_payment(&large).unwrap().result;
    assert!(large_out.months_saved > small_out.months_saved);
    assert!(large_out.interest_saved > small_out.interest_saved);
}
