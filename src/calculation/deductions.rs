//! Income-tax deduction helpers.
//!
//! Monthly deductions lower the income-tax withholding base. The
//! per-dependent value and the health and housing caps are fixed by the
//! constants table (Estatuto Tributario art. 387, stated in UVT); meal
//! vouchers are tax-exempt up to an annual value for salaries under a
//! legal ceiling (Ley 1607 de 2012).

use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::models::{DeductionsInput, DeductionsResult};

/// Calculates the deduction for economic dependents: the per-dependent
/// value times the count. The count itself is not capped; the per-dependent
/// value already embodies the legal limit.
pub fn dependents_deduction(count: u32, constants: &LegalConstants) -> Decimal {
    Decimal::from(count) * constants.dependent_deduction
}

/// Calculates the prepaid-medicine deduction: actual spending, capped at
/// 32 UVT monthly.
pub fn health_deduction(monthly_spent: Decimal, constants: &LegalConstants) -> Decimal {
    monthly_spent.min(constants.health_deduction_cap)
}

/// Calculates the housing-interest deduction: actual interest paid, capped
/// at 100 UVT monthly.
pub fn housing_deduction(monthly_paid: Decimal, constants: &LegalConstants) -> Decimal {
    monthly_paid.min(constants.housing_deduction_cap)
}

/// Returns whether a salary qualifies for tax-exempt meal vouchers: the
/// annualized salary must not exceed the 310 UVT ceiling.
pub fn is_voucher_eligible(salary: Decimal, constants: &LegalConstants) -> bool {
    salary * Decimal::from(12) <= constants.voucher_salary_threshold
}

/// Returns the maximum monthly tax-exempt meal-voucher amount: one twelfth
/// of the annual exempt value for eligible salaries, zero otherwise.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::voucher_max_amount;
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
///
/// let amount = voucher_max_amount(Decimal::from(1_300_000), &constants);
/// assert_eq!(amount.round_dp(2), Decimal::from_str("178916.67").unwrap());
///
/// assert_eq!(voucher_max_amount(Decimal::from(5_000_000), &constants), Decimal::ZERO);
/// ```
pub fn voucher_max_amount(salary: Decimal, constants: &LegalConstants) -> Decimal {
    if is_voucher_eligible(salary, constants) {
        constants.voucher_exempt_cap / Decimal::from(12)
    } else {
        Decimal::ZERO
    }
}

/// Aggregates the monthly deductions an employee claims.
///
/// # Arguments
///
/// * `input` - Claimed dependents, health spending and housing interest;
///   absent fields are zero
/// * `constants` - The legal constants table
pub fn aggregate_deductions(
    input: &DeductionsInput,
    constants: &LegalConstants,
) -> DeductionsResult {
    let dependents = dependents_deduction(input.dependents, constants);
    let health = health_deduction(input.health_spent, constants);
    let housing = housing_deduction(input.housing_paid, constants);

    DeductionsResult {
        dependents,
        health,
        housing,
        total: dependents + health + housing,
    }
}
