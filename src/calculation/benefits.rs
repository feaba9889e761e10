//! Employer-side benefits (prestaciones sociales) calculation.
//!
//! Severance, the service bonus and vacation accrue monthly against a
//! benefits base; severance additionally earns annual interest. The base
//! includes the transport allowance for low salaries, but vacation is
//! always computed on the salary alone (CST art. 186 pays vacation as
//! ordinary salary, which the allowance is not).

use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::models::BenefitsResult;

use super::eligibility::qualifies_for_transport_allowance;

/// Months in a complete benefits year, the conventional argument to
/// [`severance_interest`] and [`aggregate_benefits`] for annual figures.
pub const FULL_YEAR_MONTHS: u32 = 12;

/// Returns the base the severance and service-bonus accruals are computed
/// from: salary plus the transport allowance when the salary is at most two
/// minimum wages.
pub fn benefits_base(salary: Decimal, constants: &LegalConstants) -> Decimal {
    if qualifies_for_transport_allowance(salary, constants) {
        salary + constants.transport_allowance
    } else {
        salary
    }
}

/// Calculates the monthly severance accrual (cesantías, CST art. 249):
/// one twelfth of the benefits base.
pub fn severance(salary: Decimal, constants: &LegalConstants) -> Decimal {
    benefits_base(salary, constants) / Decimal::from(12)
}

/// Calculates the monthly service-bonus accrual (prima de servicios,
/// CST art. 306): one twelfth of the benefits base.
pub fn service_bonus(salary: Decimal, constants: &LegalConstants) -> Decimal {
    benefits_base(salary, constants) / Decimal::from(12)
}

/// Calculates the interest owed on accumulated severance.
///
/// Ley 52 de 1975 sets 12% annual interest on the severance balance; the
/// accumulated balance after `months_worked` months is the monthly accrual
/// times the months, so a full year earns 12% of a full year's severance.
///
/// # Arguments
///
/// * `salary` - The monthly salary in pesos
/// * `months_worked` - Months accrued in the current benefits year
/// * `constants` - The legal constants table
pub fn severance_interest(
    salary: Decimal,
    months_worked: u32,
    constants: &LegalConstants,
) -> Decimal {
    let accumulated = severance(salary, constants) * Decimal::from(months_worked);
    accumulated * constants.severance_interest_rate
}

/// Calculates the monthly vacation accrual (CST art. 186): one
/// twenty-fourth of the salary. The transport allowance never enters.
pub fn vacation(salary: Decimal) -> Decimal {
    salary / Decimal::from(24)
}

/// Aggregates the monthly benefit accruals and their annual projection.
///
/// # Arguments
///
/// * `salary` - The monthly salary in pesos
/// * `months_worked` - Months accrued in the current benefits year, used
///   for the severance interest
/// * `constants` - The legal constants table
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::{aggregate_benefits, FULL_YEAR_MONTHS};
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
///
/// let benefits = aggregate_benefits(Decimal::from(2_000_000), FULL_YEAR_MONTHS, &constants);
/// assert_eq!(benefits.monthly_total.round_dp(2), Decimal::from_str("458182.50").unwrap());
/// ```
pub fn aggregate_benefits(
    salary: Decimal,
    months_worked: u32,
    constants: &LegalConstants,
) -> BenefitsResult {
    let severance_accrual = severance(salary, constants);
    let bonus = service_bonus(salary, constants);
    let interest = severance_interest(salary, months_worked, constants);
    let vacation_accrual = vacation(salary);

    let monthly_total = severance_accrual + bonus + vacation_accrual;
    let annual_total = monthly_total * Decimal::from(12) + interest;

    BenefitsResult {
        severance: severance_accrual,
        service_bonus: bonus,
        severance_interest: interest,
        vacation: vacation_accrual,
        monthly_total,
        annual_total,
    }
}

/// Returns the full monthly cost of employing someone at this salary once
/// benefit accruals are counted: salary plus the monthly benefits total.
pub fn monthly_cost_with_benefits(salary: Decimal, constants: &LegalConstants) -> Decimal {
    let benefits = aggregate_benefits(salary, FULL_YEAR_MONTHS, constants);
    salary + benefits.monthly_total
}
