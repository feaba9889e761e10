//! Social security contribution calculation.
//!
//! Health and pension contributions are split between employee and employer;
//! the ARL premium is employer-only and tiered by occupational risk. Every
//! amount is a percentage of the contribution base, never of the raw salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LegalConstants;
use crate::error::PayrollResult;
use crate::models::SocialSecurityResult;

use super::contribution_base::contribution_base;
use super::risk_tier::risk_tier_rate;

/// Computes the monthly social security contributions for one employee.
///
/// # Arguments
///
/// * `salary` - The raw monthly salary in pesos
/// * `risk_tier` - The occupational risk tier, 1 through 5
/// * `constants` - The legal constants table
///
/// # Returns
///
/// A [`SocialSecurityResult`] with every share and total, or
/// [`crate::error::PayrollError::InvalidRiskTier`] when the tier is outside
/// 1 to 5.
///
/// # Legal Reference
///
/// Ley 100 de 1993 sets the health split (4% employee, 8.5% employer) and
/// the pension split (4% employee, 12% employer); Decreto 1607 de 2002
/// tiers the ARL premium.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::calculate_social_security;
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
///
/// let result = calculate_social_security(Decimal::from(2_000_000), 1, &constants).unwrap();
/// assert_eq!(result.ibc, Decimal::from(2_249_095));
/// assert_eq!(result.health_employee, Decimal::from_str("89963.80").unwrap());
/// ```
pub fn calculate_social_security(
    salary: Decimal,
    risk_tier: u8,
    constants: &LegalConstants,
) -> PayrollResult<SocialSecurityResult> {
    let arl_rate = risk_tier_rate(risk_tier, constants)?;
    let ibc = contribution_base(salary, constants);
    let rates = &constants.social_security_rates;

    let health_employee = ibc * rates.health_employee;
    let health_employer = ibc * rates.health_employer;
    let pension_employee = ibc * rates.pension_employee;
    let pension_employer = ibc * rates.pension_employer;
    let arl = ibc * arl_rate;

    let total_health = health_employee + health_employer;
    let total_pension = pension_employee + pension_employer;
    let total_employee = health_employee + pension_employee;
    let total_employer = health_employer + pension_employer + arl;

    debug!(%salary, %ibc, tier = risk_tier, "computed social security contributions");

    Ok(SocialSecurityResult {
        ibc,
        health_employee,
        health_employer,
        total_health,
        pension_employee,
        pension_employer,
        total_pension,
        arl,
        total_employee,
        total_employer,
        total_contributions: total_health + total_pension + arl,
    })
}
