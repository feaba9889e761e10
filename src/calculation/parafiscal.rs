//! Parafiscal levy calculation.
//!
//! Parafiscales are employer-only payroll levies: the family compensation
//! fund always applies, while ICBF and SENA are waived for salaries at or
//! below ten minimum wages (Ley 1607 de 2012). The exemption is decided on
//! the raw monthly salary; the levy amounts themselves use the IBC.

use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::models::ParafiscalResult;

use super::contribution_base::contribution_base;
use super::eligibility::is_exempt_from_icbf_sena;

/// Computes the monthly parafiscal levies for one employee.
///
/// # Arguments
///
/// * `salary` - The raw monthly salary in pesos
/// * `constants` - The legal constants table
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::calculate_parafiscal;
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
///
/// let constants = LegalConstants::colombia_2026();
///
/// let result = calculate_parafiscal(Decimal::from(2_000_000), &constants);
/// assert!(result.exempt_icbf_sena);
/// assert_eq!(result.icbf, Decimal::ZERO);
/// assert_eq!(result.total, result.compensation_fund);
/// ```
pub fn calculate_parafiscal(salary: Decimal, constants: &LegalConstants) -> ParafiscalResult {
    let ibc = contribution_base(salary, constants);
    let rates = &constants.parafiscal_rates;
    let exempt = is_exempt_from_icbf_sena(salary, constants);

    let compensation_fund = ibc * rates.compensation_fund;
    let (icbf, sena) = if exempt {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        (ibc * rates.icbf, ibc * rates.sena)
    };

    ParafiscalResult {
        compensation_fund,
        icbf,
        sena,
        total: compensation_fund + icbf + sena,
        exempt_icbf_sena: exempt,
    }
}
