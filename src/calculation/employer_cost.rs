//! Employer cost roll-up and net salary.

use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::error::PayrollResult;

use super::parafiscal::calculate_parafiscal;
use super::social_security::calculate_social_security;

/// Computes the total monthly employer cost of social security and
/// parafiscal levies for one employee.
///
/// This is the employer side of the contributions only; it does not include
/// the salary itself or benefit accruals.
///
/// # Arguments
///
/// * `salary` - The raw monthly salary in pesos
/// * `risk_tier` - The occupational risk tier, 1 through 5
/// * `constants` - The legal constants table
pub fn total_employer_cost(
    salary: Decimal,
    risk_tier: u8,
    constants: &LegalConstants,
) -> PayrollResult<Decimal> {
    let social = calculate_social_security(salary, risk_tier, constants)?;
    let parafiscal = calculate_parafiscal(salary, constants);

    Ok(social.total_employer + parafiscal.total)
}

/// Computes the monthly net salary after employee-side withholdings.
///
/// Only social security withholdings are deducted here; income-tax
/// withholding is a separate concern.
///
/// # Arguments
///
/// * `salary` - The raw monthly salary in pesos
/// * `risk_tier` - The occupational risk tier, 1 through 5
/// * `constants` - The legal constants table
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::net_salary;
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
///
/// let net = net_salary(Decimal::from(2_000_000), 1, &constants).unwrap();
/// assert_eq!(net, Decimal::from_str("1820072.40").unwrap());
/// ```
pub fn net_salary(
    salary: Decimal,
    risk_tier: u8,
    constants: &LegalConstants,
) -> PayrollResult<Decimal> {
    let social = calculate_social_security(salary, risk_tier, constants)?;
    Ok(salary - social.total_employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn constants() -> LegalConstants {
        LegalConstants::colombia_2026()
    }

    /// EC-001: employer cost stacks social security and parafiscales
    #[test]
    fn test_employer_cost_for_two_million_at_tier_one() {
        let cost = total_employer_cost(dec("2000000"), 1, &constants()).unwrap();

        // 472_804.7509 social security + 89_963.80 compensation fund.
        assert_eq!(cost, dec("562768.5509"));
    }

    /// EC-002: net salary removes only the employee share
    #[test]
    fn test_net_salary_for_two_million() {
        let net = net_salary(dec("2000000"), 1, &constants()).unwrap();
        assert_eq!(net, dec("1820072.40"));
    }

    #[test]
    fn test_net_salary_is_independent_of_risk_tier() {
        let k = constants();

        let tier_one = net_salary(dec("3000000"), 1, &k).unwrap();
        let tier_five = net_salary(dec("3000000"), 5, &k).unwrap();
        assert_eq!(tier_one, tier_five);
    }

    #[test]
    fn test_employer_cost_rises_with_risk_tier() {
        let k = constants();

        let tier_one = total_employer_cost(dec("3000000"), 1, &k).unwrap();
        let tier_five = total_employer_cost(dec("3000000"), 5, &k).unwrap();
        assert!(tier_five > tier_one);
    }

    #[test]
    fn test_invalid_tier_propagates_from_both_functions() {
        let k = constants();

        assert!(total_employer_cost(dec("2000000"), 0, &k).is_err());
        assert!(net_salary(dec("2000000"), 0, &k).is_err());
    }

    #[test]
    fn test_net_salary_consistency_with_social_security() {
        let k = constants();
        let salary = dec("4000000");

        let social = calculate_social_security(salary, 2, &k).unwrap();
        let net = net_salary(salary, 2, &k).unwrap();
        assert_eq!(net, salary - social.total_employee);
    }
}
