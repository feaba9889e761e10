//! Salary-threshold eligibility predicates.
//!
//! Several entitlements and exemptions switch on or off at multiples of
//! the monthly minimum wage. Each predicate here tests the raw monthly
//! salary against the relevant threshold; every boundary is inclusive on
//! the side the law grants the entitlement.

use rust_decimal::Decimal;

use crate::config::LegalConstants;

/// Returns whether a salary meets the legal monthly minimum wage
/// (CST art. 145).
pub fn meets_minimum_wage(salary: Decimal, constants: &LegalConstants) -> bool {
    salary >= constants.minimum_wage
}

/// Returns whether a salary qualifies for the transport allowance: at most
/// two minimum wages (Ley 15 de 1959).
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::qualifies_for_transport_allowance;
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
///
/// let constants = LegalConstants::colombia_2026();
///
/// assert!(qualifies_for_transport_allowance(Decimal::from(2_000_000), &constants));
/// assert!(!qualifies_for_transport_allowance(Decimal::from(4_000_000), &constants));
/// ```
pub fn qualifies_for_transport_allowance(salary: Decimal, constants: &LegalConstants) -> bool {
    salary <= constants.two_minimum_wages()
}

/// Returns whether an employer is exempt from ICBF and SENA levies for a
/// salary: at most ten minimum wages (Ley 1607 de 2012, art. 25). The
/// compensation-fund levy is owed regardless.
pub fn is_exempt_from_icbf_sena(salary: Decimal, constants: &LegalConstants) -> bool {
    salary <= constants.parafiscal_exemption_threshold()
}

/// Returns whether a salary can be agreed as an integral salary, which
/// folds benefits into a single payment: at least thirteen minimum wages
/// (CST art. 132).
pub fn is_integral_salary(salary: Decimal, constants: &LegalConstants) -> bool {
    salary >= constants.integral_salary_floor
}

/// Returns whether the employer owes the work clothing and footwear
/// endowment: at most two minimum wages (CST art. 230).
pub fn requires_work_clothing(salary: Decimal, constants: &LegalConstants) -> bool {
    salary <= constants.two_minimum_wages()
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

    /// EL-001: the minimum-wage check is inclusive at the wage itself
    #[test]
    fn test_meets_minimum_wage_boundary() {
        let k = constants();

        assert!(meets_minimum_wage(dec("1750905"), &k));
        assert!(meets_minimum_wage(dec("5000000"), &k));
        assert!(!meets_minimum_wage(dec("1750904"), &k));
    }

    /// EL-002: transport allowance is inclusive at two minimum wages
    #[test]
    fn test_transport_allowance_boundary() {
        let k = constants();

        assert!(qualifies_for_transport_allowance(dec("3501810"), &k));
        assert!(!qualifies_for_transport_allowance(dec("3501811"), &k));
    }

    /// EL-003: ICBF and SENA exemption is inclusive at ten minimum wages
    #[test]
    fn test_icbf_sena_exemption_boundary() {
        let k = constants();

        assert!(is_exempt_from_icbf_sena(dec("17509050"), &k));
        assert!(!is_exempt_from_icbf_sena(dec("17509051"), &k));
    }

    /// EL-004: integral salary starts at thirteen minimum wages
    #[test]
    fn test_integral_salary_boundary() {
        let k = constants();

        assert!(is_integral_salary(dec("22761765"), &k));
        assert!(is_integral_salary(dec("30000000"), &k));
        assert!(!is_integral_salary(dec("22761764"), &k));
    }

    /// EL-005: the clothing endowment shares the transport threshold
    #[test]
    fn test_work_clothing_boundary() {
        let k = constants();

        assert!(requires_work_clothing(dec("3501810"), &k));
        assert!(!requires_work_clothing(dec("3501811"), &k));
    }

    #[test]
    fn test_clothing_and_transport_agree_everywhere() {
        let k = constants();

        for salary in ["0", "1750905", "3501810", "3501811", "20000000"] {
            let salary = dec(salary);
            assert_eq!(
                requires_work_clothing(salary, &k),
                qualifies_for_transport_allowance(salary, &k),
            );
        }
    }
}
