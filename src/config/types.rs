//! Legal constants table for Colombian payroll.
//!
//! This module contains the strongly-typed constants structures that are
//! deserialized from a YAML constants file. Every calculation function in
//! the crate receives a [`LegalConstants`] reference; nothing is read from
//! global state, which keeps the math testable against any legal year.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{PayrollError, PayrollResult};

/// Surcharge rates for hours worked outside the ordinary daytime schedule.
///
/// The first four fields are raw surcharge fractions applied on top of the
/// ordinary hourly value. The two Sunday-overtime fields are full standalone
/// multipliers fixed by law; they are never derived by adding components.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SurchargeRates {
    /// Daytime overtime (hora extra diurna), CST art. 168: 25%.
    pub daytime_overtime: Decimal,
    /// Night overtime (hora extra nocturna), CST art. 168: 75%.
    pub night_overtime: Decimal,
    /// Night-shift surcharge (recargo nocturno), CST art. 168: 35%.
    pub night_surcharge: Decimal,
    /// Sunday/holiday daytime work (CST art. 179): 80%.
    pub sunday_holiday: Decimal,
    /// Sunday daytime overtime, composite multiplier: 2.05 of the ordinary value.
    pub sunday_daytime_overtime: Decimal,
    /// Sunday night overtime, composite multiplier: 2.55 of the ordinary value.
    pub sunday_night_overtime: Decimal,
}

/// Contribution rates for the social security system (Ley 100 de 1993).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialSecurityRates {
    /// Employee share of health contributions: 4% of the IBC.
    pub health_employee: Decimal,
    /// Employer share of health contributions: 8.5% of the IBC.
    pub health_employer: Decimal,
    /// Employee share of pension contributions: 4% of the IBC.
    pub pension_employee: Decimal,
    /// Employer share of pension contributions: 12% of the IBC.
    pub pension_employer: Decimal,
    /// ARL rates by occupational risk tier (Decreto 1607 de 2002),
    /// indexed by tier minus one.
    pub arl_by_risk_tier: [Decimal; 5],
}

/// Parafiscal levy rates paid by the employer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParafiscalRates {
    /// Family compensation fund (caja de compensación, Ley 21 de 1982): 4%.
    pub compensation_fund: Decimal,
    /// Instituto Colombiano de Bienestar Familiar (Ley 27 de 1974): 3%.
    pub icbf: Decimal,
    /// Servicio Nacional de Aprendizaje (Ley 21 de 1982): 2%.
    pub sena: Decimal,
}

/// The complete legal constants table for one legal year.
///
/// Monetary values are monthly Colombian pesos unless stated otherwise.
/// The table invariant is checked by [`LegalConstants::validate`]: every
/// value is positive and every percentage rate lies in [0, 1]; only the two
/// composite Sunday-overtime multipliers may exceed 1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegalConstants {
    /// Monthly legal minimum wage (SMLMV).
    pub minimum_wage: Decimal,
    /// Tax unit value (UVT, Ley 1111 de 2006), used to state deduction caps.
    pub uvt: Decimal,
    /// Monthly transport allowance for salaries up to two minimum wages.
    pub transport_allowance: Decimal,
    /// General VAT rate; part of the shared legal table.
    pub general_vat_rate: Decimal,
    /// Monthly hour divisor before the Ley 2101 de 2021 workday reduction.
    pub pre_cutover_monthly_hours: Decimal,
    /// Monthly hour divisor on and after the Ley 2101 de 2021 cutover.
    pub post_cutover_monthly_hours: Decimal,
    /// Contribution-base ceiling: 25 minimum wages.
    pub ibc_cap: Decimal,
    /// Salario integral floor: 13 minimum wages (CST art. 132).
    pub integral_salary_floor: Decimal,
    /// Monthly deduction value per economic dependent (32 UVT).
    pub dependent_deduction: Decimal,
    /// Monthly cap on the prepaid-medicine deduction (32 UVT).
    pub health_deduction_cap: Decimal,
    /// Monthly cap on the housing-interest deduction (100 UVT).
    pub housing_deduction_cap: Decimal,
    /// Annualized salary ceiling for the meal-voucher exemption (310 UVT).
    pub voucher_salary_threshold: Decimal,
    /// Annual exempt meal-voucher value (41 UVT, Ley 1607 de 2012).
    pub voucher_exempt_cap: Decimal,
    /// Annual interest rate on accumulated severance (Ley 52 de 1975).
    pub severance_interest_rate: Decimal,
    /// Surcharge rates for overtime and night/Sunday work.
    pub surcharge_rates: SurchargeRates,
    /// Social security contribution rates.
    pub social_security_rates: SocialSecurityRates,
    /// Parafiscal levy rates.
    pub parafiscal_rates: ParafiscalRates,
}

impl LegalConstants {
    /// Returns the built-in constants snapshot for the 2026 legal year.
    ///
    /// Useful for tests and for applications that do not manage their own
    /// constants file. The snapshot satisfies [`LegalConstants::validate`].
    pub fn colombia_2026() -> Self {
        Self {
            minimum_wage: Decimal::from(1_750_905),
            uvt: Decimal::from(52_374),
            transport_allowance: Decimal::from(249_095),
            general_vat_rate: Decimal::new(19, 2),
            pre_cutover_monthly_hours: Decimal::from(220),
            post_cutover_monthly_hours: Decimal::from(210),
            ibc_cap: Decimal::from(43_773_000),
            integral_salary_floor: Decimal::from(22_761_765),
            dependent_deduction: Decimal::from(1_676_000),
            health_deduction_cap: Decimal::from(1_676_000),
            housing_deduction_cap: Decimal::from(5_237_000),
            voucher_salary_threshold: Decimal::from(16_236_000),
            voucher_exempt_cap: Decimal::from(2_147_000),
            severance_interest_rate: Decimal::new(12, 2),
            surcharge_rates: SurchargeRates {
                daytime_overtime: Decimal::new(25, 2),
                night_overtime: Decimal::new(75, 2),
                night_surcharge: Decimal::new(35, 2),
                sunday_holiday: Decimal::new(80, 2),
                sunday_daytime_overtime: Decimal::new(205, 2),
                sunday_night_overtime: Decimal::new(255, 2),
            },
            social_security_rates: SocialSecurityRates {
                health_employee: Decimal::new(4, 2),
                health_employer: Decimal::new(85, 3),
                pension_employee: Decimal::new(4, 2),
                pension_employer: Decimal::new(12, 2),
                arl_by_risk_tier: [
                    Decimal::new(522, 5),
                    Decimal::new(1_044, 5),
                    Decimal::new(2_436, 5),
                    Decimal::new(4_350, 5),
                    Decimal::new(6_960, 5),
                ],
            },
            parafiscal_rates: ParafiscalRates {
                compensation_fund: Decimal::new(4, 2),
                icbf: Decimal::new(3, 2),
                sena: Decimal::new(2, 2),
            },
        }
    }

    /// Returns two minimum wages, the ceiling for the transport allowance,
    /// the benefits-base allowance and the dotación entitlement.
    pub fn two_minimum_wages(&self) -> Decimal {
        self.minimum_wage * Decimal::from(2)
    }

    /// Returns ten minimum wages, the salary ceiling for the ICBF/SENA
    /// exemption (Ley 1607 de 2012).
    pub fn parafiscal_exemption_threshold(&self) -> Decimal {
        self.minimum_wage * Decimal::from(10)
    }

    /// Checks the table invariant.
    ///
    /// Every monetary value and hour divisor must be positive, and every
    /// percentage rate must lie in [0, 1]. The two composite Sunday-overtime
    /// multipliers only need to be positive.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the table is usable, or the first
    /// [`PayrollError::InvalidConstant`] encountered.
    pub fn validate(&self) -> PayrollResult<()> {
        fn positive(name: &str, value: Decimal) -> PayrollResult<()> {
            if value > Decimal::ZERO {
                Ok(())
            } else {
                Err(PayrollError::InvalidConstant {
                    name: name.to_string(),
                    message: format!("must be positive, got {}", value),
                })
            }
        }

        fn unit_rate(name: &str, value: Decimal) -> PayrollResult<()> {
            if value >= Decimal::ZERO && value <= Decimal::ONE {
                Ok(())
            } else {
                Err(PayrollError::InvalidConstant {
                    name: name.to_string(),
                    message: format!("must lie in [0, 1], got {}", value),
                })
            }
        }

        positive("minimum_wage", self.minimum_wage)?;
        positive("uvt", self.uvt)?;
        positive("transport_allowance", self.transport_allowance)?;
        positive("pre_cutover_monthly_hours", self.pre_cutover_monthly_hours)?;
        positive(
            "post_cutover_monthly_hours",
            self.post_cutover_monthly_hours,
        )?;
        positive("ibc_cap", self.ibc_cap)?;
        positive("integral_salary_floor", self.integral_salary_floor)?;
        positive("dependent_deduction", self.dependent_deduction)?;
        positive("health_deduction_cap", self.health_deduction_cap)?;
        positive("housing_deduction_cap", self.housing_deduction_cap)?;
        positive("voucher_salary_threshold", self.voucher_salary_threshold)?;
        positive("voucher_exempt_cap", self.voucher_exempt_cap)?;

        unit_rate("general_vat_rate", self.general_vat_rate)?;
        unit_rate("severance_interest_rate", self.severance_interest_rate)?;

        let surcharges = &self.surcharge_rates;
        unit_rate("surcharge_rates.daytime_overtime", surcharges.daytime_overtime)?;
        unit_rate("surcharge_rates.night_overtime", surcharges.night_overtime)?;
        unit_rate("surcharge_rates.night_surcharge", surcharges.night_surcharge)?;
        unit_rate("surcharge_rates.sunday_holiday", surcharges.sunday_holiday)?;
        positive(
            "surcharge_rates.sunday_daytime_overtime",
            surcharges.sunday_daytime_overtime,
        )?;
        positive(
            "surcharge_rates.sunday_night_overtime",
            surcharges.sunday_night_overtime,
        )?;

        let social = &self.social_security_rates;
        unit_rate("social_security_rates.health_employee", social.health_employee)?;
        unit_rate("social_security_rates.health_employer", social.health_employer)?;
        unit_rate(
            "social_security_rates.pension_employee",
            social.pension_employee,
        )?;
        unit_rate(
            "social_security_rates.pension_employer",
            social.pension_employer,
        )?;
        for (index, arl_rate) in social.arl_by_risk_tier.iter().enumerate() {
            unit_rate(
                &format!("social_security_rates.arl_by_risk_tier[{}]", index),
                *arl_rate,
            )?;
        }

        let parafiscal = &self.parafiscal_rates;
        unit_rate("parafiscal_rates.compensation_fund", parafiscal.compensation_fund)?;
        unit_rate("parafiscal_rates.icbf", parafiscal.icbf)?;
        unit_rate("parafiscal_rates.sena", parafiscal.sena)?;

        Ok(())
    }
}
