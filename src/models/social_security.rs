//! Social security and parafiscal result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly social security contributions for one employee.
///
/// All amounts derive from the contribution base (IBC), never from the raw
/// salary. Invariants: `total_employee` is the employee health plus pension
/// shares, `total_employer` is the employer health and pension shares plus
/// ARL, and `total_contributions` is `total_health` plus `total_pension`
/// plus `arl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityResult {
    /// The contribution base the amounts were computed from.
    pub ibc: Decimal,
    /// Employee share of health contributions (4% of IBC).
    pub health_employee: Decimal,
    /// Employer share of health contributions (8.5% of IBC).
    pub health_employer: Decimal,
    /// Combined health contributions.
    pub total_health: Decimal,
    /// Employee share of pension contributions (4% of IBC).
    pub pension_employee: Decimal,
    /// Employer share of pension contributions (12% of IBC).
    pub pension_employer: Decimal,
    /// Combined pension contributions.
    pub total_pension: Decimal,
    /// Occupational risk insurance, employer-only, rate set by risk tier.
    pub arl: Decimal,
    /// Everything withheld from the employee.
    pub total_employee: Decimal,
    /// Everything paid by the employer.
    pub total_employer: Decimal,
    /// Grand total entering the social security system.
    pub total_contributions: Decimal,
}

/// Monthly parafiscal levies for one employee, all employer-paid.
///
/// The compensation-fund levy always applies. ICBF and SENA are waived for
/// salaries at or below ten minimum wages (Ley 1607 de 2012); the exemption
/// is decided on the raw monthly salary, never on the IBC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParafiscalResult {
    /// Family compensation fund levy (4% of IBC).
    pub compensation_fund: Decimal,
    /// ICBF levy (3% of IBC, zero when exempt).
    pub icbf: Decimal,
    /// SENA levy (2% of IBC, zero when exempt).
    pub sena: Decimal,
    /// Sum of the three levies.
    pub total: Decimal,
    /// Whether the ICBF/SENA exemption applied.
    pub exempt_icbf_sena: bool,
}
