//! Employer-side benefits (prestaciones sociales) result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly accruals of the statutory employer-side benefits.
///
/// Severance, the service bonus and vacation accrue monthly;
/// `annual_total` projects a full year and adds the severance interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsResult {
    /// Monthly severance accrual (cesantías, CST art. 249).
    pub severance: Decimal,
    /// Monthly service-bonus accrual (prima de servicios, CST art. 306).
    pub service_bonus: Decimal,
    /// Annual interest on accumulated severance (Ley 52 de 1975).
    pub severance_interest: Decimal,
    /// Monthly vacation accrual (CST art. 186), salary only.
    pub vacation: Decimal,
    /// Severance plus service bonus plus vacation for one month.
    pub monthly_total: Decimal,
    /// Twelve monthly totals plus the severance interest.
    pub annual_total: Decimal,
}
