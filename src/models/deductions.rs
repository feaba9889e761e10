//! Income-tax deduction input and result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs to the monthly deduction aggregation.
///
/// Every field is independently optional in serialized form and defaults to
/// zero, mirroring an employee who claims nothing.
///
/// # Example
///
/// ```
/// use nomina_engine::models::DeductionsInput;
/// use rust_decimal::Decimal;
///
/// let input = DeductionsInput {
///     dependents: 2,
///     ..DeductionsInput::default()
/// };
/// assert_eq!(input.health_spent, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeductionsInput {
    /// Number of economic dependents claimed.
    #[serde(default)]
    pub dependents: u32,
    /// Monthly spending on prepaid medicine or complementary health plans.
    #[serde(default)]
    pub health_spent: Decimal,
    /// Monthly housing-loan interest paid.
    #[serde(default)]
    pub housing_paid: Decimal,
}

/// Monthly deduction amounts after applying the legal caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionsResult {
    /// Deduction for economic dependents (uncapped by count).
    pub dependents: Decimal,
    /// Prepaid-medicine deduction, capped at 32 UVT monthly.
    pub health: Decimal,
    /// Housing-interest deduction, capped at 100 UVT monthly.
    pub housing: Decimal,
    /// Sum of the three deductions.
    pub total: Decimal,
}
