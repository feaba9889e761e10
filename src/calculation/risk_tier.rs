//! Occupational risk tier lookup.
//!
//! ARL premiums are tiered by the riskiness of the job, from office work
//! (tier I) to high-risk activities such as construction at heights
//! (tier V). Decreto 1607 de 2002 fixes the rate for each tier.

use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::error::{PayrollError, PayrollResult};

/// The risk tier assumed when a caller does not specify one (tier I,
/// administrative and office work).
pub const DEFAULT_RISK_TIER: u8 = 1;

/// Looks up the ARL premium rate for an occupational risk tier.
///
/// # Arguments
///
/// * `tier` - The risk tier, 1 through 5
/// * `constants` - The legal constants table
///
/// # Returns
///
/// The premium rate as a fraction of the IBC, or
/// [`PayrollError::InvalidRiskTier`] for any tier outside 1 to 5. This is
/// the only rejected input in the calculation surface; monetary inputs are
/// never validated.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::{risk_tier_rate, DEFAULT_RISK_TIER};
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
///
/// let rate = risk_tier_rate(DEFAULT_RISK_TIER, &constants).unwrap();
/// assert_eq!(rate, Decimal::from_str("0.00522").unwrap());
///
/// assert!(risk_tier_rate(6, &constants).is_err());
/// ```
pub fn risk_tier_rate(tier: u8, constants: &LegalConstants) -> PayrollResult<Decimal> {
    if !(1..=5).contains(&tier) {
        return Err(PayrollError::InvalidRiskTier { tier });
    }

    Ok(constants.social_security_rates.arl_by_risk_tier[usize::from(tier - 1)])
}
