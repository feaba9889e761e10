//! Contribution base (IBC) derivation.
//!
//! The Ingreso Base de Cotización is the amount social security and
//! parafiscal contributions are computed from. It adds the transport
//! allowance for low salaries, then applies the legal ceiling and floor,
//! in that order.

use rust_decimal::Decimal;

use crate::config::LegalConstants;

use super::eligibility::qualifies_for_transport_allowance;

/// Derives the contribution base (IBC) from a monthly salary.
///
/// Salaries up to two minimum wages first gain the transport allowance.
/// The result is then capped at 25 minimum wages and floored at one minimum
/// wage, so the base always lies inside the legal band regardless of input.
///
/// # Arguments
///
/// * `salary` - The raw monthly salary in pesos
/// * `constants` - The legal constants table
///
/// # Legal Reference
///
/// Ley 100 de 1993 arts. 18 and 204 define the base and its 25-wage
/// ceiling; Ley 15 de 1959 created the transport allowance.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::contribution_base;
/// use nomina_engine::config::LegalConstants;
/// use rust_decimal::Decimal;
///
/// let constants = LegalConstants::colombia_2026();
///
/// // Below two minimum wages the allowance joins the base.
/// let base = contribution_base(Decimal::from(2_000_000), &constants);
/// assert_eq!(base, Decimal::from(2_249_095));
/// ```
pub fn contribution_base(salary: Decimal, constants: &LegalConstants) -> Decimal {
    let mut base = salary;
    if qualifies_for_transport_allowance(salary, constants) {
        base += constants.transport_allowance;
    }

    base.min(constants.ibc_cap).max(constants.minimum_wage)
}
