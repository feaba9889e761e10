//! Monthly surcharge aggregation.
//!
//! This module turns a month of categorized hours into peso amounts and a
//! payroll total. The four simple categories contribute only the surcharge
//! fraction because their underlying hour is already paid inside the monthly
//! salary; Sunday-overtime hours are additional hours paid at their full
//! composite value.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::LegalConstants;
use crate::models::{SurchargeBreakdown, SurchargeDetail, WorkedHours};

use super::hourly_rate::ordinary_hourly_rate;

/// Aggregates one month of surcharge-attracting hours into peso amounts.
///
/// # Arguments
///
/// * `salary` - The monthly salary in pesos
/// * `hours` - Hours worked per surcharge category; absent categories are zero
/// * `reference_date` - The date the month is valued at; `None` means today
/// * `constants` - The legal constants table
///
/// # Returns
///
/// A [`SurchargeBreakdown`] with per-category amounts, the surcharge total
/// and the payroll total (salary plus surcharges).
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::aggregate_surcharges;
/// use nomina_engine::config::LegalConstants;
/// use nomina_engine::models::WorkedHours;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let hours = WorkedHours {
///     daytime_overtime: Decimal::from(10),
///     ..WorkedHours::default()
/// };
///
/// let breakdown = aggregate_surcharges(Decimal::from(2_000_000), &hours, Some(date), &constants);
/// assert_eq!(
///     breakdown.total_surcharges.round_dp(2),
///     Decimal::from_str("22727.27").unwrap(),
/// );
/// ```
pub fn aggregate_surcharges(
    salary: Decimal,
    hours: &WorkedHours,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> SurchargeBreakdown {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    let rates = &constants.surcharge_rates;

    let detail = SurchargeDetail {
        daytime_overtime: hours.daytime_overtime * ordinary * rates.daytime_overtime,
        night_overtime: hours.night_overtime * ordinary * rates.night_overtime,
        night_surcharge: hours.night_surcharge * ordinary * rates.night_surcharge,
        sunday_holiday: hours.sunday_holiday * ordinary * rates.sunday_holiday,
        sunday_daytime_overtime: hours.sunday_daytime_overtime
            * ordinary
            * rates.sunday_daytime_overtime,
        sunday_night_overtime: hours.sunday_night_overtime
            * ordinary
            * rates.sunday_night_overtime,
    };

    let total_surcharges = detail.daytime_overtime
        + detail.night_overtime
        + detail.night_surcharge
        + detail.sunday_holiday
        + detail.sunday_daytime_overtime
        + detail.sunday_night_overtime;
    let total_payroll = salary + total_surcharges;

    debug!(
        %salary,
        hours = %hours.total_hours(),
        total = %total_surcharges,
        "aggregated monthly surcharges"
    );

    SurchargeBreakdown {
        ordinary_hourly_rate: ordinary,
        detail,
        total_surcharges,
        total_payroll,
    }
}
