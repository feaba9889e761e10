//! Ordinary hourly rate and surcharge rate derivation.
//!
//! This module derives the value of one ordinary hour from a monthly salary
//! and applies the legal multipliers for overtime, night and Sunday/holiday
//! work defined in CST arts. 168 and 179.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::config::LegalConstants;
use crate::models::HourlyRateSet;

/// Effective date of the Ley 2101 de 2021 step that lowers the monthly hour
/// divisor from 220 to 210.
pub const WORKDAY_REDUCTION_CUTOVER: NaiveDate = match NaiveDate::from_ymd_opt(2026, 7, 15) {
    Some(date) => date,
    None => panic!("hardcoded cutover date is valid"),
};

/// Resolves an optional reference date to the current local date.
fn resolve_date(reference_date: Option<NaiveDate>) -> NaiveDate {
    reference_date.unwrap_or_else(|| Local::now().date_naive())
}

/// Returns the monthly hour divisor in force on the given date.
///
/// The divisor is 220 before [`WORKDAY_REDUCTION_CUTOVER`] and 210 on or
/// after it.
fn monthly_hours(reference_date: NaiveDate, constants: &LegalConstants) -> Decimal {
    if reference_date >= WORKDAY_REDUCTION_CUTOVER {
        constants.post_cutover_monthly_hours
    } else {
        constants.pre_cutover_monthly_hours
    }
}

/// Calculates the value of one ordinary hour for a monthly salary.
///
/// # Arguments
///
/// * `salary` - The monthly salary in pesos
/// * `reference_date` - The date the hour is worked; `None` means today
/// * `constants` - The legal constants table
///
/// # Returns
///
/// The salary divided by the monthly hour divisor in force on the
/// reference date. A zero salary yields zero.
///
/// # Legal Reference
///
/// Ley 2101 de 2021 reduces the weekly working hours in steps; the step on
/// 2026-07-15 moves the monthly divisor from 220 to 210 hours.
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::ordinary_hourly_rate;
/// use nomina_engine::config::LegalConstants;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
///
/// let rate = ordinary_hourly_rate(Decimal::from(2_000_000), Some(date), &constants);
/// assert_eq!(rate.round_dp(2), Decimal::from_str("9090.91").unwrap());
/// ```
pub fn ordinary_hourly_rate(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> Decimal {
    let date = resolve_date(reference_date);
    salary / monthly_hours(date, constants)
}

/// Calculates the daytime overtime hourly value: 125% of the ordinary value
/// (CST art. 168, 25% surcharge).
///
/// # Examples
///
/// ```
/// use nomina_engine::calculation::daytime_overtime_rate;
/// use nomina_engine::config::LegalConstants;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let constants = LegalConstants::colombia_2026();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
///
/// let rate = daytime_overtime_rate(Decimal::from(2_000_000), Some(date), &constants);
/// assert_eq!(rate.round_dp(2), Decimal::from_str("11363.64").unwrap());
/// ```
pub fn daytime_overtime_rate(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> Decimal {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    ordinary * (Decimal::ONE + constants.surcharge_rates.daytime_overtime)
}

/// Calculates the night overtime hourly value: 175% of the ordinary value
/// (CST art. 168, 75% surcharge).
pub fn night_overtime_rate(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> Decimal {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    ordinary * (Decimal::ONE + constants.surcharge_rates.night_overtime)
}

/// Calculates the ordinary night-shift hourly value: 135% of the ordinary
/// value (CST art. 168, 35% surcharge).
pub fn night_surcharge_rate(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> Decimal {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    ordinary * (Decimal::ONE + constants.surcharge_rates.night_surcharge)
}

/// Calculates the Sunday/holiday daytime hourly value: 180% of the ordinary
/// value (CST art. 179, 80% surcharge).
pub fn sunday_holiday_rate(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> Decimal {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    ordinary * (Decimal::ONE + constants.surcharge_rates.sunday_holiday)
}

/// Calculates the Sunday daytime overtime hourly value: 205% of the
/// ordinary value.
///
/// The 2.05 factor is a standalone legal composite of overtime and Sunday
/// work; it is read directly from the constants table, never rebuilt by
/// adding component surcharges.
pub fn sunday_daytime_overtime_rate(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> Decimal {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    ordinary * constants.surcharge_rates.sunday_daytime_overtime
}

/// Calculates the Sunday night overtime hourly value: 255% of the ordinary
/// value.
///
/// Like the daytime composite, the 2.55 factor is a standalone table entry.
pub fn sunday_night_overtime_rate(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> Decimal {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    ordinary * constants.surcharge_rates.sunday_night_overtime
}

/// Derives the full set of hourly values for one salary on one date.
///
/// The ordinary value is computed once and every surcharge value is derived
/// from it, so the set is internally consistent even around the workday
/// reduction cutover.
///
/// # Arguments
///
/// * `salary` - The monthly salary in pesos
/// * `reference_date` - The date the hours are worked; `None` means today
/// * `constants` - The legal constants table
pub fn hourly_rate_set(
    salary: Decimal,
    reference_date: Option<NaiveDate>,
    constants: &LegalConstants,
) -> HourlyRateSet {
    let ordinary = ordinary_hourly_rate(salary, reference_date, constants);
    let rates = &constants.surcharge_rates;

    HourlyRateSet {
        ordinary,
        daytime_overtime: ordinary * (Decimal::ONE + rates.daytime_overtime),
        night_overtime: ordinary * (Decimal::ONE + rates.night_overtime),
        night_surcharge: ordinary * (Decimal::ONE + rates.night_surcharge),
        sunday_holiday: ordinary * (Decimal::ONE + rates.sunday_holiday),
        sunday_daytime_overtime: ordinary * rates.sunday_daytime_overtime,
        sunday_night_overtime: ordinary * rates.sunday_night_overtime,
    }
}
