//! Surcharge result models.
//!
//! This module contains the output types of hourly-rate derivation and
//! monthly surcharge aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full set of hourly values for one salary on one reference date.
///
/// Each surcharge rate is a complete hourly value (ordinary value times the
/// legal multiplier), not the surcharge fraction alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRateSet {
    /// Ordinary hourly value (salary over the monthly hour divisor).
    pub ordinary: Decimal,
    /// Daytime overtime hourly value (125% of ordinary).
    pub daytime_overtime: Decimal,
    /// Night overtime hourly value (175% of ordinary).
    pub night_overtime: Decimal,
    /// Night-shift hourly value (135% of ordinary).
    pub night_surcharge: Decimal,
    /// Sunday/holiday daytime hourly value (180% of ordinary).
    pub sunday_holiday: Decimal,
    /// Sunday daytime overtime hourly value (205% of ordinary).
    pub sunday_daytime_overtime: Decimal,
    /// Sunday night overtime hourly value (255% of ordinary).
    pub sunday_night_overtime: Decimal,
}

/// Peso amounts earned in each surcharge category over one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeDetail {
    /// Amount for daytime overtime hours.
    pub daytime_overtime: Decimal,
    /// Amount for night overtime hours.
    pub night_overtime: Decimal,
    /// Amount for night-shift surcharge hours.
    pub night_surcharge: Decimal,
    /// Amount for Sunday/holiday daytime hours.
    pub sunday_holiday: Decimal,
    /// Amount for Sunday daytime overtime hours.
    pub sunday_daytime_overtime: Decimal,
    /// Amount for Sunday night overtime hours.
    pub sunday_night_overtime: Decimal,
}

/// The monthly surcharge aggregation result.
///
/// `total_payroll` is the base salary plus every surcharge amount; the
/// breakdown keeps each category visible for payslip rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurchargeBreakdown {
    /// The ordinary hourly value the amounts were derived from.
    pub ordinary_hourly_rate: Decimal,
    /// Per-category surcharge amounts.
    pub detail: SurchargeDetail,
    /// Sum of all six category amounts.
    pub total_surcharges: Decimal,
    /// Base salary plus total surcharges.
    pub total_payroll: Decimal,
}
