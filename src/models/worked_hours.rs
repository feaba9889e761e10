//! Worked-hours input model.
//!
//! This module defines the [`WorkedHours`] struct used as input to the
//! monthly surcharge aggregation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Hours worked in each surcharge category during one month.
///
/// Every field is independently optional in serialized form and defaults to
/// zero, so a caller only states the categories an employee actually worked.
/// Hour counts may be fractional.
///
/// # Example
///
/// ```
/// use nomina_engine::models::WorkedHours;
/// use rust_decimal::Decimal;
///
/// let hours = WorkedHours {
///     daytime_overtime: Decimal::from(5),
///     sunday_holiday: Decimal::from(8),
///     ..WorkedHours::default()
/// };
/// assert_eq!(hours.night_overtime, Decimal::ZERO);
/// assert_eq!(hours.total_hours(), Decimal::from(13));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkedHours {
    /// Daytime overtime hours (hora extra diurna).
    #[serde(default)]
    pub daytime_overtime: Decimal,
    /// Night overtime hours (hora extra nocturna).
    #[serde(default)]
    pub night_overtime: Decimal,
    /// Ordinary night-shift hours attracting the night surcharge.
    #[serde(default)]
    pub night_surcharge: Decimal,
    /// Ordinary daytime hours on Sundays and holidays.
    #[serde(default)]
    pub sunday_holiday: Decimal,
    /// Daytime overtime hours on Sundays and holidays.
    #[serde(default)]
    pub sunday_daytime_overtime: Decimal,
    /// Night overtime hours on Sundays and holidays.
    #[serde(default)]
    pub sunday_night_overtime: Decimal,
}

impl WorkedHours {
    /// Returns the total surcharge-attracting hours across all categories.
    pub fn total_hours(&self) -> Decimal {
        self.daytime_overtime
            + self.night_overtime
            + self.night_surcharge
            + self.sunday_holiday
            + self.sunday_daytime_overtime
            + self.sunday_night_overtime
    }
}
