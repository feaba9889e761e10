//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for running a
//! Colombian payroll, including ordinary and surcharged hourly rates,
//! monthly surcharge aggregation, the social security contribution base,
//! ARL risk tier resolution, health, pension and ARL contributions,
//! parafiscal levies, employer cost and net salary rollups, mandatory
//! benefit accruals, income-tax deductions, and salary-threshold
//! eligibility predicates.

mod benefits;
mod contribution_base;
mod deductions;
mod eligibility;
mod employer_cost;
mod hourly_rate;
mod parafiscal;
mod risk_tier;
mod social_security;
mod surcharges;

pub use benefits::{
    FULL_YEAR_MONTHS, aggregate_benefits, benefits_base, monthly_cost_with_benefits,
    service_bonus, severance, severance_interest, vacation,
};
pub use contribution_base::contribution_base;
pub use deductions::{
    aggregate_deductions, dependents_deduction, health_deduction, housing_deduction,
    is_voucher_eligible, voucher_max_amount,
};
pub use eligibility::{
    is_exempt_from_icbf_sena, is_integral_salary, meets_minimum_wage,
    qualifies_for_transport_allowance, requires_work_clothing,
};
pub use employer_cost::{net_salary, total_employer_cost};
pub use hourly_rate::{
    WORKDAY_REDUCTION_CUTOVER, daytime_overtime_rate, hourly_rate_set, night_overtime_rate,
    night_surcharge_rate, ordinary_hourly_rate, sunday_daytime_overtime_rate,
    sunday_holiday_rate, sunday_night_overtime_rate,
};
pub use parafiscal::calculate_parafiscal;
pub use risk_tier::{DEFAULT_RISK_TIER, risk_tier_rate};
pub use social_security::calculate_social_security;
pub use surcharges::aggregate_surcharges;
