//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod benefits;
mod deductions;
mod social_security;
mod surcharge;
mod worked_hours;

pub use benefits::BenefitsResult;
pub use deductions::{DeductionsInput, DeductionsResult};
pub use social_security::{ParafiscalResult, SocialSecurityResult};
pub use surcharge::{HourlyRateSet, SurchargeBreakdown, SurchargeDetail};
pub use worked_hours::WorkedHours;
