//! Payroll Calculation Engine for Colombian Employment Law
//!
//! This crate provides pure calculation functions for Colombian payroll in the
//! 2026 legal year: ordinary hourly rates and legal surcharges (recargos),
//! social security contributions, parafiscal levies, employer-side benefits
//! (prestaciones sociales), and income-tax deduction helpers.
//!
//! All legal parameters are injected through a [`config::LegalConstants`]
//! table; the calculation path performs no I/O and holds no global state.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
