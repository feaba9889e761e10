//! Legal constants loading and management for the payroll engine.
//!
//! This module provides functionality to load the legal constants table from
//! a YAML file and the strongly-typed table the calculation functions consume.
//!
//! # Example
//!
//! ```no_run
//! use nomina_engine::config::ConstantsLoader;
//!
//! let loader = ConstantsLoader::load("./config/colombia-2026.yaml").unwrap();
//! println!("Minimum wage: {}", loader.constants().minimum_wage);
//! ```

mod loader;
mod types;

pub use loader::ConstantsLoader;
pub use types::{LegalConstants, ParafiscalRates, SocialSecurityRates, SurchargeRates};
