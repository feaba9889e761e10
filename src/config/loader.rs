//! Legal constants loading functionality.
//!
//! This module provides the [`ConstantsLoader`] type for loading a legal
//! constants table from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::LegalConstants;

/// Loads and provides access to a legal constants table.
///
/// The `ConstantsLoader` reads a single YAML file holding every legal
/// parameter for one legal year, checks the table invariant, and hands the
/// table to the calculation functions.
///
/// # File Structure
///
/// ```text
/// config/
/// └── colombia-2026.yaml   # Constants for the 2026 legal year
/// ```
///
/// # Example
///
/// ```no_run
/// use nomina_engine::config::ConstantsLoader;
///
/// let loader = ConstantsLoader::load("./config/colombia-2026.yaml").unwrap();
/// println!("Minimum wage: {}", loader.constants().minimum_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConstantsLoader {
    constants: LegalConstants,
}

impl ConstantsLoader {
    /// Loads a legal constants table from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the constants file (e.g., "./config/colombia-2026.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ConstantsLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing required fields
    /// - Any value violates the table invariant
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nomina_engine::config::ConstantsLoader;
    ///
    /// let loader = ConstantsLoader::load("./config/colombia-2026.yaml")?;
    /// # Ok::<(), nomina_engine::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let constants = Self::load_yaml(path)?;
        constants.validate()?;

        info!(path = %path.display(), "loaded legal constants table");

        Ok(Self { constants })
    }

    /// Loads and parses the YAML constants file.
    fn load_yaml(path: &Path) -> PayrollResult<LegalConstants> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded legal constants table.
    pub fn constants(&self) -> &LegalConstants {
        &self.constants
    }
}
