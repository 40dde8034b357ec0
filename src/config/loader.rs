//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings and the employee directory from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{DraftError, DraftResult};
use crate::models::Employee;

use super::types::{EmployeesConfig, PayrollConfig, SalaryConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml    # Currency, social insurance rates, overtime basis
/// └── employees.yaml  # Employees available for selection
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_draft::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Currency: {}", loader.payroll().currency);
/// # Ok::<(), salary_draft::error::DraftError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SalaryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or unreadable, contains
    /// invalid YAML, or lists the same employee id twice.
    pub fn load<P: AsRef<Path>>(path: P) -> DraftResult<Self> {
        let path = path.as_ref();

        let payroll_path = path.join("payroll.yaml");
        let payroll = Self::load_yaml::<PayrollConfig>(&payroll_path)?;

        let employees_path = path.join("employees.yaml");
        let employees = Self::load_yaml::<EmployeesConfig>(&employees_path)?.employees;
        Self::check_unique_ids(&employees_path, &employees)?;

        Ok(Self {
            config: SalaryConfig::new(payroll, employees),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SalaryConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DraftResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DraftError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DraftError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check_unique_ids(path: &Path, employees: &[Employee]) -> DraftResult<()> {
        let mut seen = HashSet::new();
        for employee in employees {
            if !seen.insert(employee.id.as_str()) {
                return Err(DraftError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("duplicate employee id '{}'", employee.id),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &SalaryConfig {
        &self.config
    }

    /// Returns the payroll settings.
    pub fn payroll(&self) -> &PayrollConfig {
        self.config.payroll()
    }

    /// Returns all configured employees.
    pub fn employees(&self) -> &[Employee] {
        self.config.employees()
    }

    /// Gets an employee by id.
    ///
    /// Returns the employee if found, or `EmployeeNotFound`.
    pub fn get_employee(&self, id: &str) -> DraftResult<&Employee> {
        self.config
            .employees()
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| DraftError::EmployeeNotFound { id: id.to_string() })
    }
}
