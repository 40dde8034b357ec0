//! Configuration types for the salary draft engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::Employee;

/// Social insurance (GOSI) contribution rates, in percent of base salary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialInsuranceConfig {
    /// Rate for Saudi nationals.
    pub saudi_rate_percent: Decimal,
    /// Rate for everyone else.
    pub non_saudi_rate_percent: Decimal,
}

impl Default for SocialInsuranceConfig {
    fn default() -> Self {
        Self {
            saudi_rate_percent: Decimal::new(975, 2),
            non_saudi_rate_percent: Decimal::ZERO,
        }
    }
}

/// The working month used to turn a monthly salary into an hourly rate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OvertimeConfig {
    /// Working hours per day.
    pub hours_per_day: u32,
    /// Working days per month.
    pub working_days_per_month: u32,
    /// Multiplier used when the form does not supply one.
    pub default_multiplier: Decimal,
}

impl Default for OvertimeConfig {
    fn default() -> Self {
        Self {
            hours_per_day: 8,
            working_days_per_month: 22,
            default_multiplier: Decimal::new(15, 1),
        }
    }
}

/// Payroll settings from payroll.yaml.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayrollConfig {
    /// ISO currency code amounts are expressed in (e.g., "SAR").
    pub currency: String,
    /// Social insurance rates.
    #[serde(default)]
    pub social_insurance: SocialInsuranceConfig,
    /// Overtime basis.
    #[serde(default)]
    pub overtime: OvertimeConfig,
}

/// Employee directory file structure (employees.yaml).
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employees available for selection.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SalaryConfig {
    /// Payroll settings.
    payroll: PayrollConfig,
    /// Employees, in file order.
    employees: Vec<Employee>,
}

impl SalaryConfig {
    /// Creates a new SalaryConfig from its component parts.
    pub fn new(payroll: PayrollConfig, employees: Vec<Employee>) -> Self {
        Self { payroll, employees }
    }

    /// Returns the payroll settings.
    pub fn payroll(&self) -> &PayrollConfig {
        &self.payroll
    }

    /// Returns all configured employees.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
