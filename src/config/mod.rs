//! Configuration loading and management for the salary draft engine.
//!
//! This module loads payroll settings (currency, social insurance rates,
//! overtime basis) and the employee directory from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_draft::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Employees: {}", config.employees().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EmployeesConfig, OvertimeConfig, PayrollConfig, SalaryConfig, SocialInsuranceConfig,
};
