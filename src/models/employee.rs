//! Employee model.
//!
//! Employees are owned by an external directory. The draft only reads them,
//! for display and to seed salary defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nationality codes that count as Saudi for social insurance purposes.
const SAUDI_NATIONALITIES: [&str; 2] = ["sa", "saudi"];

/// Represents an employee record as returned by the employee directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Human-facing employee number (e.g., "EMP001").
    #[serde(default)]
    pub employee_number: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Department the employee belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// Nationality code or name (e.g., "SA").
    #[serde(default)]
    pub nationality: Option<String>,
    /// Stored monthly base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Stored monthly housing allowance.
    #[serde(default)]
    pub housing_allowance: Option<Decimal>,
    /// Stored monthly transport allowance.
    #[serde(default)]
    pub transport_allowance: Option<Decimal>,
    /// Stored monthly total of other allowances.
    #[serde(default)]
    pub other_allowances: Option<Decimal>,
}

impl Employee {
    /// Returns "first last", trimmed when either part is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_draft::models::Employee;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     employee_number: None,
    ///     first_name: "Sara".to_string(),
    ///     last_name: "Alharbi".to_string(),
    ///     department: None,
    ///     nationality: None,
    ///     base_salary: None,
    ///     housing_allowance: None,
    ///     transport_allowance: None,
    ///     other_allowances: None,
    /// };
    /// assert_eq!(employee.full_name(), "Sara Alharbi");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    /// Returns true if the employee is a Saudi national.
    pub fn is_saudi(&self) -> bool {
        self.nationality.as_deref().is_some_and(|n| {
            SAUDI_NATIONALITIES
                .iter()
                .any(|code| n.trim().eq_ignore_ascii_case(code))
        })
    }
}
