//! In-memory employee directory.

use std::future::{Future, ready};

use crate::config::ConfigLoader;
use crate::error::DraftResult;
use crate::form::EmployeeDirectory;
use crate::models::Employee;

/// An [`EmployeeDirectory`] over a fixed list of employees.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: Vec<Employee>,
}

impl InMemoryEmployeeDirectory {
    /// Creates a directory over the given employees.
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    /// Creates a directory over the configured employees.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self::new(config.employees().to_vec())
    }

    /// Finds an employee by id.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// All employees, in configuration order.
    pub fn all(&self) -> &[Employee] {
        &self.employees
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn get_employee(
        &self,
        id: &str,
    ) -> impl Future<Output = DraftResult<Option<Employee>>> + Send {
        ready(Ok(self.find(id).cloned()))
    }

    fn list_employees(&self) -> impl Future<Output = DraftResult<Vec<Employee>>> + Send {
        ready(Ok(self.employees.clone()))
    }
}
