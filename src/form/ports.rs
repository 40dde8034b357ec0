//! Collaborators the salary form talks to.
//!
//! The form owns no I/O. Employee lookups, salary creation, notifications
//! and navigation are reached through these traits so any backend, UI shell
//! or test double can be plugged in.

use std::future::Future;

use crate::error::DraftResult;
use crate::models::{CreateSalaryRequest, Employee, Notification, SalaryRecord};

/// Read-only access to employee records.
pub trait EmployeeDirectory: Send + Sync {
    /// Looks up one employee. `Ok(None)` means no such record.
    fn get_employee(
        &self,
        id: &str,
    ) -> impl Future<Output = DraftResult<Option<Employee>>> + Send;

    /// Lists the employees that can be selected.
    fn list_employees(&self) -> impl Future<Output = DraftResult<Vec<Employee>>> + Send;
}

/// The salary create operation.
pub trait SalaryCreator: Send + Sync {
    /// Creates a salary record from a draft payload.
    fn create_salary(
        &self,
        request: CreateSalaryRequest,
    ) -> impl Future<Output = DraftResult<SalaryRecord>> + Send;
}

/// Shows transient messages to the user. Fire and forget.
pub trait Notifier: Send + Sync {
    /// Displays a notification.
    fn notify(&self, notification: Notification);
}

/// Moves the user to another screen.
pub trait Navigator: Send + Sync {
    /// Navigates to a route.
    fn navigate(&self, route: &str);
}
