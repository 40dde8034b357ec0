//! The salary form and the collaborators it works with.
//!
//! [`SalaryForm`] owns the draft and keeps its totals consistent.
//! [`load_employee_defaults`] seeds it from the employee directory, and
//! [`submit_salary`] hands it to the create operation. [`SalaryFormSession`]
//! bundles all of it for one screen.

mod default_loader;
mod ports;
mod salary_form;
mod session;
mod submission;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use default_loader::load_employee_defaults;
pub use ports::{EmployeeDirectory, Navigator, Notifier, SalaryCreator};
pub use salary_form::{FormPhase, SalaryForm, SeedOutcome, SelectionTicket};
pub use session::SalaryFormSession;
pub use submission::{SALARY_DETAILS_ROUTE, submit_salary};

// Every form method leaves the form consistent before returning, so a
// poisoned lock still guards a usable form.
fn lock_form(form: &Mutex<SalaryForm>) -> MutexGuard<'_, SalaryForm> {
    form.lock().unwrap_or_else(PoisonError::into_inner)
}
