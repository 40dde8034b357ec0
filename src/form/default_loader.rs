//! Employee default loader.
//!
//! Selecting an employee starts one directory lookup. When it resolves, the
//! record's salary defaults are seeded into the draft through the selection
//! ticket, so a lookup that lands after the selection changed, or after the
//! user started typing, cannot clobber newer state.

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::error::DraftResult;

use super::lock_form;
use super::ports::EmployeeDirectory;
use super::salary_form::{SalaryForm, SeedOutcome};

/// Selects `employee_id` on the form and seeds its stored defaults.
///
/// The form lock is released while the lookup is awaited. A missing record
/// leaves the draft as it was and yields [`SeedOutcome::NotFound`]; a failed
/// lookup leaves it as it was and returns the error.
pub async fn load_employee_defaults<D: EmployeeDirectory>(
    form: &Mutex<SalaryForm>,
    directory: &D,
    employee_id: &str,
) -> DraftResult<SeedOutcome> {
    let ticket = lock_form(form).select_employee(employee_id)?;
    let Some(ticket) = ticket else {
        debug!("Employee selection cleared");
        return Ok(SeedOutcome::Cleared);
    };

    let employee = match directory.get_employee(ticket.employee_id()).await {
        Ok(Some(employee)) => employee,
        Ok(None) => {
            warn!(
                employee_id = %ticket.employee_id(),
                "Employee not found, defaults not seeded"
            );
            return Ok(SeedOutcome::NotFound);
        }
        Err(err) => {
            warn!(
                employee_id = %ticket.employee_id(),
                error = %err,
                "Employee lookup failed, defaults not seeded"
            );
            return Err(err);
        }
    };

    let outcome = lock_form(form).seed_from_employee(&ticket, &employee)?;
    debug!(
        employee_id = %ticket.employee_id(),
        generation = ticket.generation(),
        outcome = ?outcome,
        "Employee defaults seed finished"
    );
    Ok(outcome)
}
