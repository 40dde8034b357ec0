//! A salary form wired to its collaborators.

use std::sync::Mutex;

use rust_decimal::Decimal;

use crate::config::PayrollConfig;
use crate::error::DraftResult;
use crate::models::{Employee, PayPeriod, SalaryField, SalaryRecord};

use super::default_loader::load_employee_defaults;
use super::lock_form;
use super::ports::{EmployeeDirectory, Navigator, Notifier, SalaryCreator};
use super::salary_form::{SalaryForm, SeedOutcome};
use super::submission::submit_salary;

/// One salary form screen: the form plus the directory, create operation,
/// notifier and navigator it talks to.
///
/// Methods take `&self`; the form sits behind a mutex that is never held
/// across an await, so a pending lookup or submission does not block edits
/// from being attempted.
pub struct SalaryFormSession<D, C, N, V> {
    form: Mutex<SalaryForm>,
    directory: D,
    creator: C,
    notifier: N,
    navigator: V,
}

impl<D, C, N, V> SalaryFormSession<D, C, N, V>
where
    D: EmployeeDirectory,
    C: SalaryCreator,
    N: Notifier,
    V: Navigator,
{
    /// Creates a session around a form.
    pub fn new(form: SalaryForm, directory: D, creator: C, notifier: N, navigator: V) -> Self {
        Self {
            form: Mutex::new(form),
            directory,
            creator,
            notifier,
            navigator,
        }
    }

    /// A copy of the form as it is now.
    pub fn snapshot(&self) -> SalaryForm {
        lock_form(&self.form).clone()
    }

    /// The employees that can be selected.
    pub async fn employees(&self) -> DraftResult<Vec<Employee>> {
        self.directory.list_employees().await
    }

    /// Applies raw text typed into an amount field.
    pub fn edit_amount(&self, field: SalaryField, raw: &str) -> DraftResult<()> {
        lock_form(&self.form).set_amount(field, raw)
    }

    /// Sets the pay period.
    pub fn set_period(&self, period: PayPeriod) -> DraftResult<()> {
        lock_form(&self.form).set_period(period)
    }

    /// Sets the free-text notes.
    pub fn set_notes(&self, notes: Option<String>) -> DraftResult<()> {
        lock_form(&self.form).set_notes(notes)
    }

    /// Fills social insurance for the seeded employee.
    pub fn fill_social_insurance(&self, config: &PayrollConfig) -> DraftResult<Decimal> {
        lock_form(&self.form).fill_social_insurance(&config.social_insurance)
    }

    /// Fills overtime pay from overtime hours.
    pub fn fill_overtime_from_hours(
        &self,
        hours: Decimal,
        multiplier: Option<Decimal>,
        config: &PayrollConfig,
    ) -> DraftResult<Decimal> {
        lock_form(&self.form).fill_overtime_from_hours(hours, multiplier, &config.overtime)
    }

    /// Selects an employee and seeds their stored defaults.
    pub async fn select_employee(&self, employee_id: &str) -> DraftResult<SeedOutcome> {
        load_employee_defaults(&self.form, &self.directory, employee_id).await
    }

    /// Submits the draft.
    pub async fn submit(&self) -> DraftResult<SalaryRecord> {
        submit_salary(&self.form, &self.creator, &self.notifier, &self.navigator).await
    }
}
