//! The salary form: one draft, its field errors, the employee selection and
//! the submission phase.
//!
//! Every mutation goes through a method here, and every amount mutation
//! recomputes the derived totals before it returns. Nothing outside this
//! type can observe stale totals.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{
    calculate_overtime_pay, calculate_social_insurance, coerce_amount, parse_amount,
};
use crate::config::{OvertimeConfig, SocialInsuranceConfig};
use crate::error::{AmountError, DraftError, DraftResult};
use crate::models::{
    CreateSalaryRequest, Employee, PayPeriod, SalaryDraft, SalaryField, SalaryTotals,
};

/// Where the form is in its lifecycle.
///
/// `Editing -> Submitting -> Submitted`, or back to `Editing` when the create
/// operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    /// The draft accepts edits.
    Editing,
    /// A create call is in flight.
    Submitting,
    /// The draft was created; it is closed for good.
    Submitted,
}

/// Proof of one employee selection, handed to the default loader.
///
/// A ticket only seeds the draft while its selection is still the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    employee_id: String,
}

impl SelectionTicket {
    /// The selected employee's id.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Monotonic selection counter.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a seed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedOutcome {
    /// The employee's defaults were copied into the draft.
    Applied,
    /// This selection was already seeded; nothing changed.
    AlreadySeeded,
    /// The selection changed since the lookup started; nothing changed.
    Stale,
    /// The directory had no record; nothing changed.
    NotFound,
    /// No employee is selected; no lookup was made.
    Cleared,
}

#[derive(Debug, Clone)]
struct Selection {
    generation: u64,
    employee_id: String,
    seeded_from: Option<Employee>,
    edited: BTreeSet<SalaryField>,
}

/// Owns a salary draft for the lifetime of one form screen.
///
/// # Example
///
/// ```
/// use salary_draft::form::SalaryForm;
/// use salary_draft::models::{PayPeriod, SalaryField};
/// use rust_decimal::Decimal;
///
/// let mut form = SalaryForm::new(PayPeriod::new(3, 2026));
/// form.set_amount(SalaryField::BaseSalary, "5000").unwrap();
/// form.set_amount(SalaryField::Bonus, "oops").unwrap();
///
/// assert_eq!(form.totals().gross_salary, Decimal::new(5000, 0));
/// assert!(form.field_error(SalaryField::Bonus).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SalaryForm {
    draft: SalaryDraft,
    field_errors: BTreeMap<SalaryField, AmountError>,
    selection: Option<Selection>,
    next_generation: u64,
    phase: FormPhase,
}

impl Default for SalaryForm {
    fn default() -> Self {
        Self::new(PayPeriod::current())
    }
}

impl SalaryForm {
    /// Creates a form with an empty draft for a pay period.
    pub fn new(period: PayPeriod) -> Self {
        Self {
            draft: SalaryDraft::new(period),
            field_errors: BTreeMap::new(),
            selection: None,
            next_generation: 1,
            phase: FormPhase::Editing,
        }
    }

    /// The draft being edited.
    pub fn draft(&self) -> &SalaryDraft {
        &self.draft
    }

    /// The derived totals of the draft.
    pub fn totals(&self) -> &SalaryTotals {
        self.draft.totals()
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Fields whose last entry could not be read, with the reason.
    pub fn field_errors(&self) -> &BTreeMap<SalaryField, AmountError> {
        &self.field_errors
    }

    /// The error for one field, if its last entry could not be read.
    pub fn field_error(&self, field: SalaryField) -> Option<&AmountError> {
        self.field_errors.get(&field)
    }

    /// The employee record the current selection was seeded from.
    pub fn selected_employee(&self) -> Option<&Employee> {
        self.selection.as_ref()?.seeded_from.as_ref()
    }

    fn ensure_editable(&self) -> DraftResult<()> {
        match self.phase {
            FormPhase::Editing => Ok(()),
            FormPhase::Submitting => Err(DraftError::SubmissionInFlight),
            FormPhase::Submitted => Err(DraftError::DraftClosed),
        }
    }

    /// Applies raw text typed into an amount field.
    ///
    /// Unreadable text stores zero for the field and records a field error;
    /// the next readable entry clears it. Totals are recomputed either way.
    pub fn set_amount(&mut self, field: SalaryField, raw: &str) -> DraftResult<()> {
        self.ensure_editable()?;

        match parse_amount(raw) {
            Ok(value) => {
                self.write_amount(field, value)?;
                self.field_errors.remove(&field);
            }
            Err(error) => {
                self.write_amount(field, coerce_amount(raw))?;
                self.field_errors.insert(field, error);
            }
        }
        Ok(())
    }

    /// Applies an already-numeric value to an amount field.
    pub fn set_value(&mut self, field: SalaryField, value: Decimal) -> DraftResult<()> {
        self.ensure_editable()?;
        self.write_amount(field, value)?;
        self.field_errors.remove(&field);
        Ok(())
    }

    fn write_amount(&mut self, field: SalaryField, value: Decimal) -> DraftResult<()> {
        self.draft.set_amount(field, value)?;
        if let Some(selection) = self.selection.as_mut() {
            selection.edited.insert(field);
        }
        Ok(())
    }

    /// Sets the pay period.
    pub fn set_period(&mut self, period: PayPeriod) -> DraftResult<()> {
        self.ensure_editable()?;
        self.draft.set_period(period);
        Ok(())
    }

    /// Sets the free-text notes.
    pub fn set_notes(&mut self, notes: Option<String>) -> DraftResult<()> {
        self.ensure_editable()?;
        self.draft.set_notes(notes);
        Ok(())
    }

    /// Selects an employee and returns the ticket the loader must present
    /// when seeding.
    ///
    /// Selecting the employee that is already selected keeps the current
    /// selection (and its seeded state). Selecting the empty id clears the
    /// selection and returns `None`. Amounts are not touched here.
    pub fn select_employee(&mut self, employee_id: &str) -> DraftResult<Option<SelectionTicket>> {
        self.ensure_editable()?;

        if employee_id.is_empty() {
            self.selection = None;
            self.draft.set_employee_id("");
            return Ok(None);
        }

        if let Some(current) = &self.selection {
            if current.employee_id == employee_id {
                return Ok(Some(SelectionTicket {
                    generation: current.generation,
                    employee_id: current.employee_id.clone(),
                }));
            }
        }

        let generation = self.next_generation;
        self.next_generation += 1;
        self.selection = Some(Selection {
            generation,
            employee_id: employee_id.to_string(),
            seeded_from: None,
            edited: BTreeSet::new(),
        });
        self.draft.set_employee_id(employee_id);

        Ok(Some(SelectionTicket {
            generation,
            employee_id: employee_id.to_string(),
        }))
    }

    /// Copies an employee's stored salary defaults into the draft.
    ///
    /// Applies at most once per selection, only while `ticket` is current,
    /// and skips any seeded field the user edited after selecting. Missing
    /// defaults seed zero.
    pub fn seed_from_employee(
        &mut self,
        ticket: &SelectionTicket,
        employee: &Employee,
    ) -> DraftResult<SeedOutcome> {
        self.ensure_editable()?;

        let edited = match &self.selection {
            Some(selection) if selection.generation == ticket.generation => {
                if selection.seeded_from.is_some() {
                    return Ok(SeedOutcome::AlreadySeeded);
                }
                selection.edited.clone()
            }
            _ => return Ok(SeedOutcome::Stale),
        };

        let seeded: Vec<SalaryField> = SalaryField::SEEDED
            .into_iter()
            .filter(|field| !edited.contains(field))
            .collect();
        let mut amounts = self.draft.amounts().clone();
        for field in &seeded {
            amounts.set(*field, employee_default(employee, *field));
        }
        self.draft.replace_amounts(amounts)?;
        for field in &seeded {
            self.field_errors.remove(field);
        }

        if let Some(selection) = self.selection.as_mut() {
            selection.seeded_from = Some(employee.clone());
        }
        Ok(SeedOutcome::Applied)
    }

    /// Fills social insurance from the current base salary and the seeded
    /// employee's nationality, as if the user had typed it. Returns the amount.
    pub fn fill_social_insurance(&mut self, config: &SocialInsuranceConfig) -> DraftResult<Decimal> {
        self.ensure_editable()?;
        let is_saudi = self
            .selected_employee()
            .ok_or(DraftError::EmployeeNotSelected)?
            .is_saudi();

        let amount = calculate_social_insurance(
            self.draft.amount(SalaryField::BaseSalary),
            is_saudi,
            config,
        )?;
        self.set_value(SalaryField::SocialInsurance, amount)?;
        Ok(amount)
    }

    /// Fills overtime pay from overtime hours and the current base salary, as
    /// if the user had typed it. Uses the configured multiplier when none is
    /// given. Returns the amount.
    pub fn fill_overtime_from_hours(
        &mut self,
        hours: Decimal,
        multiplier: Option<Decimal>,
        config: &OvertimeConfig,
    ) -> DraftResult<Decimal> {
        self.ensure_editable()?;
        let amount = calculate_overtime_pay(
            self.draft.amount(SalaryField::BaseSalary),
            hours,
            multiplier.unwrap_or(config.default_multiplier),
            config,
        )?;
        self.set_value(SalaryField::Overtime, amount)?;
        Ok(amount)
    }

    /// Validates the draft and moves to `Submitting`, returning the payload.
    ///
    /// Fails without changing phase when a submission is already in flight,
    /// the draft is closed, no employee is selected, or a field is in error.
    pub fn begin_submission(&mut self) -> DraftResult<CreateSalaryRequest> {
        self.ensure_editable()?;

        if self.draft.employee_id().is_empty() {
            return Err(DraftError::EmployeeNotSelected);
        }
        if !self.field_errors.is_empty() {
            return Err(DraftError::InvalidAmounts {
                fields: self.field_errors.keys().copied().collect(),
            });
        }

        self.phase = FormPhase::Submitting;
        Ok(self.draft.to_request())
    }

    /// Marks the in-flight submission as created. The draft is closed.
    pub fn complete_submission(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Submitted;
        }
    }

    /// Marks the in-flight submission as failed. The draft is editable again,
    /// unchanged.
    pub fn abort_submission(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }
}

fn employee_default(employee: &Employee, field: SalaryField) -> Decimal {
    let value = match field {
        SalaryField::BaseSalary => employee.base_salary,
        SalaryField::HousingAllowance => employee.housing_allowance,
        SalaryField::TransportAllowance => employee.transport_allowance,
        SalaryField::OtherAllowances => employee.other_allowances,
        _ => None,
    };
    value.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee(id: &str, base: &str, nationality: &str) -> Employee {
        Employee {
            id: id.to_string(),
            employee_number: None,
            first_name: "Sara".to_string(),
            last_name: "Alharbi".to_string(),
            department: Some("Litigation".to_string()),
            nationality: Some(nationality.to_string()),
            base_salary: Some(dec(base)),
            housing_allowance: Some(dec("1000")),
            transport_allowance: None,
            other_allowances: Some(dec("250")),
        }
    }

    fn new_form() -> SalaryForm {
        SalaryForm::new(PayPeriod::new(5, 2026))
    }

    #[test]
    fn test_reference_salary_totals() {
        let mut form = new_form();
        for (field, raw) in [
            (SalaryField::BaseSalary, "5000"),
            (SalaryField::HousingAllowance, "1000"),
            (SalaryField::TransportAllowance, "500"),
            (SalaryField::OtherAllowances, "0"),
            (SalaryField::Overtime, "200"),
            (SalaryField::Bonus, "300"),
            (SalaryField::SocialInsurance, "450"),
            (SalaryField::Tax, "100"),
            (SalaryField::LoanDeduction, "0"),
            (SalaryField::OtherDeductions, "50"),
        ] {
            form.set_amount(field, raw).unwrap();
        }

        assert_eq!(form.totals().gross_salary, dec("7000"));
        assert_eq!(form.totals().total_deductions, dec("600"));
        assert_eq!(form.totals().net_salary, dec("6400"));
    }

    #[test]
    fn test_invalid_entry_counts_as_zero_and_is_flagged() {
        let mut form = new_form();
        form.set_amount(SalaryField::BaseSalary, "5000").unwrap();
        form.set_amount(SalaryField::Bonus, "300").unwrap();
        form.set_amount(SalaryField::Bonus, "").unwrap();

        assert_eq!(form.draft().amount(SalaryField::Bonus), Decimal::ZERO);
        assert_eq!(form.totals().gross_salary, dec("5000"));
        assert_eq!(form.field_error(SalaryField::Bonus), Some(&AmountError::Empty));

        form.set_amount(SalaryField::Bonus, "0").unwrap();
        assert_eq!(form.field_error(SalaryField::Bonus), None);
    }

    #[test]
    fn test_overflowing_entry_is_rejected_without_changes() {
        let mut form = new_form();
        form.select_employee("emp_001").unwrap();
        let largest = Decimal::MAX.to_string();
        form.set_amount(SalaryField::BaseSalary, &largest).unwrap();
        let amounts = form.draft().amounts().clone();
        let totals = form.totals().clone();

        match form.set_amount(SalaryField::Bonus, "1") {
            Err(DraftError::AmountOutOfRange { field }) => assert_eq!(field, "gross_salary"),
            other => panic!("Expected AmountOutOfRange, got {:?}", other),
        }
        assert_eq!(form.draft().amounts(), &amounts);
        assert_eq!(form.totals(), &totals);
        assert_eq!(form.field_error(SalaryField::Bonus), None);
        let selection = form.selection.as_ref().unwrap();
        assert!(!selection.edited.contains(&SalaryField::Bonus));
    }

    #[test]
    fn test_overflowing_seed_leaves_draft_unchanged() {
        let mut form = new_form();
        let ticket = form.select_employee("emp_001").unwrap().unwrap();
        form.set_value(SalaryField::Bonus, Decimal::MAX).unwrap();
        let amounts = form.draft().amounts().clone();

        let employee = create_test_employee("emp_001", "5000", "SA");
        assert!(matches!(
            form.seed_from_employee(&ticket, &employee),
            Err(DraftError::AmountOutOfRange { .. })
        ));
        assert_eq!(form.draft().amounts(), &amounts);
        assert_eq!(form.selected_employee(), None);
    }

    #[test]
    fn test_select_then_seed_applies_defaults() {
        let mut form = new_form();
        let employee = create_test_employee("emp_001", "5000", "SA");

        let ticket = form.select_employee("emp_001").unwrap().unwrap();
        let outcome = form.seed_from_employee(&ticket, &employee).unwrap();

        assert_eq!(outcome, SeedOutcome::Applied);
        assert_eq!(form.draft().employee_id(), "emp_001");
        assert_eq!(form.draft().amount(SalaryField::BaseSalary), dec("5000"));
        assert_eq!(form.draft().amount(SalaryField::HousingAllowance), dec("1000"));
        assert_eq!(form.draft().amount(SalaryField::TransportAllowance), Decimal::ZERO);
        assert_eq!(form.draft().amount(SalaryField::OtherAllowances), dec("250"));
        assert_eq!(form.totals().gross_salary, dec("6250"));
        assert_eq!(form.selected_employee(), Some(&employee));
    }

    #[test]
    fn test_seed_runs_once_per_selection() {
        let mut form = new_form();
        let employee = create_test_employee("emp_001", "5000", "SA");

        let ticket = form.select_employee("emp_001").unwrap().unwrap();
        form.seed_from_employee(&ticket, &employee).unwrap();
        form.set_amount(SalaryField::BaseSalary, "6000").unwrap();

        // Same selection again, e.g. the screen re-rendered.
        let again = form.select_employee("emp_001").unwrap().unwrap();
        assert_eq!(again, ticket);
        let outcome = form.seed_from_employee(&again, &employee).unwrap();

        assert_eq!(outcome, SeedOutcome::AlreadySeeded);
        assert_eq!(form.draft().amount(SalaryField::BaseSalary), dec("6000"));
    }

    #[test]
    fn test_late_seed_keeps_user_edits() {
        let mut form = new_form();
        let employee = create_test_employee("emp_001", "5000", "SA");

        let ticket = form.select_employee("emp_001").unwrap().unwrap();
        form.set_amount(SalaryField::BaseSalary, "7500").unwrap();
        form.seed_from_employee(&ticket, &employee).unwrap();

        assert_eq!(form.draft().amount(SalaryField::BaseSalary), dec("7500"));
        assert_eq!(form.draft().amount(SalaryField::HousingAllowance), dec("1000"));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut form = new_form();
        let first = create_test_employee("emp_001", "5000", "SA");

        let old_ticket = form.select_employee("emp_001").unwrap().unwrap();
        let new_ticket = form.select_employee("emp_002").unwrap().unwrap();
        assert!(new_ticket.generation() > old_ticket.generation());

        let outcome = form.seed_from_employee(&old_ticket, &first).unwrap();
        assert_eq!(outcome, SeedOutcome::Stale);
        assert_eq!(form.draft().employee_id(), "emp_002");
        assert_eq!(form.draft().amount(SalaryField::BaseSalary), Decimal::ZERO);
    }

    #[test]
    fn test_changing_selection_reseeds() {
        let mut form = new_form();
        let first = create_test_employee("emp_001", "5000", "SA");
        let second = create_test_employee("emp_002", "8000", "PK");

        let ticket = form.select_employee("emp_001").unwrap().unwrap();
        form.seed_from_employee(&ticket, &first).unwrap();
        form.set_amount(SalaryField::BaseSalary, "5100").unwrap();

        let ticket = form.select_employee("emp_002").unwrap().unwrap();
        form.seed_from_employee(&ticket, &second).unwrap();

        assert_eq!(form.draft().amount(SalaryField::BaseSalary), dec("8000"));
    }

    #[test]
    fn test_selecting_empty_id_clears_selection() {
        let mut form = new_form();
        form.select_employee("emp_001").unwrap();
        assert_eq!(form.select_employee("").unwrap(), None);
        assert_eq!(form.draft().employee_id(), "");
    }

    #[test]
    fn test_begin_submission_requires_employee() {
        let mut form = new_form();
        form.set_amount(SalaryField::BaseSalary, "5000").unwrap();

        assert!(matches!(
            form.begin_submission(),
            Err(DraftError::EmployeeNotSelected)
        ));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_begin_submission_rejects_field_errors() {
        let mut form = new_form();
        form.select_employee("emp_001").unwrap();
        form.set_amount(SalaryField::Tax, "ten").unwrap();

        match form.begin_submission() {
            Err(DraftError::InvalidAmounts { fields }) => {
                assert_eq!(fields, vec![SalaryField::Tax]);
            }
            other => panic!("Expected InvalidAmounts, got {:?}", other),
        }
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_submission_phases() {
        let mut form = new_form();
        form.select_employee("emp_001").unwrap();
        form.set_amount(SalaryField::BaseSalary, "5000").unwrap();

        let request = form.begin_submission().unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(form.phase(), FormPhase::Submitting);

        assert!(matches!(
            form.begin_submission(),
            Err(DraftError::SubmissionInFlight)
        ));
        assert!(matches!(
            form.set_amount(SalaryField::Bonus, "1"),
            Err(DraftError::SubmissionInFlight)
        ));

        form.abort_submission();
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(form.draft().amount(SalaryField::BaseSalary), dec("5000"));

        form.begin_submission().unwrap();
        form.complete_submission();
        assert_eq!(form.phase(), FormPhase::Submitted);
        assert!(matches!(form.begin_submission(), Err(DraftError::DraftClosed)));
        assert!(matches!(
            form.set_notes(Some("late".to_string())),
            Err(DraftError::DraftClosed)
        ));
    }

    #[test]
    fn test_fill_social_insurance_uses_nationality() {
        let mut form = new_form();
        let employee = create_test_employee("emp_001", "5000", "SA");
        let ticket = form.select_employee("emp_001").unwrap().unwrap();
        form.seed_from_employee(&ticket, &employee).unwrap();

        let amount = form
            .fill_social_insurance(&SocialInsuranceConfig::default())
            .unwrap();

        assert_eq!(amount, dec("488"));
        assert_eq!(form.draft().amount(SalaryField::SocialInsurance), dec("488"));
        assert_eq!(form.totals().total_deductions, dec("488"));
    }

    #[test]
    fn test_fill_social_insurance_needs_seeded_employee() {
        let mut form = new_form();
        assert!(matches!(
            form.fill_social_insurance(&SocialInsuranceConfig::default()),
            Err(DraftError::EmployeeNotSelected)
        ));
    }

    #[test]
    fn test_fill_overtime_from_hours() {
        let mut form = new_form();
        form.set_amount(SalaryField::BaseSalary, "8800").unwrap();

        let amount = form
            .fill_overtime_from_hours(dec("10"), None, &OvertimeConfig::default())
            .unwrap();

        assert_eq!(amount, dec("750"));
        assert_eq!(form.totals().gross_salary, dec("9550"));
    }
}
