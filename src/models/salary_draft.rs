//! The salary draft and its building blocks.
//!
//! A [`SalaryDraft`] is the in-memory, not yet persisted salary record being
//! edited. Its derived totals can be read but never written directly: every
//! amount change goes through [`SalaryDraft::set_amount`], which recomputes them.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_totals;
use crate::error::DraftResult;

use super::CreateSalaryRequest;

/// One editable monetary field of a salary draft.
///
/// # Example
///
/// ```
/// use salary_draft::models::SalaryField;
///
/// assert!(SalaryField::Bonus.is_earning());
/// assert!(!SalaryField::Tax.is_earning());
/// assert_eq!(SalaryField::LoanDeduction.as_str(), "loan_deduction");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryField {
    /// Monthly base salary.
    BaseSalary,
    /// Housing allowance.
    HousingAllowance,
    /// Transport allowance.
    TransportAllowance,
    /// Any other allowances.
    OtherAllowances,
    /// Overtime pay.
    Overtime,
    /// Bonus pay.
    Bonus,
    /// Social insurance (GOSI) deduction.
    SocialInsurance,
    /// Tax deduction.
    Tax,
    /// Loan repayment deduction.
    LoanDeduction,
    /// Any other deductions.
    OtherDeductions,
}

impl SalaryField {
    /// Every field, in declaration order.
    pub const ALL: [SalaryField; 10] = [
        SalaryField::BaseSalary,
        SalaryField::HousingAllowance,
        SalaryField::TransportAllowance,
        SalaryField::OtherAllowances,
        SalaryField::Overtime,
        SalaryField::Bonus,
        SalaryField::SocialInsurance,
        SalaryField::Tax,
        SalaryField::LoanDeduction,
        SalaryField::OtherDeductions,
    ];

    /// Fields that add to gross salary.
    pub const EARNINGS: [SalaryField; 6] = [
        SalaryField::BaseSalary,
        SalaryField::HousingAllowance,
        SalaryField::TransportAllowance,
        SalaryField::OtherAllowances,
        SalaryField::Overtime,
        SalaryField::Bonus,
    ];

    /// Fields that add to total deductions.
    pub const DEDUCTIONS: [SalaryField; 4] = [
        SalaryField::SocialInsurance,
        SalaryField::Tax,
        SalaryField::LoanDeduction,
        SalaryField::OtherDeductions,
    ];

    /// Fields seeded from the selected employee's stored defaults.
    pub const SEEDED: [SalaryField; 4] = [
        SalaryField::BaseSalary,
        SalaryField::HousingAllowance,
        SalaryField::TransportAllowance,
        SalaryField::OtherAllowances,
    ];

    /// Returns the wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryField::BaseSalary => "base_salary",
            SalaryField::HousingAllowance => "housing_allowance",
            SalaryField::TransportAllowance => "transport_allowance",
            SalaryField::OtherAllowances => "other_allowances",
            SalaryField::Overtime => "overtime",
            SalaryField::Bonus => "bonus",
            SalaryField::SocialInsurance => "social_insurance",
            SalaryField::Tax => "tax",
            SalaryField::LoanDeduction => "loan_deduction",
            SalaryField::OtherDeductions => "other_deductions",
        }
    }

    /// Returns the Arabic label shown next to the field.
    pub fn label_ar(&self) -> &'static str {
        match self {
            SalaryField::BaseSalary => "الراتب الأساسي",
            SalaryField::HousingAllowance => "بدل السكن",
            SalaryField::TransportAllowance => "بدل النقل",
            SalaryField::OtherAllowances => "بدلات أخرى",
            SalaryField::Overtime => "العمل الإضافي",
            SalaryField::Bonus => "المكافأة",
            SalaryField::SocialInsurance => "التأمينات الاجتماعية",
            SalaryField::Tax => "الضريبة",
            SalaryField::LoanDeduction => "خصم القرض",
            SalaryField::OtherDeductions => "خصومات أخرى",
        }
    }

    /// Returns true if the field adds to gross salary.
    pub fn is_earning(&self) -> bool {
        Self::EARNINGS.contains(self)
    }
}

/// The editable monetary inputs of a salary.
///
/// All fields default to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryAmounts {
    /// Monthly base salary.
    pub base_salary: Decimal,
    /// Housing allowance.
    pub housing_allowance: Decimal,
    /// Transport allowance.
    pub transport_allowance: Decimal,
    /// Any other allowances.
    pub other_allowances: Decimal,
    /// Overtime pay.
    pub overtime: Decimal,
    /// Bonus pay.
    pub bonus: Decimal,
    /// Social insurance (GOSI) deduction.
    pub social_insurance: Decimal,
    /// Tax deduction.
    pub tax: Decimal,
    /// Loan repayment deduction.
    pub loan_deduction: Decimal,
    /// Any other deductions.
    pub other_deductions: Decimal,
}

impl SalaryAmounts {
    /// Returns the value of a field.
    pub fn get(&self, field: SalaryField) -> Decimal {
        match field {
            SalaryField::BaseSalary => self.base_salary,
            SalaryField::HousingAllowance => self.housing_allowance,
            SalaryField::TransportAllowance => self.transport_allowance,
            SalaryField::OtherAllowances => self.other_allowances,
            SalaryField::Overtime => self.overtime,
            SalaryField::Bonus => self.bonus,
            SalaryField::SocialInsurance => self.social_insurance,
            SalaryField::Tax => self.tax,
            SalaryField::LoanDeduction => self.loan_deduction,
            SalaryField::OtherDeductions => self.other_deductions,
        }
    }

    /// Sets the value of a field.
    pub fn set(&mut self, field: SalaryField, value: Decimal) {
        let slot = match field {
            SalaryField::BaseSalary => &mut self.base_salary,
            SalaryField::HousingAllowance => &mut self.housing_allowance,
            SalaryField::TransportAllowance => &mut self.transport_allowance,
            SalaryField::OtherAllowances => &mut self.other_allowances,
            SalaryField::Overtime => &mut self.overtime,
            SalaryField::Bonus => &mut self.bonus,
            SalaryField::SocialInsurance => &mut self.social_insurance,
            SalaryField::Tax => &mut self.tax,
            SalaryField::LoanDeduction => &mut self.loan_deduction,
            SalaryField::OtherDeductions => &mut self.other_deductions,
        };
        *slot = value;
    }
}

/// Totals derived from [`SalaryAmounts`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTotals {
    /// Sum of all earnings.
    pub gross_salary: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
}

/// The month and year a salary is paid for.
///
/// No calendar validation is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Month number, normally 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl PayPeriod {
    /// Creates a pay period.
    pub fn new(month: u32, year: i32) -> Self {
        Self { month, year }
    }

    /// Returns the current month and year (UTC).
    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Self::new(today.month(), today.year())
    }
}

/// Lifecycle status of a salary record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryStatus {
    /// Not yet approved. Every draft is submitted with this status.
    #[default]
    Draft,
    /// Approved for payment.
    Approved,
    /// Paid out.
    Paid,
    /// Cancelled.
    Cancelled,
}

/// The salary record being edited, before submission.
///
/// # Example
///
/// ```
/// use salary_draft::models::{PayPeriod, SalaryDraft, SalaryField};
/// use rust_decimal::Decimal;
///
/// let mut draft = SalaryDraft::new(PayPeriod::new(3, 2026));
/// draft.set_amount(SalaryField::BaseSalary, Decimal::new(5000, 0)).unwrap();
/// draft.set_amount(SalaryField::Tax, Decimal::new(100, 0)).unwrap();
///
/// assert_eq!(draft.totals().gross_salary, Decimal::new(5000, 0));
/// assert_eq!(draft.totals().net_salary, Decimal::new(4900, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryDraft {
    employee_id: String,
    period: PayPeriod,
    amounts: SalaryAmounts,
    totals: SalaryTotals,
    notes: Option<String>,
}

impl SalaryDraft {
    /// Creates an empty draft for a pay period.
    pub fn new(period: PayPeriod) -> Self {
        Self {
            employee_id: String::new(),
            period,
            amounts: SalaryAmounts::default(),
            totals: SalaryTotals::default(),
            notes: None,
        }
    }

    /// The selected employee's id, empty when none is selected.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    pub(crate) fn set_employee_id(&mut self, employee_id: impl Into<String>) {
        self.employee_id = employee_id.into();
    }

    /// The pay period.
    pub fn period(&self) -> PayPeriod {
        self.period
    }

    /// Replaces the pay period.
    pub fn set_period(&mut self, period: PayPeriod) {
        self.period = period;
    }

    /// All editable amounts.
    pub fn amounts(&self) -> &SalaryAmounts {
        &self.amounts
    }

    /// The value of one amount field.
    pub fn amount(&self, field: SalaryField) -> Decimal {
        self.amounts.get(field)
    }

    /// Sets one amount field and recomputes the totals.
    ///
    /// If the totals cannot be computed the draft is left unchanged.
    pub fn set_amount(&mut self, field: SalaryField, value: Decimal) -> DraftResult<()> {
        let mut amounts = self.amounts.clone();
        amounts.set(field, value);
        self.replace_amounts(amounts)
    }

    /// Replaces every amount at once and recomputes the totals.
    ///
    /// If the totals cannot be computed the draft is left unchanged.
    pub fn replace_amounts(&mut self, amounts: SalaryAmounts) -> DraftResult<()> {
        let totals = calculate_totals(&amounts)?;
        self.amounts = amounts;
        self.totals = totals;
        Ok(())
    }

    /// The derived totals, always consistent with [`Self::amounts`].
    pub fn totals(&self) -> &SalaryTotals {
        &self.totals
    }

    /// Free-text notes.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Sets the notes. Blank text clears them.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes.filter(|n| !n.trim().is_empty());
    }

    /// Always [`SalaryStatus::Draft`].
    pub fn status(&self) -> SalaryStatus {
        SalaryStatus::Draft
    }

    /// Packages the draft as a create payload.
    pub fn to_request(&self) -> CreateSalaryRequest {
        CreateSalaryRequest {
            employee_id: self.employee_id.clone(),
            month: self.period.month,
            year: self.period.year,
            amounts: self.amounts.clone(),
            totals: self.totals.clone(),
            notes: self.notes.clone(),
            status: self.status(),
        }
    }
}
