//! Derived salary totals.
//!
//! Gross salary, total deductions and net salary are pure functions of the
//! editable amounts. They are recomputed on every change and never edited.

use rust_decimal::Decimal;

use crate::error::{DraftError, DraftResult};
use crate::models::{SalaryAmounts, SalaryField, SalaryTotals};

/// Computes gross salary, total deductions and net salary.
///
/// - `gross_salary` is the sum of the six earnings fields.
/// - `total_deductions` is the sum of the four deduction fields.
/// - `net_salary` is `gross_salary - total_deductions`.
///
/// Arithmetic is exact decimal arithmetic. A sum that does not fit in a
/// `Decimal` fails with [`DraftError::AmountOutOfRange`] naming the total.
///
/// # Examples
///
/// ```
/// use salary_draft::calculation::calculate_totals;
/// use salary_draft::models::SalaryAmounts;
/// use rust_decimal::Decimal;
///
/// let amounts = SalaryAmounts {
///     base_salary: Decimal::new(5000, 0),
///     housing_allowance: Decimal::new(1000, 0),
///     transport_allowance: Decimal::new(500, 0),
///     overtime: Decimal::new(200, 0),
///     bonus: Decimal::new(300, 0),
///     social_insurance: Decimal::new(450, 0),
///     tax: Decimal::new(100, 0),
///     other_deductions: Decimal::new(50, 0),
///     ..Default::default()
/// };
///
/// let totals = calculate_totals(&amounts).unwrap();
/// assert_eq!(totals.gross_salary, Decimal::new(7000, 0));
/// assert_eq!(totals.total_deductions, Decimal::new(600, 0));
/// assert_eq!(totals.net_salary, Decimal::new(6400, 0));
/// ```
pub fn calculate_totals(amounts: &SalaryAmounts) -> DraftResult<SalaryTotals> {
    let gross_salary = sum_fields(amounts, &SalaryField::EARNINGS, "gross_salary")?;
    let total_deductions = sum_fields(amounts, &SalaryField::DEDUCTIONS, "total_deductions")?;
    let net_salary = gross_salary
        .checked_sub(total_deductions)
        .ok_or_else(|| out_of_range("net_salary"))?;

    Ok(SalaryTotals {
        gross_salary,
        total_deductions,
        net_salary,
    })
}

fn sum_fields(
    amounts: &SalaryAmounts,
    fields: &[SalaryField],
    total: &str,
) -> DraftResult<Decimal> {
    fields.iter().try_fold(Decimal::ZERO, |sum, field| {
        sum.checked_add(amounts.get(*field))
            .ok_or_else(|| out_of_range(total))
    })
}

fn out_of_range(field: &str) -> DraftError {
    DraftError::AmountOutOfRange {
        field: field.to_string(),
    }
}
