//! Error types for the salary draft engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the draft, its collaborators and the HTTP surface can report.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::SalaryField;

/// Why a raw amount entry could not be read as a number.
///
/// The form keeps this per field so "the user typed zero" and "the user typed
/// something unreadable" stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Nothing (or only whitespace) was entered.
    #[error("amount is empty")]
    Empty,

    /// The entry is not a decimal number.
    #[error("'{input}' is not a number")]
    NotANumber {
        /// The trimmed text that failed to parse.
        input: String,
    },
}

/// The main error type for the salary draft engine.
///
/// # Example
///
/// ```
/// use salary_draft::error::DraftError;
///
/// let error = DraftError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum DraftError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A submission was attempted without choosing an employee.
    #[error("No employee selected")]
    EmployeeNotSelected,

    /// The employee directory has no record with this id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was looked up.
        id: String,
    },

    /// The employee directory could not be reached or answered with an error.
    #[error("Employee directory unavailable: {message}")]
    DirectoryUnavailable {
        /// A description of the failure.
        message: String,
    },

    /// One or more amount fields hold unreadable input.
    #[error("Invalid amounts in fields: {}", join_fields(fields))]
    InvalidAmounts {
        /// The fields currently in error, in declaration order.
        fields: Vec<SalaryField>,
    },

    /// A submission for this draft is already waiting on the create operation.
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    /// The draft was submitted successfully and can no longer change.
    #[error("The draft has already been submitted")]
    DraftClosed,

    /// The create operation rejected the payload.
    #[error("Salary creation rejected: {message}")]
    CreateRejected {
        /// The reason given by the create operation.
        message: String,
    },

    /// A payload carried derived totals that do not match its amounts.
    #[error("Totals mismatch for '{field}': expected {expected}, got {actual}")]
    TotalsMismatch {
        /// The derived field that disagrees.
        field: String,
        /// The value recomputed from the amounts.
        expected: Decimal,
        /// The value the payload carried.
        actual: Decimal,
    },

    /// A derived amount does not fit in a decimal.
    #[error("Amount out of range: {field}")]
    AmountOutOfRange {
        /// The amount or total that overflowed.
        field: String,
    },

    /// A stored salary record was not found.
    #[error("Salary record not found: {id}")]
    SalaryNotFound {
        /// The record id that was looked up.
        id: String,
    },
}

fn join_fields(fields: &[SalaryField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type alias for Results that return DraftError.
pub type DraftResult<T> = Result<T, DraftError>;
