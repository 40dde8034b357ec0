//! In-memory implementations of the form's collaborators.
//!
//! The HTTP surface serves these; nothing here outlives the process.

mod employee_directory;
mod salary_ledger;

pub use employee_directory::InMemoryEmployeeDirectory;
pub use salary_ledger::SalaryLedger;
