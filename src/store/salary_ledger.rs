//! In-memory salary ledger.
//!
//! Backs the salary create operation for the HTTP surface and for tests.
//! Records live for the lifetime of the process only.

use std::future::{Future, ready};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::calculation::calculate_totals;
use crate::error::{DraftError, DraftResult};
use crate::form::SalaryCreator;
use crate::models::{CreateSalaryRequest, SalaryFilters, SalaryRecord, SalaryStatus};

use super::InMemoryEmployeeDirectory;

/// Stores salary records created from draft payloads.
#[derive(Debug)]
pub struct SalaryLedger {
    directory: Arc<InMemoryEmployeeDirectory>,
    records: RwLock<Vec<SalaryRecord>>,
}

impl SalaryLedger {
    /// Creates an empty ledger that resolves employees through `directory`.
    pub fn new(directory: Arc<InMemoryEmployeeDirectory>) -> Self {
        Self {
            directory,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Validates a payload and stores it as a new record.
    ///
    /// Fails if the employee id is empty or unknown, the status is not
    /// `draft`, or the payload's totals disagree with its amounts.
    pub fn create(&self, request: CreateSalaryRequest) -> DraftResult<SalaryRecord> {
        if request.employee_id.is_empty() {
            return Err(DraftError::EmployeeNotSelected);
        }
        if request.status != SalaryStatus::Draft {
            return Err(DraftError::CreateRejected {
                message: "new salaries must be submitted as draft".to_string(),
            });
        }

        let totals = calculate_totals(&request.amounts)?;
        for (field, expected, actual) in [
            ("gross_salary", totals.gross_salary, request.totals.gross_salary),
            (
                "total_deductions",
                totals.total_deductions,
                request.totals.total_deductions,
            ),
            ("net_salary", totals.net_salary, request.totals.net_salary),
        ] {
            if expected != actual {
                return Err(DraftError::TotalsMismatch {
                    field: field.to_string(),
                    expected,
                    actual,
                });
            }
        }

        let employee = self.directory.find(&request.employee_id).ok_or_else(|| {
            DraftError::EmployeeNotFound {
                id: request.employee_id.clone(),
            }
        })?;

        let now = Utc::now();
        let record = SalaryRecord {
            id: Uuid::new_v4(),
            employee_id: request.employee_id,
            employee_name: Some(employee.full_name()),
            department: employee.department.clone(),
            month: request.month,
            year: request.year,
            status: request.status,
            amounts: request.amounts,
            totals,
            notes: request.notes,
            created_at: now,
            updated_at: now,
        };

        info!(
            salary_id = %record.id,
            employee_id = %record.employee_id,
            month = record.month,
            year = record.year,
            net_salary = %record.totals.net_salary,
            "Salary record stored"
        );

        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(record)
    }

    /// Records matching `filters`, in creation order.
    pub fn list(&self, filters: &SalaryFilters) -> Vec<SalaryRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| filters.matches(r))
            .cloned()
            .collect()
    }

    /// One record by id.
    pub fn get(&self, id: Uuid) -> DraftResult<SalaryRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| DraftError::SalaryNotFound { id: id.to_string() })
    }
}

impl SalaryCreator for SalaryLedger {
    fn create_salary(
        &self,
        request: CreateSalaryRequest,
    ) -> impl Future<Output = DraftResult<SalaryRecord>> + Send {
        ready(self.create(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{SalaryAmounts, SalaryTotals};
    use rust_decimal::Decimal;

    fn create_ledger() -> SalaryLedger {
        let config = ConfigLoader::load("./config/default").unwrap();
        SalaryLedger::new(Arc::new(InMemoryEmployeeDirectory::from_config(&config)))
    }

    fn create_request(employee_id: &str, month: u32) -> CreateSalaryRequest {
        let amounts = SalaryAmounts {
            base_salary: Decimal::new(5000, 0),
            tax: Decimal::new(100, 0),
            ..Default::default()
        };
        CreateSalaryRequest {
            employee_id: employee_id.to_string(),
            month,
            year: 2026,
            totals: calculate_totals(&amounts).unwrap(),
            amounts,
            notes: None,
            status: SalaryStatus::Draft,
        }
    }

    #[test]
    fn test_create_stores_record_with_employee_details() {
        let ledger = create_ledger();
        let record = ledger.create(create_request("emp_001", 1)).unwrap();

        assert_eq!(record.employee_name.as_deref(), Some("Sara Alharbi"));
        assert_eq!(record.department.as_deref(), Some("Litigation"));
        assert_eq!(record.totals.net_salary, Decimal::new(4900, 0));
        assert_eq!(ledger.get(record.id).unwrap(), record);
    }

    #[test]
    fn test_create_rejects_empty_employee() {
        let ledger = create_ledger();
        assert!(matches!(
            ledger.create(create_request("", 1)),
            Err(DraftError::EmployeeNotSelected)
        ));
    }

    #[test]
    fn test_create_rejects_unknown_employee() {
        let ledger = create_ledger();
        match ledger.create(create_request("emp_404", 1)) {
            Err(DraftError::EmployeeNotFound { id }) => assert_eq!(id, "emp_404"),
            other => panic!("Expected EmployeeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_create_rejects_inconsistent_totals() {
        let ledger = create_ledger();
        let mut request = create_request("emp_001", 1);
        request.totals = SalaryTotals {
            net_salary: Decimal::new(5000, 0),
            ..request.totals
        };

        match ledger.create(request) {
            Err(DraftError::TotalsMismatch { field, expected, .. }) => {
                assert_eq!(field, "net_salary");
                assert_eq!(expected, Decimal::new(4900, 0));
            }
            other => panic!("Expected TotalsMismatch, got {:?}", other),
        }
        assert!(ledger.list(&SalaryFilters::default()).is_empty());
    }

    #[test]
    fn test_create_rejects_overflowing_amounts() {
        let ledger = create_ledger();
        let mut request = create_request("emp_001", 1);
        request.amounts.base_salary = Decimal::MAX;
        request.amounts.bonus = Decimal::MAX;

        match ledger.create(request) {
            Err(DraftError::AmountOutOfRange { field }) => assert_eq!(field, "gross_salary"),
            other => panic!("Expected AmountOutOfRange, got {:?}", other),
        }
        assert!(ledger.list(&SalaryFilters::default()).is_empty());
    }

    #[test]
    fn test_create_rejects_non_draft_status() {
        let ledger = create_ledger();
        let mut request = create_request("emp_001", 1);
        request.status = SalaryStatus::Paid;
        assert!(matches!(
            ledger.create(request),
            Err(DraftError::CreateRejected { .. })
        ));
    }

    #[test]
    fn test_list_applies_filters() {
        let ledger = create_ledger();
        ledger.create(create_request("emp_001", 1)).unwrap();
        ledger.create(create_request("emp_001", 2)).unwrap();
        ledger.create(create_request("emp_002", 1)).unwrap();

        let january = SalaryFilters {
            month: Some(1),
            ..Default::default()
        };
        assert_eq!(ledger.list(&january).len(), 2);

        let sara = SalaryFilters {
            employee_id: Some("emp_001".to_string()),
            ..Default::default()
        };
        assert_eq!(ledger.list(&sara).len(), 2);
        assert_eq!(ledger.list(&SalaryFilters::default()).len(), 3);
    }

    #[test]
    fn test_get_unknown_record() {
        let ledger = create_ledger();
        assert!(matches!(
            ledger.get(Uuid::new_v4()),
            Err(DraftError::SalaryNotFound { .. })
        ));
    }
}
