//! Form submission gateway.
//!
//! Packages the draft, hands it to the create operation exactly once per
//! attempt, and turns every outcome into a user notification. Success also
//! navigates away and closes the draft.

use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::error::{DraftError, DraftResult};
use crate::models::{Notification, SalaryRecord};

use super::lock_form;
use super::ports::{Navigator, Notifier, SalaryCreator};
use super::salary_form::SalaryForm;

/// Route prefix of the salary details screen.
pub const SALARY_DETAILS_ROUTE: &str = "/dashboard/hr/salaries";

const TITLE_EMPLOYEE_REQUIRED: &str = "يرجى اختيار الموظف";
const TITLE_INVALID_AMOUNTS: &str = "يرجى تصحيح المبالغ غير الصالحة";
const TITLE_CREATED: &str = "تم إنشاء الراتب بنجاح";
const TITLE_CREATE_FAILED: &str = "فشل في إنشاء الراتب";

/// Submits the form's draft.
///
/// - No employee selected, or a field in error: a destructive notification,
///   no create call.
/// - A submission already in flight, or the draft already submitted:
///   rejected with no create call and no notification.
/// - Otherwise one create call. On success the draft is closed, a success
///   notification is shown and the user is sent to the new record. On failure
///   a destructive notification is shown and the draft stays as it was.
pub async fn submit_salary<C, N, V>(
    form: &Mutex<SalaryForm>,
    creator: &C,
    notifier: &N,
    navigator: &V,
) -> DraftResult<SalaryRecord>
where
    C: SalaryCreator,
    N: Notifier,
    V: Navigator,
{
    let begun = lock_form(form).begin_submission();
    let request = match begun {
        Ok(request) => request,
        Err(err) => {
            match &err {
                DraftError::SubmissionInFlight | DraftError::DraftClosed => {
                    debug!(error = %err, "Submission ignored");
                }
                _ => {
                    warn!(error = %err, "Submission blocked");
                    notifier.notify(blocked_notification(&err));
                }
            }
            return Err(err);
        }
    };

    let employee_id = request.employee_id.clone();
    info!(
        employee_id = %employee_id,
        net_salary = %request.totals.net_salary,
        "Submitting salary draft"
    );

    match creator.create_salary(request).await {
        Ok(record) => {
            lock_form(form).complete_submission();
            info!(employee_id = %employee_id, salary_id = %record.id, "Salary created");
            notifier.notify(Notification::success(TITLE_CREATED));
            navigator.navigate(&format!("{}/{}", SALARY_DETAILS_ROUTE, record.id));
            Ok(record)
        }
        Err(err) => {
            lock_form(form).abort_submission();
            warn!(employee_id = %employee_id, error = %err, "Salary creation failed");
            notifier.notify(Notification::error(
                TITLE_CREATE_FAILED,
                Some(err.to_string()),
            ));
            Err(err)
        }
    }
}

fn blocked_notification(err: &DraftError) -> Notification {
    match err {
        DraftError::EmployeeNotSelected => Notification::error(TITLE_EMPLOYEE_REQUIRED, None),
        DraftError::InvalidAmounts { fields } => {
            let labels: Vec<&str> = fields.iter().map(|f| f.label_ar()).collect();
            Notification::error(TITLE_INVALID_AMOUNTS, Some(labels.join("، ")))
        }
        other => Notification::error(TITLE_CREATE_FAILED, Some(other.to_string())),
    }
}
