//! HTTP API module for the salary draft engine.
//!
//! Exposes the totals calculation, the employee directory and the salary
//! ledger as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, RawAmount};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
