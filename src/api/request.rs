//! Request types for the salary draft API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::SalaryField;

/// One amount as typed into the form: text, or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number.
    Number(serde_json::Number),
    /// Raw text.
    Text(String),
}

impl RawAmount {
    /// The entry as text, ready for amount parsing.
    pub fn as_text(&self) -> String {
        match self {
            RawAmount::Number(n) => n.to_string(),
            RawAmount::Text(s) => s.clone(),
        }
    }
}

/// Request body for `POST /salaries/calculate`.
///
/// Fields left out count as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Raw entries keyed by field name.
    #[serde(default)]
    pub amounts: BTreeMap<SalaryField, RawAmount>,
}
