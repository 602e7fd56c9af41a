use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

/// One row of the `payroll` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "E1",
        "employee_name": "Ana",
        "position": "Engineer",
        "monthly_salary": 5000.0,
        "bonus": 0.0
    })
)]
pub struct PayrollRecord {
    #[schema(example = "E1")]
    pub employee_id: String,

    #[schema(example = "Ana")]
    pub employee_name: String,

    #[schema(example = "Engineer")]
    pub position: String,

    #[schema(example = 5000.0)]
    pub monthly_salary: f64,

    #[schema(example = 0.0)]
    pub bonus: f64,
}

/// Amount as sent by a client: either a JSON number or the raw text of a form field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

/// Unvalidated field set for a new payroll entry.
///
/// Every field may be absent; `validate_new_record` decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct PayrollInput {
    #[schema(example = "E1", value_type = Option<String>)]
    pub employee_id: Option<String>,

    #[schema(example = "Ana", value_type = Option<String>)]
    pub employee_name: Option<String>,

    #[schema(example = "Engineer", value_type = Option<String>)]
    pub position: Option<String>,

    #[schema(example = "5000", value_type = Option<String>)]
    pub monthly_salary: Option<NumericInput>,

    /// Optional, stored as 0.0 when missing or blank
    #[schema(example = "250.5", value_type = Option<String>)]
    pub bonus: Option<NumericInput>,
}

/// Column names, used to point validation errors at a field.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PayrollField {
    EmployeeId,
    EmployeeName,
    Position,
    MonthlySalary,
    Bonus,
}
