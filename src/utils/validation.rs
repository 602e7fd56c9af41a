use crate::{
    error::StoreError,
    model::payroll::{NumericInput, PayrollField, PayrollInput, PayrollRecord},
};

// ===============================
// Text fields
// ===============================
pub fn required_text(field: PayrollField, value: Option<&str>) -> Result<String, StoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(StoreError::validation(field, "is required")),
    }
}

// ===============================
// Numeric fields
// ===============================

/// `Ok(None)` when the value is missing or blank.
pub fn parse_amount(
    field: PayrollField,
    value: Option<&NumericInput>,
) -> Result<Option<f64>, StoreError> {
    let amount = match value {
        None => return Ok(None),
        Some(NumericInput::Number(n)) => *n,
        Some(NumericInput::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<f64>()
                .map_err(|_| StoreError::validation(field, "must be a numeric value"))?
        }
    };

    // "inf" and "NaN" parse as f64 but are not amounts
    if !amount.is_finite() {
        return Err(StoreError::validation(field, "must be a numeric value"));
    }

    Ok(Some(amount))
}

pub fn parse_salary(value: Option<&NumericInput>) -> Result<f64, StoreError> {
    let salary = parse_amount(PayrollField::MonthlySalary, value)?
        .ok_or_else(|| StoreError::validation(PayrollField::MonthlySalary, "is required"))?;

    if salary < 0.0 {
        return Err(StoreError::validation(
            PayrollField::MonthlySalary,
            "must not be negative",
        ));
    }

    Ok(salary)
}

// ===============================
// Whole record
// ===============================
pub fn validate_new_record(input: &PayrollInput) -> Result<PayrollRecord, StoreError> {
    let employee_id = required_text(PayrollField::EmployeeId, input.employee_id.as_deref())?;
    let employee_name = required_text(PayrollField::EmployeeName, input.employee_name.as_deref())?;
    let position = required_text(PayrollField::Position, input.position.as_deref())?;
    let monthly_salary = parse_salary(input.monthly_salary.as_ref())?;
    let bonus = parse_amount(PayrollField::Bonus, input.bonus.as_ref())?.unwrap_or(0.0);

    Ok(PayrollRecord {
        employee_id,
        employee_name,
        position,
        monthly_salary,
        bonus,
    })
}
