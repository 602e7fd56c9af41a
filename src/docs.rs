use crate::api::payroll::{PayrollListResponse, PayrollQuery, SalaryUpdateResponse, UpdateSalary};
use crate::model::payroll::{PayrollInput, PayrollRecord};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Payroll API",
        version = "0.1.0",
        description = r#"
## Employee Payroll Management

Records employee payroll entries in a local SQLite file.

### Operations
- **Add Employee**: ID, name, position, monthly salary and an optional bonus
- **Show Payroll**: every record, in the order they were added
- **Search**: by a fragment of the employee ID or position
- **Update Salary**: change the monthly salary of one employee

Salary and bonus may be sent as JSON numbers or as numeric text.
"#,
    ),
    paths(
        crate::api::payroll::create_payroll,
        crate::api::payroll::list_payrolls,
        crate::api::payroll::get_payroll,
        crate::api::payroll::update_salary
    ),
    components(
        schemas(
            PayrollRecord,
            PayrollInput,
            PayrollQuery,
            PayrollListResponse,
            UpdateSalary,
            SalaryUpdateResponse
        )
    ),
    tags(
        (name = "Payroll", description = "Payroll record APIs"),
    )
)]
pub struct ApiDoc;
