use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use tracing::{debug, error, info, warn};

use crate::{
    error::StoreError,
    model::payroll::{NumericInput, PayrollField, PayrollInput, PayrollRecord},
    utils::validation::{parse_salary, required_text, validate_new_record},
};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS payroll (
        employee_id TEXT PRIMARY KEY,
        employee_name TEXT NOT NULL,
        position TEXT NOT NULL,
        monthly_salary REAL NOT NULL,
        bonus REAL DEFAULT 0.0
    )
"#;

// Rows written by older tools may carry a NULL bonus.
const SELECT_COLUMNS: &str =
    "SELECT employee_id, employee_name, position, monthly_salary, COALESCE(bonus, 0.0) AS bonus FROM payroll";

/// Access to the `payroll` table.
///
/// Every operation opens its own connection, runs a single statement and
/// closes the connection again. Nothing is pooled or held between calls.
pub struct PayrollStore {
    options: SqliteConnectOptions,
}

impl PayrollStore {
    /// `database_url` is a sqlite URL such as `sqlite://payroll.db`.
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        Ok(Self { options })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self { options }
    }

    async fn connect(&self) -> Result<SqliteConnection, StoreError> {
        self.options.connect().await.map_err(|e| {
            error!(error = %e, "Failed to open payroll database");
            StoreError::Storage(e)
        })
    }

    /// Creates the table if it does not exist yet. Safe to call on every start.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query(CREATE_TABLE).execute(&mut conn).await;
        conn.close().await?;

        result?;
        debug!("Payroll table ready");
        Ok(())
    }

    /// Validates `input` and stores it as a new record.
    pub async fn insert(&self, input: &PayrollInput) -> Result<PayrollRecord, StoreError> {
        let record = validate_new_record(input)?;

        let mut conn = self.connect().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO payroll
            (employee_id, employee_name, position, monthly_salary, bonus)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&record.employee_id)
        .bind(&record.employee_name)
        .bind(&record.position)
        .bind(record.monthly_salary)
        .bind(record.bonus)
        .execute(&mut conn)
        .await;
        conn.close().await?;

        match result {
            Ok(_) => {
                info!(employee_id = %record.employee_id, "Employee added");
                Ok(record)
            }
            Err(e) if is_duplicate_key(&e) => {
                warn!(employee_id = %record.employee_id, "Employee ID already exists");
                Err(StoreError::DuplicateKey(record.employee_id))
            }
            Err(e) => {
                error!(error = %e, employee_id = %record.employee_id, "Failed to add employee");
                Err(e.into())
            }
        }
    }

    /// Every record in insertion order.
    pub async fn list_all(&self) -> Result<Vec<PayrollRecord>, StoreError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY rowid");

        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, PayrollRecord>(&sql)
            .fetch_all(&mut conn)
            .await;
        conn.close().await?;

        Ok(rows?)
    }

    /// Records whose id or position contains `term`.
    ///
    /// Substring match that ignores ASCII case, like sqlite `LIKE`, but `%` and `_`
    /// carry no special meaning.
    pub async fn search(&self, term: &str) -> Result<Vec<PayrollRecord>, StoreError> {
        let term = term.trim();
        if term.is_empty() {
            return self.list_all().await;
        }

        let sql = format!(
            "{SELECT_COLUMNS} WHERE instr(lower(employee_id), lower(?)) > 0 OR instr(lower(position), lower(?)) > 0 ORDER BY rowid"
        );
        debug!(sql = %sql, term, "Searching payroll");

        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, PayrollRecord>(&sql)
            .bind(term)
            .bind(term)
            .fetch_all(&mut conn)
            .await;
        conn.close().await?;

        Ok(rows?)
    }

    pub async fn find(&self, employee_id: &str) -> Result<Option<PayrollRecord>, StoreError> {
        let employee_id = required_text(PayrollField::EmployeeId, Some(employee_id))?;
        let sql = format!("{SELECT_COLUMNS} WHERE employee_id = ?");

        let mut conn = self.connect().await?;
        let row = sqlx::query_as::<_, PayrollRecord>(&sql)
            .bind(&employee_id)
            .fetch_optional(&mut conn)
            .await;
        conn.close().await?;

        Ok(row?)
    }

    /// Sets `monthly_salary` for `employee_id` and returns the number of rows changed.
    ///
    /// An unknown id is not an error: nothing changes and `0` is returned.
    pub async fn update_salary(
        &self,
        employee_id: &str,
        new_salary: Option<&NumericInput>,
    ) -> Result<u64, StoreError> {
        let employee_id = required_text(PayrollField::EmployeeId, Some(employee_id))?;
        let salary = parse_salary(new_salary)?;

        let mut conn = self.connect().await?;
        let result = sqlx::query("UPDATE payroll SET monthly_salary = ? WHERE employee_id = ?")
            .bind(salary)
            .bind(&employee_id)
            .execute(&mut conn)
            .await;
        conn.close().await?;

        let affected = result
            .map_err(|e| {
                error!(error = %e, employee_id = %employee_id, "Failed to update salary");
                StoreError::Storage(e)
            })?
            .rows_affected();

        if affected == 0 {
            warn!(employee_id = %employee_id, "Salary update matched no employee");
        } else {
            info!(employee_id = %employee_id, salary, "Salary updated");
        }

        Ok(affected)
    }
}

fn is_duplicate_key(e: &sqlx::Error) -> bool {
    match e {
        // 1555 = SQLITE_CONSTRAINT_PRIMARYKEY, 2067 = SQLITE_CONSTRAINT_UNIQUE
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation()
                || matches!(db_err.code().as_deref(), Some("1555") | Some("2067"))
        }
        _ => false,
    }
}
