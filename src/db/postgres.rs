use async_trait::async_trait;
use sqlx::PgPool;

use super::{EmployeeRepository, DUPLICATE_EMAIL};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeDetails};

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email, phone";

pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(err: sqlx::Error) -> AppError {
    match err.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateEmail(DUPLICATE_EMAIL.to_string())
        }
        _ => AppError::from(err),
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees ORDER BY id", EMPLOYEE_COLUMNS);
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees WHERE id = $1", EMPLOYEE_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees WHERE email = $1", EMPLOYEE_COLUMNS);
        let employee = sqlx::query_as::<_, Employee>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, AppError> {
        let sql = format!(
            "INSERT INTO employees (first_name, last_name, email, phone) VALUES ($1, $2, $3, $4) RETURNING {}",
            EMPLOYEE_COLUMNS
        );
        sqlx::query_as::<_, Employee>(&sql)
            .bind(&details.first_name)
            .bind(&details.last_name)
            .bind(&details.email)
            .bind(&details.phone)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn update(&self, employee: &Employee) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE employees SET first_name = $1, last_name = $2, email = $3, phone = $4 WHERE id = $5",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(employee.id)
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employee not found".to_string()));
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Employee not found".to_string()));
        }
        Ok(())
    }
}
