use std::sync::Arc;

use log::info;

use crate::db::{EmployeeRepository, DUPLICATE_EMAIL};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeDetails, EmployeePayload};
use crate::utils::validation::validate_payload;

const NOT_FOUND: &str = "Employee not found";

/// Validation, email uniqueness and persistence for employee records.
#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i32) -> Result<Employee, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    pub async fn create(&self, payload: EmployeePayload) -> Result<Employee, AppError> {
        validate_payload(&payload)?;
        let details = EmployeeDetails::from(payload);

        if self.repo.find_by_email(&details.email).await?.is_some() {
            return Err(AppError::DuplicateEmail(DUPLICATE_EMAIL.to_string()));
        }

        let employee = self.repo.insert(details).await?;
        info!("Created employee {}", employee.id);
        Ok(employee)
    }

    /// Overwrites all four fields of an existing record. The record may keep
    /// its own email; any other holder of that email is a conflict.
    pub async fn update(&self, id: i32, payload: EmployeePayload) -> Result<Employee, AppError> {
        let current = self.get(id).await?;

        validate_payload(&payload)?;
        let details = EmployeeDetails::from(payload);

        if let Some(holder) = self.repo.find_by_email(&details.email).await? {
            if holder.id != id {
                return Err(AppError::DuplicateEmail(DUPLICATE_EMAIL.to_string()));
            }
        }

        let updated = current.with_details(details);
        self.repo.update(&updated).await?;
        info!("Updated employee {}", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.get(id).await?;
        self.repo.delete(id).await?;
        info!("Deleted employee {}", id);
        Ok(())
    }
}
