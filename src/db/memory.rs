use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{EmployeeRepository, DUPLICATE_EMAIL};
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeDetails};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Employee>,
}

impl Table {
    fn email_taken(&self, email: &str, except_id: Option<i32>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && Some(row.id) != except_id)
    }
}

/// Process-local employee store. Ids are handed out in increasing order and
/// never reused, matching a `SERIAL` column.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    table: RwLock<Table>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|row| row.email == email).cloned())
    }

    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, AppError> {
        let mut table = self.table.write().await;
        if table.email_taken(&details.email, None) {
            return Err(AppError::DuplicateEmail(DUPLICATE_EMAIL.to_string()));
        }

        table.last_id += 1;
        let employee = Employee::new(table.last_id, details);
        table.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: &Employee) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&employee.id) {
            return Err(AppError::NotFound("Employee not found".to_string()));
        }
        if table.email_taken(&employee.email, Some(employee.id)) {
            return Err(AppError::DuplicateEmail(DUPLICATE_EMAIL.to_string()));
        }

        table.rows.insert(employee.id, employee.clone());
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut table = self.table.write().await;
        match table.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("Employee not found".to_string())),
        }
    }
}
