pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use log::info;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeDetails};

pub use memory::InMemoryEmployeeRepository;
pub use postgres::PgEmployeeRepository;

pub const DUPLICATE_EMAIL: &str = "Email already exists";

/// Persistence operations the employee service relies on.
///
/// `insert` and `update` must reject a second row with the same email by
/// returning `AppError::DuplicateEmail`.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees ordered by id.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;
    async fn insert(&self, details: EmployeeDetails) -> Result<Employee, AppError>;
    async fn update(&self, employee: &Employee) -> Result<(), AppError>;
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|err| AppError::DatabaseError(err.to_string()))?;
    info!("Database migrations applied");

    Ok(pool)
}
