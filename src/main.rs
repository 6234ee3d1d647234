mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod services;
mod utils;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info, warn};

use crate::config::Config;
use crate::db::{EmployeeRepository, InMemoryEmployeeRepository, PgEmployeeRepository};
use crate::services::{EmployeeService, PhotoService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env().map_err(|err| {
        error!("{}", err);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    let repo: Arc<dyn EmployeeRepository> = match &config.database {
        Some(database) => {
            let pool = db::create_pool(database).await.map_err(|err| {
                error!("Failed to connect to the database: {}", err);
                std::io::Error::new(std::io::ErrorKind::Other, err)
            })?;
            Arc::new(PgEmployeeRepository::new(pool))
        }
        None => {
            warn!("DATABASE_URL is not set; employees are kept in memory only");
            Arc::new(InMemoryEmployeeRepository::new())
        }
    };

    let employees = web::Data::new(EmployeeService::new(repo));
    let photos = web::Data::new(PhotoService::new(config.photos.clone()));

    info!(
        "Starting server at {} (photos in {})",
        config.bind_address,
        config.photos.directory.display()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(employees.clone())
            .app_data(photos.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
