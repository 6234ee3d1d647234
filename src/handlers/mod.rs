pub mod employee;
pub mod photo;

use actix_web::web;

use crate::utils::validation::{json_error_handler, path_error_handler};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(web::resource("/employee").route(web::get().to(employee::index)))
        // Literal paths first so they are not captured by `{id}`.
        .service(
            web::resource("/api/v1/employee/upload-photo")
                .route(web::post().to(photo::upload_photo)),
        )
        .service(
            web::resource("/api/v1/employee/uploads/photos")
                .route(web::get().to(photo::get_photos)),
        )
        .service(
            web::resource("/api/v1/employee")
                .route(web::get().to(employee::get_employees))
                .route(web::post().to(employee::create_employee)),
        )
        .service(
            web::resource("/api/v1/employee/{id}")
                .route(web::get().to(employee::get_employee))
                .route(web::put().to(employee::update_employee))
                .route(web::delete().to(employee::delete_employee)),
        );
}
