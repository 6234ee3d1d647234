use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::photo::PhotoUpload;
use crate::services::PhotoService;

pub async fn upload_photo(
    service: web::Data<PhotoService>,
    payload: web::Json<PhotoUpload>,
) -> Result<HttpResponse, AppError> {
    let photo = service.upload(payload.into_inner().image).await?;
    Ok(HttpResponse::Created().json(photo))
}

pub async fn get_photos(service: web::Data<PhotoService>) -> Result<HttpResponse, AppError> {
    let photos = service.list().await?;
    Ok(HttpResponse::Ok().json(photos))
}
