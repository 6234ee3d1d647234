use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::models::employee::{EmployeePayload, StatusResponse};
use crate::services::EmployeeService;
use crate::utils::validation::parse_json;

const INDEX_PAGE: &str = include_str!("../../templates/employee_index.html");

pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_PAGE)
}

pub async fn get_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let employee = service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<EmployeePayload>,
) -> Result<HttpResponse, AppError> {
    service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(StatusResponse { status: "Employee added" }))
}

/// The id is resolved before the body is read, so an unknown id is a 404
/// whatever the body contains.
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    service.get(id).await?;

    let payload: EmployeePayload = parse_json(&body)?;
    service.update(id, payload).await?;
    Ok(HttpResponse::Ok().json(StatusResponse { status: "Employee updated" }))
}

pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(StatusResponse { status: "Employee deleted" }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::db::InMemoryEmployeeRepository;
    use crate::handlers::configure;

    fn employee_service() -> web::Data<EmployeeService> {
        web::Data::new(EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new())))
    }

    fn ada() -> Value {
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "phone": "555-0100",
        })
    }

    #[actix_web::test]
    async fn create_then_get_round_trips_the_record() {
        let app = test::init_service(
            App::new().app_data(employee_service()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/employee").set_json(ada()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "Employee added" }));

        let req = test::TestRequest::get().uri("/api/v1/employee").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let id = list[0]["id"].as_i64().unwrap();

        let req = test::TestRequest::get().uri(&format!("/api/v1/employee/{}", id)).to_request();
        let record: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record["firstName"], "Ada");
        assert_eq!(record["lastName"], "Lovelace");
        assert_eq!(record["email"], "ada@example.com");
        assert_eq!(record["phone"], "555-0100");
    }

    #[actix_web::test]
    async fn list_of_empty_store_is_an_empty_array() {
        let app = test::init_service(
            App::new().app_data(employee_service()).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/employee").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list, json!([]));
    }

    #[actix_web::test]
    async fn duplicate_email_is_a_bad_request() {
        let app = test::init_service(
            App::new().app_data(employee_service()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/employee").set_json(ada()).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post().uri("/api/v1/employee").set_json(ada()).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Email already exists" }));
    }

    #[actix_web::test]
    async fn missing_fields_and_malformed_bodies_are_bad_requests() {
        let app = test::init_service(
            App::new().app_data(employee_service()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/employee")
            .set_json(json!({ "firstName": "Ada" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid data");

        let req = test::TestRequest::post()
            .uri("/api/v1/employee")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn update_and_delete_unknown_ids_are_not_found() {
        let app = test::init_service(
            App::new().app_data(employee_service()).configure(configure),
        )
        .await;

        let req = test::TestRequest::put().uri("/api/v1/employee/99").set_json(json!({})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Employee not found" }));

        let req = test::TestRequest::delete().uri("/api/v1/employee/99").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/api/v1/employee/abc").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_of_unknown_id_ignores_the_body() {
        let app = test::init_service(
            App::new().app_data(employee_service()).configure(configure),
        )
        .await;

        let bodies = ["{not json", "", r#"{"firstName": 5}"#];
        for body in bodies {
            let req = test::TestRequest::put()
                .uri("/api/v1/employee/99")
                .insert_header(("content-type", "application/json"))
                .set_payload(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "body: {:?}", body);
        }
    }

    #[actix_web::test]
    async fn update_of_existing_id_with_malformed_body_is_a_bad_request() {
        let service = employee_service();
        let app = test::init_service(
            App::new().app_data(service.clone()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/employee").set_json(ada()).to_request();
        test::call_service(&app, req).await;
        let id = service.list().await.unwrap()[0].id;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/employee/{}", id))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Invalid data" }));
    }

    #[actix_web::test]
    async fn create_accepts_json_without_a_content_type() {
        let service = employee_service();
        let app = test::init_service(
            App::new().app_data(service.clone()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/employee")
            .set_payload(ada().to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(service.list().await.unwrap()[0].email, "ada@example.com");
    }

    #[actix_web::test]
    async fn update_then_delete_lifecycle() {
        let service = employee_service();
        let app = test::init_service(
            App::new().app_data(service.clone()).configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/v1/employee").set_json(ada()).to_request();
        test::call_service(&app, req).await;
        let id = service.list().await.unwrap()[0].id;

        let mut changed = ada();
        changed["phone"] = json!("555-0111");
        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/employee/{}", id))
            .set_json(changed)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "Employee updated" }));
        assert_eq!(service.get(id).await.unwrap().phone, "555-0111");

        let req = test::TestRequest::delete().uri(&format!("/api/v1/employee/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "Employee deleted" }));

        let req = test::TestRequest::get().uri(&format!("/api/v1/employee/{}", id)).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn index_page_is_html() {
        let app = test::init_service(
            App::new().app_data(employee_service()).configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/employee").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .starts_with("text/html"));
    }
}
