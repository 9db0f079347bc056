use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students().await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(students, "OK"))),
        Err(e) => {
            error!("Failed to list students: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list students",
                )),
            )
        }
    }
}

pub async fn handle_search(
    service: &StudentService,
    request: &HttpRequest,
    name: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.search_students_by_name(&name).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(students, "OK"))),
        Err(e) => {
            error!("Failed to search students by name {}: {}", name, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to search students",
                )),
            )
        }
    }
}

pub async fn handle_list_by_class(
    service: &StudentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_students_by_class(class_id).await {
        Ok(students) => Ok(HttpResponse::Ok().json(ApiResponse::success(students, "OK"))),
        Err(e) => {
            error!("Failed to list students of class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list students",
                )),
            )
        }
    }
}
