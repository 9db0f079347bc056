use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers().await {
        Ok(teachers) => Ok(HttpResponse::Ok().json(ApiResponse::success(teachers, "OK"))),
        Err(e) => {
            error!("Failed to list teachers: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list teachers",
                )),
            )
        }
    }
}

pub async fn handle_search(
    service: &TeacherService,
    request: &HttpRequest,
    name: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.search_teachers_by_name(&name).await {
        Ok(teachers) => Ok(HttpResponse::Ok().json(ApiResponse::success(teachers, "OK"))),
        Err(e) => {
            error!("Failed to search teachers by name {}: {}", name, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to search teachers",
                )),
            )
        }
    }
}
