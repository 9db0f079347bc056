use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::courses::entities::CourseLevel;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "OK"))),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list courses",
                )),
            )
        }
    }
}

pub async fn handle_list_active(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_active_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "OK"))),
        Err(e) => {
            error!("Failed to list active courses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list courses",
                )),
            )
        }
    }
}

pub async fn handle_list_by_level(
    service: &CourseService,
    request: &HttpRequest,
    level: CourseLevel,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses_by_level(level).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "OK"))),
        Err(e) => {
            error!("Failed to list courses by level: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list courses",
                )),
            )
        }
    }
}

pub async fn handle_search(
    service: &CourseService,
    request: &HttpRequest,
    name: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.search_courses_by_name(&name).await {
        Ok(courses) => Ok(HttpResponse::Ok().json(ApiResponse::success(courses, "OK"))),
        Err(e) => {
            error!("Failed to search courses by name {}: {}", name, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to search courses",
                )),
            )
        }
    }
}
