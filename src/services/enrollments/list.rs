use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_get(
    service: &EnrollmentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_enrollment_by_id(id).await {
        Ok(Some(enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollment, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EnrollmentNotFound,
            format!("Enrollment {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to get enrollment {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get enrollment",
                )),
            )
        }
    }
}

pub async fn handle_list_all(
    service: &EnrollmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_enrollments().await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollments, "OK"))),
        Err(e) => {
            error!("Failed to list enrollments: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list enrollments",
                )),
            )
        }
    }
}

pub async fn handle_list_by_student(
    service: &EnrollmentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_enrollments_by_student(student_id).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollments, "OK"))),
        Err(e) => {
            error!("Failed to list enrollments of student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list enrollments",
                )),
            )
        }
    }
}

pub async fn handle_list_by_class(
    service: &EnrollmentService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_enrollments_by_class(class_id).await {
        Ok(enrollments) => Ok(HttpResponse::Ok().json(ApiResponse::success(enrollments, "OK"))),
        Err(e) => {
            error!("Failed to list enrollments of class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list enrollments",
                )),
            )
        }
    }
}
