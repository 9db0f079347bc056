use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::EnrollmentService;
use crate::errors::SMSystemError;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_create(
    service: &EnrollmentService,
    request: &HttpRequest,
    enrollment: CreateEnrollmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.create_enrollment(enrollment).await {
        Ok(enrollment) => {
            info!(
                "Student {} enrolled in class {} successfully",
                enrollment.student_id, enrollment.class_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(enrollment, "Enrolled successfully")))
        }
        Err(SMSystemError::DuplicateResource(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::EnrollmentAlreadyExists, msg),
        )),
        Err(SMSystemError::NotFound(msg)) => {
            let code = if msg.contains("Student") {
                ErrorCode::StudentNotFound
            } else {
                ErrorCode::ClassNotFound
            };
            Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(code, msg)))
        }
        Err(e) => {
            error!("Failed to create enrollment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create enrollment",
                )),
            )
        }
    }
}
