use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::errors::SMSystemError;
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_update_status(
    service: &EnrollmentService,
    request: &HttpRequest,
    id: i64,
    status: EnrollmentStatus,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_enrollment_status(id, status).await {
        Ok(enrollment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            enrollment,
            "Enrollment status updated",
        ))),
        Err(SMSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::EnrollmentNotFound, msg))),
        Err(e) => {
            error!("Failed to update enrollment {} status: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update enrollment status",
                )),
            )
        }
    }
}
