use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::errors::SMSystemError;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &EnrollmentService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_enrollment(id).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Enrollment deleted"))),
        Err(SMSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::EnrollmentNotFound, msg))),
        Err(e) => {
            error!("Failed to delete enrollment {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete enrollment",
                )),
            )
        }
    }
}
