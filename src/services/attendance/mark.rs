use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::errors::SMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::MarkAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_mark(
    service: &AttendanceService,
    request: &HttpRequest,
    attendance: MarkAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let marked_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.mark_attendance(attendance, marked_by).await {
        Ok(attendance) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(attendance, "Attendance marked")))
        }
        Err(SMSystemError::DuplicateResource(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::AttendanceAlreadyMarked, msg),
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
            error!("Failed to mark attendance: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to mark attendance",
                )),
            )
        }
    }
}
