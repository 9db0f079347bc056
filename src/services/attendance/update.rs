use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::attendance::requests::UpdateAttendanceRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_update(
    service: &AttendanceService,
    request: &HttpRequest,
    id: i64,
    update: UpdateAttendanceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_attendance(id, update).await {
        Ok(Some(attendance)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(attendance, "Attendance updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            format!("Attendance {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to update attendance {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update attendance",
                )),
            )
        }
    }
}
