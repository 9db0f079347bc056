use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list_by_class(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attendance_by_class(class_id).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records, "OK"))),
        Err(e) => {
            error!("Failed to list attendance of class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list attendance",
                )),
            )
        }
    }
}

pub async fn handle_list_by_student(
    service: &AttendanceService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attendance_by_student(student_id).await {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records, "OK"))),
        Err(e) => {
            error!("Failed to list attendance of student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list attendance",
                )),
            )
        }
    }
}

pub async fn handle_list_by_class_and_date(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    session_date: chrono::NaiveDate,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_attendance_by_class_and_date(class_id, session_date)
        .await
    {
        Ok(records) => Ok(HttpResponse::Ok().json(ApiResponse::success(records, "OK"))),
        Err(e) => {
            error!(
                "Failed to list attendance of class {} on {}: {}",
                class_id, session_date, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list attendance",
                )),
            )
        }
    }
}
