use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::DashboardService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_admin_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.admin_dashboard().await {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "OK"))),
        Err(e) => {
            error!("Failed to build admin dashboard: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to build dashboard",
                )),
            )
        }
    }
}

pub async fn handle_teacher_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.teacher_dashboard(teacher_id).await {
        Ok(Some(stats)) => Ok(HttpResponse::Ok().json(ApiResponse::success(stats, "OK"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            format!("Teacher {teacher_id} not found"),
        ))),
        Err(e) => {
            error!("Failed to build teacher {} dashboard: {}", teacher_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to build dashboard",
                )),
            )
        }
    }
}
