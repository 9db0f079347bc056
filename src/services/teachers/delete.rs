use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &TeacherService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_teacher(id).await {
        Ok(true) => {
            info!("Teacher {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Teacher deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            format!("Teacher {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to delete teacher {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete teacher",
                )),
            )
        }
    }
}
