use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::TeacherService;
use crate::models::teachers::requests::UpdateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_update(
    service: &TeacherService,
    request: &HttpRequest,
    id: i64,
    update: UpdateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_teacher_by_id(id).await {
        Ok(Some(teacher)) => teacher,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeacherNotFound,
                format!("Teacher {id} not found"),
            )));
        }
        Err(e) => {
            error!("Failed to get teacher {}: {}", id, e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to update teacher",
            )));
        }
    };

    // 换绑邮箱前检查唯一性
    if let Some(ref email) = update.email
        && email != &existing.email
    {
        match storage.get_user_by_email(email).await {
            Ok(Some(_)) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserEmailAlreadyExists,
                    "Email already exists",
                )));
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check email: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update teacher",
                )));
            }
        }
    }

    match storage.update_teacher(id, update).await {
        Ok(Some(teacher)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(teacher, "Teacher updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeacherNotFound,
            format!("Teacher {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to update teacher {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update teacher",
                )),
            )
        }
    }
}
