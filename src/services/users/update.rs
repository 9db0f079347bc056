use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;

pub async fn handle_update(
    service: &UserService,
    request: &HttpRequest,
    id: i64,
    mut update: UpdateUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 更新密码时先哈希
    if let Some(ref password) = update.password {
        match hash_password(password) {
            Ok(hash) => update.password = Some(hash),
            Err(e) => {
                error!("Failed to hash password: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update user",
                )));
            }
        }
    }

    match storage.update_user(id, update).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User updated"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            format!("User {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to update user {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update user",
                )),
            )
        }
    }
}
