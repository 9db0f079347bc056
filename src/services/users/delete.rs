use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_delete(
    service: &UserService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_user(id).await {
        Ok(true) => {
            info!("User {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("User deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            format!("User {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to delete user {}: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to delete user",
                )),
            )
        }
    }
}
