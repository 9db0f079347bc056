use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::UserService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_set_active(
    service: &UserService,
    request: &HttpRequest,
    id: i64,
    active: bool,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.set_user_active(id, active).await {
        Ok(Some(user)) => {
            info!(
                "User {} {}",
                id,
                if active { "activated" } else { "deactivated" }
            );
            let message = if active {
                "User activated"
            } else {
                "User deactivated"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(user, message)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            format!("User {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to set user {} active={}: {}", id, active, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update user status",
                )),
            )
        }
    }
}
