use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::users::entities::RoleName;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(users, "OK"))),
        Err(e) => {
            error!("Failed to list users: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list users",
                )),
            )
        }
    }
}

pub async fn handle_list_by_role(
    service: &UserService,
    request: &HttpRequest,
    role: RoleName,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_by_role(role).await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(users, "OK"))),
        Err(e) => {
            error!("Failed to list users by role: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list users",
                )),
            )
        }
    }
}
