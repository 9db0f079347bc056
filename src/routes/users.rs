use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::RoleName;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.list_users(&req).await
}

pub async fn list_users_by_role(
    req: HttpRequest,
    role: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match role.into_inner().parse::<RoleName>() {
        Ok(role) => USER_SERVICE.list_by_role(&req, role).await,
        Err(msg) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)))
        }
    }
}

pub async fn get_user(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_user(&req, id.into_inner()).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(&req, user_data.into_inner()).await
}

pub async fn update_user(
    req: HttpRequest,
    id: web::Path<i64>,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .update_user(&req, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_user(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    USER_SERVICE.delete_user(&req, id.into_inner()).await
}

pub async fn activate_user(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    USER_SERVICE.activate_user(&req, id.into_inner()).await
}

pub async fn deactivate_user(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    USER_SERVICE.deactivate_user(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                // 教师可以按角色检索用户，其余操作仅管理员可用
                web::resource("/role/{role}").route(
                    web::get()
                        .to(list_users_by_role)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new(&RoleName::Admin))
                    .route("", web::get().to(list_users))
                    .route("", web::post().to(create_user))
                    .route("/{id}", web::get().to(get_user))
                    .route("/{id}", web::put().to(update_user))
                    .route("/{id}", web::delete().to(delete_user))
                    .route("/{id}/activate", web::put().to(activate_user))
                    .route("/{id}/deactivate", web::put().to(deactivate_user)),
            ),
    );
}
