use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::entities::ClassStatus;
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::RoleName;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ClassService;

// 懒加载的全局 ClassService 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

pub async fn list_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req).await
}

pub async fn list_available_classes(req: HttpRequest) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_available_classes(&req).await
}

pub async fn list_classes_by_course(
    req: HttpRequest,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .list_by_course(&req, course_id.into_inner())
        .await
}

pub async fn list_classes_by_teacher(
    req: HttpRequest,
    teacher_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .list_by_teacher(&req, teacher_id.into_inner())
        .await
}

pub async fn list_classes_by_status(
    req: HttpRequest,
    status: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match status.into_inner().parse::<ClassStatus>() {
        Ok(status) => CLASS_SERVICE.list_by_status(&req, status).await,
        Err(msg) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)))
        }
    }
}

pub async fn get_class(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, id.into_inner()).await
}

pub async fn get_class_by_code(
    req: HttpRequest,
    code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .get_class_by_code(&req, code.into_inner())
        .await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn update_class(
    req: HttpRequest,
    id: web::Path<i64>,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    .route(
                        web::post()
                            .to(create_class)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    ),
            )
            .route("/available", web::get().to(list_available_classes))
            .route("/course/{course_id}", web::get().to(list_classes_by_course))
            .service(
                web::resource("/teacher/{teacher_id}").route(
                    web::get()
                        .to(list_classes_by_teacher)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .route("/status/{status}", web::get().to(list_classes_by_status))
            .route("/code/{code}", web::get().to(get_class_by_code))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_class))
                    .route(
                        web::put()
                            .to(update_class)
                            .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    ),
            ),
    );
}
