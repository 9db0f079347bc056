use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, UpdateEnrollmentStatusRequest,
};
use crate::models::users::entities::RoleName;
use crate::services::EnrollmentService;

// 懒加载的全局 EnrollmentService 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn list_enrollments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.list_enrollments(&req).await
}

pub async fn get_enrollment(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.get_enrollment(&req, id.into_inner()).await
}

pub async fn list_enrollments_by_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_by_student(&req, student_id.into_inner())
        .await
}

pub async fn list_enrollments_by_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_by_class(&req, class_id.into_inner())
        .await
}

pub async fn create_enrollment(
    req: HttpRequest,
    enrollment_data: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_enrollment(&req, enrollment_data.into_inner())
        .await
}

pub async fn update_enrollment_status(
    req: HttpRequest,
    id: web::Path<i64>,
    status_data: web::Json<UpdateEnrollmentStatusRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_status(&req, id.into_inner(), status_data.into_inner().status)
        .await
}

pub async fn delete_enrollment(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .delete_enrollment(&req, id.into_inner())
        .await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::get()
                            .to(list_enrollments)
                            .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                    )
                    .route(
                        web::post()
                            .to(create_enrollment)
                            // 学生自助选课，管理员可代办
                            .wrap(middlewares::RequireRole::new_any(
                                RoleName::enrollment_roles(),
                            )),
                    ),
            )
            .service(
                web::resource("/student/{student_id}").route(
                    web::get()
                        .to(list_enrollments_by_student)
                        .wrap(middlewares::RequireRole::new_any(RoleName::all_roles())),
                ),
            )
            .service(
                web::resource("/class/{class_id}").route(
                    web::get()
                        .to(list_enrollments_by_class)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}/status").route(
                    web::patch()
                        .to(update_enrollment_status)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_enrollment)
                            .wrap(middlewares::RequireRole::new_any(RoleName::all_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_enrollment)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    ),
            ),
    );
}
