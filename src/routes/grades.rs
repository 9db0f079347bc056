use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::grades::requests::UpsertGradeRequest;
use crate::models::users::entities::RoleName;
use crate::services::GradeService;

// 懒加载的全局 GradeService 实例
static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn upsert_grade(
    req: HttpRequest,
    grade_data: web::Json<UpsertGradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.upsert_grade(&req, grade_data.into_inner()).await
}

pub async fn list_grades_by_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .list_by_student(&req, student_id.into_inner())
        .await
}

pub async fn list_grades_by_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_by_class(&req, class_id.into_inner()).await
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(upsert_grade)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/student/{student_id}").route(
                    web::get()
                        .to(list_grades_by_student)
                        .wrap(middlewares::RequireRole::new_any(RoleName::all_roles())),
                ),
            )
            .service(
                web::resource("/class/{class_id}").route(
                    web::get()
                        .to(list_grades_by_class)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            ),
    );
}
