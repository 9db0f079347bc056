use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::middlewares;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::models::users::entities::RoleName;
use crate::services::StudentService;

// 懒加载的全局 StudentService 实例
static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

pub async fn list_students(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(&req).await
}

pub async fn search_students(
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .search_students(&req, query.into_inner().name)
        .await
}

pub async fn get_student(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(&req, id.into_inner()).await
}

pub async fn get_student_by_code(
    req: HttpRequest,
    code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .get_student_by_code(&req, code.into_inner())
        .await
}

pub async fn list_students_by_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .list_by_class(&req, class_id.into_inner())
        .await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .create_student(&req, student_data.into_inner())
        .await
}

pub async fn update_student(
    req: HttpRequest,
    id: web::Path<i64>,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(&req, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_student(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(&req, id.into_inner()).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::get()
                        .to(list_students)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                )
                .route(
                    web::post()
                        .to(create_student)
                        // 学生建档仅管理员可用
                        .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                ),
            )
            .service(
                web::resource("/search").route(
                    web::get()
                        .to(search_students)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/code/{code}").route(
                    web::get()
                        .to(get_student_by_code)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/class/{class_id}").route(
                    web::get()
                        .to(list_students_by_class)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::get()
                            .to(get_student)
                            .wrap(middlewares::RequireRole::new_any(RoleName::all_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_student)
                            // 学生可以修改自己的档案，管理员可以修改任意学生
                            .wrap(middlewares::RequireRole::new_any(
                                RoleName::enrollment_roles(),
                            )),
                    )
                    .route(
                        web::delete()
                            .to(delete_student)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    ),
            ),
    );
}
