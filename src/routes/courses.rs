use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::middlewares;
use crate::models::courses::entities::CourseLevel;
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::models::users::entities::RoleName;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::CourseService;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub name: String,
}

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn list_active_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_active_courses(&req).await
}

pub async fn list_courses_by_level(
    req: HttpRequest,
    level: web::Path<String>,
) -> ActixResult<HttpResponse> {
    match level.into_inner().parse::<CourseLevel>() {
        Ok(level) => COURSE_SERVICE.list_by_level(&req, level).await,
        Err(msg) => {
            Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)))
        }
    }
}

pub async fn search_courses(
    req: HttpRequest,
    query: web::Query<SearchQuery>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .search_courses(&req, query.into_inner().name)
        .await
}

pub async fn get_course(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(&req, id.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(&req, course_data.into_inner())
        .await
}

pub async fn update_course(
    req: HttpRequest,
    id: web::Path<i64>,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_course(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, id.into_inner()).await
}

// 配置路由
//
// 课程目录对所有登录用户开放读取，写操作仅管理员可用。
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_courses))
                    .route(
                        web::post()
                            .to(create_course)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    ),
            )
            .route("/active", web::get().to(list_active_courses))
            .route("/level/{level}", web::get().to(list_courses_by_level))
            .route("/search", web::get().to(search_courses))
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(
                        web::put()
                            .to(update_course)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    )
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    ),
            ),
    );
}
