use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{MarkAttendanceRequest, UpdateAttendanceRequest};
use crate::models::users::entities::RoleName;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance_by_class(
    req: HttpRequest,
    class_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_by_class(&req, class_id.into_inner())
        .await
}

pub async fn list_attendance_by_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_by_student(&req, student_id.into_inner())
        .await
}

pub async fn list_attendance_by_class_and_date(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
) -> ActixResult<HttpResponse> {
    let (class_id, date) = path.into_inner();
    match chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(session_date) => {
            ATTENDANCE_SERVICE
                .list_by_class_and_date(&req, class_id, session_date)
                .await
        }
        Err(_) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            format!("Invalid date: {date}, expected YYYY-MM-DD"),
        ))),
    }
}

pub async fn mark_attendance(
    req: HttpRequest,
    attendance_data: web::Json<MarkAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .mark_attendance(&req, attendance_data.into_inner())
        .await
}

pub async fn update_attendance(
    req: HttpRequest,
    id: web::Path<i64>,
    update_data: web::Json<UpdateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .update_attendance(&req, id.into_inner(), update_data.into_inner())
        .await
}

pub async fn delete_attendance(req: HttpRequest, id: web::Path<i64>) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .delete_attendance(&req, id.into_inner())
        .await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(mark_attendance)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/class/{class_id}/date/{date}").route(
                    web::get()
                        .to(list_attendance_by_class_and_date)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/class/{class_id}").route(
                    web::get()
                        .to(list_attendance_by_class)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            )
            .service(
                web::resource("/student/{student_id}").route(
                    web::get()
                        .to(list_attendance_by_student)
                        .wrap(middlewares::RequireRole::new_any(RoleName::all_roles())),
                ),
            )
            .service(
                web::resource("/{id}")
                    .route(
                        web::put()
                            .to(update_attendance)
                            .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_attendance)
                            .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                    ),
            ),
    );
}
