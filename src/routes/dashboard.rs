use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::RoleName;
use crate::services::DashboardService;

// 懒加载的全局 DashboardService 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

pub async fn admin_dashboard(req: HttpRequest) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE.admin_dashboard(&req).await
}

pub async fn teacher_dashboard(
    req: HttpRequest,
    teacher_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE
        .teacher_dashboard(&req, teacher_id.into_inner())
        .await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/admin").route(
                    web::get()
                        .to(admin_dashboard)
                        .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                ),
            )
            .service(
                web::resource("/teacher/{teacher_id}").route(
                    web::get()
                        .to(teacher_dashboard)
                        .wrap(middlewares::RequireRole::new_any(RoleName::staff_roles())),
                ),
            ),
    );
}
