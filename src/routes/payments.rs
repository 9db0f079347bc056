use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::payments::requests::{CreatePaymentRequest, UpdatePaymentStatusRequest};
use crate::models::users::entities::RoleName;
use crate::services::PaymentService;

// 懒加载的全局 PaymentService 实例
static PAYMENT_SERVICE: Lazy<PaymentService> = Lazy::new(PaymentService::new_lazy);

pub async fn create_payment(
    req: HttpRequest,
    payment_data: web::Json<CreatePaymentRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .create_payment(&req, payment_data.into_inner())
        .await
}

pub async fn update_payment_status(
    req: HttpRequest,
    id: web::Path<i64>,
    status_data: web::Json<UpdatePaymentStatusRequest>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .update_status(&req, id.into_inner(), status_data.into_inner().status)
        .await
}

pub async fn list_payments_by_enrollment(
    req: HttpRequest,
    enrollment_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .list_by_enrollment(&req, enrollment_id.into_inner())
        .await
}

pub async fn list_payments_by_student(
    req: HttpRequest,
    student_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    PAYMENT_SERVICE
        .list_by_student(&req, student_id.into_inner())
        .await
}

// 配置路由
pub fn configure_payments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/payments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("").route(
                    web::post()
                        .to(create_payment)
                        .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                ),
            )
            .service(
                web::resource("/enrollment/{enrollment_id}").route(
                    web::get()
                        .to(list_payments_by_enrollment)
                        // 学生查询自己的缴费记录，管理员可以查询全部
                        .wrap(middlewares::RequireRole::new_any(
                            RoleName::enrollment_roles(),
                        )),
                ),
            )
            .service(
                web::resource("/student/{student_id}").route(
                    web::get()
                        .to(list_payments_by_student)
                        .wrap(middlewares::RequireRole::new_any(
                            RoleName::enrollment_roles(),
                        )),
                ),
            )
            .service(
                web::resource("/{id}/status").route(
                    web::patch()
                        .to(update_payment_status)
                        .wrap(middlewares::RequireRole::new(&RoleName::Admin)),
                ),
            ),
    );
}
