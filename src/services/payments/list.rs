use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PaymentService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list_by_enrollment(
    service: &PaymentService,
    request: &HttpRequest,
    enrollment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_payments_by_enrollment(enrollment_id).await {
        Ok(payments) => Ok(HttpResponse::Ok().json(ApiResponse::success(payments, "OK"))),
        Err(e) => {
            error!(
                "Failed to list payments of enrollment {}: {}",
                enrollment_id, e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list payments",
                )),
            )
        }
    }
}

pub async fn handle_list_by_student(
    service: &PaymentService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_payments_by_student(student_id).await {
        Ok(payments) => Ok(HttpResponse::Ok().json(ApiResponse::success(payments, "OK"))),
        Err(e) => {
            error!("Failed to list payments of student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list payments",
                )),
            )
        }
    }
}
