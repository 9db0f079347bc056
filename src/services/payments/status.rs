use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PaymentService;
use crate::models::payments::entities::PaymentStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_update_status(
    service: &PaymentService,
    request: &HttpRequest,
    id: i64,
    status: PaymentStatus,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_payment_status(id, status).await {
        Ok(Some(payment)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(payment, "Payment status updated")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PaymentNotFound,
            format!("Payment {id} not found"),
        ))),
        Err(e) => {
            error!("Failed to update payment {} status: {}", id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update payment status",
                )),
            )
        }
    }
}
