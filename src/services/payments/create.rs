use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::PaymentService;
use crate::errors::SMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::payments::requests::CreatePaymentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_amount;

pub async fn handle_create(
    service: &PaymentService,
    request: &HttpRequest,
    payment: CreatePaymentRequest,
) -> ActixResult<HttpResponse> {
    let created_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 金额必须为正
    if let Err(msg) = validate_amount(payment.amount) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PaymentAmountInvalid,
            msg,
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_payment(payment, created_by).await {
        Ok(payment) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(payment, "Payment created")))
        }
        Err(SMSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::EnrollmentNotFound, msg))),
        Err(e) => {
            error!("Failed to create payment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create payment",
                )),
            )
        }
    }
}
