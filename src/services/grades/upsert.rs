use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::errors::SMSystemError;
use crate::middlewares::RequireJWT;
use crate::models::grades::requests::UpsertGradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_score;

pub async fn handle_upsert(
    service: &GradeService,
    request: &HttpRequest,
    grade: UpsertGradeRequest,
) -> ActixResult<HttpResponse> {
    let graded_by = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    // 分数范围校验
    for score in [
        grade.attendance_score,
        grade.midterm_score,
        grade.final_score,
    ]
    .into_iter()
    .flatten()
    {
        if let Err(msg) = validate_score(score) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::GradeScoreInvalid, msg)));
        }
    }

    let storage = service.get_storage(request);

    match storage.upsert_grade(grade, graded_by).await {
        Ok(grade) => Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade saved"))),
        Err(SMSystemError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::EnrollmentNotFound, msg))),
        Err(e) => {
            error!("Failed to upsert grade: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to save grade",
                )),
            )
        }
    }
}
