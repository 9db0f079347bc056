use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GradeService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list_by_student(
    service: &GradeService,
    request: &HttpRequest,
    student_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades_by_student(student_id).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "OK"))),
        Err(e) => {
            error!("Failed to list grades of student {}: {}", student_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list grades",
                )),
            )
        }
    }
}

pub async fn handle_list_by_class(
    service: &GradeService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_grades_by_class(class_id).await {
        Ok(grades) => Ok(HttpResponse::Ok().json(ApiResponse::success(grades, "OK"))),
        Err(e) => {
            error!("Failed to list grades of class {}: {}", class_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list grades",
                )),
            )
        }
    }
}
