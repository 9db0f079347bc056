use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ClassService;
use crate::models::classes::entities::ClassStatus;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_list(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "OK"))),
        Err(e) => {
            error!("Failed to list classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}

pub async fn handle_list_available(
    service: &ClassService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_available_classes().await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "OK"))),
        Err(e) => {
            error!("Failed to list available classes: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}

pub async fn handle_list_by_course(
    service: &ClassService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes_by_course(course_id).await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "OK"))),
        Err(e) => {
            error!("Failed to list classes of course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}

pub async fn handle_list_by_teacher(
    service: &ClassService,
    request: &HttpRequest,
    teacher_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes_by_teacher(teacher_id).await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "OK"))),
        Err(e) => {
            error!("Failed to list classes of teacher {}: {}", teacher_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}

pub async fn handle_list_by_status(
    service: &ClassService,
    request: &HttpRequest,
    status: ClassStatus,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classes_by_status(status).await {
        Ok(classes) => Ok(HttpResponse::Ok().json(ApiResponse::success(classes, "OK"))),
        Err(e) => {
            error!("Failed to list classes by status: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list classes",
                )),
            )
        }
    }
}
