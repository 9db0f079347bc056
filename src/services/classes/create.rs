use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_create(
    service: &ClassService,
    request: &HttpRequest,
    class: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 班级编号唯一性预检查
    match storage.get_class_by_code(&class.code).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ClassCodeAlreadyExists,
                "Class code already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check class code: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create class",
            )));
        }
    }

    // 课程必须存在
    match storage.get_course_by_id(class.course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                format!("Course {} not found", class.course_id),
            )));
        }
        Err(e) => {
            error!("Failed to check course: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create class",
            )));
        }
    }

    // 指定了教师时教师必须存在
    if let Some(teacher_id) = class.teacher_id {
        match storage.get_teacher_by_id(teacher_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    format!("Teacher {teacher_id} not found"),
                )));
            }
            Err(e) => {
                error!("Failed to check teacher: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create class",
                )));
            }
        }
    }

    match storage.create_class(class).await {
        Ok(class) => {
            info!("Class {} created successfully", class.code);
            Ok(HttpResponse::Created().json(ApiResponse::success(class, "Class created")))
        }
        Err(e) => {
            error!("Failed to create class: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create class",
                )),
            )
        }
    }
}
