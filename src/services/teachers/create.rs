use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::TeacherService;
use crate::models::teachers::requests::CreateTeacherRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;

// 管理员建档时未指定密码使用的初始密码
const DEFAULT_TEACHER_PASSWORD: &str = "123456";

pub async fn handle_create(
    service: &TeacherService,
    request: &HttpRequest,
    teacher: CreateTeacherRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 工号/用户名/邮箱唯一性预检查
    if let Some(ref code) = teacher.employee_code {
        match storage.get_teacher_by_code(code).await {
            Ok(Some(_)) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::TeacherCodeAlreadyExists,
                    "Employee code already exists",
                )));
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check employee code: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create teacher",
                )));
            }
        }
    }

    match storage.get_user_by_username(&teacher.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserNameAlreadyExists,
                "Username already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check username: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create teacher",
            )));
        }
    }

    match storage.get_user_by_email(&teacher.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Failed to check email: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create teacher",
            )));
        }
    }

    let password = teacher
        .password
        .clone()
        .unwrap_or_else(|| DEFAULT_TEACHER_PASSWORD.to_string());

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash teacher password: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create teacher",
            )));
        }
    };

    match storage.create_teacher(teacher, password_hash).await {
        Ok(teacher) => {
            info!("Teacher {} created successfully", teacher.employee_code);
            Ok(HttpResponse::Created().json(ApiResponse::success(teacher, "Teacher created")))
        }
        Err(e) => {
            error!("Failed to create teacher: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create teacher",
                )),
            )
        }
    }
}
