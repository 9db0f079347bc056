use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::StudentService;
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;

// 管理员建档时未指定密码使用的初始密码
const DEFAULT_STUDENT_PASSWORD: &str = "123456";

pub async fn handle_create(
    service: &StudentService,
    request: &HttpRequest,
    student: CreateStudentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 学号/用户名/邮箱唯一性预检查
    if let Some(ref code) = student.student_code {
        match storage.get_student_by_code(code).await {
            Ok(Some(_)) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentCodeAlreadyExists,
                    "Student code already exists",
                )));
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check student code: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create student",
                )));
            }
        }
    }

    match storage.get_user_by_username(&student.username).await {
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
                "Failed to create student",
            )));
        }
    }

    match storage.get_user_by_email(&student.email).await {
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
                "Failed to create student",
            )));
        }
    }

    // 未指定密码时使用初始密码
    let password = student
        .password
        .clone()
        .unwrap_or_else(|| DEFAULT_STUDENT_PASSWORD.to_string());

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash student password: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to create student",
            )));
        }
    };

    match storage.create_student(student, password_hash).await {
        Ok(student) => {
            info!("Student {} created successfully", student.student_code);
            Ok(HttpResponse::Created().json(ApiResponse::success(student, "Student created")))
        }
        Err(e) => {
            error!("Failed to create student: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create student",
                )),
            )
        }
    }
}
