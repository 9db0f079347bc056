use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::warn;

use crate::models::users::entities::RoleName;
use crate::models::users::requests::CreateUserRequest;
use crate::models::{ApiResponse, ErrorCode, auth::RegisterRequest};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 检查用户名是否已存在
    if let Err(response) = check_username_exists(&storage, &register_request.username).await {
        return Ok(response);
    }

    // 2. 检查邮箱是否已存在
    if let Err(response) = check_email_exists(&storage, &register_request.email).await {
        return Ok(response);
    }

    // 验证用户名合法性
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 验证邮箱
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 验证密码强度
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::PasswordPolicyViolation,
            msg,
        )));
    }

    // 3. 解析注册角色，未提供时默认 student
    let roles = resolve_roles(register_request.roles.as_deref());

    // 4. 哈希密码
    match hash_password(&register_request.password) {
        Ok(password_hash) => {
            let create_request = CreateUserRequest {
                username: register_request.username,
                email: register_request.email,
                password: password_hash,
                full_name: register_request.full_name,
                phone: register_request.phone,
                avatar_url: None,
                roles: Some(roles),
            };

            // 5. 创建用户
            match storage.create_user(create_request).await {
                Ok(user) => Ok(HttpResponse::Created()
                    .json(ApiResponse::success(user, "User registered successfully"))),
                Err(e) => Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::RegisterFailed,
                        format!("Register failed: {e}"),
                    )),
                ),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

/// 将注册请求中的角色字符串解析为角色集合
///
/// 未提供或为空时默认 student；无法识别的角色名同样回退为 student，
/// 与原始行为保持一致（是否应当改为报错见 DESIGN.md 的开放问题）。
fn resolve_roles(requested: Option<&[String]>) -> Vec<RoleName> {
    let requested = match requested {
        Some(roles) if !roles.is_empty() => roles,
        _ => return vec![RoleName::Student],
    };

    let mut roles = Vec::new();
    for raw in requested {
        let role = match raw.to_lowercase().parse::<RoleName>() {
            Ok(role) => role,
            Err(_) => {
                warn!("Unrecognized role '{}' in register request, falling back to student", raw);
                RoleName::Student
            }
        };
        if !roles.contains(&role) {
            roles.push(role);
        }
    }
    roles
}

async fn check_username_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    username: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_username(username).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserNameAlreadyExists,
            "Username already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

async fn check_email_exists(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    email: &str,
) -> Result<(), HttpResponse> {
    match storage.get_user_by_email(email).await {
        Ok(Some(_)) => Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::UserEmailAlreadyExists,
            "Email already exists",
        ))),
        Ok(None) => Ok(()),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Register failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_roles_defaults_to_student() {
        assert_eq!(resolve_roles(None), vec![RoleName::Student]);
        assert_eq!(resolve_roles(Some(&[])), vec![RoleName::Student]);
    }

    #[test]
    fn test_resolve_roles_known_roles() {
        let roles = resolve_roles(Some(&["admin".to_string(), "teacher".to_string()]));
        assert_eq!(roles, vec![RoleName::Admin, RoleName::Teacher]);
    }

    #[test]
    fn test_resolve_roles_unknown_falls_back_to_student() {
        let roles = resolve_roles(Some(&["principal".to_string()]));
        assert_eq!(roles, vec![RoleName::Student]);
    }

    #[test]
    fn test_resolve_roles_deduplicates() {
        let roles = resolve_roles(Some(&["student".to_string(), "unknown".to_string()]));
        assert_eq!(roles, vec![RoleName::Student]);
    }
}
