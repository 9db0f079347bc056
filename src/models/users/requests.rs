use serde::Deserialize;

use super::entities::RoleName;

// 创建用户请求（管理员接口）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub roles: Option<Vec<RoleName>>,
}

// 更新用户请求，所有字段可选
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub roles: Option<Vec<RoleName>>,
}
