use serde::Deserialize;

// 登录请求
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

// 注册请求
//
// roles 接受原始字符串：无法识别的角色名回退为 student（而不是报错），
// 与未传角色时的默认行为保持一致。
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub roles: Option<Vec<String>>,
}
