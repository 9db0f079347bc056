use serde::Deserialize;

// 创建教师请求：同时创建教师账号（user）与教职（teacher）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeacherRequest {
    pub username: String,
    pub email: String,
    pub password: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    // 未提供时自动生成 GV 编号
    pub employee_code: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
}

// 更新教师请求，所有字段可选
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeacherRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
}
