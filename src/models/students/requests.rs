use serde::Deserialize;

// 创建学生请求：同时创建学生账号（user）与学籍（student）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub username: String,
    pub email: String,
    // 未提供时使用默认初始密码
    pub password: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    // 未提供时自动生成 SV 编号
    pub student_code: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub enrollment_date: Option<chrono::NaiveDate>,
}

// 更新学生请求，所有字段可选
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudentRequest {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<chrono::NaiveDate>,
    pub gender: Option<String>,
    pub address: Option<String>,
}
