use serde::{Deserialize, Serialize};

// 教师实体（含关联用户的账号信息）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub employee_code: String,
    pub department: Option<String>,
    pub specialization: Option<String>,
    pub hire_date: Option<chrono::NaiveDate>,
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
