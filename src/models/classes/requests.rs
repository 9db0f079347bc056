use serde::Deserialize;

use super::entities::ClassStatus;

// 创建班级请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassRequest {
    pub code: String,
    pub name: String,
    pub course_id: i64,
    pub teacher_id: Option<i64>,
    pub max_students: Option<i32>,
    pub room: Option<String>,
    pub schedule: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub status: Option<ClassStatus>,
}

// 更新班级请求，所有字段可选
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClassRequest {
    pub name: Option<String>,
    pub teacher_id: Option<i64>,
    pub max_students: Option<i32>,
    pub room: Option<String>,
    pub schedule: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub status: Option<ClassStatus>,
}
