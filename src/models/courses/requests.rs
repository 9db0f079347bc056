use serde::Deserialize;

use super::entities::CourseLevel;

// 创建课程请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCourseRequest {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
    pub level: Option<CourseLevel>,
    pub thumbnail_url: Option<String>,
}

// 更新课程请求，所有字段可选
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCourseRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub duration: Option<i32>,
    pub level: Option<CourseLevel>,
    pub thumbnail_url: Option<String>,
    pub is_active: Option<bool>,
}
