use serde::{Deserialize, Serialize};

// 管理员总览
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboardResponse {
    pub total_students: i64,
    pub total_teachers: i64,
    pub total_courses: i64,
    pub total_classes: i64,
    pub active_enrollments: i64,
    pub total_revenue: f64,
}

// 教师总览
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherDashboardResponse {
    pub teacher_id: i64,
    pub total_classes: i64,
    pub total_students: i64,
}
