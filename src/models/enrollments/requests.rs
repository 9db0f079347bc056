use serde::Deserialize;

use super::entities::EnrollmentStatus;

// 选课请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEnrollmentRequest {
    pub student_id: i64,
    pub class_id: i64,
    pub status: Option<EnrollmentStatus>,
    pub note: Option<String>,
}

// 更新选课状态请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnrollmentStatusRequest {
    pub status: EnrollmentStatus,
}
