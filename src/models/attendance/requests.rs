use serde::Deserialize;

use super::entities::AttendanceStatus;

// 考勤登记请求
#[derive(Debug, Clone, Deserialize)]
pub struct MarkAttendanceRequest {
    pub class_id: i64,
    pub student_id: i64,
    pub session_date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub session_number: Option<i32>,
    pub note: Option<String>,
}

// 考勤更新请求，仅允许修改状态与备注
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub status: Option<AttendanceStatus>,
    pub note: Option<String>,
}
