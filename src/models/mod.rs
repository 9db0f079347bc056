pub mod attendance;
pub mod auth;
pub mod classes;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod grades;
pub mod payments;
pub mod students;
pub mod teachers;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

// 记录程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
