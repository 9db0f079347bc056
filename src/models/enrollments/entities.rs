use serde::{Deserialize, Serialize};

// 选课状态
//
// 状态之间允许任意流转，只有进入 cancelled 的那条边会释放班级名额。
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl<'de> Deserialize<'de> for EnrollmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EnrollmentStatus>()
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentStatus::Pending => write!(f, "pending"),
            EnrollmentStatus::Confirmed => write!(f, "confirmed"),
            EnrollmentStatus::Completed => write!(f, "completed"),
            EnrollmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for EnrollmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EnrollmentStatus::Pending),
            "confirmed" => Ok(EnrollmentStatus::Confirmed),
            "completed" => Ok(EnrollmentStatus::Completed),
            "cancelled" => Ok(EnrollmentStatus::Cancelled),
            _ => Err(format!(
                "无效的选课状态: '{s}'. 支持: pending, confirmed, completed, cancelled"
            )),
        }
    }
}

// 选课记录（含学生、班级、课程的展示信息）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i64,
    pub student_id: i64,
    pub student_code: String,
    pub student_name: String,
    pub class_id: i64,
    pub class_code: String,
    pub class_name: String,
    pub course_name: Option<String>,
    pub enrollment_date: chrono::DateTime<chrono::Utc>,
    pub status: EnrollmentStatus,
    pub note: Option<String>,
}
