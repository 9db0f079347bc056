use serde::{Deserialize, Serialize};

// 班级状态
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClassStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl<'de> Deserialize<'de> for ClassStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<ClassStatus>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassStatus::Open => write!(f, "open"),
            ClassStatus::InProgress => write!(f, "in_progress"),
            ClassStatus::Completed => write!(f, "completed"),
            ClassStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(ClassStatus::Open),
            "in_progress" => Ok(ClassStatus::InProgress),
            "completed" => Ok(ClassStatus::Completed),
            "cancelled" => Ok(ClassStatus::Cancelled),
            _ => Err(format!(
                "无效的班级状态: '{s}'. 支持: open, in_progress, completed, cancelled"
            )),
        }
    }
}

// 班级实体（课程开班）
//
// current_students 是非取消选课数的冗余计数，由选课事务增量维护。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub course_id: i64,
    pub course_name: Option<String>,
    pub teacher_id: Option<i64>,
    pub teacher_name: Option<String>,
    pub max_students: i32,
    pub current_students: i32,
    pub room: Option<String>,
    pub schedule: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub status: ClassStatus,
    pub is_registration_open: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
