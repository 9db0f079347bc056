use serde::{Deserialize, Serialize};

// 考勤状态
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AttendanceStatus>()
            .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "present"),
            AttendanceStatus::Absent => write!(f, "absent"),
            AttendanceStatus::Late => write!(f, "late"),
            AttendanceStatus::Excused => write!(f, "excused"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "excused" => Ok(AttendanceStatus::Excused),
            _ => Err(format!(
                "无效的考勤状态: '{s}'. 支持: present, absent, late, excused"
            )),
        }
    }
}

// 考勤记录（含学生与班级的展示信息）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub class_id: i64,
    pub class_name: String,
    pub student_id: i64,
    pub student_code: String,
    pub student_name: String,
    pub session_date: chrono::NaiveDate,
    pub session_number: Option<i32>,
    pub status: AttendanceStatus,
    pub note: Option<String>,
    pub marked_by_name: Option<String>,
    pub marked_at: chrono::DateTime<chrono::Utc>,
}
