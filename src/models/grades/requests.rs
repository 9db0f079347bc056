use serde::Deserialize;

// 成绩录入/更新请求
//
// 缺省字段表示“保持原值”，分数范围在路由边界校验（0.0 ~ 10.0）。
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertGradeRequest {
    pub enrollment_id: i64,
    pub attendance_score: Option<f64>,
    pub midterm_score: Option<f64>,
    pub final_score: Option<f64>,
    pub comment: Option<String>,
}
