use serde::{Deserialize, Serialize};

// 总评权重：平时 10% + 期中 30% + 期末 60%
pub const ATTENDANCE_WEIGHT: f64 = 0.1;
pub const MIDTERM_WEIGHT: f64 = 0.3;
pub const FINAL_WEIGHT: f64 = 0.6;

/// 计算总评成绩
///
/// 三项分数齐全时返回加权总分，任一项缺失时返回 None。
pub fn compute_total_score(
    attendance_score: Option<f64>,
    midterm_score: Option<f64>,
    final_score: Option<f64>,
) -> Option<f64> {
    match (attendance_score, midterm_score, final_score) {
        (Some(attendance), Some(midterm), Some(r#final)) => Some(
            attendance * ATTENDANCE_WEIGHT + midterm * MIDTERM_WEIGHT + r#final * FINAL_WEIGHT,
        ),
        _ => None,
    }
}

// 成绩记录（含选课、学生、班级的展示信息）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub enrollment_id: i64,
    pub student_id: i64,
    pub student_code: String,
    pub student_name: String,
    pub class_id: i64,
    pub class_name: String,
    pub attendance_score: Option<f64>,
    pub midterm_score: Option<f64>,
    pub final_score: Option<f64>,
    pub total_score: Option<f64>,
    pub comment: Option<String>,
    pub graded_by_name: Option<String>,
    pub graded_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_score_weighted_sum() {
        let total = compute_total_score(Some(8.0), Some(7.0), Some(9.0)).unwrap();
        assert!((total - 8.3).abs() < 1e-9);
    }

    #[test]
    fn test_total_score_requires_all_components() {
        assert!(compute_total_score(None, Some(7.0), Some(9.0)).is_none());
        assert!(compute_total_score(Some(8.0), None, Some(9.0)).is_none());
        assert!(compute_total_score(Some(8.0), Some(7.0), None).is_none());
        assert!(compute_total_score(None, None, None).is_none());
    }

    #[test]
    fn test_total_score_bounds() {
        let zero = compute_total_score(Some(0.0), Some(0.0), Some(0.0)).unwrap();
        assert!((zero - 0.0).abs() < 1e-9);
        let full = compute_total_score(Some(10.0), Some(10.0), Some(10.0)).unwrap();
        assert!((full - 10.0).abs() < 1e-9);
    }
}
