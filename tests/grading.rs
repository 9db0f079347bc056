//! 成绩录入与总评计算的集成测试

mod common;

use common::{create_class_with_capacity, create_student, create_user_with_role, setup_storage};
use rust_smsystem_next::errors::SMSystemError;
use rust_smsystem_next::models::enrollments::requests::CreateEnrollmentRequest;
use rust_smsystem_next::models::grades::requests::UpsertGradeRequest;
use rust_smsystem_next::models::users::entities::RoleName;
use rust_smsystem_next::storage::Storage;

async fn enroll(
    storage: &rust_smsystem_next::storage::sea_orm_storage::SeaOrmStorage,
    student_id: i64,
    class_id: i64,
) -> i64 {
    storage
        .create_enrollment(CreateEnrollmentRequest {
            student_id,
            class_id,
            status: None,
            note: None,
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_total_score_computed_when_all_components_present() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "GR-FULL", 10).await;
    let student = create_student(&storage, "grade-full").await;
    let teacher = create_user_with_role(&storage, "grader-full", RoleName::Teacher).await;
    let enrollment_id = enroll(&storage, student.id, class.id).await;

    let grade = storage
        .upsert_grade(
            UpsertGradeRequest {
                enrollment_id,
                attendance_score: Some(8.0),
                midterm_score: Some(7.0),
                final_score: Some(9.0),
                comment: None,
            },
            teacher.id,
        )
        .await
        .unwrap();

    // 0.1*8 + 0.3*7 + 0.6*9 = 8.3
    assert!((grade.total_score.unwrap() - 8.3).abs() < 1e-9);
    assert_eq!(grade.graded_by_name.as_deref(), Some("User grader-full"));
}

#[tokio::test]
async fn test_total_score_null_until_all_components_present() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "GR-PART", 10).await;
    let student = create_student(&storage, "grade-part").await;
    let teacher = create_user_with_role(&storage, "grader-part", RoleName::Teacher).await;
    let enrollment_id = enroll(&storage, student.id, class.id).await;

    let grade = storage
        .upsert_grade(
            UpsertGradeRequest {
                enrollment_id,
                attendance_score: Some(8.0),
                midterm_score: Some(7.0),
                final_score: None,
                comment: None,
            },
            teacher.id,
        )
        .await
        .unwrap();
    assert!(grade.total_score.is_none());

    // 补齐期末成绩后自动重算总评，先前的分数保持不变
    let grade = storage
        .upsert_grade(
            UpsertGradeRequest {
                enrollment_id,
                attendance_score: None,
                midterm_score: None,
                final_score: Some(9.0),
                comment: None,
            },
            teacher.id,
        )
        .await
        .unwrap();
    assert_eq!(grade.attendance_score, Some(8.0));
    assert_eq!(grade.midterm_score, Some(7.0));
    assert!((grade.total_score.unwrap() - 8.3).abs() < 1e-9);
}

#[tokio::test]
async fn test_partial_update_keeps_comment_and_overwrites_grader() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "GR-UPD", 10).await;
    let student = create_student(&storage, "grade-upd").await;
    let first = create_user_with_role(&storage, "grader-first", RoleName::Teacher).await;
    let second = create_user_with_role(&storage, "grader-second", RoleName::Admin).await;
    let enrollment_id = enroll(&storage, student.id, class.id).await;

    storage
        .upsert_grade(
            UpsertGradeRequest {
                enrollment_id,
                attendance_score: Some(6.0),
                midterm_score: None,
                final_score: None,
                comment: Some("needs improvement".to_string()),
            },
            first.id,
        )
        .await
        .unwrap();

    // 缺省字段保持原值，操作人被覆盖
    let grade = storage
        .upsert_grade(
            UpsertGradeRequest {
                enrollment_id,
                attendance_score: None,
                midterm_score: Some(7.5),
                final_score: None,
                comment: None,
            },
            second.id,
        )
        .await
        .unwrap();

    assert_eq!(grade.attendance_score, Some(6.0));
    assert_eq!(grade.midterm_score, Some(7.5));
    assert_eq!(grade.comment.as_deref(), Some("needs improvement"));
    assert_eq!(grade.graded_by_name.as_deref(), Some("User grader-second"));
    assert!(grade.updated_at.is_some());
}

#[tokio::test]
async fn test_upsert_grade_requires_enrollment() {
    let storage = setup_storage().await;
    let teacher = create_user_with_role(&storage, "grader-missing", RoleName::Teacher).await;

    let err = storage
        .upsert_grade(
            UpsertGradeRequest {
                enrollment_id: 777,
                attendance_score: Some(5.0),
                midterm_score: None,
                final_score: None,
                comment: None,
            },
            teacher.id,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::NotFound(_)));
}

#[tokio::test]
async fn test_grades_listed_by_student_and_class() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "GR-LIST", 10).await;
    let student = create_student(&storage, "grade-list").await;
    let teacher = create_user_with_role(&storage, "grader-list", RoleName::Teacher).await;
    let enrollment_id = enroll(&storage, student.id, class.id).await;

    storage
        .upsert_grade(
            UpsertGradeRequest {
                enrollment_id,
                attendance_score: Some(9.0),
                midterm_score: Some(8.0),
                final_score: Some(7.0),
                comment: None,
            },
            teacher.id,
        )
        .await
        .unwrap();

    let by_student = storage.list_grades_by_student(student.id).await.unwrap();
    assert_eq!(by_student.len(), 1);
    assert_eq!(by_student[0].student_code, student.student_code);

    let by_class = storage.list_grades_by_class(class.id).await.unwrap();
    assert_eq!(by_class.len(), 1);
    assert_eq!(by_class[0].class_id, class.id);
}
