//! 考勤登记与查询的集成测试

mod common;

use common::{create_class_with_capacity, create_student, create_user_with_role, setup_storage};
use rust_smsystem_next::errors::SMSystemError;
use rust_smsystem_next::models::attendance::entities::AttendanceStatus;
use rust_smsystem_next::models::attendance::requests::{
    MarkAttendanceRequest, UpdateAttendanceRequest,
};
use rust_smsystem_next::models::users::entities::RoleName;
use rust_smsystem_next::storage::Storage;

fn mark_request(class_id: i64, student_id: i64, date: &str) -> MarkAttendanceRequest {
    MarkAttendanceRequest {
        class_id,
        student_id,
        session_date: date.parse().unwrap(),
        status: AttendanceStatus::Present,
        session_number: Some(1),
        note: None,
    }
}

#[tokio::test]
async fn test_mark_attendance_records_caller() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "AT-MARK", 10).await;
    let student = create_student(&storage, "att-mark").await;
    let teacher = create_user_with_role(&storage, "att-marker", RoleName::Teacher).await;

    let attendance = storage
        .mark_attendance(mark_request(class.id, student.id, "2026-03-02"), teacher.id)
        .await
        .unwrap();

    assert_eq!(attendance.status, AttendanceStatus::Present);
    assert_eq!(attendance.marked_by_name.as_deref(), Some("User att-marker"));
    assert_eq!(attendance.session_date.to_string(), "2026-03-02");
}

#[tokio::test]
async fn test_duplicate_mark_for_same_session_is_rejected() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "AT-DUP", 10).await;
    let student = create_student(&storage, "att-dup").await;
    let teacher = create_user_with_role(&storage, "att-dup-marker", RoleName::Teacher).await;

    storage
        .mark_attendance(mark_request(class.id, student.id, "2026-03-02"), teacher.id)
        .await
        .unwrap();

    // 同一 (班级, 学生, 日期) 再次登记报冲突
    let err = storage
        .mark_attendance(mark_request(class.id, student.id, "2026-03-02"), teacher.id)
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::DuplicateResource(_)));

    // 另一天可以正常登记
    storage
        .mark_attendance(mark_request(class.id, student.id, "2026-03-09"), teacher.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_mark_attendance_requires_class_and_student() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "AT-MISS", 10).await;
    let student = create_student(&storage, "att-miss").await;
    let teacher = create_user_with_role(&storage, "att-miss-marker", RoleName::Teacher).await;

    let err = storage
        .mark_attendance(mark_request(9999, student.id, "2026-03-02"), teacher.id)
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::NotFound(_)));

    let err = storage
        .mark_attendance(mark_request(class.id, 9999, "2026-03-02"), teacher.id)
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::NotFound(_)));
}

#[tokio::test]
async fn test_update_and_delete_attendance() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "AT-UPD", 10).await;
    let student = create_student(&storage, "att-upd").await;
    let teacher = create_user_with_role(&storage, "att-upd-marker", RoleName::Teacher).await;

    let attendance = storage
        .mark_attendance(mark_request(class.id, student.id, "2026-03-02"), teacher.id)
        .await
        .unwrap();

    let updated = storage
        .update_attendance(
            attendance.id,
            UpdateAttendanceRequest {
                status: Some(AttendanceStatus::Late),
                note: Some("arrived 15 minutes late".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, AttendanceStatus::Late);
    assert_eq!(updated.note.as_deref(), Some("arrived 15 minutes late"));

    assert!(storage.delete_attendance(attendance.id).await.unwrap());
    assert!(!storage.delete_attendance(attendance.id).await.unwrap());
}

#[tokio::test]
async fn test_attendance_queries() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "AT-QRY", 10).await;
    let student_a = create_student(&storage, "att-qry-a").await;
    let student_b = create_student(&storage, "att-qry-b").await;
    let teacher = create_user_with_role(&storage, "att-qry-marker", RoleName::Teacher).await;

    storage
        .mark_attendance(
            mark_request(class.id, student_a.id, "2026-03-02"),
            teacher.id,
        )
        .await
        .unwrap();
    storage
        .mark_attendance(
            mark_request(class.id, student_b.id, "2026-03-02"),
            teacher.id,
        )
        .await
        .unwrap();
    storage
        .mark_attendance(
            mark_request(class.id, student_a.id, "2026-03-09"),
            teacher.id,
        )
        .await
        .unwrap();

    assert_eq!(
        storage.list_attendance_by_class(class.id).await.unwrap().len(),
        3
    );
    assert_eq!(
        storage
            .list_attendance_by_student(student_a.id)
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        storage
            .list_attendance_by_class_and_date(class.id, "2026-03-02".parse().unwrap())
            .await
            .unwrap()
            .len(),
        2
    );
}
