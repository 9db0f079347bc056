//! 选课与班级名额不变量的集成测试
//!
//! 覆盖：名额计数、报名开关、重复选课冲突、取消/删除的单次释放语义。

mod common;

use common::{create_class_with_capacity, create_student, setup_storage};
use rust_smsystem_next::errors::SMSystemError;
use rust_smsystem_next::models::enrollments::entities::EnrollmentStatus;
use rust_smsystem_next::models::enrollments::requests::CreateEnrollmentRequest;
use rust_smsystem_next::storage::Storage;

fn enroll_request(student_id: i64, class_id: i64) -> CreateEnrollmentRequest {
    CreateEnrollmentRequest {
        student_id,
        class_id,
        status: None,
        note: None,
    }
}

#[tokio::test]
async fn test_capacity_counting_and_registration_toggle() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-CAP", 2).await;
    let student_a = create_student(&storage, "student-a").await;
    let student_b = create_student(&storage, "student-b").await;

    // 第一个学生：1/2，报名仍开放
    let enrollment_a = storage
        .create_enrollment(enroll_request(student_a.id, class.id))
        .await
        .unwrap();
    assert_eq!(enrollment_a.status, EnrollmentStatus::Pending);

    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 1);
    assert!(class_state.is_registration_open);

    // 第二个学生：2/2，报名关闭
    storage
        .create_enrollment(enroll_request(student_b.id, class.id))
        .await
        .unwrap();

    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 2);
    assert!(!class_state.is_registration_open);

    // 取消一个：1/2，重新开放
    storage
        .update_enrollment_status(enrollment_a.id, EnrollmentStatus::Cancelled)
        .await
        .unwrap();

    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 1);
    assert!(class_state.is_registration_open);
}

#[tokio::test]
async fn test_duplicate_enrollment_is_rejected() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-DUP", 10).await;
    let student = create_student(&storage, "student-dup").await;

    storage
        .create_enrollment(enroll_request(student.id, class.id))
        .await
        .unwrap();

    let err = storage
        .create_enrollment(enroll_request(student.id, class.id))
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::DuplicateResource(_)));

    // 重复选课不应影响计数
    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 1);
}

#[tokio::test]
async fn test_cancelled_enrollment_still_blocks_reenrollment() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-REJOIN", 10).await;
    let student = create_student(&storage, "student-rejoin").await;

    let enrollment = storage
        .create_enrollment(enroll_request(student.id, class.id))
        .await
        .unwrap();
    storage
        .update_enrollment_status(enrollment.id, EnrollmentStatus::Cancelled)
        .await
        .unwrap();

    // 唯一约束不区分状态，已取消的记录同样阻止再次选课
    let err = storage
        .create_enrollment(enroll_request(student.id, class.id))
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::DuplicateResource(_)));
}

#[tokio::test]
async fn test_enrollment_requires_existing_student_and_class() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-MISSING", 10).await;
    let student = create_student(&storage, "student-missing").await;

    let err = storage
        .create_enrollment(enroll_request(9999, class.id))
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::NotFound(_)));

    let err = storage
        .create_enrollment(enroll_request(student.id, 9999))
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::NotFound(_)));
}

#[tokio::test]
async fn test_repeated_cancellation_releases_seat_once() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-IDEM", 10).await;
    let student_a = create_student(&storage, "student-idem-a").await;
    let student_b = create_student(&storage, "student-idem-b").await;

    let enrollment = storage
        .create_enrollment(enroll_request(student_a.id, class.id))
        .await
        .unwrap();
    storage
        .create_enrollment(enroll_request(student_b.id, class.id))
        .await
        .unwrap();

    storage
        .update_enrollment_status(enrollment.id, EnrollmentStatus::Cancelled)
        .await
        .unwrap();
    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 1);

    // 取消 -> 取消 只是普通字段更新，不再释放名额
    storage
        .update_enrollment_status(enrollment.id, EnrollmentStatus::Cancelled)
        .await
        .unwrap();
    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 1);
}

#[tokio::test]
async fn test_delete_after_cancel_does_not_double_decrement() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-DEL", 10).await;
    let student_a = create_student(&storage, "student-del-a").await;
    let student_b = create_student(&storage, "student-del-b").await;

    let enrollment_a = storage
        .create_enrollment(enroll_request(student_a.id, class.id))
        .await
        .unwrap();
    storage
        .create_enrollment(enroll_request(student_b.id, class.id))
        .await
        .unwrap();

    // 取消后删除：名额在取消时已释放，删除不再递减
    storage
        .update_enrollment_status(enrollment_a.id, EnrollmentStatus::Cancelled)
        .await
        .unwrap();
    storage.delete_enrollment(enrollment_a.id).await.unwrap();

    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 1);
}

#[tokio::test]
async fn test_delete_active_enrollment_releases_seat() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-DEL2", 2).await;
    let student = create_student(&storage, "student-del2").await;

    let enrollment = storage
        .create_enrollment(enroll_request(student.id, class.id))
        .await
        .unwrap();
    storage.delete_enrollment(enrollment.id).await.unwrap();

    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 0);
    assert!(class_state.is_registration_open);
}

#[tokio::test]
async fn test_roster_operations_on_missing_enrollment() {
    let storage = setup_storage().await;

    let err = storage
        .update_enrollment_status(424242, EnrollmentStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(matches!(err, SMSystemError::NotFound(_)));

    let err = storage.delete_enrollment(424242).await.unwrap_err();
    assert!(matches!(err, SMSystemError::NotFound(_)));
}

#[tokio::test]
async fn test_non_cancel_transitions_have_no_seat_side_effect() {
    let storage = setup_storage().await;
    let class = create_class_with_capacity(&storage, "CL-TRANS", 10).await;
    let student = create_student(&storage, "student-trans").await;

    let enrollment = storage
        .create_enrollment(enroll_request(student.id, class.id))
        .await
        .unwrap();

    let updated = storage
        .update_enrollment_status(enrollment.id, EnrollmentStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(updated.status, EnrollmentStatus::Confirmed);

    let class_state = storage.get_class_by_id(class.id).await.unwrap().unwrap();
    assert_eq!(class_state.current_students, 1);
}
