//! 账号、角色与凭证验证的集成测试

mod common;

use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use argon2::Argon2;
use common::{create_student, create_user_with_role, setup_storage};
use rust_smsystem_next::models::users::entities::RoleName;
use rust_smsystem_next::models::users::requests::CreateUserRequest;
use rust_smsystem_next::storage::Storage;
use rust_smsystem_next::utils::password::verify_password;

fn hash(password: &str) -> String {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_password_verification_against_stored_hash() {
    let storage = setup_storage().await;

    storage
        .create_user(CreateUserRequest {
            username: "login-user".to_string(),
            email: "login-user@example.com".to_string(),
            password: hash("SecurePass123"),
            full_name: "Login User".to_string(),
            phone: None,
            avatar_url: None,
            roles: None,
        })
        .await
        .unwrap();

    let user = storage
        .get_user_by_username_or_email("login-user")
        .await
        .unwrap()
        .unwrap();

    assert!(verify_password("SecurePass123", &user.password_hash));
    assert!(!verify_password("WrongPass456", &user.password_hash));

    // 邮箱同样可以作为登录标识
    let by_email = storage
        .get_user_by_username_or_email("login-user@example.com")
        .await
        .unwrap();
    assert!(by_email.is_some());
}

#[tokio::test]
async fn test_default_role_is_student() {
    let storage = setup_storage().await;

    let user = storage
        .create_user(CreateUserRequest {
            username: "default-role".to_string(),
            email: "default-role@example.com".to_string(),
            password: "test-password-hash".to_string(),
            full_name: "Default Role".to_string(),
            phone: None,
            avatar_url: None,
            roles: None,
        })
        .await
        .unwrap();

    assert_eq!(user.roles, vec![RoleName::Student]);
}

#[tokio::test]
async fn test_deactivated_user_flag_round_trips() {
    let storage = setup_storage().await;
    let user = create_user_with_role(&storage, "inactive-user", RoleName::Student).await;
    assert!(user.is_active);

    let user = storage
        .set_user_active(user.id, false)
        .await
        .unwrap()
        .unwrap();
    assert!(!user.is_active);

    let reloaded = storage.get_user_by_id(user.id).await.unwrap().unwrap();
    assert!(!reloaded.is_active);
}

#[tokio::test]
async fn test_list_users_by_role() {
    let storage = setup_storage().await;
    create_user_with_role(&storage, "role-admin", RoleName::Admin).await;
    create_user_with_role(&storage, "role-teacher", RoleName::Teacher).await;

    let admins = storage.list_users_by_role(RoleName::Admin).await.unwrap();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins[0].username, "role-admin");

    let students = storage.list_users_by_role(RoleName::Student).await.unwrap();
    assert!(students.is_empty());
}

#[tokio::test]
async fn test_student_codes_generated_and_cascade_delete() {
    let storage = setup_storage().await;

    let student = create_student(&storage, "cascade-student").await;
    assert!(student.student_code.starts_with("SV"));

    // 删除学生时级联删除其账号
    assert!(storage.delete_student(student.id).await.unwrap());
    let user = storage.get_user_by_id(student.user_id).await.unwrap();
    assert!(user.is_none());
}
