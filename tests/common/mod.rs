//! 集成测试公共辅助：内存 SQLite 存储与基础数据构造

use migration::{Migrator, MigratorTrait};
use rust_smsystem_next::models::classes::entities::Class;
use rust_smsystem_next::models::classes::requests::CreateClassRequest;
use rust_smsystem_next::models::courses::requests::CreateCourseRequest;
use rust_smsystem_next::models::students::entities::Student;
use rust_smsystem_next::models::students::requests::CreateStudentRequest;
use rust_smsystem_next::models::users::entities::{RoleName, User};
use rust_smsystem_next::models::users::requests::CreateUserRequest;
use rust_smsystem_next::storage::Storage;
use rust_smsystem_next::storage::sea_orm_storage::SeaOrmStorage;

/// 创建内存数据库存储并完成迁移与角色初始化
pub async fn setup_storage() -> SeaOrmStorage {
    // 内存库必须固定在单个连接上，否则连接池的每个连接都会看到一个空库
    let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);
    let db = sea_orm::Database::connect(opt)
        .await
        .expect("Failed to connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("Migration failed");

    let storage = SeaOrmStorage::new_with_connection(db);
    storage.seed_roles().await.expect("Failed to seed roles");
    storage
}

/// 创建一名学生（密码哈希在测试中无需真实）
pub async fn create_student(storage: &SeaOrmStorage, username: &str) -> Student {
    storage
        .create_student(
            CreateStudentRequest {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password: None,
                full_name: format!("Student {username}"),
                phone: None,
                student_code: None,
                date_of_birth: None,
                gender: None,
                address: None,
                enrollment_date: None,
            },
            "test-password-hash".to_string(),
        )
        .await
        .expect("Failed to create student")
}

/// 创建一门课程和一个指定容量的班级
pub async fn create_class_with_capacity(
    storage: &SeaOrmStorage,
    code: &str,
    max_students: i32,
) -> Class {
    let course = storage
        .create_course(CreateCourseRequest {
            code: format!("CRS-{code}"),
            name: format!("Course for {code}"),
            description: None,
            price: Some(1500000.0),
            duration: Some(48),
            level: None,
            thumbnail_url: None,
        })
        .await
        .expect("Failed to create course");

    storage
        .create_class(CreateClassRequest {
            code: code.to_string(),
            name: format!("Class {code}"),
            course_id: course.id,
            teacher_id: None,
            max_students: Some(max_students),
            room: None,
            schedule: None,
            start_date: None,
            end_date: None,
            status: None,
        })
        .await
        .expect("Failed to create class")
}

/// 创建一个带指定角色的用户（作为操作人使用）
pub async fn create_user_with_role(
    storage: &SeaOrmStorage,
    username: &str,
    role: RoleName,
) -> User {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "test-password-hash".to_string(),
            full_name: format!("User {username}"),
            phone: None,
            avatar_url: None,
            roles: Some(vec![role]),
        })
        .await
        .expect("Failed to create user")
}
