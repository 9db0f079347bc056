//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod classes;
mod courses;
mod dashboard;
mod enrollments;
mod grades;
mod payments;
mod roles;
mod students;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SMSystemError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 使用现有连接创建存储实例（不运行迁移，主要供集成测试使用）
    pub fn new_with_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SMSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SMSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SMSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SMSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{MarkAttendanceRequest, UpdateAttendanceRequest},
    },
    classes::{
        entities::{Class, ClassStatus},
        requests::{CreateClassRequest, UpdateClassRequest},
    },
    courses::{
        entities::{Course, CourseLevel},
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
    dashboard::responses::{AdminDashboardResponse, TeacherDashboardResponse},
    enrollments::{
        entities::{Enrollment, EnrollmentStatus},
        requests::CreateEnrollmentRequest,
    },
    grades::{entities::Grade, requests::UpsertGradeRequest},
    payments::{
        entities::{Payment, PaymentStatus},
        requests::CreatePaymentRequest,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, UpdateStudentRequest},
    },
    teachers::{
        entities::Teacher,
        requests::{CreateTeacherRequest, UpdateTeacherRequest},
    },
    users::{
        entities::{RoleName, User},
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 角色模块
    async fn seed_roles(&self) -> Result<()> {
        self.seed_roles_impl().await
    }

    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        self.list_users_impl().await
    }

    async fn list_users_by_role(&self, role: RoleName) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn set_user_active(&self, id: i64, active: bool) -> Result<Option<User>> {
        self.set_user_active_impl(id, active).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    // 学生模块
    async fn create_student(
        &self,
        student: CreateStudentRequest,
        password_hash: String,
    ) -> Result<Student> {
        self.create_student_impl(student, password_hash).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_code(&self, student_code: &str) -> Result<Option<Student>> {
        self.get_student_by_code_impl(student_code).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn search_students_by_name(&self, name: &str) -> Result<Vec<Student>> {
        self.search_students_by_name_impl(name).await
    }

    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>> {
        self.list_students_by_class_impl(class_id).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 教师模块
    async fn create_teacher(
        &self,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher> {
        self.create_teacher_impl(teacher, password_hash).await
    }

    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(id).await
    }

    async fn get_teacher_by_code(&self, employee_code: &str) -> Result<Option<Teacher>> {
        self.get_teacher_by_code_impl(employee_code).await
    }

    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn search_teachers_by_name(&self, name: &str) -> Result<Vec<Teacher>> {
        self.search_teachers_by_name_impl(name).await
    }

    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        self.update_teacher_impl(id, update).await
    }

    async fn delete_teacher(&self, id: i64) -> Result<bool> {
        self.delete_teacher_impl(id).await
    }

    // 课程模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>> {
        self.get_course_by_code_impl(code).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn list_active_courses(&self) -> Result<Vec<Course>> {
        self.list_active_courses_impl().await
    }

    async fn list_courses_by_level(&self, level: CourseLevel) -> Result<Vec<Course>> {
        self.list_courses_by_level_impl(level).await
    }

    async fn search_courses_by_name(&self, name: &str) -> Result<Vec<Course>> {
        self.search_courses_by_name_impl(name).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class> {
        self.create_class_impl(class).await
    }

    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(id).await
    }

    async fn get_class_by_code(&self, code: &str) -> Result<Option<Class>> {
        self.get_class_by_code_impl(code).await
    }

    async fn list_classes(&self) -> Result<Vec<Class>> {
        self.list_classes_impl().await
    }

    async fn list_available_classes(&self) -> Result<Vec<Class>> {
        self.list_available_classes_impl().await
    }

    async fn list_classes_by_course(&self, course_id: i64) -> Result<Vec<Class>> {
        self.list_classes_by_course_impl(course_id).await
    }

    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>> {
        self.list_classes_by_teacher_impl(teacher_id).await
    }

    async fn list_classes_by_status(&self, status: ClassStatus) -> Result<Vec<Class>> {
        self.list_classes_by_status_impl(status).await
    }

    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>> {
        self.update_class_impl(id, update).await
    }

    async fn delete_class(&self, id: i64) -> Result<bool> {
        self.delete_class_impl(id).await
    }

    // 选课模块
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>> {
        self.list_enrollments_impl().await
    }

    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_student_impl(student_id).await
    }

    async fn list_enrollments_by_class(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        self.list_enrollments_by_class_impl(class_id).await
    }

    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Enrollment> {
        self.update_enrollment_status_impl(id, status).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<()> {
        self.delete_enrollment_impl(id).await
    }

    // 考勤模块
    async fn mark_attendance(
        &self,
        attendance: MarkAttendanceRequest,
        marked_by: i64,
    ) -> Result<Attendance> {
        self.mark_attendance_impl(attendance, marked_by).await
    }

    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        self.update_attendance_impl(id, update).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    async fn list_attendance_by_class(&self, class_id: i64) -> Result<Vec<Attendance>> {
        self.list_attendance_by_class_impl(class_id).await
    }

    async fn list_attendance_by_student(&self, student_id: i64) -> Result<Vec<Attendance>> {
        self.list_attendance_by_student_impl(student_id).await
    }

    async fn list_attendance_by_class_and_date(
        &self,
        class_id: i64,
        session_date: chrono::NaiveDate,
    ) -> Result<Vec<Attendance>> {
        self.list_attendance_by_class_and_date_impl(class_id, session_date)
            .await
    }

    // 成绩模块
    async fn upsert_grade(&self, grade: UpsertGradeRequest, graded_by: i64) -> Result<Grade> {
        self.upsert_grade_impl(grade, graded_by).await
    }

    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>> {
        self.list_grades_by_student_impl(student_id).await
    }

    async fn list_grades_by_class(&self, class_id: i64) -> Result<Vec<Grade>> {
        self.list_grades_by_class_impl(class_id).await
    }

    // 缴费模块
    async fn create_payment(
        &self,
        payment: CreatePaymentRequest,
        created_by: i64,
    ) -> Result<Payment> {
        self.create_payment_impl(payment, created_by).await
    }

    async fn update_payment_status(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> Result<Option<Payment>> {
        self.update_payment_status_impl(id, status).await
    }

    async fn list_payments_by_enrollment(&self, enrollment_id: i64) -> Result<Vec<Payment>> {
        self.list_payments_by_enrollment_impl(enrollment_id).await
    }

    async fn list_payments_by_student(&self, student_id: i64) -> Result<Vec<Payment>> {
        self.list_payments_by_student_impl(student_id).await
    }

    // 总览模块
    async fn admin_dashboard(&self) -> Result<AdminDashboardResponse> {
        self.admin_dashboard_impl().await
    }

    async fn teacher_dashboard(&self, teacher_id: i64) -> Result<Option<TeacherDashboardResponse>> {
        self.teacher_dashboard_impl(teacher_id).await
    }
}
