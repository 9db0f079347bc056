use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 角色管理方法
    // 初始化内置角色（幂等）
    async fn seed_roles(&self) -> Result<()>;

    /// 用户管理方法
    // 创建用户（password 字段须已哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users(&self) -> Result<Vec<User>>;
    // 按角色列出用户
    async fn list_users_by_role(&self, role: RoleName) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 启用/停用用户
    async fn set_user_active(&self, id: i64, active: bool) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生（同一事务中创建账号与学籍）
    async fn create_student(
        &self,
        student: CreateStudentRequest,
        password_hash: String,
    ) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_code(&self, student_code: &str) -> Result<Option<Student>>;
    // 列出学生
    async fn list_students(&self) -> Result<Vec<Student>>;
    // 按姓名搜索学生
    async fn search_students_by_name(&self, name: &str) -> Result<Vec<Student>>;
    // 列出班级内的学生
    async fn list_students_by_class(&self, class_id: i64) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>>;
    // 删除学生（级联删除其账号）
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 教师管理方法
    // 创建教师（同一事务中创建账号与教职）
    async fn create_teacher(
        &self,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher>;
    // 通过ID获取教师信息
    async fn get_teacher_by_id(&self, id: i64) -> Result<Option<Teacher>>;
    // 通过工号获取教师信息
    async fn get_teacher_by_code(&self, employee_code: &str) -> Result<Option<Teacher>>;
    // 列出教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 按姓名搜索教师
    async fn search_teachers_by_name(&self, name: &str) -> Result<Vec<Teacher>>;
    // 更新教师信息
    async fn update_teacher(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>>;
    // 删除教师（级联删除其账号）
    async fn delete_teacher(&self, id: i64) -> Result<bool>;

    /// 课程管理方法
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 通过课程编号获取课程信息
    async fn get_course_by_code(&self, code: &str) -> Result<Option<Course>>;
    // 列出课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 列出启用的课程
    async fn list_active_courses(&self) -> Result<Vec<Course>>;
    // 按难度列出课程
    async fn list_courses_by_level(&self, level: CourseLevel) -> Result<Vec<Course>>;
    // 按名称搜索课程
    async fn search_courses_by_name(&self, name: &str) -> Result<Vec<Course>>;
    // 更新课程信息
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, id: i64) -> Result<Option<Class>>;
    // 通过班级编号获取班级信息
    async fn get_class_by_code(&self, code: &str) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes(&self) -> Result<Vec<Class>>;
    // 列出可报名的班级
    async fn list_available_classes(&self) -> Result<Vec<Class>>;
    // 按课程列出班级
    async fn list_classes_by_course(&self, course_id: i64) -> Result<Vec<Class>>;
    // 按教师列出班级
    async fn list_classes_by_teacher(&self, teacher_id: i64) -> Result<Vec<Class>>;
    // 按状态列出班级
    async fn list_classes_by_status(&self, status: ClassStatus) -> Result<Vec<Class>>;
    // 更新班级信息
    async fn update_class(&self, id: i64, update: UpdateClassRequest) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, id: i64) -> Result<bool>;

    /// 选课管理方法（名额计数在单事务内维护）
    // 学生选课
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    // 列出全部选课记录
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>>;
    // 列出学生的选课记录
    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<Enrollment>>;
    // 列出班级的选课记录
    async fn list_enrollments_by_class(&self, class_id: i64) -> Result<Vec<Enrollment>>;
    // 更新选课状态
    async fn update_enrollment_status(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Enrollment>;
    // 删除选课记录
    async fn delete_enrollment(&self, id: i64) -> Result<()>;

    /// 考勤管理方法
    // 登记考勤
    async fn mark_attendance(
        &self,
        attendance: MarkAttendanceRequest,
        marked_by: i64,
    ) -> Result<Attendance>;
    // 更新考勤记录
    async fn update_attendance(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>>;
    // 删除考勤记录
    async fn delete_attendance(&self, id: i64) -> Result<bool>;
    // 按班级查询考勤
    async fn list_attendance_by_class(&self, class_id: i64) -> Result<Vec<Attendance>>;
    // 按学生查询考勤
    async fn list_attendance_by_student(&self, student_id: i64) -> Result<Vec<Attendance>>;
    // 按班级和日期查询考勤
    async fn list_attendance_by_class_and_date(
        &self,
        class_id: i64,
        session_date: chrono::NaiveDate,
    ) -> Result<Vec<Attendance>>;

    /// 成绩管理方法
    // 录入或更新成绩（每次写入重算总评）
    async fn upsert_grade(&self, grade: UpsertGradeRequest, graded_by: i64) -> Result<Grade>;
    // 按学生查询成绩
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<Grade>>;
    // 按班级查询成绩
    async fn list_grades_by_class(&self, class_id: i64) -> Result<Vec<Grade>>;

    /// 缴费管理方法
    // 创建缴费记录
    async fn create_payment(
        &self,
        payment: CreatePaymentRequest,
        created_by: i64,
    ) -> Result<Payment>;
    // 更新缴费状态
    async fn update_payment_status(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> Result<Option<Payment>>;
    // 按选课记录查询缴费
    async fn list_payments_by_enrollment(&self, enrollment_id: i64) -> Result<Vec<Payment>>;
    // 按学生查询缴费
    async fn list_payments_by_student(&self, student_id: i64) -> Result<Vec<Payment>>;

    /// 总览统计方法
    // 管理员总览
    async fn admin_dashboard(&self) -> Result<AdminDashboardResponse>;
    // 教师总览
    async fn teacher_dashboard(&self, teacher_id: i64) -> Result<Option<TeacherDashboardResponse>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
