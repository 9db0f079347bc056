//! API 业务错误码
//!
//! 响应体中的 code 字段，0 表示成功，其余按模块分段。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用
    BadRequest = 1000,
    ValidationFailed = 1001,
    Unauthorized = 1100,
    AuthFailed = 1101,
    AccountInactive = 1102,
    Forbidden = 1200,
    InternalServerError = 1500,

    // 用户模块
    UserNotFound = 2001,
    UserNameAlreadyExists = 2002,
    UserEmailAlreadyExists = 2003,
    UserNameInvalid = 2004,
    UserEmailInvalid = 2005,
    PasswordPolicyViolation = 2006,
    RegisterFailed = 2007,

    // 学生 / 教师模块
    StudentNotFound = 3001,
    StudentCodeAlreadyExists = 3002,
    TeacherNotFound = 3101,
    TeacherCodeAlreadyExists = 3102,

    // 课程 / 班级模块
    CourseNotFound = 4001,
    CourseCodeAlreadyExists = 4002,
    ClassNotFound = 4101,
    ClassCodeAlreadyExists = 4102,

    // 选课 / 考勤 / 成绩 / 缴费模块
    EnrollmentNotFound = 5001,
    EnrollmentAlreadyExists = 5002,
    AttendanceNotFound = 5101,
    AttendanceAlreadyMarked = 5102,
    GradeScoreInvalid = 5201,
    PaymentNotFound = 5301,
    PaymentAmountInvalid = 5302,
}
