pub mod attendance;
pub mod auth;
pub mod classes;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod grades;
pub mod payments;
pub mod students;
pub mod teachers;
pub mod users;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use classes::ClassService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use payments::PaymentService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use users::UserService;
