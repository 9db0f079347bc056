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

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use classes::configure_classes_routes;
pub use courses::configure_courses_routes;
pub use dashboard::configure_dashboard_routes;
pub use enrollments::configure_enrollments_routes;
pub use grades::configure_grades_routes;
pub use payments::configure_payments_routes;
pub use students::configure_students_routes;
pub use teachers::configure_teachers_routes;
pub use users::configure_users_routes;
