pub use super::attendance::Entity as Attendance;
pub use super::classes::Entity as Classes;
pub use super::courses::Entity as Courses;
pub use super::enrollments::Entity as Enrollments;
pub use super::grades::Entity as Grades;
pub use super::payments::Entity as Payments;
pub use super::roles::Entity as Roles;
pub use super::students::Entity as Students;
pub use super::teachers::Entity as Teachers;
pub use super::user_roles::Entity as UserRoles;
pub use super::users::Entity as Users;
