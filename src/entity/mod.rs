//! SeaORM 数据库实体定义

pub mod attendance;
pub mod classes;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod payments;
pub mod prelude;
pub mod roles;
pub mod students;
pub mod teachers;
pub mod user_roles;
pub mod users;
