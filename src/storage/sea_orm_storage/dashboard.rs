//! 总览统计存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{Classes, Courses, Enrollments, Payments, Students, Teachers};
use crate::entity::{classes, enrollments, payments};
use crate::errors::{Result, SMSystemError};
use crate::models::dashboard::responses::{AdminDashboardResponse, TeacherDashboardResponse};
use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::payments::entities::PaymentStatus;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmStorage {
    /// 管理员总览：各实体总量 + 已完成缴费的总收入
    pub async fn admin_dashboard_impl(&self) -> Result<AdminDashboardResponse> {
        let total_students = Students::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计学生数量失败: {e}")))?;

        let total_teachers = Teachers::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计教师数量失败: {e}")))?;

        let total_courses = Courses::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计课程数量失败: {e}")))?;

        let total_classes = Classes::find()
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计班级数量失败: {e}")))?;

        let active_enrollments = Enrollments::find()
            .filter(enrollments::Column::Status.ne(EnrollmentStatus::Cancelled.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计选课数量失败: {e}")))?;

        let completed_payments = Payments::find()
            .filter(payments::Column::Status.eq(PaymentStatus::Completed.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计缴费收入失败: {e}")))?;

        let total_revenue = completed_payments.iter().map(|p| p.amount).sum();

        Ok(AdminDashboardResponse {
            total_students: total_students as i64,
            total_teachers: total_teachers as i64,
            total_courses: total_courses as i64,
            total_classes: total_classes as i64,
            active_enrollments: active_enrollments as i64,
            total_revenue,
        })
    }

    /// 教师总览：班级数量 + 去重后的在读学生数量
    pub async fn teacher_dashboard_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Option<TeacherDashboardResponse>> {
        let teacher = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师失败: {e}")))?;

        if teacher.is_none() {
            return Ok(None);
        }

        let class_records = Classes::find()
            .filter(classes::Column::TeacherId.eq(teacher_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师班级失败: {e}")))?;

        let class_ids: Vec<i64> = class_records.iter().map(|c| c.id).collect();

        let total_students = if class_ids.is_empty() {
            0
        } else {
            let enrollment_records = Enrollments::find()
                .filter(enrollments::Column::ClassId.is_in(class_ids))
                .filter(enrollments::Column::Status.ne(EnrollmentStatus::Cancelled.to_string()))
                .all(&self.db)
                .await
                .map_err(|e| {
                    SMSystemError::database_operation(format!("查询班级选课失败: {e}"))
                })?;

            let mut student_ids: Vec<i64> =
                enrollment_records.iter().map(|e| e.student_id).collect();
            student_ids.sort_unstable();
            student_ids.dedup();
            student_ids.len() as i64
        };

        Ok(Some(TeacherDashboardResponse {
            teacher_id,
            total_classes: class_records.len() as i64,
            total_students,
        }))
    }
}
