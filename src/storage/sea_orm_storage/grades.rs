//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::entity::prelude::{Classes, Enrollments, Students, Users};
use crate::entity::{enrollments, grades};
use crate::errors::{Result, SMSystemError};
use crate::models::grades::{
    entities::{Grade, compute_total_score},
    requests::UpsertGradeRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 查询成绩并补齐选课、学生、班级的展示信息
pub(crate) async fn assemble_grade<C: ConnectionTrait>(
    conn: &C,
    model: grades::Model,
) -> Result<Grade> {
    let enrollment = Enrollments::find_by_id(model.enrollment_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?
        .ok_or_else(|| {
            SMSystemError::not_found(format!("Enrollment {} not found", model.enrollment_id))
        })?;

    let student = Students::find_by_id(enrollment.student_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?
        .ok_or_else(|| {
            SMSystemError::not_found(format!("Student {} not found", enrollment.student_id))
        })?;

    let student_user = Users::find_by_id(student.user_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询学生账号失败: {e}")))?;

    let class = Classes::find_by_id(enrollment.class_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?
        .ok_or_else(|| {
            SMSystemError::not_found(format!("Class {} not found", enrollment.class_id))
        })?;

    let graded_by_name = match model.graded_by {
        Some(user_id) => Users::find_by_id(user_id)
            .one(conn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询评分人失败: {e}")))?
            .map(|u| u.full_name),
        None => None,
    };

    Ok(Grade {
        id: model.id,
        enrollment_id: model.enrollment_id,
        student_id: student.id,
        student_code: student.student_code,
        student_name: student_user.map(|u| u.full_name).unwrap_or_default(),
        class_id: class.id,
        class_name: class.name,
        attendance_score: model.attendance_score,
        midterm_score: model.midterm_score,
        final_score: model.final_score,
        total_score: model.total_score,
        comment: model.comment,
        graded_by_name,
        graded_at: chrono::DateTime::from_timestamp(model.graded_at, 0).unwrap_or_default(),
        updated_at: model
            .updated_at
            .map(|ts| chrono::DateTime::from_timestamp(ts, 0).unwrap_or_default()),
    })
}

impl SeaOrmStorage {
    /// 录入或更新成绩
    ///
    /// 缺省字段保持原值；每次写入重算总评（三项齐全时为加权和，否则为空），
    /// 并以本次操作人覆盖 graded_by。
    pub async fn upsert_grade_impl(
        &self,
        grade: UpsertGradeRequest,
        graded_by: i64,
    ) -> Result<Grade> {
        let enrollment = Enrollments::find_by_id(grade.enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;
        if enrollment.is_none() {
            return Err(SMSystemError::not_found(format!(
                "Enrollment {} not found",
                grade.enrollment_id
            )));
        }

        let existing = Grades::find()
            .filter(Column::EnrollmentId.eq(grade.enrollment_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询成绩失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let updated = match existing {
            None => {
                let total = compute_total_score(
                    grade.attendance_score,
                    grade.midterm_score,
                    grade.final_score,
                );
                let model = ActiveModel {
                    enrollment_id: Set(grade.enrollment_id),
                    attendance_score: Set(grade.attendance_score),
                    midterm_score: Set(grade.midterm_score),
                    final_score: Set(grade.final_score),
                    total_score: Set(total),
                    comment: Set(grade.comment),
                    graded_by: Set(Some(graded_by)),
                    graded_at: Set(now),
                    updated_at: Set(None),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SMSystemError::database_operation(format!("录入成绩失败: {e}")))?
            }
            Some(existing) => {
                let attendance_score = grade.attendance_score.or(existing.attendance_score);
                let midterm_score = grade.midterm_score.or(existing.midterm_score);
                let final_score = grade.final_score.or(existing.final_score);
                let total = compute_total_score(attendance_score, midterm_score, final_score);

                let mut model = ActiveModel {
                    id: Set(existing.id),
                    attendance_score: Set(attendance_score),
                    midterm_score: Set(midterm_score),
                    final_score: Set(final_score),
                    total_score: Set(total),
                    graded_by: Set(Some(graded_by)),
                    updated_at: Set(Some(now)),
                    ..Default::default()
                };
                if let Some(comment) = grade.comment {
                    model.comment = Set(Some(comment));
                }
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SMSystemError::database_operation(format!("更新成绩失败: {e}")))?
            }
        };

        assemble_grade(&self.db, updated).await
    }

    /// 按学生查询成绩
    pub async fn list_grades_by_student_impl(&self, student_id: i64) -> Result<Vec<Grade>> {
        let enrollment_ids = self.enrollment_ids_by_student(student_id).await?;
        if enrollment_ids.is_empty() {
            return Ok(vec![]);
        }

        let records = Grades::find()
            .filter(Column::EnrollmentId.is_in(enrollment_ids))
            .order_by_desc(Column::GradedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        self.assemble_grades(records).await
    }

    /// 按班级查询成绩
    pub async fn list_grades_by_class_impl(&self, class_id: i64) -> Result<Vec<Grade>> {
        let enrollment_records = Enrollments::find()
            .filter(enrollments::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级选课失败: {e}")))?;

        let enrollment_ids: Vec<i64> = enrollment_records.iter().map(|e| e.id).collect();
        if enrollment_ids.is_empty() {
            return Ok(vec![]);
        }

        let records = Grades::find()
            .filter(Column::EnrollmentId.is_in(enrollment_ids))
            .order_by_desc(Column::GradedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询成绩列表失败: {e}")))?;

        self.assemble_grades(records).await
    }

    async fn enrollment_ids_by_student(&self, student_id: i64) -> Result<Vec<i64>> {
        let records = Enrollments::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生选课失败: {e}")))?;

        Ok(records.iter().map(|e| e.id).collect())
    }

    async fn assemble_grades(&self, records: Vec<grades::Model>) -> Result<Vec<Grade>> {
        let mut result = Vec::with_capacity(records.len());
        for model in records {
            result.push(assemble_grade(&self.db, model).await?);
        }
        Ok(result)
    }
}
