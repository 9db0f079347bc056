//! 选课存储操作
//!
//! classes.current_students 是非取消选课数的冗余计数。每个写操作都在单个
//! 事务内完成选课行与计数的读改写，并发选课的正确性依赖数据库事务隔离。

use super::SeaOrmStorage;
use crate::entity::prelude::{Classes, Courses, Enrollments, Students, Users};
use crate::entity::{classes, enrollments};
use crate::errors::{Result, SMSystemError};
use crate::models::enrollments::{
    entities::{Enrollment, EnrollmentStatus},
    requests::CreateEnrollmentRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 查询选课记录并补齐学生、班级、课程的展示信息
pub(crate) async fn assemble_enrollment<C: ConnectionTrait>(
    conn: &C,
    model: enrollments::Model,
) -> Result<Enrollment> {
    let student = Students::find_by_id(model.student_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?
        .ok_or_else(|| {
            SMSystemError::not_found(format!("Student {} not found", model.student_id))
        })?;

    let student_user = Users::find_by_id(student.user_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询学生账号失败: {e}")))?;

    let class = Classes::find_by_id(model.class_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?
        .ok_or_else(|| SMSystemError::not_found(format!("Class {} not found", model.class_id)))?;

    let course_name = Courses::find_by_id(class.course_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询课程失败: {e}")))?
        .map(|c| c.name);

    Ok(Enrollment {
        id: model.id,
        student_id: student.id,
        student_code: student.student_code,
        student_name: student_user.map(|u| u.full_name).unwrap_or_default(),
        class_id: class.id,
        class_code: class.code,
        class_name: class.name,
        course_name,
        enrollment_date: chrono::DateTime::from_timestamp(model.enrollment_date, 0)
            .unwrap_or_default(),
        status: model
            .status
            .parse::<EnrollmentStatus>()
            .unwrap_or_default(),
        note: model.note,
    })
}

impl SeaOrmStorage {
    /// 学生选课
    ///
    /// 同一 (student, class) 组合只允许一条记录，已取消的记录同样占用该
    /// 唯一约束。满员时关闭报名。
    pub async fn create_enrollment_impl(
        &self,
        enrollment: CreateEnrollmentRequest,
    ) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let duplicate = Enrollments::find()
            .filter(
                Condition::all()
                    .add(enrollments::Column::StudentId.eq(enrollment.student_id))
                    .add(enrollments::Column::ClassId.eq(enrollment.class_id)),
            )
            .one(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        if duplicate.is_some() {
            return Err(SMSystemError::duplicate_resource(
                "Student is already enrolled in this class",
            ));
        }

        let student = Students::find_by_id(enrollment.student_id)
            .one(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;
        if student.is_none() {
            return Err(SMSystemError::not_found(format!(
                "Student {} not found",
                enrollment.student_id
            )));
        }

        let class = Classes::find_by_id(enrollment.class_id)
            .one(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?
            .ok_or_else(|| {
                SMSystemError::not_found(format!("Class {} not found", enrollment.class_id))
            })?;

        let now = chrono::Utc::now().timestamp();
        let model = enrollments::ActiveModel {
            student_id: Set(enrollment.student_id),
            class_id: Set(enrollment.class_id),
            enrollment_date: Set(now),
            status: Set(enrollment.status.unwrap_or_default().to_string()),
            note: Set(enrollment.note),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建选课记录失败: {e}")))?;

        // 占用名额，满员即关闭报名
        let new_count = class.current_students + 1;
        let mut class_model = classes::ActiveModel {
            id: Set(class.id),
            current_students: Set(new_count),
            updated_at: Set(now),
            ..Default::default()
        };
        if new_count >= class.max_students {
            class_model.is_registration_open = Set(false);
        }
        class_model
            .update(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新班级名额失败: {e}")))?;

        let result = assemble_enrollment(&txn, inserted).await?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result)
    }

    /// 通过ID获取选课记录
    pub async fn get_enrollment_by_id_impl(&self, id: i64) -> Result<Option<Enrollment>> {
        let found = Enrollments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;

        match found {
            Some(model) => Ok(Some(assemble_enrollment(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 列出全部选课记录
    pub async fn list_enrollments_impl(&self) -> Result<Vec<Enrollment>> {
        let records = Enrollments::find()
            .order_by_desc(enrollments::Column::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课列表失败: {e}")))?;

        self.assemble_enrollments(records).await
    }

    /// 列出学生的选课记录
    pub async fn list_enrollments_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Enrollment>> {
        let records = Enrollments::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .order_by_desc(enrollments::Column::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课列表失败: {e}")))?;

        self.assemble_enrollments(records).await
    }

    /// 列出班级的选课记录
    pub async fn list_enrollments_by_class_impl(&self, class_id: i64) -> Result<Vec<Enrollment>> {
        let records = Enrollments::find()
            .filter(enrollments::Column::ClassId.eq(class_id))
            .order_by_desc(enrollments::Column::EnrollmentDate)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课列表失败: {e}")))?;

        self.assemble_enrollments(records).await
    }

    /// 更新选课状态
    ///
    /// 只有 非取消 -> 取消 这条边会释放名额；其余流转只改状态字段。
    pub async fn update_enrollment_status_impl(
        &self,
        id: i64,
        status: EnrollmentStatus,
    ) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Enrollments::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?
            .ok_or_else(|| SMSystemError::not_found(format!("Enrollment {id} not found")))?;

        let old_status = existing
            .status
            .parse::<EnrollmentStatus>()
            .unwrap_or_default();
        let class_id = existing.class_id;

        let model = enrollments::ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            ..Default::default()
        };

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新选课状态失败: {e}")))?;

        if status == EnrollmentStatus::Cancelled && old_status != EnrollmentStatus::Cancelled {
            release_seat(&txn, class_id).await?;
        }

        let result = assemble_enrollment(&txn, updated).await?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result)
    }

    /// 删除选课记录
    ///
    /// 已取消的选课在取消时已释放过名额，删除时不再重复递减。
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<()> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Enrollments::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?
            .ok_or_else(|| SMSystemError::not_found(format!("Enrollment {id} not found")))?;

        let was_cancelled = existing
            .status
            .parse::<EnrollmentStatus>()
            .unwrap_or_default()
            == EnrollmentStatus::Cancelled;
        let class_id = existing.class_id;

        Enrollments::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除选课记录失败: {e}")))?;

        if !was_cancelled {
            release_seat(&txn, class_id).await?;
        }

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(())
    }

    async fn assemble_enrollments(
        &self,
        records: Vec<enrollments::Model>,
    ) -> Result<Vec<Enrollment>> {
        let mut result = Vec::with_capacity(records.len());
        for model in records {
            result.push(assemble_enrollment(&self.db, model).await?);
        }
        Ok(result)
    }
}

/// 释放一个班级名额（下限为 0），回到容量以下时重新开放报名
async fn release_seat<C: ConnectionTrait>(conn: &C, class_id: i64) -> Result<()> {
    let class = Classes::find_by_id(class_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?;

    let Some(class) = class else {
        return Ok(());
    };

    let new_count = (class.current_students - 1).max(0);
    let mut class_model = classes::ActiveModel {
        id: Set(class.id),
        current_students: Set(new_count),
        updated_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };
    if new_count < class.max_students {
        class_model.is_registration_open = Set(true);
    }
    class_model
        .update(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("更新班级名额失败: {e}")))?;

    Ok(())
}
