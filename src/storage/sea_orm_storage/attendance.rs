//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendance::{ActiveModel, Column, Entity as AttendanceEntity};
use crate::entity::prelude::{Classes, Students, Users};
use crate::entity::attendance;
use crate::errors::{Result, SMSystemError};
use crate::models::attendance::{
    entities::{Attendance, AttendanceStatus},
    requests::{MarkAttendanceRequest, UpdateAttendanceRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

/// 查询考勤记录并补齐班级、学生、登记人的展示信息
pub(crate) async fn assemble_attendance<C: ConnectionTrait>(
    conn: &C,
    model: attendance::Model,
) -> Result<Attendance> {
    let class = Classes::find_by_id(model.class_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?
        .ok_or_else(|| SMSystemError::not_found(format!("Class {} not found", model.class_id)))?;

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

    let marked_by_name = match model.marked_by {
        Some(user_id) => Users::find_by_id(user_id)
            .one(conn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询登记人失败: {e}")))?
            .map(|u| u.full_name),
        None => None,
    };

    Ok(Attendance {
        id: model.id,
        class_id: class.id,
        class_name: class.name,
        student_id: student.id,
        student_code: student.student_code,
        student_name: student_user.map(|u| u.full_name).unwrap_or_default(),
        session_date: chrono::NaiveDate::parse_from_str(&model.session_date, "%Y-%m-%d")
            .unwrap_or_default(),
        session_number: model.session_number,
        status: model
            .status
            .parse::<AttendanceStatus>()
            .unwrap_or(AttendanceStatus::Absent),
        note: model.note,
        marked_by_name,
        marked_at: chrono::DateTime::from_timestamp(model.marked_at, 0).unwrap_or_default(),
    })
}

impl SeaOrmStorage {
    /// 登记考勤
    ///
    /// 同一 (class, student, session_date) 只允许一条记录，重复登记报冲突，
    /// 修改既有记录走 update。
    pub async fn mark_attendance_impl(
        &self,
        attendance: MarkAttendanceRequest,
        marked_by: i64,
    ) -> Result<Attendance> {
        let session_date = attendance.session_date.format("%Y-%m-%d").to_string();

        let duplicate = AttendanceEntity::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(attendance.class_id))
                    .add(Column::StudentId.eq(attendance.student_id))
                    .add(Column::SessionDate.eq(session_date.clone())),
            )
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        if duplicate.is_some() {
            return Err(SMSystemError::duplicate_resource(
                "Attendance already marked for this student on this date",
            ));
        }

        let class = Classes::find_by_id(attendance.class_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?;
        if class.is_none() {
            return Err(SMSystemError::not_found(format!(
                "Class {} not found",
                attendance.class_id
            )));
        }

        let student = Students::find_by_id(attendance.student_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;
        if student.is_none() {
            return Err(SMSystemError::not_found(format!(
                "Student {} not found",
                attendance.student_id
            )));
        }

        let model = ActiveModel {
            class_id: Set(attendance.class_id),
            student_id: Set(attendance.student_id),
            session_date: Set(session_date),
            session_number: Set(attendance.session_number),
            status: Set(attendance.status.to_string()),
            note: Set(attendance.note),
            marked_by: Set(Some(marked_by)),
            marked_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("登记考勤失败: {e}")))?;

        assemble_attendance(&self.db, inserted).await
    }

    /// 更新考勤记录（仅状态与备注）
    pub async fn update_attendance_impl(
        &self,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> Result<Option<Attendance>> {
        let existing = AttendanceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        // 空更新直接返回现状，避免发出没有赋值列的 UPDATE
        if update.status.is_none() && update.note.is_none() {
            return Ok(Some(assemble_attendance(&self.db, existing).await?));
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(note) = update.note {
            model.note = Set(Some(note));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新考勤记录失败: {e}")))?;

        Ok(Some(assemble_attendance(&self.db, updated).await?))
    }

    /// 删除考勤记录
    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = AttendanceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除考勤记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按班级查询考勤
    pub async fn list_attendance_by_class_impl(&self, class_id: i64) -> Result<Vec<Attendance>> {
        let records = AttendanceEntity::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_desc(Column::SessionDate)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤列表失败: {e}")))?;

        self.assemble_attendance_list(records).await
    }

    /// 按学生查询考勤
    pub async fn list_attendance_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Attendance>> {
        let records = AttendanceEntity::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SessionDate)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤列表失败: {e}")))?;

        self.assemble_attendance_list(records).await
    }

    /// 按班级和日期查询考勤
    pub async fn list_attendance_by_class_and_date_impl(
        &self,
        class_id: i64,
        session_date: chrono::NaiveDate,
    ) -> Result<Vec<Attendance>> {
        let records = AttendanceEntity::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::SessionDate.eq(session_date.format("%Y-%m-%d").to_string())),
            )
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤列表失败: {e}")))?;

        self.assemble_attendance_list(records).await
    }

    async fn assemble_attendance_list(
        &self,
        records: Vec<attendance::Model>,
    ) -> Result<Vec<Attendance>> {
        let mut result = Vec::with_capacity(records.len());
        for model in records {
            result.push(assemble_attendance(&self.db, model).await?);
        }
        Ok(result)
    }
}
