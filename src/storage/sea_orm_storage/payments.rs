//! 缴费存储操作

use super::SeaOrmStorage;
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::entity::prelude::{Classes, Enrollments, Students, Users};
use crate::entity::{enrollments, payments};
use crate::errors::{Result, SMSystemError};
use crate::models::payments::{
    entities::{Payment, PaymentMethod, PaymentStatus},
    requests::CreatePaymentRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 查询缴费记录并补齐选课、学生的展示信息
pub(crate) async fn assemble_payment<C: ConnectionTrait>(
    conn: &C,
    model: payments::Model,
) -> Result<Payment> {
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

    let class_name = Classes::find_by_id(enrollment.class_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?
        .map(|c| c.name)
        .unwrap_or_default();

    let created_by_name = match model.created_by {
        Some(user_id) => Users::find_by_id(user_id)
            .one(conn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询经办人失败: {e}")))?
            .map(|u| u.full_name),
        None => None,
    };

    Ok(Payment {
        id: model.id,
        enrollment_id: model.enrollment_id,
        student_id: student.id,
        student_name: student_user.map(|u| u.full_name).unwrap_or_default(),
        class_name,
        amount: model.amount,
        payment_date: chrono::DateTime::from_timestamp(model.payment_date, 0).unwrap_or_default(),
        payment_method: model
            .payment_method
            .and_then(|m| m.parse::<PaymentMethod>().ok()),
        status: model.status.parse::<PaymentStatus>().unwrap_or_default(),
        transaction_id: model.transaction_id,
        note: model.note,
        created_by_name,
    })
}

impl SeaOrmStorage {
    /// 创建缴费记录
    pub async fn create_payment_impl(
        &self,
        payment: CreatePaymentRequest,
        created_by: i64,
    ) -> Result<Payment> {
        let enrollment = Enrollments::find_by_id(payment.enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询选课记录失败: {e}")))?;
        if enrollment.is_none() {
            return Err(SMSystemError::not_found(format!(
                "Enrollment {} not found",
                payment.enrollment_id
            )));
        }

        let model = ActiveModel {
            enrollment_id: Set(payment.enrollment_id),
            amount: Set(payment.amount),
            payment_date: Set(chrono::Utc::now().timestamp()),
            payment_method: Set(payment.payment_method.map(|m| m.to_string())),
            status: Set(payment.status.unwrap_or_default().to_string()),
            transaction_id: Set(payment.transaction_id),
            note: Set(payment.note),
            created_by: Set(Some(created_by)),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建缴费记录失败: {e}")))?;

        assemble_payment(&self.db, inserted).await
    }

    /// 更新缴费状态
    pub async fn update_payment_status_impl(
        &self,
        id: i64,
        status: PaymentStatus,
    ) -> Result<Option<Payment>> {
        let existing = Payments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询缴费记录失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新缴费状态失败: {e}")))?;

        Ok(Some(assemble_payment(&self.db, updated).await?))
    }

    /// 按选课记录查询缴费
    pub async fn list_payments_by_enrollment_impl(
        &self,
        enrollment_id: i64,
    ) -> Result<Vec<Payment>> {
        let records = Payments::find()
            .filter(Column::EnrollmentId.eq(enrollment_id))
            .order_by_desc(Column::PaymentDate)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询缴费列表失败: {e}")))?;

        self.assemble_payments(records).await
    }

    /// 按学生查询缴费（经由选课记录关联）
    pub async fn list_payments_by_student_impl(&self, student_id: i64) -> Result<Vec<Payment>> {
        let enrollment_records = Enrollments::find()
            .filter(enrollments::Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生选课失败: {e}")))?;

        let enrollment_ids: Vec<i64> = enrollment_records.iter().map(|e| e.id).collect();
        if enrollment_ids.is_empty() {
            return Ok(vec![]);
        }

        let records = Payments::find()
            .filter(Column::EnrollmentId.is_in(enrollment_ids))
            .order_by_desc(Column::PaymentDate)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询缴费列表失败: {e}")))?;

        self.assemble_payments(records).await
    }

    async fn assemble_payments(&self, records: Vec<payments::Model>) -> Result<Vec<Payment>> {
        let mut result = Vec::with_capacity(records.len());
        for model in records {
            result.push(assemble_payment(&self.db, model).await?);
        }
        Ok(result)
    }
}
