//! 学生存储操作
//!
//! 学生与账号是 1:1 关系：创建/删除学生时在同一事务内维护 users 表。

use super::SeaOrmStorage;
use super::users::assign_roles;
use crate::entity::prelude::{Enrollments, Students, Users};
use crate::entity::{enrollments, students, users};
use crate::errors::{Result, SMSystemError};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, UpdateStudentRequest},
};
use crate::models::users::entities::RoleName;
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 查询学生并补齐账号信息
pub(crate) async fn load_student<C: ConnectionTrait>(
    conn: &C,
    model: students::Model,
) -> Result<Option<Student>> {
    let user = Users::find_by_id(model.user_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询学生账号失败: {e}")))?;

    Ok(user.map(|u| model.into_student(&u)))
}

impl SeaOrmStorage {
    /// 创建学生（同一事务中创建账号与学籍）
    pub async fn create_student_impl(
        &self,
        student: CreateStudentRequest,
        password_hash: String,
    ) -> Result<Student> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let user_model = users::ActiveModel {
            username: Set(student.username),
            email: Set(student.email),
            password_hash: Set(password_hash),
            full_name: Set(student.full_name),
            phone: Set(student.phone),
            avatar_url: Set(None),
            is_active: Set(true),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = user_model
            .insert(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建学生账号失败: {e}")))?;

        assign_roles(&txn, user.id, &[RoleName::Student]).await?;

        // 未提供学号时按当前数量生成 SV 编号
        let student_code = match student.student_code {
            Some(code) => code,
            None => {
                let count = Students::find()
                    .count(&txn)
                    .await
                    .map_err(|e| SMSystemError::database_operation(format!("统计学生数量失败: {e}")))?;
                format!("SV{:06}", count + 1)
            }
        };

        let enrollment_date = student
            .enrollment_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive());

        let student_model = students::ActiveModel {
            user_id: Set(user.id),
            student_code: Set(student_code),
            date_of_birth: Set(student
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string())),
            gender: Set(student.gender),
            address: Set(student.address),
            enrollment_date: Set(enrollment_date.format("%Y-%m-%d").to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = student_model
            .insert(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted.into_student(&user))
    }

    /// 通过ID获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let found = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;

        match found {
            Some(model) => load_student(&self.db, model).await,
            None => Ok(None),
        }
    }

    /// 通过学号获取学生
    pub async fn get_student_by_code_impl(&self, student_code: &str) -> Result<Option<Student>> {
        let found = Students::find()
            .filter(students::Column::StudentCode.eq(student_code))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;

        match found {
            Some(model) => load_student(&self.db, model).await,
            None => Ok(None),
        }
    }

    /// 列出学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let records = Students::find()
            .order_by_desc(students::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        let mut result = Vec::with_capacity(records.len());
        for model in records {
            if let Some(student) = load_student(&self.db, model).await? {
                result.push(student);
            }
        }
        Ok(result)
    }

    /// 按姓名搜索学生
    pub async fn search_students_by_name_impl(&self, name: &str) -> Result<Vec<Student>> {
        let escaped = escape_like_pattern(name.trim());
        let matched_users = Users::find()
            .filter(users::Column::FullName.contains(&escaped))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("搜索学生失败: {e}")))?;

        let user_ids: Vec<i64> = matched_users.iter().map(|u| u.id).collect();
        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let records = Students::find()
            .filter(students::Column::UserId.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        let mut result = Vec::with_capacity(records.len());
        for model in records {
            if let Some(student) = load_student(&self.db, model).await? {
                result.push(student);
            }
        }
        Ok(result)
    }

    /// 列出班级内的学生
    pub async fn list_students_by_class_impl(&self, class_id: i64) -> Result<Vec<Student>> {
        let records = Enrollments::find()
            .filter(enrollments::Column::ClassId.eq(class_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级选课失败: {e}")))?;

        let student_ids: Vec<i64> = records.iter().map(|e| e.student_id).collect();
        if student_ids.is_empty() {
            return Ok(vec![]);
        }

        let students = Students::find()
            .filter(students::Column::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生列表失败: {e}")))?;

        let mut result = Vec::with_capacity(students.len());
        for model in students {
            if let Some(student) = load_student(&self.db, model).await? {
                result.push(student);
            }
        }
        Ok(result)
    }

    /// 更新学生信息（同一事务中更新账号与学籍）
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let mut user_model = users::ActiveModel {
            id: Set(existing.user_id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(email) = update.email {
            user_model.email = Set(email);
        }
        if let Some(full_name) = update.full_name {
            user_model.full_name = Set(full_name);
        }
        if let Some(phone) = update.phone {
            user_model.phone = Set(Some(phone));
        }
        let user = user_model
            .update(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新学生账号失败: {e}")))?;

        let mut student_model = students::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(date_of_birth) = update.date_of_birth {
            student_model.date_of_birth = Set(Some(date_of_birth.format("%Y-%m-%d").to_string()));
        }
        if let Some(gender) = update.gender {
            student_model.gender = Set(Some(gender));
        }
        if let Some(address) = update.address {
            student_model.address = Set(Some(address));
        }
        let student = student_model
            .update(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(student.into_student(&user)))
    }

    /// 删除学生（级联删除其账号）
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let existing = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除学生失败: {e}")))?;

        Users::delete_by_id(existing.user_id)
            .exec(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除学生账号失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}
