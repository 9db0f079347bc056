//! 教师存储操作
//!
//! 教师与账号是 1:1 关系，维护方式与学生一致。

use super::SeaOrmStorage;
use super::users::assign_roles;
use crate::entity::prelude::{Teachers, Users};
use crate::entity::{teachers, users};
use crate::errors::{Result, SMSystemError};
use crate::models::teachers::{
    entities::Teacher,
    requests::{CreateTeacherRequest, UpdateTeacherRequest},
};
use crate::models::users::entities::RoleName;
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 查询教师并补齐账号信息
pub(crate) async fn load_teacher<C: ConnectionTrait>(
    conn: &C,
    model: teachers::Model,
) -> Result<Option<Teacher>> {
    let user = Users::find_by_id(model.user_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询教师账号失败: {e}")))?;

    Ok(user.map(|u| model.into_teacher(&u)))
}

impl SeaOrmStorage {
    /// 创建教师（同一事务中创建账号与教职）
    pub async fn create_teacher_impl(
        &self,
        teacher: CreateTeacherRequest,
        password_hash: String,
    ) -> Result<Teacher> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let user_model = users::ActiveModel {
            username: Set(teacher.username),
            email: Set(teacher.email),
            password_hash: Set(password_hash),
            full_name: Set(teacher.full_name),
            phone: Set(teacher.phone),
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
            .map_err(|e| SMSystemError::database_operation(format!("创建教师账号失败: {e}")))?;

        assign_roles(&txn, user.id, &[RoleName::Teacher]).await?;

        // 未提供工号时按当前数量生成 GV 编号
        let employee_code = match teacher.employee_code {
            Some(code) => code,
            None => {
                let count = Teachers::find()
                    .count(&txn)
                    .await
                    .map_err(|e| SMSystemError::database_operation(format!("统计教师数量失败: {e}")))?;
                format!("GV{:06}", count + 1)
            }
        };

        let teacher_model = teachers::ActiveModel {
            user_id: Set(user.id),
            employee_code: Set(employee_code),
            department: Set(teacher.department),
            specialization: Set(teacher.specialization),
            hire_date: Set(teacher.hire_date.map(|d| d.format("%Y-%m-%d").to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = teacher_model
            .insert(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建教师失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted.into_teacher(&user))
    }

    /// 通过ID获取教师
    pub async fn get_teacher_by_id_impl(&self, id: i64) -> Result<Option<Teacher>> {
        let found = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师失败: {e}")))?;

        match found {
            Some(model) => load_teacher(&self.db, model).await,
            None => Ok(None),
        }
    }

    /// 通过工号获取教师
    pub async fn get_teacher_by_code_impl(&self, employee_code: &str) -> Result<Option<Teacher>> {
        let found = Teachers::find()
            .filter(teachers::Column::EmployeeCode.eq(employee_code))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师失败: {e}")))?;

        match found {
            Some(model) => load_teacher(&self.db, model).await,
            None => Ok(None),
        }
    }

    /// 列出教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let records = Teachers::find()
            .order_by_desc(teachers::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        let mut result = Vec::with_capacity(records.len());
        for model in records {
            if let Some(teacher) = load_teacher(&self.db, model).await? {
                result.push(teacher);
            }
        }
        Ok(result)
    }

    /// 按姓名搜索教师
    pub async fn search_teachers_by_name_impl(&self, name: &str) -> Result<Vec<Teacher>> {
        let escaped = escape_like_pattern(name.trim());
        let matched_users = Users::find()
            .filter(users::Column::FullName.contains(&escaped))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("搜索教师失败: {e}")))?;

        let user_ids: Vec<i64> = matched_users.iter().map(|u| u.id).collect();
        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let records = Teachers::find()
            .filter(teachers::Column::UserId.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        let mut result = Vec::with_capacity(records.len());
        for model in records {
            if let Some(teacher) = load_teacher(&self.db, model).await? {
                result.push(teacher);
            }
        }
        Ok(result)
    }

    /// 更新教师信息（同一事务中更新账号与教职）
    pub async fn update_teacher_impl(
        &self,
        id: i64,
        update: UpdateTeacherRequest,
    ) -> Result<Option<Teacher>> {
        let existing = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师失败: {e}")))?;

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
            .map_err(|e| SMSystemError::database_operation(format!("更新教师账号失败: {e}")))?;

        let mut teacher_model = teachers::ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };
        if let Some(department) = update.department {
            teacher_model.department = Set(Some(department));
        }
        if let Some(specialization) = update.specialization {
            teacher_model.specialization = Set(Some(specialization));
        }
        if let Some(hire_date) = update.hire_date {
            teacher_model.hire_date = Set(Some(hire_date.format("%Y-%m-%d").to_string()));
        }
        let teacher = teacher_model
            .update(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新教师失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(teacher.into_teacher(&user)))
    }

    /// 删除教师（级联删除其账号）
    pub async fn delete_teacher_impl(&self, id: i64) -> Result<bool> {
        let existing = Teachers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(false);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        Teachers::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除教师失败: {e}")))?;

        Users::delete_by_id(existing.user_id)
            .exec(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除教师账号失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }
}
