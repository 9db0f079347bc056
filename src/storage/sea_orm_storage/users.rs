//! 用户存储操作

use super::SeaOrmStorage;
use super::roles::role_id_by_name;
use crate::entity::prelude::{Roles, UserRoles, Users};
use crate::entity::{roles, user_roles, users};
use crate::errors::{Result, SMSystemError};
use crate::models::users::{
    entities::{RoleName, User},
    requests::{CreateUserRequest, UpdateUserRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

/// 查询用户的角色集合
pub(crate) async fn roles_for_user<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<RoleName>> {
    let links = UserRoles::find()
        .filter(user_roles::Column::UserId.eq(user_id))
        .all(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询用户角色失败: {e}")))?;

    let role_ids: Vec<i64> = links.iter().map(|l| l.role_id).collect();
    if role_ids.is_empty() {
        return Ok(vec![]);
    }

    let records = Roles::find()
        .filter(roles::Column::Id.is_in(role_ids))
        .all(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询角色失败: {e}")))?;

    Ok(records
        .into_iter()
        .filter_map(|r| r.name.parse::<RoleName>().ok())
        .collect())
}

/// 为用户分配角色集合
pub(crate) async fn assign_roles<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    role_names: &[RoleName],
) -> Result<()> {
    for role in role_names {
        let role_id = role_id_by_name(conn, role)
            .await?
            .ok_or_else(|| SMSystemError::not_found(format!("Role {role} not found")))?;

        let model = user_roles::ActiveModel {
            user_id: Set(user_id),
            role_id: Set(role_id),
            ..Default::default()
        };
        model
            .insert(conn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("分配用户角色失败: {e}")))?;
    }
    Ok(())
}

/// 查询用户并补齐角色集合
pub(crate) async fn load_user<C: ConnectionTrait>(
    conn: &C,
    model: users::Model,
) -> Result<User> {
    let roles = roles_for_user(conn, model.id).await?;
    Ok(model.into_user(roles))
}

impl SeaOrmStorage {
    /// 创建用户（同一事务中写入账号与角色关联）
    pub async fn create_user_impl(&self, user: CreateUserRequest) -> Result<User> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();
        let model = users::ActiveModel {
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password),
            full_name: Set(user.full_name),
            phone: Set(user.phone),
            avatar_url: Set(user.avatar_url),
            is_active: Set(true),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建用户失败: {e}")))?;

        // 未指定角色时默认分配 student
        let role_names = user.roles.unwrap_or_else(|| vec![RoleName::Student]);
        assign_roles(&txn, inserted.id, &role_names).await?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted.into_user(role_names))
    }

    /// 通过ID获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let found = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        match found {
            Some(model) => Ok(Some(load_user(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let found = Users::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        match found {
            Some(model) => Ok(Some(load_user(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let found = Users::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        match found {
            Some(model) => Ok(Some(load_user(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let found = Users::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(identifier))
                    .add(users::Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        match found {
            Some(model) => Ok(Some(load_user(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 列出用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let records = Users::find()
            .order_by_desc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户列表失败: {e}")))?;

        let mut result = Vec::with_capacity(records.len());
        for model in records {
            result.push(load_user(&self.db, model).await?);
        }
        Ok(result)
    }

    /// 按角色列出用户
    pub async fn list_users_by_role_impl(&self, role: RoleName) -> Result<Vec<User>> {
        let role_id = match role_id_by_name(&self.db, &role).await? {
            Some(id) => id,
            None => return Ok(vec![]),
        };

        let links = UserRoles::find()
            .filter(user_roles::Column::RoleId.eq(role_id))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户角色失败: {e}")))?;

        let user_ids: Vec<i64> = links.iter().map(|l| l.user_id).collect();
        if user_ids.is_empty() {
            return Ok(vec![]);
        }

        let records = Users::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户列表失败: {e}")))?;

        let mut result = Vec::with_capacity(records.len());
        for model in records {
            result.push(load_user(&self.db, model).await?);
        }
        Ok(result)
    }

    /// 更新用户信息（角色集合整体替换）
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let existing = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model = users::ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password_hash) = update.password {
            model.password_hash = Set(password_hash);
        }
        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(avatar_url) = update.avatar_url {
            model.avatar_url = Set(Some(avatar_url));
        }

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新用户失败: {e}")))?;

        if let Some(role_names) = update.roles {
            UserRoles::delete_many()
                .filter(user_roles::Column::UserId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| SMSystemError::database_operation(format!("清除用户角色失败: {e}")))?;
            assign_roles(&txn, id, &role_names).await?;
        }

        let roles = roles_for_user(&txn, id).await?;

        txn.commit()
            .await
            .map_err(|e| SMSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_user(roles)))
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 启用/停用用户
    pub async fn set_user_active_impl(&self, id: i64, active: bool) -> Result<Option<User>> {
        let existing = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询用户失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = users::ActiveModel {
            id: Set(id),
            is_active: Set(active),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新用户状态失败: {e}")))?;

        Ok(Some(load_user(&self.db, updated).await?))
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(
                users::Column::LastLogin,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新最后登录时间失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
