//! 角色存储操作

use super::SeaOrmStorage;
use crate::entity::roles::{ActiveModel, Column, Entity as Roles};
use crate::errors::{Result, SMSystemError};
use crate::models::users::entities::RoleName;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 初始化内置角色（幂等）
    pub async fn seed_roles_impl(&self) -> Result<()> {
        let builtin = [
            (RoleName::Admin, "Administrator with full access"),
            (RoleName::Teacher, "Teacher with course management access"),
            (RoleName::Student, "Student with limited access"),
        ];

        for (role, description) in builtin {
            let existing = Roles::find()
                .filter(Column::Name.eq(role.to_string()))
                .one(&self.db)
                .await
                .map_err(|e| SMSystemError::database_operation(format!("查询角色失败: {e}")))?;

            if existing.is_none() {
                let model = ActiveModel {
                    name: Set(role.to_string()),
                    description: Set(Some(description.to_string())),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SMSystemError::database_operation(format!("创建角色失败: {e}")))?;
            }
        }

        Ok(())
    }
}

/// 按角色名查询角色 ID
pub(crate) async fn role_id_by_name<C: ConnectionTrait>(
    conn: &C,
    role: &RoleName,
) -> Result<Option<i64>> {
    let found = Roles::find()
        .filter(Column::Name.eq(role.to_string()))
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询角色失败: {e}")))?;
    Ok(found.map(|m| m.id))
}
