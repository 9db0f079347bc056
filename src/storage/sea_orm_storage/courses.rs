//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::errors::{Result, SMSystemError};
use crate::models::courses::{
    entities::{Course, CourseLevel},
    requests::{CreateCourseRequest, UpdateCourseRequest},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, course: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            code: Set(course.code),
            name: Set(course.name),
            description: Set(course.description),
            price: Set(course.price),
            duration: Set(course.duration),
            level: Set(course.level.map(|l| l.to_string())),
            thumbnail_url: Set(course.thumbnail_url),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(inserted.into_course())
    }

    /// 通过ID获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let found = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(found.map(|m| m.into_course()))
    }

    /// 通过课程编号获取课程
    pub async fn get_course_by_code_impl(&self, code: &str) -> Result<Option<Course>> {
        let found = Courses::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(found.map(|m| m.into_course()))
    }

    /// 列出课程
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let records = Courses::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_course()).collect())
    }

    /// 列出启用的课程
    pub async fn list_active_courses_impl(&self) -> Result<Vec<Course>> {
        let records = Courses::find()
            .filter(Column::IsActive.eq(true))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_course()).collect())
    }

    /// 按难度列出课程
    pub async fn list_courses_by_level_impl(&self, level: CourseLevel) -> Result<Vec<Course>> {
        let records = Courses::find()
            .filter(Column::Level.eq(level.to_string()))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_course()).collect())
    }

    /// 按名称搜索课程
    pub async fn search_courses_by_name_impl(&self, name: &str) -> Result<Vec<Course>> {
        let escaped = escape_like_pattern(name.trim());
        let records = Courses::find()
            .filter(Column::Name.contains(&escaped))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("搜索课程失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程信息
    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询课程失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(price) = update.price {
            model.price = Set(Some(price));
        }
        if let Some(duration) = update.duration {
            model.duration = Set(Some(duration));
        }
        if let Some(level) = update.level {
            model.level = Set(Some(level.to_string()));
        }
        if let Some(thumbnail_url) = update.thumbnail_url {
            model.thumbnail_url = Set(Some(thumbnail_url));
        }
        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(updated.into_course()))
    }

    /// 删除课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
