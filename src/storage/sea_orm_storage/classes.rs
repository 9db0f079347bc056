//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::prelude::{Classes, Courses, Teachers, Users};
use crate::entity::classes;
use crate::errors::{Result, SMSystemError};
use crate::models::classes::{
    entities::{Class, ClassStatus},
    requests::{CreateClassRequest, UpdateClassRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 查询班级并补齐课程、教师名称
pub(crate) async fn load_class<C: ConnectionTrait>(
    conn: &C,
    model: classes::Model,
) -> Result<Class> {
    let course_name = Courses::find_by_id(model.course_id)
        .one(conn)
        .await
        .map_err(|e| SMSystemError::database_operation(format!("查询课程失败: {e}")))?
        .map(|c| c.name);

    let teacher_name = match model.teacher_id {
        Some(teacher_id) => {
            let teacher = Teachers::find_by_id(teacher_id)
                .one(conn)
                .await
                .map_err(|e| SMSystemError::database_operation(format!("查询教师失败: {e}")))?;
            match teacher {
                Some(teacher) => Users::find_by_id(teacher.user_id)
                    .one(conn)
                    .await
                    .map_err(|e| {
                        SMSystemError::database_operation(format!("查询教师账号失败: {e}"))
                    })?
                    .map(|u| u.full_name),
                None => None,
            }
        }
        None => None,
    };

    Ok(model.into_class(course_name, teacher_name))
}

impl SeaOrmStorage {
    /// 创建班级
    pub async fn create_class_impl(&self, class: CreateClassRequest) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();
        let model = classes::ActiveModel {
            code: Set(class.code),
            name: Set(class.name),
            course_id: Set(class.course_id),
            teacher_id: Set(class.teacher_id),
            max_students: Set(class.max_students.unwrap_or(30)),
            current_students: Set(0),
            room: Set(class.room),
            schedule: Set(class.schedule),
            start_date: Set(class.start_date.map(|d| d.format("%Y-%m-%d").to_string())),
            end_date: Set(class.end_date.map(|d| d.format("%Y-%m-%d").to_string())),
            status: Set(class.status.unwrap_or_default().to_string()),
            is_registration_open: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建班级失败: {e}")))?;

        load_class(&self.db, inserted).await
    }

    /// 通过ID获取班级
    pub async fn get_class_by_id_impl(&self, id: i64) -> Result<Option<Class>> {
        let found = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?;

        match found {
            Some(model) => Ok(Some(load_class(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 通过班级编号获取班级
    pub async fn get_class_by_code_impl(&self, code: &str) -> Result<Option<Class>> {
        let found = Classes::find()
            .filter(classes::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?;

        match found {
            Some(model) => Ok(Some(load_class(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    /// 列出班级
    pub async fn list_classes_impl(&self) -> Result<Vec<Class>> {
        let records = Classes::find()
            .order_by_desc(classes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        self.assemble_classes(records).await
    }

    /// 列出可报名的班级（状态 open 且报名未关闭）
    pub async fn list_available_classes_impl(&self) -> Result<Vec<Class>> {
        let records = Classes::find()
            .filter(classes::Column::Status.eq(ClassStatus::Open.to_string()))
            .filter(classes::Column::IsRegistrationOpen.eq(true))
            .order_by_desc(classes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        self.assemble_classes(records).await
    }

    /// 按课程列出班级
    pub async fn list_classes_by_course_impl(&self, course_id: i64) -> Result<Vec<Class>> {
        let records = Classes::find()
            .filter(classes::Column::CourseId.eq(course_id))
            .order_by_desc(classes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        self.assemble_classes(records).await
    }

    /// 按教师列出班级
    pub async fn list_classes_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Class>> {
        let records = Classes::find()
            .filter(classes::Column::TeacherId.eq(teacher_id))
            .order_by_desc(classes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        self.assemble_classes(records).await
    }

    /// 按状态列出班级
    pub async fn list_classes_by_status_impl(&self, status: ClassStatus) -> Result<Vec<Class>> {
        let records = Classes::find()
            .filter(classes::Column::Status.eq(status.to_string()))
            .order_by_desc(classes::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级列表失败: {e}")))?;

        self.assemble_classes(records).await
    }

    /// 更新班级信息
    pub async fn update_class_impl(
        &self,
        id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let existing = Classes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询班级失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = classes::ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(Some(teacher_id));
        }
        if let Some(max_students) = update.max_students {
            model.max_students = Set(max_students);
            // 容量调整后重新判定报名开关
            model.is_registration_open = Set(existing.current_students < max_students);
        }
        if let Some(room) = update.room {
            model.room = Set(Some(room));
        }
        if let Some(schedule) = update.schedule {
            model.schedule = Set(Some(schedule));
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(Some(start_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(Some(end_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("更新班级失败: {e}")))?;

        Ok(Some(load_class(&self.db, updated).await?))
    }

    /// 删除班级
    pub async fn delete_class_impl(&self, id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    async fn assemble_classes(&self, records: Vec<classes::Model>) -> Result<Vec<Class>> {
        let mut result = Vec::with_capacity(records.len());
        for model in records {
            result.push(load_class(&self.db, model).await?);
        }
        Ok(result)
    }
}
