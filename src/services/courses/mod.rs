pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::entities::CourseLevel;
use crate::models::courses::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建课程
    pub async fn create_course(
        &self,
        request: &HttpRequest,
        course: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, course).await
    }

    // 更新课程信息
    pub async fn update_course(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, request, id, update).await
    }

    // 删除课程
    pub async fn delete_course(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }

    // 通过ID查询课程
    pub async fn get_course(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::handle_get(self, request, id).await
    }

    // 列出课程
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list(self, request).await
    }

    // 列出启用的课程
    pub async fn list_active_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_active(self, request).await
    }

    // 按难度列出课程
    pub async fn list_by_level(
        &self,
        request: &HttpRequest,
        level: CourseLevel,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_level(self, request, level).await
    }

    // 按名称搜索课程
    pub async fn search_courses(
        &self,
        request: &HttpRequest,
        name: String,
    ) -> ActixResult<HttpResponse> {
        list::handle_search(self, request, name).await
    }
}
