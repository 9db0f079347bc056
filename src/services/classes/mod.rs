pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::entities::ClassStatus;
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
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

    // 创建班级
    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, class).await
    }

    // 更新班级信息
    pub async fn update_class(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, request, id, update).await
    }

    // 删除班级
    pub async fn delete_class(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }

    // 通过ID查询班级
    pub async fn get_class(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::handle_get(self, request, id).await
    }

    // 通过班级编号查询班级
    pub async fn get_class_by_code(
        &self,
        request: &HttpRequest,
        code: String,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_by_code(self, request, code).await
    }

    // 列出班级
    pub async fn list_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list(self, request).await
    }

    // 列出可报名的班级
    pub async fn list_available_classes(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_available(self, request).await
    }

    // 按课程列出班级
    pub async fn list_by_course(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_course(self, request, course_id).await
    }

    // 按教师列出班级
    pub async fn list_by_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_teacher(self, request, teacher_id).await
    }

    // 按状态列出班级
    pub async fn list_by_status(
        &self,
        request: &HttpRequest,
        status: ClassStatus,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_status(self, request, status).await
    }
}
