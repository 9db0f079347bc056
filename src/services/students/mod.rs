pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::storage::Storage;

pub struct StudentService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudentService {
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

    // 创建学生
    pub async fn create_student(
        &self,
        request: &HttpRequest,
        student: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, student).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, request, id, update).await
    }

    // 删除学生
    pub async fn delete_student(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }

    // 通过ID查询学生
    pub async fn get_student(&self, request: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        get::handle_get(self, request, id).await
    }

    // 通过学号查询学生
    pub async fn get_student_by_code(
        &self,
        request: &HttpRequest,
        student_code: String,
    ) -> ActixResult<HttpResponse> {
        get::handle_get_by_code(self, request, student_code).await
    }

    // 列出学生
    pub async fn list_students(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list(self, request).await
    }

    // 按姓名搜索学生
    pub async fn search_students(
        &self,
        request: &HttpRequest,
        name: String,
    ) -> ActixResult<HttpResponse> {
        list::handle_search(self, request, name).await
    }

    // 列出班级内的学生
    pub async fn list_by_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_class(self, request, class_id).await
    }
}
