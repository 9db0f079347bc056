pub mod create;
pub mod delete;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::entities::EnrollmentStatus;
use crate::models::enrollments::requests::CreateEnrollmentRequest;
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 学生选课
    pub async fn create_enrollment(
        &self,
        request: &HttpRequest,
        enrollment: CreateEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, enrollment).await
    }

    // 更新选课状态
    pub async fn update_status(
        &self,
        request: &HttpRequest,
        id: i64,
        status: EnrollmentStatus,
    ) -> ActixResult<HttpResponse> {
        status::handle_update_status(self, request, id, status).await
    }

    // 删除选课记录
    pub async fn delete_enrollment(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }

    // 查询选课记录
    pub async fn get_enrollment(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_get(self, request, id).await
    }

    // 列出全部选课记录
    pub async fn list_enrollments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_all(self, request).await
    }

    // 列出学生的选课记录
    pub async fn list_by_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_student(self, request, student_id).await
    }

    // 列出班级的选课记录
    pub async fn list_by_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_class(self, request, class_id).await
    }
}
