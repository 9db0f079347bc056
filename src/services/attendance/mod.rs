pub mod delete;
pub mod list;
pub mod mark;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{MarkAttendanceRequest, UpdateAttendanceRequest};
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    // 登记考勤
    pub async fn mark_attendance(
        &self,
        request: &HttpRequest,
        attendance: MarkAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        mark::handle_mark(self, request, attendance).await
    }

    // 更新考勤记录
    pub async fn update_attendance(
        &self,
        request: &HttpRequest,
        id: i64,
        update: UpdateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update(self, request, id, update).await
    }

    // 删除考勤记录
    pub async fn delete_attendance(
        &self,
        request: &HttpRequest,
        id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete(self, request, id).await
    }

    // 按班级查询考勤
    pub async fn list_by_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_class(self, request, class_id).await
    }

    // 按学生查询考勤
    pub async fn list_by_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_student(self, request, student_id).await
    }

    // 按班级和日期查询考勤
    pub async fn list_by_class_and_date(
        &self,
        request: &HttpRequest,
        class_id: i64,
        session_date: chrono::NaiveDate,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_class_and_date(self, request, class_id, session_date).await
    }
}
