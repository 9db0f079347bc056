pub mod list;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::UpsertGradeRequest;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // 录入或更新成绩
    pub async fn upsert_grade(
        &self,
        request: &HttpRequest,
        grade: UpsertGradeRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::handle_upsert(self, request, grade).await
    }

    // 按学生查询成绩
    pub async fn list_by_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_student(self, request, student_id).await
    }

    // 按班级查询成绩
    pub async fn list_by_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_class(self, request, class_id).await
    }
}
