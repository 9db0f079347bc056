pub mod create;
pub mod list;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::payments::entities::PaymentStatus;
use crate::models::payments::requests::CreatePaymentRequest;
use crate::storage::Storage;

pub struct PaymentService {
    storage: Option<Arc<dyn Storage>>,
}

impl PaymentService {
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

    // 创建缴费记录
    pub async fn create_payment(
        &self,
        request: &HttpRequest,
        payment: CreatePaymentRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create(self, request, payment).await
    }

    // 更新缴费状态
    pub async fn update_status(
        &self,
        request: &HttpRequest,
        id: i64,
        status: PaymentStatus,
    ) -> ActixResult<HttpResponse> {
        status::handle_update_status(self, request, id, status).await
    }

    // 按选课记录查询缴费
    pub async fn list_by_enrollment(
        &self,
        request: &HttpRequest,
        enrollment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_enrollment(self, request, enrollment_id).await
    }

    // 按学生查询缴费
    pub async fn list_by_student(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_by_student(self, request, student_id).await
    }
}
