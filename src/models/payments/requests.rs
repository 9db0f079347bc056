use serde::Deserialize;

use super::entities::{PaymentMethod, PaymentStatus};

// 创建缴费记录请求，金额必须为正（路由边界校验）
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    pub enrollment_id: i64,
    pub amount: f64,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
    pub transaction_id: Option<String>,
    pub note: Option<String>,
}

// 更新缴费状态请求
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub status: PaymentStatus,
}
