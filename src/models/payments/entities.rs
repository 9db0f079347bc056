use serde::{Deserialize, Serialize};

// 缴费方式
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    CreditCard,
    EWallet,
}

impl<'de> Deserialize<'de> for PaymentMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PaymentMethod>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::BankTransfer => write!(f, "bank_transfer"),
            PaymentMethod::CreditCard => write!(f, "credit_card"),
            PaymentMethod::EWallet => write!(f, "e_wallet"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "e_wallet" => Ok(PaymentMethod::EWallet),
            _ => Err(format!(
                "无效的缴费方式: '{s}'. 支持: cash, bank_transfer, credit_card, e_wallet"
            )),
        }
    }
}

// 缴费状态
//
// 状态间允许任意流转，仅更新存储字段，无其他副作用。
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl<'de> Deserialize<'de> for PaymentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PaymentStatus>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
            PaymentStatus::Refunded => write!(f, "refunded"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            "refunded" => Ok(PaymentStatus::Refunded),
            _ => Err(format!(
                "无效的缴费状态: '{s}'. 支持: pending, completed, failed, refunded"
            )),
        }
    }
}

// 缴费记录（含选课与学生的展示信息）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub enrollment_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub class_name: String,
    pub amount: f64,
    pub payment_date: chrono::DateTime<chrono::Utc>,
    pub payment_method: Option<PaymentMethod>,
    pub status: PaymentStatus,
    pub transaction_id: Option<String>,
    pub note: Option<String>,
    pub created_by_name: Option<String>,
}
