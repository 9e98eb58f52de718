use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{app::util::time, transactions::dtos::create_transaction_dto::CreateTransactionDto};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub nickname: String,
    pub phone: String,
    pub amount: f64,
    pub address: Option<String>,
    pub card_number: String,
    pub timestamp: i64,
}

impl Transaction {
    pub fn new(dto: &CreateTransactionDto) -> Self {
        return Self {
            id: Uuid::new_v4().to_string(),
            nickname: dto.nickname.to_string(),
            phone: dto.phone.to_string(),
            amount: dto.amount,
            address: dto.address.clone(),
            card_number: dto.card_number.to_string(),
            timestamp: time::current_time_in_secs() as i64,
        };
    }
}
