use serde::Deserialize;
use validator::Validate;

use super::deserialize_amount;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionDto {
    pub nickname: String,
    pub phone: String,
    #[serde(deserialize_with = "deserialize_amount")]
    #[validate(range(min = 30.0))]
    pub amount: f64,
    #[serde(default)]
    pub address: Option<String>,
    pub card_number: String,
}
