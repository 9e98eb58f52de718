use serde::{de, Deserialize, Deserializer};

pub mod create_transaction_dto;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Accepts an amount sent either as a JSON number or as the raw text of a
/// form input.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(amount) => amount,
        NumberOrText::Text(text) => match text.trim().parse::<f64>() {
            Ok(amount) => amount,
            Err(_) => return Err(de::Error::custom("amount must be a number")),
        },
    };

    match amount.is_finite() {
        true => Ok(amount),
        false => Err(de::Error::custom("amount must be a finite number")),
    }
}
