use serde::Serialize;

/// Raw field values as typed into the form.
#[derive(Debug, Clone, Default)]
pub struct WithdrawalForm {
    pub nickname: String,
    pub phone: String,
    pub amount: String,
    pub address: String,
    pub card_number: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalPayload<'a> {
    pub nickname: &'a str,
    pub phone: &'a str,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<&'a str>,
    pub card_number: &'a str,
}

impl WithdrawalForm {
    /// The amount field as a number, if it holds one.
    pub fn amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
    }

    pub fn payload(&self, amount: f64) -> WithdrawalPayload<'_> {
        let address = self.address.trim();

        WithdrawalPayload {
            nickname: &self.nickname,
            phone: &self.phone,
            amount,
            address: if address.is_empty() { None } else { Some(address) },
            card_number: &self.card_number,
        }
    }
}
