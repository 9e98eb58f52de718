use crate::transactions::models::transaction::Transaction;

pub fn new_transaction_template(transaction: &Transaction) -> (String, String) {
    let address = match &transaction.address {
        Some(address) if !address.trim().is_empty() => address.as_str(),
        _ => "-",
    };

    (
        "New withdrawal request".to_string(),
        format!(
            "Nickname: {}\nPhone: {}\nAmount: {}\nAddress: {}\nCard number: {}\n",
            transaction.nickname,
            transaction.phone,
            transaction.amount,
            address,
            transaction.card_number,
        ),
    )
}
