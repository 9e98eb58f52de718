use crate::{app::models::api_message::ApiMessage, transactions::MIN_AMOUNT};

use super::{models::withdrawal_form::WithdrawalForm, view::FormView};

pub static MIN_AMOUNT_ALERT: &str = "minimum amount is 30!";
pub static GENERIC_FAILURE: &str = "an error occurred while processing the request";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form never left the client.
    Rejected,
    /// The server accepted the request; holds its message.
    Accepted(String),
    /// The server refused or could not be reached; holds the alerted text.
    Failed(String),
}

pub struct FormController {
    client: reqwest::Client,
    endpoint: String,
}

impl FormController {
    pub fn new(base_url: &str) -> Self {
        return Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/transaction", base_url.trim_end_matches('/')),
        };
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn submit<V: FormView>(&self, form: &WithdrawalForm, view: &mut V) -> SubmitOutcome {
        let Some(amount) = form.amount().filter(|amount| *amount >= MIN_AMOUNT) else {
            view.alert(MIN_AMOUNT_ALERT);
            return SubmitOutcome::Rejected;
        };

        let response = match self
            .client
            .post(&self.endpoint)
            .json(&form.payload(amount))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(%e);
                return fail(view, GENERIC_FAILURE);
            }
        };

        let status = response.status();

        let message = match response.json::<ApiMessage>().await {
            Ok(body) => body.message,
            Err(e) => {
                tracing::error!(%e);
                return fail(view, GENERIC_FAILURE);
            }
        };

        tracing::debug!(%status, %message, "server responded");

        if !status.is_success() {
            return fail(view, &message);
        }

        view.show_message(&message);
        SubmitOutcome::Accepted(message)
    }
}

fn fail<V: FormView>(view: &mut V, message: &str) -> SubmitOutcome {
    view.alert(message);
    SubmitOutcome::Failed(message.to_string())
}
