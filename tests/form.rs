mod common;

use std::sync::Arc;

use withdrawal_api::form::{
    controller::{FormController, SubmitOutcome, GENERIC_FAILURE},
    models::withdrawal_form::WithdrawalForm,
    view::FormView,
};

use common::{spawn_app, state, MemoryStore, RecordingMailer};

#[derive(Default)]
struct RecordingView {
    messages: Vec<String>,
    alerts: Vec<String>,
}

impl FormView for RecordingView {
    fn show_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

fn form() -> WithdrawalForm {
    WithdrawalForm {
        nickname: "neo".to_string(),
        phone: "+380501234567".to_string(),
        amount: "120".to_string(),
        address: "Lviv".to_string(),
        card_number: "4111111111111111".to_string(),
    }
}

#[tokio::test]
async fn accepted_submission_shows_server_message() {
    let store = Arc::new(MemoryStore::default());
    let mailer = Arc::new(RecordingMailer::default());
    let base_url = spawn_app(state(store.clone(), mailer.clone()));
    let mut view = RecordingView::default();

    let outcome = FormController::new(&base_url).submit(&form(), &mut view).await;

    let message = "transaction saved and sent by email".to_string();
    assert_eq!(outcome, SubmitOutcome::Accepted(message.clone()));
    assert_eq!(view.messages, vec![message]);
    assert!(view.alerts.is_empty());

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].amount, 120.0);
    assert_eq!(records[0].address.as_deref(), Some("Lviv"));
    assert_eq!(mailer.attempts().len(), 1);
}

#[tokio::test]
async fn server_error_is_alerted_with_its_message() {
    let store = Arc::new(MemoryStore::default());
    let base_url = spawn_app(state(store.clone(), Arc::new(RecordingMailer::failing())));
    let mut view = RecordingView::default();

    let outcome = FormController::new(&base_url).submit(&form(), &mut view).await;

    assert_eq!(outcome, SubmitOutcome::Failed("failed to send email".to_string()));
    assert_eq!(view.alerts, vec!["failed to send email".to_string()]);
    assert!(view.messages.is_empty());
    assert_eq!(store.records().len(), 1);
}

#[tokio::test]
async fn non_json_answer_falls_back_to_generic_alert() {
    // Something that answers HTTP but not with the service's JSON.
    let app = axum::Router::new().route(
        "/transaction",
        axum::routing::post(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(axum::Server::from_tcp(listener).unwrap().serve(app.into_make_service()));

    let mut view = RecordingView::default();
    let outcome = FormController::new(&format!("http://{}", addr))
        .submit(&form(), &mut view)
        .await;

    assert_eq!(outcome, SubmitOutcome::Failed(GENERIC_FAILURE.to_string()));
    assert_eq!(view.alerts, vec![GENERIC_FAILURE.to_string()]);
}
