#![allow(dead_code)]

use std::{
    net::{SocketAddr, TcpListener},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use uuid::Uuid;
use withdrawal_api::{
    app::envy::Envy,
    mail::{errors::MailError, service::Mailer},
    transactions::{models::transaction::Transaction, store::TransactionStore},
    AppState,
};

pub const RECIPIENT: &str = "operator@example.com";

/// In-memory store with a switch to make every call fail.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Transaction>>,
    failing: AtomicBool,
    panicking: AtomicBool,
    cleanup_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        store
    }

    /// A store whose `insert` panics; cleanup still works.
    pub fn panicking() -> Self {
        let store = Self::default();
        store.panicking.store(true, Ordering::SeqCst);
        store
    }

    pub fn cleanup_calls(&self) -> usize {
        self.cleanup_calls.load(Ordering::SeqCst)
    }

    pub fn records(&self) -> Vec<Transaction> {
        self.records.lock().unwrap().clone()
    }

    pub fn seed(&self, nickname: &str, timestamp: i64) {
        self.records.lock().unwrap().push(Transaction {
            id: Uuid::new_v4().to_string(),
            nickname: nickname.to_string(),
            phone: "0".to_string(),
            amount: 30.0,
            address: None,
            card_number: "0000".to_string(),
            timestamp,
        });
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn insert(&self, transaction: Transaction) -> Result<Transaction, sqlx::Error> {
        if self.panicking.load(Ordering::SeqCst) {
            panic!("store exploded");
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }

        self.records.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn delete_older_than(&self, cutoff: i64) -> Result<u64, sqlx::Error> {
        self.cleanup_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|record| record.timestamp >= cutoff);

        Ok((before - records.len()) as u64)
    }
}

#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Records every attempted send; optionally fails them all.
#[derive(Default)]
pub struct RecordingMailer {
    attempts: Mutex<Vec<SentMail>>,
    failing: AtomicBool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        let mailer = Self::default();
        mailer.failing.store(true, Ordering::SeqCst);
        mailer
    }

    pub fn attempts(&self) -> Vec<SentMail> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        self.attempts.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        if self.failing.load(Ordering::SeqCst) {
            let e = "not an address".parse::<lettre::Address>().unwrap_err();
            return Err(MailError::Address(e));
        }

        Ok(())
    }
}

pub fn envy() -> Envy {
    Envy {
        app_env: "test".to_string(),
        port: None,
        cors_origin: None,
        rate_limit_per_sec: Some(1000),
        database_url: "postgres://unused".to_string(),
        mail_host: "smtp.example.com".to_string(),
        mail_user: "service@example.com".to_string(),
        mail_pass: "secret".to_string(),
        mail_recipient: RECIPIENT.to_string(),
        cleanup_interval_secs: None,
    }
}

pub fn state(store: Arc<MemoryStore>, mailer: Arc<RecordingMailer>) -> AppState {
    AppState {
        store,
        mailer,
        envy: Arc::new(envy()),
    }
}

/// Serves the router on an ephemeral local port and returns its base url.
pub fn spawn_app(state: AppState) -> String {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    let app = withdrawal_api::router(state);
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());

    tokio::spawn(server);

    format!("http://{}", addr)
}
