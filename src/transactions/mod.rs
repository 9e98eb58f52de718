pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;
pub mod store;

/// Smallest amount a withdrawal request may ask for.
pub static MIN_AMOUNT: f64 = 30.0;

/// Records older than this many seconds are removed by cleanup.
pub static RETENTION_SECS: i64 = 24 * 60 * 60;
