use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CleanupResult {
    pub message: String,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}
