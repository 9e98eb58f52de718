use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
    pub rate_limit_per_sec: Option<u64>,

    pub database_url: String,

    pub mail_host: String,
    pub mail_user: String,
    pub mail_pass: String,
    pub mail_recipient: String,

    pub cleanup_interval_secs: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}
