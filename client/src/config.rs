use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub session_file: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let raw_base_url =
            env::var("STAFFDESK_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        let base_url = raw_base_url.trim_end_matches('/').to_string();

        let session_file = env::var("STAFFDESK_SESSION_FILE")
            .unwrap_or_else(|_| ".staffdesk-session.json".to_string());

        let raw_timeout =
            env::var("STAFFDESK_HTTP_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string());
        let http_timeout_secs: u64 = raw_timeout
            .parse()
            .map_err(|_| anyhow!("Invalid STAFFDESK_HTTP_TIMEOUT_SECS value: {}", raw_timeout))?;
        if http_timeout_secs == 0 {
            return Err(anyhow!("STAFFDESK_HTTP_TIMEOUT_SECS must be positive"));
        }

        Ok(Config {
            base_url,
            session_file,
            http_timeout_secs,
        })
    }
}
