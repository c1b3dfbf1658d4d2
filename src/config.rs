use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    pub directory_url: String, // base for the event listing
    pub api_url: String,       // base for detail, reservations and auth
    pub session_file: PathBuf,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            directory_url: env::var("EVENTS_DIRECTORY_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            api_url: env::var("EVENTS_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            session_file: env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".eventdesk-session.json")),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}
