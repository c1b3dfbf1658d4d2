use crate::config::Config;
use crate::infra::http::auth_client::HttpAuthApi;
use crate::infra::http::events_client::HttpEventsApi;
use crate::infra::http::reservations_client::HttpReservationsApi;
use crate::infra::storage::file_session_store::FileSessionStore;
use crate::state::AppState;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub fn bootstrap_state(config: &Config) -> AppState {
    let client = Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new());

    AppState {
        config: config.clone(),
        events_api: Arc::new(HttpEventsApi::new(
            client.clone(),
            config.directory_url.clone(),
            config.api_url.clone(),
        )),
        reservations_api: Arc::new(HttpReservationsApi::new(
            client.clone(),
            config.api_url.clone(),
        )),
        auth_api: Arc::new(HttpAuthApi::new(client, config.api_url.clone())),
        session_store: Arc::new(FileSessionStore::new(config.session_file.clone())),
    }
}
