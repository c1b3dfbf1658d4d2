use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub date: DateTime<Utc>,
    pub location: &'a str,
    pub capacity: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservePayload<'a> {
    pub event_id: &'a str,
}

#[derive(Serialize)]
pub struct CredentialsPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "token")]
    pub access_token: String,
}

#[derive(Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}
