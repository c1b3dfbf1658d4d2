use crate::domain::ports::AuthApi;
use crate::error::AppError;
use crate::infra::http::dtos::{CredentialsPayload, LoginResponse};
use crate::infra::http::reject;
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

pub struct HttpAuthApi {
    client: Client,
    api_url: String,
}

impl HttpAuthApi {
    pub fn new(client: Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn register(&self, email: &str, password: &str) -> Result<(), AppError> {
        let res = self
            .client
            .post(format!("{}/auth/register", self.api_url))
            .json(&CredentialsPayload { email, password })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(reject(res).await);
        }
        info!("registered account for {email}");
        Ok(())
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let res = self
            .client
            .post(format!("{}/auth/login", self.api_url))
            .json(&CredentialsPayload { email, password })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(reject(res).await);
        }

        let body: LoginResponse = res.json().await?;
        Ok(body.access_token)
    }
}
