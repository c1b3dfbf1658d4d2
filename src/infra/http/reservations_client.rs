use crate::domain::ports::ReservationsApi;
use crate::error::AppError;
use crate::infra::http::dtos::ReservePayload;
use crate::infra::http::reject;
use async_trait::async_trait;
use reqwest::Client;

/// Reservation mutations. A failed call is reported once, never retried;
/// the caller's state is left to the controller.
pub struct HttpReservationsApi {
    client: Client,
    api_url: String,
}

impl HttpReservationsApi {
    pub fn new(client: Client, api_url: String) -> Self {
        Self { client, api_url }
    }
}

#[async_trait]
impl ReservationsApi for HttpReservationsApi {
    async fn reserve(&self, token: &str, event_id: &str) -> Result<(), AppError> {
        let res = self
            .client
            .post(format!("{}/reservations/{}", self.api_url, event_id))
            .bearer_auth(token)
            .json(&ReservePayload { event_id })
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(reject(res).await);
        }
        // The response carries the reservation record; the client has no
        // use for it beyond the success signal.
        Ok(())
    }

    async fn cancel(&self, token: &str, event_id: &str) -> Result<(), AppError> {
        let res = self
            .client
            .delete(format!("{}/reservations/{}", self.api_url, event_id))
            .bearer_auth(token)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(reject(res).await);
        }
        Ok(())
    }
}
