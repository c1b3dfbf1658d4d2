use crate::domain::models::event::{Event, EventSummary, NewEvent};
use crate::domain::ports::EventsApi;
use crate::error::AppError;
use crate::infra::http::dtos::CreateEventPayload;
use crate::infra::http::reject;
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

/// Event endpoints live on two bases: the directory listing on one, the
/// detail and creation routes on the other. Both default to the same host
/// but stay independently configurable.
pub struct HttpEventsApi {
    client: Client,
    directory_url: String,
    api_url: String,
}

impl HttpEventsApi {
    pub fn new(client: Client, directory_url: String, api_url: String) -> Self {
        Self {
            client,
            directory_url,
            api_url,
        }
    }
}

#[async_trait]
impl EventsApi for HttpEventsApi {
    async fn list(&self) -> Result<Vec<EventSummary>, AppError> {
        let res = self
            .client
            .get(format!("{}/events", self.directory_url))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(reject(res).await);
        }
        Ok(res.json().await?)
    }

    // The detail route has no /events prefix.
    async fn get(&self, event_id: &str) -> Result<Event, AppError> {
        let res = self
            .client
            .get(format!("{}/{}", self.api_url, event_id))
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(reject(res).await);
        }
        Ok(res.json().await?)
    }

    async fn create(&self, token: &str, event: &NewEvent) -> Result<Event, AppError> {
        let payload = CreateEventPayload {
            title: &event.title,
            description: &event.description,
            date: event.date,
            location: &event.location,
            capacity: event.capacity,
        };

        let res = self
            .client
            .post(format!("{}/events", self.api_url))
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;

        if !res.status().is_success() {
            return Err(reject(res).await);
        }

        let created: Event = res.json().await?;
        info!("event created: {} ({})", created.title, created.id);
        Ok(created)
    }
}
