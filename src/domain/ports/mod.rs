use crate::domain::models::event::{Event, EventSummary, NewEvent};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<EventSummary>, AppError>;
    async fn get(&self, event_id: &str) -> Result<Event, AppError>;
    async fn create(&self, token: &str, event: &NewEvent) -> Result<Event, AppError>;
}

#[async_trait]
pub trait ReservationsApi: Send + Sync {
    async fn reserve(&self, token: &str, event_id: &str) -> Result<(), AppError>;
    async fn cancel(&self, token: &str, event_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn register(&self, email: &str, password: &str) -> Result<(), AppError>;
    /// Returns the bearer token issued by the remote API.
    async fn login(&self, email: &str, password: &str) -> Result<String, AppError>;
}

/// Local persistent storage for the viewer's credentials: the bearer token
/// under one key and the identity email under another. Last-writer-wins,
/// single-user.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Result<Option<String>, AppError>;
    fn email(&self) -> Result<Option<String>, AppError>;
    fn store_login(&self, token: &str, email: &str) -> Result<(), AppError>;
    /// Logout removes the token. The cached email is left in place.
    fn clear_token(&self) -> Result<(), AppError>;
}
