use crate::config::Config;
use crate::domain::ports::{AuthApi, EventsApi, ReservationsApi, SessionStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub events_api: Arc<dyn EventsApi>,
    pub reservations_api: Arc<dyn ReservationsApi>,
    pub auth_api: Arc<dyn AuthApi>,
    pub session_store: Arc<dyn SessionStore>,
}
