use crate::domain::models::event::Event;
use crate::domain::models::session::Session;
use crate::domain::ports::{EventsApi, ReservationsApi, SessionStore};
use crate::domain::services::session_reader;
use crate::error::AppError;
use std::sync::Arc;
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Reserved,
    NotReserved,
}

/// The single action the detail screen may offer. `Hidden` covers the
/// anonymous viewer; `SoldOut` replaces the reserve trigger entirely when
/// no tickets remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationAction {
    Reserve,
    Cancel,
    SoldOut,
    Hidden,
}

#[derive(Debug)]
pub struct EventView {
    pub event: Event,
    pub viewer: Option<Session>,
    pub membership: Membership,
    pub action_in_progress: bool,
}

#[derive(Debug)]
pub enum DetailState {
    Loading,
    Error(String),
    Ready(EventView),
}

/// Controller for the event detail screen. Loads one event, derives the
/// viewer's reservation membership, and exposes reserve/cancel mutations
/// that update the local ticket count optimistically. The count is never
/// reconciled with a fresh server read afterwards, so it can drift from
/// server truth until the next full load.
pub struct EventDetail {
    events: Arc<dyn EventsApi>,
    reservations: Arc<dyn ReservationsApi>,
    store: Arc<dyn SessionStore>,
    state: DetailState,
}

impl EventDetail {
    pub fn new(
        events: Arc<dyn EventsApi>,
        reservations: Arc<dyn ReservationsApi>,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            events,
            reservations,
            store,
            state: DetailState::Loading,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub async fn load(&mut self, event_id: &str) {
        self.state = DetailState::Loading;

        match self.events.get(event_id).await {
            Ok(event) => {
                let viewer = session_reader::current_session(self.store.as_ref());
                // Membership is checked against the cached email key, not
                // the decoded token, matching the stored-identity split.
                let membership = match self.store.email() {
                    Ok(Some(email)) if event.reserved_for(&email) => Membership::Reserved,
                    _ => Membership::NotReserved,
                };
                self.state = DetailState::Ready(EventView {
                    event,
                    viewer,
                    membership,
                    action_in_progress: false,
                });
            }
            Err(e) => {
                error!("failed to load event {event_id}: {e}");
                self.state = DetailState::Error("Could not load the event".to_string());
            }
        }
    }

    /// Which trigger the screen should render, if any.
    pub fn available_action(&self) -> ReservationAction {
        let DetailState::Ready(view) = &self.state else {
            return ReservationAction::Hidden;
        };
        if view.viewer.is_none() {
            return ReservationAction::Hidden;
        }
        match view.membership {
            Membership::Reserved => ReservationAction::Cancel,
            Membership::NotReserved if !view.event.is_sold_out() => ReservationAction::Reserve,
            Membership::NotReserved => ReservationAction::SoldOut,
        }
    }

    pub async fn reserve(&mut self, event_id: &str) -> Result<(), AppError> {
        let token = self.begin_action()?;
        let result = self.reservations.reserve(&token, event_id).await;
        self.finish_action(&result, |view| {
            view.membership = Membership::Reserved;
            view.event.available_tickets -= 1;
        });
        result
    }

    pub async fn cancel(&mut self, event_id: &str) -> Result<(), AppError> {
        let token = self.begin_action()?;
        let result = self.reservations.cancel(&token, event_id).await;
        self.finish_action(&result, |view| {
            view.membership = Membership::NotReserved;
            view.event.available_tickets += 1;
        });
        result
    }

    /// Requires a stored token and a loaded event, and sets the in-progress
    /// flag. The flag is the only concurrency guard: while it is set the
    /// trigger is disabled, nothing is cancelled or deduplicated.
    fn begin_action(&mut self) -> Result<String, AppError> {
        let token = self.store.token()?.ok_or(AppError::NotLoggedIn)?;
        let DetailState::Ready(view) = &mut self.state else {
            return Err(AppError::Validation("no event loaded".to_string()));
        };
        if view.action_in_progress {
            return Err(AppError::Validation("action already in progress".to_string()));
        }
        view.action_in_progress = true;
        Ok(token)
    }

    fn finish_action(&mut self, result: &Result<(), AppError>, apply: impl FnOnce(&mut EventView)) {
        if let DetailState::Ready(view) = &mut self.state {
            view.action_in_progress = false;
            match result {
                Ok(()) => apply(view),
                // Failure leaves membership and count untouched.
                Err(e) => error!("reservation call failed: {e}"),
            }
        }
    }
}
