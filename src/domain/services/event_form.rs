use crate::domain::models::event::{Event, NewEvent};
use crate::domain::ports::{EventsApi, SessionStore};
use crate::error::AppError;
use chrono::NaiveDateTime;
use tracing::error;

/// Raw field values as entered on the creation form, before validation.
#[derive(Debug, Default, Clone)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub capacity: String,
}

const DATE_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn validate(draft: &EventDraft) -> Result<NewEvent, AppError> {
    if draft.title.trim().is_empty()
        || draft.description.trim().is_empty()
        || draft.date.trim().is_empty()
        || draft.location.trim().is_empty()
        || draft.capacity.trim().is_empty()
    {
        return Err(AppError::Validation("Please fill in all fields".to_string()));
    }

    let capacity: i32 = draft
        .capacity
        .trim()
        .parse()
        .map_err(|_| AppError::Validation("Capacity must be greater than 0".to_string()))?;
    if capacity <= 0 {
        return Err(AppError::Validation("Capacity must be greater than 0".to_string()));
    }

    let date = NaiveDateTime::parse_from_str(draft.date.trim(), DATE_INPUT_FORMAT)
        .map_err(|_| AppError::Validation("Date must look like 2025-12-31T20:00".to_string()))?
        .and_utc();

    Ok(NewEvent {
        title: draft.title.trim().to_string(),
        description: draft.description.trim().to_string(),
        date,
        location: draft.location.trim().to_string(),
        capacity,
    })
}

/// Submits the creation form: token first, then field validation, then the
/// remote call. Both client-side rejections happen before any network I/O.
pub async fn submit(
    events: &dyn EventsApi,
    store: &dyn SessionStore,
    draft: &EventDraft,
) -> Result<Event, AppError> {
    let token = store.token()?.ok_or(AppError::NotLoggedIn)?;
    let new_event = validate(draft)?;

    events.create(&token, &new_event).await.map_err(|e| {
        error!("event creation failed: {e}");
        e
    })
}
