use crate::console::prompt;
use crate::domain::services::event_form::{self, EventDraft};
use crate::error::AppError;
use crate::state::AppState;
use tracing::error;

pub async fn run(state: &AppState) -> Result<(), AppError> {
    println!("\n=== Create a new event === (leave title empty to abort)\n");

    let title = prompt("Title: ")?;
    if title.is_empty() {
        return Ok(());
    }

    let draft = EventDraft {
        title,
        description: prompt("Description: ")?,
        date: prompt("Date and time (YYYY-MM-DDTHH:MM): ")?,
        location: prompt("Location: ")?,
        capacity: prompt("Capacity: ")?,
    };

    match event_form::submit(
        state.events_api.as_ref(),
        state.session_store.as_ref(),
        &draft,
    )
    .await
    {
        Ok(event) => println!("Event '{}' created.", event.title),
        Err(e @ (AppError::Validation(_) | AppError::NotLoggedIn)) => {
            println!("{}", e.user_message());
        }
        Err(e) => {
            error!("event creation failed: {e}");
            println!("Something went wrong while creating the event.");
        }
    }
    Ok(())
}
