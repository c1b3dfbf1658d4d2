use crate::domain::ports::EventsApi;
use crate::domain::services::session_reader;
use crate::state::AppState;
use tracing::error;

pub async fn render(state: &AppState) {
    println!("\n=== Available events ===\n");

    match session_reader::current_session(state.session_store.as_ref()) {
        Some(session) => println!("Signed in as {}\n", session.email),
        None => println!("Not signed in. Use `register` or `login` to reserve tickets.\n"),
    }

    match state.events_api.list().await {
        Ok(events) if events.is_empty() => println!("No events available."),
        Ok(events) => {
            for event in &events {
                println!(
                    "  {}  {}\n      {} | {} | {} tickets left",
                    event.id,
                    event.title,
                    event.date.format("%a %e %b %Y, %H:%M"),
                    event.location,
                    event.available_tickets,
                );
            }
        }
        Err(e) => {
            error!("failed to load events: {e}");
            println!("Failed to load events.");
        }
    }

    println!("\nCommands: list | show <id> | new | register | login | logout | quit");
}
