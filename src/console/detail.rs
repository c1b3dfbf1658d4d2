use crate::console::{alert, prompt};
use crate::domain::services::reservation_flow::{
    DetailState, EventDetail, EventView, Membership, ReservationAction,
};
use crate::error::AppError;
use crate::state::AppState;

pub async fn show(state: &AppState, event_id: &str) -> Result<(), AppError> {
    let mut controller = EventDetail::new(
        state.events_api.clone(),
        state.reservations_api.clone(),
        state.session_store.clone(),
    );

    println!("Loading event...");
    controller.load(event_id).await;

    loop {
        match controller.state() {
            DetailState::Loading => return Ok(()),
            DetailState::Error(message) => {
                println!("{message}");
                return Ok(());
            }
            DetailState::Ready(view) => render_event(view),
        }

        match controller.available_action() {
            ReservationAction::Hidden => {
                prompt("Press Enter to go back... ")?;
                return Ok(());
            }
            ReservationAction::SoldOut => {
                println!("No tickets available.");
                prompt("Press Enter to go back... ")?;
                return Ok(());
            }
            ReservationAction::Reserve => {
                let answer = prompt("[r]eserve a ticket or [b]ack? ")?;
                match answer.as_str() {
                    "r" | "reserve" => {
                        if let Err(e) = controller.reserve(event_id).await {
                            alert(&format!("Could not reserve: {}", e.user_message()));
                        }
                    }
                    _ => return Ok(()),
                }
            }
            ReservationAction::Cancel => {
                let answer = prompt("[c]ancel your reservation or [b]ack? ")?;
                match answer.as_str() {
                    "c" | "cancel" => {
                        if let Err(e) = controller.cancel(event_id).await {
                            alert(&format!("Could not cancel: {}", e.user_message()));
                        }
                    }
                    _ => return Ok(()),
                }
            }
        }
    }
}

fn render_event(view: &EventView) {
    let event = &view.event;
    println!("\n=== {} ===\n", event.title);
    println!("{}\n", event.description);
    println!("  Date:              {}", event.date.format("%A, %e %B %Y at %H:%M"));
    println!("  Location:          {}", event.location);
    println!("  Capacity:          {}", event.capacity);
    println!("  Tickets available: {}", event.available_tickets);
    println!("\n  Organizer: {}", event.organizer);
    println!("  Created:   {}", event.created_at.format("%e %b %Y"));

    if view.membership == Membership::Reserved {
        println!("\nYou have a reservation for this event.");
    }
}
