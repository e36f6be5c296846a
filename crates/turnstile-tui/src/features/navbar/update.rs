//! Navbar reducer.

use crate::effects::UiEffect;
use crate::events::NavbarUiEvent;
use crate::state::AppState;

pub fn handle_event(app: &mut AppState, event: NavbarUiEvent) -> Vec<UiEffect> {
    match event {
        NavbarUiEvent::TicketCountLoaded(count) => {
            app.navbar.ticket_count = Some(count);
        }
        NavbarUiEvent::TicketCountFailed(error) => {
            // Keep whatever count we last had; the next notice retries.
            tracing::warn!(%error, "failed to refresh ticket counter");
        }
    }
    vec![]
}
