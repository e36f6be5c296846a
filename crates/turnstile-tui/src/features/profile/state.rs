//! Profile view state.

use turnstile_core::models::{Event, Ticket};

use crate::common::Fetch;

/// The profile view slice. Only one of the two collections is fetched,
/// depending on the session role.
#[derive(Debug, Default)]
pub struct ProfileState {
    /// Booked tickets (customer sessions).
    pub tickets: Fetch<Vec<Ticket>>,
    /// Created events (admin sessions).
    pub created: Fetch<Vec<Event>>,
    /// Cursor into whichever list is showing.
    pub selected: usize,
}

impl ProfileState {
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.tickets.ready().and_then(|t| t.get(self.selected))
    }

    pub fn clamp_selected(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
