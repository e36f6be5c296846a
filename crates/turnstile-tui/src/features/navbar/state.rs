//! Navigation bar state.

/// Navbar slice: just the ticket counter (identity renders from the session).
#[derive(Debug, Default)]
pub struct NavbarState {
    /// Number of booked tickets, once fetched (customer sessions only).
    pub ticket_count: Option<usize>,
}

impl NavbarState {
    pub fn reset(&mut self) {
        self.ticket_count = None;
    }
}
