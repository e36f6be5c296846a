//! Navigation bar: identity display and the customer ticket counter.
//!
//! The counter is the one piece of cross-view state: it refreshes whenever a
//! `TicketBooked` notice arrives on the bus, not just when this bar's owner
//! re-fetches.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::NavbarState;
pub use update::handle_event;
