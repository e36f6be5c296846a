//! Event detail view: single-event fetch plus customer booking.

mod render;
mod state;
mod update;

pub use render::render;
pub use state::{BookingState, CONFIRMATION_TTL, DetailState};
pub use update::{handle_event, handle_key, tick};
