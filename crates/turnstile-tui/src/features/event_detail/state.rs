//! Event detail view state.

use std::time::{Duration, Instant};

use turnstile_core::models::Event;

use crate::common::Fetch;

/// How long the booking confirmation banner stays up.
pub const CONFIRMATION_TTL: Duration = Duration::from_secs(3);

/// Booking lifecycle for the detail view.
///
/// `Submitting` gates the book action: a second press while a request is in
/// flight is a no-op, so a double-press cannot create duplicate tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingState {
    #[default]
    Idle,
    Submitting,
    /// Booked; the confirmation banner shows until the deadline.
    Confirmed { until: Instant },
}

impl BookingState {
    pub fn is_submitting(self) -> bool {
        matches!(self, BookingState::Submitting)
    }
}

/// The detail view slice.
#[derive(Debug, Default)]
pub struct DetailState {
    /// Route parameter this view was mounted with.
    pub id: Option<i64>,
    pub event: Fetch<Event>,
    pub booking: BookingState,
}

impl DetailState {
    /// Fresh mount for an event id; the fetch starts immediately.
    pub fn mount(id: i64) -> Self {
        Self {
            id: Some(id),
            event: Fetch::Loading,
            booking: BookingState::Idle,
        }
    }

    /// Whether the confirmation banner is currently visible.
    pub fn banner_active(&self) -> bool {
        matches!(self.booking, BookingState::Confirmed { until } if Instant::now() < until)
    }
}
