//! UI effect types.
//!
//! Effects are commands returned by the reducer for the runtime to execute:
//! HTTP requests, session persistence, and bus publishes. The reducer itself
//! never performs I/O.

use turnstile_core::forms::{LoginForm, SignupForm};
use turnstile_core::models::{EventPayload, User};

/// Commands executed by the runtime after each reducer call.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    /// POST /login with a validated form.
    Login(LoginForm),
    /// POST /users with a validated form.
    Signup(SignupForm),
    /// Write the identity to the session store.
    PersistSession(User),
    /// Remove the persisted session.
    ClearSession,
    /// GET the full event collection.
    FetchEvents,
    /// GET a single event.
    FetchEvent { id: i64 },
    /// POST a new event (admin).
    CreateEvent { payload: EventPayload },
    /// PATCH an existing event (admin).
    UpdateEvent { id: i64, payload: EventPayload },
    /// DELETE an event (admin).
    DeleteEvent { id: i64 },
    /// POST a ticket booking.
    BookTicket { user_id: i64, event_id: i64 },
    /// GET the user's tickets.
    FetchTickets { user_id: i64 },
    /// GET the admin's created events.
    FetchCreatedEvents { user_id: i64 },
    /// DELETE a ticket.
    CancelTicket { id: i64 },
    /// GET the user's tickets just for the navbar counter.
    FetchTicketCount { user_id: i64 },
    /// Publish a ticket-booked notice on the bus.
    PublishTicketBooked { event_id: i64 },
}

impl UiEffect {
    /// Login/Signup forms carry a password; keep it out of Debug-derived
    /// logging at call sites that trace effects.
    pub fn kind(&self) -> &'static str {
        match self {
            UiEffect::Login(_) => "login",
            UiEffect::Signup(_) => "signup",
            UiEffect::PersistSession(_) => "persist-session",
            UiEffect::ClearSession => "clear-session",
            UiEffect::FetchEvents => "fetch-events",
            UiEffect::FetchEvent { .. } => "fetch-event",
            UiEffect::CreateEvent { .. } => "create-event",
            UiEffect::UpdateEvent { .. } => "update-event",
            UiEffect::DeleteEvent { .. } => "delete-event",
            UiEffect::BookTicket { .. } => "book-ticket",
            UiEffect::FetchTickets { .. } => "fetch-tickets",
            UiEffect::FetchCreatedEvents { .. } => "fetch-created-events",
            UiEffect::CancelTicket { .. } => "cancel-ticket",
            UiEffect::FetchTicketCount { .. } => "fetch-ticket-count",
            UiEffect::PublishTicketBooked { .. } => "publish-ticket-booked",
        }
    }
}
