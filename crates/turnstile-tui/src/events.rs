//! UI event types.
//!
//! Everything that can happen to the application funnels through [`UiEvent`]:
//! terminal input, the tick timer, async results arriving on the inbox, and
//! bus notices. The reducer in `update` is the only consumer.

use turnstile_core::api::ApiError;
use turnstile_core::bus::Notice;
use turnstile_core::models::{Event, Ticket, User};

/// Input to the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic timer: animations, banner/status expiry.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// Auth view async results.
    Auth(AuthUiEvent),
    /// Events view async results.
    Events(EventsUiEvent),
    /// Event detail view async results.
    Detail(DetailUiEvent),
    /// Profile view async results.
    Profile(ProfileUiEvent),
    /// Navigation bar async results.
    Navbar(NavbarUiEvent),
    /// A cross-view notice from the bus.
    Notice(Notice),
}

/// Auth results keep the full [`ApiError`] so the form can distinguish a
/// server-reported message from a transport failure.
#[derive(Debug)]
pub enum AuthUiEvent {
    LoginFinished(Result<User, ApiError>),
    SignupFinished(Result<User, ApiError>),
}

#[derive(Debug)]
pub enum EventsUiEvent {
    Loaded(Vec<Event>),
    LoadFailed(String),
    /// Create or update succeeded; triggers a full collection re-fetch.
    Saved(Event),
    SaveFailed(String),
    Deleted(i64),
    DeleteFailed(String),
}

#[derive(Debug)]
pub enum DetailUiEvent {
    /// Carries the event so stale results for a different route are dropped.
    Loaded(Event),
    LoadFailed { id: i64, error: String },
    Booked(Ticket),
    BookFailed(String),
}

#[derive(Debug)]
pub enum ProfileUiEvent {
    TicketsLoaded(Vec<Ticket>),
    TicketsFailed(String),
    CreatedEventsLoaded(Vec<Event>),
    CreatedEventsFailed(String),
    Canceled(i64),
    CancelFailed(String),
}

#[derive(Debug)]
pub enum NavbarUiEvent {
    TicketCountLoaded(usize),
    TicketCountFailed(String),
}
