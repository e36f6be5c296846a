//! Application state composition.
//!
//! `AppState` combines the session, the current route, one state slice per
//! routed view, and the status line. Each view slice is reset on navigation,
//! mirroring a fresh mount: there is no shared cache, and every view
//! re-fetches its own data.

use std::time::{Duration, Instant};

use turnstile_core::models::{Role, User};

use crate::features::auth::AuthState;
use crate::features::event_detail::DetailState;
use crate::features::events::EventsState;
use crate::features::navbar::NavbarState;
use crate::features::profile::ProfileState;
use crate::route::{self, Route};

/// How long a status-line message stays visible.
pub const STATUS_TTL: Duration = Duration::from_secs(6);

/// Combined application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The signed-in identity, if any.
    pub session: Option<User>,
    /// Current routed view.
    pub route: Route,
    /// Navigation bar state (identity display, ticket counter).
    pub navbar: NavbarState,
    /// Auth view slice.
    pub auth: AuthState,
    /// Events view slice.
    pub events: EventsState,
    /// Event detail view slice.
    pub detail: DetailState,
    /// Profile view slice.
    pub profile: ProfileState,
    /// Transient status-line message.
    pub status: Option<StatusMessage>,
    /// Spinner animation frame counter for loading placeholders.
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the initial state from the restored session (if any).
    ///
    /// The initial route is the guarded events view: straight to `Events`
    /// with a session, `Auth` without one.
    pub fn new(session: Option<User>) -> Self {
        let route = route::guard(Route::Events, session.as_ref());
        Self {
            should_quit: false,
            session,
            route,
            navbar: NavbarState::default(),
            auth: AuthState::default(),
            events: EventsState::default(),
            detail: DetailState::default(),
            profile: ProfileState::default(),
            status: None,
            spinner_frame: 0,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|user| user.role)
    }

    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            shown_at: Instant::now(),
        });
    }

    /// Drops the status message once its TTL has elapsed.
    pub fn expire_status(&mut self) {
        if let Some(status) = &self.status
            && status.shown_at.elapsed() >= STATUS_TTL
        {
            self.status = None;
        }
    }
}

/// A transient message in the status line.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}
