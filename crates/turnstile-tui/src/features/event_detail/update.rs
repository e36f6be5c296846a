//! Event detail view reducer.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};

use super::state::{BookingState, CONFIRMATION_TTL};
use crate::common::Fetch;
use crate::effects::UiEffect;
use crate::events::DetailUiEvent;
use crate::route::Route;
use crate::state::{AppState, StatusLevel};
use crate::update;

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => update::navigate(app, Route::Events),
        KeyCode::Char('q') => {
            app.should_quit = true;
            vec![]
        }
        KeyCode::Char('p') => update::navigate(app, Route::Profile),
        KeyCode::Char('r') if app.detail.event.error().is_some() => {
            let Some(id) = app.detail.id else {
                return vec![];
            };
            app.detail.event = Fetch::Loading;
            vec![UiEffect::FetchEvent { id }]
        }
        KeyCode::Char('b') => book(app),
        _ => vec![],
    }
}

/// Fires a booking request for the loaded event, unless one is already in
/// flight or the user is not a customer.
fn book(app: &mut AppState) -> Vec<UiEffect> {
    let Some(user) = &app.session else {
        return vec![];
    };
    if user.role.is_admin() {
        return vec![];
    }
    if app.detail.booking.is_submitting() {
        return vec![];
    }
    let Some(event) = app.detail.event.ready() else {
        return vec![];
    };

    let effects = vec![UiEffect::BookTicket {
        user_id: user.id,
        event_id: event.id,
    }];
    app.detail.booking = BookingState::Submitting;
    effects
}

pub fn handle_event(app: &mut AppState, event: DetailUiEvent) -> Vec<UiEffect> {
    match event {
        DetailUiEvent::Loaded(event) => {
            // Drop results that arrive after navigating elsewhere.
            if app.route == Route::EventDetail(event.id) {
                app.detail.event = Fetch::Ready(event);
            }
            vec![]
        }
        DetailUiEvent::LoadFailed { id, error } => {
            if app.route == Route::EventDetail(id) {
                app.detail.event = Fetch::Failed(error);
            }
            vec![]
        }
        DetailUiEvent::Booked(ticket) => {
            app.detail.booking = BookingState::Confirmed {
                until: Instant::now() + CONFIRMATION_TTL,
            };
            let event_id = ticket.event_id().or(app.detail.id);
            match event_id {
                Some(event_id) => vec![UiEffect::PublishTicketBooked { event_id }],
                None => vec![],
            }
        }
        DetailUiEvent::BookFailed(error) => {
            app.detail.booking = BookingState::Idle;
            app.set_status(StatusLevel::Error, format!("Booking failed: {error}"));
            vec![]
        }
    }
}

/// Expires the confirmation banner.
pub fn tick(app: &mut AppState) {
    if let BookingState::Confirmed { until } = app.detail.booking
        && Instant::now() >= until
    {
        app.detail.booking = BookingState::Idle;
    }
}
