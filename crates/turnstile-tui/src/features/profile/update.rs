//! Profile view reducer.

use crossterm::event::{KeyCode, KeyEvent};
use turnstile_core::models::Role;

use crate::common::Fetch;
use crate::effects::UiEffect;
use crate::events::ProfileUiEvent;
use crate::route::Route;
use crate::state::{AppState, StatusLevel};
use crate::update;

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(user) = app.session.clone() else {
        return vec![];
    };

    let list_len = match user.role {
        Role::Customer => app.profile.tickets.ready().map_or(0, Vec::len),
        Role::Admin => app.profile.created.ready().map_or(0, Vec::len),
    };

    match key.code {
        KeyCode::Esc | KeyCode::Backspace => update::navigate(app, Route::Events),
        KeyCode::Char('q') => {
            app.should_quit = true;
            vec![]
        }
        KeyCode::Char('l') => update::sign_out(app),
        KeyCode::Up => {
            app.profile.selected = app.profile.selected.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            if list_len > 0 {
                app.profile.selected = (app.profile.selected + 1).min(list_len - 1);
            }
            vec![]
        }
        KeyCode::Char('r') => mount_effects(app, &user.role, user.id),
        KeyCode::Char('c') if user.role == Role::Customer => {
            match app.profile.selected_ticket() {
                Some(ticket) => vec![UiEffect::CancelTicket { id: ticket.id }],
                None => vec![],
            }
        }
        _ => vec![],
    }
}

fn mount_effects(app: &mut AppState, role: &Role, user_id: i64) -> Vec<UiEffect> {
    match role {
        Role::Customer => {
            app.profile.tickets = Fetch::Loading;
            vec![UiEffect::FetchTickets { user_id }]
        }
        Role::Admin => {
            app.profile.created = Fetch::Loading;
            vec![UiEffect::FetchCreatedEvents { user_id }]
        }
    }
}

pub fn handle_event(app: &mut AppState, event: ProfileUiEvent) -> Vec<UiEffect> {
    match event {
        ProfileUiEvent::TicketsLoaded(tickets) => {
            let len = tickets.len();
            app.profile.tickets = Fetch::Ready(tickets);
            app.profile.clamp_selected(len);
            vec![]
        }
        ProfileUiEvent::TicketsFailed(error) => {
            app.profile.tickets = Fetch::Failed(error);
            vec![]
        }
        ProfileUiEvent::CreatedEventsLoaded(events) => {
            let len = events.len();
            app.profile.created = Fetch::Ready(events);
            app.profile.clamp_selected(len);
            vec![]
        }
        ProfileUiEvent::CreatedEventsFailed(error) => {
            app.profile.created = Fetch::Failed(error);
            vec![]
        }
        ProfileUiEvent::Canceled(_) => {
            app.set_status(StatusLevel::Info, "Ticket canceled");
            // Re-fetch rather than patching the local list; the navbar
            // counter refreshes along with it.
            match app.session.as_ref() {
                Some(user) => vec![
                    UiEffect::FetchTickets { user_id: user.id },
                    UiEffect::FetchTicketCount { user_id: user.id },
                ],
                None => vec![],
            }
        }
        ProfileUiEvent::CancelFailed(error) => {
            app.set_status(StatusLevel::Error, format!("Cancel failed: {error}"));
            vec![]
        }
    }
}
