//! Effect handlers: pure async functions from an API call to the `UiEvent`
//! carrying its result. The runtime spawns these and forwards the events to
//! the inbox.

use std::sync::Arc;

use turnstile_core::api::ApiClient;
use turnstile_core::forms::{LoginForm, SignupForm};
use turnstile_core::models::EventPayload;

use crate::events::{
    AuthUiEvent, DetailUiEvent, EventsUiEvent, NavbarUiEvent, ProfileUiEvent, UiEvent,
};

pub async fn login(api: Arc<ApiClient>, form: LoginForm) -> UiEvent {
    UiEvent::Auth(AuthUiEvent::LoginFinished(api.login(&form).await))
}

pub async fn signup(api: Arc<ApiClient>, form: SignupForm) -> UiEvent {
    UiEvent::Auth(AuthUiEvent::SignupFinished(api.signup(&form).await))
}

pub async fn fetch_events(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::Events(match api.list_events().await {
        Ok(events) => EventsUiEvent::Loaded(events),
        Err(err) => EventsUiEvent::LoadFailed(err.message()),
    })
}

pub async fn fetch_event(api: Arc<ApiClient>, id: i64) -> UiEvent {
    UiEvent::Detail(match api.event(id).await {
        Ok(event) => DetailUiEvent::Loaded(event),
        Err(err) => DetailUiEvent::LoadFailed {
            id,
            error: err.message(),
        },
    })
}

pub async fn create_event(api: Arc<ApiClient>, payload: EventPayload) -> UiEvent {
    UiEvent::Events(match api.create_event(&payload).await {
        Ok(event) => EventsUiEvent::Saved(event),
        Err(err) => EventsUiEvent::SaveFailed(err.message()),
    })
}

pub async fn update_event(api: Arc<ApiClient>, id: i64, payload: EventPayload) -> UiEvent {
    UiEvent::Events(match api.update_event(id, &payload).await {
        Ok(event) => EventsUiEvent::Saved(event),
        Err(err) => EventsUiEvent::SaveFailed(err.message()),
    })
}

pub async fn delete_event(api: Arc<ApiClient>, id: i64) -> UiEvent {
    UiEvent::Events(match api.delete_event(id).await {
        Ok(()) => EventsUiEvent::Deleted(id),
        Err(err) => EventsUiEvent::DeleteFailed(err.message()),
    })
}

pub async fn book_ticket(api: Arc<ApiClient>, user_id: i64, event_id: i64) -> UiEvent {
    UiEvent::Detail(match api.book_ticket(user_id, event_id).await {
        Ok(ticket) => DetailUiEvent::Booked(ticket),
        Err(err) => DetailUiEvent::BookFailed(err.message()),
    })
}

pub async fn fetch_tickets(api: Arc<ApiClient>, user_id: i64) -> UiEvent {
    UiEvent::Profile(match api.user_tickets(user_id).await {
        Ok(tickets) => ProfileUiEvent::TicketsLoaded(tickets),
        Err(err) => ProfileUiEvent::TicketsFailed(err.message()),
    })
}

pub async fn fetch_created_events(api: Arc<ApiClient>, user_id: i64) -> UiEvent {
    UiEvent::Profile(match api.user_events(user_id).await {
        Ok(events) => ProfileUiEvent::CreatedEventsLoaded(events),
        Err(err) => ProfileUiEvent::CreatedEventsFailed(err.message()),
    })
}

pub async fn cancel_ticket(api: Arc<ApiClient>, id: i64) -> UiEvent {
    UiEvent::Profile(match api.cancel_ticket(id).await {
        Ok(()) => ProfileUiEvent::Canceled(id),
        Err(err) => ProfileUiEvent::CancelFailed(err.message()),
    })
}

/// The navbar counter re-uses the ticket listing and takes its length.
pub async fn fetch_ticket_count(api: Arc<ApiClient>, user_id: i64) -> UiEvent {
    UiEvent::Navbar(match api.user_tickets(user_id).await {
        Ok(tickets) => NavbarUiEvent::TicketCountLoaded(tickets.len()),
        Err(err) => NavbarUiEvent::TicketCountFailed(err.message()),
    })
}
