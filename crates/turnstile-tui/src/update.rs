//! The main reducer.
//!
//! All state mutations happen here or in the feature reducers this module
//! dispatches to. The runtime calls `update(app, event)` and executes the
//! returned effects; nothing in this module performs I/O.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use turnstile_core::bus::Notice;
use turnstile_core::models::{Role, User};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{auth, event_detail, events, navbar, profile};
use crate::route::{self, Route};
use crate::state::AppState;

/// Applies one event to the state, returning effects for the runtime.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            app.expire_status();
            event_detail::tick(app);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Auth(event) => auth::handle_event(app, event),
        UiEvent::Events(event) => events::handle_event(app, event),
        UiEvent::Detail(event) => event_detail::handle_event(app, event),
        UiEvent::Profile(event) => profile::handle_event(app, event),
        UiEvent::Navbar(event) => navbar::handle_event(app, event),
        UiEvent::Notice(notice) => handle_notice(app, &notice),
    }
}

/// Effects to run right after startup: mount the initial route and seed the
/// navbar counter.
pub fn startup_effects(app: &mut AppState) -> Vec<UiEffect> {
    let mut effects = navigate(app, app.route);
    if let Some(user) = &app.session
        && user.role == Role::Customer
    {
        effects.push(UiEffect::FetchTicketCount { user_id: user.id });
    }
    effects
}

/// Switches routes (through the session guard) and returns the new view's
/// mount effects. The target slice is reset, mirroring a fresh mount: every
/// view re-fetches its own data.
pub fn navigate(app: &mut AppState, requested: Route) -> Vec<UiEffect> {
    let destination = route::guard(requested, app.session.as_ref());
    app.route = destination;

    match destination {
        Route::Auth => {
            app.auth = auth::AuthState::default();
            vec![]
        }
        Route::Events => {
            app.events = events::EventsState::default();
            vec![UiEffect::FetchEvents]
        }
        Route::EventDetail(id) => {
            app.detail = event_detail::DetailState::mount(id);
            vec![UiEffect::FetchEvent { id }]
        }
        Route::Profile => {
            app.profile = profile::ProfileState::default();
            match app.session.as_ref() {
                Some(user) if user.role == Role::Admin => {
                    vec![UiEffect::FetchCreatedEvents { user_id: user.id }]
                }
                Some(user) => vec![UiEffect::FetchTickets { user_id: user.id }],
                None => vec![],
            }
        }
    }
}

/// Installs a fresh session and navigates to the events view.
pub fn signed_in(app: &mut AppState, user: User) -> Vec<UiEffect> {
    let mut effects = vec![UiEffect::PersistSession(user.clone())];
    let is_customer = user.role == Role::Customer;
    let user_id = user.id;
    app.session = Some(user);
    app.navbar.reset();
    effects.extend(navigate(app, Route::Events));
    if is_customer {
        effects.push(UiEffect::FetchTicketCount { user_id });
    }
    effects
}

/// Drops the session and returns to the auth view.
pub fn sign_out(app: &mut AppState) -> Vec<UiEffect> {
    app.session = None;
    app.navbar.reset();
    let mut effects = vec![UiEffect::ClearSession];
    effects.extend(navigate(app, Route::Auth));
    effects
}

fn handle_notice(app: &mut AppState, notice: &Notice) -> Vec<UiEffect> {
    match notice {
        Notice::TicketBooked { .. } => match app.session.as_ref() {
            // The navbar counter is customer-only; re-fetch it from the
            // server rather than incrementing locally.
            Some(user) if user.role == Role::Customer => {
                vec![UiEffect::FetchTicketCount { user_id: user.id }]
            }
            _ => vec![],
        },
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere, regardless of focus.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return vec![];
    }

    match app.route {
        Route::Auth => auth::handle_key(app, key),
        Route::Events => events::handle_key(app, key),
        Route::EventDetail(_) => event_detail::handle_key(app, key),
        Route::Profile => profile::handle_key(app, key),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use crossterm::event::KeyModifiers;
    use turnstile_core::models::Event as ApiEvent;
    use turnstile_core::models::{Role, Ticket, User};

    use super::*;
    use crate::common::Fetch;
    use crate::events::{AuthUiEvent, DetailUiEvent, EventsUiEvent};
    use crate::features::event_detail::BookingState;
    use crate::features::events::EventFormState;

    fn customer() -> User {
        User {
            id: 2,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Customer,
        }
    }

    fn admin() -> User {
        User {
            id: 1,
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            role: Role::Admin,
        }
    }

    fn sample_event(id: i64) -> ApiEvent {
        ApiEvent {
            id,
            title: "Launch".to_string(),
            date: NaiveDateTime::parse_from_str("2024-05-01T10:00", "%Y-%m-%dT%H:%M").unwrap(),
            location: "HQ".to_string(),
            description: None,
            price: 0.0,
            category: "Corporate / Business".to_string(),
            image: None,
            created_by: Some(1),
        }
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    #[test]
    fn test_initial_route_is_guarded() {
        assert_eq!(AppState::new(None).route, Route::Auth);
        assert_eq!(AppState::new(Some(customer())).route, Route::Events);
    }

    #[test]
    fn test_navigate_protected_without_session_lands_on_auth() {
        let mut app = AppState::new(None);
        let effects = navigate(&mut app, Route::Profile);
        assert_eq!(app.route, Route::Auth);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_login_success_persists_and_mounts_events() {
        let mut app = AppState::new(None);
        let effects = update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::LoginFinished(Ok(customer()))),
        );

        assert_eq!(app.route, Route::Events);
        assert!(effects.contains(&UiEffect::PersistSession(customer())));
        assert!(effects.contains(&UiEffect::FetchEvents));
        assert!(effects.contains(&UiEffect::FetchTicketCount { user_id: 2 }));
    }

    #[test]
    fn test_profile_mount_depends_on_role() {
        let mut app = AppState::new(Some(admin()));
        assert_eq!(
            navigate(&mut app, Route::Profile),
            vec![UiEffect::FetchCreatedEvents { user_id: 1 }]
        );

        let mut app = AppState::new(Some(customer()));
        assert_eq!(
            navigate(&mut app, Route::Profile),
            vec![UiEffect::FetchTickets { user_id: 2 }]
        );
    }

    #[test]
    fn test_booking_is_gated_while_in_flight() {
        let mut app = AppState::new(Some(customer()));
        navigate(&mut app, Route::EventDetail(9));
        app.detail.event = Fetch::Ready(sample_event(9));

        let first = update(&mut app, key(KeyCode::Char('b')));
        assert_eq!(
            first,
            vec![UiEffect::BookTicket {
                user_id: 2,
                event_id: 9
            }]
        );
        assert!(app.detail.booking.is_submitting());

        // A second press while the request is in flight is a no-op.
        let second = update(&mut app, key(KeyCode::Char('b')));
        assert!(second.is_empty());
    }

    #[test]
    fn test_admins_cannot_book() {
        let mut app = AppState::new(Some(admin()));
        navigate(&mut app, Route::EventDetail(9));
        app.detail.event = Fetch::Ready(sample_event(9));

        assert!(update(&mut app, key(KeyCode::Char('b'))).is_empty());
    }

    #[test]
    fn test_booked_shows_banner_and_publishes_notice() {
        let mut app = AppState::new(Some(customer()));
        navigate(&mut app, Route::EventDetail(9));
        app.detail.booking = BookingState::Submitting;

        let ticket = Ticket {
            id: 5,
            price: 0.0,
            user_id: Some(2),
            event_id: Some(9),
            event: None,
        };
        let effects = update(&mut app, UiEvent::Detail(DetailUiEvent::Booked(ticket)));

        assert!(app.detail.banner_active());
        assert_eq!(effects, vec![UiEffect::PublishTicketBooked { event_id: 9 }]);
    }

    #[test]
    fn test_ticket_booked_notice_refreshes_counter() {
        let mut app = AppState::new(Some(customer()));
        let effects = update(&mut app, UiEvent::Notice(Notice::TicketBooked { event_id: 9 }));
        assert_eq!(effects, vec![UiEffect::FetchTicketCount { user_id: 2 }]);

        let mut app = AppState::new(Some(admin()));
        let effects = update(&mut app, UiEvent::Notice(Notice::TicketBooked { event_id: 9 }));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stale_detail_result_is_dropped() {
        let mut app = AppState::new(Some(customer()));
        navigate(&mut app, Route::EventDetail(9));
        navigate(&mut app, Route::Events);

        update(&mut app, UiEvent::Detail(DetailUiEvent::Loaded(sample_event(9))));
        assert!(app.detail.event.ready().is_none());
    }

    #[test]
    fn test_save_failure_keeps_form_open_with_values() {
        let mut app = AppState::new(Some(admin()));
        navigate(&mut app, Route::Events);

        let mut form = EventFormState::new_create();
        form.title = crate::common::TextField::with_value("Launch");
        form.submitting = true;
        app.events.form = Some(form);

        let effects = update(
            &mut app,
            UiEvent::Events(EventsUiEvent::SaveFailed("Bad Request".to_string())),
        );

        assert!(effects.is_empty());
        let form = app.events.form.as_ref().expect("form stays open");
        assert!(!form.submitting);
        assert_eq!(form.title.value(), "Launch");
        assert!(app.status.is_some());
    }

    #[test]
    fn test_save_success_refetches_collection() {
        let mut app = AppState::new(Some(admin()));
        navigate(&mut app, Route::Events);
        app.events.form = Some(EventFormState::new_create());

        let effects = update(
            &mut app,
            UiEvent::Events(EventsUiEvent::Saved(sample_event(4))),
        );

        assert!(app.events.form.is_none());
        assert_eq!(effects, vec![UiEffect::FetchEvents]);
    }

    #[test]
    fn test_logout_clears_session_and_routes_to_auth() {
        let mut app = AppState::new(Some(customer()));
        navigate(&mut app, Route::Events);
        app.events.collection = Fetch::Ready(vec![sample_event(1)]);

        let effects = update(&mut app, key(KeyCode::Char('l')));

        assert_eq!(app.route, Route::Auth);
        assert!(app.session.is_none());
        assert!(effects.contains(&UiEffect::ClearSession));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = AppState::new(None);
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_search_typing_filters_list() {
        let mut app = AppState::new(Some(customer()));
        navigate(&mut app, Route::Events);
        let mut other = sample_event(2);
        other.title = "Marathon".to_string();
        app.events.collection = Fetch::Ready(vec![sample_event(1), other]);

        update(&mut app, key(KeyCode::Char('/')));
        for c in "mara".chars() {
            update(&mut app, key(KeyCode::Char(c)));
        }

        let filtered = app.events.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Marathon");
    }
}
