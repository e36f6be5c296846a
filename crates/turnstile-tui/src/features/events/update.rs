//! Events view reducer.

use crossterm::event::{KeyCode, KeyEvent};
use turnstile_core::models::User;

use super::state::{EventFormState, EventsFocus, FormField};
use crate::common::Fetch;
use crate::effects::UiEffect;
use crate::events::EventsUiEvent;
use crate::route::Route;
use crate::state::{AppState, StatusLevel};
use crate::update;

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(user) = app.session.clone() else {
        return vec![];
    };

    if app.events.form.is_some() {
        return handle_form_key(app, &user, key);
    }

    match app.events.focus {
        EventsFocus::Search => handle_search_key(app, key),
        EventsFocus::Category => handle_category_key(app, key),
        EventsFocus::List => handle_list_key(app, &user, key),
    }
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            app.events.focus = EventsFocus::List;
            app.events.clamp_selected();
        }
        _ => {
            if app.events.search.handle_key(key) {
                // The visible subset changed; restart the cursor.
                app.events.selected = 0;
            }
        }
    }
    vec![]
}

fn handle_category_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Left => app.events.cycle_category(false),
        KeyCode::Right => app.events.cycle_category(true),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            app.events.focus = EventsFocus::List;
            app.events.clamp_selected();
        }
        _ => {}
    }
    vec![]
}

fn handle_list_key(app: &mut AppState, user: &User, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            vec![]
        }
        KeyCode::Up => {
            app.events.selected = app.events.selected.saturating_sub(1);
            vec![]
        }
        KeyCode::Down => {
            let len = app.events.filtered().len();
            if len > 0 {
                app.events.selected = (app.events.selected + 1).min(len - 1);
            }
            vec![]
        }
        KeyCode::Enter => match app.events.selected_event() {
            Some(event) => {
                let id = event.id;
                update::navigate(app, Route::EventDetail(id))
            }
            None => vec![],
        },
        KeyCode::Char('/') => {
            app.events.focus = EventsFocus::Search;
            vec![]
        }
        KeyCode::Char('c') => {
            app.events.focus = EventsFocus::Category;
            vec![]
        }
        KeyCode::Char('r') => vec![UiEffect::FetchEvents],
        KeyCode::Char('p') => update::navigate(app, Route::Profile),
        KeyCode::Char('l') => update::sign_out(app),
        KeyCode::Char('n') if user.role.is_admin() => {
            app.events.form = Some(EventFormState::new_create());
            vec![]
        }
        KeyCode::Char('e') if user.role.is_admin() => {
            if let Some(event) = app.events.selected_event() {
                app.events.form = Some(EventFormState::for_edit(event));
            }
            vec![]
        }
        KeyCode::Char('d') if user.role.is_admin() => match app.events.selected_event() {
            Some(event) => vec![UiEffect::DeleteEvent { id: event.id }],
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_form_key(app: &mut AppState, user: &User, key: KeyEvent) -> Vec<UiEffect> {
    let Some(form) = app.events.form.as_mut() else {
        return vec![];
    };

    // An in-flight save disables the form.
    if form.submitting {
        return vec![];
    }

    match key.code {
        KeyCode::Esc => {
            app.events.form = None;
            vec![]
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.prev();
            vec![]
        }
        KeyCode::Enter => {
            // Create submissions stamp the author; updates do not.
            let created_by = form.editing.is_none().then_some(user.id);
            match form.to_form().validate(created_by) {
                Ok(payload) => {
                    form.errors.clear();
                    form.submitting = true;
                    match form.editing {
                        Some(id) => vec![UiEffect::UpdateEvent { id, payload }],
                        None => vec![UiEffect::CreateEvent { payload }],
                    }
                }
                Err(errors) => {
                    form.errors = errors;
                    vec![]
                }
            }
        }
        KeyCode::Left if form.focus == FormField::Category => {
            form.cycle_category(false);
            vec![]
        }
        KeyCode::Right if form.focus == FormField::Category => {
            form.cycle_category(true);
            vec![]
        }
        _ => {
            if let Some(field) = form.focused_text_field_mut() {
                field.handle_key(key);
            }
            vec![]
        }
    }
}

pub fn handle_event(app: &mut AppState, event: EventsUiEvent) -> Vec<UiEffect> {
    match event {
        EventsUiEvent::Loaded(events) => {
            app.events.collection = Fetch::Ready(events);
            app.events.clamp_selected();
            vec![]
        }
        EventsUiEvent::LoadFailed(error) => {
            app.events.collection = Fetch::Failed(error);
            vec![]
        }
        EventsUiEvent::Saved(event) => {
            app.events.form = None;
            app.set_status(StatusLevel::Info, format!("Saved \"{}\"", event.title));
            // Always-fresh: re-fetch the whole collection instead of patching
            // the local copy.
            vec![UiEffect::FetchEvents]
        }
        EventsUiEvent::SaveFailed(error) => {
            // The form stays open with the entered values intact.
            if let Some(form) = app.events.form.as_mut() {
                form.submitting = false;
            }
            app.set_status(StatusLevel::Error, format!("Save failed: {error}"));
            vec![]
        }
        EventsUiEvent::Deleted(_) => {
            app.set_status(StatusLevel::Info, "Event deleted");
            vec![UiEffect::FetchEvents]
        }
        EventsUiEvent::DeleteFailed(error) => {
            app.set_status(StatusLevel::Error, format!("Delete failed: {error}"));
            vec![]
        }
    }
}
