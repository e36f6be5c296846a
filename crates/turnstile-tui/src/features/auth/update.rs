//! Auth view reducer: key handling and login/signup result processing.

use crossterm::event::{KeyCode, KeyEvent};
use turnstile_core::api::ApiError;
use turnstile_core::forms::first_messages;
use validator::Validate;

use super::state::{AuthMode, LoginField, SignupField, SubmitState};
use crate::effects::UiEffect;
use crate::events::AuthUiEvent;
use crate::state::AppState;
use crate::update;

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // An in-flight submission disables the form entirely.
    if app.auth.is_submitting() {
        return vec![];
    }

    match key.code {
        KeyCode::Esc => {
            // Nothing to go back to before signing in.
            app.should_quit = true;
            vec![]
        }
        KeyCode::Tab => {
            app.auth.mode = match app.auth.mode {
                AuthMode::Login => AuthMode::Signup,
                AuthMode::Signup => AuthMode::Login,
            };
            vec![]
        }
        KeyCode::Enter => submit(app),
        _ => match app.auth.mode {
            AuthMode::Login => handle_login_key(app, key),
            AuthMode::Signup => handle_signup_key(app, key),
        },
    }
}

fn handle_login_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let login = &mut app.auth.login;
    match key.code {
        KeyCode::Down => login.focus = login.focus.next(),
        KeyCode::Up => login.focus = login.focus.prev(),
        _ => {
            login.focused_field_mut().handle_key(key);
        }
    }
    vec![]
}

fn handle_signup_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let signup = &mut app.auth.signup;
    match key.code {
        KeyCode::Down => signup.focus = signup.focus.next(),
        KeyCode::Up => signup.focus = signup.focus.prev(),
        _ if signup.focus == SignupField::Role => {
            if matches!(
                key.code,
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            ) {
                signup.toggle_role();
            }
        }
        _ => {
            let field = match signup.focus {
                SignupField::Name => &mut signup.name,
                SignupField::Email => &mut signup.email,
                SignupField::Password => &mut signup.password,
                SignupField::Role => unreachable!("role handled above"),
            };
            field.handle_key(key);
        }
    }
    vec![]
}

/// Validates the active form and fires the request if it passes.
fn submit(app: &mut AppState) -> Vec<UiEffect> {
    match app.auth.mode {
        AuthMode::Login => {
            let form = app.auth.login.to_form();
            match form.validate() {
                Ok(()) => {
                    app.auth.login.errors.clear();
                    app.auth.login.submit = SubmitState::Submitting;
                    vec![UiEffect::Login(form)]
                }
                Err(errors) => {
                    app.auth.login.errors = first_messages(&errors);
                    vec![]
                }
            }
        }
        AuthMode::Signup => {
            let form = app.auth.signup.to_form();
            match form.validate() {
                Ok(()) => {
                    app.auth.signup.errors.clear();
                    app.auth.signup.submit = SubmitState::Submitting;
                    vec![UiEffect::Signup(form)]
                }
                Err(errors) => {
                    app.auth.signup.errors = first_messages(&errors);
                    vec![]
                }
            }
        }
    }
}

pub fn handle_event(app: &mut AppState, event: AuthUiEvent) -> Vec<UiEffect> {
    match event {
        AuthUiEvent::LoginFinished(result) => {
            app.auth.login.submit = SubmitState::Idle;
            match result {
                Ok(user) => update::signed_in(app, user),
                Err(err) => {
                    let (field, message) = login_error_field(&err);
                    app.auth.login.errors.clear();
                    app.auth.login.errors.insert(field.to_string(), message);
                    vec![]
                }
            }
        }
        AuthUiEvent::SignupFinished(result) => {
            app.auth.signup.submit = SubmitState::Idle;
            match result {
                Ok(user) => update::signed_in(app, user),
                Err(err) => {
                    let message = match &err {
                        ApiError::Status { .. } => err.message(),
                        ApiError::Transport(_) => "Signup failed".to_string(),
                    };
                    app.auth.signup.errors.clear();
                    app.auth.signup.errors.insert("email".to_string(), message);
                    vec![]
                }
            }
        }
    }
}

/// Server-reported login failures land on the password field (matching the
/// server's "Invalid credentials" wording); transport failures fall back to a
/// generic message on the email field.
fn login_error_field(err: &ApiError) -> (&'static str, String) {
    match err {
        ApiError::Status { .. } => ("password", err.message()),
        ApiError::Transport(_) => ("email", "Login failed".to_string()),
    }
}
