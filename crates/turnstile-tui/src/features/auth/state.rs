//! Auth view state.
//!
//! Two forms behind one tab container. Mode and per-form submit state are the
//! only state machines in the client:
//! - `AuthMode`: which form is showing (tab toggle, not a route change).
//! - `SubmitState`: `Idle` or `Submitting` per form, gating the submit action.

use turnstile_core::forms::{FieldErrors, LoginForm, SignupForm};
use turnstile_core::models::Role;

use crate::common::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    pub fn is_submitting(self) -> bool {
        matches!(self, SubmitState::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields: previous equals next.
        self.next()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupField {
    #[default]
    Name,
    Email,
    Password,
    Role,
}

impl SignupField {
    pub fn next(self) -> Self {
        match self {
            SignupField::Name => SignupField::Email,
            SignupField::Email => SignupField::Password,
            SignupField::Password => SignupField::Role,
            SignupField::Role => SignupField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SignupField::Name => SignupField::Role,
            SignupField::Email => SignupField::Name,
            SignupField::Password => SignupField::Email,
            SignupField::Role => SignupField::Password,
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginFormState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
    pub errors: FieldErrors,
    pub submit: SubmitState,
}

impl LoginFormState {
    pub fn to_form(&self) -> LoginForm {
        LoginForm {
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }
}

#[derive(Debug)]
pub struct SignupFormState {
    pub name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub role: Role,
    pub focus: SignupField,
    pub errors: FieldErrors,
    pub submit: SubmitState,
}

impl Default for SignupFormState {
    fn default() -> Self {
        Self {
            name: TextField::new(),
            email: TextField::new(),
            password: TextField::new(),
            role: Role::Customer,
            focus: SignupField::default(),
            errors: FieldErrors::new(),
            submit: SubmitState::default(),
        }
    }
}

impl SignupFormState {
    pub fn to_form(&self) -> SignupForm {
        SignupForm {
            name: self.name.value().trim().to_string(),
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
            role: self.role,
        }
    }

    pub fn toggle_role(&mut self) {
        self.role = match self.role {
            Role::Admin => Role::Customer,
            Role::Customer => Role::Admin,
        };
    }
}

/// The whole auth view slice.
#[derive(Debug, Default)]
pub struct AuthState {
    pub mode: AuthMode,
    pub login: LoginFormState,
    pub signup: SignupFormState,
}

impl AuthState {
    /// Whether the currently shown form has a request in flight.
    pub fn is_submitting(&self) -> bool {
        match self.mode {
            AuthMode::Login => self.login.submit.is_submitting(),
            AuthMode::Signup => self.signup.submit.is_submitting(),
        }
    }
}
