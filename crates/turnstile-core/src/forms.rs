//! Form inputs and client-side validation.
//!
//! Validation runs before any request is sent: declarative rules via
//! `validator` derive for the auth forms, and parse-then-validate for the
//! event form (whose date and price fields arrive as text). Errors are keyed
//! by field name so views can render them next to the offending input.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::models::{Event, EventPayload, Role};

/// Per-field validation errors, keyed by field name.
pub type FieldErrors = BTreeMap<String, String>;

/// Flattens `validator` output to one message per field (the first rule that
/// failed, in declaration order).
pub fn first_messages(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        if let Some(first) = field_errors.first() {
            let message = first
                .message
                .as_ref()
                .map_or_else(|| first.code.to_string(), ToString::to_string);
            map.insert(field.to_string(), message);
        }
    }
    map
}

/// Login form: both fields required, email must look like an email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Required"), email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Required"))]
    pub password: String,
}

/// Signup form. The role is chosen from a fixed pair, so it needs no rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct SignupForm {
    #[validate(length(min = 1, message = "Required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Required"), email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    pub role: Role,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Customer,
        }
    }
}

/// Accepted text formats for the event date field.
const DATE_INPUT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Format used to prefill the date field when editing.
pub const DATE_INPUT_DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The admin event form, all fields as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub price: String,
    pub category: Option<String>,
    pub image: String,
}

impl EventForm {
    /// Prefills the form from an existing event (edit mode).
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            date: event.date.format(DATE_INPUT_DISPLAY_FORMAT).to_string(),
            location: event.location.clone(),
            description: event.description.clone().unwrap_or_default(),
            price: format!("{}", event.price),
            category: Some(event.category.clone()),
            image: event.image.clone().unwrap_or_default(),
        }
    }

    /// Validates the form and builds the request payload.
    ///
    /// `created_by` is set on create submissions and omitted on updates.
    pub fn validate(&self, created_by: Option<i64>) -> Result<EventPayload, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert("title".to_string(), "Required".to_string());
        }

        let date = if self.date.trim().is_empty() {
            errors.insert("date".to_string(), "Required".to_string());
            None
        } else {
            match parse_event_date(self.date.trim()) {
                Some(date) => Some(date),
                None => {
                    errors.insert(
                        "date".to_string(),
                        "Invalid date (expected YYYY-MM-DDTHH:MM)".to_string(),
                    );
                    None
                }
            }
        };

        let location = self.location.trim();
        if location.is_empty() {
            errors.insert("location".to_string(), "Required".to_string());
        }

        let price = if self.price.trim().is_empty() {
            errors.insert("price".to_string(), "Required".to_string());
            None
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(price) if price >= 0.0 => Some(price),
                Ok(_) => {
                    errors.insert("price".to_string(), "Must be zero or greater".to_string());
                    None
                }
                Err(_) => {
                    errors.insert("price".to_string(), "Must be a number".to_string());
                    None
                }
            }
        };

        let category = match self.category.as_deref().map(str::trim) {
            Some(category) if !category.is_empty() => Some(category.to_string()),
            _ => {
                errors.insert("category".to_string(), "Required".to_string());
                None
            }
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EventPayload {
            title: title.to_string(),
            date: date.expect("validated"),
            location: location.to_string(),
            description: none_if_empty(&self.description),
            price: price.expect("validated"),
            category: category.expect("validated"),
            image: none_if_empty(&self.image),
            created_by,
        })
    }
}

fn parse_event_date(input: &str) -> Option<NaiveDateTime> {
    DATE_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
}

fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
