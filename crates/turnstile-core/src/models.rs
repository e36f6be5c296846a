//! Wire types shared between the API client and the views.
//!
//! Field names and shapes mirror the server's JSON payloads exactly; the
//! client adds nothing on top. `Event.date` is a naive datetime because the
//! server emits zone-less ISO-8601 strings.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The signed-in identity as returned by login/signup.
///
/// This record doubles as the persisted session; see [`crate::session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Account role. Gates which actions a view exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Customer => write!(f, "customer"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            other => Err(format!("unknown role '{other}' (expected admin or customer)")),
        }
    }
}

/// An event as listed and fetched from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDateTime,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
}

/// A booked ticket.
///
/// The booking response carries `user_id`/`event_id`; the per-user listing
/// omits those and denormalizes the event instead. Both shapes decode here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<TicketEvent>,
}

/// The event summary denormalized into a ticket listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketEvent {
    pub id: i64,
    pub title: String,
    pub date: NaiveDateTime,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Ticket {
    /// The id of the event this ticket is for, from whichever shape is present.
    pub fn event_id(&self) -> Option<i64> {
        self.event_id.or_else(|| self.event.as_ref().map(|e| e.id))
    }
}

/// Request body for creating or updating an event.
///
/// The server's PATCH applies fields individually, but the client always
/// submits the full form, so one payload type covers both. `created_by` is
/// set only on create.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPayload {
    pub title: String,
    pub date: NaiveDateTime,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
}

/// The fixed category list offered by the event form and filter.
pub const EVENT_CATEGORIES: &[&str] = &[
    "Corporate / Business",
    "Social / Private",
    "Arts & Entertainment",
    "Sports & Fitness",
    "Educational / Academic",
    "Fundraising / Charity",
    "Religious / Spiritual",
    "Virtual / Hybrid",
    "Promotional / Marketing",
    "Community / Local",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"customer\"").unwrap(),
            Role::Customer
        );
        assert!("admin".parse::<Role>().unwrap().is_admin());
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_event_decodes_server_shape() {
        let event: Event = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Rust Meetup",
                "date": "2024-05-01T10:00:00",
                "location": "HQ",
                "description": null,
                "price": 12.5,
                "category": "Community / Local",
                "image": null
            }"#,
        )
        .unwrap();
        assert_eq!(event.id, 3);
        assert_eq!(event.date.to_string(), "2024-05-01 10:00:00");
        assert!(event.description.is_none());
        assert!(event.created_by.is_none());
    }

    #[test]
    fn test_ticket_decodes_both_shapes() {
        let booked: Ticket =
            serde_json::from_str(r#"{"id": 1, "price": 5.0, "user_id": 2, "event_id": 9}"#)
                .unwrap();
        assert_eq!(booked.event_id(), Some(9));

        let listed: Ticket = serde_json::from_str(
            r#"{
                "id": 1,
                "price": 5.0,
                "event": {
                    "id": 9,
                    "title": "Launch",
                    "date": "2024-05-01T10:00:00",
                    "location": "HQ"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(listed.event_id(), Some(9));
        assert_eq!(listed.event.unwrap().title, "Launch");
    }

    #[test]
    fn test_event_payload_omits_empty_optionals() {
        let payload = EventPayload {
            title: "Launch".to_string(),
            date: NaiveDateTime::parse_from_str("2024-05-01T10:00", "%Y-%m-%dT%H:%M").unwrap(),
            location: "HQ".to_string(),
            description: None,
            price: 0.0,
            category: "Corporate / Business".to_string(),
            image: None,
            created_by: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("description").is_none());
        assert!(json.get("created_by").is_none());
        assert_eq!(json["date"], "2024-05-01T10:00:00");
    }
}
