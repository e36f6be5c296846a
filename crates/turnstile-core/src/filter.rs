//! Client-side event filtering.
//!
//! The events view fetches the whole collection and derives the visible
//! subset locally: a case-insensitive substring match against title,
//! location, and description, intersected with an optional exact category
//! match. Pure functions, recomputed whenever an input changes.

use crate::models::Event;

/// Filter inputs as held by the events view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Free-text search term; empty means "match everything".
    pub search: String,
    /// Exact category constraint; `None` means "all categories".
    pub category: Option<String>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_none()
    }

    /// Whether a single event passes this filter.
    pub fn matches(&self, event: &Event) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_title = event.title.to_lowercase().contains(&needle);
            let in_location = event.location.to_lowercase().contains(&needle);
            let in_description = event
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !(in_title || in_location || in_description) {
                return false;
            }
        }

        if let Some(category) = &self.category
            && event.category != *category
        {
            return false;
        }

        true
    }
}

/// Returns the events passing the filter, in collection order.
pub fn filter_events<'a>(events: &'a [Event], filter: &EventFilter) -> Vec<&'a Event> {
    events.iter().filter(|e| filter.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;

    fn event(id: i64, title: &str, location: &str, description: Option<&str>, category: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            date: NaiveDateTime::parse_from_str("2024-05-01T10:00", "%Y-%m-%dT%H:%M").unwrap(),
            location: location.to_string(),
            description: description.map(str::to_string),
            price: 10.0,
            category: category.to_string(),
            image: None,
            created_by: None,
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event(1, "Rust Meetup", "Berlin", Some("systems talk"), "Community / Local"),
            event(2, "Launch Party", "HQ", None, "Corporate / Business"),
            event(3, "Marathon", "berlin stadium", Some("Annual run"), "Sports & Fitness"),
        ]
    }

    #[test]
    fn test_empty_filter_returns_full_collection() {
        let events = sample();
        let filtered = filter_events(&events, &EventFilter::default());
        assert_eq!(filtered.len(), events.len());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let events = sample();

        let by_title = filter_events(
            &events,
            &EventFilter {
                search: "rust".to_string(),
                category: None,
            },
        );
        assert_eq!(by_title.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);

        // "BERLIN" matches location on both Berlin events.
        let by_location = filter_events(
            &events,
            &EventFilter {
                search: "BERLIN".to_string(),
                category: None,
            },
        );
        assert_eq!(by_location.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);

        let by_description = filter_events(
            &events,
            &EventFilter {
                search: "annual".to_string(),
                category: None,
            },
        );
        assert_eq!(by_description.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_missing_description_never_matches_search() {
        let events = sample();
        let filtered = filter_events(
            &events,
            &EventFilter {
                search: "party".to_string(),
                category: None,
            },
        );
        // Matches the title, not the absent description.
        assert_eq!(filtered.iter().map(|e| e.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let events = sample();
        let filtered = filter_events(
            &events,
            &EventFilter {
                search: String::new(),
                category: Some("Sports & Fitness".to_string()),
            },
        );
        assert_eq!(filtered.iter().map(|e| e.id).collect::<Vec<_>>(), vec![3]);

        // Category comparison is not case-folded.
        let none = filter_events(
            &events,
            &EventFilter {
                search: String::new(),
                category: Some("sports & fitness".to_string()),
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_search_and_category_intersect() {
        let events = sample();
        let filtered = filter_events(
            &events,
            &EventFilter {
                search: "berlin".to_string(),
                category: Some("Community / Local".to_string()),
            },
        );
        assert_eq!(filtered.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1]);
    }
}
