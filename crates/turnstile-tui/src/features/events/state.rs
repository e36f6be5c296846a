//! Events view state.

use turnstile_core::filter::{EventFilter, filter_events};
use turnstile_core::forms::{EventForm, FieldErrors};
use turnstile_core::models::{EVENT_CATEGORIES, Event};

use crate::common::{Fetch, TextField};

/// Which control owns keyboard input in the events view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventsFocus {
    #[default]
    List,
    Search,
    Category,
}

/// The events view slice.
#[derive(Debug, Default)]
pub struct EventsState {
    /// The fetched collection; filtering is derived, never stored.
    pub collection: Fetch<Vec<Event>>,
    /// Free-text search input.
    pub search: TextField,
    /// Selected category filter, as an index into [`EVENT_CATEGORIES`].
    pub category: Option<usize>,
    pub focus: EventsFocus,
    /// Cursor into the filtered list.
    pub selected: usize,
    /// Admin create/edit form, when open.
    pub form: Option<EventFormState>,
}

impl EventsState {
    /// The current filter inputs as a pure value.
    pub fn filter(&self) -> EventFilter {
        EventFilter {
            search: self.search.value().to_string(),
            category: self.category.map(|i| EVENT_CATEGORIES[i].to_string()),
        }
    }

    /// The visible subset, recomputed from the collection and filter.
    pub fn filtered(&self) -> Vec<&Event> {
        match self.collection.ready() {
            Some(events) => filter_events(events, &self.filter()),
            None => Vec::new(),
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.filtered().get(self.selected).copied()
    }

    /// Keeps the cursor inside the filtered list after any change.
    pub fn clamp_selected(&mut self) {
        let len = self.filtered().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Steps the category filter: `None` ↔ each category in order.
    pub fn cycle_category(&mut self, forward: bool) {
        self.category = if forward {
            match self.category {
                None => Some(0),
                Some(i) if i + 1 < EVENT_CATEGORIES.len() => Some(i + 1),
                Some(_) => None,
            }
        } else {
            match self.category {
                None => Some(EVENT_CATEGORIES.len() - 1),
                Some(0) => None,
                Some(i) => Some(i - 1),
            }
        };
        self.selected = 0;
    }
}

/// Fields of the admin event form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Date,
    Location,
    Description,
    Price,
    Category,
    Image,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Date,
            FormField::Date => FormField::Location,
            FormField::Location => FormField::Description,
            FormField::Description => FormField::Price,
            FormField::Price => FormField::Category,
            FormField::Category => FormField::Image,
            FormField::Image => FormField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Image,
            FormField::Date => FormField::Title,
            FormField::Location => FormField::Date,
            FormField::Description => FormField::Location,
            FormField::Price => FormField::Description,
            FormField::Category => FormField::Price,
            FormField::Image => FormField::Category,
        }
    }

    /// Key used to look up this field's validation error.
    pub fn error_key(self) -> &'static str {
        match self {
            FormField::Title => "title",
            FormField::Date => "date",
            FormField::Location => "location",
            FormField::Description => "description",
            FormField::Price => "price",
            FormField::Category => "category",
            FormField::Image => "image",
        }
    }
}

/// The admin create/edit form.
#[derive(Debug, Default)]
pub struct EventFormState {
    /// `Some(id)` in edit mode, `None` when creating.
    pub editing: Option<i64>,
    pub title: TextField,
    pub date: TextField,
    pub location: TextField,
    pub description: TextField,
    pub price: TextField,
    /// Index into [`EVENT_CATEGORIES`].
    pub category: Option<usize>,
    pub image: TextField,
    pub focus: FormField,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl EventFormState {
    pub fn new_create() -> Self {
        Self::default()
    }

    /// Prefills from an existing event for editing.
    pub fn for_edit(event: &Event) -> Self {
        let form = EventForm::from_event(event);
        Self {
            editing: Some(event.id),
            title: TextField::with_value(&form.title),
            date: TextField::with_value(&form.date),
            location: TextField::with_value(&form.location),
            description: TextField::with_value(&form.description),
            price: TextField::with_value(&form.price),
            category: EVENT_CATEGORIES.iter().position(|c| *c == event.category),
            image: TextField::with_value(&form.image),
            focus: FormField::default(),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    /// Snapshot of the entered values for validation.
    pub fn to_form(&self) -> EventForm {
        EventForm {
            title: self.title.value().to_string(),
            date: self.date.value().to_string(),
            location: self.location.value().to_string(),
            description: self.description.value().to_string(),
            price: self.price.value().to_string(),
            category: self.category.map(|i| EVENT_CATEGORIES[i].to_string()),
            image: self.image.value().to_string(),
        }
    }

    pub fn focused_text_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Date => Some(&mut self.date),
            FormField::Location => Some(&mut self.location),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::Category => None,
            FormField::Image => Some(&mut self.image),
        }
    }

    /// Steps the category selector (wrapping, no "none" slot — the form
    /// requires a category).
    pub fn cycle_category(&mut self, forward: bool) {
        let len = EVENT_CATEGORIES.len();
        self.category = Some(match (self.category, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        });
    }
}
