//! Events view rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use turnstile_core::models::{EVENT_CATEGORIES, Role};

use super::state::{EventFormState, EventsFocus, FormField};
use crate::common::TextField;
use crate::common::text::truncate_with_ellipsis;
use crate::render::loading_line;
use crate::state::AppState;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    if let Some(form) = &app.events.form {
        render_form(form, frame, area);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_filter_bar(app, frame, chunks[0]);
    render_collection(app, frame, chunks[1]);
    render_hints(app, frame, chunks[2]);
}

fn render_filter_bar(app: &AppState, frame: &mut Frame, area: Rect) {
    let events = &app.events;
    let focus_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let search_label_style = if events.focus == EventsFocus::Search {
        focus_style
    } else {
        Style::default()
    };
    let category_label_style = if events.focus == EventsFocus::Category {
        focus_style
    } else {
        Style::default()
    };
    let category_text = match events.category {
        Some(i) => EVENT_CATEGORIES[i],
        None => "All Categories",
    };

    let mut spans = vec![
        Span::styled(" Search: ", search_label_style),
        Span::raw(events.search.value().to_string()),
    ];
    if events.focus == EventsFocus::Search {
        spans.push(Span::styled("\u{2581}", Style::default().fg(Color::Cyan)));
    }
    spans.push(Span::raw("    "));
    spans.push(Span::styled("Category: ", category_label_style));
    spans.push(Span::styled(
        format!("\u{2039} {category_text} \u{203a}"),
        category_label_style,
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_collection(app: &AppState, frame: &mut Frame, area: Rect) {
    let events = &app.events;

    if events.collection.is_loading() {
        frame.render_widget(
            Paragraph::new(loading_line(app.spinner_frame, "Loading events\u{2026}")),
            area,
        );
        return;
    }
    if let Some(error) = events.collection.error() {
        let lines = vec![
            Line::from(Span::styled(
                format!(" Could not load events: {error}"),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                " Press r to retry.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let filtered = events.filtered();
    if filtered.is_empty() {
        let message = if events.search.is_empty() && events.category.is_none() {
            " No events yet.".to_string()
        } else {
            format!(" No events found matching \"{}\"", events.search.value())
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            ))),
            area,
        );
        return;
    }

    let title_width = (area.width as usize).saturating_sub(46).max(16);
    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, event)| {
            let style = if i == events.selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(truncate_with_ellipsis(&event.title, title_width)),
                Cell::from(event.date.format("%Y-%m-%d %H:%M").to_string()),
                Cell::from(truncate_with_ellipsis(&event.location, 14)),
                Cell::from(truncate_with_ellipsis(&event.category, 18)),
                Cell::from(format!("${:.2}", event.price)),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Length(14),
            Constraint::Length(18),
            Constraint::Length(9),
        ],
    )
    .header(
        Row::new(vec!["Title", "Date", "Location", "Category", "Price"]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    );
    frame.render_widget(table, area);
}

fn render_hints(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints = match (app.events.focus, app.role()) {
        (EventsFocus::Search, _) => " type to search \u{b7} Enter/Esc done",
        (EventsFocus::Category, _) => " \u{2190}/\u{2192} category \u{b7} Enter/Esc done",
        (EventsFocus::List, Some(Role::Admin)) => {
            " \u{2191}\u{2193} select \u{b7} Enter view \u{b7} / search \u{b7} c category \u{b7} n new \u{b7} e edit \u{b7} d delete \u{b7} p profile \u{b7} l logout \u{b7} q quit"
        }
        _ => {
            " \u{2191}\u{2193} select \u{b7} Enter view \u{b7} / search \u{b7} c category \u{b7} r refresh \u{b7} p profile \u{b7} l logout \u{b7} q quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn render_form(form: &EventFormState, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    push_form_field(&mut lines, form, FormField::Title, "Title", &form.title);
    push_form_field(&mut lines, form, FormField::Date, "Date", &form.date);
    push_form_field(&mut lines, form, FormField::Location, "Location", &form.location);
    push_form_field(
        &mut lines,
        form,
        FormField::Description,
        "Description",
        &form.description,
    );
    push_form_field(&mut lines, form, FormField::Price, "Price ($)", &form.price);
    push_category_field(&mut lines, form);
    push_form_field(&mut lines, form, FormField::Image, "Image URL", &form.image);

    lines.push(Line::default());
    let footer = if form.submitting {
        if form.editing.is_some() {
            "Updating\u{2026}"
        } else {
            "Creating\u{2026}"
        }
    } else {
        "Enter submit \u{b7} Tab next field \u{b7} Esc cancel"
    };
    lines.push(Line::from(Span::styled(
        format!("  {footer}"),
        Style::default().fg(Color::DarkGray),
    )));

    let title = if form.editing.is_some() {
        " Edit Event "
    } else {
        " Create New Event "
    };
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn push_form_field(
    lines: &mut Vec<Line<'static>>,
    form: &EventFormState,
    field: FormField,
    label: &'static str,
    value: &TextField,
) {
    let focused = form.focus == field;
    let marker = if focused { "\u{203a} " } else { "  " };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::raw(format!("{label:<13}")),
        Span::styled(value.value().to_string(), value_style),
    ];
    if focused {
        spans.push(Span::styled("\u{2581}", Style::default().fg(Color::Cyan)));
    }
    lines.push(Line::from(spans));

    if let Some(error) = form.errors.get(field.error_key()) {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(15)),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ]));
    }
}

fn push_category_field(lines: &mut Vec<Line<'static>>, form: &EventFormState) {
    let focused = form.focus == FormField::Category;
    let marker = if focused { "\u{203a} " } else { "  " };
    let text = match form.category {
        Some(i) => EVENT_CATEGORIES[i],
        None => "Select Category",
    };
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::raw(format!("{:<13}", "Category")),
        Span::styled(format!("\u{2039} {text} \u{203a}"), style),
    ]));

    if let Some(error) = form.errors.get(FormField::Category.error_key()) {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(15)),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ]));
    }
}
