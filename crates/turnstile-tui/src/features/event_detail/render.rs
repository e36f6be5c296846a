//! Event detail view rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use turnstile_core::models::Role;

use crate::render::loading_line;
use crate::state::AppState;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let detail = &app.detail;

    if detail.event.is_loading() {
        frame.render_widget(
            Paragraph::new(loading_line(
                app.spinner_frame,
                "Loading event details\u{2026}",
            )),
            area,
        );
        return;
    }

    if let Some(error) = detail.event.error() {
        let lines = vec![
            Line::from(Span::styled(
                format!(" Could not load this event: {error}"),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                " Press r to retry, Esc to go back.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    let Some(event) = detail.event.ready() else {
        return;
    };

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            event.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        detail_line("Date", event.date.format("%A, %B %e, %Y at %H:%M").to_string()),
        detail_line("Location", event.location.clone()),
        detail_line("Category", event.category.clone()),
        detail_line("Price", format!("${:.2}", event.price)),
    ];
    if let Some(image) = &event.image {
        lines.push(detail_line("Image", image.clone()));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "About this event",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    match &event.description {
        Some(description) => lines.push(Line::from(description.clone())),
        None => lines.push(Line::from(Span::styled(
            "No description available for this event.",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Event ")),
        chunks[0],
    );

    let hint = match app.role() {
        Some(Role::Customer) if detail.booking.is_submitting() => {
            " Booking\u{2026} \u{b7} Esc back \u{b7} q quit"
        }
        Some(Role::Customer) => " b book ticket \u{b7} Esc back \u{b7} p profile \u{b7} q quit",
        _ => " Esc back \u{b7} p profile \u{b7} q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[1],
    );
}

fn detail_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{label:<10}"),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(value),
    ])
}
