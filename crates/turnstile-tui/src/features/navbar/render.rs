//! Navigation bar rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use turnstile_core::models::Role;

use crate::route::Route;
use crate::state::AppState;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        " turnstile ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(user) = &app.session {
        spans.push(section("Events", matches!(app.route, Route::Events | Route::EventDetail(_))));
        spans.push(section("Profile", app.route == Route::Profile));

        if user.role == Role::Customer {
            let count = app
                .navbar
                .ticket_count
                .map_or_else(|| "-".to_string(), |c| c.to_string());
            spans.push(Span::styled(
                format!("  \u{1f39f} {count} "),
                Style::default().fg(Color::Yellow),
            ));
        }

        spans.push(Span::styled(
            format!("  {} ({}) ", user.name, user.role),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            " Sign in to browse events ",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black)),
        area,
    );
}

fn section(label: &'static str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!(" {label} "), style)
}
