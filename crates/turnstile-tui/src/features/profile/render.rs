//! Profile view rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use turnstile_core::models::{Role, User};

use crate::common::Fetch;
use crate::common::text::truncate_with_ellipsis;
use crate::render::loading_line;
use crate::state::AppState;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let Some(user) = &app.session else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_identity(user, frame, chunks[0]);
    match user.role {
        Role::Customer => render_tickets(app, frame, chunks[1]),
        Role::Admin => render_created_events(app, frame, chunks[1]),
    }
    render_hints(user.role, frame, chunks[2]);
}

fn render_identity(user: &User, frame: &mut Frame, area: Rect) {
    let subtitle = match user.role {
        Role::Admin => "Event Manager",
        Role::Customer => "Event Explorer",
    };
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", user.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {subtitle}"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(vec![
            Span::styled(" Email  ", Style::default().fg(Color::Cyan)),
            Span::raw(user.email.clone()),
            Span::styled("   Role  ", Style::default().fg(Color::Cyan)),
            Span::raw(user.role.to_string()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_tickets(app: &AppState, frame: &mut Frame, area: Rect) {
    match &app.profile.tickets {
        Fetch::Loading => {
            frame.render_widget(
                Paragraph::new(loading_line(app.spinner_frame, "Loading tickets\u{2026}")),
                area,
            );
        }
        Fetch::Failed(error) => render_error(error, "tickets", frame, area),
        Fetch::Ready(tickets) if tickets.is_empty() => {
            let lines = vec![
                Line::from(Span::styled(
                    " No tickets yet!",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    " Book your first ticket from the events view to see it here.",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(block(" My Tickets (0) ")),
                area,
            );
        }
        Fetch::Ready(tickets) => {
            let rows: Vec<Row> = tickets
                .iter()
                .enumerate()
                .map(|(i, ticket)| {
                    let style = if i == app.profile.selected {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    let (title, date, location) = match &ticket.event {
                        Some(event) => (
                            event.title.clone(),
                            event.date.format("%Y-%m-%d %H:%M").to_string(),
                            event.location.clone(),
                        ),
                        None => (format!("Event #{}", ticket.event_id().unwrap_or_default()),
                            String::new(),
                            String::new()),
                    };
                    Row::new(vec![
                        Cell::from(truncate_with_ellipsis(&title, 32)),
                        Cell::from(date),
                        Cell::from(truncate_with_ellipsis(&location, 16)),
                        Cell::from(format!("${:.2}", ticket.price)),
                    ])
                    .style(style)
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Fill(1),
                    Constraint::Length(16),
                    Constraint::Length(16),
                    Constraint::Length(9),
                ],
            )
            .header(
                Row::new(vec!["Event", "Date", "Location", "Price"]).style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            );
            let title = format!(" My Tickets ({}) ", tickets.len());
            let table = table.block(block(&title));
            frame.render_widget(table, area);
        }
    }
}

fn render_created_events(app: &AppState, frame: &mut Frame, area: Rect) {
    match &app.profile.created {
        Fetch::Loading => {
            frame.render_widget(
                Paragraph::new(loading_line(app.spinner_frame, "Loading your events\u{2026}")),
                area,
            );
        }
        Fetch::Failed(error) => render_error(error, "created events", frame, area),
        Fetch::Ready(events) if events.is_empty() => {
            let lines = vec![
                Line::from(Span::styled(
                    " No events created yet!",
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    " Create events from the events view to build your portfolio.",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(block(" My Created Events (0) ")),
                area,
            );
        }
        Fetch::Ready(events) => {
            let rows: Vec<Row> = events
                .iter()
                .enumerate()
                .map(|(i, event)| {
                    let style = if i == app.profile.selected {
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    Row::new(vec![
                        Cell::from(truncate_with_ellipsis(&event.title, 32)),
                        Cell::from(event.date.format("%Y-%m-%d %H:%M").to_string()),
                        Cell::from(truncate_with_ellipsis(&event.location, 16)),
                        Cell::from(truncate_with_ellipsis(&event.category, 18)),
                    ])
                    .style(style)
                })
                .collect();

            let table = Table::new(
                rows,
                [
                    Constraint::Fill(1),
                    Constraint::Length(16),
                    Constraint::Length(16),
                    Constraint::Length(18),
                ],
            )
            .header(
                Row::new(vec!["Title", "Date", "Location", "Category"]).style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            );
            let title = format!(" My Created Events ({}) ", events.len());
            let table = table.block(block(&title));
            frame.render_widget(table, area);
        }
    }
}

fn render_error(error: &str, what: &str, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!(" Could not load {what}: {error}"),
            Style::default().fg(Color::Red),
        )),
        Line::from(Span::styled(
            " Press r to retry.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_hints(role: Role, frame: &mut Frame, area: Rect) {
    let hints = match role {
        Role::Customer => {
            " \u{2191}\u{2193} select \u{b7} c cancel ticket \u{b7} r refresh \u{b7} Esc back \u{b7} l logout \u{b7} q quit"
        }
        Role::Admin => " \u{2191}\u{2193} select \u{b7} r refresh \u{b7} Esc back \u{b7} l logout \u{b7} q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn block(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title.to_string())
}
