//! Pure view functions.
//!
//! Everything here takes `&AppState` by immutable reference and draws to a
//! ratatui frame. No mutations, no effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::features::{auth, event_detail, events, navbar, profile};
use crate::route::Route;
use crate::state::{AppState, StatusLevel};

/// Height of the navigation bar.
const NAVBAR_HEIGHT: u16 = 1;

/// Height of the status line below the content.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for loading placeholders.
const SPINNER_FRAMES: &[&str] = &["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"];

/// Renders the entire UI for one frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    navbar::render(app, frame, chunks[0]);

    match app.route {
        Route::Auth => auth::render(app, frame, chunks[1]),
        Route::Events => events::render(app, frame, chunks[1]),
        Route::EventDetail(_) => event_detail::render(app, frame, chunks[1]),
        Route::Profile => profile::render(app, frame, chunks[1]),
    }

    render_status_line(app, frame, chunks[2]);

    if app.detail.banner_active() {
        render_confirmation_banner(frame, area);
    }
}

/// A loading placeholder line with the spinner animation.
pub fn loading_line(spinner_frame: usize, text: &str) -> Line<'static> {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    Line::from(vec![
        Span::styled(format!(" {spinner} "), Style::default().fg(Color::Cyan)),
        Span::raw(text.to_string()),
    ])
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let Some(status) = &app.status else {
        return;
    };
    let style = match status.level {
        StatusLevel::Info => Style::default().fg(Color::Green),
        StatusLevel::Error => Style::default().fg(Color::Red),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", status.text),
            style,
        ))),
        area,
    );
}

/// The transient booking confirmation, centered over the content.
fn render_confirmation_banner(frame: &mut Frame, area: Rect) {
    let width = 46_u16.min(area.width);
    let height = 4_u16.min(area.height);
    let banner = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(Span::styled(
            "Ticket booked successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Check your profile for details.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Clear, banner);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        banner,
    );
}
