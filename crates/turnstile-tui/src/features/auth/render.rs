//! Auth view rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use turnstile_core::forms::FieldErrors;

use super::state::{AuthMode, AuthState, LoginField, SignupField};
use crate::common::TextField;
use crate::state::AppState;

const CARD_WIDTH: u16 = 52;

pub fn render(app: &AppState, frame: &mut Frame, area: Rect) {
    let auth = &app.auth;

    let mut lines: Vec<Line> = Vec::new();
    lines.push(tabs_line(auth.mode));
    lines.push(Line::default());

    match auth.mode {
        AuthMode::Login => {
            push_field(
                &mut lines,
                "Email",
                &auth.login.email,
                auth.login.focus == LoginField::Email,
                false,
                &auth.login.errors,
                "email",
            );
            push_field(
                &mut lines,
                "Password",
                &auth.login.password,
                auth.login.focus == LoginField::Password,
                true,
                &auth.login.errors,
                "password",
            );
        }
        AuthMode::Signup => {
            push_field(
                &mut lines,
                "Name",
                &auth.signup.name,
                auth.signup.focus == SignupField::Name,
                false,
                &auth.signup.errors,
                "name",
            );
            push_field(
                &mut lines,
                "Email",
                &auth.signup.email,
                auth.signup.focus == SignupField::Email,
                false,
                &auth.signup.errors,
                "email",
            );
            push_field(
                &mut lines,
                "Password",
                &auth.signup.password,
                auth.signup.focus == SignupField::Password,
                true,
                &auth.signup.errors,
                "password",
            );
            lines.push(role_line(auth));
            lines.push(Line::default());
        }
    }

    lines.push(Line::default());
    lines.push(submit_line(auth));

    let card = centered_card(area, lines.len() as u16 + 2);
    let title = match auth.mode {
        AuthMode::Login => " Sign In ",
        AuthMode::Signup => " Sign Up ",
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center),
    );
    frame.render_widget(widget, card);
}

fn tabs_line(mode: AuthMode) -> Line<'static> {
    let active = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);
    let (login_style, signup_style) = match mode {
        AuthMode::Login => (active, inactive),
        AuthMode::Signup => (inactive, active),
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled("Sign In", login_style),
        Span::raw("   "),
        Span::styled("Sign Up", signup_style),
        Span::styled("   (Tab to switch)", Style::default().fg(Color::DarkGray)),
    ])
}

fn push_field(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    field: &TextField,
    focused: bool,
    mask: bool,
    errors: &FieldErrors,
    error_key: &str,
) {
    let shown = if mask {
        "\u{2022}".repeat(field.value().chars().count())
    } else {
        field.value().to_string()
    };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };
    let marker = if focused { "\u{203a} " } else { "  " };

    let mut spans = vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::raw(format!("{label:<10}")),
        Span::styled(shown, value_style),
    ];
    if focused {
        spans.push(Span::styled("\u{2581}", Style::default().fg(Color::Cyan)));
    }
    lines.push(Line::from(spans));

    if let Some(error) = errors.get(error_key) {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::raw(" ".repeat(10)),
            Span::styled(error.clone(), Style::default().fg(Color::Red)),
        ]));
    }
    lines.push(Line::default());
}

fn role_line(auth: &AuthState) -> Line<'static> {
    let focused = auth.signup.focus == SignupField::Role;
    let marker = if focused { "\u{203a} " } else { "  " };
    let role_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::raw(format!("{:<10}", "Role")),
        Span::styled(
            format!("\u{2039} {} \u{203a}", auth.signup.role),
            role_style,
        ),
    ])
}

fn submit_line(auth: &AuthState) -> Line<'static> {
    let text = match (auth.mode, auth.is_submitting()) {
        (AuthMode::Login, false) => "Enter to sign in \u{b7} Esc to quit",
        (AuthMode::Login, true) => "Signing in\u{2026}",
        (AuthMode::Signup, false) => "Enter to create account \u{b7} Esc to quit",
        (AuthMode::Signup, true) => "Creating account\u{2026}",
    };
    Line::from(Span::styled(
        format!("  {text}"),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Centers the auth card in the available area.
fn centered_card(area: Rect, height: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(CARD_WIDTH.min(area.width)),
        Constraint::Fill(1),
    ])
    .split(vertical[1]);
    horizontal[1]
}
