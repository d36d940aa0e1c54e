use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::history::Role;

const PREVIEW_WIDTH: usize = 22;

/// Per-user history, mirroring the original sidebar: each user's own
/// messages, newest last.
pub fn render_sidebar(app: &App, area: Rect, buf: &mut Buffer) {
    let active = app.session.as_ref().map(|s| s.username.as_str());

    let mut lines = Vec::new();
    for user in app.store.users() {
        let style = if Some(user.as_str()) == active {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(Span::styled(format!("🧑 {user}"), style)));

        for turn in app.store.turns(&user).unwrap_or(&[]) {
            if turn.role == Role::User {
                lines.push(Line::from(format!("- {}", preview(&turn.content))));
            }
        }
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::from("(no conversations yet)"));
    }

    let sidebar = Paragraph::new(Text::from(lines)).block(
        Block::bordered()
            .title("📜 History by User")
            .border_type(BorderType::Rounded),
    );
    sidebar.render(area, buf);
}

fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let clipped: String = chars.by_ref().take(PREVIEW_WIDTH).collect();
    if chars.next().is_some() {
        format!("{clipped}…")
    } else {
        clipped
    }
}
