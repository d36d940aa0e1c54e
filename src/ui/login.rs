use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::ui::centered_rect;

pub fn render_login(app: &App, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(60, 40, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Name input
            Constraint::Min(1),    // Known users
            Constraint::Length(3), // Help
        ])
        .split(popup);

    let title = Paragraph::new("🌆 Chennai AI Risk Chatbot")
        .block(
            Block::bordered()
                .title("Welcome")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Green)
        .alignment(Alignment::Center);
    title.render(layout[0], buf);

    let input = Paragraph::new(format!("> {}", app.name_input))
        .block(
            Block::bordered()
                .title("👤 Enter your name to begin")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow);
    input.render(layout[1], buf);

    let users = app.store.users();
    let mut lines = vec![Line::from("Returning users pick up where they left off:")];
    if users.is_empty() {
        lines.push(Line::from("  (no conversations yet)"));
    } else {
        for user in users {
            lines.push(Line::from(format!("  🧑 {user}")));
        }
    }
    let known = Paragraph::new(lines).block(
        Block::bordered()
            .title("Chat History")
            .border_type(BorderType::Rounded),
    );
    known.render(layout[2], buf);

    let help = Paragraph::new("Enter: start chatting • Esc: quit")
        .block(
            Block::bordered()
                .title("Controls")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow)
        .alignment(Alignment::Center);
    help.render(layout[3], buf);
}
