use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Stylize},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::ui::{sidebar, transcript, visual};

pub fn render_chat(app: &App, area: Rect, buf: &mut Buffer) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(1)])
        .split(area);

    sidebar::render_sidebar(app, columns[0], buf);

    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(1),    // Transcript + visuals
            Constraint::Length(3), // Input box
            Constraint::Length(3), // Help
        ])
        .split(columns[1]);

    let username = app
        .session
        .as_ref()
        .map(|s| s.username.as_str())
        .unwrap_or("");
    let title = Paragraph::new(format!("🤖 Chennai AI Risk Chatbot — {username}"))
        .block(
            Block::bordered()
                .title("Ask about accidents, pollution, crime, heat, flood, population, or risk factors")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Green)
        .alignment(Alignment::Center);
    title.render(main[0], buf);

    // The visual panel re-derives table/chart/tips from the selected
    // assistant turn's stored (category, zone) tag.
    if app.visual_turn().is_some() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main[1]);
        transcript::render_transcript(app, body[0], buf);
        visual::render_visual(app, body[1], buf);
    } else {
        transcript::render_transcript(app, main[1], buf);
    }

    let input = Paragraph::new(format!("> {}", app.chat_input))
        .block(
            Block::bordered()
                .title("Type your query here")
                .border_type(BorderType::Rounded),
        )
        .fg(Color::Yellow);
    input.render(main[2], buf);

    let help = Paragraph::new(
        "Enter: send • ↑↓: scroll • Tab/Shift-Tab: pick visuals • Esc: switch user • Ctrl-C: quit",
    )
    .block(
        Block::bordered()
            .title("Controls")
            .border_type(BorderType::Rounded),
    )
    .fg(Color::Yellow)
    .alignment(Alignment::Center);
    help.render(main[3], buf);
}
