use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::app::App;
use crate::history::Role;

pub fn render_transcript(app: &App, area: Rect, buf: &mut Buffer) {
    let content = match &app.session {
        Some(session) if !session.turns.is_empty() => {
            let mut lines = Vec::new();

            for (index, turn) in session.turns.iter().enumerate() {
                let (icon, name, style) = match turn.role {
                    Role::User => ("🧑", "You", Style::default().fg(Color::Cyan)),
                    Role::Assistant => ("🤖", "AI", Style::default().fg(Color::Green)),
                };
                let selected = app.visual_index == Some(index);

                let mut header = vec![Span::styled(
                    format!("{icon} {name} {}", turn.time),
                    style.add_modifier(Modifier::BOLD),
                )];
                if selected {
                    header.push(Span::styled(
                        "  ◀ visuals",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                lines.push(Line::from(header));

                for content_line in turn.content.lines() {
                    lines.push(Line::from(vec![
                        Span::styled("    ", Style::default()),
                        Span::styled(content_line.to_string(), Style::default().fg(Color::White)),
                    ]));
                }
                lines.push(Line::from(""));
            }
            Text::from(lines)
        }
        _ => Text::from(vec![
            Line::from("Welcome to the Chennai AI Risk Chatbot!"),
            Line::from(""),
            Line::from("Try asking: 'flood in Adyar' or 'risk factors in Anna Nagar'"),
        ]),
    };

    // Stick to the bottom of the transcript; chat_scroll counts lines the
    // user has scrolled back up.
    let inner_height = area.height.saturating_sub(2);
    let total_lines = content.lines.len() as u16;
    let max_scroll = total_lines.saturating_sub(inner_height);
    let offset = max_scroll.saturating_sub(app.chat_scroll.min(max_scroll));

    let transcript = Paragraph::new(content)
        .block(
            Block::bordered()
                .title("Conversation (↑↓ to scroll)")
                .border_type(BorderType::Rounded),
        )
        .scroll((offset, 0));

    transcript.render(area, buf);
}
