pub mod chat;
pub mod login;
pub mod sidebar;
pub mod style;
pub mod tips;
pub mod transcript;
pub mod visual;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Widget,
};

use crate::app::{App, AppMode};

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.mode {
            AppMode::Login => login::render_login(self, area, buf),
            AppMode::Chat => chat::render_chat(self, area, buf),
        }
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
