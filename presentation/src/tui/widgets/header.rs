//! Header widget: application title

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const TITLE: &str = "Used Car Price Prediction";

pub struct HeaderWidget;

impl Widget for HeaderWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(TITLE)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL))
            .render(area, buf);
    }
}
