//! Result area: shown once a submission has settled

use crate::tui::state::FormState;
use carquote_domain::PredictionState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const RESULT_LABEL: &str = "Estimated Price:";

pub struct ResultWidget<'a> {
    state: &'a FormState,
}

impl<'a> ResultWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ResultWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let prediction = self.state.prediction();
        // Nothing is drawn until a submission settles
        let Some(display) = prediction.display() else {
            return;
        };

        let color = match prediction {
            PredictionState::Success(estimate) if estimate.price().is_some() => Color::Green,
            PredictionState::Success(_) => Color::Yellow,
            _ => Color::Red,
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", RESULT_LABEL),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                display,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Result "))
            .render(area, buf);
    }
}
