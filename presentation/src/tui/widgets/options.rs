//! Options panel: every choice of the focused select field

use crate::tui::mode::Focus;
use crate::tui::state::FormState;
use carquote_domain::{FieldKind, QuoteField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct OptionsWidget<'a> {
    state: &'a FormState,
}

impl<'a> OptionsWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    fn option_lines(&self, field: QuoteField) -> (Vec<Line<'a>>, usize) {
        let (options, selected) = self.state.select_position(field);
        let lines = options
            .into_iter()
            .enumerate()
            .map(|(i, option)| {
                let mut style = if option.is_placeholder() {
                    Style::default().fg(Color::DarkGray)
                } else {
                    Style::default().fg(Color::White)
                };
                let marker = if i == selected {
                    style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                    "● "
                } else {
                    "  "
                };
                Line::from(vec![Span::styled(marker, style), Span::styled(option.label, style)])
            })
            .collect();
        (lines, selected)
    }

    fn hint_lines(&self) -> Vec<Line<'a>> {
        let hint = Style::default().fg(Color::DarkGray);
        let text = match self.state.focus {
            Focus::Field(field) => match field.kind() {
                FieldKind::Number { integer: true } => "Whole number",
                FieldKind::Number { integer: false } => "Number",
                _ => "Free text, sent as typed",
            },
            Focus::Submit => "Enter to request a prediction",
        };
        vec![Line::from(Span::styled(text, hint))]
    }
}

impl<'a> Widget for OptionsWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let select = match self.state.focus {
            Focus::Field(field) if field.is_select() => Some(field),
            _ => None,
        };

        let Some(field) = select else {
            Paragraph::new(self.hint_lines())
                .block(panel(" Options ".to_string()))
                .wrap(Wrap { trim: true })
                .render(area, buf);
            return;
        };

        let (lines, selected) = self.option_lines(field);
        let inner_height = area.height.saturating_sub(2) as usize;
        let scroll = if inner_height > 0 && selected >= inner_height {
            selected + 1 - inner_height
        } else {
            0
        };

        Paragraph::new(lines)
            .block(panel(format!(" {} ", field.label())))
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(Color::Gray))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::mode::Action;
    use carquote_domain::select_options;

    fn render(state: &FormState, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        OptionsWidget::new(state).render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lists_every_option_of_focused_select() {
        let mut state = FormState::new();
        state.focus = Focus::Field(QuoteField::Condition);
        let text = render(&state, 40, 12);
        for option in select_options(QuoteField::Condition) {
            assert!(text.contains(&option.label), "missing {}", option.label);
        }
    }

    #[test]
    fn test_marks_current_option() {
        let mut state = FormState::new();
        state.focus = Focus::Field(QuoteField::Transmission);
        state.apply(Action::NextOption);
        let text = render(&state, 40, 8);
        assert!(text.contains("● Automatic"));
        assert!(!text.contains("● Manual"));
    }

    #[test]
    fn test_scrolls_long_option_lists() {
        let mut state = FormState::new();
        state.focus = Focus::Field(QuoteField::PaintColor);
        for _ in 0..7 {
            state.apply(Action::NextOption);
        }
        let text = render(&state, 40, 6);
        assert!(text.contains("● Yellow"));
    }

    #[test]
    fn test_hint_for_input_fields() {
        let state = FormState::new();
        assert!(render(&state, 40, 5).contains("Whole number"));
    }
}
