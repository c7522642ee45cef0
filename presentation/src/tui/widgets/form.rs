//! Form widget: one row per quote field plus the submit control
//!
//! Text and number fields show their value (or the dimmed placeholder when
//! empty); select fields show the chosen option between `‹ ›` markers, or
//! the field label while the blank placeholder is selected.

use crate::tui::mode::Focus;
use crate::tui::state::FormState;
use carquote_domain::{FieldKind, QuoteField};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Width of the label column
const LABEL_WIDTH: usize = 18;

pub struct FormWidget<'a> {
    state: &'a FormState,
}

impl<'a> FormWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    fn field_line(&self, field: QuoteField) -> Line<'a> {
        let focused = self.state.focus == Focus::Field(field);
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
        ];

        match field.kind() {
            FieldKind::Select => spans.extend(self.select_spans(field, focused)),
            FieldKind::Text | FieldKind::Number { .. } => {
                spans.extend(self.input_spans(field, focused))
            }
        }

        Line::from(spans)
    }

    fn input_spans(&self, field: QuoteField, focused: bool) -> Vec<Span<'a>> {
        let value = self.state.value(field);
        let placeholder = Style::default().fg(Color::DarkGray);

        if !focused {
            return if value.is_empty() {
                vec![Span::styled(field.label(), placeholder)]
            } else {
                vec![Span::styled(value.to_string(), Style::default().fg(Color::White))]
            };
        }

        let cursor_style = Style::default().fg(Color::Black).bg(Color::Yellow);
        let cursor = self.state.cursor(field).min(value.len());
        let (before, after) = value.split_at(cursor);
        let mut chars = after.chars();
        let under_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());

        vec![
            Span::styled(before.to_string(), Style::default().fg(Color::White)),
            Span::styled(under_cursor, cursor_style),
            Span::styled(chars.as_str().to_string(), Style::default().fg(Color::White)),
        ]
    }

    fn select_spans(&self, field: QuoteField, focused: bool) -> Vec<Span<'a>> {
        let (options, index) = self.state.select_position(field);
        let option = &options[index];
        let arrow_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let value_style = if option.is_placeholder() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        vec![
            Span::styled("‹ ", arrow_style),
            Span::styled(option.label.clone(), value_style),
            Span::styled(" ›", arrow_style),
        ]
    }

    fn submit_line(&self) -> Line<'a> {
        let prediction = self.state.prediction();
        let focused = self.state.focus == Focus::Submit;

        let mut style = if prediction.submit_enabled() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        };
        if focused {
            style = style.add_modifier(Modifier::REVERSED);
        }

        Line::from(vec![
            Span::raw(if focused { "> " } else { "  " }),
            Span::styled(format!("[ {} ]", prediction.submit_label()), style),
        ])
    }

    /// Line index of the focused control
    fn focus_line(&self) -> usize {
        match self.state.focus {
            Focus::Field(field) => field.index(),
            // Blank separator line sits between the fields and the button
            Focus::Submit => QuoteField::ALL.len() + 1,
        }
    }
}

impl<'a> Widget for FormWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = QuoteField::ALL
            .iter()
            .map(|field| self.field_line(*field))
            .collect();
        lines.push(Line::raw(""));
        lines.push(self.submit_line());

        // Scroll so the focused control stays visible
        let inner_height = area.height.saturating_sub(2) as usize;
        let focus_line = self.focus_line();
        let scroll = if inner_height > 0 && focus_line >= inner_height {
            focus_line + 1 - inner_height
        } else {
            0
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Vehicle ")
            .style(Style::default().fg(Color::Gray));

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}
