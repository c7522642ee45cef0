//! Status bar widget: focus indicator, key hints and flash messages

use crate::tui::mode::Focus;
use crate::tui::state::FormState;
use carquote_domain::FieldKind;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a FormState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a FormState) -> Self {
        Self { state }
    }

    fn indicator(&self) -> (&'static str, Color) {
        if self.state.prediction().is_pending() {
            return ("BUSY", Color::Magenta);
        }
        match self.state.focus {
            Focus::Field(field) if field.is_select() => ("SELECT", Color::Cyan),
            Focus::Field(_) => ("EDIT", Color::Green),
            Focus::Submit => ("SUBMIT", Color::Blue),
        }
    }

    fn hints(&self) -> &'static str {
        match self.state.focus {
            Focus::Field(field) => match field.kind() {
                FieldKind::Select => "←/→:choose  Bksp:clear  Tab:next  Ctrl+S:submit  Esc:quit",
                _ => "Tab:next  Shift+Tab:prev  Ctrl+S:submit  Esc:quit",
            },
            Focus::Submit => "Enter:submit  Tab:next  Esc:quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let (indicator, color) = self.indicator();
        let indicator_style = Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD);
        let indicator_line = Line::from(Span::styled(format!(" {} ", indicator), indicator_style));
        let indicator_width = indicator.len() as u16 + 2;
        buf.set_line(area.x, area.y, &indicator_line, indicator_width);

        // Flash message replaces the key hints
        let (right_text, right_style) = match &self.state.flash_message {
            Some((flash, _)) => (
                flash.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (self.hints().to_string(), bg_style),
        };

        let right_width = right_text.chars().count() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        let left_edge = area.x + indicator_width + 1;
        if right_x >= left_edge {
            let right_line = Line::from(Span::styled(right_text, right_style));
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        } else {
            // Too narrow to right-align: truncate after the indicator
            let right_line = Line::from(Span::styled(right_text, right_style));
            buf.set_line(
                left_edge,
                area.y,
                &right_line,
                area.right().saturating_sub(left_edge),
            );
        }
    }
}
