//! TUI application state
//!
//! Single source of truth for everything the form renders.
//! Updated by the FormApp select! loop from key actions and request outcomes.

use super::mode::{Action, Focus};
use carquote_domain::{
    FieldKind, PredictionState, QuoteField, QuoteRequest, QuoteSession, SelectOption,
    select_options,
};
use std::time::{Duration, Instant};

/// Central form state, owned by the FormApp select! loop
pub struct FormState {
    pub session: QuoteSession,
    pub focus: Focus,
    /// Byte cursor per field (only meaningful for text and number fields)
    cursors: [usize; 13],
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::with_request(QuoteRequest::new())
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-filled values (from `--set`)
    pub fn with_request(request: QuoteRequest) -> Self {
        let mut cursors = [0; 13];
        for (field, value) in request.iter() {
            cursors[field.index()] = value.len();
        }
        Self {
            session: QuoteSession::with_request(request),
            focus: Focus::Field(QuoteField::Year),
            cursors,
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn prediction(&self) -> &PredictionState {
        self.session.state()
    }

    pub fn value(&self, field: QuoteField) -> &str {
        self.session.request().get(field)
    }

    pub fn cursor(&self, field: QuoteField) -> usize {
        self.cursors[field.index()]
    }

    /// Apply one key action.
    ///
    /// Returns the request to send when the action started a submission.
    pub fn apply(&mut self, action: Action) -> Option<QuoteRequest> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::InsertChar(c) => self.insert_char(c),
            Action::DeleteChar => self.delete_char(),
            Action::CursorLeft => self.move_cursor(-1),
            Action::CursorRight => self.move_cursor(1),
            Action::CursorStart => self.set_cursor_to(false),
            Action::CursorEnd => self.set_cursor_to(true),
            Action::NextOption => self.cycle_option(1),
            Action::PrevOption => self.cycle_option(-1),
            Action::Submit => return self.begin_submit(),
            Action::None => {}
        }
        None
    }

    // -- Field editing --

    fn focused_field(&self) -> Option<QuoteField> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }

    fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        match field.kind() {
            FieldKind::Select => return,
            FieldKind::Number { .. } if !is_numeric_char(c) => return,
            _ => {}
        }

        let cursor = self.cursor(field);
        let mut value = self.value(field).to_string();
        value.insert(cursor, c);
        self.session.update(field, value);
        self.cursors[field.index()] = cursor + c.len_utf8();
    }

    fn delete_char(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.is_select() {
            // Backspace resets a select to its placeholder
            self.session.update(field, "");
            return;
        }

        let cursor = self.cursor(field);
        if cursor == 0 {
            return;
        }
        let mut value = self.value(field).to_string();
        let prev = value[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        value.replace_range(prev..cursor, "");
        self.session.update(field, value);
        self.cursors[field.index()] = prev;
    }

    fn move_cursor(&mut self, delta: isize) {
        let Some(field) = self.focused_field() else {
            return;
        };
        if field.is_select() {
            self.cycle_option(delta);
            return;
        }

        let value = self.value(field);
        let cursor = self.cursor(field);
        let new_cursor = if delta < 0 {
            value[..cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0)
        } else {
            value[cursor..]
                .chars()
                .next()
                .map(|c| cursor + c.len_utf8())
                .unwrap_or(cursor)
        };
        self.cursors[field.index()] = new_cursor;
    }

    fn set_cursor_to(&mut self, end: bool) {
        if let Some(field) = self.focused_field() {
            self.cursors[field.index()] = if end { self.value(field).len() } else { 0 };
        }
    }

    /// Options of a select field and the index of its current value
    pub fn select_position(&self, field: QuoteField) -> (Vec<SelectOption>, usize) {
        let options = select_options(field);
        let current = self.value(field);
        let index = options
            .iter()
            .position(|o| o.value == current)
            .unwrap_or(0);
        (options, index)
    }

    fn cycle_option(&mut self, delta: isize) {
        let Some(field) = self.focused_field().filter(QuoteField::is_select) else {
            return;
        };
        let (options, index) = self.select_position(field);
        let len = options.len() as isize;
        let next = (index as isize + delta).rem_euclid(len) as usize;
        self.session.update(field, options[next].value);
    }

    // -- Submission --

    /// Try to enter the pending state.
    ///
    /// On rejection the reason is flashed and the offending field focused;
    /// no request is returned.
    pub fn begin_submit(&mut self) -> Option<QuoteRequest> {
        match self.session.begin_submit() {
            Ok(request) => {
                self.flash_message = None;
                Some(request)
            }
            Err(e) => {
                if let Some(field) = e.field() {
                    self.focus = Focus::Field(field);
                    self.cursors[field.index()] = self.value(field).len();
                }
                self.set_flash(e.to_string());
                None
            }
        }
    }

    /// Record the outcome of the in-flight request
    pub fn settle(&mut self, outcome: PredictionState) {
        self.session.settle(outcome);
    }

    // -- Flash --

    pub fn set_flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    pub fn expire_flash(&mut self, ttl: Duration) {
        if let Some((_, at)) = &self.flash_message
            && at.elapsed() >= ttl
        {
            self.flash_message = None;
        }
    }
}

/// Characters a number input accepts while typing
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}
