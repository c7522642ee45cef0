//! Focus model and key mapping
//!
//! Focus moves through the thirteen fields in wire order and then the
//! submit control. What a key does depends on the kind of control focused:
//! - Text/number field: typing, cursor movement, backspace
//! - Select field: left/right/space cycle options, backspace clears
//! - Submit control: Enter or space submits

use carquote_domain::{FieldKind, QuoteField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Focused control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(QuoteField),
    Submit,
}

impl Focus {
    /// Next control in tab order (wraps)
    pub fn next(self) -> Self {
        match self {
            Focus::Field(field) => QuoteField::ALL
                .get(field.index() + 1)
                .map_or(Focus::Submit, |f| Focus::Field(*f)),
            Focus::Submit => Focus::Field(QuoteField::ALL[0]),
        }
    }

    /// Previous control in tab order (wraps)
    pub fn prev(self) -> Self {
        match self {
            Focus::Field(field) if field.index() == 0 => Focus::Submit,
            Focus::Field(field) => Focus::Field(QuoteField::ALL[field.index() - 1]),
            Focus::Submit => Focus::Field(QuoteField::ALL[QuoteField::ALL.len() - 1]),
        }
    }
}

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit application
    Quit,
    /// Move focus to the next control
    FocusNext,
    /// Move focus to the previous control
    FocusPrev,
    /// Insert character into the focused text/number field
    InsertChar(char),
    /// Delete character (Backspace); clears a select
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorStart,
    CursorEnd,
    /// Select the next option of the focused select
    NextOption,
    /// Select the previous option of the focused select
    PrevOption,
    /// Submit the form
    Submit,
    /// No action
    None,
}

/// Key event handler - maps key events to actions based on the focused control
pub struct KeyHandler;

impl KeyHandler {
    pub fn handle(focus: Focus, key: KeyEvent) -> Action {
        // Global bindings
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => {
                return Action::Quit;
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => return Action::Submit,
            (KeyCode::Tab, _) | (KeyCode::Down, _) => return Action::FocusNext,
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => return Action::FocusPrev,
            _ => {}
        }

        match focus {
            Focus::Submit => Self::handle_submit(key),
            Focus::Field(field) => match field.kind() {
                FieldKind::Select => Self::handle_select(key),
                FieldKind::Text | FieldKind::Number { .. } => Self::handle_input(key),
            },
        }
    }

    fn handle_input(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, _) => Action::FocusNext,
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorStart,
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
            _ => Action::None,
        }
    }

    fn handle_select(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::FocusNext,
            KeyCode::Right | KeyCode::Char(' ') | KeyCode::Char('l') => Action::NextOption,
            KeyCode::Left | KeyCode::Char('h') => Action::PrevOption,
            KeyCode::Backspace | KeyCode::Delete => Action::DeleteChar,
            _ => Action::None,
        }
    }

    fn handle_submit(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Submit,
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_focus_order() {
        assert_eq!(
            Focus::Field(QuoteField::Year).next(),
            Focus::Field(QuoteField::Odometer)
        );
        assert_eq!(Focus::Field(QuoteField::PaintColor).next(), Focus::Submit);
        assert_eq!(Focus::Submit.next(), Focus::Field(QuoteField::Year));
        assert_eq!(Focus::Field(QuoteField::Year).prev(), Focus::Submit);
        assert_eq!(Focus::Submit.prev(), Focus::Field(QuoteField::PaintColor));
    }

    #[test]
    fn test_global_keys() {
        let focus = Focus::Field(QuoteField::Model);
        assert_eq!(
            KeyHandler::handle(focus, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Esc)), Action::Quit);
        assert_eq!(
            KeyHandler::handle(focus, KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            Action::Submit
        );
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Tab)), Action::FocusNext);
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::BackTab)), Action::FocusPrev);
    }

    #[test]
    fn test_input_keys() {
        let focus = Focus::Field(QuoteField::Manufacturer);
        assert_eq!(
            KeyHandler::handle(focus, key(KeyCode::Char('h'))),
            Action::InsertChar('h')
        );
        assert_eq!(
            KeyHandler::handle(focus, KeyEvent::new(KeyCode::Char('B'), KeyModifiers::SHIFT)),
            Action::InsertChar('B')
        );
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Backspace)), Action::DeleteChar);
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Left)), Action::CursorLeft);
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Enter)), Action::FocusNext);
    }

    #[test]
    fn test_select_keys() {
        let focus = Focus::Field(QuoteField::Condition);
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Right)), Action::NextOption);
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Char(' '))), Action::NextOption);
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Left)), Action::PrevOption);
        assert_eq!(KeyHandler::handle(focus, key(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_submit_keys() {
        assert_eq!(KeyHandler::handle(Focus::Submit, key(KeyCode::Enter)), Action::Submit);
        assert_eq!(KeyHandler::handle(Focus::Submit, key(KeyCode::Char(' '))), Action::Submit);
        assert_eq!(KeyHandler::handle(Focus::Submit, key(KeyCode::Char('q'))), Action::None);
    }
}
