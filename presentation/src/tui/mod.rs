//! Terminal form for the price prediction client
//!
//! A ratatui form with one control per quote field, a submit control and
//! a result area. Requests run in the background while the form redraws.

mod app;
mod mode;
mod state;
mod widgets;

pub use app::FormApp;
pub use mode::{Action, Focus, KeyHandler};
pub use state::FormState;
pub use widgets::FormLayout;
