//! Output formatting for one-shot submissions

pub mod console;
