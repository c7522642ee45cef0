//! TUI application: main loop
//!
//! Architecture:
//! ```text
//! FormApp (select! loop)              submit task (tokio::spawn)
//!   ├─ crossterm EventStream            └─ SubmitQuoteUseCase::run()
//!   ├─ outcome_rx (PredictionState)  <──────── outcome_tx
//!   └─ tick_interval (flash expiry)
//! ```
//!
//! The loop owns the [`FormState`]; a submission runs in its own task so
//! the form keeps redrawing while the request is in flight.

use super::mode::KeyHandler;
use super::state::FormState;
use super::widgets::{
    FormLayout, form::FormWidget, header::HeaderWidget, options::OptionsWidget,
    result::ResultWidget, status_bar::StatusBarWidget,
};
use carquote_application::{PricePredictor, SubmitQuoteUseCase};
use carquote_domain::{PredictionState, QuoteRequest};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// How long a flash message stays in the status bar
const FLASH_TTL: Duration = Duration::from_secs(5);

/// Interactive price prediction form
pub struct FormApp<P: PricePredictor + ?Sized + 'static> {
    use_case: SubmitQuoteUseCase<P>,
    outcome_tx: mpsc::UnboundedSender<PredictionState>,
    outcome_rx: mpsc::UnboundedReceiver<PredictionState>,
}

impl<P: PricePredictor + ?Sized + 'static> FormApp<P> {
    pub fn new(predictor: Arc<P>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            use_case: SubmitQuoteUseCase::new(predictor),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Run the form until the user quits
    pub async fn run(&mut self, initial: QuoteRequest) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = FormState::with_request(initial);
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        info!("Form started");

        loop {
            terminal.draw(|frame| Self::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    self.handle_terminal_event(&mut state, term_event);
                }

                // Settled outcome of the in-flight request
                Some(outcome) = self.outcome_rx.recv() => {
                    debug!("Request settled: {}", outcome.as_str());
                    state.settle(outcome);
                }

                _ = tick.tick() => {
                    state.expire_flash(FLASH_TTL);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("Form closed");
        Ok(())
    }

    fn handle_terminal_event(&self, state: &mut FormState, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = KeyHandler::handle(state.focus, key);
                if let Some(request) = state.apply(action) {
                    self.dispatch(request);
                }
            }
            // Resize and other events just trigger a redraw
            _ => {}
        }
    }

    /// Send the request in the background and report its outcome
    fn dispatch(&self, request: QuoteRequest) {
        let use_case = self.use_case.clone();
        let outcome_tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = use_case.run(&request).await;
            let _ = outcome_tx.send(outcome);
        });
    }

    fn render(frame: &mut ratatui::Frame, state: &FormState) {
        let layout = FormLayout::compute(frame.area());

        frame.render_widget(HeaderWidget, layout.header);
        frame.render_widget(FormWidget::new(state), layout.form);
        frame.render_widget(OptionsWidget::new(state), layout.options);
        frame.render_widget(ResultWidget::new(state), layout.result);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);
    }
}
