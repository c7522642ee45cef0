//! Form session: the request being edited plus its prediction state

use crate::core::error::DomainError;
use crate::prediction::state::PredictionState;
use crate::quote::field::QuoteField;
use crate::quote::request::QuoteRequest;

/// State container owned by the form for its whole lifetime
///
/// Field values and the prediction state live together so a submit can
/// only start from a settled state with a valid request.
#[derive(Debug, Clone, Default)]
pub struct QuoteSession {
    request: QuoteRequest,
    state: PredictionState,
}

impl QuoteSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from a pre-filled request
    pub fn with_request(request: QuoteRequest) -> Self {
        Self {
            request,
            state: PredictionState::Idle,
        }
    }

    pub fn request(&self) -> &QuoteRequest {
        &self.request
    }

    pub fn state(&self) -> &PredictionState {
        &self.state
    }

    pub fn update(&mut self, field: QuoteField, value: impl Into<String>) {
        self.request.set(field, value);
    }

    /// Enter the pending state and return the request to send.
    ///
    /// Any previous result is cleared. Nothing changes when a request is
    /// already in flight or the request fails validation.
    pub fn begin_submit(&mut self) -> Result<QuoteRequest, DomainError> {
        if self.state.is_pending() {
            return Err(DomainError::AlreadyPending);
        }
        self.request.validate()?;
        self.state = PredictionState::Pending;
        Ok(self.request.clone())
    }

    /// Leave the pending state with the given outcome.
    ///
    /// Returns `false` (and keeps the current state) when nothing was pending
    /// or the outcome is itself `Idle`/`Pending`.
    pub fn settle(&mut self, outcome: PredictionState) -> bool {
        if !self.state.is_pending()
            || matches!(outcome, PredictionState::Idle | PredictionState::Pending)
        {
            return false;
        }
        self.state = outcome;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::state::PriceEstimate;

    fn filled_session() -> QuoteSession {
        let mut session = QuoteSession::new();
        for (field, value) in [
            (QuoteField::Year, "2018"),
            (QuoteField::Odometer, "42000"),
            (QuoteField::Manufacturer, "ford"),
            (QuoteField::Model, "f-150"),
            (QuoteField::Condition, "good"),
            (QuoteField::Cylinders, "8 cylinders"),
            (QuoteField::Fuel, "gas"),
            (QuoteField::TitleStatus, "clean"),
            (QuoteField::Transmission, "automatic"),
            (QuoteField::Drive, "4wd"),
            (QuoteField::Size, "full-size"),
            (QuoteField::Type, "truck"),
            (QuoteField::PaintColor, "black"),
        ] {
            session.update(field, value);
        }
        session
    }

    #[test]
    fn test_starts_idle() {
        let session = QuoteSession::new();
        assert_eq!(*session.state(), PredictionState::Idle);
        assert_eq!(session.state().display(), None);
    }

    #[test]
    fn test_incomplete_request_stays_idle() {
        let mut session = QuoteSession::new();
        session.update(QuoteField::Year, "2018");
        let err = session.begin_submit().unwrap_err();
        assert!(matches!(err, DomainError::MissingFields(_)));
        assert_eq!(*session.state(), PredictionState::Idle);
    }

    #[test]
    fn test_submit_cycle() {
        let mut session = filled_session();
        let sent = session.begin_submit().unwrap();
        assert_eq!(sent.get(QuoteField::Model), "f-150");
        assert!(session.state().is_pending());
        assert!(!session.state().submit_enabled());

        assert!(session.settle(PredictionState::Success(PriceEstimate::Known(31000.0))));
        assert_eq!(session.state().display().as_deref(), Some("$31000.00"));
        assert!(session.state().submit_enabled());
    }

    #[test]
    fn test_no_second_submit_while_pending() {
        let mut session = filled_session();
        session.begin_submit().unwrap();
        assert!(matches!(
            session.begin_submit(),
            Err(DomainError::AlreadyPending)
        ));
    }

    #[test]
    fn test_resubmit_clears_previous_result() {
        let mut session = filled_session();
        session.begin_submit().unwrap();
        session.settle(PredictionState::Failed);
        assert_eq!(session.state().display().as_deref(), Some("$Error"));

        session.begin_submit().unwrap();
        assert_eq!(session.state().display(), None);
    }

    #[test]
    fn test_settle_requires_pending() {
        let mut session = filled_session();
        assert!(!session.settle(PredictionState::Failed));
        assert_eq!(*session.state(), PredictionState::Idle);

        session.begin_submit().unwrap();
        assert!(!session.settle(PredictionState::Idle));
        assert!(session.state().is_pending());
    }
}
