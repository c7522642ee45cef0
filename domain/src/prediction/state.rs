//! Prediction state machine
//!
//! ```text
//! Idle ──submit──> Pending ──response──> Success(estimate)
//!                     │                      │
//!                     └──error──> Failed     └──submit──> Pending ...
//! ```

use crate::quote::response::QuoteResponse;

/// Label of the submit control while idle or settled
pub const SUBMIT_LABEL: &str = "Get Prediction";
/// Label of the submit control while a request is in flight
pub const BUSY_LABEL: &str = "Predicting...";

/// Price reported by a successful request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceEstimate {
    Known(f64),
    /// The response carried no numeric price
    Unknown,
}

impl PriceEstimate {
    /// Formatted value without the currency symbol
    pub fn formatted(&self) -> String {
        match self {
            PriceEstimate::Known(price) => format!("{:.2}", price),
            PriceEstimate::Unknown => "N/A".to_string(),
        }
    }

    pub fn price(&self) -> Option<f64> {
        match self {
            PriceEstimate::Known(price) => Some(*price),
            PriceEstimate::Unknown => None,
        }
    }
}

impl From<&QuoteResponse> for PriceEstimate {
    fn from(response: &QuoteResponse) -> Self {
        match response.predicted_price() {
            Some(price) => PriceEstimate::Known(price),
            None => PriceEstimate::Unknown,
        }
    }
}

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PredictionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    Success(PriceEstimate),
    /// The request failed (HTTP status, transport or unreadable body)
    Failed,
}

impl PredictionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, PredictionState::Pending)
    }

    /// Text for the result area, `None` when no result area is shown
    pub fn display(&self) -> Option<String> {
        match self {
            PredictionState::Idle | PredictionState::Pending => None,
            PredictionState::Success(estimate) => Some(format!("${}", estimate.formatted())),
            PredictionState::Failed => Some("$Error".to_string()),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_pending() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_pending()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionState::Idle => "idle",
            PredictionState::Pending => "pending",
            PredictionState::Success(_) => "success",
            PredictionState::Failed => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_price_rounds_to_two_decimals() {
        let state = PredictionState::Success(PriceEstimate::Known(12345.678));
        assert_eq!(state.display().as_deref(), Some("$12345.68"));

        let state = PredictionState::Success(PriceEstimate::Known(9000.0));
        assert_eq!(state.display().as_deref(), Some("$9000.00"));
    }

    #[test]
    fn test_unknown_price_display() {
        let state = PredictionState::Success(PriceEstimate::Unknown);
        assert_eq!(state.display().as_deref(), Some("$N/A"));
    }

    #[test]
    fn test_failed_display() {
        assert_eq!(PredictionState::Failed.display().as_deref(), Some("$Error"));
    }

    #[test]
    fn test_no_result_area_while_idle_or_pending() {
        assert_eq!(PredictionState::Idle.display(), None);
        assert_eq!(PredictionState::Pending.display(), None);
    }

    #[test]
    fn test_submit_control() {
        assert_eq!(PredictionState::Pending.submit_label(), "Predicting...");
        assert!(!PredictionState::Pending.submit_enabled());

        for state in [
            PredictionState::Idle,
            PredictionState::Failed,
            PredictionState::Success(PriceEstimate::Unknown),
        ] {
            assert_eq!(state.submit_label(), "Get Prediction");
            assert!(state.submit_enabled());
        }
    }

    #[test]
    fn test_estimate_from_response() {
        assert_eq!(
            PriceEstimate::from(&QuoteResponse::with_price(42.5)),
            PriceEstimate::Known(42.5)
        );
        assert_eq!(
            PriceEstimate::from(&QuoteResponse::default()),
            PriceEstimate::Unknown
        );
    }
}
