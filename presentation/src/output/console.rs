//! Console output formatter for prediction results

use carquote_domain::PredictionState;
use colored::Colorize;

/// Formats a settled prediction state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Enable or disable ANSI colors for all formatted output
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Human-readable result line ("Estimated Price: $12345.68")
    pub fn format(state: &PredictionState) -> String {
        let Some(display) = state.display() else {
            return String::new();
        };

        let value = match state {
            PredictionState::Success(estimate) if estimate.price().is_some() => {
                display.green().bold()
            }
            PredictionState::Success(_) => display.yellow().bold(),
            _ => display.red().bold(),
        };

        format!("{} {}", "Estimated Price:".cyan(), value)
    }

    /// JSON object with the state, the display string and the raw price
    pub fn format_json(state: &PredictionState) -> String {
        let price = match state {
            PredictionState::Success(estimate) => estimate.price(),
            _ => None,
        };

        let value = serde_json::json!({
            "status": state.as_str(),
            "display": state.display(),
            "predicted_price_dollar": price,
        });

        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }
}
