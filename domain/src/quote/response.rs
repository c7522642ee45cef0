//! Quote Response value object

use serde::{Deserialize, Serialize};

/// Body returned by the prediction service
///
/// The price is kept as a raw JSON value so that a wrongly typed field
/// decodes successfully and is reported as an unknown price instead of a
/// failed request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price_dollar: Option<serde_json::Value>,
}

impl QuoteResponse {
    pub fn with_price(price: f64) -> Self {
        Self {
            predicted_price_dollar: Some(serde_json::Value::from(price)),
        }
    }

    /// The predicted price, if the service sent a JSON number
    pub fn predicted_price(&self) -> Option<f64> {
        self.predicted_price_dollar.as_ref().and_then(|v| v.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> QuoteResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_numeric_price() {
        assert_eq!(
            parse(r#"{"predicted_price_dollar": 12345.678}"#).predicted_price(),
            Some(12345.678)
        );
        assert_eq!(parse(r#"{"predicted_price_dollar": 9000}"#).predicted_price(), Some(9000.0));
    }

    #[test]
    fn test_missing_or_non_numeric_price() {
        assert_eq!(parse("{}").predicted_price(), None);
        assert_eq!(parse(r#"{"predicted_price_dollar": null}"#).predicted_price(), None);
        assert_eq!(parse(r#"{"predicted_price_dollar": "12000"}"#).predicted_price(), None);
        assert_eq!(parse(r#"{"predicted_price_dollar": [1]}"#).predicted_price(), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let response = parse(r#"{"predicted_price_dollar": 1.5, "model_version": "v2"}"#);
        assert_eq!(response.predicted_price(), Some(1.5));
    }
}
