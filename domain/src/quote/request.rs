//! Quote Request entity

use super::field::{FieldKind, QuoteField};
use super::options::allowed_values;
use crate::core::error::DomainError;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Vehicle attributes sent to the prediction service
///
/// Holds one string value per [`QuoteField`]; every value starts empty.
/// Values are stored exactly as entered: no trimming and no case
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    values: [String; 13],
}

impl QuoteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: QuoteField) -> &str {
        &self.values[field.index()]
    }

    /// Replace the value at `field`
    pub fn set(&mut self, field: QuoteField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, field: QuoteField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Fields whose value is still empty, in wire order
    pub fn missing_fields(&self) -> Vec<QuoteField> {
        QuoteField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// Check the request the way the form controls do before submission.
    ///
    /// Mandatory fields are checked first; after that numeric fields must
    /// hold a number and select fields one of their allowed values.
    pub fn validate(&self) -> Result<(), DomainError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::MissingFields(missing));
        }

        for field in QuoteField::ALL {
            let value = self.get(field);
            match field.kind() {
                FieldKind::Number { integer } => {
                    if !is_number(value, integer) {
                        return Err(DomainError::NotANumber {
                            field,
                            value: value.to_string(),
                        });
                    }
                }
                FieldKind::Select => {
                    let allowed = allowed_values(field).unwrap_or_default();
                    if !allowed.contains(&value) {
                        return Err(DomainError::InvalidOption {
                            field,
                            value: value.to_string(),
                        });
                    }
                }
                FieldKind::Text => {}
            }
        }

        Ok(())
    }

    /// Iterate `(field, value)` pairs in wire order
    pub fn iter(&self) -> impl Iterator<Item = (QuoteField, &str)> {
        QuoteField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }
}

/// Whether `value` parses as a finite number (and a whole one when `integer`)
pub fn is_number(value: &str, integer: bool) -> bool {
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => !integer || n.fract() == 0.0,
        _ => false,
    }
}

impl Serialize for QuoteRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(QuoteField::ALL.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> QuoteRequest {
        QuoteRequest::new()
            .with(QuoteField::Year, "2015")
            .with(QuoteField::Odometer, "60000.5")
            .with(QuoteField::Manufacturer, "Toyota")
            .with(QuoteField::Model, "corolla LE")
            .with(QuoteField::Condition, "excellent")
            .with(QuoteField::Cylinders, "4 cylinders")
            .with(QuoteField::Fuel, "gas")
            .with(QuoteField::TitleStatus, "clean")
            .with(QuoteField::Transmission, "automatic")
            .with(QuoteField::Drive, "fwd")
            .with(QuoteField::Size, "mid-size")
            .with(QuoteField::Type, "sedan")
            .with(QuoteField::PaintColor, "white")
    }

    #[test]
    fn test_new_request_is_empty() {
        let request = QuoteRequest::new();
        assert_eq!(request.missing_fields().len(), 13);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut request = QuoteRequest::new();
        request.set(QuoteField::Model, "civic");
        request.set(QuoteField::Model, "accord");
        assert_eq!(request.get(QuoteField::Model), "accord");
    }

    #[test]
    fn test_missing_fields_in_wire_order() {
        let request = complete_request()
            .with(QuoteField::PaintColor, "")
            .with(QuoteField::Year, "");
        assert_eq!(
            request.missing_fields(),
            vec![QuoteField::Year, QuoteField::PaintColor]
        );
        assert!(matches!(
            request.validate(),
            Err(DomainError::MissingFields(ref fields)) if fields.len() == 2
        ));
    }

    #[test]
    fn test_validate_complete_request() {
        assert!(complete_request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_numeric_year() {
        let request = complete_request().with(QuoteField::Year, "twenty");
        assert!(matches!(
            request.validate(),
            Err(DomainError::NotANumber { field: QuoteField::Year, .. })
        ));

        let request = complete_request().with(QuoteField::Year, "2015.5");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_option() {
        let request = complete_request().with(QuoteField::Fuel, "steam");
        assert!(matches!(
            request.validate(),
            Err(DomainError::InvalidOption { field: QuoteField::Fuel, .. })
        ));
    }

    #[test]
    fn test_free_form_fields_pass_through() {
        let request = complete_request().with(QuoteField::Manufacturer, "  MeRcEdEs-Benz ");
        assert!(request.validate().is_ok());
        assert_eq!(request.get(QuoteField::Manufacturer), "  MeRcEdEs-Benz ");
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("2015", true));
        assert!(is_number("2015.0", true));
        assert!(is_number("60000.5", false));
        assert!(!is_number("60000.5", true));
        assert!(!is_number("", false));
        assert!(!is_number("NaN", false));
        assert!(!is_number("inf", false));
    }

    #[test]
    fn test_serializes_thirteen_string_keys() {
        let json = serde_json::to_value(complete_request()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 13);
        assert!(object.values().all(|v| v.is_string()));
        assert_eq!(object["year"], "2015");
        assert_eq!(object["title_status"], "clean");
        assert_eq!(object["type"], "sedan");
        assert_eq!(object["paint_color"], "white");
    }

    #[test]
    fn test_serialized_key_order() {
        let text = serde_json::to_string(&QuoteRequest::new()).unwrap();
        assert!(text.starts_with(r#"{"year":"","odometer":"","manufacturer":"""#));
        assert!(text.ends_with(r#""type":"","paint_color":""}"#));
    }
}
