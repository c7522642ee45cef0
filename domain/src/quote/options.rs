//! Fixed option sets for the categorical quote fields

use super::field::QuoteField;

pub const CONDITIONS: &[&str] = &["new", "like new", "excellent", "good", "fair", "salvage"];
pub const CYLINDERS: &[&str] = &[
    "3 cylinders",
    "4 cylinders",
    "5 cylinders",
    "6 cylinders",
    "8 cylinders",
    "other",
];
pub const FUELS: &[&str] = &["gas", "diesel", "electric", "hybrid", "other"];
pub const TITLE_STATUSES: &[&str] = &["clean", "salvage", "rebuilt", "lien", "missing", "parts only"];
pub const TRANSMISSIONS: &[&str] = &["automatic", "manual", "other"];
pub const DRIVES: &[&str] = &["4wd", "fwd", "rwd"];
pub const SIZES: &[&str] = &["compact", "mid-size", "full-size", "subcompact", "other"];
pub const TYPES: &[&str] = &["sedan", "SUV", "truck", "coupe", "convertible", "van", "wagon", "other"];
pub const PAINT_COLORS: &[&str] = &["black", "white", "red", "blue", "silver", "green", "yellow", "other"];

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Value sent on the wire (empty for the placeholder)
    pub value: &'static str,
    /// Text shown to the user
    pub label: String,
}

impl SelectOption {
    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty()
    }
}

/// Allowed values for a categorical field, `None` for free-form and numeric fields
pub fn allowed_values(field: QuoteField) -> Option<&'static [&'static str]> {
    match field {
        QuoteField::Condition => Some(CONDITIONS),
        QuoteField::Cylinders => Some(CYLINDERS),
        QuoteField::Fuel => Some(FUELS),
        QuoteField::TitleStatus => Some(TITLE_STATUSES),
        QuoteField::Transmission => Some(TRANSMISSIONS),
        QuoteField::Drive => Some(DRIVES),
        QuoteField::Size => Some(SIZES),
        QuoteField::Type => Some(TYPES),
        QuoteField::PaintColor => Some(PAINT_COLORS),
        QuoteField::Year | QuoteField::Odometer | QuoteField::Manufacturer | QuoteField::Model => {
            None
        }
    }
}

/// Rendered option list: the blank placeholder first, then every allowed value.
///
/// Returns an empty list for fields that are not selects.
pub fn select_options(field: QuoteField) -> Vec<SelectOption> {
    let Some(values) = allowed_values(field) else {
        return Vec::new();
    };

    let mut options = Vec::with_capacity(values.len() + 1);
    options.push(SelectOption {
        value: "",
        label: field.label().to_string(),
    });
    options.extend(values.iter().map(|&value| SelectOption {
        value,
        label: option_label(field, value),
    }));
    options
}

/// Display text for an option value
pub fn option_label(field: QuoteField, value: &str) -> String {
    match field {
        QuoteField::Drive => value.to_uppercase(),
        QuoteField::Cylinders => value.to_string(),
        _ => capitalize(value),
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(field: QuoteField) -> Vec<&'static str> {
        select_options(field).iter().map(|o| o.value).collect()
    }

    #[test]
    fn test_option_lists_match_enumerations() {
        assert_eq!(
            values(QuoteField::Condition),
            vec!["", "new", "like new", "excellent", "good", "fair", "salvage"]
        );
        assert_eq!(
            values(QuoteField::Cylinders),
            vec![
                "",
                "3 cylinders",
                "4 cylinders",
                "5 cylinders",
                "6 cylinders",
                "8 cylinders",
                "other"
            ]
        );
        assert_eq!(values(QuoteField::Fuel), vec!["", "gas", "diesel", "electric", "hybrid", "other"]);
        assert_eq!(
            values(QuoteField::TitleStatus),
            vec!["", "clean", "salvage", "rebuilt", "lien", "missing", "parts only"]
        );
        assert_eq!(values(QuoteField::Transmission), vec!["", "automatic", "manual", "other"]);
        assert_eq!(values(QuoteField::Drive), vec!["", "4wd", "fwd", "rwd"]);
        assert_eq!(
            values(QuoteField::Size),
            vec!["", "compact", "mid-size", "full-size", "subcompact", "other"]
        );
        assert_eq!(
            values(QuoteField::Type),
            vec!["", "sedan", "SUV", "truck", "coupe", "convertible", "van", "wagon", "other"]
        );
        assert_eq!(
            values(QuoteField::PaintColor),
            vec!["", "black", "white", "red", "blue", "silver", "green", "yellow", "other"]
        );
    }

    #[test]
    fn test_placeholder_is_first_and_labelled() {
        for field in QuoteField::ALL.into_iter().filter(QuoteField::is_select) {
            let options = select_options(field);
            assert!(options[0].is_placeholder());
            assert_eq!(options[0].label, field.label());
            assert_eq!(options.iter().filter(|o| o.is_placeholder()).count(), 1);
        }
    }

    #[test]
    fn test_non_select_fields_have_no_options() {
        assert!(select_options(QuoteField::Year).is_empty());
        assert!(select_options(QuoteField::Manufacturer).is_empty());
        assert!(allowed_values(QuoteField::Odometer).is_none());
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(QuoteField::Condition, "like new"), "Like new");
        assert_eq!(option_label(QuoteField::Drive, "4wd"), "4WD");
        assert_eq!(option_label(QuoteField::Cylinders, "4 cylinders"), "4 cylinders");
        assert_eq!(option_label(QuoteField::Type, "SUV"), "SUV");
    }
}
