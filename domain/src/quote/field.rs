//! Quote field value objects

/// How a field's value is entered on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Numeric input; `integer` fields reject fractional values
    Number { integer: bool },
    /// Free-form text, passed through untouched
    Text,
    /// Single choice from a fixed enumeration
    Select,
}

/// The thirteen fields of a Quote Request (Value Object)
///
/// Variants are declared in wire order, which is also the order the form
/// renders them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuoteField {
    Year,
    Odometer,
    Manufacturer,
    Model,
    Condition,
    Cylinders,
    Fuel,
    TitleStatus,
    Transmission,
    Drive,
    Size,
    Type,
    PaintColor,
}

impl QuoteField {
    /// Every field, in wire order
    pub const ALL: [QuoteField; 13] = [
        QuoteField::Year,
        QuoteField::Odometer,
        QuoteField::Manufacturer,
        QuoteField::Model,
        QuoteField::Condition,
        QuoteField::Cylinders,
        QuoteField::Fuel,
        QuoteField::TitleStatus,
        QuoteField::Transmission,
        QuoteField::Drive,
        QuoteField::Size,
        QuoteField::Type,
        QuoteField::PaintColor,
    ];

    /// JSON key used on the wire
    pub fn key(&self) -> &'static str {
        match self {
            QuoteField::Year => "year",
            QuoteField::Odometer => "odometer",
            QuoteField::Manufacturer => "manufacturer",
            QuoteField::Model => "model",
            QuoteField::Condition => "condition",
            QuoteField::Cylinders => "cylinders",
            QuoteField::Fuel => "fuel",
            QuoteField::TitleStatus => "title_status",
            QuoteField::Transmission => "transmission",
            QuoteField::Drive => "drive",
            QuoteField::Size => "size",
            QuoteField::Type => "type",
            QuoteField::PaintColor => "paint_color",
        }
    }

    /// Human-readable label, also used as the input placeholder
    pub fn label(&self) -> &'static str {
        match self {
            QuoteField::Year => "Year",
            QuoteField::Odometer => "Odometer (miles)",
            QuoteField::Manufacturer => "Manufacturer",
            QuoteField::Model => "Model",
            QuoteField::Condition => "Condition",
            QuoteField::Cylinders => "Cylinders",
            QuoteField::Fuel => "Fuel",
            QuoteField::TitleStatus => "Title Status",
            QuoteField::Transmission => "Transmission",
            QuoteField::Drive => "Drive",
            QuoteField::Size => "Size",
            QuoteField::Type => "Type",
            QuoteField::PaintColor => "Paint Color",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            QuoteField::Year => FieldKind::Number { integer: true },
            QuoteField::Odometer => FieldKind::Number { integer: false },
            QuoteField::Manufacturer | QuoteField::Model => FieldKind::Text,
            _ => FieldKind::Select,
        }
    }

    /// Position of this field in wire order
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_select(&self) -> bool {
        self.kind() == FieldKind::Select
    }
}

impl std::fmt::Display for QuoteField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for QuoteField {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuoteField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| crate::core::error::DomainError::UnknownField(s.to_string()))
    }
}
