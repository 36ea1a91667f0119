use serde::{Deserialize, Serialize};

/// The output transformation requested for a resolved value.
///
/// Closed enumeration; extend only by adding a new case, never by changing
/// the behavior of an existing one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// The raw reference-list code itself.
    Code,
    /// French display label looked up from the reference list by code.
    DisplayFr,
    /// English display label looked up from the reference list by code.
    DisplayEn,
    /// URL/query-safe slug variant of the value.
    Utm,
    /// Raw free-text value, unmodified.
    #[default]
    Open,
}

impl Format {
    /// Parse a format identifier from a template token.
    ///
    /// Unrecognized identifiers are treated as `open` rather than rejected;
    /// templates are free-form author content.
    pub fn parse(ident: &str) -> Format {
        match ident {
            "code" => Format::Code,
            "display_fr" => Format::DisplayFr,
            "display_en" => Format::DisplayEn,
            "utm" => Format::Utm,
            _ => Format::Open,
        }
    }

    /// Get the format as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Code => "code",
            Format::DisplayFr => "display_fr",
            Format::DisplayEn => "display_en",
            Format::Utm => "utm",
            Format::Open => "open",
        }
    }

    /// Whether producing this format reads through a reference list.
    pub fn uses_reference_list(&self) -> bool {
        matches!(self, Format::DisplayFr | Format::DisplayEn | Format::Utm)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
