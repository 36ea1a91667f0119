use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{Format, Source};

/// Resolved or user-configured state for one variable.
///
/// For coded variables `shortcode_id` holds the reference-list code the
/// user picked and `value` the looked-up display string. For free-entry
/// variables `open_value` holds the text typed by the user.
///
/// # Example
///
/// ```
/// use taxo::{Format, TaxonomyValue};
///
/// let picked = TaxonomyValue::builder()
///     .value("Portable")
///     .shortcode_id("P1")
///     .format(Format::DisplayFr)
///     .build();
///
/// assert_eq!(picked.raw_for(Format::DisplayFr), "P1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct TaxonomyValue {
    /// Resolved or looked-up display string.
    #[builder(default)]
    #[serde(default)]
    pub value: String,

    /// Source classification of the variable this value belongs to.
    #[builder(default)]
    #[serde(default)]
    pub source: Source,

    /// Format the value was configured for.
    #[builder(default)]
    #[serde(default)]
    pub format: Format,

    /// Reference-list code backing the value, for coded formats.
    pub shortcode_id: Option<String>,

    /// User-entered free text, for the `open` format.
    pub open_value: Option<String>,
}

impl TaxonomyValue {
    /// Create a free-entry value.
    pub fn open(text: impl Into<String>) -> Self {
        TaxonomyValue::builder()
            .format(Format::Open)
            .open_value(text.into())
            .build()
    }

    /// Create a coded value from a reference-list code.
    pub fn coded(code: impl Into<String>) -> Self {
        TaxonomyValue::builder().shortcode_id(code.into()).build()
    }

    /// Raw text feeding the formatter for a requested format.
    ///
    /// The `open` format reads the free-text entry; every other format
    /// reads the shortcode. Both fall back to `value` when unset.
    pub fn raw_for(&self, format: Format) -> &str {
        match format {
            Format::Open => self.open_value.as_deref().unwrap_or(&self.value),
            _ => self.shortcode_id.as_deref().unwrap_or(&self.value),
        }
    }
}
