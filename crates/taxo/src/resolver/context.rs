//! Read-only resolution context layering the four data objects and the
//! manually entered values.

use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::{Source, TaxonomyValue};

/// The union of campaign, tactic, placement, and creative data available
/// at resolution time, plus the set of manually entered field values.
///
/// Owned by the caller and only read by the engine. Object contexts are
/// flat field maps as fed by the surrounding document store; manual entries
/// are keyed by variable name.
///
/// # Example
///
/// ```
/// use taxo::{ResolutionContext, TaxonomyValue, values};
///
/// let ctx = ResolutionContext::builder()
///     .campaign(values! { "CAMP_Brand" => "ACME" })
///     .manual(
///         [("TAX_Note".to_string(), TaxonomyValue::open("summer push"))]
///             .into_iter()
///             .collect(),
///     )
///     .build();
///
/// assert_eq!(ctx.layered("CAMP_Brand"), Some("ACME"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
pub struct ResolutionContext {
    /// Campaign-level fields.
    #[builder(default)]
    #[serde(default)]
    pub campaign: HashMap<String, String>,

    /// Tactic-level fields.
    #[builder(default)]
    #[serde(default)]
    pub tactic: HashMap<String, String>,

    /// Placement-level fields.
    #[builder(default)]
    #[serde(default)]
    pub placement: HashMap<String, String>,

    /// Creative-level fields.
    #[builder(default)]
    #[serde(default)]
    pub creative: HashMap<String, String>,

    /// Manually entered values keyed by variable name.
    #[builder(default)]
    #[serde(default)]
    pub manual: HashMap<String, TaxonomyValue>,
}

/// Override precedence for object-bound variables, most specific first.
const LAYER_ORDER: [Source; 4] = [
    Source::Creative,
    Source::Placement,
    Source::Tactic,
    Source::Campaign,
];

impl ResolutionContext {
    /// Field lookup in one object context. `Manual` has no field map.
    pub fn field(&self, source: Source, name: &str) -> Option<&str> {
        let map = match source {
            Source::Campaign => &self.campaign,
            Source::Tactic => &self.tactic,
            Source::Placement => &self.placement,
            Source::Creative => &self.creative,
            Source::Manual => return None,
        };
        map.get(name).map(String::as_str)
    }

    /// Most specific non-empty value for an object-bound variable.
    ///
    /// Creative beats placement beats tactic beats campaign; an empty local
    /// value falls through to the next less specific layer.
    pub fn layered(&self, name: &str) -> Option<&str> {
        LAYER_ORDER
            .iter()
            .find_map(|&source| self.field(source, name).filter(|value| !value.is_empty()))
    }

    /// Manually entered value for a variable, if any.
    pub fn manual_entry(&self, name: &str) -> Option<&TaxonomyValue> {
        self.manual.get(name)
    }
}
