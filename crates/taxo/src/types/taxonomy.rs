use bon::Builder;
use serde::{Deserialize, Serialize};

/// A named set of up to six templated naming levels.
///
/// Immutable once built; the engine takes it by reference per resolution
/// pass and never writes it back.
///
/// # Example
///
/// ```
/// use taxo::{Taxonomy, TaxonomyLevel};
///
/// let taxonomy = Taxonomy::builder()
///     .name("Display 2026")
///     .level_1(TaxonomyLevel::new("[CAMP_Brand:code]").with_title("Brand"))
///     .level_2(TaxonomyLevel::new("[TAX_Product:display_en]"))
///     .build();
///
/// assert_eq!(taxonomy.levels().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Taxonomy {
    /// Human-readable name of the taxonomy.
    pub name: Option<String>,

    pub level_1: Option<TaxonomyLevel>,
    pub level_2: Option<TaxonomyLevel>,
    pub level_3: Option<TaxonomyLevel>,
    pub level_4: Option<TaxonomyLevel>,
    pub level_5: Option<TaxonomyLevel>,
    pub level_6: Option<TaxonomyLevel>,
}

impl Taxonomy {
    /// Get a level by its slot number (1 through 6).
    pub fn level(&self, slot: u8) -> Option<&TaxonomyLevel> {
        match slot {
            1 => self.level_1.as_ref(),
            2 => self.level_2.as_ref(),
            3 => self.level_3.as_ref(),
            4 => self.level_4.as_ref(),
            5 => self.level_5.as_ref(),
            6 => self.level_6.as_ref(),
            _ => None,
        }
    }

    /// Configured levels with their slot numbers, in order.
    pub fn levels(&self) -> impl Iterator<Item = (u8, &TaxonomyLevel)> {
        [
            &self.level_1,
            &self.level_2,
            &self.level_3,
            &self.level_4,
            &self.level_5,
            &self.level_6,
        ]
        .into_iter()
        .enumerate()
        .filter_map(|(i, level)| level.as_ref().map(|level| (i as u8 + 1, level)))
    }
}

/// One taxonomy level: an optional raw template plus an optional title.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct TaxonomyLevel {
    /// Raw template string; levels without one are skipped by previews.
    pub template: Option<String>,

    /// Human-readable title shown in the detail view.
    pub title: Option<String>,
}

impl TaxonomyLevel {
    /// Create a level holding a template and no title.
    pub fn new(template: impl Into<String>) -> Self {
        TaxonomyLevel::builder().template(template.into()).build()
    }

    /// Attach a title to this level.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
