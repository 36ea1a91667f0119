use serde::{Deserialize, Serialize};

/// The data context a variable's value is read from.
///
/// Every variable name is classified to exactly one source ahead of
/// resolution; the source is what a configuration UI displays next to the
/// variable, independent of which context layer ultimately supplied the
/// value through override precedence.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Campaign-level field.
    Campaign,
    /// Tactic-level field.
    Tactic,
    /// Placement-level field.
    Placement,
    /// Creative-level field.
    Creative,
    /// Manually entered free-entry value.
    #[default]
    Manual,
}

impl Source {
    /// Get the source as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Campaign => "campaign",
            Source::Tactic => "tactic",
            Source::Placement => "placement",
            Source::Creative => "creative",
            Source::Manual => "manual",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
