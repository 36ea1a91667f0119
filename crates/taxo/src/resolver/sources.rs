//! Variable-to-source classification.
//!
//! The "which context does this variable come from" decision is a table
//! lookup: explicit per-variable bindings first, then prefix conventions,
//! else manual free entry. The table is static over a resolution pass.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::context::ResolutionContext;
use super::registry::ListId;
use crate::types::{Format, Source};

/// Prefix conventions applied when a variable has no explicit binding.
const PREFIX_RULES: [(&str, Source); 4] = [
    ("CAMP_", Source::Campaign),
    ("TAC_", Source::Tactic),
    ("PLAC_", Source::Placement),
    ("CREA_", Source::Creative),
];

/// Binding of one variable name to its source and optional reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableBinding {
    /// The single context the variable is classified under.
    pub source: Source,

    /// Reference list consulted by coded formats, if the variable has one.
    pub list: Option<ListId>,
}

/// A raw value pulled from the context, tagged with its display source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawValue {
    /// Raw text; empty when no context layer holds a value.
    pub text: String,

    /// Source classification of the variable.
    pub source: Source,
}

impl RawValue {
    /// Whether any context layer supplied a value.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Static name-to-source mapping consulted ahead of resolution.
///
/// # Example
///
/// ```
/// use taxo::{ListId, Source, SourceTable};
///
/// let mut table = SourceTable::new();
/// table.bind_with_list("TAX_Product", Source::Manual, ListId::new("products"));
///
/// assert_eq!(table.source_of("TAX_Product"), Source::Manual);
/// assert_eq!(table.source_of("CAMP_Brand"), Source::Campaign);
/// assert_eq!(table.source_of("Anything_Else"), Source::Manual);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    bindings: HashMap<String, VariableBinding>,
}

impl SourceTable {
    /// Create a table holding only the prefix conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable to a source with no reference list.
    pub fn bind(&mut self, name: impl Into<String>, source: Source) {
        self.bindings
            .insert(name.into(), VariableBinding { source, list: None });
    }

    /// Bind a variable to a source and the reference list coded formats
    /// read through.
    pub fn bind_with_list(
        &mut self,
        name: impl Into<String>,
        source: Source,
        list: impl Into<ListId>,
    ) {
        self.bindings.insert(
            name.into(),
            VariableBinding {
                source,
                list: Some(list.into()),
            },
        );
    }

    /// The binding for a variable, with prefix conventions as fallback.
    pub fn binding(&self, name: &str) -> VariableBinding {
        if let Some(binding) = self.bindings.get(name) {
            return binding.clone();
        }
        let source = PREFIX_RULES
            .iter()
            .find_map(|(prefix, source)| name.starts_with(prefix).then_some(*source))
            .unwrap_or(Source::Manual);
        VariableBinding { source, list: None }
    }

    /// Source classification for a variable.
    pub fn source_of(&self, name: &str) -> Source {
        self.binding(name).source
    }

    /// Reference list for a variable; only explicit bindings carry one.
    pub fn list_of(&self, name: &str) -> Option<ListId> {
        self.bindings.get(name).and_then(|b| b.list.clone())
    }

    /// Explicitly bound names, sorted. Suggestion candidates for
    /// missing-variable reporting.
    pub fn known_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a variable's raw value and display source from a context.
    ///
    /// Object-bound variables walk the override layers, most specific
    /// first; manual variables read the manual entries. A variable with no
    /// value anywhere yields an empty raw value, never an error.
    pub fn resolve(&self, name: &str, format: Format, ctx: &ResolutionContext) -> RawValue {
        let source = self.source_of(name);
        let text = match source {
            Source::Manual => ctx
                .manual_entry(name)
                .map(|value| value.raw_for(format).to_string())
                .unwrap_or_default(),
            _ => ctx.layered(name).unwrap_or_default().to_string(),
        };
        RawValue { text, source }
    }
}
