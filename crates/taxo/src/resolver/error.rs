//! Install errors and missing-reference reporting.
//!
//! Data-shape problems (unresolved variables, unrecognized formats,
//! malformed tokens, lists not yet loaded) are structured results, never
//! errors. The only failing operation is installing a reference list whose
//! fetch outlived its selection.

use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;

use super::registry::{ListId, SelectionKey};
use crate::types::{Format, Source};

/// An error installing a fetched reference list.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The selection changed while the fetch was in flight; the result is
    /// discarded rather than applied to the now-current context.
    #[error(
        "list '{list}' was fetched for selection '{fetched_for}' \
         but the current selection is '{current}'"
    )]
    StaleSelection {
        list: ListId,
        fetched_for: SelectionKey,
        current: SelectionKey,
    },
}

/// One unresolved reference surfaced to the summary view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingVariable {
    /// Variable name as written in the template.
    pub variable: String,

    /// Source classification of the variable.
    pub source: Source,

    /// Formats the unmet references requested.
    pub formats: BTreeSet<Format>,

    /// Bound variable names the author may have meant.
    pub suggestions: Vec<String>,
}

/// Aggregate of unresolved references across one resolution pass.
///
/// Derived from per-token has-value accounting; "this taxonomy has N
/// unresolved references" is this report, not a thrown error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MissingReport {
    /// Distinct unresolved variables, in first-seen order.
    pub entries: Vec<MissingVariable>,

    /// Total unmet token count across all channels and levels.
    pub total_tokens: usize,
}

impl MissingReport {
    /// Whether every reference resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct unresolved variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Compute "did you mean" suggestions for an unresolved variable name.
///
/// Candidates within a normalized Levenshtein similarity of 0.6 are kept,
/// best first, capped at three.
pub fn compute_suggestions(target: &str, candidates: &[&str]) -> Vec<String> {
    let mut scored: Vec<(&str, f64)> = candidates
        .iter()
        .map(|&candidate| (candidate, strsim::normalized_levenshtein(target, candidate)))
        .filter(|&(candidate, score)| score >= 0.6 && candidate != target)
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    scored
        .into_iter()
        .take(3)
        .map(|(candidate, _)| candidate.to_string())
        .collect()
}
