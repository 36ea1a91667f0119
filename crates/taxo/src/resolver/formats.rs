//! Output formatting for resolved values.

use icu_casemap::CaseMapper;
use icu_locale_core::langid;

use super::registry::{ListId, ReferenceEntry, ReferenceLists};
use crate::types::Format;

/// Apply a requested format to a raw value.
///
/// Coded formats read through the variable's reference list; any missing
/// piece (no list binding, a list not yet loaded, an unknown code) produces
/// the explicit empty string rather than an error. The caller distinguishes
/// "legitimately empty" from "unresolved" purely by the emptiness check.
pub fn apply_format(
    raw: &str,
    format: Format,
    list: Option<&ListId>,
    lists: &ReferenceLists,
) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match format {
        Format::Code | Format::Open => raw.to_string(),
        Format::DisplayFr => entry(list, raw, lists)
            .map(|e| e.display_fr.clone())
            .unwrap_or_default(),
        Format::DisplayEn => entry(list, raw, lists)
            .map(|e| e.display_en.clone())
            .unwrap_or_default(),
        Format::Utm => entry(list, raw, lists)
            .map(|e| {
                e.utm_slug
                    .clone()
                    .unwrap_or_else(|| slugify(&e.display_en))
            })
            .unwrap_or_default(),
    }
}

fn entry<'a>(
    list: Option<&ListId>,
    code: &str,
    lists: &'a ReferenceLists,
) -> Option<&'a ReferenceEntry> {
    lists.lookup(list?, code)
}

/// Derive a query-safe slug from a display label.
///
/// Lowercases with the locale-aware case mapper, folds common Latin
/// accents, and collapses every other character run into a single
/// underscore, with no leading or trailing separator.
pub fn slugify(value: &str) -> String {
    let lowered = CaseMapper::new().lowercase_to_string(value, &langid!("en"));
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    for c in lowered.chars() {
        let c = fold_accent(c);
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(c);
        } else {
            pending_separator = true;
        }
    }
    slug
}

/// Map common Latin accented letters to their base letter.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'â' | 'ä' | 'á' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'î' | 'ï' | 'í' | 'ì' => 'i',
        'ô' | 'ö' | 'ó' | 'ò' | 'õ' => 'o',
        'û' | 'ü' | 'ù' | 'ú' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => c,
    }
}
