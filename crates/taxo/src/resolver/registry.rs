//! Reference-list store: the code-to-display tables used by coded formats.
//!
//! Loading is owned by a collaborator (cache-first lookup with a fallback
//! fetch); the store only receives finished tables and answers lookups. A
//! list that has not arrived yet is indistinguishable from an absent entry:
//! lookups return `None` and formatting renders not-has-value, so the next
//! recomputation after the data lands naturally resolves it.

use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::error::InstallError;

/// Identifier of one reference list (e.g. a shortcode catalogue).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListId(String);

impl ListId {
    /// Create a new list id from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the list id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for ListId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for ListId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ListId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key identifying the client/taxonomy selection a fetch was started for.
///
/// Staleness is detected by comparing a fetch's originating key against the
/// current one at completion time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey(String);

impl SelectionKey {
    /// Create a new selection key from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the selection key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::ops::Deref for SelectionKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for SelectionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SelectionKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One code's row in a reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct ReferenceEntry {
    /// French display label.
    #[builder(default)]
    #[serde(default)]
    pub display_fr: String,

    /// English display label.
    #[builder(default)]
    #[serde(default)]
    pub display_en: String,

    /// Precomputed query-safe slug; derived from `display_en` when absent.
    pub utm_slug: Option<String>,
}

/// A loaded code-to-entry table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceList {
    entries: HashMap<String, ReferenceEntry>,
}

impl ReferenceList {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry for a code, replacing any previous one.
    pub fn insert(&mut self, code: impl Into<String>, entry: ReferenceEntry) {
        self.entries.insert(code.into(), entry);
    }

    /// Get the entry for a code.
    pub fn get(&self, code: &str) -> Option<&ReferenceEntry> {
        self.entries.get(code)
    }

    /// Number of codes in the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no codes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ReferenceEntry)> for ReferenceList {
    fn from_iter<I: IntoIterator<Item = (String, ReferenceEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Ticket pinning an in-flight fetch to the selection it was started for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    list: ListId,
    selection: SelectionKey,
}

impl FetchTicket {
    /// The list this fetch is for.
    pub fn list(&self) -> &ListId {
        &self.list
    }

    /// The selection the fetch was started under.
    pub fn selection(&self) -> &SelectionKey {
        &self.selection
    }
}

/// Store of reference lists for the current selection.
///
/// # Example
///
/// ```
/// use taxo::{ListId, ReferenceEntry, ReferenceList, ReferenceLists};
///
/// let mut lists = ReferenceLists::new();
/// lists.set_selection("client-7");
///
/// let ticket = lists.begin_fetch(ListId::new("products"));
/// let mut table = ReferenceList::new();
/// table.insert("P1", ReferenceEntry::builder().display_fr("Portable").build());
/// lists.install(ticket, table).unwrap();
///
/// let entry = lists.lookup(&ListId::new("products"), "P1").unwrap();
/// assert_eq!(entry.display_fr, "Portable");
/// ```
#[derive(Debug, Default)]
pub struct ReferenceLists {
    selection: SelectionKey,
    lists: HashMap<ListId, ReferenceList>,
}

impl ReferenceLists {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection key.
    pub fn selection(&self) -> &SelectionKey {
        &self.selection
    }

    /// Change the active client/taxonomy selection.
    ///
    /// Lists loaded for the previous selection are dropped; any fetch still
    /// in flight for it will be rejected on arrival.
    pub fn set_selection(&mut self, key: impl Into<SelectionKey>) {
        let key = key.into();
        if key != self.selection {
            self.selection = key;
            self.lists.clear();
        }
    }

    /// Snapshot the current selection into a ticket for an outgoing fetch.
    pub fn begin_fetch(&self, list: impl Into<ListId>) -> FetchTicket {
        FetchTicket {
            list: list.into(),
            selection: self.selection.clone(),
        }
    }

    /// Install a fetched list, replacing any previous table for it.
    ///
    /// A ticket whose selection no longer matches the store's current one
    /// is stale: the result is discarded and an error returned so the
    /// caller can log the dropped fetch. Returns the entry count on
    /// success.
    pub fn install(&mut self, ticket: FetchTicket, list: ReferenceList) -> Result<usize, InstallError> {
        if ticket.selection != self.selection {
            return Err(InstallError::StaleSelection {
                list: ticket.list,
                fetched_for: ticket.selection,
                current: self.selection.clone(),
            });
        }
        let count = list.len();
        self.lists.insert(ticket.list, list);
        Ok(count)
    }

    /// Whether a list has arrived for the current selection.
    pub fn is_loaded(&self, list: &ListId) -> bool {
        self.lists.contains_key(list)
    }

    /// Look up a code in a list.
    ///
    /// Returns `None` for an unknown code and for a list that has not been
    /// loaded yet; the two are deliberately indistinguishable here.
    pub fn lookup(&self, list: &ListId, code: &str) -> Option<&ReferenceEntry> {
        self.lists.get(list).and_then(|table| table.get(code))
    }
}
