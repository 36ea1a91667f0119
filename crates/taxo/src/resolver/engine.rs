//! User-facing engine façade.
//!
//! The engine owns the variable source table and the reference-list store,
//! and caches tokenized templates so repeated resolution passes skip
//! re-scanning. Resolution itself is synchronous and pure: recompute after
//! every input change, on a settled snapshot of the context, and the output
//! reflects that snapshot atomically.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use bon::Builder;

use super::context::ResolutionContext;
use super::error::{InstallError, MissingReport, MissingVariable, compute_suggestions};
use super::evaluator::{
    RenderedSegment, ResolvePass, Resolution, ResolvedChannel, VariableCollector,
    resolve_channel_with,
};
use super::registry::{FetchTicket, ListId, ReferenceList, ReferenceLists, SelectionKey};
use super::sources::SourceTable;
use crate::parser::{Segment, tokenize};
use crate::types::{Channel, ChannelSpec, TaxonomySet};

/// Taxonomy template resolution engine.
///
/// # Example
///
/// ```
/// use taxo::{
///     Channel, ChannelSpec, Engine, ListId, ReferenceEntry, ReferenceList,
///     ResolutionContext, Source, Taxonomy, TaxonomyLevel, TaxonomyValue,
/// };
///
/// let mut engine = Engine::new();
/// engine.set_selection("client-7");
/// engine
///     .sources_mut()
///     .bind_with_list("TAX_Product", Source::Manual, ListId::new("products"));
///
/// let ticket = engine.begin_fetch(ListId::new("products"));
/// let mut products = ReferenceList::new();
/// products.insert("P1", ReferenceEntry::builder().display_fr("Portable").build());
/// engine.install_list(ticket, products).unwrap();
///
/// let spec = ChannelSpec::new(
///     Taxonomy::builder()
///         .level_1(TaxonomyLevel::new("[TAX_Product:display_fr]"))
///         .build(),
/// );
/// let ctx = ResolutionContext::builder()
///     .manual(
///         [("TAX_Product".to_string(), TaxonomyValue::coded("P1"))]
///             .into_iter()
///             .collect(),
///     )
///     .build();
///
/// let resolved = engine.resolve_channel(Channel::Tags, &spec, &ctx);
/// assert_eq!(resolved.preview, "Portable");
/// ```
#[derive(Debug, Default, Builder)]
pub struct Engine {
    /// Variable-to-source classification table.
    #[builder(default)]
    sources: SourceTable,

    /// Reference-list store for the current selection.
    #[builder(default)]
    lists: ReferenceLists,

    /// Cache of tokenized templates, keyed by template string.
    ///
    /// `RefCell` keeps resolution `&self`; templates are reused across
    /// passes and channels.
    #[builder(skip)]
    template_cache: RefCell<HashMap<String, Vec<Segment>>>,
}

impl Engine {
    /// Create an engine with default table and empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Source table and reference lists
    // =========================================================================

    /// The variable source table (read-only).
    pub fn sources(&self) -> &SourceTable {
        &self.sources
    }

    /// The variable source table (mutable) for registering bindings.
    pub fn sources_mut(&mut self) -> &mut SourceTable {
        &mut self.sources
    }

    /// The reference-list store (read-only).
    pub fn lists(&self) -> &ReferenceLists {
        &self.lists
    }

    /// Change the active client/taxonomy selection.
    pub fn set_selection(&mut self, key: impl Into<SelectionKey>) {
        self.lists.set_selection(key);
    }

    /// Snapshot the current selection into a ticket for an outgoing fetch.
    pub fn begin_fetch(&self, list: impl Into<ListId>) -> FetchTicket {
        self.lists.begin_fetch(list)
    }

    /// Install a fetched reference list; stale tickets are rejected.
    pub fn install_list(
        &mut self,
        ticket: FetchTicket,
        list: ReferenceList,
    ) -> Result<usize, InstallError> {
        self.lists.install(ticket, list)
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve every configured channel of a taxonomy set.
    ///
    /// Channels share one variable collector, so a variable used by several
    /// channels still yields a single configuration row.
    pub fn resolve(&self, set: &TaxonomySet, ctx: &ResolutionContext) -> Resolution {
        let mut collector = VariableCollector::new();
        let mut channels = Vec::new();
        for (channel, spec) in set.channels() {
            channels.push(self.resolve_channel_into(channel, spec, ctx, &mut collector));
        }
        Resolution {
            channels,
            variables: collector.finish(),
        }
    }

    /// Resolve a single channel.
    pub fn resolve_channel(
        &self,
        channel: Channel,
        spec: &ChannelSpec,
        ctx: &ResolutionContext,
    ) -> ResolvedChannel {
        let mut collector = VariableCollector::new();
        self.resolve_channel_into(channel, spec, ctx, &mut collector)
    }

    fn resolve_channel_into(
        &self,
        channel: Channel,
        spec: &ChannelSpec,
        ctx: &ResolutionContext,
        collector: &mut VariableCollector,
    ) -> ResolvedChannel {
        let pass = ResolvePass {
            table: &self.sources,
            lists: &self.lists,
            ctx,
        };
        resolve_channel_with(channel, spec, pass, collector, |template| {
            self.cached_segments(template)
        })
    }

    /// Derive the unresolved-reference report for a resolution pass.
    ///
    /// Entries carry "did you mean" suggestions computed against the
    /// explicitly bound variable names.
    pub fn missing_report(&self, resolution: &Resolution) -> MissingReport {
        let known = self.sources.known_names();
        let mut entries: Vec<MissingVariable> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut total_tokens = 0;
        for channel in &resolution.channels {
            for level in &channel.levels {
                for segment in &level.segments {
                    let RenderedSegment::Token {
                        token,
                        source,
                        has_value,
                        ..
                    } = segment
                    else {
                        continue;
                    };
                    if *has_value {
                        continue;
                    }
                    total_tokens += 1;
                    let at = match index.get(&token.variable) {
                        Some(&at) => at,
                        None => {
                            let at = entries.len();
                            index.insert(token.variable.clone(), at);
                            entries.push(MissingVariable {
                                variable: token.variable.clone(),
                                source: *source,
                                formats: BTreeSet::new(),
                                suggestions: compute_suggestions(&token.variable, &known),
                            });
                            at
                        }
                    };
                    entries[at].formats.insert(token.format);
                }
            }
        }
        MissingReport {
            entries,
            total_tokens,
        }
    }

    // =========================================================================
    // Template cache
    // =========================================================================

    /// Clear the tokenized-template cache.
    pub fn clear_template_cache(&self) {
        self.template_cache.borrow_mut().clear();
    }

    /// Number of cached tokenized templates.
    pub fn template_cache_len(&self) -> usize {
        self.template_cache.borrow().len()
    }

    /// Look up or tokenize and cache a template string.
    fn cached_segments(&self, template: &str) -> Vec<Segment> {
        {
            let cache = self.template_cache.borrow();
            if let Some(segments) = cache.get(template) {
                return segments.clone();
            }
        }
        let segments = tokenize(template);
        self.template_cache
            .borrow_mut()
            .insert(template.to_string(), segments.clone());
        segments
    }
}
