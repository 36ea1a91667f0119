//! Structure assembly.
//!
//! Replaces every token in every configured level with its formatted value
//! (or the original token text when the reference is unmet), emits the
//! per-level annotated structure and the flattened channel preview, and
//! deduplicates variables into one configuration row each.

use std::collections::HashMap;

use serde::Serialize;

use super::context::ResolutionContext;
use super::formats::apply_format;
use super::registry::ReferenceLists;
use super::sources::SourceTable;
use crate::parser::{Segment, Token, tokenize};
use crate::types::{Channel, ChannelSpec, Occurrence, ParsedVariable, Source, VariableId};

/// Borrowed inputs shared by every substitution in one resolution pass.
#[derive(Clone, Copy)]
pub struct ResolvePass<'a> {
    /// Variable-to-source classification table.
    pub table: &'a SourceTable,
    /// Reference-list store.
    pub lists: &'a ReferenceLists,
    /// Read-only data contexts and manual entries.
    pub ctx: &'a ResolutionContext,
}

/// One substituted piece of a resolved level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RenderedSegment {
    /// Literal template text between tokens, untouched.
    Literal { text: String },
    /// A variable token with its resolution outcome.
    Token {
        token: Token,
        /// Source classification of the variable.
        source: Source,
        /// Formatted value; empty when the reference is unmet.
        value: String,
        /// Strict per-token accounting: the formatted value is non-empty.
        has_value: bool,
        /// Text substituted into the level output: the formatted value
        /// (bracket-wrapped for double-bracket tokens) when has-value,
        /// the original token text otherwise.
        rendered: String,
    },
}

impl RenderedSegment {
    /// The text this segment contributes to the level output.
    pub fn rendered_text(&self) -> &str {
        match self {
            RenderedSegment::Literal { text } => text,
            RenderedSegment::Token { rendered, .. } => rendered,
        }
    }

    /// The token behind this segment, if it is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            RenderedSegment::Token { token, .. } => Some(token),
            RenderedSegment::Literal { .. } => None,
        }
    }

    /// Whether this segment is a token whose reference is unmet.
    pub fn is_unmet(&self) -> bool {
        matches!(self, RenderedSegment::Token { has_value, .. } if !has_value)
    }
}

/// One resolved taxonomy level, annotated for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLevel {
    /// Level slot number, 1 through 6.
    pub level: u8,

    /// Title from the taxonomy level, if any.
    pub title: Option<String>,

    /// Raw template the level was resolved from.
    pub template: String,

    /// Substituted segments in original order.
    pub segments: Vec<RenderedSegment>,

    /// Level output: segment texts concatenated in order.
    pub text: String,
}

impl ResolvedLevel {
    /// Token segments of this level, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &RenderedSegment> {
        self.segments.iter().filter(|s| s.as_token().is_some())
    }
}

/// One channel's annotated structure and flattened preview.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedChannel {
    pub channel: Channel,

    /// Resolved levels, one per configured template, in slot order.
    pub levels: Vec<ResolvedLevel>,

    /// Resolved level texts joined by the channel separator.
    pub preview: String,
}

impl ResolvedChannel {
    /// Every token across every level resolved to a value.
    ///
    /// Derived from the per-token accounting on demand, never stored, so
    /// it can not go stale against the underlying values.
    pub fn is_fully_configured(&self) -> bool {
        self.missing_count() == 0
    }

    /// Number of tokens whose reference is unmet.
    pub fn missing_count(&self) -> usize {
        self.levels
            .iter()
            .flat_map(|level| level.segments.iter())
            .filter(|segment| segment.is_unmet())
            .count()
    }

    /// Whether a variable appears anywhere in this channel, across every
    /// configured level.
    pub fn contains_variable(&self, variable: &str) -> bool {
        let id = VariableId::from_name(variable);
        self.levels
            .iter()
            .flat_map(|level| level.segments.iter())
            .filter_map(RenderedSegment::as_token)
            .any(|token| token.variable_id() == id)
    }
}

/// A full resolution pass over a taxonomy set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Resolution {
    /// Resolved channels in fixed scan order; unconfigured ones omitted.
    pub channels: Vec<ResolvedChannel>,

    /// One configuration row per distinct variable, in first-seen order.
    pub variables: Vec<ParsedVariable>,
}

impl Resolution {
    /// Get one channel's resolved structure.
    pub fn channel(&self, channel: Channel) -> Option<&ResolvedChannel> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    /// Get the configuration row for a variable name.
    pub fn variable(&self, name: &str) -> Option<&ParsedVariable> {
        self.variables.iter().find(|v| v.variable == name)
    }

    /// Total unmet token count across all channels.
    pub fn missing_count(&self) -> usize {
        self.channels.iter().map(ResolvedChannel::missing_count).sum()
    }
}

/// Accumulates one `ParsedVariable` per distinct name across every level
/// of every channel scanned.
#[derive(Debug, Default)]
pub struct VariableCollector {
    index: HashMap<String, usize>,
    variables: Vec<ParsedVariable>,
}

impl VariableCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one reference site for a token.
    pub fn record(&mut self, token: &Token, source: Source, channel: Channel, level: u8) {
        let index = match self.index.get(&token.variable) {
            Some(&index) => index,
            None => {
                let index = self.variables.len();
                self.index.insert(token.variable.clone(), index);
                self.variables
                    .push(ParsedVariable::new(token.variable.clone(), source));
                index
            }
        };
        self.variables[index].record(Occurrence {
            channel,
            format: token.format,
            level,
        });
    }

    /// The deduplicated variable list, in first-seen order.
    pub fn finish(self) -> Vec<ParsedVariable> {
        self.variables
    }
}

/// Substitute one token against the pass inputs.
pub fn render_token(token: &Token, pass: ResolvePass<'_>) -> RenderedSegment {
    let raw = pass.table.resolve(&token.variable, token.format, pass.ctx);
    let list = pass.table.list_of(&token.variable);
    let value = apply_format(&raw.text, token.format, list.as_ref(), pass.lists);
    let has_value = !value.is_empty();
    let rendered = if has_value {
        if token.double_bracket {
            format!("[{value}]")
        } else {
            value.clone()
        }
    } else {
        token.raw_match.clone()
    };
    RenderedSegment::Token {
        token: token.clone(),
        source: raw.source,
        value,
        has_value,
        rendered,
    }
}

/// Resolve one level's tokenized template.
pub fn resolve_level(
    channel: Channel,
    slot: u8,
    title: Option<&str>,
    template: &str,
    segments: &[Segment],
    pass: ResolvePass<'_>,
    collector: &mut VariableCollector,
) -> ResolvedLevel {
    let mut rendered = Vec::with_capacity(segments.len());
    let mut text = String::with_capacity(template.len());
    for segment in segments {
        let piece = match segment {
            Segment::Literal { text, .. } => RenderedSegment::Literal { text: text.clone() },
            Segment::Token(token) => {
                let piece = render_token(token, pass);
                if let RenderedSegment::Token { source, .. } = &piece {
                    collector.record(token, *source, channel, slot);
                }
                piece
            }
        };
        text.push_str(piece.rendered_text());
        rendered.push(piece);
    }
    ResolvedLevel {
        level: slot,
        title: title.map(ToString::to_string),
        template: template.to_string(),
        segments: rendered,
        text,
    }
}

/// Resolve one channel with a caller-supplied tokenizer, typically a cache.
pub fn resolve_channel_with<F>(
    channel: Channel,
    spec: &ChannelSpec,
    pass: ResolvePass<'_>,
    collector: &mut VariableCollector,
    mut segments_for: F,
) -> ResolvedChannel
where
    F: FnMut(&str) -> Vec<Segment>,
{
    let mut levels = Vec::new();
    for (slot, level) in spec.taxonomy.levels() {
        // Levels with no template are skipped.
        let Some(template) = level.template.as_deref() else {
            continue;
        };
        let segments = segments_for(template);
        levels.push(resolve_level(
            channel,
            slot,
            level.title.as_deref(),
            template,
            &segments,
            pass,
            collector,
        ));
    }
    let preview = levels
        .iter()
        .map(|level| level.text.as_str())
        .collect::<Vec<_>>()
        .join(&spec.separator);
    ResolvedChannel {
        channel,
        levels,
        preview,
    }
}

/// Resolve one channel, tokenizing templates directly.
pub fn resolve_channel(
    channel: Channel,
    spec: &ChannelSpec,
    pass: ResolvePass<'_>,
    collector: &mut VariableCollector,
) -> ResolvedChannel {
    resolve_channel_with(channel, spec, pass, collector, tokenize)
}
