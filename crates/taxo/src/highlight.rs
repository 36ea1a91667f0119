//! Hover highlight correlation across channels.
//!
//! The highlight state is an explicit value owned by the single hover
//! interaction and passed into every channel renderer; renderers never
//! mutate shared ambient state. Emphasis is a pure function of the token's
//! variable name and the active variable, recomputed on every hover and
//! unhover event, so no highlight can outlive the pointer leaving the
//! source field.

use serde::{Deserialize, Serialize};

use crate::resolver::{RenderedSegment, Resolution, ResolvedChannel};
use crate::types::{Channel, VariableId};

/// Which interaction currently drives the highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightMode {
    /// Pointer is over a source form field.
    Field,
    /// Pointer is over a rendered preview token.
    Preview,
    /// No hover active.
    #[default]
    None,
}

/// Transient hover signal.
///
/// Recomputed per event, never persisted; lifetime bounded to one
/// interactive session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightState {
    /// Form field the pointer is over, in field mode.
    pub active_field: Option<String>,

    /// Variable whose occurrences carry emphasis.
    pub active_variable: Option<String>,

    pub mode: HighlightMode,
}

impl HighlightState {
    /// No hover active; nothing emphasized.
    pub fn none() -> Self {
        Self::default()
    }

    /// Pointer entered a source form field bound to `variable`.
    pub fn field_hover(field: impl Into<String>, variable: impl Into<String>) -> Self {
        Self {
            active_field: Some(field.into()),
            active_variable: Some(variable.into()),
            mode: HighlightMode::Field,
        }
    }

    /// Pointer entered a rendered preview token for `variable`.
    pub fn preview_hover(variable: impl Into<String>) -> Self {
        Self {
            active_field: None,
            active_variable: Some(variable.into()),
            mode: HighlightMode::Preview,
        }
    }

    /// Pointer left; all emphasis drops on the next correlation.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Id of the active variable, hashed once per correlation pass.
    pub fn active_id(&self) -> Option<VariableId> {
        self.active_variable
            .as_deref()
            .map(VariableId::from_name)
    }

    /// Pure emphasis rule: same variable name, regardless of channel,
    /// level, or format.
    pub fn emphasizes(&self, variable: &str) -> bool {
        self.active_id() == Some(VariableId::from_name(variable))
    }
}

/// Emphasis flags for one resolved level, index-aligned with its segments.
///
/// Literal segments are always `false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelHighlights {
    /// Level slot number, 1 through 6.
    pub level: u8,

    pub segments: Vec<bool>,
}

/// Emphasis flags for one channel plus its summary indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelHighlights {
    pub channel: Channel,

    /// The active variable appears somewhere in this channel, across every
    /// configured level, shown or not.
    pub contains_active: bool,

    pub levels: Vec<LevelHighlights>,
}

impl ChannelHighlights {
    /// Emphasis flag for one segment position.
    pub fn segment(&self, level: u8, index: usize) -> bool {
        self.levels
            .iter()
            .find(|l| l.level == level)
            .and_then(|l| l.segments.get(index))
            .copied()
            .unwrap_or(false)
    }
}

/// Recompute emphasis for every rendered token across all channels.
///
/// With no active variable (mode `none`), every flag is `false`.
pub fn correlate(resolution: &Resolution, state: &HighlightState) -> Vec<ChannelHighlights> {
    let active = state.active_id();
    resolution
        .channels
        .iter()
        .map(|channel| correlate_channel(channel, active))
        .collect()
}

fn correlate_channel(channel: &ResolvedChannel, active: Option<VariableId>) -> ChannelHighlights {
    let levels: Vec<LevelHighlights> = channel
        .levels
        .iter()
        .map(|level| LevelHighlights {
            level: level.level,
            segments: level
                .segments
                .iter()
                .map(|segment| segment_emphasis(segment, active))
                .collect(),
        })
        .collect();
    let contains_active = levels
        .iter()
        .flat_map(|level| level.segments.iter())
        .any(|&emphasized| emphasized);
    ChannelHighlights {
        channel: channel.channel,
        contains_active,
        levels,
    }
}

fn segment_emphasis(segment: &RenderedSegment, active: Option<VariableId>) -> bool {
    let Some(active) = active else {
        return false;
    };
    segment
        .as_token()
        .is_some_and(|token| token.variable_id() == active)
}
