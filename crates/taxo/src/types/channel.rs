use bon::Builder;
use serde::{Deserialize, Serialize};

use super::Taxonomy;

/// One of the three independent output targets a taxonomy produces a
/// preview for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    Tags,
    Platform,
    MediaExport,
}

impl Channel {
    /// All channels in their fixed scan order.
    pub const ALL: [Channel; 3] = [Channel::Tags, Channel::Platform, Channel::MediaExport];

    /// Get the channel as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Tags => "tags",
            Channel::Platform => "platform",
            Channel::MediaExport => "media-export",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A taxonomy plus the separator its channel joins resolved levels with.
///
/// # Example
///
/// ```
/// use taxo::{ChannelSpec, Taxonomy, TaxonomyLevel};
///
/// let spec = ChannelSpec::builder()
///     .taxonomy(
///         Taxonomy::builder()
///             .level_1(TaxonomyLevel::new("[CAMP_Brand:code]"))
///             .build(),
///     )
///     .separator("|")
///     .build();
/// assert_eq!(spec.separator, "|");
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct ChannelSpec {
    /// Level templates for this channel.
    #[builder(default)]
    #[serde(default)]
    pub taxonomy: Taxonomy,

    /// Separator placed between resolved levels in the flattened preview.
    #[builder(default = default_separator())]
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    "_".to_string()
}

impl Default for ChannelSpec {
    fn default() -> Self {
        ChannelSpec::builder().build()
    }
}

impl ChannelSpec {
    /// Create a spec with the default `_` separator.
    pub fn new(taxonomy: Taxonomy) -> Self {
        ChannelSpec::builder().taxonomy(taxonomy).build()
    }
}

/// The per-channel taxonomy configuration of one client selection.
///
/// Channels without a configured spec are skipped by resolution.
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
pub struct TaxonomySet {
    pub tags: Option<ChannelSpec>,
    pub platform: Option<ChannelSpec>,
    pub media_export: Option<ChannelSpec>,
}

impl TaxonomySet {
    /// Get the spec configured for a channel, if any.
    pub fn get(&self, channel: Channel) -> Option<&ChannelSpec> {
        match channel {
            Channel::Tags => self.tags.as_ref(),
            Channel::Platform => self.platform.as_ref(),
            Channel::MediaExport => self.media_export.as_ref(),
        }
    }

    /// Configured channels in fixed scan order.
    pub fn channels(&self) -> impl Iterator<Item = (Channel, &ChannelSpec)> {
        Channel::ALL
            .into_iter()
            .filter_map(|channel| self.get(channel).map(|spec| (channel, spec)))
    }
}
