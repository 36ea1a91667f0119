use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Channel, Format, Source, VariableId};

/// One place a variable is referenced: a `(channel, format, level)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub channel: Channel,
    pub format: Format,
    /// Level slot number, 1 through 6.
    pub level: u8,
}

/// One configuration row per distinct variable name used anywhere across
/// the taxonomy's levels and channels.
///
/// A variable requested with two different formats, or used in two
/// channels, still yields exactly one entry with every occurrence recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedVariable {
    /// Variable name as written inside the brackets.
    pub variable: String,

    /// The single source this variable's value is read from.
    pub source: Source,

    /// Every format the variable is requested with.
    pub formats: BTreeSet<Format>,

    /// Every distinct place the variable appears.
    pub occurrences: Vec<Occurrence>,
}

impl ParsedVariable {
    /// Create an entry with no recorded occurrences yet.
    pub fn new(variable: impl Into<String>, source: Source) -> Self {
        Self {
            variable: variable.into(),
            source,
            formats: BTreeSet::new(),
            occurrences: Vec::new(),
        }
    }

    /// Compact identifier for UI row keys and highlight correlation.
    pub fn id(&self) -> VariableId {
        VariableId::from_name(&self.variable)
    }

    /// Record one reference site; identical triples collapse to one.
    pub fn record(&mut self, occurrence: Occurrence) {
        self.formats.insert(occurrence.format);
        if !self.occurrences.contains(&occurrence) {
            self.occurrences.push(occurrence);
        }
    }

    /// Level slots this variable appears in, ascending, deduplicated.
    pub fn levels(&self) -> Vec<u8> {
        let mut levels: Vec<u8> = self.occurrences.iter().map(|o| o.level).collect();
        levels.sort_unstable();
        levels.dedup();
        levels
    }

    /// Channels this variable appears in, in fixed scan order.
    pub fn channels(&self) -> Vec<Channel> {
        Channel::ALL
            .into_iter()
            .filter(|channel| self.occurrences.iter().any(|o| o.channel == *channel))
            .collect()
    }
}
