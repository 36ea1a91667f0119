pub mod highlight;
pub mod parser;
pub mod resolver;
pub mod types;

pub use highlight::{ChannelHighlights, HighlightMode, HighlightState, LevelHighlights, correlate};
pub use resolver::{
    Engine, FetchTicket, InstallError, ListId, MissingReport, MissingVariable, RawValue,
    ReferenceEntry, ReferenceList, ReferenceLists, RenderedSegment, ResolutionContext,
    Resolution, ResolvePass, ResolvedChannel, ResolvedLevel, SelectionKey, SourceTable,
    VariableBinding, VariableCollector, compute_suggestions,
};
pub use types::{
    Channel, ChannelSpec, Format, Occurrence, ParsedVariable, Source, Taxonomy, TaxonomyLevel,
    TaxonomySet, TaxonomyValue, VariableId,
};

/// Creates a `HashMap<String, String>` of context field values.
///
/// Keys and values are converted with `ToString`, so string literals and
/// display-formatted values can be mixed freely.
///
/// # Example
///
/// ```
/// use taxo::values;
///
/// let fields = values! { "CAMP_Brand" => "ACME", "CAMP_Year" => 2026 };
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields["CAMP_Year"], "2026");
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, String>::new();
            $(
                map.insert(
                    ::std::string::ToString::to_string(&$key),
                    ::std::string::ToString::to_string(&$value),
                );
            )+
            map
        }
    };
}
