mod channel;
mod format;
mod source;
mod taxonomy;
mod value;
mod variable;
mod variable_id;

pub use channel::{Channel, ChannelSpec, TaxonomySet};
pub use format::Format;
pub use source::Source;
pub use taxonomy::{Taxonomy, TaxonomyLevel};
pub use value::TaxonomyValue;
pub use variable::{Occurrence, ParsedVariable};
pub use variable_id::VariableId;
