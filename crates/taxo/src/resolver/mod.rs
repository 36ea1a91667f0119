//! Resolution engine: source classification, reference lists, formatting,
//! and structure assembly.
//!
//! Everything here is synchronous and pure with respect to its inputs; the
//! only asynchronous collaborator is whatever loads reference lists, and it
//! talks to this module solely through the install path.

mod context;
mod engine;
mod error;
mod evaluator;
mod formats;
mod registry;
mod sources;

pub use context::ResolutionContext;
pub use engine::Engine;
pub use error::{InstallError, MissingReport, MissingVariable, compute_suggestions};
pub use evaluator::{
    RenderedSegment, ResolvePass, Resolution, ResolvedChannel, ResolvedLevel, VariableCollector,
    render_token, resolve_channel, resolve_channel_with, resolve_level,
};
pub use formats::{apply_format, slugify};
pub use registry::{
    FetchTicket, ListId, ReferenceEntry, ReferenceList, ReferenceLists, SelectionKey,
};
pub use sources::{RawValue, SourceTable, VariableBinding};
