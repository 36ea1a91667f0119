//! Public token types for level templates.
//!
//! These types are public to enable external tooling (detail views,
//! configuration UIs) to work with the raw token stream.

use serde::{Deserialize, Serialize};

use crate::types::{Format, VariableId};

/// A single bracketed variable reference found inside a level template.
///
/// Produced fresh per template string; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Exact template text the token was matched from.
    pub raw_match: String,

    /// Variable name between the opening bracket and the first colon.
    pub variable: String,

    /// Requested output format.
    pub format: Format,

    /// Byte offset of the opening bracket in the template.
    pub start: usize,

    /// Byte length of `raw_match`.
    pub len: usize,

    /// Written as `[[name:format]]`; the resolved value is re-wrapped in
    /// literal square brackets on output.
    pub double_bracket: bool,
}

impl Token {
    /// Byte offset one past the closing bracket.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Compact identifier of the referenced variable.
    pub fn variable_id(&self) -> VariableId {
        VariableId::from_name(&self.variable)
    }
}

/// A contiguous piece of a template: literal text or a variable token.
///
/// A tokenized template is a segment sequence covering the entire input
/// with no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Literal text between or around tokens, passed through verbatim.
    Literal {
        text: String,
        /// Byte offset of the span in the template.
        start: usize,
    },
    /// A variable reference.
    Token(Token),
}

impl Segment {
    /// The template text this segment covers.
    pub fn raw_text(&self) -> &str {
        match self {
            Segment::Literal { text, .. } => text,
            Segment::Token(token) => &token.raw_match,
        }
    }

    /// Get the token if this segment is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Segment::Token(token) => Some(token),
            Segment::Literal { .. } => None,
        }
    }
}
