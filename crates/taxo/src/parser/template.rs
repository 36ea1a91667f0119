//! Level-template tokenizer.
//!
//! Two bracket grammars exist: `[[name:format]]` and `[name:format]`. The
//! tokenizer makes two passes over the raw template: double-bracket tokens
//! are located first, then single-bracket tokens, discarding any single
//! match whose span is already claimed by a double token (it is a
//! by-product of the nested brackets, not an independent reference).
//! Survivors are sorted by start offset into a non-overlapping
//! left-to-right stream.
//!
//! A bracket run with no colon, or an unterminated bracket, stays literal
//! text; templates are free-form author content and tokenizing never fails.

use winnow::combinator::{delimited, separated_pair};
use winnow::prelude::*;
use winnow::token::take_while;

use super::ast::{Segment, Token};
use crate::types::Format;

/// Tokenize a level template into an ordered, gap-free segment stream.
///
/// Concatenating the raw text of every returned segment reproduces the
/// input exactly.
pub fn tokenize(template: &str) -> Vec<Segment> {
    let mut tokens = scan_double(template);
    let claimed: Vec<(usize, usize)> = tokens.iter().map(|t| (t.start, t.end())).collect();
    tokens.extend(scan_single(template, &claimed));
    tokens.sort_by_key(|t| t.start);
    assemble(template, tokens)
}

/// Ordered variable tokens of a template, literal spans skipped.
pub fn tokens(template: &str) -> Vec<Token> {
    tokenize(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Token(token) => Some(token),
            Segment::Literal { .. } => None,
        })
        .collect()
}

/// First pass: locate `[[name:format]]` tokens.
fn scan_double(template: &str) -> Vec<Token> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(rel) = template[at..].find("[[") {
        let start = at + rel;
        match parse_at(&template[start..], double_token) {
            Some((len, variable, format)) => {
                found.push(make_token(template, start, len, variable, format, true));
                at = start + len;
            }
            None => at = start + 1,
        }
    }
    found
}

/// Second pass: locate `[name:format]` tokens outside claimed double spans.
fn scan_single(template: &str, claimed: &[(usize, usize)]) -> Vec<Token> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(rel) = template[at..].find('[') {
        let start = at + rel;
        match parse_at(&template[start..], single_token) {
            Some((len, variable, format)) => {
                let end = start + len;
                if claimed.iter().any(|&(s, e)| start >= s && end <= e) {
                    at = start + 1;
                } else {
                    found.push(make_token(template, start, len, variable, format, false));
                    at = end;
                }
            }
            None => at = start + 1,
        }
    }
    found
}

fn make_token(
    template: &str,
    start: usize,
    len: usize,
    variable: &str,
    format: &str,
    double_bracket: bool,
) -> Token {
    Token {
        raw_match: template[start..start + len].to_string(),
        variable: variable.to_string(),
        format: Format::parse(format),
        start,
        len,
        double_bracket,
    }
}

/// Run a token parser at a slice start, returning the consumed length and
/// the captured name/format on success.
fn parse_at<'i>(
    slice: &'i str,
    parser: impl Fn(&mut &'i str) -> ModalResult<(&'i str, &'i str)>,
) -> Option<(usize, &'i str, &'i str)> {
    let mut input = slice;
    let (variable, format) = parser(&mut input).ok()?;
    Some((slice.len() - input.len(), variable, format))
}

/// Parse a double-bracket token: `[[name:format]]`.
fn double_token<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    delimited("[[", separated_pair(token_ident, ':', token_ident), "]]").parse_next(input)
}

/// Parse a single-bracket token: `[name:format]`.
fn single_token<'i>(input: &mut &'i str) -> ModalResult<(&'i str, &'i str)> {
    delimited('[', separated_pair(token_ident, ':', token_ident), ']').parse_next(input)
}

/// Parse a variable name or format identifier.
fn token_ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_token_char).parse_next(input)
}

/// Characters allowed inside a name or format identifier. Brackets and the
/// name/format separator end the run; everything else is author content.
fn is_token_char(c: char) -> bool {
    c != '[' && c != ']' && c != ':'
}

/// Interleave sorted tokens with the literal spans between them.
fn assemble(template: &str, tokens: Vec<Token>) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(tokens.len() * 2 + 1);
    let mut cursor = 0;
    for token in tokens {
        debug_assert!(token.start >= cursor, "token stream must not overlap");
        if token.start > cursor {
            segments.push(Segment::Literal {
                text: template[cursor..token.start].to_string(),
                start: cursor,
            });
        }
        cursor = token.end();
        segments.push(Segment::Token(token));
    }
    if cursor < template.len() {
        segments.push(Segment::Literal {
            text: template[cursor..].to_string(),
            start: cursor,
        });
    }
    segments
}
