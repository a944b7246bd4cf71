/// Language-agnostic source normalization.
///
/// Reduces source text to a canonical form in which renamed variables,
/// reformatting, comments and changed literal values no longer matter.
///
/// ## Pipeline
///
/// The passes run in a fixed order; each one relies on the previous:
///
/// 1. **Comments** are removed, honoring quoted literals so that `"//"`
///    is not a comment and `/* it's */` does not open a char literal.
/// 2. **String/char literals** collapse to `"str"` / `'c'`.
/// 3. **Numeric literals** collapse to `num`.
/// 4. **Whitespace** runs collapse to one space (or one newline when the
///    run contains a line break); the document is trimmed.
/// 5. **Case**: everything outside literal tokens is lowercased.
/// 6. **Identifiers**: words outside the reserved-keyword table become `var`.
///
/// Passes 2 and 3 produce opaque `Fragment::Literal` tokens that the later
/// passes skip, so `str` and `num` are never rewritten to `var`.
mod comments;
mod identifiers;
pub mod keywords;
mod literals;
mod numbers;
mod whitespace;

use comments::strip_comments;
use identifiers::normalize_identifiers;
use keywords::{BUILTIN, ReservedWords};
use literals::replace_literals;
use numbers::split_numbers;
use whitespace::collapse_whitespace;

/// Replacement for every non-keyword identifier.
pub const IDENTIFIER_PLACEHOLDER: &str = "var";
/// Replacement for every numeric literal.
pub const NUM_PLACEHOLDER: &str = "num";

/// Canonical token emitted for a substituted literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralToken {
    Str,
    Char,
    Num,
}

impl LiteralToken {
    pub fn as_str(self) -> &'static str {
        match self {
            LiteralToken::Str => "\"str\"",
            LiteralToken::Char => "'c'",
            LiteralToken::Num => NUM_PLACEHOLDER,
        }
    }
}

/// A piece of partially normalized text: either code still subject to the
/// remaining passes, or a literal token that is already final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Code(String),
    Literal(LiteralToken),
}

/// Append code text, merging with a preceding code fragment. Empty text is dropped.
fn push_code(fragments: &mut Vec<Fragment>, text: &str) {
    if text.is_empty() {
        return;
    }
    match fragments.last_mut() {
        Some(Fragment::Code(prev)) => prev.push_str(text),
        _ => fragments.push(Fragment::Code(text.to_string())),
    }
}

/// Apply `f` to every code fragment in place.
fn map_code(fragments: &mut [Fragment], f: impl Fn(&str) -> String) {
    for fragment in fragments {
        if let Fragment::Code(code) = fragment {
            *code = f(code);
        }
    }
}

/// Source normalizer bound to a reserved-word table.
///
/// Stateless apart from the table reference, so a single instance can be
/// shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    reserved: &'static ReservedWords,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&BUILTIN)
    }
}

impl Normalizer {
    pub fn new(reserved: &'static ReservedWords) -> Self {
        Self { reserved }
    }

    pub fn reserved(&self) -> &'static ReservedWords {
        self.reserved
    }

    /// Normalize `text` to its canonical form. Never fails; empty input
    /// yields empty output.
    pub fn normalize(&self, text: &str) -> String {
        let mut fragments = self.tokenize(text);

        map_code(&mut fragments, collapse_whitespace);
        trim_document(&mut fragments);
        map_code(&mut fragments, |code| {
            normalize_identifiers(&code.to_lowercase(), self.reserved)
        });

        let mut out = String::with_capacity(text.len());
        for fragment in &fragments {
            match fragment {
                Fragment::Code(code) => out.push_str(code),
                Fragment::Literal(token) => out.push_str(token.as_str()),
            }
        }
        out
    }

    /// Passes 1-3: strip comments, then cut out string, char and numeric literals.
    fn tokenize(&self, text: &str) -> Vec<Fragment> {
        let stripped = strip_comments(text);
        let mut fragments = Vec::new();
        for fragment in replace_literals(&stripped) {
            match fragment {
                Fragment::Code(code) => split_numbers(&code, &mut fragments),
                literal => fragments.push(literal),
            }
        }
        fragments
    }
}

/// Trim leading whitespace of the first fragment and trailing whitespace of
/// the last; literal tokens at either end are left alone.
fn trim_document(fragments: &mut [Fragment]) {
    if let Some(Fragment::Code(first)) = fragments.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(Fragment::Code(last)) = fragments.last_mut() {
        last.truncate(last.trim_end().len());
    }
}

/// Normalize with the built-in reserved-word table.
pub fn normalize(text: &str) -> String {
    Normalizer::default().normalize(text)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
