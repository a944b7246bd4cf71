/// String and char literal handling shared by the comment stripper and
/// the literal replacement pass.
///
/// Both passes must agree on where a literal ends, otherwise a `//` inside
/// a string could be taken for a comment (or a quote inside a comment for a
/// string opener). All delimiters are ASCII, so scanning bytes is safe on
/// UTF-8 input: a multi-byte sequence never contains an ASCII byte.
use super::{Fragment, LiteralToken, push_code};

/// Return the byte index just past the quote that closes the literal opened
/// at `start`, or `None` if the input ends first.
///
/// A backslash escapes the following byte, so `\"` and `\'` never close.
pub fn closing_quote(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Split comment-free text into code fragments and literal tokens.
///
/// Double-quoted runs become `LiteralToken::Str`, single-quoted runs become
/// `LiteralToken::Char`. An unterminated literal swallows the rest of the
/// input and emits nothing.
pub fn replace_literals(text: &str) -> Vec<Fragment> {
    let bytes = text.as_bytes();
    let mut fragments = Vec::new();
    let mut code_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let token = match bytes[i] {
            b'"' => LiteralToken::Str,
            b'\'' => LiteralToken::Char,
            _ => {
                i += 1;
                continue;
            }
        };
        push_code(&mut fragments, &text[code_start..i]);
        let Some(end) = closing_quote(bytes, i) else {
            return fragments;
        };
        fragments.push(Fragment::Literal(token));
        i = end;
        code_start = end;
    }

    push_code(&mut fragments, &text[code_start..]);
    fragments
}

#[cfg(test)]
#[path = "literals_test.rs"]
mod tests;
