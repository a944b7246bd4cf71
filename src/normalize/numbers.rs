/// Numeric literal replacement.
///
/// A literal starts at an ASCII digit that does not continue an identifier
/// (`x1` stays a word). It spans the digits, one optional fractional part,
/// and any identifier characters glued to the end: single-letter suffixes
/// like `1.5f` or `10L`, but also `0x1F`, `1e9` or `10UL`. Swallowing the
/// tail keeps `num` from fusing with a following word.
use super::identifiers::is_word_char;
use super::{Fragment, LiteralToken, push_code};

/// Append `code` to `fragments`, with every numeric literal replaced by `LiteralToken::Num`.
pub fn split_numbers(code: &str, fragments: &mut Vec<Fragment>) {
    let mut code_start = 0;
    let mut i = 0;
    let mut prev_is_word = false;

    while let Some(c) = code[i..].chars().next() {
        if c.is_ascii_digit() && !prev_is_word {
            push_code(fragments, &code[code_start..i]);
            fragments.push(Fragment::Literal(LiteralToken::Num));
            i += literal_len(&code[i..]);
            code_start = i;
            prev_is_word = false;
            continue;
        }
        prev_is_word = is_word_char(c);
        i += c.len_utf8();
    }

    push_code(fragments, &code[code_start..]);
}

/// Byte length of the numeric literal at the start of `rest`.
fn literal_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let mut len = count_digits(bytes);
    if bytes.get(len) == Some(&b'.') && bytes.get(len + 1).is_some_and(u8::is_ascii_digit) {
        len += 1 + count_digits(&bytes[len + 1..]);
    }
    let tail = rest[len..]
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(rest.len() - len, |(j, _)| j);
    len + tail
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
#[path = "numbers_test.rs"]
mod tests;
