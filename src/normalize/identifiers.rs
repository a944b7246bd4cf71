use super::keywords::ReservedWords;
use super::{IDENTIFIER_PLACEHOLDER, NUM_PLACEHOLDER};

/// Word characters: Unicode alphanumerics and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replace every word that is not a reserved keyword with `var`.
///
/// Keywords are emitted in their lowercase table spelling. The `num`
/// placeholder is kept so already-normalized text passes through unchanged.
/// Everything between words is copied as is.
pub fn normalize_identifiers(text: &str, reserved: &ReservedWords) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if is_word_char(c) {
            word_start.get_or_insert(i);
            continue;
        }
        if let Some(start) = word_start.take() {
            push_word(&mut out, &text[start..i], reserved);
        }
        out.push(c);
    }
    if let Some(start) = word_start {
        push_word(&mut out, &text[start..], reserved);
    }
    out
}

fn push_word(out: &mut String, word: &str, reserved: &ReservedWords) {
    if word == NUM_PLACEHOLDER {
        out.push_str(NUM_PLACEHOLDER);
    } else {
        out.push_str(reserved.lookup(word).unwrap_or(IDENTIFIER_PLACEHOLDER));
    }
}

#[cfg(test)]
#[path = "identifiers_test.rs"]
mod tests;
