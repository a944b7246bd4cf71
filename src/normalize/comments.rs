/// Remove `//` line comments and `/* */` block comments.
///
/// Quoted literals are copied through untouched so comment markers inside
/// them survive. A line comment ends before its newline (the newline is
/// kept); a block comment is replaced by one space so the tokens around it
/// stay separate. Either kind left open at end of input runs to the end.
use super::literals::closing_quote;

pub fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut out = String::with_capacity(len);
    let mut copy_from = 0;
    let mut i = 0;

    while i < len {
        match (bytes[i], bytes.get(i + 1)) {
            (b'"' | b'\'', _) => {
                i = closing_quote(bytes, i).unwrap_or(len);
            }
            (b'/', Some(&b'/')) => {
                out.push_str(&text[copy_from..i]);
                i = bytes[i..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(len, |p| i + p);
                copy_from = i;
            }
            (b'/', Some(&b'*')) => {
                out.push_str(&text[copy_from..i]);
                out.push(' ');
                i = block_end(bytes, i + 2).unwrap_or(len);
                copy_from = i;
            }
            _ => i += 1,
        }
    }

    out.push_str(&text[copy_from..]);
    out
}

/// Index just past the `*/` that closes a block comment whose body starts at `from`.
fn block_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(2)
        .position(|w| w == b"*/")
        .map(|p| from + p + 2)
}

#[cfg(test)]
#[path = "comments_test.rs"]
mod tests;
