/// Collapse whitespace runs: a run that contains a newline becomes `\n`,
/// any other run becomes a single space.
///
/// Runs at the edges are collapsed but not removed; trimming applies to the
/// whole document, not to each fragment.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending: Option<char> = None;

    for c in text.chars() {
        if c == '\n' {
            pending = Some('\n');
        } else if c.is_whitespace() {
            pending.get_or_insert(' ');
        } else {
            if let Some(ws) = pending.take() {
                out.push(ws);
            }
            out.push(c);
        }
    }
    if let Some(ws) = pending {
        out.push(ws);
    }
    out
}

#[cfg(test)]
#[path = "whitespace_test.rs"]
mod tests;
