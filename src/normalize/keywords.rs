/// Reserved words that survive identifier normalization.
///
/// A union of control-flow, type and visibility keywords from C/C++, Java,
/// Python and JavaScript, plus the boolean and null literals. Every entry is
/// lowercase and the slice is sorted so lookups can binary search.
pub const KEYWORDS: &[&str] = &[
    "abstract", "and", "as", "assert", "async", "auto", "await", "bool", "boolean", "break",
    "byte", "case", "catch", "char", "class", "const", "continue", "debugger", "def", "default",
    "del", "delete", "do", "double", "elif", "else", "enum", "except", "explicit", "export",
    "extends", "extern", "false", "final", "finally", "float", "for", "friend", "from",
    "function", "global", "goto", "if", "implements", "import", "in", "inline", "instanceof",
    "int", "interface", "is", "lambda", "let", "long", "namespace", "native", "new", "none",
    "nonlocal", "not", "null", "nullptr", "of", "operator", "or", "package", "pass", "private",
    "protected", "public", "raise", "register", "return", "short", "signed", "sizeof", "static",
    "struct", "super", "switch", "synchronized", "template", "this", "throw", "throws",
    "transient", "true", "try", "typedef", "typename", "typeof", "undefined", "union",
    "unsigned", "using", "var", "virtual", "void", "volatile", "while", "with", "yield",
];

/// The built-in reserved-word table used by `Normalizer::default()`.
pub static BUILTIN: ReservedWords = ReservedWords::new(KEYWORDS);

/// An immutable reserved-word table.
///
/// `words` must be lowercase and sorted ascending.
#[derive(Debug, Clone, Copy)]
pub struct ReservedWords {
    words: &'static [&'static str],
}

impl ReservedWords {
    pub const fn new(words: &'static [&'static str]) -> Self {
        Self { words }
    }

    /// Case-insensitive lookup; returns the table's lowercase spelling.
    pub fn lookup(&self, word: &str) -> Option<&'static str> {
        let found = if word.chars().any(char::is_uppercase) {
            self.words.binary_search(&word.to_lowercase().as_str())
        } else {
            self.words.binary_search(&word)
        };
        found.ok().map(|idx| self.words[idx])
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
#[path = "keywords_test.rs"]
mod tests;
