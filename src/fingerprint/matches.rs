use std::collections::HashMap;

use serde::Serialize;

use super::effective_k;
use super::rolling::hashes;

/// A pair of character offsets whose k-grams hash equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MatchPosition {
    pub offset1: usize,
    pub offset2: usize,
}

impl From<(usize, usize)> for MatchPosition {
    fn from((offset1, offset2): (usize, usize)) -> Self {
        Self { offset1, offset2 }
    }
}

/// All `(offset1, offset2)` pairs where a k-gram of `text1` and a k-gram of
/// `text2` share a hash, sorted ascending.
///
/// This is an all-pairs join: a k-gram occurring twice in `text1` and once
/// in `text2` produces two positions. Empty when either text is empty or
/// `k == 0`; `k` is clamped like in `similarity`.
pub fn find_matches(text1: &str, text2: &str, k: usize) -> Vec<MatchPosition> {
    if k == 0 || text1.is_empty() || text2.is_empty() {
        return Vec::new();
    }
    let k = effective_k(k, text1, text2);

    let mut index: HashMap<u64, Vec<usize>> = HashMap::new();
    for (offset, hash) in hashes(text1, k).into_iter().enumerate() {
        index.entry(hash).or_default().push(offset);
    }

    let mut matches: Vec<MatchPosition> = Vec::new();
    for (offset2, hash) in hashes(text2, k).into_iter().enumerate() {
        if let Some(offsets1) = index.get(&hash) {
            matches.extend(
                offsets1
                    .iter()
                    .map(|&offset1| MatchPosition { offset1, offset2 }),
            );
        }
    }

    matches.sort_unstable();
    matches
}

#[cfg(test)]
#[path = "matches_test.rs"]
mod tests;
