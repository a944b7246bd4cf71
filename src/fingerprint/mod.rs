/// k-gram fingerprinting and comparison of canonical texts.
///
/// ## Algorithm
///
/// **Hashing:** every window of `k` characters is hashed with a polynomial
/// rolling hash (Rabin-Karp). Each shift updates the previous hash in O(1),
/// so a whole document is fingerprinted in O(n).
///
/// **Scoring:** the distinct hashes of both documents are compared as sets;
/// the score is their Jaccard index. Equal hashes are taken as equal
/// k-grams, so collisions can only inflate the score, by at most the
/// collision rate of the modulus.
///
/// **Locating:** hashes of the first document are indexed by offset and the
/// second document's hash sequence is joined against that index, yielding
/// every `(offset1, offset2)` pair whose windows hash equal. Adjacent
/// diagonal pairs can be merged into segments; reports tile the shared text
/// greedily instead, which stays linear on repetitive input.
///
/// Every function here is pure; callers may run comparisons concurrently.
mod matches;
mod rolling;
mod segments;
mod similarity;

pub use matches::{MatchPosition, find_matches};
pub use rolling::{BASE, MODULUS, hashes, unique_hashes};
pub use segments::{MAX_SEGMENTS, MatchSegment, build_segments, tile_segments};
pub use similarity::similarity;

/// Default k-gram width.
pub const DEFAULT_K: usize = 5;

/// Clamp `k` to the shorter of two texts (in characters).
///
/// Returns `k` unchanged when either text is empty, since there is nothing
/// to clamp against.
pub fn effective_k(k: usize, text1: &str, text2: &str) -> usize {
    let min_len = text1.chars().count().min(text2.chars().count());
    if min_len > 0 && k > min_len {
        min_len
    } else {
        k
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
