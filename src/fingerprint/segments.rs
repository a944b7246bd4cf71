/// Contiguous shared segments of two canonical texts.
///
/// A shared run of `n + k - 1` characters shows up as `n` positions along
/// one diagonal: `(o1, o2), (o1 + 1, o2 + 1), ...`. `build_segments` merges
/// every maximal diagonal run of a full match list.
///
/// Repetitive code makes the full match list grow with the product of the
/// two lengths, so reports use `tile_segments` instead: it walks the second
/// text once and greedily extends the longest match from a hash index, each
/// character belonging to at most one segment on either side.
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::rolling::hashes;
use super::{MatchPosition, effective_k};

/// Candidate offsets in the first text tried per window of the second.
const MAX_CANDIDATES: usize = 64;

/// Segments kept per pair by `tile_segments`; the longest win.
pub const MAX_SEGMENTS: usize = 256;

/// A run of characters shared by both texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct MatchSegment {
    pub start1: usize,
    pub start2: usize,
    pub len: usize,
}

/// Merge diagonal runs of `matches` into segments of `len` characters,
/// where `k` is the k-gram width the matches were computed with.
///
/// Segments are ordered by `(start1, start2)`. Overlapping runs on different
/// diagonals are reported separately.
pub fn build_segments(matches: &[MatchPosition], k: usize) -> Vec<MatchSegment> {
    if k == 0 {
        return Vec::new();
    }
    let present: HashSet<(usize, usize)> =
        matches.iter().map(|m| (m.offset1, m.offset2)).collect();

    let mut starts: Vec<(usize, usize)> = present
        .iter()
        .copied()
        .filter(|&(o1, o2)| o1 == 0 || o2 == 0 || !present.contains(&(o1 - 1, o2 - 1)))
        .collect();
    starts.sort_unstable();

    starts
        .into_iter()
        .map(|(start1, start2)| {
            let run = extend_forward(&present, start1, start2);
            MatchSegment {
                start1,
                start2,
                len: run + k - 1,
            }
        })
        .collect()
}

/// Number of consecutive positions on the diagonal starting at `(o1, o2)`.
fn extend_forward(present: &HashSet<(usize, usize)>, o1: usize, o2: usize) -> usize {
    let mut run = 1;
    while present.contains(&(o1 + run, o2 + run)) {
        run += 1;
    }
    run
}

/// Greedy non-overlapping tiling of the text shared by `text1` and `text2`.
///
/// Every segment is at least `k` characters long (after clamping `k` like
/// `similarity` does) and no character of either text lies in two segments.
/// At most `MAX_SEGMENTS` segments are returned, ordered by
/// `(start1, start2)`.
pub fn tile_segments(text1: &str, text2: &str, k: usize) -> Vec<MatchSegment> {
    if k == 0 || text1.is_empty() || text2.is_empty() {
        return Vec::new();
    }
    let k = effective_k(k, text1, text2);
    let chars1: Vec<char> = text1.chars().collect();
    let chars2: Vec<char> = text2.chars().collect();

    let mut index: HashMap<u64, Vec<usize>> = HashMap::new();
    for (offset, hash) in hashes(text1, k).into_iter().enumerate() {
        index.entry(hash).or_default().push(offset);
    }

    let hashes2 = hashes(text2, k);
    let mut covered1 = vec![false; chars1.len()];
    let mut segments: Vec<MatchSegment> = Vec::new();
    let mut offset2 = 0;
    while offset2 < hashes2.len() {
        let best = index.get(&hashes2[offset2]).and_then(|offsets1| {
            offsets1
                .iter()
                .filter(|&&o1| !covered1[o1])
                .take(MAX_CANDIDATES)
                .map(|&o1| (common_run(&chars1, &chars2, &covered1, o1, offset2), o1))
                .filter(|&(len, _)| len >= k)
                // longest run, earliest start on ties
                .max_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.cmp(&a.1)))
        });
        match best {
            Some((len, start1)) => {
                covered1[start1..start1 + len].fill(true);
                segments.push(MatchSegment {
                    start1,
                    start2: offset2,
                    len,
                });
                offset2 += len;
            }
            None => offset2 += 1,
        }
    }

    if segments.len() > MAX_SEGMENTS {
        segments.sort_unstable_by(|a, b| b.len.cmp(&a.len).then_with(|| a.cmp(b)));
        segments.truncate(MAX_SEGMENTS);
    }
    segments.sort_unstable();
    segments
}

/// Length of the common run at `(o1, o2)`, stopping at characters of the
/// first text already claimed by a segment.
fn common_run(
    chars1: &[char],
    chars2: &[char],
    covered1: &[bool],
    o1: usize,
    o2: usize,
) -> usize {
    chars1[o1..]
        .iter()
        .zip(&covered1[o1..])
        .zip(&chars2[o2..])
        .take_while(|&((c1, &taken), c2)| !taken && c1 == c2)
        .count()
}

#[cfg(test)]
#[path = "segments_test.rs"]
mod tests;
